use std::path::Path;

use crate::error::{ConfgenError, Result};

/// Template text, loaded once and held read-only for the whole run.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    /// Read the template file as UTF-8 text.
    ///
    /// A missing file and any other read failure (including invalid UTF-8)
    /// are reported as distinct errors; both are fatal to the run.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfgenError::TemplateNotFound {
                path: path.to_path_buf(),
                source: e,
            },
            _ => ConfgenError::TemplateRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        tracing::debug!("template loaded: {} byte(s)", text.len());
        Ok(Self { text })
    }

    /// The full template text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reads_full_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.conf.tmpl");
        std::fs::write(&path, "Host: ${SERVER_IP}\nPort: {{PORT}}\n").unwrap();

        let template = Template::load(&path).unwrap();
        assert_eq!(template.text(), "Host: ${SERVER_IP}\nPort: {{PORT}}\n");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Template::load(Path::new("/nonexistent/confgen-template.tmpl"));
        assert!(matches!(
            result,
            Err(ConfgenError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.tmpl");
        std::fs::write(&path, [0x66u8, 0xff, 0xfe, 0x6f]).unwrap();

        let result = Template::load(&path);
        assert!(matches!(result, Err(ConfgenError::TemplateRead { .. })));
    }
}
