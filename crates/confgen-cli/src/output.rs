//! Terminal output for the confgen CLI, styled with the [`console`] crate.
//!
//! Everything printed here is advisory progress for the operator, not a
//! stable machine-readable format.

use std::path::Path;

use console::style;

/// Print an input file being read, e.g. `Reading template: server.tmpl`.
pub fn print_reading(what: &str, path: &Path) {
    println!("{} {}", style(format!("Reading {what}:")).dim(), path.display());
}

/// Print a key-value detail line with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print the per-file confirmation line for a successful write.
pub fn print_created(path: &Path) {
    println!("{} {}", style("Created:").green(), path.display());
}

/// Print the dry-run counterpart of [`print_created`].
pub fn print_would_create(path: &Path) {
    println!("{} {}", style("Would create:").dim(), path.display());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a warning message prefixed with yellow `[WARN]`.
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// Print an error message prefixed with red `[ERROR]`.
pub fn print_error(text: &str) {
    println!("{} {}", style("[ERROR]").red().bold(), text);
}
