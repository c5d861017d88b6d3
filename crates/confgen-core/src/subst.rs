//! Placeholder substitution over template text.
//!
//! Two placeholder syntaxes are recognized, `${NAME}` and `{{NAME}}`, and both
//! may appear in the same template. Substitution builds one literal token per
//! variable and syntax, then rewrites the template in a single left-to-right
//! scan: every token occurrence is replaced, placeholders naming unknown
//! variables pass through verbatim, and replacement values are never
//! re-scanned. Tokens are plain strings, so variable names containing
//! punctuation match literally.

/// A literal placeholder token and the value that replaces it.
struct Token<'a> {
    text: String,
    value: &'a str,
}

/// Build the token set for a variable mapping: dollar-brace forms first, then
/// double-brace forms, each in mapping order. When two tokens match at the
/// same position, the earlier one in this order wins.
fn tokens_for<'a>(vars: &[(&'a str, &'a str)]) -> Vec<Token<'a>> {
    let mut tokens = Vec::with_capacity(vars.len() * 2);
    for &(name, value) in vars {
        tokens.push(Token {
            text: format!("${{{name}}}"),
            value,
        });
    }
    for &(name, value) in vars {
        tokens.push(Token {
            text: format!("{{{{{name}}}}}"),
            value,
        });
    }
    tokens
}

/// Replace every placeholder occurrence that names a variable in `vars`.
///
/// Pure function of (template, mapping); matching is exact and
/// case-sensitive. An empty string is a valid replacement value.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let tokens = tokens_for(vars);
    if tokens.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let mut next: Option<(usize, &Token)> = None;
        for token in &tokens {
            if let Some(pos) = rest.find(&token.text) {
                if next.map_or(true, |(best, _)| pos < best) {
                    next = Some((pos, token));
                }
            }
        }

        match next {
            Some((pos, token)) => {
                out.push_str(&rest[..pos]);
                out.push_str(token.value);
                rest = &rest[pos + token.text.len()..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_brace_form() {
        let vars = [("SERVER_IP", "192.168.1.10")];
        assert_eq!(substitute("ip=${SERVER_IP}", &vars), "ip=192.168.1.10");
    }

    #[test]
    fn test_double_brace_form() {
        let vars = [("PORT", "8080")];
        assert_eq!(substitute("port={{PORT}}", &vars), "port=8080");
    }

    #[test]
    fn test_both_forms_resolve_to_same_value() {
        let vars = [("HOST", "alpha")];
        assert_eq!(substitute("${HOST} and {{HOST}}", &vars), "alpha and alpha");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let vars = [("X", "v")];
        assert_eq!(substitute("${X} ${X} ${X}", &vars), "v v v");
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        let vars = [("KNOWN", "yes")];
        assert_eq!(
            substitute("${KNOWN} ${UNKNOWN} {{ALSO_UNKNOWN}}", &vars),
            "yes ${UNKNOWN} {{ALSO_UNKNOWN}}"
        );
    }

    #[test]
    fn test_empty_value_is_valid() {
        let vars = [("GONE", "")];
        assert_eq!(substitute("a${GONE}b", &vars), "ab");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let vars = [("Port", "1")];
        assert_eq!(substitute("${PORT} ${Port}", &vars), "${PORT} 1");
    }

    #[test]
    fn test_punctuation_in_names_matches_literally() {
        let vars = [("HOST.IP", "10.0.0.1"), ("A+B", "sum")];
        assert_eq!(
            substitute("ip=${HOST.IP} v={{A+B}}", &vars),
            "ip=10.0.0.1 v=sum"
        );
    }

    #[test]
    fn test_substituted_values_never_rescanned() {
        let vars = [("A", "${B}"), ("B", "x")];
        assert_eq!(substitute("${A} ${B}", &vars), "${B} x");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let vars = [("A", "1"), ("B", "2")];
        assert_eq!(substitute("${A}${B}{{A}}", &vars), "121");
    }

    #[test]
    fn test_no_variables_returns_template_unchanged() {
        assert_eq!(substitute("plain ${TEXT}", &[]), "plain ${TEXT}");
    }

    #[test]
    fn test_overlapping_names_resolve_in_mapping_order() {
        // "${X}}" is both "${X}" + "}" and the whole token for a variable
        // literally named "X}"; the earlier mapping entry wins.
        let vars = [("X", "1"), ("X}", "2")];
        assert_eq!(substitute("${X}}", &vars), "1}");
    }

    #[test]
    fn test_device_config_scenario() {
        let template = "Host: ${SERVER_IP}, Port: {{PORT}}, User: ${USERNAME}";
        let vars = [
            ("SERVER_IP", "192.168.1.10"),
            ("PORT", "8080"),
            ("USERNAME", "admin"),
        ];
        assert_eq!(
            substitute(template, &vars),
            "Host: 192.168.1.10, Port: 8080, User: admin"
        );
    }
}
