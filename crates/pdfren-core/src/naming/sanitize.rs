//! Filename sanitization.

/// Name used when sanitization leaves nothing usable.
pub const PLACEHOLDER_FILENAME: &str = "document.pdf";

/// Whether a character may appear in an output filename.
pub fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.')
}

/// Strip every character outside alphanumerics, space, hyphen, underscore
/// and period. Returns `None` when nothing but dots and spaces remains.
pub fn strip_disallowed(name: &str) -> Option<String> {
    let cleaned: String = name.chars().filter(|&c| is_allowed(c)).collect();
    if cleaned.chars().all(|c| c == '.' || c == ' ') {
        None
    } else {
        Some(cleaned)
    }
}

/// Sanitize a candidate filename, substituting [`PLACEHOLDER_FILENAME`] when
/// nothing usable remains. Idempotent.
pub fn sanitize_filename(name: &str) -> String {
    sanitize_filename_or(name, PLACEHOLDER_FILENAME)
}

/// Sanitize a candidate filename with a custom placeholder.
///
/// The placeholder is sanitized too; if it collapses as well the built-in
/// placeholder is used.
pub fn sanitize_filename_or(name: &str, placeholder: &str) -> String {
    strip_disallowed(name)
        .or_else(|| strip_disallowed(placeholder))
        .unwrap_or_else(|| PLACEHOLDER_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_allowed_characters() {
        assert_eq!(
            sanitize_filename("CTI Sales Order SV004455 Acme_Corp-2.pdf"),
            "CTI Sales Order SV004455 Acme_Corp-2.pdf"
        );
    }

    #[test]
    fn test_strips_illegal_characters() {
        assert_eq!(
            sanitize_filename(r#"CTI-<A>:"B"/C\D|E?F*.pdf"#),
            "CTI-ABCDEF.pdf"
        );
        assert_eq!(sanitize_filename("Acme, Inc. (West).pdf"), "Acme Inc. West.pdf");
    }

    #[test]
    fn test_keeps_unicode_letters() {
        assert_eq!(sanitize_filename("Müller GmbH.pdf"), "Müller GmbH.pdf");
    }

    #[test]
    fn test_collapse_uses_placeholder() {
        assert_eq!(sanitize_filename(""), PLACEHOLDER_FILENAME);
        assert_eq!(sanitize_filename("<>:?*"), PLACEHOLDER_FILENAME);
        assert_eq!(sanitize_filename("/../"), PLACEHOLDER_FILENAME);
        assert_eq!(sanitize_filename(" . "), PLACEHOLDER_FILENAME);
    }

    #[test]
    fn test_custom_placeholder() {
        assert_eq!(sanitize_filename_or("???", "unnamed.pdf"), "unnamed.pdf");
        assert_eq!(sanitize_filename_or("???", "a/b.pdf"), "ab.pdf");
        assert_eq!(sanitize_filename_or("???", "///"), PLACEHOLDER_FILENAME);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "plain.pdf",
            "CTI-<A>.pdf",
            " . ",
            "a\tb\nc.pdf",
            "Rechnung №12 für Kunde.pdf",
            "../../etc/passwd",
            "\u{0}\u{7f}",
        ];

        for input in inputs {
            let once = sanitize_filename(input);
            assert_eq!(sanitize_filename(&once), once, "input: {:?}", input);
            assert!(!once.is_empty());
            assert!(once.chars().all(is_allowed));
        }
    }
}
