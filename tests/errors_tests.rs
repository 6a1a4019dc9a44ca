use reboot_terminal::errors::{PanelError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_terminal_error() {
        let error = PanelError::terminal("raw mode unavailable");

        assert!(matches!(error, PanelError::Terminal(_)));
        assert!(error.to_string().contains("Terminal Error"));
        assert!(error.to_string().contains("raw mode unavailable"));
    }

    #[test]
    fn test_validation_error() {
        let error = PanelError::validation("min > max");

        assert!(matches!(error, PanelError::Validation(_)));
        assert_eq!(error.format_simple(), "Validation Error: min > max");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            PanelError::terminal("a"),
            PanelError::config("b"),
            PanelError::validation("c"),
            PanelError::logging("d"),
            PanelError::runtime("e"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(PanelError::code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_colored_format_contains_code_and_message() {
        let error = PanelError::config("bad file");
        let colored = error.format_colored();
        assert!(colored.contains("E002"));
        assert!(colored.contains("bad file"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: PanelError = io_error.into();

        assert!(matches!(error, PanelError::Terminal(_)));
        assert_eq!(error.message(), "pipe closed");
    }

    #[test]
    fn test_question_mark_propagation() {
        fn open_terminal() -> Result<()> {
            Err(std::io::Error::other("no tty"))?;
            Ok(())
        }

        let err = open_terminal().unwrap_err();
        assert_eq!(err.code(), "E001");
        assert!(err.source().is_none());
    }
}
