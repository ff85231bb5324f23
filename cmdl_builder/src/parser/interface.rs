use crate::parser::base::Error;
use crate::parser::ErrorContext;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: Error);
    fn print_error_context(&self, error_context: ErrorContext);
    fn print_guidance(&self, guidance: &str);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: Error) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }

    fn print_guidance(&self, guidance: &str) {
        eprintln!("{guidance}");
    }
}


#[cfg(test)]
mod tests {
    use super::util::InMemoryInterface;
    use super::*;
    use crate::parser::{ConfigError, ParseError};

    #[test]
    fn in_memory_message() {
        // Setup
        let interface = InMemoryInterface::default();
        let handle = interface.clone();

        // Execute
        interface.print("abc".to_string());
        interface.print("123".to_string());

        // Verify
        assert_eq!(handle.consume_message(), "abc\n123");
    }

    #[test]
    fn in_memory_error() {
        // Setup
        let interface = InMemoryInterface::default();
        let error = Error::from(ParseError::MissingValue {
            flag: "-x".to_string(),
            offset: 0,
        });

        // Execute
        interface.print_error(error);
        interface.print_error_context(ErrorContext::new(1, vec!["p".to_string(), "-x".to_string()]));
        interface.print_guidance("Try --help!");

        // Verify
        assert_eq!(interface.guidance(), Some("Try --help!".to_string()));
        let (message, error, error_context) = interface.consume();
        assert_eq!(message, None);
        assert_eq!(error, Some("Parse error: Missing value for '-x'.".to_string()));
        assert_eq!(error_context, Some("p -x\n  ^".to_string()));
    }

    #[test]
    fn console_smoke() {
        let console = ConsoleInterface::default();
        console.print(String::default());
        console.print_error(Error::from(ConfigError("message".to_string())));
    }
}
