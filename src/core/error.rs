//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Rule definition is not valid JSON or has the wrong shape
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A color rule names a color that does not exist
    #[error("Color name not exists: '{color}' (rule text '{pattern}')")]
    UnknownColor { pattern: String, color: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an unknown color error for a rule
    pub fn unknown_color(pattern: impl Into<String>, color: impl Into<String>) -> Self {
        LoggerError::UnknownColor {
            pattern: pattern.into(),
            color: color.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// True for errors raised while loading or applying configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::JsonError(_)
                | LoggerError::UnknownColor { .. }
                | LoggerError::InvalidConfiguration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unknown_color("x", "bogus");
        assert!(matches!(err, LoggerError::UnknownColor { .. }));

        let err = LoggerError::config("ColorRuleSet", "empty pattern");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::writer("closed");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unknown_color("x", "bogus");
        assert_eq!(
            err.to_string(),
            "Color name not exists: 'bogus' (rule text 'x')"
        );

        let err = LoggerError::config("registry", "bad pattern");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for registry: bad pattern"
        );
    }

    #[test]
    fn test_is_configuration() {
        assert!(LoggerError::unknown_color("a", "b").is_configuration());
        assert!(LoggerError::config("a", "b").is_configuration());
        assert!(!LoggerError::writer("w").is_configuration());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(LoggerError::from(json_err).is_configuration());
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = LoggerError::io_operation("reading color file", "colors.json", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("reading color file"));
        assert!(err.to_string().contains("colors.json"));
    }
}
