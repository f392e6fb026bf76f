//! Error types for the mock generation pipeline.
//!
//! Every condition here is fatal: stages return them with `?` and the binary
//! reports the first one and exits non-zero. Nothing is written to disk once
//! an error has been produced.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mockgen operations
#[derive(Debug, Error)]
pub enum MockgenError {
    /// A `.mockgen.toml` exists but cannot be read, parsed or validated
    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// The source file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source text does not parse into a valid tree
    #[error("Parse error in {}:{line}:{column}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// An interface method element binds zero or several names
    #[error(
        "Malformed method element in interface {interface} at line {line}: expected exactly one method name, found {}",
        describe_names(.names)
    )]
    MalformedMethod {
        interface: String,
        line: usize,
        names: Vec<String>,
    },

    /// An interface element that is not a method signature
    #[error("Unsupported element `{element}` in interface {interface} at line {line}: only method signatures are supported")]
    UnsupportedElement {
        interface: String,
        line: usize,
        element: String,
    },

    /// A parameter or result type that is not a bare named type
    #[error("Unsupported type shape in {location} at line {line}: `{ty}` is a {shape}, only bare named types are supported")]
    UnsupportedType {
        location: String,
        line: usize,
        ty: String,
        shape: String,
    },

    /// The source file declares no interface, so there is nothing to mock
    #[error("No interfaces found in {}", .path.display())]
    NoInterfaces { path: PathBuf },

    /// Synthesized text is not valid source once assembled
    #[error("Generated code for {} failed to format: {message}", .path.display())]
    Format { path: PathBuf, message: String },

    /// The destination cannot be created or overwritten
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MockgenError {
    /// Create a format error for the given destination
    pub fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error for the given file
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Short category name, used as a structured logging field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Read { .. } => "read",
            Self::Parse { .. } => "parse",
            Self::MalformedMethod { .. } => "malformed_method",
            Self::UnsupportedElement { .. } => "unsupported_element",
            Self::UnsupportedType { .. } => "unsupported_type",
            Self::NoInterfaces { .. } => "no_interfaces",
            Self::Format { .. } => "format",
            Self::Write { .. } => "write",
        }
    }
}

fn describe_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        format!("{} ({})", names.len(), names.join(", "))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, MockgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_method_message_lists_names() {
        let err = MockgenError::MalformedMethod {
            interface: "Foo".to_string(),
            line: 4,
            names: vec!["A".to_string(), "B".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Malformed method element in interface Foo at line 4: expected exactly one method name, found 2 (A, B)"
        );
        assert_eq!(err.kind(), "malformed_method");
    }

    #[test]
    fn test_malformed_method_without_names() {
        let err = MockgenError::MalformedMethod {
            interface: "Foo".to_string(),
            line: 1,
            names: vec![],
        };
        assert!(err.to_string().ends_with("found none"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;

        let err = MockgenError::Write {
            path: PathBuf::from("out/foo_test.go"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains("out/foo_test.go"));
        assert!(err.source().is_some());
    }
}
