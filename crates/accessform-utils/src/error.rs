use std::fmt;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Library-level error type with context and user-facing reporting.
///
/// `AccessFormError` is what the editors and the CLI return. It provides:
/// - Structured variants for programmatic handling
/// - User-friendly messages with context and suggestions
/// - A mapping to CLI exit codes
///
/// # Exit Code Mapping
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 2 | Configuration errors |
/// | 3 | Session file unreadable or malformed |
/// | 4 | Form validation failures |
/// | 5 | Unknown identifier (strict mode only) |
/// | 1 | Other errors |
///
/// The selection layer itself never fails; unknown identifiers only become errors when an
/// owner opts into strictness.
#[derive(Error, Debug)]
pub enum AccessFormError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    #[error("Unknown {kind} identifier: {id}")]
    UnknownIdentifier { kind: String, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Session,
    Validation,
    FileSystem,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Session => write!(f, "Session"),
            Self::Validation => write!(f, "Validation"),
            Self::FileSystem => write!(f, "File System"),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::NotFound { path } => format!("Configuration file not found: {path}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files are TOML with optional [output], [selection] and [logging] sections."
                    .to_string(),
            ),
            Self::NotFound { .. } => Some(
                "accessform searches for .accessform/config.toml starting from the current directory upward."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax using a TOML validator".to_string(),
                "Remove unknown sections or keys".to_string(),
            ],
            Self::NotFound { .. } => vec![
                "Create .accessform/config.toml in your project root".to_string(),
                "Pass --config <path> or unset ACCESSFORM_CONFIG".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Errors reading an editing session file
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Cannot read session file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Malformed session file {path}: {reason}")]
    Malformed { path: String, reason: String },
}

impl UserFriendlyError for SessionError {
    fn user_message(&self) -> String {
        match self {
            Self::Unreadable { path, .. } => format!("Session file '{path}' could not be read"),
            Self::Malformed { path, reason } => {
                format!("Session file '{path}' is not a valid session: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Unreadable { reason, .. } => Some(reason.clone()),
            Self::Malformed { .. } => {
                Some("Session files are JSON documents with camelCase field names.".to_string())
            }
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Unreadable { .. } => vec![
                "Check that the path exists and is readable".to_string(),
                "Pass '-' to read the session from stdin".to_string(),
            ],
            Self::Malformed { .. } => vec![
                "Validate the JSON syntax".to_string(),
                "Check field names against the session format in the README".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Session
    }
}

/// Errors raised by the group and secret editors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Field '{field}' is invalid: {reason}")]
    Validation { field: String, reason: String },

    #[error("Editor opened with an invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Secret {0} was not found")]
    SecretNotFound(String),
}

impl EditorError {
    /// Shorthand for a required field left empty.
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: "a value is required".to_string(),
        }
    }
}

impl UserFriendlyError for EditorError {
    fn user_message(&self) -> String {
        match self {
            Self::Validation { field, reason } => format!("'{field}': {reason}"),
            Self::InvalidOperation(detail) => {
                format!("The editor was not opened with valid operation values: {detail}")
            }
            Self::SecretNotFound(id) => format!("Secret '{id}' could not be loaded"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Validation { .. } => {
                Some("The form is not submitted until every required field is filled in.".to_string())
            }
            Self::InvalidOperation(_) => {
                Some("Editing an existing secret requires its secret id.".to_string())
            }
            Self::SecretNotFound(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation { field, .. } => vec![format!("Provide a non-empty '{field}'")],
            Self::InvalidOperation(_) => vec![
                "Use operation 'add' for new secrets".to_string(),
                "Set 'secretId' when the operation is 'edit'".to_string(),
            ],
            Self::SecretNotFound(_) => {
                vec!["Include the loaded secret under 'existing' in the session".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

impl UserFriendlyError for AccessFormError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Session(err) => err.user_message(),
            Self::Editor(err) => err.user_message(),
            Self::UnknownIdentifier { kind, id } => {
                format!("No {kind} with id '{id}' is available in this session")
            }
            Self::Io(err) => format!("I/O failure: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::Session(err) => err.context(),
            Self::Editor(err) => err.context(),
            Self::UnknownIdentifier { .. } => Some(
                "Strict mode rejects actions that reference ids outside the loaded options."
                    .to_string(),
            ),
            Self::Io(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::Session(err) => err.suggestions(),
            Self::Editor(err) => err.suggestions(),
            Self::UnknownIdentifier { kind, .. } => vec![
                format!("Check the {kind} ids in the session actions"),
                "Disable strict mode to ignore unknown ids".to_string(),
            ],
            Self::Io(_) => vec![],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(err) => err.category(),
            Self::Session(err) => err.category(),
            Self::Editor(err) => err.category(),
            Self::UnknownIdentifier { .. } => ErrorCategory::Session,
            Self::Io(_) => ErrorCategory::FileSystem,
        }
    }
}

impl AccessFormError {
    /// Get a user-friendly error message with context and actionable suggestions
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = format!("Error: {}\n", self.user_message());

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::CLI_ARGS,
            Self::Session(_) => ExitCode::SESSION_INVALID,
            Self::Editor(EditorError::Validation { .. }) => ExitCode::VALIDATION_FAILED,
            Self::Editor(_) => ExitCode::SESSION_INVALID,
            Self::UnknownIdentifier { .. } => ExitCode::UNKNOWN_IDENTIFIER,
            Self::Io(_) => ExitCode::INTERNAL,
        }
    }
}
