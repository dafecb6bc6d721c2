use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::analyzer_error::AnalyzerError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BplyzerError {
    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        status_code: Option<u16>,
        reason: String,
    },

    // Malformed responses from the remote endpoint
    DecodeError {
        reason: String,
    },

    // User input errors
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl BplyzerError {
    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::UserInputError { .. } => true,
            Self::DecodeError { .. } => false,
            Self::FileOperationError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::DecodeError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::UserInputError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check the file path and permissions", operation, file_path, reason)
            }
            Self::NetworkError { operation, status_code, reason } => {
                let mut msg = format!("API request error during {}: {}", operation, reason);
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and API key, then try again");
                msg
            }
            Self::DecodeError { reason } => {
                format!("The API returned a response this tool could not understand: {}\n💡 The endpoint may have changed; try updating bplyzer", reason)
            }
            Self::UserInputError { input, expected, suggestion } => {
                format!("Invalid input '{}': expected {}\n💡 {}", input, expected, suggestion)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for BplyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for BplyzerError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for bplyzer operations
pub type BplyzerResult<T> = Result<T, BplyzerError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details, print a user-friendly message.
    pub fn handle_error(error: &BplyzerError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for BplyzerError {
    fn from(error: std::io::Error) -> Self {
        BplyzerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for BplyzerError {
    fn from(error: serde_json::Error) -> Self {
        BplyzerError::DecodeError {
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for BplyzerError {
    fn from(error: reqwest::Error) -> Self {
        BplyzerError::NetworkError {
            operation: "HTTP request".to_string(),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

impl From<AnalyzerError> for BplyzerError {
    fn from(error: AnalyzerError) -> Self {
        match error {
            AnalyzerError::Io(e) => BplyzerError::SystemError {
                operation: "reading image".to_string(),
                reason: e.to_string(),
            },
            AnalyzerError::Network(reason) => BplyzerError::NetworkError {
                operation: "photo analysis".to_string(),
                status_code: None,
                reason,
            },
            AnalyzerError::Authentication(body) => BplyzerError::NetworkError {
                operation: "photo analysis".to_string(),
                status_code: Some(401),
                reason: format!("authentication failed: {}", body),
            },
            AnalyzerError::Http { status, body } => BplyzerError::NetworkError {
                operation: "photo analysis".to_string(),
                status_code: Some(status),
                reason: body,
            },
            AnalyzerError::Decode(reason) => BplyzerError::DecodeError { reason },
        }
    }
}
