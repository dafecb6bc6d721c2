use thiserror::Error;

/// Failures of a single chat-completion round trip.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Authentication Error: {0}")]
    Authentication(String),

    #[error("API Error: HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Decode Error: {0}")]
    Decode(String),
}
