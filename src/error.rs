use thiserror::Error;

/// Message shown in the status line when no response could be obtained.
pub const CONNECTIVITY_FAILURE_MESSAGE: &str = "Failed to connect to server.";

/// Message raised through the blocking alert when the input is blank.
pub const EMPTY_INPUT_PROMPT: &str = "Please enter text to translate.";

/// Errors produced by a translation request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Input was empty after trimming; no request was sent
    #[error("Input text is empty")]
    EmptyInput,

    /// The request never produced a response (refused, reset, DNS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but its body was not the expected JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Target code outside the supported set
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),
}

impl TranslateError {
    /// Text for the status line, or `None` when the error is surfaced some
    /// other way (the blocking alert for empty input).
    pub fn status_text(&self) -> Option<String> {
        match self {
            TranslateError::EmptyInput => None,
            TranslateError::Transport(_) | TranslateError::MalformedResponse(_) => {
                Some(CONNECTIVITY_FAILURE_MESSAGE.to_string())
            }
            TranslateError::Server { message, .. } => Some(format!("Error: {}", message)),
            TranslateError::UnsupportedLanguage(code) => {
                Some(format!("Error: unsupported language '{}'", code))
            }
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TranslateError::MalformedResponse(err.to_string())
        } else {
            TranslateError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(err: serde_json::Error) -> Self {
        TranslateError::MalformedResponse(err.to_string())
    }
}
