use thiserror::Error;

pub type Result<T> = std::result::Result<T, PromptError>;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },
    #[error("Error: {0}")]
    Generic(String),
}

impl From<String> for PromptError {
    fn from(error: String) -> Self {
        PromptError::Generic(error)
    }
}

impl From<&str> for PromptError {
    fn from(error: &str) -> Self {
        PromptError::Generic(error.to_string())
    }
}
