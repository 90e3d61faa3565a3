use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoppmanError {
    #[error("Invalid JSON input. Please check your Hoppscotch JSON. ({0})")]
    InvalidInput(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

// Add conversion from anyhow::Error
impl From<anyhow::Error> for HoppmanError {
    fn from(err: anyhow::Error) -> Self {
        HoppmanError::Other(err.to_string())
    }
}

/// Result type for hoppman crate
pub type Result<T> = std::result::Result<T, HoppmanError>;
