use thiserror::Error;

/// Input rejected by the list. The list is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Item name cannot be blank")]
    BlankName,

    #[error("Quantity must be at least 1 (got {0})")]
    NonPositiveQuantity(i32),
}

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShopError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ShopError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
