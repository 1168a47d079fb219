#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Not enough precision for a number value ({0}). Use string value instead")]
    InsufficientPrecision(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidNumber(input.into())
    }
}
