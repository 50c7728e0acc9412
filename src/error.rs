use thiserror::Error;

use crate::portfolio::DataError;

/// Failures that stop the server from starting.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("portfolio data error: {0}")]
    Data(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<&DataError> for AppError {
    fn from(err: &DataError) -> Self {
        AppError::Data(err.to_string())
    }
}
