use thiserror::Error;

use crate::decimal::Rate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApyError {
    #[error("invalid rate: {rate} (must be positive and finite)")]
    InvalidRate {
        rate: String,
    },

    #[error("domain error: {message}")]
    DomainError {
        message: String,
    },

    #[error("not implemented: {operation}")]
    NotImplemented {
        operation: &'static str,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

impl ApyError {
    pub(crate) fn invalid_rate(rate: Rate) -> Self {
        ApyError::InvalidRate {
            rate: rate.as_decimal().to_string(),
        }
    }

    pub(crate) fn domain(message: impl Into<String>) -> Self {
        ApyError::DomainError {
            message: message.into(),
        }
    }

    pub(crate) fn overflow(operation: &str) -> Self {
        ApyError::CalculationError {
            message: format!("decimal overflow in {}", operation),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApyError>;
