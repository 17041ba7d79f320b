use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LedgerError {
    // caller-supplied data violates a precondition, e.g. a missing required
    // field, a missing loan date or an empty batch
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    // free-text reader reference did not match an id, an alias or a name
    ReaderUnresolved {
        message: String,
    },
    // operation disallowed by a business rule, e.g. deleting the library
    // pseudo-reader
    Forbidden {
        message: String,
    },
    // reader delete blocked while books still reference the reader as holder
    HasActiveLoans {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
}

impl LedgerError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LedgerError {
        LedgerError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LedgerError {
        LedgerError::NotFound { message: message.to_string() }
    }

    pub fn reader_unresolved(message: &str) -> LedgerError {
        LedgerError::ReaderUnresolved { message: message.to_string() }
    }

    pub fn forbidden(message: &str) -> LedgerError {
        LedgerError::Forbidden { message: message.to_string() }
    }

    pub fn has_active_loans(message: &str) -> LedgerError {
        LedgerError::HasActiveLoans { message: message.to_string() }
    }

    pub fn storage(message: &str, reason_code: Option<String>, retryable: bool) -> LedgerError {
        LedgerError::Storage { message: message.to_string(), reason_code, retryable }
    }

    pub fn serialization(message: &str) -> LedgerError {
        LedgerError::Serialization { message: message.to_string() }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LedgerError::Validation { .. } => false,
            LedgerError::NotFound { .. } => false,
            LedgerError::ReaderUnresolved { .. } => false,
            LedgerError::Forbidden { .. } => false,
            LedgerError::HasActiveLoans { .. } => false,
            LedgerError::Storage { retryable, .. } => *retryable,
            LedgerError::Serialization { .. } => false,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::storage(
            format!("storage io {:?}", err).as_str(), None, false)
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for LedgerError {
    fn from(err: String) -> Self {
        LedgerError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LedgerError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LedgerError::ReaderUnresolved { message } => {
                write!(f, "{}", message)
            }
            LedgerError::Forbidden { message } => {
                write!(f, "{}", message)
            }
            LedgerError::HasActiveLoans { message } => {
                write!(f, "{}", message)
            }
            LedgerError::Storage { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LedgerError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

// LoanState captures the two logical states of a book derived from its
// holder/date pair.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanState {
    OnShelf,
    OnLoan,
}

impl Display for LoanState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanState::OnShelf => write!(f, "OnShelf"),
            LoanState::OnLoan => write!(f, "OnLoan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::ledger::{LedgerError, LoanState};

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LedgerError::validation("test", None), LedgerError::Validation { message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LedgerError::not_found("test"), LedgerError::NotFound { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_reader_unresolved_error() {
        assert!(matches!(LedgerError::reader_unresolved("test"), LedgerError::ReaderUnresolved { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_forbidden_error() {
        assert!(matches!(LedgerError::forbidden("test"), LedgerError::Forbidden { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_has_active_loans_error() {
        assert!(matches!(LedgerError::has_active_loans("test"), LedgerError::HasActiveLoans { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_storage_error() {
        assert!(matches!(LedgerError::storage("test", None, false), LedgerError::Storage { message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LedgerError::serialization("test"), LedgerError::Serialization { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, LedgerError::validation("test", None).retryable());
        assert_eq!(false, LedgerError::not_found("test").retryable());
        assert_eq!(false, LedgerError::reader_unresolved("test").retryable());
        assert_eq!(false, LedgerError::forbidden("test").retryable());
        assert_eq!(false, LedgerError::has_active_loans("test").retryable());
        assert_eq!(false, LedgerError::storage("test", None, false).retryable());
        assert_eq!(true, LedgerError::storage("test", None, true).retryable());
        assert_eq!(false, LedgerError::serialization("test").retryable());
    }

    #[tokio::test]
    async fn test_should_format_loan_state() {
        assert_eq!("OnShelf", LoanState::OnShelf.to_string());
        assert_eq!("OnLoan", LoanState::OnLoan.to_string());
    }
}
