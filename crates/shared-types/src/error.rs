//! Error taxonomy for the property-operations rules

use thiserror::Error;

/// Errors raised by record lookups and rule evaluation.
///
/// Every mutating operation validates its inputs before touching any record,
/// so an `Err` always means nothing was changed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown {kind}: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division undefined: {0}")]
    DivisionUndefined(String),
}

impl DomainError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        DomainError::NotFound {
            kind,
            key: key.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_kind_and_key() {
        let err = DomainError::not_found("ticket", "M-9999");
        assert_eq!(err.to_string(), "Unknown ticket: M-9999");
    }

    #[test]
    fn test_division_undefined_message() {
        let err = DomainError::DivisionUndefined("market average is zero".to_string());
        assert!(err.to_string().contains("market average"));
    }
}
