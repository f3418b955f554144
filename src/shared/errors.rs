use thiserror::Error;

/// Failure to translate a stored code back into its symbolic kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Unknown code {code} for {kind}")]
    Unknown { kind: &'static str, code: String },

    #[error("Ambiguous code {code} for {kind}: matches {candidates:?}")]
    Ambiguous {
        kind: &'static str,
        code: String,
        candidates: Vec<&'static str>,
    },
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error(transparent)]
    Code(#[from] CodeError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether the error came out of the storage layer (constraint
    /// violations, lost connections) rather than from the domain model.
    pub fn is_storage(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_names_kind_and_code() {
        let err = CodeError::Unknown {
            kind: "espi_store::domain::kinds::ServiceKind",
            code: "42".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown code 42 for espi_store::domain::kinds::ServiceKind"
        );
    }

    #[test]
    fn code_error_converts_into_domain_error() {
        let err: DomainError = CodeError::Unknown {
            kind: "Kind",
            code: "x".into(),
        }
        .into();
        assert!(matches!(err, DomainError::Code(_)));
        assert!(!err.is_storage());
    }
}
