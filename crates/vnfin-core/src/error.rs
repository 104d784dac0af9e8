use thiserror::Error;

/// Validation and contract errors exposed by `vnfin-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid entity type '{value}', expected one of COMPANY, BANK, INSURANCE, SECURITY")]
    InvalidEntityType { value: String },

    #[error("invalid registry id '{value}', expected one of metric, sector")]
    InvalidRegistryId { value: String },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("registry_chain must contain at least one registry")]
    EmptyRegistryChain,

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("calculator for {entity_type} rejected input: {message}")]
    CalculatorInput {
        entity_type: crate::EntityType,
        message: String,
    },
}
