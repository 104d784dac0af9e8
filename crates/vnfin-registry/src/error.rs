use thiserror::Error;

use vnfin_core::{EntityType, ValidationError};

/// Errors surfaced by the registry components.
///
/// The not-found variants are per-query failures the caller must handle;
/// `SchemaIntegrity`, `Io` and `Json` occur only during construction and are
/// fatal for the hosting process.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("ticker not found: {symbol}")]
    TickerNotFound { symbol: String },

    #[error("sector not found: {name}")]
    SectorNotFound { name: String },

    #[error("metric code '{code}' is not defined for entity type {entity_type}")]
    MetricNotFound {
        code: String,
        entity_type: EntityType,
    },

    #[error("calculated metric not found: {name}")]
    CalculatedMetricNotFound { name: String },

    #[error("calculated metric '{name}' is not applicable to entity type {entity_type}")]
    MetricNotApplicable {
        name: String,
        entity_type: EntityType,
    },

    /// Registry document violates a load-time invariant. Never raised after
    /// construction has succeeded.
    #[error("registry integrity violation: {0}")]
    SchemaIntegrity(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    /// True for the per-query lookup failures (unknown ticker, sector,
    /// metric code or calculated metric), as opposed to load-time faults.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TickerNotFound { .. }
                | Self::SectorNotFound { .. }
                | Self::MetricNotFound { .. }
                | Self::CalculatedMetricNotFound { .. }
                | Self::MetricNotApplicable { .. }
        )
    }
}
