//! Core contracts for vnfin.
//!
//! This crate contains:
//! - The closed entity-type enumeration shared by every registry
//! - Calculator selection tags and the calculator trait seam
//! - Response envelope and structured errors
//! - Timestamp and registry identifiers used in envelope metadata

pub mod calculator;
pub mod entity_type;
pub mod envelope;
pub mod error;
pub mod registry_id;
pub mod symbol;
pub mod timestamp;

pub use calculator::{Calculator, CalculatorTag, DerivedMetrics, RawFields};
pub use entity_type::EntityType;
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use registry_id::RegistryId;
pub use symbol::normalize_symbol;
pub use timestamp::UtcDateTime;
