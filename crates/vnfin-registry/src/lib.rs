//! Metric & sector resolution engine for the Vietnamese market.
//!
//! Two immutable JSON documents are loaded and integrity-checked once at
//! startup; after that every query is a pure read over in-memory maps:
//! - [`MetricCatalog`] — per-entity-type line items plus calculated-metric
//!   formulas and their dependency lists
//! - [`SectorDirectory`] — ticker classification, sector membership and peers
//! - [`EntityResolver`] — the composed query surface consumers talk to
//! - [`DependencyValidator`] — computability gap reports for calculators
//!
//! Construction either fully succeeds or fails with
//! [`RegistryError::SchemaIntegrity`]; a half-valid registry is never exposed.

pub mod catalog;
pub mod dependency;
pub mod directory;
pub mod document;
pub mod error;
pub mod resolver;

pub use catalog::{
    CalculatedMetricDefinition, DependencyReport, MetricCatalog, MetricDefinition,
};
pub use dependency::{ComputableStatus, DependencyValidator};
pub use directory::{Sector, SectorDirectory, Ticker};
pub use document::{MetricRegistryDoc, SectorRegistryDoc};
pub use error::RegistryError;
pub use resolver::{EntityResolver, PeerComparison, TickerProfile};

use std::path::Path;

use vnfin_core::RegistryId;

/// Load both registry documents from a directory and build the resolver.
///
/// This is the single construction point for a serving process: it reads
/// `metric_registry.json` and `sector_industry_registry.json`, runs every
/// load-time integrity check and returns the immutable resolver. Hosting
/// processes that get an error here must refuse to start serving.
pub fn resolver_from_dir(dir: impl AsRef<Path>) -> Result<EntityResolver, RegistryError> {
    let dir = dir.as_ref();
    let metric_doc = MetricRegistryDoc::from_path(dir.join(RegistryId::Metric.file_name()))?;
    let sector_doc = SectorRegistryDoc::from_path(dir.join(RegistryId::Sector.file_name()))?;
    EntityResolver::from_documents(&metric_doc, &sector_doc)
}
