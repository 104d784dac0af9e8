//! Serde models of the two registry documents.
//!
//! These mirror the contract shape produced by the offline builder jobs.
//! Entity-type keys stay raw strings here; turning them into [`EntityType`]
//! values (and rejecting unknown keys) is part of catalog/directory
//! construction, so a malformed document fails the build rather than the
//! first query.
//!
//! [`EntityType`]: vnfin_core::EntityType

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::RegistryError;

/// `metric_registry.json`: per-entity-type line items plus calculated metrics.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricRegistryDoc {
    /// entity type -> category -> code -> entry
    pub entity_types: BTreeMap<String, BTreeMap<String, BTreeMap<String, MetricEntryDoc>>>,
    #[serde(default)]
    pub calculated_metrics: BTreeMap<String, CalculatedMetricDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricEntryDoc {
    pub name_local: String,
    pub name_en: String,
    pub unit: String,
    pub data_type: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalculatedMetricDoc {
    pub formula: String,
    pub entity_types: Vec<String>,
    pub dependencies: BTreeMap<String, Vec<String>>,
}

impl MetricRegistryDoc {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// `sector_industry_registry.json`: ticker classification and sector indexes.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorRegistryDoc {
    /// Summary block: entity type -> declared sector list + count.
    pub entity_types: BTreeMap<String, EntitySummaryDoc>,
    pub sectors: BTreeMap<String, SectorDoc>,
    pub ticker_mapping: BTreeMap<String, TickerDoc>,
    pub sector_to_entity_mapping: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntitySummaryDoc {
    pub sectors: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectorDoc {
    pub entity_type: String,
    pub tickers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TickerDoc {
    pub entity_type: String,
    pub sector: String,
    pub name: String,
    pub exchange: String,
}

impl SectorRegistryDoc {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(raw)?)
    }
}
