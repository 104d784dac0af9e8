//! Computability gap reports for calculators.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::resolver::EntityResolver;
use crate::RegistryError;

/// Per-metric computability verdict with the missing codes named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputableStatus {
    pub computable: bool,
    pub missing: Vec<String>,
}

/// Answers "which derived metrics can be computed for this ticker from the
/// raw codes actually present in a row", before any arithmetic is attempted.
///
/// Pure and deterministic: missing dependencies come back as data, so a
/// calculator can skip or flag individual metrics instead of failing the
/// whole pipeline mid-calculation.
#[derive(Debug, Clone, Copy)]
pub struct DependencyValidator<'a> {
    resolver: &'a EntityResolver,
}

impl<'a> DependencyValidator<'a> {
    pub fn new(resolver: &'a EntityResolver) -> Self {
        Self { resolver }
    }

    /// One verdict per calculated metric applicable to the ticker's entity
    /// type. Fails only for an unknown symbol.
    pub fn check_computable(
        &self,
        symbol: &str,
        available_codes: &BTreeSet<String>,
    ) -> Result<BTreeMap<String, ComputableStatus>, RegistryError> {
        let ticker = self.resolver.directory().get_ticker(symbol)?;
        let catalog = self.resolver.catalog();

        let mut verdicts = BTreeMap::new();
        for definition in catalog.calculated_for(ticker.entity_type) {
            let report =
                catalog.validate_dependencies(&definition.name, available_codes, ticker.entity_type)?;
            verdicts.insert(
                definition.name.clone(),
                ComputableStatus {
                    computable: report.is_valid,
                    missing: report.missing,
                },
            );
        }

        Ok(verdicts)
    }
}
