//! Per-entity-type metric catalog with calculated-metric dependency tables.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::str::FromStr;

use serde::Serialize;

use vnfin_core::EntityType;

use crate::document::MetricRegistryDoc;
use crate::RegistryError;

/// One line item of one entity type's statement schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricDefinition {
    pub code: String,
    pub name_local: String,
    pub name_en: String,
    pub unit: String,
    pub data_type: String,
    pub category: String,
    pub entity_type: EntityType,
}

/// A named ratio computed from raw codes, with per-entity-type dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatedMetricDefinition {
    pub name: String,
    pub formula: String,
    pub entity_types: BTreeSet<EntityType>,
    pub dependencies: BTreeMap<EntityType, Vec<String>>,
}

impl CalculatedMetricDefinition {
    pub fn applies_to(&self, entity_type: EntityType) -> bool {
        self.entity_types.contains(&entity_type)
    }
}

/// Soft validation report for one calculated metric against one data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub is_valid: bool,
    pub missing: Vec<String>,
}

/// Immutable catalog of raw and calculated metric definitions.
///
/// Lookup maps are hash-based; the side vectors preserve the catalog's
/// deterministic load order (category, then code within an entity type) so
/// searches return stable, reproducible orderings.
#[derive(Debug)]
pub struct MetricCatalog {
    metrics: HashMap<EntityType, HashMap<String, MetricDefinition>>,
    metric_order: HashMap<EntityType, Vec<String>>,
    calculated: HashMap<String, CalculatedMetricDefinition>,
    calculated_order: Vec<String>,
}

impl MetricCatalog {
    /// Build the catalog from a parsed document, running every load-time
    /// integrity check. A document that references an undefined dependency
    /// code, repeats a code within one entity type's namespace, or uses an
    /// unknown entity-type key fails here with
    /// [`RegistryError::SchemaIntegrity`] and never becomes a catalog.
    pub fn from_document(doc: &MetricRegistryDoc) -> Result<Self, RegistryError> {
        let mut metrics: HashMap<EntityType, HashMap<String, MetricDefinition>> = HashMap::new();
        let mut metric_order: HashMap<EntityType, Vec<String>> = HashMap::new();

        for (entity_key, categories) in &doc.entity_types {
            let entity_type = parse_entity_key(entity_key, "metric registry")?;
            let by_code = metrics.entry(entity_type).or_default();
            let order = metric_order.entry(entity_type).or_default();

            for (category, entries) in categories {
                for (code, entry) in entries {
                    if entry.category != *category {
                        return Err(RegistryError::SchemaIntegrity(format!(
                            "metric '{code}' ({entity_type}) declares category '{}' but is filed under '{category}'",
                            entry.category
                        )));
                    }

                    let definition = MetricDefinition {
                        code: code.clone(),
                        name_local: entry.name_local.clone(),
                        name_en: entry.name_en.clone(),
                        unit: entry.unit.clone(),
                        data_type: entry.data_type.clone(),
                        category: category.clone(),
                        entity_type,
                    };

                    if by_code.insert(code.clone(), definition).is_some() {
                        return Err(RegistryError::SchemaIntegrity(format!(
                            "duplicate metric code '{code}' in {entity_type} namespace"
                        )));
                    }
                    order.push(code.clone());
                }
            }
        }

        let mut calculated = HashMap::new();
        let mut calculated_order = Vec::new();

        for (name, calc_doc) in &doc.calculated_metrics {
            let mut entity_types = BTreeSet::new();
            for entity_key in &calc_doc.entity_types {
                entity_types.insert(parse_entity_key(
                    entity_key,
                    &format!("calculated metric '{name}'"),
                )?);
            }

            let mut dependencies = BTreeMap::new();
            for (entity_key, codes) in &calc_doc.dependencies {
                let entity_type =
                    parse_entity_key(entity_key, &format!("calculated metric '{name}'"))?;

                if !entity_types.contains(&entity_type) {
                    return Err(RegistryError::SchemaIntegrity(format!(
                        "calculated metric '{name}' lists dependencies for {entity_type} \
                         but does not declare it applicable"
                    )));
                }

                for code in codes {
                    let resolves = metrics
                        .get(&entity_type)
                        .is_some_and(|by_code| by_code.contains_key(code));
                    if !resolves {
                        return Err(RegistryError::SchemaIntegrity(format!(
                            "calculated metric '{name}' depends on '{code}' which is not \
                             defined for entity type {entity_type}"
                        )));
                    }
                }

                dependencies.insert(entity_type, codes.clone());
            }

            for entity_type in &entity_types {
                if !dependencies.contains_key(entity_type) {
                    return Err(RegistryError::SchemaIntegrity(format!(
                        "calculated metric '{name}' is applicable to {entity_type} \
                         but has no dependency list for it"
                    )));
                }
            }

            calculated.insert(
                name.clone(),
                CalculatedMetricDefinition {
                    name: name.clone(),
                    formula: calc_doc.formula.clone(),
                    entity_types,
                    dependencies,
                },
            );
            calculated_order.push(name.clone());
        }

        Ok(Self {
            metrics,
            metric_order,
            calculated,
            calculated_order,
        })
    }

    /// Exact lookup of one code within one entity type's namespace.
    ///
    /// Fails with [`RegistryError::MetricNotFound`] rather than returning an
    /// empty value, so callers can tell "invalid metric" apart from "metric
    /// has no value".
    pub fn get_metric(
        &self,
        code: &str,
        entity_type: EntityType,
    ) -> Result<&MetricDefinition, RegistryError> {
        self.metrics
            .get(&entity_type)
            .and_then(|by_code| by_code.get(code))
            .ok_or_else(|| RegistryError::MetricNotFound {
                code: code.to_owned(),
                entity_type,
            })
    }

    /// True iff `code` is defined under `entity_type`.
    pub fn has_metric(&self, code: &str, entity_type: EntityType) -> bool {
        self.metrics
            .get(&entity_type)
            .is_some_and(|by_code| by_code.contains_key(code))
    }

    /// Entity types whose namespace defines `code`. Usually zero or one
    /// (namespaces are prefix-disjoint by convention), but cross-type
    /// collisions are permitted, so all owners are reported.
    pub fn entity_types_owning(&self, code: &str) -> Vec<EntityType> {
        EntityType::ALL
            .into_iter()
            .filter(|entity_type| self.has_metric(code, *entity_type))
            .collect()
    }

    /// Case-insensitive substring search over localized and English names,
    /// across one entity type or all four. No match is an empty list, not an
    /// error; ordering is the catalog's stable load order.
    pub fn search_by_name(
        &self,
        query: &str,
        entity_type: Option<EntityType>,
    ) -> Vec<&MetricDefinition> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let scope: Vec<EntityType> = match entity_type {
            Some(entity_type) => vec![entity_type],
            None => EntityType::ALL.to_vec(),
        };

        let mut results = Vec::new();
        for entity_type in scope {
            for definition in self.metrics_for(entity_type) {
                if definition.name_local.to_lowercase().contains(&needle)
                    || definition.name_en.to_lowercase().contains(&needle)
                {
                    results.push(definition);
                }
            }
        }
        results
    }

    /// All definitions for one entity type, in catalog order.
    pub fn metrics_for(&self, entity_type: EntityType) -> impl Iterator<Item = &MetricDefinition> {
        self.metric_order
            .get(&entity_type)
            .into_iter()
            .flatten()
            .filter_map(move |code| {
                self.metrics
                    .get(&entity_type)
                    .and_then(|by_code| by_code.get(code))
            })
    }

    pub fn get_calculated_metric(
        &self,
        name: &str,
    ) -> Result<&CalculatedMetricDefinition, RegistryError> {
        self.calculated
            .get(name)
            .ok_or_else(|| RegistryError::CalculatedMetricNotFound {
                name: name.to_owned(),
            })
    }

    /// Calculated metrics applicable to one entity type, in catalog order.
    pub fn calculated_for(
        &self,
        entity_type: EntityType,
    ) -> impl Iterator<Item = &CalculatedMetricDefinition> {
        self.calculated_order
            .iter()
            .filter_map(move |name| self.calculated.get(name))
            .filter(move |definition| definition.applies_to(entity_type))
    }

    /// Check one calculated metric's dependencies against the raw codes
    /// actually present in a data row. Pure; missing codes are reported as
    /// data, never as an error.
    pub fn validate_dependencies(
        &self,
        name: &str,
        available_codes: &BTreeSet<String>,
        entity_type: EntityType,
    ) -> Result<DependencyReport, RegistryError> {
        let definition = self.get_calculated_metric(name)?;
        let required =
            definition
                .dependencies
                .get(&entity_type)
                .ok_or(RegistryError::MetricNotApplicable {
                    name: name.to_owned(),
                    entity_type,
                })?;

        let missing: Vec<String> = required
            .iter()
            .filter(|code| !available_codes.contains(*code))
            .cloned()
            .collect();

        Ok(DependencyReport {
            is_valid: missing.is_empty(),
            missing,
        })
    }
}

fn parse_entity_key(key: &str, context: &str) -> Result<EntityType, RegistryError> {
    EntityType::from_str(key).map_err(|_| {
        RegistryError::SchemaIntegrity(format!("unknown entity type '{key}' in {context}"))
    })
}
