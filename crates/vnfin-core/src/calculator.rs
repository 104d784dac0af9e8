use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{CoreError, EntityType};

/// Raw statement fields keyed by metric code, as read from one data row.
pub type RawFields = BTreeMap<String, f64>;

/// Derived metric values keyed by calculated-metric name.
pub type DerivedMetrics = BTreeMap<String, f64>;

/// Closed selector for the per-entity-type calculator implementations.
///
/// One tag per [`EntityType`], obtained only through [`CalculatorTag::for_entity`],
/// so downstream dispatch is an exhaustive match instead of a lookup by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorTag {
    CompanyCalculator,
    BankCalculator,
    InsuranceCalculator,
    SecurityCalculator,
}

impl CalculatorTag {
    pub const fn for_entity(entity_type: EntityType) -> Self {
        match entity_type {
            EntityType::Company => Self::CompanyCalculator,
            EntityType::Bank => Self::BankCalculator,
            EntityType::Insurance => Self::InsuranceCalculator,
            EntityType::Security => Self::SecurityCalculator,
        }
    }

    pub const fn entity_type(self) -> EntityType {
        match self {
            Self::CompanyCalculator => EntityType::Company,
            Self::BankCalculator => EntityType::Bank,
            Self::InsuranceCalculator => EntityType::Insurance,
            Self::SecurityCalculator => EntityType::Security,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompanyCalculator => "company_calculator",
            Self::BankCalculator => "bank_calculator",
            Self::InsuranceCalculator => "insurance_calculator",
            Self::SecurityCalculator => "security_calculator",
        }
    }
}

impl Display for CalculatorTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability seam implemented by the concrete valuation calculators.
///
/// Implementations live with the consumers (they own the arithmetic); the
/// contract here is only that a calculator receives raw fields whose
/// dependency codes were already validated against the metric catalog.
pub trait Calculator: Send + Sync {
    /// Tag identifying which entity-type schema this calculator serves.
    fn tag(&self) -> CalculatorTag;

    /// Compute derived metrics from validated raw statement fields.
    fn compute(&self, raw_fields: &RawFields) -> Result<DerivedMetrics, CoreError>;
}
