use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// The four financial-statement schema families covered by the registries.
///
/// Each family carries its own disjoint metric-code namespace (a bank's
/// `BIS_22A` and a company's `CIS_62` both mean "net profit" but are never
/// interchangeable), so every metric lookup is scoped by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Company,
    Bank,
    Insurance,
    Security,
}

impl EntityType {
    pub const ALL: [Self; 4] = [Self::Company, Self::Bank, Self::Insurance, Self::Security];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "COMPANY",
            Self::Bank => "BANK",
            Self::Insurance => "INSURANCE",
            Self::Security => "SECURITY",
        }
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "COMPANY" => Ok(Self::Company),
            "BANK" => Ok(Self::Bank),
            "INSURANCE" => Ok(Self::Insurance),
            "SECURITY" => Ok(Self::Security),
            other => Err(ValidationError::InvalidEntityType {
                value: other.to_owned(),
            }),
        }
    }
}
