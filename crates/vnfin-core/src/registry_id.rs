use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Identifies which of the two registry documents answered a query.
///
/// Used in envelope metadata the way a provider chain would be in a
/// multi-source system: consumers can see whether a response drew on the
/// metric catalog, the sector directory, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryId {
    Metric,
    Sector,
}

impl RegistryId {
    pub const ALL: [Self; 2] = [Self::Metric, Self::Sector];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Sector => "sector",
        }
    }

    /// Canonical file name of the registry document.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Metric => "metric_registry.json",
            Self::Sector => "sector_industry_registry.json",
        }
    }
}

impl Display for RegistryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistryId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "sector" => Ok(Self::Sector),
            other => Err(ValidationError::InvalidRegistryId {
                value: other.to_owned(),
            }),
        }
    }
}
