//! Composed query surface over the metric catalog and sector directory.

use std::collections::BTreeMap;

use serde::Serialize;

use vnfin_core::{CalculatorTag, EntityType};

use crate::catalog::MetricCatalog;
use crate::directory::SectorDirectory;
use crate::document::{MetricRegistryDoc, SectorRegistryDoc};
use crate::RegistryError;

/// Fully resolved profile for one ticker: classification, calculator
/// selector, addressable raw metrics, applicable calculated metrics, peers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerProfile {
    pub symbol: String,
    pub entity_type: EntityType,
    pub sector: String,
    pub display_name: String,
    pub exchange: String,
    pub calculator: CalculatorTag,
    /// code -> English name, catalog order flattened into a sorted map.
    pub available_metrics: BTreeMap<String, String>,
    pub calculated_metrics: Vec<String>,
    pub peers: Vec<String>,
}

/// What a peer-group comparison can be built on for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerComparison {
    pub symbol: String,
    pub sector: String,
    pub peers: Vec<String>,
    /// Calculated metrics applicable to this ticker's entity type.
    pub comparable_metrics: Vec<String>,
    /// metric name -> raw codes it needs for this entity type.
    pub dependencies: BTreeMap<String, Vec<String>>,
}

/// The resolution engine: owns both registries, immutable after
/// construction, safe to share across threads by reference.
#[derive(Debug)]
pub struct EntityResolver {
    catalog: MetricCatalog,
    directory: SectorDirectory,
}

impl EntityResolver {
    pub fn new(catalog: MetricCatalog, directory: SectorDirectory) -> Self {
        Self { catalog, directory }
    }

    /// Build both components from parsed documents, running all load-time
    /// integrity checks.
    pub fn from_documents(
        metric_doc: &MetricRegistryDoc,
        sector_doc: &SectorRegistryDoc,
    ) -> Result<Self, RegistryError> {
        let catalog = MetricCatalog::from_document(metric_doc)?;
        let directory = SectorDirectory::from_document(sector_doc)?;
        Ok(Self::new(catalog, directory))
    }

    pub fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    pub fn directory(&self) -> &SectorDirectory {
        &self.directory
    }

    /// Everything a consumer needs to work with one ticker.
    pub fn get_complete_info(&self, symbol: &str) -> Result<TickerProfile, RegistryError> {
        let ticker = self.directory.get_ticker(symbol)?;
        let peers = self.directory.get_peers(&ticker.symbol)?;

        let available_metrics = self
            .catalog
            .metrics_for(ticker.entity_type)
            .map(|definition| (definition.code.clone(), definition.name_en.clone()))
            .collect();

        let calculated_metrics = self
            .catalog
            .calculated_for(ticker.entity_type)
            .map(|definition| definition.name.clone())
            .collect();

        Ok(TickerProfile {
            symbol: ticker.symbol.clone(),
            entity_type: ticker.entity_type,
            sector: ticker.sector.clone(),
            display_name: ticker.display_name.clone(),
            exchange: ticker.exchange.clone(),
            calculator: CalculatorTag::for_entity(ticker.entity_type),
            available_metrics,
            calculated_metrics,
            peers,
        })
    }

    /// True iff `code` is defined under the ticker's entity type.
    ///
    /// A cross-type mismatch (a company code checked against a bank ticker)
    /// is an expected query and answers `Ok(false)`; only an unknown symbol
    /// is an error.
    pub fn validate_metric_for_ticker(
        &self,
        symbol: &str,
        code: &str,
    ) -> Result<bool, RegistryError> {
        let ticker = self.directory.get_ticker(symbol)?;
        Ok(self.catalog.has_metric(code, ticker.entity_type))
    }

    /// Closed calculator selector for the ticker's entity type.
    pub fn get_calculator_selector(&self, symbol: &str) -> Result<CalculatorTag, RegistryError> {
        let ticker = self.directory.get_ticker(symbol)?;
        Ok(CalculatorTag::for_entity(ticker.entity_type))
    }

    /// Tickers whose entity type owns `code`, optionally restricted to one
    /// sector. An undefined code (or unknown sector filter) yields an empty
    /// list: this is a discovery query, not a specific lookup.
    pub fn search_tickers_with_metric(&self, code: &str, sector: Option<&str>) -> Vec<String> {
        let owners = self.catalog.entity_types_owning(code);
        if owners.is_empty() {
            return Vec::new();
        }

        self.directory
            .tickers()
            .filter(|ticker| owners.contains(&ticker.entity_type))
            .filter(|ticker| sector.is_none_or(|name| ticker.sector == name))
            .map(|ticker| ticker.symbol.clone())
            .collect()
    }

    /// Peer set plus the calculated metrics a peer comparison can use,
    /// with their raw-code dependencies for this ticker's entity type.
    pub fn get_peer_comparison_info(&self, symbol: &str) -> Result<PeerComparison, RegistryError> {
        let ticker = self.directory.get_ticker(symbol)?;
        let peers = self.directory.get_peers(&ticker.symbol)?;

        let mut comparable_metrics = Vec::new();
        let mut dependencies = BTreeMap::new();
        for definition in self.catalog.calculated_for(ticker.entity_type) {
            comparable_metrics.push(definition.name.clone());
            if let Some(codes) = definition.dependencies.get(&ticker.entity_type) {
                dependencies.insert(definition.name.clone(), codes.clone());
            }
        }

        Ok(PeerComparison {
            symbol: ticker.symbol.clone(),
            sector: ticker.sector.clone(),
            peers,
            comparable_metrics,
            dependencies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resolver() -> EntityResolver {
        let metric_doc = MetricRegistryDoc::parse(
            r#"{
                "entity_types": {
                    "COMPANY": {
                        "income_statement": {
                            "CIS_62": {
                                "name_local": "Lợi nhuận sau thuế",
                                "name_en": "Net profit after tax",
                                "unit": "VND",
                                "data_type": "currency",
                                "category": "income_statement"
                            }
                        }
                    },
                    "BANK": {
                        "income_statement": {
                            "BIS_22A": {
                                "name_local": "Lợi nhuận sau thuế",
                                "name_en": "Net profit after tax",
                                "unit": "VND",
                                "data_type": "currency",
                                "category": "income_statement"
                            }
                        },
                        "balance_sheet": {
                            "BBS_400": {
                                "name_local": "Vốn chủ sở hữu",
                                "name_en": "Owner's equity",
                                "unit": "VND",
                                "data_type": "currency",
                                "category": "balance_sheet"
                            }
                        }
                    }
                },
                "calculated_metrics": {
                    "roe": {
                        "formula": "net profit after tax / average owner's equity",
                        "entity_types": ["BANK"],
                        "dependencies": { "BANK": ["BIS_22A", "BBS_400"] }
                    }
                }
            }"#,
        )
        .expect("metric document must parse");

        let sector_doc = SectorRegistryDoc::parse(
            r#"{
                "entity_types": {
                    "BANK": { "sectors": ["Banking"], "count": 1 },
                    "COMPANY": { "sectors": ["Technology"], "count": 1 }
                },
                "sectors": {
                    "Banking": { "entity_type": "BANK", "tickers": ["ACB", "VCB"] },
                    "Technology": { "entity_type": "COMPANY", "tickers": ["FPT"] }
                },
                "ticker_mapping": {
                    "ACB": {
                        "entity_type": "BANK",
                        "sector": "Banking",
                        "name": "Asia Commercial Bank",
                        "exchange": "HOSE"
                    },
                    "VCB": {
                        "entity_type": "BANK",
                        "sector": "Banking",
                        "name": "Vietcombank",
                        "exchange": "HOSE"
                    },
                    "FPT": {
                        "entity_type": "COMPANY",
                        "sector": "Technology",
                        "name": "FPT Corporation",
                        "exchange": "HOSE"
                    }
                },
                "sector_to_entity_mapping": {
                    "Banking": "BANK",
                    "Technology": "COMPANY"
                }
            }"#,
        )
        .expect("sector document must parse");

        EntityResolver::from_documents(&metric_doc, &sector_doc).expect("resolver must build")
    }

    #[test]
    fn complete_info_classifies_a_bank_ticker() {
        let resolver = sample_resolver();
        let profile = resolver.get_complete_info("ACB").expect("must resolve");

        assert_eq!(profile.entity_type, EntityType::Bank);
        assert_eq!(profile.sector, "Banking");
        assert_eq!(profile.calculator, CalculatorTag::BankCalculator);
        assert!(profile.available_metrics.contains_key("BIS_22A"));
        assert!(!profile.available_metrics.contains_key("CIS_62"));
        assert_eq!(profile.calculated_metrics, vec![String::from("roe")]);
        assert_eq!(profile.peers, vec![String::from("VCB")]);
    }

    #[test]
    fn metric_ownership_truth_table() {
        let resolver = sample_resolver();

        assert!(resolver
            .validate_metric_for_ticker("ACB", "BIS_22A")
            .expect("known ticker"));
        assert!(!resolver
            .validate_metric_for_ticker("ACB", "CIS_62")
            .expect("cross-type mismatch is Ok(false), not an error"));
        assert!(resolver
            .validate_metric_for_ticker("FPT", "CIS_62")
            .expect("known ticker"));

        let err = resolver
            .validate_metric_for_ticker("ZZZ", "CIS_62")
            .expect_err("unknown symbol is an error");
        assert!(matches!(err, RegistryError::TickerNotFound { .. }));
    }

    #[test]
    fn metric_search_filters_by_owning_entity_and_sector() {
        let resolver = sample_resolver();

        let symbols = resolver.search_tickers_with_metric("BIS_22A", None);
        assert_eq!(symbols, vec![String::from("ACB"), String::from("VCB")]);

        let symbols = resolver.search_tickers_with_metric("BIS_22A", Some("Technology"));
        assert!(symbols.is_empty());

        let symbols = resolver.search_tickers_with_metric("XYZ_1", None);
        assert!(symbols.is_empty());
    }

    #[test]
    fn peer_comparison_restricts_to_applicable_metrics() {
        let resolver = sample_resolver();

        let comparison = resolver
            .get_peer_comparison_info("FPT")
            .expect("must resolve");
        assert!(comparison.comparable_metrics.is_empty());

        let comparison = resolver
            .get_peer_comparison_info("ACB")
            .expect("must resolve");
        assert_eq!(comparison.comparable_metrics, vec![String::from("roe")]);
        assert_eq!(
            comparison.dependencies["roe"],
            vec![String::from("BIS_22A"), String::from("BBS_400")]
        );
    }
}
