//! Ticker classification and sector membership indexes.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;

use vnfin_core::{normalize_symbol, EntityType};

use crate::document::SectorRegistryDoc;
use crate::RegistryError;

/// One listed ticker with its registry classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticker {
    pub symbol: String,
    pub entity_type: EntityType,
    pub sector: String,
    pub display_name: String,
    pub exchange: String,
}

/// One sector; maps to exactly one entity type, never mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sector {
    pub name: String,
    pub entity_type: EntityType,
    pub member_tickers: Vec<String>,
}

/// Immutable ticker/sector directory.
#[derive(Debug)]
pub struct SectorDirectory {
    tickers: HashMap<String, Ticker>,
    ticker_order: Vec<String>,
    sectors: HashMap<String, Sector>,
    sector_order: Vec<String>,
}

impl SectorDirectory {
    /// Build the directory, running every load-time consistency check:
    /// each ticker's sector must exist and its declared entity type must
    /// match the sector-to-entity mapping, sector member lists and the
    /// ticker mapping must agree in both directions, and the per-entity
    /// summary block must match the sector table.
    pub fn from_document(doc: &SectorRegistryDoc) -> Result<Self, RegistryError> {
        let mut sectors = HashMap::new();
        let mut sector_order = Vec::new();

        for (name, sector_doc) in &doc.sectors {
            let entity_type = parse_entity_key(
                &sector_doc.entity_type,
                &format!("sector '{name}'"),
            )?;

            let mapped = doc.sector_to_entity_mapping.get(name).ok_or_else(|| {
                RegistryError::SchemaIntegrity(format!(
                    "sector '{name}' is missing from sector_to_entity_mapping"
                ))
            })?;
            let mapped_type = parse_entity_key(mapped, "sector_to_entity_mapping")?;
            if mapped_type != entity_type {
                return Err(RegistryError::SchemaIntegrity(format!(
                    "sector '{name}' declares {entity_type} but sector_to_entity_mapping \
                     says {mapped_type}"
                )));
            }

            sectors.insert(
                name.clone(),
                Sector {
                    name: name.clone(),
                    entity_type,
                    member_tickers: sector_doc.tickers.clone(),
                },
            );
            sector_order.push(name.clone());
        }

        for (name, mapped) in &doc.sector_to_entity_mapping {
            if !sectors.contains_key(name) {
                return Err(RegistryError::SchemaIntegrity(format!(
                    "sector_to_entity_mapping lists unknown sector '{name}' ({mapped})"
                )));
            }
        }

        let mut tickers = HashMap::new();
        let mut ticker_order = Vec::new();

        for (symbol, ticker_doc) in &doc.ticker_mapping {
            let entity_type = parse_entity_key(
                &ticker_doc.entity_type,
                &format!("ticker '{symbol}'"),
            )?;

            let sector = sectors.get(&ticker_doc.sector).ok_or_else(|| {
                RegistryError::SchemaIntegrity(format!(
                    "ticker '{symbol}' references unknown sector '{}'",
                    ticker_doc.sector
                ))
            })?;

            if sector.entity_type != entity_type {
                return Err(RegistryError::SchemaIntegrity(format!(
                    "ticker '{symbol}' declares {entity_type} but its sector '{}' maps to {}",
                    ticker_doc.sector, sector.entity_type
                )));
            }

            if !sector.member_tickers.iter().any(|member| member == symbol) {
                return Err(RegistryError::SchemaIntegrity(format!(
                    "ticker '{symbol}' is not listed among sector '{}' members",
                    ticker_doc.sector
                )));
            }

            tickers.insert(
                symbol.clone(),
                Ticker {
                    symbol: symbol.clone(),
                    entity_type,
                    sector: ticker_doc.sector.clone(),
                    display_name: ticker_doc.name.clone(),
                    exchange: ticker_doc.exchange.clone(),
                },
            );
            ticker_order.push(symbol.clone());
        }

        for sector in sectors.values() {
            for member in &sector.member_tickers {
                let known = tickers
                    .get(member)
                    .is_some_and(|ticker| ticker.sector == sector.name);
                if !known {
                    return Err(RegistryError::SchemaIntegrity(format!(
                        "sector '{}' lists member '{member}' which is absent from \
                         ticker_mapping or classified elsewhere",
                        sector.name
                    )));
                }
            }
        }

        for (entity_key, summary) in &doc.entity_types {
            let entity_type = parse_entity_key(entity_key, "sector registry summary")?;
            let actual: Vec<&str> = sector_order
                .iter()
                .filter(|name| sectors[name.as_str()].entity_type == entity_type)
                .map(String::as_str)
                .collect();

            if summary.count != actual.len()
                || summary.sectors.len() != actual.len()
                || !summary
                    .sectors
                    .iter()
                    .all(|name| actual.contains(&name.as_str()))
            {
                return Err(RegistryError::SchemaIntegrity(format!(
                    "summary block for {entity_type} disagrees with the sector table \
                     (declared {}, found {})",
                    summary.count,
                    actual.len()
                )));
            }
        }

        Ok(Self {
            tickers,
            ticker_order,
            sectors,
            sector_order,
        })
    }

    /// Exact ticker lookup; the symbol is normalized (trimmed, uppercased)
    /// before the lookup.
    pub fn get_ticker(&self, symbol: &str) -> Result<&Ticker, RegistryError> {
        let canonical = normalize_symbol(symbol)?;
        self.tickers
            .get(&canonical)
            .ok_or(RegistryError::TickerNotFound { symbol: canonical })
    }

    /// Member symbols of one sector, in document order.
    pub fn get_tickers_by_sector(&self, sector_name: &str) -> Result<&[String], RegistryError> {
        self.sectors
            .get(sector_name)
            .map(|sector| sector.member_tickers.as_slice())
            .ok_or_else(|| RegistryError::SectorNotFound {
                name: sector_name.to_owned(),
            })
    }

    /// Names of all sectors classified under one entity type.
    pub fn get_sectors_by_entity(&self, entity_type: EntityType) -> Vec<&str> {
        self.sector_order
            .iter()
            .filter(|name| self.sectors[name.as_str()].entity_type == entity_type)
            .map(String::as_str)
            .collect()
    }

    /// All tickers sharing `symbol`'s sector, excluding `symbol` itself.
    pub fn get_peers(&self, symbol: &str) -> Result<Vec<String>, RegistryError> {
        let ticker = self.get_ticker(symbol)?;
        let members = self.get_tickers_by_sector(&ticker.sector)?;
        Ok(members
            .iter()
            .filter(|member| *member != &ticker.symbol)
            .cloned()
            .collect())
    }

    /// Case-insensitive substring search over sector names.
    pub fn search_sectors(&self, keyword: &str) -> Vec<&Sector> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.sector_order
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(|name| &self.sectors[name.as_str()])
            .collect()
    }

    /// All sectors, in document order.
    pub fn sectors(&self) -> impl Iterator<Item = &Sector> {
        self.sector_order
            .iter()
            .filter_map(move |name| self.sectors.get(name))
    }

    /// All known tickers, in document order.
    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.ticker_order
            .iter()
            .filter_map(move |symbol| self.tickers.get(symbol))
    }

    pub fn ticker_count(&self) -> usize {
        self.ticker_order.len()
    }

    pub fn sector_count(&self) -> usize {
        self.sector_order.len()
    }
}

fn parse_entity_key(key: &str, context: &str) -> Result<EntityType, RegistryError> {
    EntityType::from_str(key).map_err(|_| {
        RegistryError::SchemaIntegrity(format!("unknown entity type '{key}' in {context}"))
    })
}
