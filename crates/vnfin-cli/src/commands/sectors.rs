use serde::Serialize;

use vnfin_core::{EntityType, RegistryId};
use vnfin_registry::EntityResolver;

use crate::cli::SectorsArgs;
use crate::error::CliError;

use super::{parse_entity, CommandResult};

#[derive(Debug, Serialize)]
struct SectorRow {
    name: String,
    entity_type: EntityType,
    ticker_count: usize,
}

#[derive(Debug, Serialize)]
struct SectorsData {
    count: usize,
    sectors: Vec<SectorRow>,
}

pub fn run(args: &SectorsArgs, resolver: &EntityResolver) -> Result<CommandResult, CliError> {
    let entity_type = args.entity.as_deref().map(parse_entity).transpose()?;
    let directory = resolver.directory();

    let sectors: Vec<SectorRow> = match &args.search {
        Some(keyword) => directory
            .search_sectors(keyword)
            .into_iter()
            .filter(|sector| entity_type.is_none_or(|entity| sector.entity_type == entity))
            .map(to_row)
            .collect(),
        None => directory
            .sectors()
            .filter(|sector| entity_type.is_none_or(|entity| sector.entity_type == entity))
            .map(to_row)
            .collect(),
    };

    let data = serde_json::to_value(SectorsData {
        count: sectors.len(),
        sectors,
    })?;

    Ok(CommandResult::ok(data, vec![RegistryId::Sector]))
}

fn to_row(sector: &vnfin_registry::Sector) -> SectorRow {
    SectorRow {
        name: sector.name.clone(),
        entity_type: sector.entity_type,
        ticker_count: sector.member_tickers.len(),
    }
}
