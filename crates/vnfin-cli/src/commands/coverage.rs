use serde::Serialize;

use vnfin_core::{EntityType, RegistryId};
use vnfin_registry::EntityResolver;

use crate::cli::CoverageArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CoverageData {
    code: String,
    owning_entity_types: Vec<EntityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sector: Option<String>,
    count: usize,
    symbols: Vec<String>,
}

pub fn run(args: &CoverageArgs, resolver: &EntityResolver) -> Result<CommandResult, CliError> {
    let owning = resolver.catalog().entity_types_owning(&args.code);
    let symbols = resolver.search_tickers_with_metric(&args.code, args.sector.as_deref());

    let data = serde_json::to_value(CoverageData {
        code: args.code.clone(),
        owning_entity_types: owning.clone(),
        sector: args.sector.clone(),
        count: symbols.len(),
        symbols,
    })?;

    let mut result = CommandResult::ok(data, vec![RegistryId::Metric, RegistryId::Sector]);
    if owning.is_empty() {
        result = result.with_warning(format!(
            "code '{}' is not defined in any entity type's namespace",
            args.code
        ));
    }

    Ok(result)
}
