use serde::Serialize;
use serde_json::Value;

use vnfin_core::RegistryId;
use vnfin_registry::{EntityResolver, MetricDefinition};

use crate::cli::MetricsArgs;
use crate::error::CliError;

use super::{parse_entity, CommandResult};

#[derive(Debug, Serialize)]
struct MetricSearchData<'a> {
    query: &'a str,
    count: usize,
    results: Vec<&'a MetricDefinition>,
}

pub fn run(args: &MetricsArgs, resolver: &EntityResolver) -> Result<CommandResult, CliError> {
    let query = args.query.trim();
    if query.is_empty() {
        return Err(CliError::Command(String::from("query must not be empty")));
    }

    let entity_type = args.entity.as_deref().map(parse_entity).transpose()?;
    let results = resolver.catalog().search_by_name(query, entity_type);

    let data: Value = serde_json::to_value(MetricSearchData {
        query,
        count: results.len(),
        results,
    })?;

    Ok(CommandResult::ok(data, vec![RegistryId::Metric]))
}
