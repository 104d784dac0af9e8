use vnfin_core::RegistryId;
use vnfin_registry::EntityResolver;

use crate::cli::MetricArgs;
use crate::error::CliError;

use super::{parse_entity, CommandResult};

pub fn run(args: &MetricArgs, resolver: &EntityResolver) -> Result<CommandResult, CliError> {
    let entity_type = parse_entity(&args.entity)?;
    let definition = resolver.catalog().get_metric(&args.code, entity_type)?;
    let data = serde_json::to_value(definition)?;

    Ok(CommandResult::ok(data, vec![RegistryId::Metric]))
}
