use vnfin_core::RegistryId;
use vnfin_registry::EntityResolver;

use crate::cli::CompareArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &CompareArgs, resolver: &EntityResolver) -> Result<CommandResult, CliError> {
    let comparison = resolver.get_peer_comparison_info(&args.symbol)?;
    let data = serde_json::to_value(comparison)?;

    Ok(CommandResult::ok(
        data,
        vec![RegistryId::Metric, RegistryId::Sector],
    ))
}
