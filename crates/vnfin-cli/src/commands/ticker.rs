use vnfin_core::RegistryId;
use vnfin_registry::EntityResolver;

use crate::cli::TickerArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &TickerArgs, resolver: &EntityResolver) -> Result<CommandResult, CliError> {
    let profile = resolver.get_complete_info(&args.symbol)?;
    let data = serde_json::to_value(profile)?;

    Ok(CommandResult::ok(
        data,
        vec![RegistryId::Metric, RegistryId::Sector],
    ))
}
