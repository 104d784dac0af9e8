use serde::Serialize;

use vnfin_core::RegistryId;
use vnfin_registry::EntityResolver;

use crate::cli::PeersArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct PeersData {
    symbol: String,
    sector: String,
    peers: Vec<String>,
}

pub fn run(args: &PeersArgs, resolver: &EntityResolver) -> Result<CommandResult, CliError> {
    let ticker = resolver.directory().get_ticker(&args.symbol)?;
    let peers = resolver.directory().get_peers(&ticker.symbol)?;

    let data = serde_json::to_value(PeersData {
        symbol: ticker.symbol.clone(),
        sector: ticker.sector.clone(),
        peers,
    })?;

    Ok(CommandResult::ok(data, vec![RegistryId::Sector]))
}
