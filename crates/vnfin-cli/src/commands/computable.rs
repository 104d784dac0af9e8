use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use vnfin_core::RegistryId;
use vnfin_registry::{ComputableStatus, DependencyValidator, EntityResolver};

use crate::cli::ComputableArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ComputableData {
    symbol: String,
    available_codes: Vec<String>,
    metrics: BTreeMap<String, ComputableStatus>,
}

pub fn run(args: &ComputableArgs, resolver: &EntityResolver) -> Result<CommandResult, CliError> {
    let available: BTreeSet<String> = args
        .have
        .iter()
        .map(|code| code.trim().to_owned())
        .filter(|code| !code.is_empty())
        .collect();

    if available.is_empty() {
        return Err(CliError::Command(String::from(
            "--have must list at least one raw metric code",
        )));
    }

    let ticker = resolver.directory().get_ticker(&args.symbol)?;
    let metrics = DependencyValidator::new(resolver).check_computable(&ticker.symbol, &available)?;

    let blocked = metrics.values().filter(|status| !status.computable).count();
    let data = serde_json::to_value(ComputableData {
        symbol: ticker.symbol.clone(),
        available_codes: available.into_iter().collect(),
        metrics,
    })?;

    let mut result = CommandResult::ok(data, vec![RegistryId::Metric, RegistryId::Sector]);
    if blocked > 0 {
        result = result.with_warning(format!(
            "{blocked} calculated metric(s) are blocked by missing raw codes"
        ));
    }

    Ok(result)
}
