mod ask;
mod compare;
mod computable;
mod coverage;
mod metric;
mod metrics;
mod peers;
mod sectors;
mod ticker;

use std::env;
use std::path::PathBuf;

use serde_json::Value;
use uuid::Uuid;

use vnfin_core::{Envelope, EnvelopeMeta, RegistryId};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub registry_chain: Vec<RegistryId>,
}

impl CommandResult {
    pub fn ok(data: Value, registry_chain: Vec<RegistryId>) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            registry_chain,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let registry_dir = resolve_registry_dir(cli.registry_dir.clone());
    let resolver = vnfin_registry::resolver_from_dir(&registry_dir)?;

    let command_result = match &cli.command {
        Command::Ticker(args) => ticker::run(args, &resolver)?,
        Command::Metric(args) => metric::run(args, &resolver)?,
        Command::Metrics(args) => metrics::run(args, &resolver)?,
        Command::Peers(args) => peers::run(args, &resolver)?,
        Command::Sectors(args) => sectors::run(args, &resolver)?,
        Command::Computable(args) => computable::run(args, &resolver)?,
        Command::Coverage(args) => coverage::run(args, &resolver)?,
        Command::Compare(args) => compare::run(args, &resolver)?,
        Command::Ask(args) => ask::run(args, &resolver)?,
    };

    let CommandResult {
        data,
        warnings,
        registry_chain,
    } = command_result;

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), "v1.0.0", registry_chain)?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok(Envelope::success(meta, data))
}

fn resolve_registry_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var_os("VNFIN_HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Parse an `--entity` argument into the closed enum.
pub(crate) fn parse_entity(value: &str) -> Result<vnfin_core::EntityType, CliError> {
    value
        .parse::<vnfin_core::EntityType>()
        .map_err(CliError::Validation)
}
