//! CLI argument definitions for vnfin.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ticker` | Resolve a ticker's complete profile |
//! | `metric` | Exact metric-code lookup for one entity type |
//! | `metrics` | Search metric definitions by name |
//! | `peers` | List a ticker's sector peers |
//! | `sectors` | List or search sectors |
//! | `computable` | Report which derived metrics a data row can support |
//! | `coverage` | List tickers whose entity type owns a metric code |
//! | `compare` | Peer-comparison metric set for a ticker |
//! | `ask` | Answer a plain-language registry question |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors (exit code 5) |
//! | `--registry-dir` | `$VNFIN_HOME` or `./data` | Registry document directory |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Vietnamese-market metric & sector resolution CLI.
///
/// Loads the two registry documents, integrity-checks them, and answers
/// queries about tickers, sectors, metric namespaces and computability.
#[derive(Debug, Parser)]
#[command(
    name = "vnfin",
    author,
    version,
    about = "Metric & sector resolution for the Vietnamese market"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Directory holding metric_registry.json and
    /// sector_industry_registry.json. Defaults to $VNFIN_HOME, then ./data.
    #[arg(long, global = true, value_name = "DIR")]
    pub registry_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Ndjson,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a ticker's complete profile (classification, metrics, peers).
    Ticker(TickerArgs),
    /// Look up one metric code within one entity type's namespace.
    Metric(MetricArgs),
    /// Search metric definitions by localized or English name.
    Metrics(MetricsArgs),
    /// List a ticker's sector peers (the ticker itself is excluded).
    Peers(PeersArgs),
    /// List sectors, optionally filtered by entity type or name keyword.
    Sectors(SectorsArgs),
    /// Report which calculated metrics are computable from a set of raw codes.
    Computable(ComputableArgs),
    /// List tickers whose entity type owns a metric code.
    Coverage(CoverageArgs),
    /// Peer-comparison metric set and dependencies for a ticker.
    Compare(CompareArgs),
    /// Answer a plain-language question about the registries.
    Ask(AskArgs),
}

#[derive(Debug, Args)]
pub struct TickerArgs {
    /// Ticker symbol, e.g. ACB.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct MetricArgs {
    /// Metric code, e.g. BIS_22A.
    pub code: String,

    /// Entity type owning the namespace (COMPANY, BANK, INSURANCE, SECURITY).
    #[arg(long)]
    pub entity: String,
}

#[derive(Debug, Args)]
pub struct MetricsArgs {
    /// Case-insensitive substring of the metric name (Vietnamese or English).
    pub query: String,

    /// Restrict the search to one entity type.
    #[arg(long)]
    pub entity: Option<String>,
}

#[derive(Debug, Args)]
pub struct PeersArgs {
    /// Ticker symbol, e.g. ACB.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct SectorsArgs {
    /// Restrict to sectors of one entity type.
    #[arg(long)]
    pub entity: Option<String>,

    /// Case-insensitive substring of the sector name.
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct ComputableArgs {
    /// Ticker symbol, e.g. ACB.
    pub symbol: String,

    /// Raw metric codes present in the data row, comma separated.
    #[arg(long, value_delimiter = ',', required = true)]
    pub have: Vec<String>,
}

#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Metric code, e.g. BIS_22A.
    pub code: String,

    /// Restrict results to one sector.
    #[arg(long)]
    pub sector: Option<String>,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Ticker symbol, e.g. ACB.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// The question, e.g. "what sector is FPT" or "peers of ACB".
    pub question: String,
}
