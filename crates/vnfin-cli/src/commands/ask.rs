//! Plain-language question adapter.
//!
//! A thin keyword matcher layered on top of the resolver; it translates a
//! handful of question shapes into the same calls the other subcommands
//! make. It carries no resolution logic of its own.
//!
//! Supported shapes:
//!   what sector is <SYMBOL>
//!   peers of <SYMBOL>
//!   what type of entity is <SYMBOL>
//!   what metrics does <SYMBOL> have
//!   can I compute <metric?> for <SYMBOL> with <CODE,CODE,...>

use std::collections::BTreeSet;

use serde_json::json;

use vnfin_core::{CalculatorTag, RegistryId};
use vnfin_registry::{DependencyValidator, EntityResolver};

use crate::cli::AskArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Clone, PartialEq, Eq)]
enum AskIntent {
    SectorOf(String),
    PeersOf(String),
    EntityOf(String),
    MetricsOf(String),
    Computable { symbol: String, codes: Vec<String> },
}

pub fn run(args: &AskArgs, resolver: &EntityResolver) -> Result<CommandResult, CliError> {
    let intent = parse_question(&args.question).map_err(CliError::Command)?;

    let data = match &intent {
        AskIntent::SectorOf(symbol) => {
            let ticker = resolver.directory().get_ticker(symbol)?;
            json!({
                "symbol": ticker.symbol,
                "sector": ticker.sector,
                "entity_type": ticker.entity_type,
            })
        }
        AskIntent::PeersOf(symbol) => {
            let ticker = resolver.directory().get_ticker(symbol)?;
            let peers = resolver.directory().get_peers(&ticker.symbol)?;
            json!({
                "symbol": ticker.symbol,
                "sector": ticker.sector,
                "peers": peers,
            })
        }
        AskIntent::EntityOf(symbol) => {
            let ticker = resolver.directory().get_ticker(symbol)?;
            json!({
                "symbol": ticker.symbol,
                "entity_type": ticker.entity_type,
                "calculator": CalculatorTag::for_entity(ticker.entity_type),
            })
        }
        AskIntent::MetricsOf(symbol) => {
            let profile = resolver.get_complete_info(symbol)?;
            json!({
                "symbol": profile.symbol,
                "entity_type": profile.entity_type,
                "available_metrics": profile.available_metrics,
                "calculated_metrics": profile.calculated_metrics,
            })
        }
        AskIntent::Computable { symbol, codes } => {
            let available: BTreeSet<String> = codes.iter().cloned().collect();
            let verdicts = DependencyValidator::new(resolver).check_computable(symbol, &available)?;
            json!({
                "symbol": symbol,
                "available_codes": codes,
                "metrics": verdicts,
            })
        }
    };

    Ok(CommandResult::ok(
        data,
        vec![RegistryId::Metric, RegistryId::Sector],
    ))
}

const USAGE: &str = "could not understand the question; try \"what sector is FPT\", \
\"peers of ACB\", or \"can I compute roe for ACB with BIS_22A,BBS_400\"";

const STOPWORDS: [&str; 16] = [
    "what", "which", "is", "are", "the", "a", "an", "of", "for", "does", "do", "have", "has",
    "can", "i", "in",
];

fn parse_question(line: &str) -> Result<AskIntent, String> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return Err(String::from("empty question"));
    }

    let has = |word: &str| tokens.iter().any(|token| token == word);

    if has("compute") || has("calculate") || has("computable") {
        let symbol = token_after(&tokens, "for")
            .or_else(|| pick_symbol(&tokens))
            .ok_or_else(|| String::from(USAGE))?;
        let codes = codes_after(&tokens, "with");
        if codes.is_empty() {
            return Err(String::from(
                "computability questions need raw codes, e.g. \"... with BIS_22A,BBS_400\"",
            ));
        }
        return Ok(AskIntent::Computable { symbol, codes });
    }

    let symbol = pick_symbol(&tokens).ok_or_else(|| String::from(USAGE))?;

    if has("peer") || has("peers") {
        return Ok(AskIntent::PeersOf(symbol));
    }
    if has("sector") || has("industry") {
        return Ok(AskIntent::SectorOf(symbol));
    }
    if has("metric") || has("metrics") {
        return Ok(AskIntent::MetricsOf(symbol));
    }
    if has("type") || has("entity") {
        return Ok(AskIntent::EntityOf(symbol));
    }

    Err(String::from(USAGE))
}

fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|ch: char| !ch.is_ascii_alphanumeric() && ch != '_' && ch != ',')
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Last token that looks like a ticker symbol: short, alphanumeric, neither a
/// stopword nor a metric code (codes carry an underscore).
fn pick_symbol(tokens: &[String]) -> Option<String> {
    tokens
        .iter()
        .rev()
        .find(|token| {
            token.len() <= 8
                && !token.contains('_')
                && !token.contains(',')
                && token.chars().all(|ch| ch.is_ascii_alphanumeric())
                && !STOPWORDS.contains(&token.as_str())
                && !is_question_word(token)
        })
        .map(|token| token.to_ascii_uppercase())
}

fn is_question_word(token: &str) -> bool {
    matches!(
        token,
        "sector" | "industry" | "peer" | "peers" | "metric" | "metrics" | "type" | "entity"
            | "compute" | "calculate" | "computable" | "with" | "ticker"
    )
}

fn token_after(tokens: &[String], marker: &str) -> Option<String> {
    let index = tokens.iter().position(|token| token == marker)?;
    tokens
        .get(index + 1)
        .filter(|token| !token.contains('_') && !token.contains(','))
        .map(|token| token.to_ascii_uppercase())
}

fn codes_after(tokens: &[String], marker: &str) -> Vec<String> {
    let Some(index) = tokens.iter().position(|token| token == marker) else {
        return Vec::new();
    };

    tokens[index + 1..]
        .iter()
        .flat_map(|token| token.split(','))
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sector_question() {
        let intent = parse_question("what sector is FPT?").expect("must parse");
        assert_eq!(intent, AskIntent::SectorOf(String::from("FPT")));
    }

    #[test]
    fn parses_peers_question() {
        let intent = parse_question("peers of acb").expect("must parse");
        assert_eq!(intent, AskIntent::PeersOf(String::from("ACB")));
    }

    #[test]
    fn parses_entity_question() {
        let intent = parse_question("what type of entity is SSI").expect("must parse");
        assert_eq!(intent, AskIntent::EntityOf(String::from("SSI")));
    }

    #[test]
    fn parses_metrics_question() {
        let intent = parse_question("what metrics does VCB have?").expect("must parse");
        assert_eq!(intent, AskIntent::MetricsOf(String::from("VCB")));
    }

    #[test]
    fn parses_computability_question_with_codes() {
        let intent =
            parse_question("can I compute roe for ACB with BIS_22A,BBS_400").expect("must parse");
        assert_eq!(
            intent,
            AskIntent::Computable {
                symbol: String::from("ACB"),
                codes: vec![String::from("BIS_22A"), String::from("BBS_400")],
            }
        );
    }

    #[test]
    fn computability_question_without_codes_is_rejected() {
        let err = parse_question("can I compute roe for ACB").expect_err("must fail");
        assert!(err.contains("raw codes"));
    }

    #[test]
    fn unrecognized_question_is_rejected() {
        let err = parse_question("how is the weather in Hanoi").expect_err("must fail");
        assert!(err.contains("could not understand"));
    }
}
