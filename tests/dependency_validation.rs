//! Computability gap reports: a calculator asks up front which derived
//! metrics a data row can support, and gets missing codes by name.

use std::collections::BTreeSet;

use vnfin_core::EntityType;
use vnfin_registry::{DependencyValidator, RegistryError};

use vnfin_tests::build_resolver;

fn codes(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|code| String::from(*code)).collect()
}

#[test]
fn partial_row_reports_the_missing_code_by_name() {
    let resolver = build_resolver();
    let validator = DependencyValidator::new(&resolver);

    let verdicts = validator
        .check_computable("ACB", &codes(&["BIS_22A"]))
        .expect("known ticker");

    let roe = &verdicts["roe"];
    assert!(!roe.computable);
    assert_eq!(roe.missing, vec![String::from("BBS_400")]);
}

#[test]
fn full_row_makes_every_applicable_metric_computable() {
    let resolver = build_resolver();
    let validator = DependencyValidator::new(&resolver);

    let verdicts = validator
        .check_computable(
            "ACB",
            &codes(&["BIS_9", "BIS_12", "BIS_22A", "BBS_300", "BBS_400"]),
        )
        .expect("known ticker");

    assert_eq!(verdicts.len(), 3); // roe, roa, cost_to_income
    assert!(verdicts.values().all(|status| status.computable));
    assert!(verdicts.values().all(|status| status.missing.is_empty()));
}

#[test]
fn verdicts_cover_exactly_the_metrics_applicable_to_the_entity_type() {
    let resolver = build_resolver();
    let validator = DependencyValidator::new(&resolver);

    let verdicts = validator
        .check_computable("FPT", &codes(&["CIS_62"]))
        .expect("known ticker");

    assert!(verdicts.contains_key("roe"));
    assert!(verdicts.contains_key("roa"));
    assert!(verdicts.contains_key("net_profit_margin"));
    assert!(!verdicts.contains_key("cost_to_income"));
}

#[test]
fn empty_row_blocks_everything_with_full_missing_lists() {
    let resolver = build_resolver();
    let validator = DependencyValidator::new(&resolver);

    let verdicts = validator
        .check_computable("SSI", &BTreeSet::new())
        .expect("known ticker");

    assert!(verdicts.values().all(|status| !status.computable));
    let roe = &verdicts["roe"];
    assert_eq!(
        roe.missing,
        vec![String::from("SIS_62"), String::from("SBS_400")]
    );
}

#[test]
fn unknown_ticker_is_an_error_not_an_empty_report() {
    let resolver = build_resolver();
    let validator = DependencyValidator::new(&resolver);

    let err = validator
        .check_computable("ZZZ", &codes(&["CIS_62"]))
        .expect_err("must fail");
    assert!(matches!(err, RegistryError::TickerNotFound { .. }));
}

// =============================================================================
// Catalog-level validation
// =============================================================================

#[test]
fn validate_dependencies_is_pure_and_repeatable() {
    let resolver = build_resolver();
    let available = codes(&["BIS_22A"]);

    let first = resolver
        .catalog()
        .validate_dependencies("roe", &available, EntityType::Bank)
        .expect("roe applies to banks");
    let second = resolver
        .catalog()
        .validate_dependencies("roe", &available, EntityType::Bank)
        .expect("roe applies to banks");

    assert_eq!(first, second);
    assert!(!first.is_valid);
}

#[test]
fn validating_against_a_non_applicable_entity_type_is_an_error() {
    let resolver = build_resolver();

    let err = resolver
        .catalog()
        .validate_dependencies("cost_to_income", &codes(&["CIS_62"]), EntityType::Company)
        .expect_err("cost_to_income is bank-only");
    assert!(matches!(err, RegistryError::MetricNotApplicable { .. }));
}

#[test]
fn unknown_calculated_metric_is_an_error() {
    let resolver = build_resolver();

    let err = resolver
        .catalog()
        .validate_dependencies("ebitda_margin", &codes(&["CIS_62"]), EntityType::Company)
        .expect_err("must fail");
    assert!(matches!(err, RegistryError::CalculatedMetricNotFound { .. }));
}

// =============================================================================
// Name search (scenario: "profit")
// =============================================================================

#[test]
fn name_search_matches_localized_names_case_insensitively() {
    let resolver = build_resolver();

    let hits = resolver.catalog().search_by_name("PROFIT", None);
    assert!(!hits.is_empty());
    assert!(hits
        .iter()
        .all(|metric| metric.name_en.to_lowercase().contains("profit")));

    // The Vietnamese name matches too.
    let hits = resolver.catalog().search_by_name("lợi nhuận", Some(EntityType::Bank));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code, "BIS_22A");
}
