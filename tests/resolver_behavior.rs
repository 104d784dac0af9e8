//! Behavior-driven tests for ticker resolution.
//!
//! These verify the user-visible contract: what a consumer learns about a
//! ticker, which metric codes it may address, and who its peers are.

use vnfin_core::{CalculatorTag, EntityType};
use vnfin_registry::RegistryError;

use vnfin_tests::build_resolver;

// =============================================================================
// Classification
// =============================================================================

#[test]
fn acb_resolves_to_a_bank_in_the_banking_sector() {
    let resolver = build_resolver();
    let profile = resolver.get_complete_info("ACB").expect("must resolve");

    assert_eq!(profile.entity_type, EntityType::Bank);
    assert_eq!(profile.sector, "Banking");
    assert_eq!(profile.calculator, CalculatorTag::BankCalculator);
    assert_eq!(profile.exchange, "HOSE");
}

#[test]
fn every_ticker_classifies_into_one_of_the_four_entity_types() {
    let resolver = build_resolver();

    for ticker in resolver.directory().tickers() {
        assert!(EntityType::ALL.contains(&ticker.entity_type));
        let selector = resolver
            .get_calculator_selector(&ticker.symbol)
            .expect("every known ticker selects a calculator");
        assert_eq!(selector.entity_type(), ticker.entity_type);
    }
}

#[test]
fn unknown_ticker_is_reported_not_defaulted() {
    let resolver = build_resolver();
    let err = resolver.get_complete_info("ZZZ").expect_err("must fail");
    assert!(matches!(err, RegistryError::TickerNotFound { .. }));
}

// =============================================================================
// Metric namespace ownership
// =============================================================================

#[test]
fn metric_validity_follows_the_ticker_entity_type() {
    let resolver = build_resolver();

    // A bank ticker owns bank codes and nothing else.
    assert!(resolver
        .validate_metric_for_ticker("ACB", "BIS_22A")
        .expect("known ticker"));
    assert!(!resolver
        .validate_metric_for_ticker("ACB", "CIS_62")
        .expect("cross-type mismatch answers false"));

    // And symmetrically for a company ticker.
    assert!(resolver
        .validate_metric_for_ticker("FPT", "CIS_62")
        .expect("known ticker"));
    assert!(!resolver
        .validate_metric_for_ticker("FPT", "BIS_22A")
        .expect("cross-type mismatch answers false"));
}

#[test]
fn complete_info_only_lists_codes_from_the_tickers_namespace() {
    let resolver = build_resolver();
    let profile = resolver.get_complete_info("SSI").expect("must resolve");

    assert!(profile.available_metrics.keys().all(|code| {
        code.starts_with("SIS_") || code.starts_with("SBS_")
    }));
    assert!(profile
        .calculated_metrics
        .contains(&String::from("net_profit_margin")));
    assert!(!profile
        .calculated_metrics
        .contains(&String::from("cost_to_income")));
}

#[test]
fn coverage_search_finds_all_and_only_owning_tickers() {
    let resolver = build_resolver();

    let mut banks = resolver.search_tickers_with_metric("BIS_22A", None);
    banks.sort();
    assert_eq!(banks, vec!["ACB", "TCB", "VCB"]);

    let filtered = resolver.search_tickers_with_metric("CIS_62", Some("Technology"));
    assert_eq!(filtered, vec!["FPT"]);

    assert!(resolver.search_tickers_with_metric("XIS_1", None).is_empty());
    assert!(resolver
        .search_tickers_with_metric("BIS_22A", Some("Technology"))
        .is_empty());
}

// =============================================================================
// Peers
// =============================================================================

#[test]
fn peers_share_the_sector_and_never_include_the_ticker_itself() {
    let resolver = build_resolver();

    for ticker in resolver.directory().tickers() {
        let peers = resolver
            .directory()
            .get_peers(&ticker.symbol)
            .expect("known ticker");

        assert!(!peers.contains(&ticker.symbol));
        for peer in &peers {
            let peer_ticker = resolver.directory().get_ticker(peer).expect("peer exists");
            assert_eq!(peer_ticker.sector, ticker.sector);
            assert_eq!(peer_ticker.entity_type, ticker.entity_type);
        }
    }
}

#[test]
fn acb_peers_are_exactly_the_other_banking_tickers() {
    let resolver = build_resolver();
    let mut peers = resolver.directory().get_peers("ACB").expect("must resolve");
    peers.sort();
    assert_eq!(peers, vec!["TCB", "VCB"]);
}

#[test]
fn a_single_member_sector_has_no_peers() {
    let resolver = build_resolver();
    let peers = resolver.directory().get_peers("BVH").expect("must resolve");
    assert!(peers.is_empty());
}

#[test]
fn peer_comparison_uses_only_metrics_applicable_to_the_entity_type() {
    let resolver = build_resolver();
    let comparison = resolver
        .get_peer_comparison_info("ACB")
        .expect("must resolve");

    assert_eq!(comparison.sector, "Banking");
    assert!(comparison
        .comparable_metrics
        .contains(&String::from("cost_to_income")));
    assert!(!comparison
        .comparable_metrics
        .contains(&String::from("net_profit_margin")));
    assert_eq!(
        comparison.dependencies["roe"],
        vec![String::from("BIS_22A"), String::from("BBS_400")]
    );
}

// =============================================================================
// Directory queries
// =============================================================================

#[test]
fn sectors_index_by_entity_type() {
    let resolver = build_resolver();

    assert_eq!(
        resolver.directory().get_sectors_by_entity(EntityType::Bank),
        vec!["Banking"]
    );

    let mut company_sectors = resolver
        .directory()
        .get_sectors_by_entity(EntityType::Company);
    company_sectors.sort();
    assert_eq!(company_sectors, vec!["Real Estate", "Technology"]);
}

#[test]
fn sector_search_is_a_substring_match() {
    let resolver = build_resolver();

    let hits = resolver.directory().search_sectors("sec");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Securities");

    assert!(resolver.directory().search_sectors("aviation").is_empty());
}

#[test]
fn ticker_lookup_normalizes_case_and_whitespace() {
    let resolver = build_resolver();
    let ticker = resolver.directory().get_ticker(" vcb ").expect("must resolve");
    assert_eq!(ticker.symbol, "VCB");
    assert_eq!(ticker.display_name, "Vietcombank");
}
