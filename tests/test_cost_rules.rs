//! Unit tests for cost record validation.

mod common;

use liveops_sdk::validate_cost;
use serde_json::json;

const LABEL: &str = "Offer 1 > cost";

fn errors_for(cost: serde_json::Value) -> Vec<String> {
    let catalog = common::catalog();
    let mut errors = Vec::new();
    validate_cost(&cost, LABEL, &catalog, &mut errors);
    errors
}

// ---------------------------------------------------------------------------
// Discriminant
// ---------------------------------------------------------------------------

#[test]
fn cost_type_is_required() {
    assert_eq!(
        errors_for(json!({ "amount": 5 })),
        vec![format!("{LABEL}: costType is required.")]
    );
}

#[test]
fn unknown_cost_type_is_rejected() {
    assert_eq!(
        errors_for(json!({ "costType": "Diamond" })),
        vec![format!("{LABEL}: unsupported costType.")]
    );
}

#[test]
fn non_string_cost_type_is_rejected() {
    assert_eq!(
        errors_for(json!({ "costType": 3 })),
        vec![format!("{LABEL}: unsupported costType.")]
    );
}

// ---------------------------------------------------------------------------
// Per-type fields
// ---------------------------------------------------------------------------

#[test]
fn money_requires_a_product_sku() {
    assert_eq!(
        errors_for(json!({ "costType": "Money" })),
        vec![format!("{LABEL}: productSku is required for Money costs.")]
    );
}

#[test]
fn money_sku_must_be_in_the_table() {
    assert_eq!(
        errors_for(json!({ "costType": "Money", "productSku": 123 })),
        vec![format!("{LABEL}: productSku 123 is not a recognized SKU.")]
    );
}

#[test]
fn money_with_known_sku_is_valid() {
    let catalog = common::catalog();
    let sku = catalog.money_skus()[0];
    assert!(errors_for(json!({ "costType": "Money", "productSku": sku })).is_empty());
}

#[test]
fn gem_gold_and_elpoint_require_amount() {
    for tag in ["Gem", "Gold", "ElPoint"] {
        assert_eq!(
            errors_for(json!({ "costType": tag })),
            vec![format!("{LABEL}: amount is required for {tag} costs.")]
        );
        assert!(errors_for(json!({ "costType": tag, "amount": 10 })).is_empty());
    }
}

#[test]
fn ad_and_free_take_no_fields() {
    assert!(errors_for(json!({ "costType": "Ad" })).is_empty());
    assert!(errors_for(json!({ "costType": "Free" })).is_empty());
}

// ---------------------------------------------------------------------------
// Fail-soft policy
// ---------------------------------------------------------------------------

#[test]
fn empty_sku_table_surfaces_a_system_error() {
    let catalog = common::degenerate_catalog();
    let mut errors = Vec::new();
    validate_cost(
        &json!({ "costType": "Money", "productSku": 900 }),
        LABEL,
        &catalog,
        &mut errors,
    );
    assert_eq!(
        errors,
        vec![format!(
            "{LABEL}: System Error during validation: money SKU table is empty"
        )]
    );
}
