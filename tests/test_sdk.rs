//! Facade construction and accessor tests.

mod common;

use liveops_sdk::{Catalog, LiveopsError, LiveopsSdk};
use serde_json::json;

#[test]
fn builder_defaults_to_the_standard_catalog() {
    let sdk = LiveopsSdk::builder().build().unwrap();
    assert_eq!(sdk.catalog().heroes().len(), 15);
}

#[test]
fn builder_accepts_a_custom_catalog() {
    let catalog = Catalog::new(
        [(0, "solo_default_v1".to_string())],
        std::iter::empty(),
        vec![100],
    );
    let sdk = LiveopsSdk::builder().catalog(catalog).build().unwrap();
    assert_eq!(sdk.catalog().heroes().len(), 1);
    assert!(sdk.catalog().has_skin("solo_default_v1"));
}

#[test]
fn builder_rejects_an_empty_skin_roster() {
    let err = LiveopsSdk::builder()
        .catalog(common::degenerate_catalog())
        .build()
        .unwrap_err();
    assert!(matches!(err, LiveopsError::InvalidCatalog(_)));
}

#[test]
fn accessors_share_the_sdk_catalog() {
    let sdk = common::sdk();
    assert!(sdk
        .rewards()
        .validate(&json!({ "rewardType": "Gem", "amount": 5 }))
        .is_empty());
    assert!(sdk.chains().validate(&common::valid_config()).is_empty());
    assert!(sdk
        .documents()
        .export_chain_config(&common::valid_config())
        .is_ok());
}

#[test]
fn rewards_accessor_normalizes() {
    let sdk = common::sdk();
    let repaired = sdk.rewards().normalize(&json!({ "rewardType": "Chest" }));
    assert_eq!(repaired["chestType"], 2);
}

#[test]
fn chains_accessor_swaps_heroes() {
    let sdk = common::sdk();
    let swapped = sdk.chains().swap_hero(&common::valid_config(), 6);
    assert_eq!(
        swapped["chainsAndConditions"][0]["chainList"][0]["options"]["featuringHeroId"],
        6
    );
}

#[test]
fn display_summarizes_the_catalog() {
    let sdk = common::sdk();
    let text = sdk.to_string();
    assert!(text.starts_with("LiveopsSdk(heroes=15"));
}
