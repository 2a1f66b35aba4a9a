//! Whole-document chain offer validation tests.

mod common;

use liveops_sdk::{config_advisories, validate_config};
use serde_json::json;

// ---------------------------------------------------------------------------
// Top level
// ---------------------------------------------------------------------------

#[test]
fn valid_config_has_no_errors() {
    let catalog = common::catalog();
    assert!(validate_config(&common::valid_config(), &catalog).is_empty());
}

#[test]
fn missing_root_is_the_only_error() {
    let catalog = common::catalog();
    assert_eq!(
        validate_config(&json!({}), &catalog),
        vec!["Config is missing chainsAndConditions.".to_string()]
    );
}

#[test]
fn non_array_root_is_the_only_error() {
    let catalog = common::catalog();
    assert_eq!(
        validate_config(&json!({ "chainsAndConditions": {} }), &catalog),
        vec!["Config is missing chainsAndConditions.".to_string()]
    );
}

#[test]
fn empty_root_requires_a_group() {
    let catalog = common::catalog();
    assert_eq!(
        validate_config(&json!({ "chainsAndConditions": [] }), &catalog),
        vec!["Config must include at least one chain group.".to_string()]
    );
}

// ---------------------------------------------------------------------------
// Group and chain structure
// ---------------------------------------------------------------------------

#[test]
fn empty_group_reports_conditions_and_chains() {
    let catalog = common::catalog();
    let config = json!({ "chainsAndConditions": [ {} ] });
    assert_eq!(
        validate_config(&config, &catalog),
        vec![
            "Group 1: at least one condition is required.".to_string(),
            "Group 1: at least one chain is required.".to_string(),
        ]
    );
}

#[test]
fn chain_requires_id_and_offers() {
    let catalog = common::catalog();
    let config = json!({
        "chainsAndConditions": [
            {
                "Conditions": [
                    { "FeatureName": "Heroes", "Relation": "inc", "Value": [1] }
                ],
                "chainList": [ { "chainId": "", "chainOffers": [] } ]
            }
        ]
    });
    assert_eq!(
        validate_config(&config, &catalog),
        vec![
            "Group 1 > Chain 1: chainId is required.".to_string(),
            "Group 1 > Chain 1: at least one offer is required.".to_string(),
        ]
    );
}

// ---------------------------------------------------------------------------
// Offer costs
// ---------------------------------------------------------------------------

#[test]
fn offer_with_both_cost_modes_is_rejected() {
    let catalog = common::catalog();
    let config = common::with_first_offer(
        common::valid_config(),
        json!({
            "cost": { "costType": "Free" },
            "cost_IR": { "costType": "Gem", "amount": 5 },
            "cost_EU": { "costType": "Gem", "amount": 5 },
            "rewards": [ { "rewardType": "Gem", "amount": 10 } ]
        }),
    );
    assert_eq!(
        validate_config(&config, &catalog),
        vec!["Group 1 > Chain 1 > Offer 1: use cost or cost_IR + cost_EU, not both.".to_string()]
    );
}

#[test]
fn offer_with_no_cost_mode_is_rejected() {
    let catalog = common::catalog();
    let config = common::with_first_offer(
        common::valid_config(),
        json!({ "rewards": [ { "rewardType": "Gem", "amount": 10 } ] }),
    );
    assert_eq!(
        validate_config(&config, &catalog),
        vec!["Group 1 > Chain 1 > Offer 1: cost is required (cost or cost_IR + cost_EU).".to_string()]
    );
}

#[test]
fn half_a_localized_pair_is_not_enough() {
    let catalog = common::catalog();
    let config = common::with_first_offer(
        common::valid_config(),
        json!({
            "cost_IR": { "costType": "Gem", "amount": 5 },
            "rewards": [ { "rewardType": "Gem", "amount": 10 } ]
        }),
    );
    assert_eq!(
        validate_config(&config, &catalog),
        vec!["Group 1 > Chain 1 > Offer 1: cost is required (cost or cost_IR + cost_EU).".to_string()]
    );
}

#[test]
fn localized_pair_is_validated_per_side() {
    let catalog = common::catalog();
    let config = common::with_first_offer(
        common::valid_config(),
        json!({
            "cost_IR": { "costType": "Money" },
            "cost_EU": { "costType": "Gem" },
            "rewards": [ { "rewardType": "Gem", "amount": 10 } ]
        }),
    );
    assert_eq!(
        validate_config(&config, &catalog),
        vec![
            "Group 1 > Chain 1 > Offer 1 > cost_IR: productSku is required for Money costs."
                .to_string(),
            "Group 1 > Chain 1 > Offer 1 > cost_EU: amount is required for Gem costs."
                .to_string(),
        ]
    );
}

// ---------------------------------------------------------------------------
// Rewards inside offers
// ---------------------------------------------------------------------------

#[test]
fn offer_requires_at_least_one_reward() {
    let catalog = common::catalog();
    let config = common::with_first_offer(
        common::valid_config(),
        json!({ "cost": { "costType": "Free" }, "rewards": [] }),
    );
    assert_eq!(
        validate_config(&config, &catalog),
        vec!["Group 1 > Chain 1 > Offer 1: at least one reward is required.".to_string()]
    );
}

#[test]
fn reward_errors_carry_the_full_path() {
    let catalog = common::catalog();
    let config = common::with_first_reward(common::valid_config(), json!({ "rewardType": "Gem" }));
    assert_eq!(
        validate_config(&config, &catalog),
        vec!["Group 1 > Chain 1 > Offer 1 > Reward 1: amount is required for Gem.".to_string()]
    );
}

#[test]
fn errors_accumulate_across_siblings() {
    let catalog = common::catalog();
    let config = json!({
        "chainsAndConditions": [
            {
                "Conditions": [
                    { "FeatureName": "Heroes", "Relation": "inc", "Value": [1] }
                ],
                "chainList": [
                    {
                        "chainId": "a",
                        "chainOffers": [
                            { "cost": { "costType": "Free" }, "rewards": [ { "rewardType": "Gem" } ] },
                            { "cost": { "costType": "Free" }, "rewards": [ { "rewardType": "Gold" } ] }
                        ]
                    }
                ]
            }
        ]
    });
    assert_eq!(
        validate_config(&config, &catalog),
        vec![
            "Group 1 > Chain 1 > Offer 1 > Reward 1: amount is required for Gem.".to_string(),
            "Group 1 > Chain 1 > Offer 2 > Reward 1: amount is required for Gold.".to_string(),
        ]
    );
}

// ---------------------------------------------------------------------------
// Advisories
// ---------------------------------------------------------------------------

#[test]
fn advisories_carry_the_same_path_labels() {
    let catalog = common::catalog();
    let config = common::with_first_reward(
        common::valid_config(),
        json!({
            "rewardType": "HeroAbilityCard",
            "heroId": -1,
            "ability": "ab3",
            "cardAmount": 1
        }),
    );
    assert!(validate_config(&config, &catalog).is_empty());
    let notes = config_advisories(&config);
    assert_eq!(notes.len(), 1);
    assert!(notes[0].starts_with("Group 1 > Chain 1 > Offer 1 > Reward 1: "));
}

#[test]
fn valid_config_has_no_advisories() {
    assert!(config_advisories(&common::valid_config()).is_empty());
}
