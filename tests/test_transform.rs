//! Bulk hero swap tests.

mod common;

use liveops_sdk::swap_hero;
use serde_json::json;

#[test]
fn heroes_conditions_are_rewritten_with_relation_arity() {
    let config = json!({
        "chainsAndConditions": [
            {
                "Conditions": [
                    { "FeatureName": "Heroes", "Relation": "inc", "Value": [1, 2] },
                    { "FeatureName": "Heroes", "Relation": "eq", "Value": 1 }
                ],
                "chainList": []
            }
        ]
    });
    let swapped = swap_hero(&config, 7);
    let conditions = &swapped["chainsAndConditions"][0]["Conditions"];
    assert_eq!(conditions[0]["Value"], json!([7]));
    assert_eq!(conditions[1]["Value"], json!(7));
}

#[test]
fn non_hero_conditions_are_untouched() {
    let config = json!({
        "chainsAndConditions": [
            {
                "Conditions": [
                    { "FeatureName": "Arena", "Relation": "gte", "Value": 5 }
                ],
                "chainList": []
            }
        ]
    });
    let swapped = swap_hero(&config, 7);
    assert_eq!(
        swapped["chainsAndConditions"][0]["Conditions"][0]["Value"],
        json!(5)
    );
}

#[test]
fn every_chain_gets_the_featuring_hero() {
    let swapped = swap_hero(&common::valid_config(), 3);
    let chain = &swapped["chainsAndConditions"][0]["chainList"][0];
    assert_eq!(chain["options"]["featuringHeroId"], 3);
    // Other option fields survive.
    assert_eq!(chain["options"]["hiddenRewards"], false);
}

#[test]
fn chains_without_options_gain_one() {
    let config = json!({
        "chainsAndConditions": [
            {
                "Conditions": [],
                "chainList": [ { "chainId": "a", "chainOffers": [] } ]
            }
        ]
    });
    let swapped = swap_hero(&config, 4);
    assert_eq!(
        swapped["chainsAndConditions"][0]["chainList"][0]["options"]["featuringHeroId"],
        4
    );
}

#[test]
fn only_hero_bearing_rewards_are_retargeted() {
    let config = common::with_first_offer(
        common::valid_config(),
        json!({
            "cost": { "costType": "Free" },
            "rewards": [
                { "rewardType": "HeroCard", "heroId": 1, "cardAmount": 3 },
                { "rewardType": "Gem", "amount": 10 },
                { "rewardType": "HeroCardAndSkin", "amount": 1, "heroId": 1, "cardAmount": 2 }
            ]
        }),
    );
    let swapped = swap_hero(&config, 9);
    let rewards =
        &swapped["chainsAndConditions"][0]["chainList"][0]["chainOffers"][0]["rewards"];
    assert_eq!(rewards[0]["heroId"], 9);
    assert!(rewards[1].get("heroId").is_none());
    // HeroCardAndSkin is not hero-bearing for the swap.
    assert_eq!(rewards[2]["heroId"], 1);
}

#[test]
fn the_input_document_is_not_mutated() {
    let config = common::valid_config();
    let before = config.clone();
    let _ = swap_hero(&config, 2);
    assert_eq!(config, before);
}

#[test]
fn non_object_inputs_come_back_unchanged() {
    assert_eq!(swap_hero(&json!(null), 2), json!(null));
    assert_eq!(swap_hero(&json!([1, 2]), 2), json!([1, 2]));
}
