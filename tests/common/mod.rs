//! Shared test fixtures for the live-ops SDK integration tests.
//!
//! Provides the standard catalog, a degenerate catalog for exercising the
//! fail-soft path, and small well-formed sample documents built with
//! `serde_json::json!`.

#![allow(dead_code)]

use liveops_sdk::{Catalog, LiveopsSdk};
use serde_json::{json, Value};

pub fn sdk() -> LiveopsSdk {
    LiveopsSdk::builder().build().unwrap()
}

pub fn catalog() -> Catalog {
    Catalog::standard()
}

/// A catalog with no skins and no SKUs, for the system-error path.
pub fn degenerate_catalog() -> Catalog {
    Catalog::new(std::iter::empty(), std::iter::empty(), Vec::new())
}

/// A non-exclusive skin present in the standard roster.
pub const PLAIN_SKIN: &str = "gypsy_default_v1";

/// A skin present in the standard roster and in the exclusive set.
pub const EXCLUSIVE_SKIN: &str = "gypsy_senua";

/// A minimal valid chain offer document: one group, one chain, one free
/// offer holding a single gem reward.
pub fn valid_config() -> Value {
    json!({
        "chainsAndConditions": [
            {
                "Conditions": [
                    { "FeatureName": "Heroes", "Relation": "inc", "Value": [1] }
                ],
                "chainList": [
                    {
                        "chainId": "chain-1",
                        "duration": 86_400_000_i64,
                        "options": { "hiddenRewards": false },
                        "chainOffers": [
                            {
                                "cost": { "costType": "Free" },
                                "rewards": [
                                    { "rewardType": "Gem", "amount": 10 }
                                ]
                            }
                        ]
                    }
                ]
            }
        ]
    })
}

/// A valid flat reward table with a single gold row.
pub fn valid_reward_file() -> Value {
    json!({
        "pointTomanRate": 100,
        "items": [
            {
                "id": "starter-gold",
                "requiredPoint": 0,
                "reward": { "rewardType": "Gold", "amount": 100 }
            }
        ]
    })
}

/// Replace the first offer of the first chain in `config`.
pub fn with_first_offer(mut config: Value, offer: Value) -> Value {
    config["chainsAndConditions"][0]["chainList"][0]["chainOffers"][0] = offer;
    config
}

/// Replace the first reward of the first offer in `config`.
pub fn with_first_reward(mut config: Value, reward: Value) -> Value {
    config["chainsAndConditions"][0]["chainList"][0]["chainOffers"][0]["rewards"][0] =
        reward;
    config
}
