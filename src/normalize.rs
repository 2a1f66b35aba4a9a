//! Structural repair of partially edited documents.
//!
//! Normalization fills the fields implied by a record's discriminant so the
//! record is structurally complete, and nothing more: it never removes
//! fields, never checks ranges, and is idempotent. A normalized record can
//! still fail validation (a defaulted `amount` of `0` does not satisfy the
//! `> 0` rule); the two passes are deliberately independent.

use serde_json::{json, Map, Value};

use crate::models::{ChestType, RewardType};
use crate::validate::{is_finite_number, is_truthy};

/// Fill type-implied defaults into a reward record. Total and idempotent.
pub fn normalize_reward(reward: &Value) -> Value {
    let Some(object) = reward.as_object() else {
        return reward.clone();
    };
    if !is_truthy(object.get("rewardType")) {
        return reward.clone();
    }
    let tag = object.get("rewardType").and_then(Value::as_str).unwrap_or("");

    let mut next = object.clone();

    match RewardType::from_tag(tag) {
        Some(RewardType::Chest) => {
            default_number(&mut next, "amount", 0);
            if !is_set(&next, "chestType") {
                next.insert("chestType".to_string(), json!(ChestType::Free.code()));
            }
        }
        Some(RewardType::HeroCard) => {
            default_number(&mut next, "cardAmount", 0);
        }
        Some(RewardType::HeroAbilityCard) => {
            if !is_truthy(next.get("ability")) {
                next.insert("ability".to_string(), json!("ab1"));
            }
            default_number(&mut next, "cardAmount", 0);
        }
        Some(ty) if ty.is_amount_exempt() => {}
        // Unknown tags get the generic amount default too; validation, not
        // normalization, is where they are rejected.
        _ => {
            default_number(&mut next, "amount", 0);
        }
    }

    Value::Object(next)
}

/// Normalize every reward in a chain offer document.
///
/// The deep map is unconditional: missing or non-array containers become
/// empty arrays at every level, so a repaired document always has the full
/// groups > chains > offers > rewards skeleton.
pub fn normalize_config(config: &Value) -> Value {
    let Some(object) = config.as_object() else {
        return config.clone();
    };

    let mut next = object.clone();
    let groups = array_of(object.get("chainsAndConditions"))
        .iter()
        .map(normalize_group)
        .collect::<Vec<_>>();
    next.insert("chainsAndConditions".to_string(), Value::Array(groups));
    Value::Object(next)
}

fn normalize_group(group: &Value) -> Value {
    let Some(object) = group.as_object() else {
        return group.clone();
    };
    let mut next = object.clone();
    let chains = array_of(object.get("chainList"))
        .iter()
        .map(normalize_chain)
        .collect::<Vec<_>>();
    next.insert("chainList".to_string(), Value::Array(chains));
    Value::Object(next)
}

fn normalize_chain(chain: &Value) -> Value {
    let Some(object) = chain.as_object() else {
        return chain.clone();
    };
    let mut next = object.clone();
    let offers = array_of(object.get("chainOffers"))
        .iter()
        .map(normalize_offer)
        .collect::<Vec<_>>();
    next.insert("chainOffers".to_string(), Value::Array(offers));
    Value::Object(next)
}

fn normalize_offer(offer: &Value) -> Value {
    let Some(object) = offer.as_object() else {
        return offer.clone();
    };
    let mut next = object.clone();
    let rewards = array_of(object.get("rewards"))
        .iter()
        .map(normalize_reward)
        .collect::<Vec<_>>();
    next.insert("rewards".to_string(), Value::Array(rewards));
    Value::Object(next)
}

fn array_of(value: Option<&Value>) -> &[Value] {
    value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default()
}

fn default_number(object: &mut Map<String, Value>, key: &str, default: i64) {
    if !is_finite_number(object.get(key)) {
        object.insert(key.to_string(), json!(default));
    }
}

fn is_set(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).map_or(false, |v| !v.is_null())
}
