//! Bulk document rewrites.

use serde_json::{json, Value};

use crate::models::{FeatureName, Relation, RewardType};

/// Point an entire chain offer document at a different hero.
///
/// Rewrites `Heroes` conditions (array-valued for `inc`/`exc` relations,
/// scalar otherwise), sets every chain's `options.featuringHeroId`, and
/// replaces `heroId` on every hero-bearing reward. Pure: returns a rewritten
/// copy; non-object inputs come back unchanged.
pub fn swap_hero(config: &Value, hero_id: i64) -> Value {
    let mut next = config.clone();

    let Some(groups) = next
        .get_mut("chainsAndConditions")
        .and_then(Value::as_array_mut)
    else {
        return next;
    };

    for group in groups {
        if let Some(conditions) = group.get_mut("Conditions").and_then(Value::as_array_mut) {
            for condition in conditions {
                swap_condition(condition, hero_id);
            }
        }

        let Some(chains) = group.get_mut("chainList").and_then(Value::as_array_mut) else {
            continue;
        };
        for chain in chains {
            if let Some(chain_obj) = chain.as_object_mut() {
                match chain_obj.get_mut("options").and_then(Value::as_object_mut) {
                    Some(options) => {
                        options.insert("featuringHeroId".to_string(), json!(hero_id));
                    }
                    None => {
                        chain_obj.insert(
                            "options".to_string(),
                            json!({ "featuringHeroId": hero_id }),
                        );
                    }
                }
            }

            let Some(offers) = chain.get_mut("chainOffers").and_then(Value::as_array_mut)
            else {
                continue;
            };
            for offer in offers {
                let Some(rewards) = offer.get_mut("rewards").and_then(Value::as_array_mut)
                else {
                    continue;
                };
                for reward in rewards {
                    swap_reward(reward, hero_id);
                }
            }
        }
    }

    next
}

fn swap_condition(condition: &mut Value, hero_id: i64) {
    let feature = condition.get("FeatureName").and_then(Value::as_str);
    if feature != Some(FeatureName::Heroes.as_str()) {
        return;
    }

    let relation = condition.get("Relation").and_then(Value::as_str);
    let is_array = relation == Some(Relation::Inc.as_str())
        || relation == Some(Relation::Exc.as_str());
    let value = if is_array {
        json!([hero_id])
    } else {
        json!(hero_id)
    };
    if let Some(obj) = condition.as_object_mut() {
        obj.insert("Value".to_string(), value);
    }
}

fn swap_reward(reward: &mut Value, hero_id: i64) {
    let is_hero_bearing = reward
        .get("rewardType")
        .and_then(Value::as_str)
        .and_then(RewardType::from_tag)
        .map_or(false, RewardType::is_hero_bearing);
    if !is_hero_bearing {
        return;
    }
    if let Some(obj) = reward.as_object_mut() {
        obj.insert("heroId".to_string(), json!(hero_id));
    }
}
