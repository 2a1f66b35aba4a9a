//! The consolidated reward rule table.
//!
//! One rule set keyed by `rewardType`, shared by both document families: the
//! flat reward table rows and the rewards nested inside chain offers. The
//! chain walker prefixes these messages with its own path labels.

use serde_json::Value;

use crate::catalog::Catalog;
use crate::error::ValidationFault;
use crate::models::{Ability, ChestType, RewardType};

use super::{as_number, is_finite_number, is_set};

/// Validate a single reward record. Empty result means valid.
///
/// Total: an unrecognized or missing discriminant yields a single error and
/// no further checks, and an internal fault is surfaced as a single
/// `"System Error during validation: ..."` entry rather than a panic.
pub fn validate_reward(reward: &Value, catalog: &Catalog) -> Vec<String> {
    match try_validate_reward(reward, catalog) {
        Ok(errors) => errors,
        Err(fault) => vec![format!("System Error during validation: {fault}")],
    }
}

/// Validate one flat reward table row: its id plus the inner reward.
pub fn validate_reward_entry(entry: &Value, catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    let id = entry.get("id").and_then(Value::as_str);
    if id.map_or(true, |s| s.trim().is_empty()) {
        errors.push("ID is required and must be a string.".to_string());
    }

    match entry.get("reward") {
        Some(reward) if !reward.is_null() => {
            errors.extend(validate_reward(reward, catalog));
        }
        _ => errors.push("Reward object is missing.".to_string()),
    }

    errors
}

/// Non-fatal advisories for a reward. Never merged into the error list.
pub fn reward_advisories(reward: &Value) -> Vec<String> {
    let mut notes = Vec::new();

    let tag = reward.get("rewardType").and_then(Value::as_str);
    if tag == Some(RewardType::HeroAbilityCard.as_str()) {
        let hero_id = as_number(reward.get("heroId"));
        let ability = reward.get("ability").and_then(Value::as_str);
        if hero_id == Some(-1.0) && ability == Some(Ability::Ab3.as_str()) {
            notes.push(
                "Random hero (-1) with ability ab3 may not be intended for HeroAbilityCard."
                    .to_string(),
            );
        }
    }

    notes
}

fn try_validate_reward(
    reward: &Value,
    catalog: &Catalog,
) -> Result<Vec<String>, ValidationFault> {
    let mut errors = Vec::new();

    if !reward.is_object() {
        return Ok(vec!["Reward object is missing.".to_string()]);
    }

    let reward_type = match reward.get("rewardType") {
        None | Some(Value::Null) => {
            return Ok(vec!["rewardType is required.".to_string()]);
        }
        Some(Value::String(tag)) => match RewardType::from_tag(tag) {
            Some(reward_type) => reward_type,
            None => {
                return Ok(vec![format!("rewardType '{tag}' is not recognized.")]);
            }
        },
        Some(other) => {
            return Ok(vec![format!("rewardType '{other}' is not recognized.")]);
        }
    };

    if is_set(reward.get("givenArena")) && !is_finite_number(reward.get("givenArena")) {
        errors.push("givenArena must be a number.".to_string());
    }

    if !reward_type.is_amount_exempt() {
        check_positive_amount(reward, "amount", reward_type, &mut errors);
    }

    match reward_type {
        RewardType::Chest => {
            if !is_finite_number(reward.get("amount")) {
                errors.push("amount is required for Chest.".to_string());
            }
            match as_number(reward.get("chestType")) {
                None => errors.push("chestType is required for Chest.".to_string()),
                Some(code) => {
                    let code = code as i64;
                    if !ChestType::is_valid_code(code) {
                        errors.push(format!("chestType {code} is not recognized."));
                    } else if code == ChestType::None.code() {
                        errors.push("chestType must not be None.".to_string());
                    }
                }
            }
        }

        RewardType::HeroCard => {
            check_positive_amount(reward, "cardAmount", reward_type, &mut errors);
        }

        RewardType::HeroCardAndSkin => {
            if !is_finite_number(reward.get("heroId")) {
                errors.push("heroId is required for HeroCardAndSkin.".to_string());
            }

            let has_skin = reward.as_object().is_some_and(|o| o.contains_key("skinId"));
            let has_card_amount = reward
                .as_object()
                .is_some_and(|o| o.contains_key("cardAmount"));

            if has_skin {
                match reward.get("skinId").and_then(Value::as_str) {
                    None => errors.push("skinId must be a string.".to_string()),
                    Some(skin_id) => {
                        check_skin_membership(skin_id, catalog, &mut errors)?;
                    }
                }
                if has_card_amount {
                    errors.push("Cannot have cardAmount if skinId is present.".to_string());
                }
            } else {
                if !has_card_amount {
                    errors.push("Must have cardAmount if no skinId.".to_string());
                }
                check_positive_amount(reward, "cardAmount", reward_type, &mut errors);
            }
        }

        RewardType::HeroAbilityCard => {
            match reward.get("ability").and_then(Value::as_str) {
                None => errors.push("ability is required for HeroAbilityCard.".to_string()),
                Some(tag) if !matches!(tag, "ab1" | "ab2" | "ab3") => {
                    errors.push("ability must be ab1, ab2, or ab3.".to_string());
                }
                Some(_) => {}
            }
            check_positive_amount(reward, "cardAmount", reward_type, &mut errors);
        }

        RewardType::Skin => {
            match reward.get("skinId").and_then(Value::as_str) {
                None => errors.push("skinId is required for Skin.".to_string()),
                Some(skin_id) => {
                    check_skin_membership(skin_id, catalog, &mut errors)?;
                }
            }
        }

        RewardType::DailyGem => {
            if !is_finite_number(reward.get("durationInDay")) {
                errors.push("durationInDay is required for DailyGem.".to_string());
            }
        }

        ty if ty.requires_duration_seconds() => {
            if !is_finite_number(reward.get("durationSeconds")) {
                errors.push(format!("durationSeconds is required for {}.", ty.as_str()));
            }
        }

        _ => {}
    }

    // Universal heroId post-check for hero-bearing types. The >= 0 floor is
    // waived only for HeroAbilityCard, which allows the -1 random sentinel.
    if reward_type.is_hero_bearing() {
        match as_number(reward.get("heroId")) {
            None => errors.push(format!(
                "heroId is required for {}.",
                reward_type.as_str()
            )),
            Some(hero_id) => {
                let floor = if reward_type == RewardType::HeroAbilityCard {
                    -1.0
                } else {
                    0.0
                };
                if hero_id < floor {
                    errors.push(format!(
                        "heroId must be greater than or equal to {} for {}.",
                        floor as i64,
                        reward_type.as_str()
                    ));
                }
            }
        }
    }

    Ok(errors)
}

/// Require `field` to be a number strictly greater than zero.
fn check_positive_amount(
    reward: &Value,
    field: &str,
    reward_type: RewardType,
    errors: &mut Vec<String>,
) {
    match as_number(reward.get(field)) {
        None => errors.push(format!(
            "{field} is required for {}.",
            reward_type.as_str()
        )),
        Some(value) if value <= 0.0 => errors.push(format!(
            "{field} must be greater than 0 for {}.",
            reward_type.as_str()
        )),
        Some(_) => {}
    }
}

/// Roster membership and exclusivity are independent checks: an exclusive
/// skin is rejected even when it is a valid roster member.
fn check_skin_membership(
    skin_id: &str,
    catalog: &Catalog,
    errors: &mut Vec<String>,
) -> Result<(), ValidationFault> {
    catalog.ensure_skins()?;
    if !catalog.has_skin(skin_id) {
        errors.push(format!("skinId '{skin_id}' is not recognized."));
    }
    if catalog.is_exclusive(skin_id) {
        errors.push(format!("skinId '{skin_id}' is exclusive and not allowed."));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// RewardValidator
// ---------------------------------------------------------------------------

/// Reward validation interface bound to a catalog.
pub struct RewardValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> RewardValidator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// See [`validate_reward`].
    pub fn validate(&self, reward: &Value) -> Vec<String> {
        validate_reward(reward, self.catalog)
    }

    /// See [`validate_reward_entry`].
    pub fn validate_entry(&self, entry: &Value) -> Vec<String> {
        validate_reward_entry(entry, self.catalog)
    }

    /// See [`reward_advisories`].
    pub fn advisories(&self, reward: &Value) -> Vec<String> {
        reward_advisories(reward)
    }

    /// See [`crate::normalize::normalize_reward`].
    pub fn normalize(&self, reward: &Value) -> Value {
        crate::normalize::normalize_reward(reward)
    }
}