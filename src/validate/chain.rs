//! Whole-document validation for chain offer configs.
//!
//! Walks groups, chains, offers, and rewards depth-first, collecting
//! path-qualified messages across all siblings. There is no short-circuit
//! between records; only a reward's own unrecognized discriminant stops
//! further checks on that reward.

use serde_json::Value;

use crate::catalog::Catalog;

use super::cost::validate_cost;
use super::reward::{reward_advisories, validate_reward};
use super::{is_truthy, non_empty_array};

/// Validate a full chain offer document. Empty result means exportable.
pub fn validate_config(config: &Value, catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(groups) = config.get("chainsAndConditions").and_then(Value::as_array) else {
        return vec!["Config is missing chainsAndConditions.".to_string()];
    };

    if groups.is_empty() {
        errors.push("Config must include at least one chain group.".to_string());
    }

    for (group_index, group) in groups.iter().enumerate() {
        let group_label = format!("Group {}", group_index + 1);

        if non_empty_array(group.get("Conditions")).is_none() {
            errors.push(format!("{group_label}: at least one condition is required."));
        }
        if non_empty_array(group.get("chainList")).is_none() {
            errors.push(format!("{group_label}: at least one chain is required."));
        }

        let chains = group
            .get("chainList")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for (chain_index, chain) in chains.iter().enumerate() {
            let chain_label = format!("{group_label} > Chain {}", chain_index + 1);

            if !is_truthy(chain.get("chainId")) {
                errors.push(format!("{chain_label}: chainId is required."));
            }
            if non_empty_array(chain.get("chainOffers")).is_none() {
                errors.push(format!("{chain_label}: at least one offer is required."));
            }

            let offers = chain
                .get("chainOffers")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            for (offer_index, offer) in offers.iter().enumerate() {
                let offer_label = format!("{chain_label} > Offer {}", offer_index + 1);
                validate_offer(offer, &offer_label, catalog, &mut errors);
            }
        }
    }

    errors
}

fn validate_offer(offer: &Value, label: &str, catalog: &Catalog, errors: &mut Vec<String>) {
    let has_cost = is_truthy(offer.get("cost"));
    let has_cost_ir = is_truthy(offer.get("cost_IR"));
    let has_cost_eu = is_truthy(offer.get("cost_EU"));

    // Exactly one cost mode: the universal `cost`, or the full IR + EU pair.
    if has_cost && (has_cost_ir || has_cost_eu) {
        errors.push(format!("{label}: use cost or cost_IR + cost_EU, not both."));
    }
    if !has_cost && !(has_cost_ir && has_cost_eu) {
        errors.push(format!("{label}: cost is required (cost or cost_IR + cost_EU)."));
    }

    if has_cost {
        validate_cost(&offer["cost"], &format!("{label} > cost"), catalog, errors);
    }
    if has_cost_ir {
        validate_cost(&offer["cost_IR"], &format!("{label} > cost_IR"), catalog, errors);
    }
    if has_cost_eu {
        validate_cost(&offer["cost_EU"], &format!("{label} > cost_EU"), catalog, errors);
    }

    if non_empty_array(offer.get("rewards")).is_none() {
        errors.push(format!("{label}: at least one reward is required."));
    }

    let rewards = offer
        .get("rewards")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for (reward_index, reward) in rewards.iter().enumerate() {
        let reward_label = format!("{label} > Reward {}", reward_index + 1);
        for message in validate_reward(reward, catalog) {
            errors.push(format!("{reward_label}: {message}"));
        }
    }
}

/// Collect non-fatal reward advisories across the document, with the same
/// path labels as [`validate_config`].
pub fn config_advisories(config: &Value) -> Vec<String> {
    let mut notes = Vec::new();

    let groups = config
        .get("chainsAndConditions")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for (group_index, group) in groups.iter().enumerate() {
        let chains = group
            .get("chainList")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for (chain_index, chain) in chains.iter().enumerate() {
            let offers = chain
                .get("chainOffers")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            for (offer_index, offer) in offers.iter().enumerate() {
                let rewards = offer
                    .get("rewards")
                    .and_then(Value::as_array)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                for (reward_index, reward) in rewards.iter().enumerate() {
                    for note in reward_advisories(reward) {
                        notes.push(format!(
                            "Group {} > Chain {} > Offer {} > Reward {}: {note}",
                            group_index + 1,
                            chain_index + 1,
                            offer_index + 1,
                            reward_index + 1
                        ));
                    }
                }
            }
        }
    }

    notes
}

// ---------------------------------------------------------------------------
// ChainValidator
// ---------------------------------------------------------------------------

/// Chain document validation interface bound to a catalog.
pub struct ChainValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ChainValidator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// See [`validate_config`].
    pub fn validate(&self, config: &Value) -> Vec<String> {
        validate_config(config, self.catalog)
    }

    /// See [`config_advisories`].
    pub fn advisories(&self, config: &Value) -> Vec<String> {
        config_advisories(config)
    }

    /// See [`crate::normalize::normalize_config`].
    pub fn normalize(&self, config: &Value) -> Value {
        crate::normalize::normalize_config(config)
    }

    /// See [`crate::transform::swap_hero`].
    pub fn swap_hero(&self, config: &Value, hero_id: i64) -> Value {
        crate::transform::swap_hero(config, hero_id)
    }
}
