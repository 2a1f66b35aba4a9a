//! Document import and export.
//!
//! Import parses untyped JSON, shape-checks the top level, and returns a
//! normalized document; the caller keeps its current document when import
//! fails. Export is gated: it refuses outright while the validator reports
//! anything, then normalizes, strips the unused cost-mode keys, and
//! pretty-prints.

use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::error::{LiveopsError, Result};
use crate::normalize::{normalize_config, normalize_reward};
use crate::validate::{validate_config, validate_reward_entry};

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Parse a reward table document.
///
/// Accepts either the full `{pointTomanRate, items}` object or a bare items
/// array, which is wrapped with a zero rate. Rewards are imported verbatim:
/// repairing them is an explicit follow-up step, so validation can first
/// show the document's real gaps.
pub fn import_reward_file(text: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(text)?;

    if parsed.is_array() {
        return Ok(json!({ "pointTomanRate": 0, "items": parsed }));
    }
    if parsed.get("items").map_or(false, Value::is_array) {
        return Ok(parsed);
    }
    Err(LiveopsError::InvalidDocument(
        "expected an items array or an object containing one".to_string(),
    ))
}

/// Parse a chain offer document and return it normalized.
pub fn import_chain_config(text: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(text)?;
    if !parsed.is_object() {
        return Err(LiveopsError::InvalidDocument(
            "expected a chainsAndConditions object".to_string(),
        ));
    }
    Ok(normalize_config(&parsed))
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Serialize a chain offer document for the game backend.
///
/// Refuses with [`LiveopsError::ValidationFailed`] while any validation
/// error exists. The exported offers carry exactly one cost mode: the unused
/// mode's keys are stripped.
pub fn export_chain_config(config: &Value, catalog: &Catalog) -> Result<String> {
    let errors = validate_config(config, catalog);
    if !errors.is_empty() {
        return Err(LiveopsError::ValidationFailed(errors));
    }

    let mut document = normalize_config(config);
    strip_unused_cost_keys(&mut document);
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Serialize a reward table document, gated on per-entry validation.
pub fn export_reward_file(file: &Value, catalog: &Catalog) -> Result<String> {
    let Some(items) = file.get("items").and_then(Value::as_array) else {
        return Err(LiveopsError::InvalidDocument(
            "expected an object containing an items array".to_string(),
        ));
    };

    let mut errors = Vec::new();
    for (index, item) in items.iter().enumerate() {
        for message in validate_reward_entry(item, catalog) {
            errors.push(format!("Item {}: {message}", index + 1));
        }
    }
    if !errors.is_empty() {
        return Err(LiveopsError::ValidationFailed(errors));
    }

    let mut document = file.clone();
    if let Some(items) = document.get_mut("items").and_then(Value::as_array_mut) {
        for item in items {
            if let Some(reward) = item.get("reward") {
                let normalized = normalize_reward(reward);
                if let Some(obj) = item.as_object_mut() {
                    obj.insert("reward".to_string(), normalized);
                }
            }
        }
    }
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Remove the unused cost-mode keys from every offer: a universal `cost`
/// drops the localized pair, a localized pair drops `cost` (including a
/// leftover `null`).
fn strip_unused_cost_keys(document: &mut Value) {
    let Some(groups) = document
        .get_mut("chainsAndConditions")
        .and_then(Value::as_array_mut)
    else {
        return;
    };
    for group in groups {
        let Some(chains) = group.get_mut("chainList").and_then(Value::as_array_mut) else {
            continue;
        };
        for chain in chains {
            let Some(offers) = chain.get_mut("chainOffers").and_then(Value::as_array_mut)
            else {
                continue;
            };
            for offer in offers {
                let Some(obj) = offer.as_object_mut() else {
                    continue;
                };
                let has_cost = obj.get("cost").map_or(false, |v| !v.is_null());
                if has_cost {
                    obj.remove("cost_IR");
                    obj.remove("cost_EU");
                }
                let has_localized = obj.get("cost_IR").map_or(false, |v| !v.is_null())
                    || obj.get("cost_EU").map_or(false, |v| !v.is_null());
                if has_localized {
                    obj.remove("cost");
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Import/export interface bound to a catalog.
pub struct Documents<'a> {
    catalog: &'a Catalog,
}

impl<'a> Documents<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// See [`import_reward_file`].
    pub fn import_reward_file(&self, text: &str) -> Result<Value> {
        import_reward_file(text)
    }

    /// See [`import_chain_config`].
    pub fn import_chain_config(&self, text: &str) -> Result<Value> {
        import_chain_config(text)
    }

    /// See [`export_chain_config`].
    pub fn export_chain_config(&self, config: &Value) -> Result<String> {
        export_chain_config(config, self.catalog)
    }

    /// See [`export_reward_file`].
    pub fn export_reward_file(&self, file: &Value) -> Result<String> {
        export_reward_file(file, self.catalog)
    }
}
