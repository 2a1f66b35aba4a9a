//! Cost record shape checks.
//!
//! Cost errors append into the caller's accumulator so the chain walker can
//! interleave them into one ordered report, with the offer path baked into
//! `label` (e.g. `"Group 1 > Chain 2 > Offer 1 > cost_IR"`).

use serde_json::Value;

use crate::catalog::Catalog;
use crate::error::ValidationFault;
use crate::models::CostType;

use super::is_finite_number;

/// Validate a single cost record, appending path-labelled messages.
pub fn validate_cost(cost: &Value, label: &str, catalog: &Catalog, errors: &mut Vec<String>) {
    if let Err(fault) = try_validate_cost(cost, label, catalog, errors) {
        errors.push(format!("{label}: System Error during validation: {fault}"));
    }
}

fn try_validate_cost(
    cost: &Value,
    label: &str,
    catalog: &Catalog,
    errors: &mut Vec<String>,
) -> Result<(), ValidationFault> {
    let cost_type = match cost.get("costType") {
        None | Some(Value::Null) => {
            errors.push(format!("{label}: costType is required."));
            return Ok(());
        }
        Some(Value::String(tag)) => match CostType::from_tag(tag) {
            Some(cost_type) => cost_type,
            None => {
                errors.push(format!("{label}: unsupported costType."));
                return Ok(());
            }
        },
        Some(_) => {
            errors.push(format!("{label}: unsupported costType."));
            return Ok(());
        }
    };

    match cost_type {
        CostType::Money => {
            if !is_finite_number(cost.get("productSku")) {
                errors.push(format!("{label}: productSku is required for Money costs."));
            } else {
                catalog.ensure_money_skus()?;
                let sku = cost.get("productSku").and_then(Value::as_f64).unwrap_or(0.0);
                if sku.fract() != 0.0 || !catalog.has_money_sku(sku as i64) {
                    errors.push(format!(
                        "{label}: productSku {sku} is not a recognized SKU."
                    ));
                }
            }
        }
        CostType::Gem | CostType::Gold | CostType::ElPoint => {
            if !is_finite_number(cost.get("amount")) {
                errors.push(format!(
                    "{label}: amount is required for {} costs.",
                    cost_type.as_str()
                ));
            }
        }
        CostType::Ad | CostType::Free => {}
    }

    Ok(())
}
