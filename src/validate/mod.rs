//! Rule-driven validation over raw JSON documents.
//!
//! Validators operate on `serde_json::Value` rather than the typed models:
//! documents arrive from bulk import partially edited and possibly malformed,
//! and a wrong-typed field must surface as a report entry, not a
//! deserialization failure. Every validator is total: it returns a flat,
//! ordered list of human-readable messages and never panics; an internal
//! fault is itself converted into a single report entry.

pub mod chain;
pub mod cost;
pub mod reward;

pub use chain::{config_advisories, validate_config, ChainValidator};
pub use cost::validate_cost;
pub use reward::{
    reward_advisories, validate_reward, validate_reward_entry, RewardValidator,
};

use serde_json::Value;

/// `typeof x === 'number' && Number.isFinite(x)` over a JSON field.
/// JSON numbers are always finite, so this is a presence-and-type check.
pub(crate) fn is_finite_number(value: Option<&Value>) -> bool {
    value.and_then(Value::as_f64).is_some_and(f64::is_finite)
}

pub(crate) fn as_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

/// Field is present with a non-null value.
pub(crate) fn is_set(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

/// Field holds a non-empty array.
pub(crate) fn non_empty_array<'a>(value: Option<&'a Value>) -> Option<&'a Vec<Value>> {
    value.and_then(Value::as_array).filter(|arr| !arr.is_empty())
}

/// JavaScript-style truthiness, as used by the original editors' guards.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
