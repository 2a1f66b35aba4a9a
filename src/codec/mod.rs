//! Lossless text/typed-value codecs for free-form editor inputs.

pub mod condition;
pub mod duration;

pub use condition::{format_condition_value, parse_condition_value, ParseOptions};
pub use duration::{
    default_duration_unit, duration_to_millis, format_duration_amount, DurationUnit,
};

/// Render a number the way JavaScript's `String()` does for the values these
/// documents carry: integral values print without a fractional part.
pub(crate) fn number_to_string(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
