//! Text to condition-value codec.
//!
//! Condition values are edited as free text (`"1, 2, 3"`) but stored typed.
//! Parsing is context-sensitive: the relation decides arity (`inc`/`exc`
//! force arrays, comparisons force scalars) and the feature decides element
//! typing (numeric features coerce every token to a number). Partial mode is
//! the while-typing path: a trailing comma means the user is mid-token, so
//! the raw text is handed back untouched instead of being coerced early.

use crate::models::{ConditionValue, FeatureName, Relation, ScalarValue};

use super::number_to_string;

// ---------------------------------------------------------------------------
// ParseOptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// While-typing mode: defer coercion when the text ends in a comma.
    pub allow_partial: bool,
    pub relation: Option<Relation>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_partial: true,
            relation: None,
        }
    }
}

impl ParseOptions {
    /// Committed-mode options for the given relation (blur or relation change).
    pub fn committed(relation: Relation) -> Self {
        Self {
            allow_partial: false,
            relation: Some(relation),
        }
    }
}

// ---------------------------------------------------------------------------
// format / parse
// ---------------------------------------------------------------------------

/// Render a condition value as editor text. Lists join with `", "`; an
/// absent value is empty text.
pub fn format_condition_value(value: Option<&ConditionValue>) -> String {
    match value {
        None => String::new(),
        Some(ConditionValue::Scalar(scalar)) => scalar_to_string(scalar),
        Some(ConditionValue::List(items)) => items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Parse editor text into a typed condition value.
///
/// Committed mode (`allow_partial = false`) trims, splits on commas, drops
/// empty tokens, and coerces per the relation's arity and the feature's
/// typing. For `v` whose shape already matches the arity implied by the
/// relation and feature, `parse(format(v))` reproduces `v`.
pub fn parse_condition_value(
    input: &str,
    feature: Option<FeatureName>,
    options: &ParseOptions,
) -> ConditionValue {
    let trimmed = input.trim();
    let has_trailing_comma = input.trim_end().ends_with(',');

    let relation = options.relation;
    let is_array_relation = relation.map_or(false, Relation::is_array);
    let is_numeric_relation = relation.map_or(false, Relation::is_numeric_comparison);
    let is_scalar_relation = relation.map_or(false, Relation::is_scalar);

    if options.allow_partial && has_trailing_comma && !is_scalar_relation {
        return ConditionValue::text(input);
    }
    if trimmed.is_empty() {
        return if is_array_relation {
            ConditionValue::List(Vec::new())
        } else {
            ConditionValue::text("")
        };
    }

    let tokens: Vec<&str> = trimmed
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();
    let has_many = tokens.len() > 1;
    let is_numeric_feature = feature.map_or(false, FeatureName::is_numeric);

    let should_array = is_array_relation || (!is_scalar_relation && has_many);

    if should_array {
        if is_numeric_feature {
            // Numeric features drop tokens that fail to parse.
            return ConditionValue::List(
                tokens
                    .iter()
                    .copied()
                    .filter_map(parse_number)
                    .map(ScalarValue::Number)
                    .collect(),
            );
        }
        return ConditionValue::List(tokens.iter().copied().map(number_or_text).collect());
    }

    if is_numeric_relation || is_numeric_feature {
        // Scalar numeric coercion applies to the whole trimmed text, so
        // stray commas under a scalar relation yield the empty sentinel.
        return match parse_number(trimmed) {
            Some(number) => ConditionValue::number(number),
            None => ConditionValue::text(""),
        };
    }

    ConditionValue::Scalar(number_or_text(trimmed))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn scalar_to_string(scalar: &ScalarValue) -> String {
    match scalar {
        ScalarValue::Number(n) => number_to_string(*n),
        ScalarValue::Text(s) => s.clone(),
    }
}

/// Number if the token parses to a finite float, text otherwise.
fn number_or_text(token: &str) -> ScalarValue {
    match parse_number(token) {
        Some(number) => ScalarValue::Number(number),
        None => ScalarValue::Text(token.to_string()),
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}
