//! Audience condition models: feature names, relations, and the
//! scalar-or-list value union.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FeatureName
// ---------------------------------------------------------------------------

/// Player features a condition can test against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureName {
    TotalPaid,
    LifeTime,
    Experience,
    BattlesCount,
    Region,
    Arena,
    Heroes,
    Skins,
}

impl FeatureName {
    pub const ALL: [FeatureName; 8] = [
        FeatureName::TotalPaid,
        FeatureName::LifeTime,
        FeatureName::Experience,
        FeatureName::BattlesCount,
        FeatureName::Region,
        FeatureName::Arena,
        FeatureName::Heroes,
        FeatureName::Skins,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == tag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureName::TotalPaid => "TotalPaid",
            FeatureName::LifeTime => "LifeTime",
            FeatureName::Experience => "Experience",
            FeatureName::BattlesCount => "BattlesCount",
            FeatureName::Region => "Region",
            FeatureName::Arena => "Arena",
            FeatureName::Heroes => "Heroes",
            FeatureName::Skins => "Skins",
        }
    }

    /// Features whose values are always numeric (counters and id lists).
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FeatureName::TotalPaid
                | FeatureName::LifeTime
                | FeatureName::Experience
                | FeatureName::BattlesCount
                | FeatureName::Arena
                | FeatureName::Heroes
        )
    }
}

// ---------------------------------------------------------------------------
// Relation
// ---------------------------------------------------------------------------

/// How a condition's value relates to the player's feature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
    Inc,
    Neq,
    Exc,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Gt => "gt",
            Relation::Gte => "gte",
            Relation::Lt => "lt",
            Relation::Lte => "lte",
            Relation::Eq => "eq",
            Relation::Inc => "inc",
            Relation::Neq => "neq",
            Relation::Exc => "exc",
        }
    }

    /// Relations forcing an array value.
    pub fn is_array(self) -> bool {
        matches!(self, Relation::Inc | Relation::Exc)
    }

    /// Ordered comparisons, which force numeric scalar values.
    pub fn is_numeric_comparison(self) -> bool {
        matches!(self, Relation::Gt | Relation::Gte | Relation::Lt | Relation::Lte)
    }

    /// Relations whose value is strictly a scalar.
    pub fn is_scalar(self) -> bool {
        matches!(self, Relation::Eq | Relation::Neq) || self.is_numeric_comparison()
    }
}

// ---------------------------------------------------------------------------
// ScalarValue / ConditionValue
// ---------------------------------------------------------------------------

/// A single condition token: a number when parseable, text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(f64),
    Text(String),
}

impl ScalarValue {
    pub fn number(value: f64) -> Self {
        ScalarValue::Number(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        ScalarValue::Text(value.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            ScalarValue::Text(_) => None,
        }
    }
}

/// A condition's value: scalar or list, as forced by the relation's arity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Scalar(ScalarValue),
    List(Vec<ScalarValue>),
}

impl ConditionValue {
    pub fn number(value: f64) -> Self {
        ConditionValue::Scalar(ScalarValue::Number(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        ConditionValue::Scalar(ScalarValue::Text(value.into()))
    }

    pub fn numbers(values: impl IntoIterator<Item = f64>) -> Self {
        ConditionValue::List(values.into_iter().map(ScalarValue::Number).collect())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ConditionValue::List(_))
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// One audience condition; a group's conditions combine with AND semantics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    #[serde(rename = "FeatureName")]
    pub feature_name: FeatureName,
    #[serde(rename = "Relation")]
    pub relation: Relation,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<ConditionValue>,
}

impl Condition {
    /// The condition a freshly created chain group starts with.
    pub fn default_heroes() -> Self {
        Self {
            feature_name: FeatureName::Heroes,
            relation: Relation::Inc,
            value: Some(ConditionValue::numbers([1.0])),
        }
    }
}
