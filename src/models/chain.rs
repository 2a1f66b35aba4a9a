//! Chain offer campaign models: costs, offers, chains, groups, and the root
//! document. Field names are bit-exact wire names, including the `cost_IR` /
//! `cost_EU` localized cost pair.

use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::reward::RewardItem;

// ---------------------------------------------------------------------------
// CostType / CostConfig
// ---------------------------------------------------------------------------

/// The discriminant of a [`CostConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostType {
    Money,
    Gem,
    Gold,
    Ad,
    Free,
    ElPoint,
}

impl CostType {
    pub const ALL: [CostType; 6] = [
        CostType::Money,
        CostType::Gem,
        CostType::Gold,
        CostType::Ad,
        CostType::Free,
        CostType::ElPoint,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.as_str() == tag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CostType::Money => "Money",
            CostType::Gem => "Gem",
            CostType::Gold => "Gold",
            CostType::Ad => "Ad",
            CostType::Free => "Free",
            CostType::ElPoint => "ElPoint",
        }
    }

    /// Types priced by a numeric `amount` field.
    pub fn requires_amount(self) -> bool {
        matches!(self, CostType::Gem | CostType::Gold | CostType::ElPoint)
    }
}

/// How an offer is paid for. `Money` carries a store SKU, the soft-currency
/// types carry an amount, `Ad` and `Free` carry nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostConfig {
    pub cost_type: CostType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_sku: Option<i64>,
}

impl CostConfig {
    /// A zero-valued cost of the given type, as created when an editor
    /// switches cost types.
    pub fn empty(cost_type: CostType) -> Self {
        let mut cost = Self {
            cost_type,
            amount: None,
            product_sku: None,
        };
        match cost_type {
            CostType::Money => cost.product_sku = Some(0),
            CostType::Gem | CostType::Gold | CostType::ElPoint => cost.amount = Some(0.0),
            CostType::Ad | CostType::Free => {}
        }
        cost
    }

    pub fn free() -> Self {
        Self::empty(CostType::Free)
    }
}

// ---------------------------------------------------------------------------
// ChainOfferItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_grand_reward: Option<bool>,
}

/// One step of a chain: its rewards and exactly one cost mode, either the
/// universal `cost` or the localized `cost_IR` + `cost_EU` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainOfferItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostConfig>,
    #[serde(rename = "cost_IR", skip_serializing_if = "Option::is_none")]
    pub cost_ir: Option<CostConfig>,
    #[serde(rename = "cost_EU", skip_serializing_if = "Option::is_none")]
    pub cost_eu: Option<CostConfig>,
    pub rewards: Vec<RewardItem>,
    #[serde(rename = "additionalDetails", skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<AdditionalDetails>,
}

impl ChainOfferItem {
    /// The offer a freshly created chain starts with: one gem reward, free.
    pub fn default_offer() -> Self {
        Self {
            cost: Some(CostConfig::free()),
            cost_ir: None,
            cost_eu: None,
            rewards: vec![RewardItem::default_gem()],
            additional_details: None,
        }
    }
}

// ---------------------------------------------------------------------------
// ChainBase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChainOptions {
    #[serde(default)]
    pub hidden_rewards: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featuring_hero_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featuring_skin_id: Option<String>,
}

/// An ordered multi-step chain. `duration` is canonical integer milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChainBase {
    pub chain_id: String,
    pub duration: i64,
    pub chain_offers: Vec<ChainOfferItem>,
    #[serde(default)]
    pub options: ChainOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl ChainBase {
    pub fn default_chain() -> Self {
        Self {
            chain_id: "chain-".to_string(),
            duration: 0,
            chain_offers: vec![ChainOfferItem::default_offer()],
            options: ChainOptions::default(),
            weight: None,
        }
    }
}

// ---------------------------------------------------------------------------
// ChainGroup / ChainsListConfig
// ---------------------------------------------------------------------------

/// A set of chains gated by audience conditions (AND semantics).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainGroup {
    #[serde(rename = "Conditions")]
    pub conditions: Vec<Condition>,
    #[serde(rename = "chainList")]
    pub chain_list: Vec<ChainBase>,
    #[serde(rename = "maxSelect", skip_serializing_if = "Option::is_none")]
    pub max_select: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl ChainGroup {
    pub fn default_group() -> Self {
        Self {
            conditions: vec![Condition::default_heroes()],
            chain_list: vec![ChainBase::default_chain()],
            max_select: None,
            weight: None,
        }
    }
}

/// The chain offer campaign document root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChainsListConfig {
    pub chains_and_conditions: Vec<ChainGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_select: Option<i64>,
}

impl ChainsListConfig {
    pub fn default_config() -> Self {
        Self {
            chains_and_conditions: vec![ChainGroup::default_group()],
            max_select: None,
        }
    }
}
