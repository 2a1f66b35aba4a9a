//! Reward data models shared by the flat reward table and chain offer
//! documents. Field names are bit-exact wire names for the game backend.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// RewardType
// ---------------------------------------------------------------------------

/// The discriminant of a [`RewardItem`]. Variant names are the wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardType {
    Gem,
    Gold,
    Chest,
    HeroCardAndSkin,
    DailyGem,
    HeroAbilityCard,
    NewHero,
    Skin,
    HeroCard,
    BattleGoldBoost,
    NormalChestBoost,
    CrownChestBoost,
    CrownRushBoost,
    QuestPointBoost,
    AdPlus,
    HeroFragment,
    HeroTicket,
    SkinFragment,
    ChestKey,
    ChestsDynamite,
    AllCards,
    SelfBoost,
    BattlePass,
    EventLeagueLeaderboardUnlock,
    EventLeagueExpand,
}

impl RewardType {
    pub const ALL: [RewardType; 25] = [
        RewardType::Gem,
        RewardType::Gold,
        RewardType::Chest,
        RewardType::HeroCardAndSkin,
        RewardType::DailyGem,
        RewardType::HeroAbilityCard,
        RewardType::NewHero,
        RewardType::Skin,
        RewardType::HeroCard,
        RewardType::BattleGoldBoost,
        RewardType::NormalChestBoost,
        RewardType::CrownChestBoost,
        RewardType::CrownRushBoost,
        RewardType::QuestPointBoost,
        RewardType::AdPlus,
        RewardType::HeroFragment,
        RewardType::HeroTicket,
        RewardType::SkinFragment,
        RewardType::ChestKey,
        RewardType::ChestsDynamite,
        RewardType::AllCards,
        RewardType::SelfBoost,
        RewardType::BattlePass,
        RewardType::EventLeagueLeaderboardUnlock,
        RewardType::EventLeagueExpand,
    ];

    /// Parse a wire tag. Returns `None` for unrecognized tags so callers can
    /// report them instead of failing deserialization.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.as_str() == tag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RewardType::Gem => "Gem",
            RewardType::Gold => "Gold",
            RewardType::Chest => "Chest",
            RewardType::HeroCardAndSkin => "HeroCardAndSkin",
            RewardType::DailyGem => "DailyGem",
            RewardType::HeroAbilityCard => "HeroAbilityCard",
            RewardType::NewHero => "NewHero",
            RewardType::Skin => "Skin",
            RewardType::HeroCard => "HeroCard",
            RewardType::BattleGoldBoost => "BattleGoldBoost",
            RewardType::NormalChestBoost => "NormalChestBoost",
            RewardType::CrownChestBoost => "CrownChestBoost",
            RewardType::CrownRushBoost => "CrownRushBoost",
            RewardType::QuestPointBoost => "QuestPointBoost",
            RewardType::AdPlus => "AdPlus",
            RewardType::HeroFragment => "HeroFragment",
            RewardType::HeroTicket => "HeroTicket",
            RewardType::SkinFragment => "SkinFragment",
            RewardType::ChestKey => "ChestKey",
            RewardType::ChestsDynamite => "ChestsDynamite",
            RewardType::AllCards => "AllCards",
            RewardType::SelfBoost => "SelfBoost",
            RewardType::BattlePass => "BattlePass",
            RewardType::EventLeagueLeaderboardUnlock => "EventLeagueLeaderboardUnlock",
            RewardType::EventLeagueExpand => "EventLeagueExpand",
        }
    }

    /// Types whose quantity lives in a type-specific field, so the generic
    /// `amount` rule does not apply.
    pub fn is_amount_exempt(self) -> bool {
        matches!(
            self,
            RewardType::Chest
                | RewardType::HeroCard
                | RewardType::HeroAbilityCard
                | RewardType::NewHero
                | RewardType::Skin
        )
    }

    /// Types subject to the universal `heroId` post-check.
    pub fn is_hero_bearing(self) -> bool {
        matches!(
            self,
            RewardType::HeroCard
                | RewardType::HeroAbilityCard
                | RewardType::Skin
                | RewardType::NewHero
        )
    }

    /// Timed boosts carrying a `durationSeconds` field.
    pub fn requires_duration_seconds(self) -> bool {
        matches!(
            self,
            RewardType::BattleGoldBoost
                | RewardType::NormalChestBoost
                | RewardType::CrownChestBoost
                | RewardType::CrownRushBoost
                | RewardType::QuestPointBoost
                | RewardType::SelfBoost
                | RewardType::AdPlus
        )
    }
}

// ---------------------------------------------------------------------------
// ChestType
// ---------------------------------------------------------------------------

/// Chest variants, serialized as their integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChestType {
    None,
    Tutorial1,
    Tutorial2,
    Free,
    Wooden,
    Silver,
    Crown,
    Giant,
    Magical,
    SuperMagical,
    Rent,
    LeaderBoard,
    Tournament,
    Tournament2,
    ClanWarBronze,
    ClanWarSilver,
    ClanWarGold,
    Fortune,
    PiggyBankV2,
}

impl ChestType {
    pub fn code(self) -> i64 {
        match self {
            ChestType::None => -1,
            ChestType::Tutorial1 => 0,
            ChestType::Tutorial2 => 1,
            ChestType::Free => 2,
            ChestType::Wooden => 3,
            ChestType::Silver => 4,
            ChestType::Crown => 5,
            ChestType::Giant => 6,
            ChestType::Magical => 7,
            ChestType::SuperMagical => 8,
            ChestType::Rent => 9,
            ChestType::LeaderBoard => 10,
            ChestType::Tournament => 11,
            ChestType::Tournament2 => 12,
            ChestType::ClanWarBronze => 13,
            ChestType::ClanWarSilver => 14,
            ChestType::ClanWarGold => 15,
            ChestType::Fortune => 16,
            ChestType::PiggyBankV2 => 17,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        const ALL: [ChestType; 19] = [
            ChestType::None,
            ChestType::Tutorial1,
            ChestType::Tutorial2,
            ChestType::Free,
            ChestType::Wooden,
            ChestType::Silver,
            ChestType::Crown,
            ChestType::Giant,
            ChestType::Magical,
            ChestType::SuperMagical,
            ChestType::Rent,
            ChestType::LeaderBoard,
            ChestType::Tournament,
            ChestType::Tournament2,
            ChestType::ClanWarBronze,
            ChestType::ClanWarSilver,
            ChestType::ClanWarGold,
            ChestType::Fortune,
            ChestType::PiggyBankV2,
        ];
        ALL.iter().copied().find(|chest| chest.code() == code)
    }

    pub fn is_valid_code(code: i64) -> bool {
        Self::from_code(code).is_some()
    }
}

impl Serialize for ChestType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for ChestType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| D::Error::custom(format!("unknown chest type code {code}")))
    }
}

// ---------------------------------------------------------------------------
// Ability
// ---------------------------------------------------------------------------

/// Hero ability slot. `ab3` is the hero's ultimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Ab1,
    Ab2,
    Ab3,
}

impl Ability {
    pub fn as_str(self) -> &'static str {
        match self {
            Ability::Ab1 => "ab1",
            Ability::Ab2 => "ab2",
            Ability::Ab3 => "ab3",
        }
    }
}

// ---------------------------------------------------------------------------
// RewardItem
// ---------------------------------------------------------------------------

/// A single reward as it appears on the wire.
///
/// The record is deliberately permissive: every field beyond the discriminant
/// is optional, because partially edited documents are legal inputs to the
/// normalizer and validator. Which fields are required for which discriminant
/// is the validator's business, not the deserializer's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardItem {
    pub reward_type: RewardType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability: Option<Ability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest_type: Option<ChestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest_visual: Option<ChestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_card_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_arena: Option<f64>,
}

impl RewardItem {
    /// An empty reward of the given type.
    pub fn new(reward_type: RewardType) -> Self {
        Self {
            reward_type,
            amount: None,
            hero_id: None,
            ability: None,
            card_amount: None,
            skin_id: None,
            chest_type: None,
            chest_visual: None,
            pick_card_count: None,
            duration_seconds: None,
            duration_in_day: None,
            given_arena: None,
        }
    }

    /// The reward a freshly created chain offer starts with.
    pub fn default_gem() -> Self {
        Self {
            amount: Some(10.0),
            ..Self::new(RewardType::Gem)
        }
    }

    /// The reward a freshly created flat table row starts with.
    pub fn default_gold() -> Self {
        Self {
            amount: Some(100.0),
            ..Self::new(RewardType::Gold)
        }
    }
}

// ---------------------------------------------------------------------------
// RewardEntry / RewardFile
// ---------------------------------------------------------------------------

/// One row of the flat reward table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_point: Option<f64>,
    pub reward: RewardItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_detail: Option<serde_json::Value>,
}

impl RewardEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required_point: Some(0.0),
            reward: RewardItem::default_gold(),
            additional_detail: None,
        }
    }
}

/// The flat reward table document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardFile {
    pub point_toman_rate: f64,
    pub items: Vec<RewardEntry>,
}

impl Default for RewardFile {
    fn default() -> Self {
        Self {
            point_toman_rate: 0.0,
            items: Vec::new(),
        }
    }
}
