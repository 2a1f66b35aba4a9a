//! Hero, skin, and SKU catalogs.
//!
//! The catalog is the read-only lookup layer behind validation: which skin ids
//! exist, which are exclusive (barred from configuration documents), which
//! heroes the skins belong to, and which product SKUs the store recognizes.
//! It is constructed once (either from the built-in roster or from caller
//! data) and passed into validators by reference.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{LiveopsError, Result, ValidationFault};

/// Number of arenas in the live game, for `Arena` condition values.
pub const ARENA_COUNT: i64 = 13;

// ---------------------------------------------------------------------------
// Static roster tables
// ---------------------------------------------------------------------------

/// The standard skin roster as `(heroId, skinId)` pairs.
///
/// A hero's key (used for display names) is the first `_`-separated segment of
/// the hero's first listed skin id, so the default skin must come first.
const STANDARD_SKINS: &[(i64, &str)] = &[
    (0, "taghi_default_v1"),
    (0, "taghi_lukyluke"),
    (0, "taghi_sheriff_v1"),
    (1, "gypsy_default_v1"),
    (1, "gypsy_senua"),
    (1, "gypsy_fortune_v1"),
    (2, "heshmat_default_v1"),
    (2, "heshmat_godofwar_v1"),
    (2, "heshmat_gladiator_v1"),
    (3, "changiz_default_v1"),
    (3, "changiz_rambov1"),
    (3, "changiz_commando_v1"),
    (4, "shapoor_default_v1"),
    (4, "shapoor_hawaii_v1"),
    (4, "shapoor_surfer_v1"),
    (5, "balsamic_default_v1"),
    (5, "balsamic_bababarghi_v1"),
    (5, "balsamic_chef_v1"),
    (6, "babajan_default_v1"),
    (6, "babajan_diver_v1"),
    (6, "babajan_sailor_v1"),
    (7, "dozd_default_v1"),
    (7, "dozd_grunch_v1"),
    (7, "dozd_ninja_v1"),
    (8, "esi_default_v1"),
    (8, "esi_hairdresser_v1"),
    (8, "esi_hairdresser_v2"),
    (8, "esi_barber_v1"),
    (9, "nanjoon_default_v1"),
    (9, "nanjoon_catwoman_v1"),
    (9, "nanjoon_granny_v1"),
    (10, "ammekaty_default_v1"),
    (10, "ammekaty_witch_v1"),
    (10, "ammekaty_witch_v2"),
    (11, "pirate_default_v1"),
    (11, "pirate_halloween_v1"),
    (11, "pirate_halloween_v2"),
    (11, "pirate_captain_v1"),
    (12, "davood_default_v1"),
    (12, "davood_lizard_v1"),
    (12, "davood_boxer_v1"),
    (13, "mahpeykar_default_v1"),
    (13, "mahpeykar_darkqueen_v1"),
    (13, "mahpeykar_queen_v1"),
    (14, "swat_default_v1"),
    (14, "swat_tactical_v1"),
];

/// Skins that exist in the master roster but are contractually barred from
/// use in configuration documents.
const STANDARD_EXCLUSIVE_SKINS: &[&str] = &[
    "gypsy_senua",
    "taghi_lukyluke",
    "heshmat_godofwar_v1",
    "changiz_rambov1",
    "shapoor_hawaii_v1",
    "balsamic_bababarghi_v1",
    "babajan_diver_v1",
    "dozd_grunch_v1",
    "esi_hairdresser_v1",
    "esi_hairdresser_v2",
    "nanjoon_catwoman_v1",
    "ammekaty_witch_v1",
    "ammekaty_witch_v2",
    "pirate_halloween_v1",
    "pirate_halloween_v2",
    "davood_lizard_v1",
    "mahpeykar_darkqueen_v1",
];

/// Product SKUs accepted for `Money` costs, in toman. `0` is the free tier.
const STANDARD_MONEY_SKUS: &[i64] = &[
    900, 1900, 2400, 2900, 4900, 7400, 9900, 12400, 14900, 19900, 24900,
    29900, 34900, 39900, 44900, 49900, 54900, 59900, 64900, 69900, 74900,
    79900, 84900, 89900, 94900, 99900, 124900, 149900, 199900, 249900,
    299900, 399900, 499900, 699900, 999900, 0,
];

/// Display-name overrides for hero keys whose title-cased form is wrong.
const HERO_NAME_OVERRIDES: &[(&str, &str)] = &[("swat", "SWAT")];

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// A hero derived from the skin roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub hero_id: i64,
    pub hero_key: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// CatalogData
// ---------------------------------------------------------------------------

/// Serializable catalog source, for loading a custom roster from JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    #[serde(default)]
    pub skins: Vec<SkinEntry>,
    #[serde(default)]
    pub exclusive_skins: Vec<String>,
    #[serde(default)]
    pub money_skus: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinEntry {
    pub hero_id: i64,
    pub skin_id: String,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable lookup tables for heroes, skins, and money SKUs.
#[derive(Debug, Clone)]
pub struct Catalog {
    heroes: Vec<Hero>,
    skins: Vec<String>,
    skin_set: HashSet<String>,
    skins_by_hero: HashMap<i64, Vec<String>>,
    exclusive_skins: HashSet<String>,
    money_skus: Vec<i64>,
}

impl Catalog {
    /// Build the catalog shipped with the crate.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_SKINS
                .iter()
                .map(|(hero_id, skin_id)| (*hero_id, (*skin_id).to_string())),
            STANDARD_EXCLUSIVE_SKINS.iter().map(|s| (*s).to_string()),
            STANDARD_MONEY_SKUS.to_vec(),
        )
    }

    /// Build a catalog from explicit roster data.
    ///
    /// Skin order matters: the first skin listed for a hero determines the
    /// hero key (its first `_`-separated segment) used for display names.
    pub fn new(
        skins: impl IntoIterator<Item = (i64, String)>,
        exclusive_skins: impl IntoIterator<Item = String>,
        money_skus: Vec<i64>,
    ) -> Self {
        let mut skin_list = Vec::new();
        let mut skin_set = HashSet::new();
        let mut skins_by_hero: HashMap<i64, Vec<String>> = HashMap::new();
        let mut hero_key_by_id: Vec<(i64, String)> = Vec::new();

        for (hero_id, skin_id) in skins {
            if !hero_key_by_id.iter().any(|(id, _)| *id == hero_id) {
                let key = skin_id.split('_').next().unwrap_or_default().to_string();
                hero_key_by_id.push((hero_id, key));
            }
            skins_by_hero.entry(hero_id).or_default().push(skin_id.clone());
            skin_set.insert(skin_id.clone());
            skin_list.push(skin_id);
        }

        hero_key_by_id.sort_by_key(|(id, _)| *id);
        let heroes = hero_key_by_id
            .into_iter()
            .map(|(hero_id, hero_key)| {
                let name = HERO_NAME_OVERRIDES
                    .iter()
                    .find(|(key, _)| *key == hero_key)
                    .map(|(_, name)| (*name).to_string())
                    .unwrap_or_else(|| title_case(&hero_key));
                Hero { hero_id, hero_key, name }
            })
            .collect();

        Self {
            heroes,
            skins: skin_list,
            skin_set,
            skins_by_hero,
            exclusive_skins: exclusive_skins.into_iter().collect(),
            money_skus,
        }
    }

    /// Build a catalog from serialized roster data.
    pub fn from_data(data: CatalogData) -> Self {
        Self::new(
            data.skins.into_iter().map(|s| (s.hero_id, s.skin_id)),
            data.exclusive_skins,
            data.money_skus,
        )
    }

    /// Parse a JSON roster document and build a catalog from it.
    pub fn from_json(text: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(text)?;
        let catalog = Self::from_data(data);
        if catalog.skins.is_empty() {
            return Err(LiveopsError::InvalidCatalog(
                "roster contains no skins".to_string(),
            ));
        }
        Ok(catalog)
    }

    // -- Lookups -----------------------------------------------------------

    /// All heroes, sorted by id.
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Every skin id in the roster, in roster order.
    pub fn skins(&self) -> &[String] {
        &self.skins
    }

    pub fn has_skin(&self, skin_id: &str) -> bool {
        self.skin_set.contains(skin_id)
    }

    pub fn is_exclusive(&self, skin_id: &str) -> bool {
        self.exclusive_skins.contains(skin_id)
    }

    pub fn money_skus(&self) -> &[i64] {
        &self.money_skus
    }

    pub fn has_money_sku(&self, sku: i64) -> bool {
        self.money_skus.contains(&sku)
    }

    /// Display name for a hero id. `-1` is the random-hero sentinel.
    pub fn hero_name(&self, hero_id: Option<i64>) -> String {
        match hero_id {
            Some(-1) => "Random".to_string(),
            None => "Unknown".to_string(),
            Some(id) => self
                .heroes
                .iter()
                .find(|hero| hero.hero_id == id)
                .map(|hero| hero.name.clone())
                .unwrap_or_else(|| format!("Hero {id}")),
        }
    }

    /// `"{base} ({name})"` when the hero is known, otherwise just the base.
    pub fn hero_label(&self, hero_id: Option<i64>, base_label: &str) -> String {
        let name = self.hero_name(hero_id);
        if name == "Unknown" {
            return base_label.to_string();
        }
        format!("{base_label} ({name})")
    }

    /// Selectable (non-exclusive) skins for a hero.
    ///
    /// Falls back to the full roster when the hero has no skins of its own.
    /// An already-selected non-exclusive skin stays in the list even when it
    /// does not belong to the hero, so an edited document never loses its
    /// current choice.
    pub fn skins_for_hero(
        &self,
        hero_id: Option<i64>,
        selected_skin_id: Option<&str>,
    ) -> Vec<String> {
        let base: &[String] = hero_id
            .and_then(|id| self.skins_by_hero.get(&id))
            .filter(|skins| !skins.is_empty())
            .map(Vec::as_slice)
            .unwrap_or(&self.skins);

        let mut options: Vec<String> = base
            .iter()
            .filter(|skin| !self.is_exclusive(skin))
            .cloned()
            .collect();

        if let Some(selected) = selected_skin_id {
            if !self.is_exclusive(selected) && !options.iter().any(|s| s == selected) {
                options.insert(0, selected.to_string());
            }
        }

        options
    }

    // -- Consistency -------------------------------------------------------

    /// Report the catalog as unusable for skin validation.
    pub(crate) fn ensure_skins(&self) -> std::result::Result<(), ValidationFault> {
        if self.skin_set.is_empty() {
            return Err(ValidationFault::EmptyCatalog);
        }
        Ok(())
    }

    /// Report the catalog as unusable for money SKU validation.
    pub(crate) fn ensure_money_skus(&self) -> std::result::Result<(), ValidationFault> {
        if self.money_skus.is_empty() {
            return Err(ValidationFault::EmptySkuTable);
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
