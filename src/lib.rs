//! Live-ops configuration SDK.
//!
//! Validation and normalization engine for two families of game
//! configuration documents: flat reward tables and multi-step chain offer
//! campaigns. The engine enforces discriminated-union shape constraints over
//! deeply nested records, repairs partially edited records into structurally
//! complete ones, and provides lossless text/typed-value codecs for
//! condition values and durations. Everything is a deterministic pure
//! function of its inputs and the injected catalog tables: no I/O, no shared
//! mutable state, safe to call on every keystroke.
//!
//! # Quick start
//!
//! ```
//! use liveops_sdk::LiveopsSdk;
//! use serde_json::json;
//!
//! let sdk = LiveopsSdk::builder().build().unwrap();
//!
//! // Validate a reward record
//! let errors = sdk.rewards().validate(&json!({ "rewardType": "Gem", "amount": 5 }));
//! assert!(errors.is_empty());
//!
//! // Repair a partially edited one
//! let repaired = sdk.rewards().normalize(&json!({ "rewardType": "Chest" }));
//! assert_eq!(repaired["chestType"], 2);
//! ```

pub mod catalog;
pub mod codec;
pub mod document;
pub mod error;
pub mod models;
pub mod normalize;
pub mod transform;
pub mod validate;

pub use catalog::{Catalog, CatalogData, Hero, SkinEntry};
pub use codec::{
    default_duration_unit, duration_to_millis, format_condition_value,
    format_duration_amount, parse_condition_value, DurationUnit, ParseOptions,
};
pub use document::{
    export_chain_config, export_reward_file, import_chain_config, import_reward_file,
    Documents,
};
pub use error::{LiveopsError, Result};
pub use normalize::{normalize_config, normalize_reward};
pub use transform::swap_hero;
pub use validate::{
    config_advisories, reward_advisories, validate_config, validate_cost,
    validate_reward, validate_reward_entry, ChainValidator, RewardValidator,
};

use std::fmt;

// ---------------------------------------------------------------------------
// LiveopsSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`LiveopsSdk`] instance.
///
/// Use [`LiveopsSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](LiveopsSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct LiveopsSdkBuilder {
    catalog: Option<Catalog>,
}

impl LiveopsSdkBuilder {
    /// Inject a custom catalog (hero/skin roster, exclusive set, SKU list).
    ///
    /// If not set, the built-in standard roster is used.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the SDK.
    ///
    /// Rejects a degenerate catalog (empty skin roster) up front so that the
    /// validators behind the facade never run against unusable tables.
    pub fn build(self) -> Result<LiveopsSdk> {
        let catalog = self.catalog.unwrap_or_default();
        if catalog.skins().is_empty() {
            return Err(LiveopsError::InvalidCatalog(
                "skin roster is empty".to_string(),
            ));
        }
        Ok(LiveopsSdk { catalog })
    }
}

// ---------------------------------------------------------------------------
// LiveopsSdk
// ---------------------------------------------------------------------------

/// The main entry point for the live-ops configuration SDK.
///
/// Owns the immutable [`Catalog`] and exposes the domain interfaces as
/// lightweight borrowing wrappers.
#[derive(Debug)]
pub struct LiveopsSdk {
    catalog: Catalog,
}

impl LiveopsSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> LiveopsSdkBuilder {
        LiveopsSdkBuilder::default()
    }

    // -- Domain accessors --------------------------------------------------

    /// Access reward validation and normalization.
    pub fn rewards(&self) -> RewardValidator<'_> {
        RewardValidator::new(&self.catalog)
    }

    /// Access chain offer document validation and normalization.
    pub fn chains(&self) -> ChainValidator<'_> {
        ChainValidator::new(&self.catalog)
    }

    /// Access document import and export.
    pub fn documents(&self) -> Documents<'_> {
        Documents::new(&self.catalog)
    }

    /// The catalog this SDK was built with.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl fmt::Display for LiveopsSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LiveopsSdk(heroes={}, skins={}, moneySkus={})",
            self.catalog.heroes().len(),
            self.catalog.skins().len(),
            self.catalog.money_skus().len()
        )
    }
}
