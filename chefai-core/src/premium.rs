//! Premium subscription state and per-feature free-trial gating.
//!
//! A fixed, closed set of features is gated: premium subscribers always
//! pass, everyone else gets exactly one free use per feature per calendar
//! date. The comparison is date equality, not a rolling 24-hour window, so
//! a use at 23:59 and another at 00:01 land on different days. State is
//! loaded from the storage port at construction and written back on every
//! mutation.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::clock::Clock;
use crate::error::StorageError;
use crate::storage::{keys, KeyValueStore};

/// The gated feature set. Keys match the persisted usage map and the
/// feature identifiers the clients send.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Feature {
    #[serde(rename = "nutrition")]
    Nutrition,
    #[serde(rename = "videoGuides")]
    VideoGuides,
    #[serde(rename = "mealPlanning")]
    MealPlanning,
    #[serde(rename = "aiFeatures")]
    AiFeatures,
    #[serde(rename = "shoppingList")]
    ShoppingList,
    #[serde(rename = "instructions")]
    Instructions,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Nutrition,
        Feature::VideoGuides,
        Feature::MealPlanning,
        Feature::AiFeatures,
        Feature::ShoppingList,
        Feature::Instructions,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Feature::Nutrition => "nutrition",
            Feature::VideoGuides => "videoGuides",
            Feature::MealPlanning => "mealPlanning",
            Feature::AiFeatures => "aiFeatures",
            Feature::ShoppingList => "shoppingList",
            Feature::Instructions => "instructions",
        }
    }

    pub fn from_key(key: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Free-use bookkeeping for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeatureUsage {
    pub last_used_date: NaiveDate,
    pub count: u32,
}

/// Decides whether gated content is available and tracks bounded free
/// trials. Single-threaded read-modify-write; the storage port is
/// last-writer-wins.
pub struct PremiumGate {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    is_premium: bool,
    usage: BTreeMap<Feature, FeatureUsage>,
}

impl PremiumGate {
    /// Load gate state from the store. Missing keys mean a fresh profile;
    /// values that fail to parse are treated the same way.
    pub fn load(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StorageError> {
        let is_premium = matches!(store.get(keys::PREMIUM)?.as_deref(), Some("true"));

        let usage = match store.get(keys::FEATURE_USAGE)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(error = %e, "feature usage map unreadable, resetting");
                    BTreeMap::new()
                }
            },
            None => BTreeMap::new(),
        };

        Ok(Self {
            store,
            clock,
            is_premium,
            usage,
        })
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    /// Flip the premium flag. Does not clear the daily usage map; the
    /// premium check short-circuits it anyway.
    pub fn set_premium(&mut self, premium: bool) -> Result<(), StorageError> {
        self.is_premium = premium;
        self.store
            .set(keys::PREMIUM, if premium { "true" } else { "false" })
    }

    /// Availability by raw feature key. Keys naming no gated feature are
    /// always available.
    pub fn is_available(&self, key: &str) -> bool {
        match Feature::from_key(key) {
            Some(feature) => self.is_feature_available(feature),
            None => true,
        }
    }

    /// Available when premium, or when the feature has not yet been used
    /// on today's calendar date.
    pub fn is_feature_available(&self, feature: Feature) -> bool {
        if self.is_premium {
            return true;
        }
        match self.usage.get(&feature) {
            Some(usage) => usage.last_used_date != self.clock.today(),
            None => true,
        }
    }

    /// Record one free use: stamps today's date and bumps the lifetime
    /// counter, then persists.
    pub fn record_usage(&mut self, feature: Feature) -> Result<(), StorageError> {
        let count = self.usage.get(&feature).map(|u| u.count).unwrap_or(0);
        self.usage.insert(
            feature,
            FeatureUsage {
                last_used_date: self.clock.today(),
                count: count + 1,
            },
        );
        let raw = serde_json::to_string(&self.usage).map_err(|e| StorageError::InvalidValue {
            key: keys::FEATURE_USAGE.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(keys::FEATURE_USAGE, &raw)
    }

    pub fn usage(&self, feature: Feature) -> Option<FeatureUsage> {
        self.usage.get(&feature).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStore;

    fn gate_at(date: NaiveDate) -> (PremiumGate, Arc<FixedClock>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(FixedClock::at_date(date));
        let gate = PremiumGate::load(store.clone(), clock.clone()).unwrap();
        (gate, clock, store)
    }

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn fresh_profile_has_everything_available() {
        let (gate, _, _) = gate_at(march(1));
        assert!(!gate.is_premium());
        for feature in Feature::ALL {
            assert!(gate.is_feature_available(feature));
        }
    }

    #[test]
    fn one_free_use_per_calendar_date() {
        let (mut gate, clock, _) = gate_at(march(1));

        gate.record_usage(Feature::ShoppingList).unwrap();
        assert!(!gate.is_feature_available(Feature::ShoppingList));
        // Other features are untouched.
        assert!(gate.is_feature_available(Feature::Nutrition));

        clock.advance_days(1);
        assert!(gate.is_feature_available(Feature::ShoppingList));
    }

    #[test]
    fn date_comparison_not_rolling_window() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let clock = Arc::new(FixedClock::new(
            march(1).and_hms_opt(23, 59, 0).unwrap().and_utc(),
        ));
        let mut gate = PremiumGate::load(store, clock.clone()).unwrap();

        gate.record_usage(Feature::Instructions).unwrap();
        assert!(!gate.is_feature_available(Feature::Instructions));

        // Two minutes later it is a new calendar date.
        clock.advance(chrono::Duration::minutes(2));
        assert!(gate.is_feature_available(Feature::Instructions));
    }

    #[test]
    fn premium_short_circuits_usage_history() {
        let (mut gate, _, _) = gate_at(march(1));
        gate.record_usage(Feature::AiFeatures).unwrap();
        assert!(!gate.is_feature_available(Feature::AiFeatures));

        gate.set_premium(true).unwrap();
        for feature in Feature::ALL {
            assert!(gate.is_feature_available(feature));
        }

        // Downgrading exposes the preserved usage map again.
        gate.set_premium(false).unwrap();
        assert!(!gate.is_feature_available(Feature::AiFeatures));
    }

    #[test]
    fn unknown_keys_are_always_available() {
        let (mut gate, _, _) = gate_at(march(1));
        gate.record_usage(Feature::Nutrition).unwrap();
        assert!(gate.is_available("darkMode"));
        assert!(gate.is_available(""));
        assert!(!gate.is_available("nutrition"));
    }

    #[test]
    fn count_accumulates_across_days() {
        let (mut gate, clock, _) = gate_at(march(1));
        gate.record_usage(Feature::VideoGuides).unwrap();
        clock.advance_days(1);
        gate.record_usage(Feature::VideoGuides).unwrap();

        let usage = gate.usage(Feature::VideoGuides).unwrap();
        assert_eq!(usage.count, 2);
        assert_eq!(usage.last_used_date, march(2));
    }

    #[test]
    fn state_survives_reload_through_the_store() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let clock = Arc::new(FixedClock::at_date(march(1)));

        {
            let mut gate = PremiumGate::load(store.clone(), clock.clone()).unwrap();
            gate.set_premium(true).unwrap();
            gate.record_usage(Feature::MealPlanning).unwrap();
        }

        let gate = PremiumGate::load(store, clock).unwrap();
        assert!(gate.is_premium());
        assert_eq!(gate.usage(Feature::MealPlanning).unwrap().count, 1);
    }

    #[test]
    fn corrupt_usage_map_resets_instead_of_failing() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(keys::FEATURE_USAGE, "garbage").unwrap();
        let clock = Arc::new(FixedClock::at_date(march(1)));

        let gate = PremiumGate::load(store, clock).unwrap();
        assert!(gate.is_feature_available(Feature::Nutrition));
    }
}
