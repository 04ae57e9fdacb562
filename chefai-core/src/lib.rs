//! Core engine for the Chef AI recipe product.
//!
//! Everything the product decides lives here: the static catalog, the
//! filter/selection engine, premium gating with its daily free-trial
//! counters, UI preferences, and the scripted conversation matcher. The
//! crate does no I/O of its own beyond the key-value storage port, and all
//! time flows through the injectable clock, so every behavior is testable
//! with the in-memory fakes.

pub mod assistant;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod filter;
pub mod prefs;
pub mod premium;
pub mod storage;

pub use catalog::{Catalog, Category, Difficulty, Ingredient, NutritionalInfo, Recipe, Subcategory};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::StorageError;
pub use filter::{DietaryFlag, FilterState, MealType};
pub use prefs::Preferences;
pub use premium::{Feature, FeatureUsage, PremiumGate};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, ScopedStore};
