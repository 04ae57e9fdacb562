//! Shared application state.
//!
//! All user data here is ephemeral session state. The only things that
//! survive a restart are what the key-value store persists: the premium
//! flag, the daily free-use map, preferences, and the admin flag. There is
//! no database; the catalog is static and every "backend" flow is a
//! simulated always-succeeding stub paced by `simulated_latency`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use chefai_core::assistant::{Conversation, ConversationEngine};
use chefai_core::{
    Catalog, Category, Clock, Feature, Ingredient, KeyValueStore, MealType, PremiumGate,
    ScopedStore, StorageError,
};

/// Application state shared across all handlers.
pub type AppState = Arc<App>;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProfile {
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PantryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MealPlanEntry {
    pub id: Uuid,
    pub recipe_id: String,
    pub meal_date: NaiveDate,
    pub meal_type: MealType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub item: String,
    pub amount: Option<String>,
    pub note: Option<String>,
    pub source_recipe_id: Option<String>,
    pub is_checked: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

/// A user-submitted recipe waiting in the simulated approval pipeline.
/// Approval never writes into the static catalog.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSubmission {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub submitted_by: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

/// Outcome of consuming a gated feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Granted,
    Denied,
}

pub struct App {
    pub catalog: &'static Catalog,
    pub clock: Arc<dyn Clock>,
    pub store: Arc<dyn KeyValueStore>,
    pub engine: ConversationEngine,
    /// Session token hash -> username.
    pub sessions: RwLock<HashMap<String, String>>,
    /// Admin session token hashes.
    pub admin_sessions: RwLock<HashMap<String, ()>>,
    pub users: RwLock<HashMap<String, UserProfile>>,
    pub conversations: RwLock<HashMap<String, Conversation>>,
    pub pantry: RwLock<HashMap<String, Vec<PantryItem>>>,
    pub meal_plans: RwLock<HashMap<String, Vec<MealPlanEntry>>>,
    pub shopping_lists: RwLock<HashMap<String, Vec<ShoppingListItem>>>,
    pub submissions: RwLock<Vec<RecipeSubmission>>,
    /// Pacing for simulated backend flows; zero in tests.
    pub simulated_latency: Duration,
}

impl App {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        simulated_latency: Duration,
    ) -> Self {
        let catalog = Catalog::builtin();
        Self {
            catalog,
            engine: ConversationEngine::new(catalog, clock.clone()),
            clock,
            store,
            sessions: RwLock::new(HashMap::new()),
            admin_sessions: RwLock::new(HashMap::new()),
            users: RwLock::new(HashMap::new()),
            conversations: RwLock::new(HashMap::new()),
            pantry: RwLock::new(HashMap::new()),
            meal_plans: RwLock::new(HashMap::new()),
            shopping_lists: RwLock::new(HashMap::new()),
            submissions: RwLock::new(Vec::new()),
            simulated_latency,
        }
    }

    /// Stand-in for the backend round trip that does not exist. Always
    /// succeeds after the configured pacing delay.
    pub async fn simulate_backend(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }

    /// The persisted namespace for one user's keys.
    pub fn user_store(&self, username: &str) -> Arc<dyn KeyValueStore> {
        Arc::new(ScopedStore::new(self.store.clone(), username))
    }

    /// Load the premium gate for one user. Gates are read-modify-write
    /// through the store, so a fresh load per request is the source of
    /// truth.
    pub fn gate_for(&self, username: &str) -> Result<PremiumGate, StorageError> {
        PremiumGate::load(self.user_store(username), self.clock.clone())
    }

    /// Consume a gated feature: premium users always pass, everyone else
    /// spends their one free daily use if it is still available.
    pub fn consume_feature(
        &self,
        username: &str,
        feature: Feature,
    ) -> Result<GateDecision, StorageError> {
        let mut gate = self.gate_for(username)?;
        if gate.is_premium() {
            return Ok(GateDecision::Granted);
        }
        if gate.is_feature_available(feature) {
            gate.record_usage(feature)?;
            Ok(GateDecision::Granted)
        } else {
            Ok(GateDecision::Denied)
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use chefai_core::{FixedClock, MemoryStore};

    /// App wired to the in-memory fakes: fixed clock, memory store, zero
    /// simulated latency.
    pub fn test_app() -> AppState {
        let clock = Arc::new(FixedClock::at_date(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        ));
        Arc::new(App::new(
            Arc::new(MemoryStore::new()),
            clock,
            Duration::ZERO,
        ))
    }

    /// A signed-in user plus their bearer token, for handler tests.
    pub fn signed_in(app: &AppState, username: &str) -> String {
        app.users.write().unwrap().insert(
            username.to_string(),
            UserProfile {
                username: username.to_string(),
                created_at: app.clock.now(),
            },
        );
        crate::auth::create_session(app, username)
    }
}
