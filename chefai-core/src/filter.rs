//! Filter/selection engine for recipe browsing.
//!
//! A `FilterState` holds the user's current browsing selections and derives
//! the visible recipe list by recomputing a predicate over the catalog. All
//! predicates are ANDed; an unset filter is vacuously true. Everything here
//! is a total function; values arriving from free text or query parameters
//! are untrusted and degrade to "unset" or "no match" instead of erroring.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{Catalog, Category, Recipe, Subcategory};

/// Meal-type selection. Recipes carry no meal-type field, so this selection
/// never constrains the visible list; it is carried so the UI round-trips
/// it faithfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Any,
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl FromStr for MealType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(MealType::Any),
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(()),
        }
    }
}

/// Dietary multi-select. Like the meal type, recipes carry no dietary
/// tags, so these flags are carried state only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryFlag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

/// The user's current browsing selections.
///
/// `Default` is the empty filter, which matches the whole catalog. The
/// browse view seeds `category = Food` on mount when the URL carries no
/// category parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterState {
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub cuisine: Option<String>,
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default)]
    pub dietary: BTreeSet<DietaryFlag>,
    pub search: Option<String>,
}

impl FilterState {
    /// Seed a filter state from URL query parameters: `category`,
    /// `subcategory`, `cuisine`, `mealType`, `search`. Unrecognized enum
    /// values are dropped rather than rejected.
    pub fn from_query<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = FilterState::default();
        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key {
                "category" => state.set_category(value.parse().ok()),
                "subcategory" => state.subcategory = Some(value.to_string()),
                "cuisine" => state.cuisine = Some(value.to_string()),
                "mealType" => state.meal_type = value.parse().unwrap_or_default(),
                "search" => state.search = Some(value.to_string()),
                _ => {}
            }
        }
        state
    }

    /// Change the selected category. Always clears the subcategory: a
    /// subcategory from one category is never valid under another.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.subcategory = None;
    }

    /// Symmetric add/remove of a dietary flag.
    pub fn toggle_dietary(&mut self, flag: DietaryFlag) {
        if !self.dietary.insert(flag) {
            self.dietary.remove(&flag);
        }
    }

    /// Whether one recipe passes every set filter.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(category) = self.category {
            if recipe.category != category {
                return false;
            }
        }
        if let Some(subcategory) = &self.subcategory {
            if &recipe.subcategory != subcategory {
                return false;
            }
        }
        if let Some(cuisine) = &self.cuisine {
            if !recipe.cuisine.eq_ignore_ascii_case(cuisine) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_title = recipe.title.to_lowercase().contains(&needle);
            let in_description = recipe.description.to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }
        // meal_type and dietary intentionally do not constrain the result.
        true
    }

    /// The visible recipe list: always a subset of the catalog, in catalog
    /// order. The empty filter returns the full catalog.
    pub fn visible_recipes<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Recipe> {
        catalog.recipes().iter().filter(|r| self.matches(r)).collect()
    }

    /// The visible subcategory list for the selected category; empty when
    /// no category is selected.
    pub fn visible_subcategories<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Subcategory> {
        match self.category {
            Some(category) => catalog.subcategories_for(category),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    #[test]
    fn empty_filter_returns_full_catalog() {
        let state = FilterState::default();
        assert_eq!(state.visible_recipes(catalog()).len(), catalog().recipes().len());
    }

    #[test]
    fn visible_recipes_is_always_a_subset() {
        let mut state = FilterState::default();
        state.set_category(Some(Category::Drinks));
        state.cuisine = Some("indian".to_string());
        state.search = Some("mango".to_string());
        let visible = state.visible_recipes(catalog());
        for recipe in visible {
            assert!(catalog().recipe(&recipe.id).is_some());
        }
    }

    #[test]
    fn category_change_clears_subcategory() {
        let mut state = FilterState::default();
        state.set_category(Some(Category::Food));
        state.subcategory = Some("pasta".to_string());
        state.set_category(Some(Category::Desserts));
        assert_eq!(state.subcategory, None);
        state.set_category(None);
        assert_eq!(state.subcategory, None);
    }

    #[test]
    fn cuisine_match_is_case_insensitive() {
        let mut state = FilterState::default();
        state.set_category(Some(Category::Food));
        state.cuisine = Some("italian".to_string());
        let visible = state.visible_recipes(catalog());
        assert!(visible.iter().any(|r| r.id == "pasta-primavera"));
    }

    #[test]
    fn category_mismatch_excludes() {
        let mut state = FilterState::default();
        state.set_category(Some(Category::Drinks));
        let visible = state.visible_recipes(catalog());
        assert!(visible.iter().all(|r| r.id != "pasta-primavera"));
    }

    #[test]
    fn search_matches_title_or_description() {
        let mut by_title = FilterState::default();
        by_title.search = Some("LAVA".to_string());
        assert!(by_title
            .visible_recipes(catalog())
            .iter()
            .any(|r| r.id == "chocolate-lava-cake"));

        let mut by_description = FilterState::default();
        by_description.search = Some("molten".to_string());
        assert!(by_description
            .visible_recipes(catalog())
            .iter()
            .any(|r| r.id == "chocolate-lava-cake"));
    }

    #[test]
    fn unknown_cuisine_matches_nothing() {
        let mut state = FilterState::default();
        state.cuisine = Some("martian".to_string());
        assert!(state.visible_recipes(catalog()).is_empty());
    }

    #[test]
    fn meal_type_never_constrains_results() {
        let mut state = FilterState::default();
        state.set_category(Some(Category::Food));
        let before = state.visible_recipes(catalog()).len();
        state.meal_type = MealType::Breakfast;
        assert_eq!(state.visible_recipes(catalog()).len(), before);
    }

    #[test]
    fn toggle_dietary_is_symmetric() {
        let mut state = FilterState::default();
        state.toggle_dietary(DietaryFlag::Vegan);
        assert!(state.dietary.contains(&DietaryFlag::Vegan));
        state.toggle_dietary(DietaryFlag::Vegan);
        assert!(!state.dietary.contains(&DietaryFlag::Vegan));
    }

    #[test]
    fn from_query_seeds_known_parameters() {
        let state = FilterState::from_query([
            ("category", "food"),
            ("subcategory", "pasta"),
            ("cuisine", "Italian"),
            ("mealType", "dinner"),
            ("search", "primavera"),
        ]);
        assert_eq!(state.category, Some(Category::Food));
        assert_eq!(state.subcategory.as_deref(), Some("pasta"));
        assert_eq!(state.cuisine.as_deref(), Some("Italian"));
        assert_eq!(state.meal_type, MealType::Dinner);
        assert_eq!(state.search.as_deref(), Some("primavera"));
        assert!(state
            .visible_recipes(catalog())
            .iter()
            .any(|r| r.id == "pasta-primavera"));
    }

    #[test]
    fn from_query_drops_unrecognized_values() {
        let state = FilterState::from_query([
            ("category", "snacks"),
            ("mealType", "brunch"),
            ("utm_source", "newsletter"),
        ]);
        assert_eq!(state.category, None);
        assert_eq!(state.meal_type, MealType::Any);
    }

    #[test]
    fn subcategory_seeding_after_category_survives_ordering() {
        // set_category runs first in from_query iteration order, so a
        // subcategory appearing later must stick.
        let state = FilterState::from_query([("category", "food"), ("subcategory", "pizza")]);
        assert_eq!(state.subcategory.as_deref(), Some("pizza"));
    }
}
