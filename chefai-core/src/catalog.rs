//! The static recipe catalog.
//!
//! Recipes and subcategories are fixed at build time and read-only at
//! runtime. Favoriting, submissions, and approvals all happen in
//! session-level state and never write back here.

use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Top-level recipe grouping. Subcategories hang off exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Desserts,
    Drinks,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Food, Category::Desserts, Category::Drinks];

    pub fn key(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    /// Case-insensitive; anything unrecognized is an error for the caller
    /// to treat as "unset" (query parameters are untrusted input).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "desserts" => Ok(Category::Desserts),
            "drinks" => Ok(Category::Drinks),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One ingredient line. Display order, not semantically significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
}

impl Ingredient {
    fn new(name: &str, quantity: &str, unit: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionalInfo {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub category: Category,
    pub subcategory: String,
    pub difficulty: Difficulty,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    /// Execution order; the order is significant.
    pub instructions: Vec<String>,
    pub nutrition: NutritionalInfo,
    pub is_premium_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub category: Category,
}

impl Subcategory {
    fn new(id: &str, name: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            image_url: format!("/images/subcategories/{id}.jpg"),
            category,
        }
    }
}

/// The full static data set.
pub struct Catalog {
    recipes: Vec<Recipe>,
    subcategories: Vec<Subcategory>,
}

impl Catalog {
    /// The built-in catalog shipped with the product.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn subcategories(&self) -> &[Subcategory] {
        &self.subcategories
    }

    /// All subcategories under a category. An empty result is valid.
    pub fn subcategories_for(&self, category: Category) -> Vec<&Subcategory> {
        self.subcategories
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    subcategories: vec![
        Subcategory::new("pasta", "Pasta", Category::Food),
        Subcategory::new("pizza", "Pizza", Category::Food),
        Subcategory::new("stir-fry", "Stir-fry", Category::Food),
        Subcategory::new("salads", "Salads", Category::Food),
        Subcategory::new("roasts", "Roasts", Category::Food),
        Subcategory::new("cakes", "Cakes", Category::Desserts),
        Subcategory::new("baked-treats", "Baked Treats", Category::Desserts),
        Subcategory::new("frozen", "Frozen", Category::Desserts),
        Subcategory::new("smoothies", "Smoothies", Category::Drinks),
        Subcategory::new("cold-drinks", "Cold Drinks", Category::Drinks),
        Subcategory::new("teas", "Teas", Category::Drinks),
    ],
    recipes: vec![
        Recipe {
            id: "pasta-primavera".to_string(),
            title: "Pasta Primavera".to_string(),
            description: "Penne tossed with spring vegetables in a light garlic and olive oil sauce.".to_string(),
            cuisine: "Italian".to_string(),
            category: Category::Food,
            subcategory: "pasta".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 15,
            cook_time_minutes: 20,
            servings: 4,
            ingredients: vec![
                Ingredient::new("penne pasta", "400", Some("g")),
                Ingredient::new("cherry tomatoes", "250", Some("g")),
                Ingredient::new("zucchini", "1", None),
                Ingredient::new("garlic", "3", Some("cloves")),
                Ingredient::new("olive oil", "3", Some("tbsp")),
                Ingredient::new("parmesan", "50", Some("g")),
            ],
            instructions: vec![
                "Cook the penne in salted boiling water until al dente.".to_string(),
                "Saute garlic in olive oil, then add zucchini and tomatoes.".to_string(),
                "Toss the drained pasta with the vegetables and a splash of pasta water.".to_string(),
                "Finish with grated parmesan and black pepper.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 520,
                protein_g: 16,
                carbs_g: 78,
                fat_g: 15,
            },
            is_premium_only: false,
        },
        Recipe {
            id: "margherita-pizza".to_string(),
            title: "Margherita Pizza".to_string(),
            description: "Classic Neapolitan pizza with tomato, mozzarella, and basil.".to_string(),
            cuisine: "Italian".to_string(),
            category: Category::Food,
            subcategory: "pizza".to_string(),
            difficulty: Difficulty::Medium,
            prep_time_minutes: 90,
            cook_time_minutes: 12,
            servings: 2,
            ingredients: vec![
                Ingredient::new("pizza dough", "300", Some("g")),
                Ingredient::new("passata", "150", Some("ml")),
                Ingredient::new("mozzarella", "125", Some("g")),
                Ingredient::new("fresh basil", "1", Some("handful")),
            ],
            instructions: vec![
                "Stretch the dough into a thin round on a floured surface.".to_string(),
                "Spread the passata, leaving a border for the crust.".to_string(),
                "Top with torn mozzarella and bake at maximum heat until blistered.".to_string(),
                "Scatter basil leaves over the hot pizza before serving.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 610,
                protein_g: 24,
                carbs_g: 82,
                fat_g: 20,
            },
            is_premium_only: false,
        },
        Recipe {
            id: "chicken-stir-fry".to_string(),
            title: "Ginger Chicken Stir-fry".to_string(),
            description: "Quick wok-fried chicken with ginger, soy, and crisp vegetables.".to_string(),
            cuisine: "Chinese".to_string(),
            category: Category::Food,
            subcategory: "stir-fry".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 15,
            cook_time_minutes: 10,
            servings: 2,
            ingredients: vec![
                Ingredient::new("chicken breast", "300", Some("g")),
                Ingredient::new("soy sauce", "2", Some("tbsp")),
                Ingredient::new("fresh ginger", "1", Some("thumb")),
                Ingredient::new("broccoli", "200", Some("g")),
                Ingredient::new("jasmine rice", "150", Some("g")),
            ],
            instructions: vec![
                "Cook the rice and keep it warm.".to_string(),
                "Sear sliced chicken in a smoking-hot wok, then set aside.".to_string(),
                "Stir-fry ginger and broccoli, return the chicken, add soy sauce.".to_string(),
                "Serve over the rice.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 480,
                protein_g: 42,
                carbs_g: 52,
                fat_g: 10,
            },
            is_premium_only: false,
        },
        Recipe {
            id: "greek-salad".to_string(),
            title: "Greek Salad".to_string(),
            description: "Tomatoes, cucumber, olives, and feta with oregano dressing.".to_string(),
            cuisine: "Greek".to_string(),
            category: Category::Food,
            subcategory: "salads".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 15,
            cook_time_minutes: 0,
            servings: 4,
            ingredients: vec![
                Ingredient::new("tomatoes", "4", None),
                Ingredient::new("cucumber", "1", None),
                Ingredient::new("kalamata olives", "100", Some("g")),
                Ingredient::new("feta", "200", Some("g")),
                Ingredient::new("dried oregano", "1", Some("tsp")),
                Ingredient::new("olive oil", "4", Some("tbsp")),
            ],
            instructions: vec![
                "Chop the tomatoes and cucumber into chunky pieces.".to_string(),
                "Combine with olives, dress with oil and oregano.".to_string(),
                "Top with a slab of feta and serve immediately.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 320,
                protein_g: 10,
                carbs_g: 12,
                fat_g: 26,
            },
            is_premium_only: false,
        },
        Recipe {
            id: "beef-wellington".to_string(),
            title: "Beef Wellington".to_string(),
            description: "Fillet of beef wrapped in mushroom duxelles and golden puff pastry.".to_string(),
            cuisine: "British".to_string(),
            category: Category::Food,
            subcategory: "roasts".to_string(),
            difficulty: Difficulty::Hard,
            prep_time_minutes: 60,
            cook_time_minutes: 45,
            servings: 6,
            ingredients: vec![
                Ingredient::new("beef fillet", "900", Some("g")),
                Ingredient::new("chestnut mushrooms", "400", Some("g")),
                Ingredient::new("puff pastry", "500", Some("g")),
                Ingredient::new("prosciutto", "8", Some("slices")),
                Ingredient::new("egg yolk", "2", None),
            ],
            instructions: vec![
                "Sear the seasoned fillet on all sides and let it cool.".to_string(),
                "Cook the minced mushrooms down to a dry duxelles.".to_string(),
                "Wrap the fillet in prosciutto and duxelles, then in pastry.".to_string(),
                "Glaze with egg yolk and bake until the pastry is deep gold.".to_string(),
                "Rest for ten minutes before carving.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 780,
                protein_g: 45,
                carbs_g: 38,
                fat_g: 48,
            },
            is_premium_only: true,
        },
        Recipe {
            id: "chocolate-lava-cake".to_string(),
            title: "Chocolate Lava Cake".to_string(),
            description: "Individual dark chocolate cakes with a molten center.".to_string(),
            cuisine: "French".to_string(),
            category: Category::Desserts,
            subcategory: "cakes".to_string(),
            difficulty: Difficulty::Medium,
            prep_time_minutes: 20,
            cook_time_minutes: 12,
            servings: 4,
            ingredients: vec![
                Ingredient::new("dark chocolate", "200", Some("g")),
                Ingredient::new("butter", "100", Some("g")),
                Ingredient::new("eggs", "3", None),
                Ingredient::new("caster sugar", "80", Some("g")),
                Ingredient::new("plain flour", "40", Some("g")),
            ],
            instructions: vec![
                "Melt the chocolate and butter together over a low heat.".to_string(),
                "Whisk eggs and sugar until pale, then fold in the chocolate and flour.".to_string(),
                "Divide between buttered ramekins.".to_string(),
                "Bake at 200C for 12 minutes; the centers should still wobble.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 540,
                protein_g: 9,
                carbs_g: 48,
                fat_g: 34,
            },
            is_premium_only: false,
        },
        Recipe {
            id: "apple-crumble".to_string(),
            title: "Apple Crumble".to_string(),
            description: "Cinnamon-spiced apples under a buttery oat crumble topping.".to_string(),
            cuisine: "British".to_string(),
            category: Category::Desserts,
            subcategory: "baked-treats".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 20,
            cook_time_minutes: 35,
            servings: 6,
            ingredients: vec![
                Ingredient::new("bramley apples", "800", Some("g")),
                Ingredient::new("cinnamon", "1", Some("tsp")),
                Ingredient::new("rolled oats", "80", Some("g")),
                Ingredient::new("plain flour", "120", Some("g")),
                Ingredient::new("butter", "120", Some("g")),
                Ingredient::new("brown sugar", "100", Some("g")),
            ],
            instructions: vec![
                "Toss sliced apples with cinnamon and half the sugar in a baking dish.".to_string(),
                "Rub butter into flour, oats, and the remaining sugar.".to_string(),
                "Scatter the crumble over the apples and bake until golden.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 420,
                protein_g: 5,
                carbs_g: 62,
                fat_g: 18,
            },
            is_premium_only: false,
        },
        Recipe {
            id: "mango-sorbet".to_string(),
            title: "Mango Sorbet".to_string(),
            description: "Three-ingredient frozen mango sorbet, no churner required.".to_string(),
            cuisine: "Indian".to_string(),
            category: Category::Desserts,
            subcategory: "frozen".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 10,
            cook_time_minutes: 0,
            servings: 4,
            ingredients: vec![
                Ingredient::new("frozen mango", "500", Some("g")),
                Ingredient::new("lime juice", "2", Some("tbsp")),
                Ingredient::new("honey", "3", Some("tbsp")),
            ],
            instructions: vec![
                "Blitz everything in a food processor until completely smooth.".to_string(),
                "Freeze for two hours, then scoop.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 160,
                protein_g: 2,
                carbs_g: 40,
                fat_g: 0,
            },
            is_premium_only: false,
        },
        Recipe {
            id: "mango-smoothie".to_string(),
            title: "Mango Lassi Smoothie".to_string(),
            description: "Creamy mango and yogurt smoothie with a touch of cardamom.".to_string(),
            cuisine: "Indian".to_string(),
            category: Category::Drinks,
            subcategory: "smoothies".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 5,
            cook_time_minutes: 0,
            servings: 2,
            ingredients: vec![
                Ingredient::new("ripe mango", "1", None),
                Ingredient::new("natural yogurt", "250", Some("ml")),
                Ingredient::new("honey", "1", Some("tbsp")),
                Ingredient::new("ground cardamom", "1", Some("pinch")),
                Ingredient::new("ice cubes", "6", None),
            ],
            instructions: vec![
                "Blend everything until smooth and frothy.".to_string(),
                "Pour over ice and dust with cardamom.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 180,
                protein_g: 6,
                carbs_g: 36,
                fat_g: 3,
            },
            is_premium_only: false,
        },
        Recipe {
            id: "fresh-lemonade".to_string(),
            title: "Fresh Mint Lemonade".to_string(),
            description: "Sharp, lightly sweetened lemonade muddled with fresh mint.".to_string(),
            cuisine: "American".to_string(),
            category: Category::Drinks,
            subcategory: "cold-drinks".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 10,
            cook_time_minutes: 0,
            servings: 4,
            ingredients: vec![
                Ingredient::new("lemons", "6", None),
                Ingredient::new("caster sugar", "80", Some("g")),
                Ingredient::new("fresh mint", "1", Some("bunch")),
                Ingredient::new("still water", "1", Some("l")),
            ],
            instructions: vec![
                "Juice the lemons and dissolve the sugar in a little warm water.".to_string(),
                "Muddle the mint in a jug, add juice, syrup, and cold water.".to_string(),
                "Chill well and serve over ice.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 90,
                protein_g: 0,
                carbs_g: 24,
                fat_g: 0,
            },
            is_premium_only: false,
        },
        Recipe {
            id: "matcha-iced-tea".to_string(),
            title: "Matcha Iced Tea".to_string(),
            description: "Whisked matcha shaken with ice and a dash of maple syrup.".to_string(),
            cuisine: "Japanese".to_string(),
            category: Category::Drinks,
            subcategory: "teas".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 5,
            cook_time_minutes: 0,
            servings: 1,
            ingredients: vec![
                Ingredient::new("matcha powder", "1", Some("tsp")),
                Ingredient::new("maple syrup", "1", Some("tsp")),
                Ingredient::new("cold water", "250", Some("ml")),
                Ingredient::new("ice cubes", "8", None),
            ],
            instructions: vec![
                "Whisk the matcha with a splash of warm water until smooth.".to_string(),
                "Shake with maple syrup, cold water, and ice.".to_string(),
                "Strain into a tall glass.".to_string(),
            ],
            nutrition: NutritionalInfo {
                calories: 30,
                protein_g: 1,
                carbs_g: 7,
                fat_g: 0,
            },
            is_premium_only: false,
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_unique_ids() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.recipes().iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.recipes().len());
    }

    #[test]
    fn every_recipe_points_at_a_known_subcategory() {
        let catalog = Catalog::builtin();
        for recipe in catalog.recipes() {
            let sub = catalog
                .subcategories()
                .iter()
                .find(|s| s.id == recipe.subcategory)
                .unwrap_or_else(|| panic!("unknown subcategory for {}", recipe.id));
            assert_eq!(sub.category, recipe.category, "{}", recipe.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        let recipe = catalog.recipe("pasta-primavera").unwrap();
        assert_eq!(recipe.cuisine, "Italian");
        assert_eq!(recipe.category, Category::Food);
        assert!(catalog.recipe("no-such-recipe").is_none());
    }

    #[test]
    fn subcategories_are_partitioned_by_category() {
        let catalog = Catalog::builtin();
        let food = catalog.subcategories_for(Category::Food);
        assert!(food.iter().all(|s| s.category == Category::Food));
        let total: usize = Category::ALL
            .iter()
            .map(|c| catalog.subcategories_for(*c).len())
            .sum();
        assert_eq!(total, catalog.subcategories().len());
    }
}
