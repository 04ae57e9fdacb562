//! The fixed rule table behind the assistant.
//!
//! Rules are evaluated top to bottom against the lowercased input;
//! the first rule with a matching trigger wins and rule order is the only
//! tie-break. Changing the order changes observable behavior.

use crate::catalog::Category;

/// One scripted rule: when the input contains any trigger substring, the
/// assistant infers this ingredient list and will suggest from this
/// category.
#[derive(Debug)]
pub struct Rule {
    pub triggers: &'static [&'static str],
    pub ingredients: &'static [&'static str],
    pub category: Category,
}

pub const RULES: &[Rule] = &[
    Rule {
        triggers: &["pasta", "spaghetti", "penne", "tomato", "noodle"],
        ingredients: &["pasta", "tomatoes", "garlic", "olive oil"],
        category: Category::Food,
    },
    Rule {
        triggers: &["chicken", "rice", "egg", "ginger", "soy"],
        ingredients: &["chicken", "rice", "ginger", "soy sauce"],
        category: Category::Food,
    },
    Rule {
        triggers: &["chocolate", "cocoa", "cake", "brownie"],
        ingredients: &["chocolate", "butter", "eggs", "sugar"],
        category: Category::Desserts,
    },
    Rule {
        triggers: &["apple", "cinnamon", "oats"],
        ingredients: &["apples", "cinnamon", "oats", "brown sugar"],
        category: Category::Desserts,
    },
    Rule {
        triggers: &["mango", "smoothie", "yogurt", "lemon", "mint", "juice"],
        ingredients: &["mango", "yogurt", "honey", "ice"],
        category: Category::Drinks,
    },
];

/// Confirmation keywords accepted while ingredients are identified.
const CONFIRMATIONS: &[&str] = &["yes", "show", "ok", "sure", "please"];

/// First matching rule for a lowercased input, if any.
pub fn first_match(lowered: &str) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| lowered.contains(t)))
}

pub fn is_confirmation(lowered: &str) -> bool {
    CONFIRMATIONS.iter().any(|k| lowered.contains(k))
}

/// Static category -> suggested recipe id table.
pub fn suggestion_for(category: Category) -> &'static str {
    match category {
        Category::Food => "pasta-primavera",
        Category::Desserts => "chocolate-lava-cake",
        Category::Drinks => "mango-smoothie",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn rule_order_is_the_tie_break() {
        // "chicken pasta" hits both food rules; the pasta rule is listed
        // first and must win.
        let rule = first_match("chicken pasta bake").unwrap();
        assert_eq!(rule.ingredients[0], "pasta");
    }

    #[test]
    fn every_suggestion_exists_in_the_catalog() {
        let catalog = Catalog::builtin();
        for rule in RULES {
            let id = suggestion_for(rule.category);
            assert!(catalog.recipe(id).is_some(), "missing suggestion {id}");
        }
    }

    #[test]
    fn no_match_for_unrelated_input() {
        assert!(first_match("what is the weather like").is_none());
    }
}
