//! Attribute evaluation: maps (dish, named boolean attribute) -> bool.
//!
//! The vocabulary is closed and table-driven (see `registry`), plus two
//! parametric families resolved by prefix: `dynamic_cuisine_<name>` and
//! `dynamic_ingredient_<name>`. Unknown attributes evaluate to false and
//! are logged, never raised. Results are cached per (dish-id, attribute)
//! for the life of the session.

pub mod registry;

use std::collections::HashMap;

use tracing::warn;

use palate_core::catalog::Dish;

use registry::{Predicate, REGISTRY};

/// Strip spaces and lowercase, the normalization used when dynamic
/// attribute names are minted (e.g. "Middle Eastern" -> "middleeastern").
fn normalized(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Cached, registry-backed attribute evaluator.
pub struct AttributeEvaluator {
    registry: HashMap<&'static str, Predicate>,
    cache: HashMap<(i64, String), bool>,
}

impl AttributeEvaluator {
    /// Build the evaluator from the static predicate table. A duplicate
    /// table key is a configuration error and fails fast here.
    pub fn new() -> Self {
        let mut registry = HashMap::with_capacity(REGISTRY.len());
        for (name, predicate) in REGISTRY {
            let previous = registry.insert(*name, *predicate);
            assert!(previous.is_none(), "duplicate attribute predicate: {name}");
        }
        Self {
            registry,
            cache: HashMap::new(),
        }
    }

    /// Evaluate `attribute` for `dish`, consulting the cache first.
    pub fn evaluate(&mut self, dish: &Dish, attribute: &str) -> bool {
        let key = (dish.id, attribute.to_string());
        if let Some(&hit) = self.cache.get(&key) {
            return hit;
        }
        let value = self.evaluate_uncached(dish, attribute);
        self.cache.insert(key, value);
        value
    }

    fn evaluate_uncached(&self, dish: &Dish, attribute: &str) -> bool {
        if let Some(predicate) = self.registry.get(attribute) {
            return predicate(dish);
        }
        if let Some(cuisine) = attribute.strip_prefix("dynamic_cuisine_") {
            return normalized(&dish.cuisine) == cuisine;
        }
        if let Some(ingredient) = attribute.strip_prefix("dynamic_ingredient_") {
            return dish.mentions_ingredient(ingredient);
        }
        warn!(attribute, "unknown attribute, treating as absent");
        false
    }

    /// Number of cached evaluations. Observability only.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached evaluation. Invoked by full session reset.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for AttributeEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish() -> Dish {
        Dish {
            id: 1,
            name: "Pad Thai".to_string(),
            description: "Stir-fried rice noodles with peanuts and lime".to_string(),
            cuisine: "Thai".to_string(),
            prep_time_mins: 25,
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: true,
            spice_level: 3,
            sweet_level: 3,
            savory_level: 4,
            complexity: 3,
            meal_type: "dinner".to_string(),
            serving_temperature: "hot".to_string(),
            main_ingredients: "rice noodles,eggs,tofu,peanuts,lime".to_string(),
            cooking_methods: "stir-fried".to_string(),
            texture_profile: "chewy".to_string(),
            allergens: "peanuts,eggs".to_string(),
        }
    }

    #[test]
    fn registry_attributes_resolve() {
        let mut eval = AttributeEvaluator::new();
        let d = dish();
        assert!(eval.evaluate(&d, "isSpicy"));
        assert!(eval.evaluate(&d, "isThai"));
        assert!(eval.evaluate(&d, "isAsian"));
        assert!(eval.evaluate(&d, "hasMeat"));
        assert!(!eval.evaluate(&d, "isVegetarian"));
        assert!(!eval.evaluate(&d, "isItalian"));
    }

    #[test]
    fn dynamic_families_resolve_by_prefix() {
        let mut eval = AttributeEvaluator::new();
        let d = dish();
        assert!(eval.evaluate(&d, "dynamic_cuisine_thai"));
        assert!(!eval.evaluate(&d, "dynamic_cuisine_french"));
        assert!(eval.evaluate(&d, "dynamic_ingredient_peanuts"));
        assert!(!eval.evaluate(&d, "dynamic_ingredient_beef"));
    }

    #[test]
    fn unknown_attributes_are_false_not_fatal() {
        let mut eval = AttributeEvaluator::new();
        assert!(!eval.evaluate(&dish(), "dynamic_mood_adventurous"));
        assert!(!eval.evaluate(&dish(), "nonsense"));
    }

    #[test]
    fn evaluations_are_cached_until_clear() {
        let mut eval = AttributeEvaluator::new();
        let d = dish();
        assert_eq!(eval.cache_len(), 0);
        eval.evaluate(&d, "isSpicy");
        eval.evaluate(&d, "isSpicy");
        assert_eq!(eval.cache_len(), 1);
        eval.clear();
        assert_eq!(eval.cache_len(), 0);
    }
}
