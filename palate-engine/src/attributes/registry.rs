//! The fixed attribute vocabulary as a predicate table.
//!
//! Predicates combine exact categorical comparisons, numeric thresholds,
//! and keyword containment. Containment helpers on `Dish` consult the
//! structured list fields first and fall back to name/description.

use palate_core::catalog::Dish;

/// A named boolean predicate over a dish.
pub type Predicate = fn(&Dish) -> bool;

const ASIAN_CUISINES: &[&str] = &[
    "Chinese",
    "Japanese",
    "Thai",
    "Korean",
    "Vietnamese",
    "Indian",
    "Asian",
];

const MIDDLE_EASTERN_CUISINES: &[&str] = &["Middle Eastern", "Lebanese", "Turkish", "Persian"];

const SEAFOOD_KEYWORDS: &[&str] = &["fish", "shrimp", "seafood", "salmon", "tuna", "lobster", "crab"];

const CHEESE_KEYWORDS: &[&str] = &["cheese", "parmesan", "mozzarella", "cheddar", "feta"];

const VEGETABLE_KEYWORDS: &[&str] = &[
    "vegetable", "lettuce", "tomato", "onion", "pepper", "spinach", "kale",
];

const PASTA_KEYWORDS: &[&str] = &["pasta", "spaghetti", "noodle", "linguine", "penne"];

const RICE_KEYWORDS: &[&str] = &["rice", "risotto", "paella"];

const NUT_KEYWORDS: &[&str] = &["peanut", "almond", "cashew", "walnut", "pecan"];

fn vegetable_keyword_hits(d: &Dish) -> usize {
    VEGETABLE_KEYWORDS
        .iter()
        .filter(|k| d.mentions_ingredient(k))
        .count()
}

/// The full vocabulary. Keys are the attribute names questions carry;
/// a duplicate key here is caught by an assertion at evaluator startup.
pub const REGISTRY: &[(&str, Predicate)] = &[
    // Dietary and core flags
    ("isDessert", |d| {
        d.cuisine_is("Dessert") || d.sweet_level >= 4 || d.meal_type.eq_ignore_ascii_case("dessert")
    }),
    ("isVegetarian", |d| d.is_vegetarian),
    ("isVegan", |d| d.is_vegan),
    ("isGlutenFree", |d| d.is_gluten_free),
    ("isSpicy", |d| d.spice_level >= 3),
    ("isSweet", |d| d.sweet_level >= 3),
    ("isQuick", |d| d.prep_time_mins <= 30),
    ("isComplex", |d| d.prep_time_mins > 45 || d.complexity >= 4),
    ("isHealthy", |d| d.is_vegetarian && !d.uses_method("fried")),
    ("isComfortFood", |d| d.savory_level >= 4),
    // Cuisine flags
    ("isItalian", |d| d.cuisine_is("Italian")),
    ("isMexican", |d| d.cuisine_is("Mexican")),
    ("isFrench", |d| d.cuisine_is("French")),
    ("isAmerican", |d| d.cuisine_is("American")),
    ("isJapanese", |d| d.cuisine_is("Japanese")),
    ("isIndian", |d| d.cuisine_is("Indian")),
    ("isThai", |d| d.cuisine_is("Thai")),
    ("isAsian", |d| d.cuisine_in(ASIAN_CUISINES)),
    ("isMiddleEastern", |d| d.cuisine_in(MIDDLE_EASTERN_CUISINES)),
    // Ingredient flags
    ("hasMeat", |d| !d.is_vegetarian),
    ("hasChicken", |d| d.mentions_ingredient("chicken")),
    ("hasBeef", |d| d.mentions_ingredient("beef")),
    ("hasPork", |d| d.mentions_any_ingredient(&["pork", "bacon", "ham"])),
    ("hasSeafood", |d| d.mentions_any_ingredient(SEAFOOD_KEYWORDS)),
    ("hasEggs", |d| d.mentions_ingredient("egg")),
    ("hasCheese", |d| d.mentions_any_ingredient(CHEESE_KEYWORDS)),
    ("hasVegetables", |d| {
        d.is_vegetarian || d.mentions_any_ingredient(VEGETABLE_KEYWORDS)
    }),
    ("hasLotsOfVegetables", |d| {
        d.is_vegan || vegetable_keyword_hits(d) >= 2
    }),
    ("hasRice", |d| d.mentions_any_ingredient(RICE_KEYWORDS)),
    ("hasPasta", |d| d.mentions_any_ingredient(PASTA_KEYWORDS)),
    ("hasBread", |d| {
        d.mentions_any_ingredient(&["bread", "bun", "toast", "baguette"])
    }),
    ("hasOnionGarlic", |d| d.mentions_any_ingredient(&["onion", "garlic"])),
    ("hasCoconut", |d| d.mentions_ingredient("coconut")),
    ("hasHerbs", |d| {
        d.mentions_any_ingredient(&["herb", "basil", "cilantro", "parsley", "mint"])
    }),
    ("hasHerbsSpices", |d| d.mentions_any_ingredient(&["herb", "spice"])),
    ("hasMushrooms", |d| d.mentions_ingredient("mushroom")),
    ("hasBeans", |d| d.mentions_any_ingredient(&["bean", "lentil", "chickpea"])),
    ("hasNuts", |d| {
        d.mentions_any_ingredient(NUT_KEYWORDS) || d.allergen_list().any(|a| a.contains("nut"))
    }),
    ("hasLamb", |d| d.mentions_ingredient("lamb")),
    ("hasCitrus", |d| {
        d.mentions_any_ingredient(&["lime", "lemon", "citrus", "orange"])
    }),
    ("hasSauce", |d| d.mentions_any_ingredient(&["sauce", "gravy", "dressing"])),
    ("hasCrust", |d| d.free_text_mentions("crust") || d.free_text_mentions("pie") || d.free_text_mentions("pizza")),
    // Meal-type flags
    ("isBreakfast", |d| {
        d.meal_type.eq_ignore_ascii_case("breakfast")
            || d.free_text_mentions("breakfast")
            || d.free_text_mentions("pancake")
            || d.free_text_mentions("omelet")
    }),
    ("isSoup", |d| {
        d.free_text_mentions("soup") || d.free_text_mentions("broth") || d.free_text_mentions("chowder")
    }),
    ("isSalad", |d| d.free_text_mentions("salad")),
    // Preparation flags
    ("isFried", |d| d.uses_method("fried")),
    ("isGrilled", |d| d.uses_method("grilled")),
    ("isBaked", |d| d.uses_method("baked")),
    ("isBakedRoasted", |d| d.uses_method("baked") || d.uses_method("roasted")),
    ("isStuffed", |d| {
        d.free_text_mentions("stuffed") || d.free_text_mentions("filled")
    }),
    ("isFermented", |d| {
        d.mentions_any_ingredient(&["fermented", "kimchi", "miso", "sauerkraut", "pickled"])
    }),
    ("isSmoky", |d| {
        d.uses_method("smoked") || d.free_text_mentions("smoky") || d.free_text_mentions("barbecue")
    }),
    // Sensory flags
    ("isCrispy", |d| d.has_texture("crispy")),
    ("isCreamy", |d| d.has_texture("creamy")),
    ("isHearty", |d| d.has_texture("hearty") || d.savory_level >= 5),
    ("isTangy", |d| {
        d.mentions_any_ingredient(&["lime", "lemon", "vinegar", "tamarind"]) || d.free_text_mentions("tangy")
    }),
    ("isHot", |d| d.spice_level >= 4),
    ("isServedCold", |d| d.serving_temperature.eq_ignore_ascii_case("cold")),
    ("isFingerFood", |d| {
        ["taco", "burger", "sandwich", "wrap", "pizza", "roll", "skewer"]
            .iter()
            .any(|k| d.free_text_mentions(k))
    }),
    ("usesChopsticks", |d| {
        d.cuisine_in(&["Chinese", "Japanese", "Korean", "Thai", "Vietnamese"])
            && d.mentions_any_ingredient(&["noodle", "rice", "sushi", "dumpling"])
    }),
    ("hasStrongFlavors", |d| d.spice_level >= 3 || d.savory_level >= 5),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (name, _) in REGISTRY {
            assert!(seen.insert(*name), "duplicate registry key: {name}");
        }
    }

    #[test]
    fn registry_covers_the_weight_table() {
        // Every attribute with a tuned weight must be evaluable.
        let names: HashSet<&str> = REGISTRY.iter().map(|(n, _)| *n).collect();
        for (weighted, _) in crate::scoring::weights::ATTRIBUTE_WEIGHTS {
            assert!(
                names.contains(weighted),
                "weighted attribute without a predicate: {weighted}"
            );
        }
    }
}
