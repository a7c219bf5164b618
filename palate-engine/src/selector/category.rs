//! Question category extraction, used for recency filtering so the same
//! kind of question is not asked back-to-back.

/// category -> lowercase keywords matched against the attribute name.
/// First match wins.
const CATEGORY_RULES: &[(&str, &[&str])] = &[
    (
        "cuisine",
        &[
            "cuisine", "italian", "asian", "mexican", "thai", "indian", "japanese", "chinese",
            "french", "american", "vietnamese", "korean",
        ],
    ),
    (
        "ingredient",
        &["ingredient", "chicken", "beef", "pasta", "rice", "cheese"],
    ),
    ("dessert", &["dessert", "sweet"]),
    ("dietary", &["vegetarian", "vegan"]),
    ("spice", &["spicy", "hot"]),
    ("time", &["quick", "time"]),
    ("meal_type", &["breakfast", "soup"]),
    ("cooking_method", &["fried", "grilled", "baked"]),
    ("texture", &["crispy", "creamy", "hearty"]),
];

/// Map an attribute name to its question category.
pub fn extract_category(attribute: &str) -> &'static str {
    let lowered = attribute.to_lowercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return category;
        }
    }
    "general"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_map_to_expected_categories() {
        assert_eq!(extract_category("isThai"), "cuisine");
        assert_eq!(extract_category("dynamic_cuisine_italian"), "cuisine");
        assert_eq!(extract_category("hasChicken"), "ingredient");
        assert_eq!(extract_category("dynamic_ingredient_garlic"), "ingredient");
        assert_eq!(extract_category("isDessert"), "dessert");
        assert_eq!(extract_category("isVegetarian"), "dietary");
        assert_eq!(extract_category("isSpicy"), "spice");
        assert_eq!(extract_category("isQuick"), "time");
        assert_eq!(extract_category("isBreakfast"), "meal_type");
        assert_eq!(extract_category("isFried"), "cooking_method");
        assert_eq!(extract_category("isCrispy"), "texture");
        assert_eq!(extract_category("hasLamb"), "general");
    }
}
