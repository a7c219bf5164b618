use serde::{Deserialize, Serialize};

/// A candidate dish. Loaded once from the catalog store and never mutated
/// by the engine for the life of a session.
///
/// The comma-separated list fields (`main_ingredients`, `cooking_methods`,
/// `texture_profile`, `allergens`) are optional structured data; when
/// populated they take precedence over free-text keyword matching in the
/// containment helpers below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub prep_time_mins: u32,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    /// 0-5 scale.
    pub spice_level: u8,
    /// 0-5 scale.
    pub sweet_level: u8,
    /// 0-5 scale.
    pub savory_level: u8,
    /// 1-5 scale.
    pub complexity: u8,
    /// "breakfast", "lunch", "dinner", "dessert", "snack", or empty.
    #[serde(default)]
    pub meal_type: String,
    /// "hot", "cold", "room temperature".
    #[serde(default)]
    pub serving_temperature: String,
    /// Comma-separated, e.g. "chicken,garlic,herbs".
    #[serde(default)]
    pub main_ingredients: String,
    /// Comma-separated, e.g. "grilled,seasoned".
    #[serde(default)]
    pub cooking_methods: String,
    /// Comma-separated, e.g. "crispy,tender".
    #[serde(default)]
    pub texture_profile: String,
    /// Comma-separated, e.g. "nuts,dairy,gluten".
    #[serde(default)]
    pub allergens: String,
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Dish {
    /// Structured ingredient list entries, if any.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        split_list(&self.main_ingredients)
    }

    /// Structured cooking-method list entries, if any.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        split_list(&self.cooking_methods)
    }

    /// Structured texture list entries, if any.
    pub fn textures(&self) -> impl Iterator<Item = &str> {
        split_list(&self.texture_profile)
    }

    /// Structured allergen list entries, if any.
    pub fn allergen_list(&self) -> impl Iterator<Item = &str> {
        split_list(&self.allergens)
    }

    /// Case-insensitive containment over name + description.
    pub fn free_text_mentions(&self, keyword: &str) -> bool {
        contains_ci(&self.name, keyword) || contains_ci(&self.description, keyword)
    }

    /// Does the dish feature this ingredient? The structured ingredient
    /// list wins when populated; otherwise falls back to name/description.
    pub fn mentions_ingredient(&self, keyword: &str) -> bool {
        if !self.main_ingredients.is_empty() {
            self.ingredients().any(|i| contains_ci(i, keyword))
        } else {
            self.free_text_mentions(keyword)
        }
    }

    /// Any of the given ingredient keywords.
    pub fn mentions_any_ingredient(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.mentions_ingredient(k))
    }

    /// Was the dish prepared this way? Structured method list first.
    pub fn uses_method(&self, keyword: &str) -> bool {
        if !self.cooking_methods.is_empty() {
            self.methods().any(|m| contains_ci(m, keyword))
        } else {
            self.free_text_mentions(keyword)
        }
    }

    /// Does the dish have this texture? Structured texture list first.
    pub fn has_texture(&self, keyword: &str) -> bool {
        if !self.texture_profile.is_empty() {
            self.textures().any(|t| contains_ci(t, keyword))
        } else {
            self.free_text_mentions(keyword)
        }
    }

    /// Exact cuisine comparison, case-insensitive.
    pub fn cuisine_is(&self, name: &str) -> bool {
        self.cuisine.eq_ignore_ascii_case(name)
    }

    /// Cuisine membership in a group, case-insensitive.
    pub fn cuisine_in(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.cuisine_is(n))
    }
}
