//! Seeded reference catalog: 10 dishes and 10 predefined questions.
//!
//! Used by tests, benches, and as starter data for a fresh database.

use palate_core::catalog::{Dish, Question, QuestionKind};
use palate_core::PalateResult;

use crate::SqliteCatalog;

const BINARY_CHOICES: [&str; 3] = ["Yes", "No", "Don't Care"];

fn base(id: i64, name: &str, description: &str, cuisine: &str) -> Dish {
    Dish {
        id,
        name: name.to_string(),
        description: description.to_string(),
        cuisine: cuisine.to_string(),
        prep_time_mins: 0,
        is_vegetarian: false,
        is_vegan: false,
        is_gluten_free: false,
        spice_level: 0,
        sweet_level: 0,
        savory_level: 0,
        complexity: 1,
        meal_type: String::new(),
        serving_temperature: "hot".to_string(),
        main_ingredients: String::new(),
        cooking_methods: String::new(),
        texture_profile: String::new(),
        allergens: String::new(),
    }
}

/// The 10 reference dishes. Ids are stable; the vegetarian set is {1,4,5,9}.
pub fn reference_dishes() -> Vec<Dish> {
    vec![
        Dish {
            prep_time_mins: 30,
            is_vegetarian: true,
            spice_level: 1,
            sweet_level: 2,
            savory_level: 4,
            complexity: 2,
            meal_type: "dinner".to_string(),
            main_ingredients: "tomato sauce,mozzarella,basil".to_string(),
            cooking_methods: "baked".to_string(),
            texture_profile: "chewy,crispy".to_string(),
            allergens: "gluten,dairy".to_string(),
            ..base(
                1,
                "Pizza Margherita",
                "Classic Italian pizza with tomato sauce, mozzarella, and basil",
                "Italian",
            )
        },
        Dish {
            prep_time_mins: 20,
            spice_level: 1,
            sweet_level: 2,
            savory_level: 5,
            complexity: 1,
            meal_type: "lunch".to_string(),
            main_ingredients: "beef,lettuce,tomato,cheese,bun".to_string(),
            cooking_methods: "grilled".to_string(),
            texture_profile: "juicy".to_string(),
            allergens: "gluten,dairy".to_string(),
            ..base(
                2,
                "Beef Burger",
                "Classic beef patty with lettuce, tomato, cheese, and sauce on a bun",
                "American",
            )
        },
        Dish {
            prep_time_mins: 25,
            is_gluten_free: true,
            spice_level: 3,
            sweet_level: 3,
            savory_level: 4,
            complexity: 3,
            meal_type: "dinner".to_string(),
            main_ingredients: "rice noodles,eggs,tofu,bean sprouts,peanuts,lime".to_string(),
            cooking_methods: "stir-fried".to_string(),
            texture_profile: "chewy".to_string(),
            allergens: "peanuts,eggs".to_string(),
            ..base(
                3,
                "Pad Thai",
                "Stir-fried rice noodles with eggs, tofu, bean sprouts, peanuts, and lime",
                "Thai",
            )
        },
        Dish {
            prep_time_mins: 35,
            is_vegetarian: true,
            is_vegan: true,
            is_gluten_free: true,
            spice_level: 4,
            sweet_level: 1,
            savory_level: 5,
            complexity: 3,
            meal_type: "dinner".to_string(),
            main_ingredients: "mixed vegetables,curry sauce,spices".to_string(),
            cooking_methods: "stewed".to_string(),
            texture_profile: "hearty".to_string(),
            ..base(
                4,
                "Vegetable Curry",
                "Mixed vegetables in a flavorful curry sauce with spices",
                "Indian",
            )
        },
        Dish {
            prep_time_mins: 15,
            is_vegetarian: true,
            sweet_level: 1,
            savory_level: 3,
            complexity: 1,
            meal_type: "lunch".to_string(),
            serving_temperature: "cold".to_string(),
            main_ingredients: "romaine lettuce,croutons,parmesan,caesar dressing".to_string(),
            texture_profile: "crispy,fresh".to_string(),
            allergens: "gluten,dairy,eggs".to_string(),
            ..base(
                5,
                "Caesar Salad",
                "Romaine lettuce with croutons, parmesan, and caesar dressing",
                "Italian",
            )
        },
        Dish {
            prep_time_mins: 40,
            is_gluten_free: true,
            spice_level: 1,
            sweet_level: 2,
            savory_level: 4,
            complexity: 4,
            meal_type: "dinner".to_string(),
            serving_temperature: "cold".to_string(),
            main_ingredients: "rice,fish,seaweed,wasabi,ginger".to_string(),
            texture_profile: "soft".to_string(),
            allergens: "fish".to_string(),
            ..base(
                6,
                "Sushi Roll",
                "Rice and fish wrapped in seaweed with wasabi and ginger",
                "Japanese",
            )
        },
        Dish {
            prep_time_mins: 25,
            is_gluten_free: true,
            spice_level: 1,
            savory_level: 4,
            complexity: 2,
            meal_type: "dinner".to_string(),
            main_ingredients: "chicken,herbs".to_string(),
            cooking_methods: "grilled,seasoned".to_string(),
            texture_profile: "tender".to_string(),
            ..base(
                7,
                "Grilled Chicken",
                "Seasoned chicken breast grilled to perfection",
                "American",
            )
        },
        Dish {
            prep_time_mins: 30,
            is_gluten_free: true,
            spice_level: 3,
            sweet_level: 1,
            savory_level: 4,
            complexity: 2,
            meal_type: "dinner".to_string(),
            main_ingredients: "corn tortillas,beef,vegetables,salsa".to_string(),
            cooking_methods: "grilled".to_string(),
            texture_profile: "crunchy".to_string(),
            ..base(
                8,
                "Tacos",
                "Corn tortillas filled with meat, vegetables, and salsa",
                "Mexican",
            )
        },
        Dish {
            prep_time_mins: 50,
            is_vegetarian: true,
            sweet_level: 5,
            savory_level: 1,
            complexity: 3,
            meal_type: "dessert".to_string(),
            main_ingredients: "chocolate,flour,sugar,eggs,butter".to_string(),
            cooking_methods: "baked".to_string(),
            texture_profile: "moist".to_string(),
            allergens: "gluten,dairy,eggs".to_string(),
            ..base(
                9,
                "Chocolate Cake",
                "Rich chocolate cake with frosting",
                "Dessert",
            )
        },
        Dish {
            prep_time_mins: 45,
            is_gluten_free: true,
            spice_level: 2,
            sweet_level: 1,
            savory_level: 5,
            complexity: 3,
            meal_type: "dinner".to_string(),
            main_ingredients: "rice noodles,beef,broth,herbs".to_string(),
            cooking_methods: "slow-cooked".to_string(),
            texture_profile: "light".to_string(),
            ..base(
                10,
                "Pho",
                "Vietnamese soup with rice noodles, herbs, and meat",
                "Vietnamese",
            )
        },
    ]
}

fn binary(id: i64, text: &str, attribute: &str, weight: u8) -> Question {
    Question {
        id,
        text: text.to_string(),
        kind: QuestionKind::Binary,
        choices: BINARY_CHOICES.iter().map(|s| s.to_string()).collect(),
        attribute: attribute.to_string(),
        weight,
    }
}

/// The 10 reference catalog questions. Attributes are keys into the
/// engine's attribute vocabulary.
pub fn reference_questions() -> Vec<Question> {
    vec![
        binary(1, "Are you in the mood for something spicy?", "isSpicy", 8),
        binary(2, "Would you prefer a vegetarian dish?", "isVegetarian", 9),
        binary(3, "Do you want something with meat?", "hasMeat", 7),
        binary(
            4,
            "Are you looking for something quick to prepare (under 30 minutes)?",
            "isQuick",
            6,
        ),
        binary(5, "Do you prefer Asian cuisine?", "isAsian", 5),
        binary(6, "Do you want something gluten-free?", "isGlutenFree", 7),
        binary(7, "Are you in the mood for Italian food?", "isItalian", 5),
        binary(8, "Are you looking for comfort food?", "isComfortFood", 4),
        binary(9, "Do you want a dessert?", "isDessert", 9),
        binary(10, "Do you prefer something light and healthy?", "isHealthy", 6),
    ]
}

/// Populate a SQLite catalog with the reference dataset.
pub fn seed_reference_catalog(catalog: &SqliteCatalog) -> PalateResult<()> {
    catalog.insert_dishes(&reference_dishes())?;
    catalog.insert_questions(&reference_questions())?;
    Ok(())
}
