use palate_core::catalog::{Answer, Dish, QuestionKind};
use palate_core::constants::{CATALOG_SCORE_CEILING, GENERIC_SCORE_CEILING, SCORE_FLOOR};
use palate_core::Score;

fn dish(id: i64, name: &str, description: &str) -> Dish {
    Dish {
        id,
        name: name.to_string(),
        description: description.to_string(),
        cuisine: "Italian".to_string(),
        prep_time_mins: 30,
        is_vegetarian: false,
        is_vegan: false,
        is_gluten_free: false,
        spice_level: 1,
        sweet_level: 2,
        savory_level: 4,
        complexity: 2,
        meal_type: String::new(),
        serving_temperature: "hot".to_string(),
        main_ingredients: String::new(),
        cooking_methods: String::new(),
        texture_profile: String::new(),
        allergens: String::new(),
    }
}

// ── Score clamping ────────────────────────────────────────────────────────

#[test]
fn score_clamps_on_construction() {
    assert_eq!(Score::new(0.0).value(), SCORE_FLOOR);
    assert_eq!(Score::new(100.0).value(), CATALOG_SCORE_CEILING);
    assert_eq!(Score::new(1.0).value(), 1.0);
}

#[test]
fn score_scaled_respects_ceiling_argument() {
    let s = Score::new(8.0);
    // The generic path drags scores above its lower ceiling back down.
    assert_eq!(s.scaled(1.0, GENERIC_SCORE_CEILING).value(), 5.0);
    assert_eq!(s.scaled(2.0, CATALOG_SCORE_CEILING).value(), 10.0);
    assert_eq!(s.scaled(0.0001, CATALOG_SCORE_CEILING).value(), SCORE_FLOOR);
}

#[test]
fn score_initial_is_one() {
    assert_eq!(Score::INITIAL.value(), 1.0);
    assert_eq!(Score::default().value(), 1.0);
}

// ── Answer parsing ────────────────────────────────────────────────────────

#[test]
fn answer_literals_round_trip() {
    assert_eq!(Answer::parse("Yes"), Answer::Yes);
    assert_eq!(Answer::parse("No"), Answer::No);
    assert_eq!(Answer::parse("Don't Care"), Answer::DontCare);
    assert_eq!(Answer::Yes.as_str(), "Yes");
    assert_eq!(Answer::DontCare.as_str(), "Don't Care");
}

#[test]
fn unknown_answers_become_choices() {
    // Multiple-choice selections and garbage both take the neutral path.
    assert_eq!(Answer::parse("Thai"), Answer::Choice("Thai".to_string()));
    assert_eq!(Answer::parse("yes"), Answer::Choice("yes".to_string()));
    assert_eq!(Answer::parse(""), Answer::Choice(String::new()));
}

// ── Question kind wire format ─────────────────────────────────────────────

#[test]
fn question_kind_wire_round_trip() {
    assert_eq!(QuestionKind::parse("BINARY").unwrap(), QuestionKind::Binary);
    assert_eq!(
        QuestionKind::parse("MULTIPLE_CHOICE").unwrap(),
        QuestionKind::MultipleChoice
    );
    assert_eq!(QuestionKind::Binary.as_str(), "BINARY");
    assert!(QuestionKind::parse("RATING").is_err());
}

// ── Dish containment helpers ──────────────────────────────────────────────

#[test]
fn structured_ingredients_take_precedence_over_free_text() {
    let mut d = dish(1, "Mystery Stew", "a stew with chicken stock notes");
    d.main_ingredients = "beef,carrots,onions".to_string();

    // The free text says "chicken" but the structured list wins.
    assert!(!d.mentions_ingredient("chicken"));
    assert!(d.mentions_ingredient("beef"));
}

#[test]
fn free_text_fallback_when_no_structured_list() {
    let d = dish(2, "Grilled Chicken", "Seasoned chicken breast grilled to perfection");
    assert!(d.mentions_ingredient("chicken"));
    assert!(!d.mentions_ingredient("tofu"));
    assert!(d.uses_method("grilled"));
}

#[test]
fn cuisine_comparison_is_case_insensitive() {
    let d = dish(3, "Pizza", "cheese pizza");
    assert!(d.cuisine_is("italian"));
    assert!(d.cuisine_in(&["French", "ITALIAN"]));
    assert!(!d.cuisine_in(&["Thai", "Korean"]));
}

#[test]
fn dish_serde_round_trip_with_defaulted_fields() {
    // Older catalog exports omit the structured list fields.
    let json = r#"{
        "id": 11, "name": "Omelette", "description": "Three-egg omelette",
        "cuisine": "French", "prep_time_mins": 10,
        "is_vegetarian": true, "is_vegan": false, "is_gluten_free": true,
        "spice_level": 0, "sweet_level": 0, "savory_level": 3, "complexity": 1
    }"#;
    let d: Dish = serde_json::from_str(json).unwrap();
    assert_eq!(d.name, "Omelette");
    assert!(d.main_ingredients.is_empty());
    assert!(d.meal_type.is_empty());

    let back: Dish = serde_json::from_str(&serde_json::to_string(&d).unwrap()).unwrap();
    assert_eq!(back.id, 11);
    assert_eq!(back.cuisine, "French");
}

#[test]
fn list_fields_split_and_trim() {
    let mut d = dish(4, "Salad", "greens");
    d.texture_profile = "crispy, fresh ,light".to_string();
    let textures: Vec<&str> = d.textures().collect();
    assert_eq!(textures, vec!["crispy", "fresh", "light"]);
    assert!(d.has_texture("fresh"));
}
