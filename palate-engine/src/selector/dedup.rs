//! Duplicate-question detection.
//!
//! Three checks: exact text, exact attribute, and (for cuisine-flavored
//! questions) the canonical cuisine token, so `isThai` and
//! `dynamic_cuisine_thai` count as the same question.

use palate_core::catalog::Question;

use crate::session::SessionState;

/// Cuisines recognized for near-duplicate normalization.
const KNOWN_CUISINES: &[&str] = &[
    "Thai", "Italian", "Chinese", "Japanese", "Mexican", "Indian", "French", "American",
];

/// Canonical lowercase cuisine token mentioned in a string, if any.
pub fn cuisine_token(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    KNOWN_CUISINES
        .iter()
        .find(|c| lowered.contains(&c.to_lowercase()))
        .copied()
}

fn mentions_cuisine(question: &Question) -> bool {
    question.attribute.contains("cuisine")
        || question.text.to_lowercase().contains("cuisine")
        || cuisine_token(&question.attribute).is_some()
}

/// Has an equivalent question already been asked this session?
pub fn is_duplicate(state: &SessionState, question: &Question) -> bool {
    if state.was_text_asked(&question.text) {
        return true;
    }
    if state.was_attribute_asked(&question.attribute) {
        return true;
    }

    // Cuisine questions dedup on the cuisine itself, across attribute
    // spellings (isThai vs dynamic_cuisine_thai).
    if mentions_cuisine(question) {
        let asked_about = cuisine_token(&question.attribute).or_else(|| cuisine_token(&question.text));
        if let Some(cuisine) = asked_about {
            let already = state
                .asked_attributes()
                .filter_map(cuisine_token)
                .any(|c| c == cuisine);
            if already {
                return true;
            }
        }
    }

    false
}

/// Alias attribute spellings to record alongside an accepted question, so
/// later near-duplicates are caught by the attribute check directly.
pub fn alias_attributes(question: &Question) -> Vec<String> {
    let mentioned = cuisine_token(&question.attribute).or_else(|| cuisine_token(&question.text));
    match mentioned {
        Some(cuisine) => vec![
            format!("is{cuisine}"),
            format!("dynamic_cuisine_{}", cuisine.to_lowercase()),
        ],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palate_core::catalog::QuestionKind;

    fn question(id: i64, text: &str, attribute: &str) -> Question {
        Question {
            id,
            text: text.to_string(),
            kind: QuestionKind::Binary,
            choices: vec!["Yes".into(), "No".into(), "Don't Care".into()],
            attribute: attribute.to_string(),
            weight: 5,
        }
    }

    #[test]
    fn exact_text_is_duplicate() {
        let mut state = SessionState::new();
        let q = question(1, "Do you want soup?", "isSoup");
        state.record_question_usage(&q.text, &q.attribute, alias_attributes(&q), "meal_type", 5);
        assert!(is_duplicate(&state, &q));
    }

    #[test]
    fn same_attribute_different_wording_is_duplicate() {
        let mut state = SessionState::new();
        let first = question(1, "Do you want soup?", "isSoup");
        state.record_question_usage(&first.text, &first.attribute, Vec::new(), "meal_type", 5);

        let rephrased = question(2, "Are you craving a warm soup?", "isSoup");
        assert!(is_duplicate(&state, &rephrased));
    }

    #[test]
    fn cuisine_spellings_normalize_to_one_token() {
        let mut state = SessionState::new();
        let catalog_q = question(7, "Are you in the mood for Italian food?", "isItalian");
        state.record_question_usage(
            &catalog_q.text,
            &catalog_q.attribute,
            alias_attributes(&catalog_q),
            "cuisine",
            5,
        );

        let dynamic_q = question(
            5001,
            "Are you craving authentic Italian flavors right now?",
            "dynamic_cuisine_italian",
        );
        assert!(is_duplicate(&state, &dynamic_q));

        let other_cuisine = question(
            5002,
            "Are you craving authentic Thai flavors right now?",
            "dynamic_cuisine_thai",
        );
        assert!(!is_duplicate(&state, &other_cuisine));
    }
}
