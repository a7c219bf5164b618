//! Contradiction rules: once an attribute is answered "Yes", logically
//! incoherent follow-up attributes are filtered out of selection.

use crate::session::SessionState;

/// attribute answered "Yes" -> attributes it forbids.
pub const CONTRADICTION_RULES: &[(&str, &[&str])] = &[
    (
        "isVegetarian",
        &["hasChicken", "hasBeef", "hasPork", "hasSeafood", "hasMeat"],
    ),
    ("isDessert", &["isSoup", "isBreakfast", "isSalad"]),
    ("isBreakfast", &["isDessert"]),
    ("isQuick", &["isComplex"]),
];

/// Would asking `attribute` contradict a recorded "Yes" answer?
pub fn contradicts(state: &SessionState, attribute: &str) -> bool {
    state.yes_attributes().any(|answered| {
        CONTRADICTION_RULES
            .iter()
            .any(|(source, forbidden)| *source == answered && forbidden.contains(&attribute))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vegetarian_yes_forbids_meat_family() {
        let mut state = SessionState::new();
        state.record_preference("isVegetarian", "Yes");

        for attr in ["hasChicken", "hasBeef", "hasPork", "hasSeafood", "hasMeat"] {
            assert!(contradicts(&state, attr), "{attr} should contradict");
        }
        assert!(!contradicts(&state, "isItalian"));
    }

    #[test]
    fn no_answers_do_not_contradict() {
        let mut state = SessionState::new();
        state.record_preference("isVegetarian", "No");
        assert!(!contradicts(&state, "hasChicken"));
    }

    #[test]
    fn quick_yes_forbids_complex() {
        let mut state = SessionState::new();
        state.record_preference("isQuick", "Yes");
        assert!(contradicts(&state, "isComplex"));
        assert!(!contradicts(&state, "isQuick"));
    }
}
