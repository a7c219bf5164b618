//! Multiplicative score updates.
//!
//! Two deliberately distinct paths: the attribute-weighted catalog path
//! (clamped to [0.01, 10.0]) and the generic path for dynamic or
//! unresolvable question ids (clamped to [0.01, 5.0]). Do not unify them;
//! the divergent constants are tuned behavior.

pub mod weights;

use std::collections::HashMap;

use tracing::debug;

use palate_core::catalog::{Answer, Dish};
use palate_core::config::ScoringConfig;
use palate_core::constants::{CATALOG_SCORE_CEILING, GENERIC_SCORE_CEILING};

use crate::attributes::AttributeEvaluator;
use crate::session::SessionState;

use weights::ATTRIBUTE_WEIGHTS;

/// Applies answer updates to the session's score map.
pub struct ScoringEngine {
    weights: HashMap<&'static str, f32>,
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Build the engine, loading the weight table. A duplicate weight key
    /// is a configuration error and fails fast here.
    pub fn new(config: ScoringConfig) -> Self {
        let mut weights = HashMap::with_capacity(ATTRIBUTE_WEIGHTS.len());
        for (name, weight) in ATTRIBUTE_WEIGHTS {
            let previous = weights.insert(*name, *weight);
            assert!(previous.is_none(), "duplicate attribute weight: {name}");
        }
        Self { weights, config }
    }

    /// Importance weight for an attribute; table miss -> configured default.
    pub fn weight_of(&self, attribute: &str) -> f32 {
        self.weights
            .get(attribute)
            .copied()
            .unwrap_or(self.config.default_weight)
    }

    /// Attribute-weighted scoring for a resolved catalog question.
    ///
    /// Yes rewards dishes that have the attribute, No rewards dishes that
    /// lack it (both x(1 + w/10)), while the wrong side takes a flat
    /// mismatch penalty regardless of weight. Don't Care decays everything
    /// mildly. Any other answer leaves scores untouched.
    pub fn apply_catalog_answer(
        &self,
        state: &mut SessionState,
        evaluator: &mut AttributeEvaluator,
        dishes: &[Dish],
        attribute: &str,
        answer: &Answer,
    ) {
        let weight = self.weight_of(attribute);
        let reward = 1.0 + weight / 10.0;
        let mismatch = self.config.mismatch_factor;

        for dish in dishes {
            if state.is_excluded(dish.id) {
                continue;
            }
            let has_attribute = evaluator.evaluate(dish, attribute);
            let factor = match answer {
                Answer::Yes => {
                    if has_attribute {
                        reward
                    } else {
                        mismatch
                    }
                }
                Answer::No => {
                    if has_attribute {
                        mismatch
                    } else {
                        reward
                    }
                }
                Answer::DontCare => self.config.dont_care_factor,
                Answer::Choice(_) => 1.0,
            };
            state.scale_score(dish.id, factor, CATALOG_SCORE_CEILING);
        }

        debug!(attribute, weight, answer = %answer, "applied catalog scoring");
    }

    /// Generic scoring for dynamic questions and unresolvable catalog ids.
    ///
    /// Multiple-choice selections and malformed answers are a neutral
    /// no-op: scores are left untouched rather than re-clamped.
    pub fn apply_generic_answer(&self, state: &mut SessionState, answer: &Answer) {
        let factor = match answer {
            Answer::Yes => self.config.generic_yes_factor,
            Answer::No => self.config.generic_no_factor,
            Answer::DontCare => self.config.generic_dont_care_factor,
            Answer::Choice(_) => return,
        };
        state.scale_all_scores(factor, GENERIC_SCORE_CEILING);

        debug!(answer = %answer, factor, "applied generic scoring");
    }
}
