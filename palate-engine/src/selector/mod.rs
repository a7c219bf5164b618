//! Next-question selection.
//!
//! Alternates between the catalog and dynamic sources on a ratio policy,
//! filters contradictions and recently asked categories, rejects
//! duplicates, and retries once against the other source before giving up.

pub mod category;
pub mod contradiction;
pub mod dedup;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use palate_core::catalog::{Dish, Question};
use palate_core::config::SelectorConfig;

use crate::pool::QuestionPool;
use crate::session::SessionState;

use category::extract_category;
use contradiction::contradicts;

/// Selector state, exposed for observability. `Exhausted` means both
/// sources failed deduplication and the caller should end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPhase {
    Selecting,
    Deduplicating,
    Exhausted,
}

/// Chooses the next question to present.
pub struct QuestionSelector {
    config: SelectorConfig,
    phase: SelectorPhase,
}

impl QuestionSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            phase: SelectorPhase::Selecting,
        }
    }

    pub fn phase(&self) -> SelectorPhase {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = SelectorPhase::Selecting;
    }

    /// Pick the next question, or `None` when both sources are exhausted.
    ///
    /// Source bias: dynamic once at least `dynamic_after` questions were
    /// asked this round, except every `catalog_every`th question which
    /// prefers the catalog: a ratio policy keeping a mix of structured
    /// and exploratory questions.
    pub fn next_question(
        &mut self,
        state: &mut SessionState,
        catalog: &[Question],
        pool: &mut QuestionPool,
        candidates: &[Dish],
        rng: &mut StdRng,
    ) -> Option<Question> {
        self.phase = SelectorPhase::Selecting;

        let round = state.round_questions();
        let prefer_dynamic =
            round >= self.config.dynamic_after && round % self.config.catalog_every != 0;

        let primary = if prefer_dynamic {
            self.pick_dynamic(state, pool, candidates, rng)
                .or_else(|| self.pick_catalog(state, catalog, rng))
        } else {
            self.pick_catalog(state, catalog, rng)
                .or_else(|| self.pick_dynamic(state, pool, candidates, rng))
        };

        if let Some(question) = primary {
            if !dedup::is_duplicate(state, &question) {
                return Some(self.accept(state, question));
            }
            debug!(text = %question.text, "duplicate candidate, retrying other source");
        }

        // One retry against the other source.
        self.phase = SelectorPhase::Deduplicating;
        let alternative = if prefer_dynamic {
            self.pick_catalog(state, catalog, rng)
        } else {
            self.pick_dynamic(state, pool, candidates, rng)
        };

        match alternative {
            Some(question) if !dedup::is_duplicate(state, &question) => {
                Some(self.accept(state, question))
            }
            _ => {
                self.phase = SelectorPhase::Exhausted;
                debug!("no unique questions available");
                None
            }
        }
    }

    fn accept(&mut self, state: &mut SessionState, question: Question) -> Question {
        state.record_question_usage(
            &question.text,
            &question.attribute,
            dedup::alias_attributes(&question),
            extract_category(&question.attribute),
            self.config.category_history_cap,
        );
        self.phase = SelectorPhase::Selecting;
        question
    }

    /// Catalog source: filter asked ids, contradictions, and recent
    /// categories; take the highest-weight survivor, falling back to a
    /// uniform random choice as each filter empties the set.
    fn pick_catalog(
        &self,
        state: &SessionState,
        catalog: &[Question],
        rng: &mut StdRng,
    ) -> Option<Question> {
        let available: Vec<&Question> = catalog.iter().filter(|q| !state.was_asked(q.id)).collect();
        if available.is_empty() {
            return None;
        }

        let non_contradictory: Vec<&Question> = available
            .iter()
            .filter(|q| !contradicts(state, &q.attribute))
            .copied()
            .collect();
        if non_contradictory.is_empty() {
            return available.choose(rng).map(|q| (*q).clone());
        }

        let mut fresh: Vec<&Question> = non_contradictory
            .iter()
            .filter(|q| {
                !state.category_recently_asked(
                    extract_category(&q.attribute),
                    self.config.recent_category_window,
                )
            })
            .copied()
            .collect();
        fresh.sort_by(|a, b| b.weight.cmp(&a.weight));

        match fresh.first() {
            Some(question) => Some((*question).clone()),
            None => non_contradictory.choose(rng).map(|q| (*q).clone()),
        }
    }

    /// Dynamic source: regenerate the pool from the current top candidates,
    /// apply the same contradiction and recency filters, pick uniformly at
    /// random (unfiltered pool as fallback).
    fn pick_dynamic(
        &self,
        state: &SessionState,
        pool: &mut QuestionPool,
        candidates: &[Dish],
        rng: &mut StdRng,
    ) -> Option<Question> {
        let generated = pool.generate(candidates, self.config.dynamic_pool_size, rng);
        if generated.is_empty() {
            return None;
        }

        let filtered: Vec<&Question> = generated
            .iter()
            .filter(|q| {
                !contradicts(state, &q.attribute)
                    && !state.category_recently_asked(
                        extract_category(&q.attribute),
                        self.config.recent_category_window,
                    )
            })
            .collect();

        if filtered.is_empty() {
            generated.choose(rng).cloned()
        } else {
            filtered.choose(rng).map(|q| (*q).clone())
        }
    }
}
