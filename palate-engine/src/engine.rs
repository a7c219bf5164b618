//! The `Recommender` facade: orchestrates the attribute evaluator, question
//! pool, selector, scoring engine, convergence policy, and session state
//! behind the controller-facing API.
//!
//! One instance owns one session. All operations take `&mut self`; callers
//! serialize access (one session per conversation/user).

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use palate_core::catalog::{Answer, Dish, Question};
use palate_core::constants::DYNAMIC_QUESTION_ID_START;
use palate_core::models::SessionSnapshot;
use palate_core::{CatalogStore, EngineConfig, PalateResult};

use crate::attributes::AttributeEvaluator;
use crate::convergence;
use crate::pool::QuestionPool;
use crate::scoring::ScoringEngine;
use crate::selector::{QuestionSelector, SelectorPhase};
use crate::session::SessionState;

/// Adaptive question-driven dish recommender.
pub struct Recommender<'a> {
    catalog: &'a dyn CatalogStore,
    config: EngineConfig,
    evaluator: AttributeEvaluator,
    scoring: ScoringEngine,
    selector: QuestionSelector,
    pool: QuestionPool,
    session: SessionState,
    /// Dishes cached once at initialization, read-only for the session.
    dishes: Vec<Dish>,
    /// Catalog questions cached once at initialization.
    questions: Vec<Question>,
    rng: StdRng,
    initialized: bool,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a dyn CatalogStore, config: EngineConfig) -> Self {
        Self {
            catalog,
            evaluator: AttributeEvaluator::new(),
            scoring: ScoringEngine::new(config.scoring.clone()),
            selector: QuestionSelector::new(config.selector.clone()),
            pool: QuestionPool::new(),
            session: SessionState::new(),
            dishes: Vec::new(),
            questions: Vec::new(),
            rng: StdRng::from_entropy(),
            initialized: false,
            config,
        }
    }

    /// Replace the RNG, e.g. with a seeded one for deterministic tests.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Load the catalog and seed one unit score per non-excluded dish.
    /// The only operation that touches storage; everything after runs on
    /// the cached catalog.
    pub fn initialize_scores(&mut self) -> PalateResult<()> {
        self.dishes = self.catalog.all_dishes()?;
        self.questions = self.catalog.all_questions()?;
        self.session
            .initialize_scores(self.dishes.iter().map(|d| d.id));
        self.initialized = true;
        info!(
            dishes = self.dishes.len(),
            questions = self.questions.len(),
            "recommender initialized"
        );
        Ok(())
    }

    /// The next question to present, or `None` when every unique question
    /// is spent (callers should then fall back to terminating the session).
    pub fn next_question(&mut self) -> Option<Question> {
        if !self.initialized {
            return None;
        }
        let candidate_ids = self
            .session
            .top_ids(self.config.selector.dynamic_candidate_pool);
        // Score-ordered, so the pool sees the strongest candidates first.
        let candidates: Vec<Dish> = candidate_ids
            .iter()
            .filter_map(|id| self.dishes.iter().find(|d| d.id == *id).cloned())
            .collect();

        let question = self.selector.next_question(
            &mut self.session,
            &self.questions,
            &mut self.pool,
            &candidates,
            &mut self.rng,
        );
        if let Some(q) = &question {
            debug!(id = q.id, text = %q.text, "selected question");
        }
        question
    }

    /// Selector state after the last `next_question` call.
    pub fn selector_phase(&self) -> SelectorPhase {
        self.selector.phase()
    }

    /// Process an answer: mark the question asked, bump counters, and
    /// update every live score.
    ///
    /// Dynamic ids (>= 5000) and catalog ids that no longer resolve take
    /// the generic path; a catalog miss is recovered here, never raised.
    pub fn process_answer(&mut self, question_id: i64, answer_text: &str) {
        let answer = Answer::parse(answer_text);
        self.session.mark_asked(question_id);
        self.session.increment_counters();

        if question_id >= DYNAMIC_QUESTION_ID_START {
            self.scoring.apply_generic_answer(&mut self.session, &answer);
        } else {
            match self.questions.iter().find(|q| q.id == question_id).cloned() {
                Some(question) => {
                    self.session
                        .record_preference(&question.attribute, answer.as_str());
                    self.scoring.apply_catalog_answer(
                        &mut self.session,
                        &mut self.evaluator,
                        &self.dishes,
                        &question.attribute,
                        &answer,
                    );
                }
                None => {
                    warn!(question_id, "unresolved catalog question, scoring generically");
                    self.scoring.apply_generic_answer(&mut self.session, &answer);
                }
            }
        }

        debug!(
            question_id,
            answer = answer_text,
            round = self.session.round_questions(),
            total = self.session.lifetime_questions(),
            "answer processed"
        );
    }

    /// Is the score distribution separated enough to stop and recommend?
    pub fn has_confident_recommendation(&self) -> bool {
        if !self.initialized {
            return false;
        }
        convergence::has_confident_recommendation(&self.session, &self.config.convergence)
    }

    /// Top `count` dishes by score descending. Idempotent between answers.
    pub fn top_recommendations(&self, count: usize) -> Vec<Dish> {
        self.session
            .top_ids(count)
            .into_iter()
            .filter_map(|id| self.dishes.iter().find(|d| d.id == id).cloned())
            .collect()
    }

    /// Exclude the current top pick (after the user rejected it). Returns
    /// whether any candidates remain to keep narrowing.
    pub fn reject_top_recommendation(&mut self) -> bool {
        let Some(top_id) = self.session.top_ids(1).first().copied() else {
            return false;
        };
        self.session.add_excluded(top_id);
        info!(dish = top_id, remaining = self.session.available_count(), "rejected top pick");
        self.session.available_count() > 0
    }

    /// Dishes still in the running.
    pub fn available_dish_count(&self) -> usize {
        self.session.available_count()
    }

    /// Current score for one dish; `None` once excluded or before init.
    pub fn score_of(&self, dish_id: i64) -> Option<f32> {
        self.session.score(dish_id).map(|s| s.value())
    }

    /// All live (dish id, score) pairs, unordered. Observability and tests.
    pub fn scores(&self) -> Vec<(i64, f32)> {
        self.dishes
            .iter()
            .filter_map(|d| self.session.score(d.id).map(|s| (d.id, s.value())))
            .collect()
    }

    /// (questions this round, questions this session, exclusions).
    pub fn round_info(&self) -> (u32, u32, usize) {
        (
            self.session.round_questions(),
            self.session.lifetime_questions(),
            self.session.excluded_dishes().len(),
        )
    }

    /// Full cold start: all session state, dedup tracking, the dynamic id
    /// counter, and the evaluator cache.
    pub fn reset(&mut self) {
        self.session.reset();
        self.selector.reset();
        self.pool.reset();
        self.evaluator.clear();
        self.initialized = false;
        debug!("recommender reset");
    }

    /// Soft reset after a rejection: only the round counter clears.
    pub fn reset_for_next_round(&mut self) {
        self.session.reset_for_next_round();
    }

    // --- Session export/import ---

    pub fn asked_questions(&self) -> std::collections::HashSet<i64> {
        self.session.asked_questions()
    }

    pub fn user_answers(&self) -> std::collections::HashMap<String, String> {
        self.session.user_answers()
    }

    pub fn excluded_dishes(&self) -> std::collections::HashSet<i64> {
        self.session.excluded_dishes()
    }

    /// Re-record a preference without replaying its score update.
    pub fn restore_answer(&mut self, attribute: &str, answer: &str) {
        self.session.record_preference(attribute, answer);
    }

    /// Re-mark a question id as asked without reprocessing it.
    pub fn mark_question_asked(&mut self, question_id: i64) {
        self.session.mark_asked(question_id);
    }

    /// Export the durable session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Rebuild an equivalent session from a snapshot: fresh initialization,
    /// then replay exclusions, preferences, and asked ids. Scores are not
    /// replayed; policy decisions are exact, rankings approximate.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> PalateResult<()> {
        self.reset();
        self.initialize_scores()?;
        for id in &snapshot.excluded_dishes {
            self.session.add_excluded(*id);
        }
        for (attribute, answer) in &snapshot.answers {
            self.session.record_preference(attribute, answer);
        }
        for id in &snapshot.asked_questions {
            self.session.mark_asked(*id);
        }
        self.session
            .set_counters(snapshot.round_questions, snapshot.lifetime_questions);
        info!(
            excluded = snapshot.excluded_dishes.len(),
            answers = snapshot.answers.len(),
            "session restored from snapshot"
        );
        Ok(())
    }
}
