//! Per-run mutable session state.
//!
//! One `SessionState` is owned by one `Recommender`; nothing here is shared
//! across sessions. All mutation happens through `&mut self`, so callers
//! serialize access by construction.

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::Utc;
use tracing::debug;

use palate_core::constants::SCORE_FLOOR;
use palate_core::models::SessionSnapshot;
use palate_core::Score;

/// The aggregate of per-session mutable state read and mutated by the
/// selector, scoring engine, and convergence policy.
#[derive(Debug, Default)]
pub struct SessionState {
    /// dish id -> live score. Excluded dishes have no entry.
    scores: HashMap<i64, Score>,
    /// Permanently removed dish ids.
    excluded: HashSet<i64>,
    /// attribute -> answer literal, for contradiction checks and restore.
    preferences: HashMap<String, String>,
    /// Question ids already asked (catalog and dynamic).
    asked_ids: HashSet<i64>,
    /// Exact question texts already asked.
    asked_texts: HashSet<String>,
    /// Attributes (and recorded aliases) already asked.
    asked_attributes: HashSet<String>,
    /// Bounded history of recently asked question categories.
    recent_categories: VecDeque<&'static str>,
    /// Questions asked since the last exclusion/reset.
    round_questions: u32,
    /// Questions asked over the whole session. Never reset mid-session.
    lifetime_questions: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one unit score per non-excluded dish and clear the per-round
    /// interrogation state. Exclusions, dedup sets, and the lifetime
    /// counter survive (re-initialization happens mid-session after a
    /// rejection).
    pub fn initialize_scores(&mut self, dish_ids: impl IntoIterator<Item = i64>) {
        self.scores.clear();
        for id in dish_ids {
            if !self.excluded.contains(&id) {
                self.scores.insert(id, Score::INITIAL);
            }
        }
        self.preferences.clear();
        self.asked_ids.clear();
        self.recent_categories.clear();
        self.round_questions = 0;
        debug!(dishes = self.scores.len(), "initialized scores");
    }

    // --- Scores ---

    pub fn score(&self, id: i64) -> Option<Score> {
        self.scores.get(&id).copied()
    }

    /// Multiply one dish's score by `factor`, clamped to [floor, ceiling].
    pub fn scale_score(&mut self, id: i64, factor: f32, ceiling: f32) {
        if let Some(score) = self.scores.get_mut(&id) {
            *score = score.scaled(factor, ceiling);
        }
    }

    /// Multiply every live score by `factor`, clamped to [floor, ceiling].
    pub fn scale_all_scores(&mut self, factor: f32, ceiling: f32) {
        for score in self.scores.values_mut() {
            *score = score.scaled(factor, ceiling);
        }
    }

    /// Dish ids by score descending (ties broken by id for determinism),
    /// fully suppressed dishes (score at the floor) omitted.
    pub fn top_ids(&self, count: usize) -> Vec<i64> {
        let mut entries: Vec<(i64, Score)> = self
            .scores
            .iter()
            .filter(|(_, s)| s.value() > SCORE_FLOOR)
            .map(|(&id, &s)| (id, s))
            .collect();
        entries.sort_by(|a, b| {
            b.1.value()
                .partial_cmp(&a.1.value())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        entries.into_iter().take(count).map(|(id, _)| id).collect()
    }

    /// Count of dishes still in the running.
    pub fn available_count(&self) -> usize {
        self.scores.values().filter(|s| s.value() > SCORE_FLOOR).count()
    }

    /// All live scores, for the convergence policy.
    pub fn live_scores(&self) -> impl Iterator<Item = Score> + '_ {
        self.scores.values().copied()
    }

    // --- Exclusions ---

    pub fn add_excluded(&mut self, id: i64) {
        self.excluded.insert(id);
        self.scores.remove(&id);
        debug!(dish = id, "excluded dish");
    }

    pub fn is_excluded(&self, id: i64) -> bool {
        self.excluded.contains(&id)
    }

    pub fn excluded_dishes(&self) -> HashSet<i64> {
        self.excluded.clone()
    }

    // --- Preferences ---

    pub fn record_preference(&mut self, attribute: &str, answer: &str) {
        self.preferences
            .insert(attribute.to_string(), answer.to_string());
    }

    /// Attributes the user answered "Yes" to, for contradiction filtering.
    pub fn yes_attributes(&self) -> impl Iterator<Item = &str> {
        self.preferences
            .iter()
            .filter(|(_, answer)| answer.as_str() == "Yes")
            .map(|(attribute, _)| attribute.as_str())
    }

    pub fn user_answers(&self) -> HashMap<String, String> {
        self.preferences.clone()
    }

    // --- Asked-question tracking ---

    pub fn mark_asked(&mut self, question_id: i64) {
        self.asked_ids.insert(question_id);
    }

    pub fn was_asked(&self, question_id: i64) -> bool {
        self.asked_ids.contains(&question_id)
    }

    pub fn asked_questions(&self) -> HashSet<i64> {
        self.asked_ids.clone()
    }

    pub fn was_text_asked(&self, text: &str) -> bool {
        self.asked_texts.contains(text)
    }

    pub fn was_attribute_asked(&self, attribute: &str) -> bool {
        self.asked_attributes.contains(attribute)
    }

    pub fn asked_attributes(&self) -> impl Iterator<Item = &str> {
        self.asked_attributes.iter().map(String::as_str)
    }

    /// Record an accepted question into the dedup sets and the bounded
    /// category history.
    pub fn record_question_usage(
        &mut self,
        text: &str,
        attribute: &str,
        aliases: impl IntoIterator<Item = String>,
        category: &'static str,
        history_cap: usize,
    ) {
        self.asked_texts.insert(text.to_string());
        self.asked_attributes.insert(attribute.to_string());
        for alias in aliases {
            self.asked_attributes.insert(alias);
        }
        self.recent_categories.push_back(category);
        while self.recent_categories.len() > history_cap {
            self.recent_categories.pop_front();
        }
    }

    /// Was this category asked within the last `window` questions?
    pub fn category_recently_asked(&self, category: &str, window: usize) -> bool {
        self.recent_categories
            .iter()
            .rev()
            .take(window)
            .any(|c| *c == category)
    }

    // --- Counters ---

    pub fn round_questions(&self) -> u32 {
        self.round_questions
    }

    pub fn lifetime_questions(&self) -> u32 {
        self.lifetime_questions
    }

    pub fn increment_counters(&mut self) {
        self.round_questions += 1;
        self.lifetime_questions += 1;
    }

    pub(crate) fn set_counters(&mut self, round: u32, lifetime: u32) {
        self.round_questions = round;
        self.lifetime_questions = lifetime;
    }

    // --- Transitions ---

    /// Full cold start: everything cleared.
    pub fn reset(&mut self) {
        self.scores.clear();
        self.excluded.clear();
        self.preferences.clear();
        self.asked_ids.clear();
        self.asked_texts.clear();
        self.asked_attributes.clear();
        self.recent_categories.clear();
        self.round_questions = 0;
        self.lifetime_questions = 0;
    }

    /// Soft reset after a rejection: only the round counter clears, so the
    /// user keeps narrowing among the remaining dishes.
    pub fn reset_for_next_round(&mut self) {
        self.round_questions = 0;
    }

    /// Export the durable parts of this session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            asked_questions: self.asked_ids.iter().copied().collect(),
            answers: self.preferences.clone(),
            excluded_dishes: self.excluded.iter().copied().collect(),
            round_questions: self.round_questions,
            lifetime_questions: self.lifetime_questions,
            exported_at: Utc::now(),
        }
    }
}
