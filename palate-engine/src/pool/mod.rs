//! Dynamic question synthesis from the current candidate set.
//!
//! Seven families: cuisine-specific, ingredient-focused, mood, texture,
//! pairwise cuisine comparison, preparation method, and situational.
//! Generated ids come from a session-monotonic counter starting at 5000,
//! guaranteeing no collision with catalog ids.

pub mod templates;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use palate_core::catalog::{Dish, Question, QuestionKind};
use palate_core::constants::DYNAMIC_QUESTION_ID_START;

use templates::*;

/// Strip whitespace and commas, lowercase: attribute slug normalization.
fn slug(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<String>()
        .to_lowercase()
}

fn fill(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(placeholder, value)
}

/// Synthesizes session-scoped questions; owns the dynamic id counter.
pub struct QuestionPool {
    next_id: i64,
}

impl QuestionPool {
    pub fn new() -> Self {
        Self {
            next_id: DYNAMIC_QUESTION_ID_START,
        }
    }

    fn mint_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn binary(&mut self, text: String, attribute: String, weight: u8) -> Question {
        Question {
            id: self.mint_id(),
            text,
            kind: QuestionKind::Binary,
            choices: vec!["Yes".into(), "No".into(), "Don't Care".into()],
            attribute,
            weight,
        }
    }

    /// Restart the id counter. Only valid on a full session cold start.
    pub fn reset(&mut self) {
        self.next_id = DYNAMIC_QUESTION_ID_START;
    }

    /// Generate up to `desired` questions from the candidate set, shuffled.
    /// An empty candidate set yields an empty list.
    pub fn generate(&mut self, candidates: &[Dish], desired: usize, rng: &mut StdRng) -> Vec<Question> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut questions: Vec<Question> = Vec::with_capacity(desired);

        // Distinct cuisines present, first-seen order, capped.
        let mut cuisines: Vec<&str> = Vec::new();
        for dish in candidates {
            if !cuisines.iter().any(|c| dish.cuisine.eq_ignore_ascii_case(c)) {
                cuisines.push(dish.cuisine.as_str());
            }
        }
        cuisines.truncate(CUISINE_CAP);

        // Cuisine-specific: every phrasing for every cuisine present.
        for cuisine in &cuisines {
            for template in CUISINE_TEMPLATES {
                if questions.len() >= desired {
                    break;
                }
                let q = self.binary(
                    fill(template, "{cuisine}", cuisine),
                    format!("dynamic_cuisine_{}", slug(cuisine)),
                    CUISINE_WEIGHT,
                );
                questions.push(q);
            }
        }

        // Ingredient-focused: shuffled sample, one random phrasing each.
        let mut ingredients = INGREDIENTS.to_vec();
        ingredients.shuffle(rng);
        for ingredient in ingredients.iter().take(INGREDIENT_SAMPLE) {
            if questions.len() >= desired {
                break;
            }
            let template = INGREDIENT_TEMPLATES.choose(rng).expect("non-empty templates");
            let q = self.binary(
                fill(template, "{ingredient}", ingredient),
                format!("dynamic_ingredient_{}", slug(ingredient)),
                INGREDIENT_WEIGHT,
            );
            questions.push(q);
        }

        // Mood-based.
        let mut moods = MOODS.to_vec();
        moods.shuffle(rng);
        for mood in moods.iter().take(MOOD_SAMPLE) {
            if questions.len() >= desired {
                break;
            }
            let template = MOOD_TEMPLATES.choose(rng).expect("non-empty templates");
            let q = self.binary(
                fill(template, "{mood}", mood),
                format!("dynamic_mood_{}", slug(mood)),
                MOOD_WEIGHT,
            );
            questions.push(q);
        }

        // Texture.
        let mut textures = TEXTURES.to_vec();
        textures.shuffle(rng);
        for texture in textures.iter().take(TEXTURE_SAMPLE) {
            if questions.len() >= desired {
                break;
            }
            let template = TEXTURE_TEMPLATES.choose(rng).expect("non-empty templates");
            let q = self.binary(
                fill(template, "{texture}", texture),
                format!("dynamic_texture_{}", slug(texture)),
                TEXTURE_WEIGHT,
            );
            questions.push(q);
        }

        // Pairwise cuisine comparisons (multiple choice).
        for pair in cuisines.chunks(2) {
            if pair.len() < 2 || questions.len() >= desired {
                continue;
            }
            let template = COMPARISON_TEMPLATES.choose(rng).expect("non-empty templates");
            let text = fill(&fill(template, "{option1}", pair[0]), "{option2}", pair[1]);
            questions.push(Question {
                id: self.mint_id(),
                text,
                kind: QuestionKind::MultipleChoice,
                choices: vec![pair[0].to_string(), pair[1].to_string(), "Either is fine".into()],
                attribute: format!(
                    "dynamic_comparison_{}_vs_{}",
                    slug(pair[0]),
                    slug(pair[1])
                ),
                weight: COMPARISON_WEIGHT,
            });
        }

        // Preparation method.
        let mut methods = METHODS.to_vec();
        methods.shuffle(rng);
        for method in methods.iter().take(METHOD_SAMPLE) {
            if questions.len() >= desired {
                break;
            }
            let template = METHOD_TEMPLATES.choose(rng).expect("non-empty templates");
            let q = self.binary(
                fill(template, "{method}", method),
                format!("dynamic_method_{}", slug(method)),
                METHOD_WEIGHT,
            );
            questions.push(q);
        }

        // Situational.
        let mut situations = SITUATIONS.to_vec();
        situations.shuffle(rng);
        for situation in situations.iter().take(SITUATION_SAMPLE) {
            if questions.len() >= desired {
                break;
            }
            let template = SITUATION_TEMPLATES.choose(rng).expect("non-empty templates");
            let q = self.binary(
                fill(template, "{situation}", situation),
                format!("dynamic_situation_{}", slug(situation)),
                SITUATION_WEIGHT,
            );
            questions.push(q);
        }

        questions.shuffle(rng);
        debug!(count = questions.len(), "generated dynamic questions");
        questions
    }

    /// Re-weight `questions` by how much variety the current candidates
    /// show along each question's dimension, returning a new list sorted
    /// by effective weight descending (ties broken by shuffle). The input
    /// is not mutated.
    pub fn select_relevant(
        &self,
        candidates: &[Dish],
        questions: &[Question],
        rng: &mut StdRng,
    ) -> Vec<Question> {
        let mut reweighted: Vec<Question> = questions.to_vec();

        if candidates.is_empty() {
            reweighted.shuffle(rng);
            return reweighted;
        }

        let mut cuisines: Vec<&str> = Vec::new();
        for dish in candidates {
            if !cuisines.iter().any(|c| dish.cuisine.eq_ignore_ascii_case(c)) {
                cuisines.push(dish.cuisine.as_str());
            }
        }
        let cuisine_variety = cuisines.len();

        let mut spice_levels: Vec<u8> = candidates.iter().map(|d| d.spice_level).collect();
        spice_levels.sort_unstable();
        spice_levels.dedup();
        let spice_variety = spice_levels.len();

        let prep_min = candidates.iter().map(|d| d.prep_time_mins).min().unwrap_or(0);
        let prep_max = candidates.iter().map(|d| d.prep_time_mins).max().unwrap_or(0);
        let prep_spread = prep_max - prep_min;

        let any_vegetarian = candidates.iter().any(|d| d.is_vegetarian);

        for question in &mut reweighted {
            let attr = question.attribute.to_lowercase();
            question.weight = if cuisine_variety > 5 && attr.contains("cuisine") {
                9
            } else if spice_variety > 2 && attr.contains("spic") {
                8
            } else if prep_spread > 30 && attr.contains("quick") {
                7
            } else if any_vegetarian && attr.contains("vegetarian") {
                8
            } else if attr.contains("meat") {
                6
            } else {
                question.weight
            };
        }

        // Shuffle first so the stable sort breaks weight ties randomly.
        reweighted.shuffle(rng);
        reweighted.sort_by(|a, b| b.weight.cmp(&a.weight));
        reweighted
    }
}

impl Default for QuestionPool {
    fn default() -> Self {
        Self::new()
    }
}
