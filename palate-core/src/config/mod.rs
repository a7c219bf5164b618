//! Engine configuration: selector policy, scoring multipliers, convergence
//! thresholds. All sections deserialize with defaults so partial config
//! files stay valid.

pub mod defaults;

use serde::{Deserialize, Serialize};

/// Question-selection policy knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Prefer the dynamic source once this many questions were asked in-round.
    pub dynamic_after: u32,
    /// Every Nth in-round question prefers the catalog source regardless.
    pub catalog_every: u32,
    /// A category asked within this many recent questions is filtered out.
    pub recent_category_window: usize,
    /// Bounded length of the recent-category history.
    pub category_history_cap: usize,
    /// How many dynamic questions to synthesize per selection.
    pub dynamic_pool_size: usize,
    /// How many top-scored dishes feed the dynamic generator.
    pub dynamic_candidate_pool: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            dynamic_after: defaults::DEFAULT_DYNAMIC_AFTER,
            catalog_every: defaults::DEFAULT_CATALOG_EVERY,
            recent_category_window: defaults::DEFAULT_RECENT_CATEGORY_WINDOW,
            category_history_cap: defaults::DEFAULT_CATEGORY_HISTORY_CAP,
            dynamic_pool_size: defaults::DEFAULT_DYNAMIC_POOL_SIZE,
            dynamic_candidate_pool: defaults::DEFAULT_DYNAMIC_CANDIDATE_POOL,
        }
    }
}

/// Multipliers for the two scoring paths. The catalog and generic paths use
/// deliberately different constants and clamp ceilings; keep them distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight for attributes missing from the weight table.
    pub default_weight: f32,
    /// Flat penalty when an answer contradicts a dish's attribute.
    pub mismatch_factor: f32,
    /// Mild decay applied on "Don't Care" (catalog path).
    pub dont_care_factor: f32,
    /// Generic-path multiplier for "Yes".
    pub generic_yes_factor: f32,
    /// Generic-path multiplier for "No".
    pub generic_no_factor: f32,
    /// Generic-path multiplier for "Don't Care".
    pub generic_dont_care_factor: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_weight: defaults::DEFAULT_ATTRIBUTE_WEIGHT,
            mismatch_factor: defaults::DEFAULT_MISMATCH_FACTOR,
            dont_care_factor: defaults::DEFAULT_DONT_CARE_FACTOR,
            generic_yes_factor: defaults::DEFAULT_GENERIC_YES_FACTOR,
            generic_no_factor: defaults::DEFAULT_GENERIC_NO_FACTOR,
            generic_dont_care_factor: defaults::DEFAULT_GENERIC_DONT_CARE_FACTOR,
        }
    }
}

/// Plateau/margin thresholds for stopping the question loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    /// A dish is competitive when its score >= ratio * top score.
    pub competitive_ratio: f32,
    pub early_round: u32,
    pub early_max_competitive: usize,
    pub early_min_top_score: f32,
    pub mid_round: u32,
    pub mid_max_competitive: usize,
    /// Hard cap: converge at this round regardless of separation.
    pub max_round: u32,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            competitive_ratio: defaults::DEFAULT_COMPETITIVE_RATIO,
            early_round: defaults::DEFAULT_EARLY_ROUND,
            early_max_competitive: defaults::DEFAULT_EARLY_MAX_COMPETITIVE,
            early_min_top_score: defaults::DEFAULT_EARLY_MIN_TOP_SCORE,
            mid_round: defaults::DEFAULT_MID_ROUND,
            mid_max_competitive: defaults::DEFAULT_MID_MAX_COMPETITIVE,
            max_round: defaults::DEFAULT_MAX_ROUND,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub selector: SelectorConfig,
    pub scoring: ScoringConfig,
    pub convergence: ConvergenceConfig,
}
