//! Default values for the engine configuration.

// Selector
pub const DEFAULT_DYNAMIC_AFTER: u32 = 2;
pub const DEFAULT_CATALOG_EVERY: u32 = 3;
pub const DEFAULT_RECENT_CATEGORY_WINDOW: usize = 3;
pub const DEFAULT_CATEGORY_HISTORY_CAP: usize = 5;
pub const DEFAULT_DYNAMIC_POOL_SIZE: usize = 20;
pub const DEFAULT_DYNAMIC_CANDIDATE_POOL: usize = 30;

// Scoring: catalog (attribute-weighted) path
pub const DEFAULT_ATTRIBUTE_WEIGHT: f32 = 3.0;
pub const DEFAULT_MISMATCH_FACTOR: f32 = 0.3;
pub const DEFAULT_DONT_CARE_FACTOR: f32 = 0.9;

// Scoring: generic path
pub const DEFAULT_GENERIC_YES_FACTOR: f32 = 1.3;
pub const DEFAULT_GENERIC_NO_FACTOR: f32 = 0.7;
pub const DEFAULT_GENERIC_DONT_CARE_FACTOR: f32 = 0.95;

// Convergence
pub const DEFAULT_COMPETITIVE_RATIO: f32 = 0.7;
pub const DEFAULT_EARLY_ROUND: u32 = 3;
pub const DEFAULT_EARLY_MAX_COMPETITIVE: usize = 2;
pub const DEFAULT_EARLY_MIN_TOP_SCORE: f32 = 2.0;
pub const DEFAULT_MID_ROUND: u32 = 5;
pub const DEFAULT_MID_MAX_COMPETITIVE: usize = 3;
pub const DEFAULT_MAX_ROUND: u32 = 8;
