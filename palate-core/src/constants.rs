/// Palate system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// First id in the dynamic (session-scoped, never persisted) question range.
/// Catalog questions always have ids below this.
pub const DYNAMIC_QUESTION_ID_START: i64 = 5000;

/// Lower clamp bound for every dish score.
pub const SCORE_FLOOR: f32 = 0.01;

/// Upper clamp bound on the attribute-weighted (catalog) scoring path.
pub const CATALOG_SCORE_CEILING: f32 = 10.0;

/// Upper clamp bound on the generic (dynamic / unresolved-id) scoring path.
pub const GENERIC_SCORE_CEILING: f32 = 5.0;

/// Default size of a returned recommendation list.
pub const DEFAULT_TOP_RECOMMENDATIONS: usize = 5;
