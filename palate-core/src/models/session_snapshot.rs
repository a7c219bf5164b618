use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serializable export of a session's durable state, used to reconstruct an
/// equivalent session across a process or navigation boundary.
///
/// Restoring replays exclusions, preferences, and asked ids over a fresh
/// initialization; it does not replay the multiplicative score trajectory,
/// so rankings after restore are approximate while policy decisions
/// (contradiction filtering, deduplication, exclusions) are exact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Ids of every question asked this session (catalog and dynamic).
    pub asked_questions: Vec<i64>,
    /// Attribute -> answer literal.
    pub answers: HashMap<String, String>,
    /// Permanently excluded dish ids.
    pub excluded_dishes: Vec<i64>,
    /// Questions asked since the last exclusion/reset.
    pub round_questions: u32,
    /// Questions asked over the whole session.
    pub lifetime_questions: u32,
    pub exported_at: DateTime<Utc>,
}
