//! Convergence policy: decide when the score distribution is separated
//! enough to stop asking and recommend.
//!
//! A heuristic plateau/margin test tuned for fast convergence, not a
//! statistical significance test.

use tracing::debug;

use palate_core::config::ConvergenceConfig;

use crate::session::SessionState;

/// Evaluate after every processed answer.
///
/// Terminates when any holds: early round with at most two competitive
/// dishes and a clear top score; mid round with at most three competitive;
/// or the hard round cap. An empty candidate set terminates immediately
/// (degenerate no-recommendation case). Callers guard the pre-init case.
pub fn has_confident_recommendation(state: &SessionState, config: &ConvergenceConfig) -> bool {
    let mut scores: Vec<f32> = state.live_scores().map(|s| s.value()).collect();
    if scores.is_empty() {
        debug!("no dishes available, terminating");
        return true;
    }
    scores.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let top_score = scores[0];
    let competitive = scores
        .iter()
        .filter(|s| **s >= top_score * config.competitive_ratio)
        .count();
    let round = state.round_questions();

    debug!(round, top_score, competitive, "confidence check");

    if round >= config.early_round
        && competitive <= config.early_max_competitive
        && top_score > config.early_min_top_score
    {
        debug!("clear winner after early rounds");
        return true;
    }
    if round >= config.mid_round && competitive <= config.mid_max_competitive {
        debug!("good separation after mid rounds");
        return true;
    }
    if round >= config.max_round {
        debug!("maximum questions reached");
        return true;
    }

    false
}
