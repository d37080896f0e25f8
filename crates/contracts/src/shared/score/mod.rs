//! Quality score for catalog items
//!
//! The score is a base value plus the points of every matching rule, clamped
//! to `0..=100`. Bands map a score to a display class and approval
//! eligibility. Both tables are plain static data.

mod bands;
mod rules;

pub use bands::{classify, ScoreBand, ScoreBandName, SCORE_BANDS};
pub use rules::{compute_score, score_of, ScoreRule, BASE_SCORE, MAX_SCORE, MIN_SCORE, SCORE_RULES};
