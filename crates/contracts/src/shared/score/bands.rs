use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBandName {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreBandName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// Named score range with display class and approval eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub name: ScoreBandName,
    pub min: i32,
    pub max: i32,
    pub css_class: &'static str,
    pub can_approve: bool,
}

impl ScoreBand {
    pub fn contains(&self, score: i32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Bands partition 0..=100 without gaps or overlaps, lowest first.
pub static SCORE_BANDS: [ScoreBand; 4] = [
    ScoreBand {
        name: ScoreBandName::Poor,
        min: 0,
        max: 49,
        css_class: "band-poor",
        can_approve: false,
    },
    ScoreBand {
        name: ScoreBandName::Fair,
        min: 50,
        max: 74,
        css_class: "band-fair",
        can_approve: false,
    },
    ScoreBand {
        name: ScoreBandName::Good,
        min: 75,
        max: 89,
        css_class: "band-good",
        can_approve: true,
    },
    ScoreBand {
        name: ScoreBandName::Excellent,
        min: 90,
        max: 100,
        css_class: "band-excellent",
        can_approve: true,
    },
];

/// Classify a score into its band
///
/// The score is rounded half-up first. NaN, negative and out-of-range values
/// fall back to the lowest band.
pub fn classify(score: f64) -> &'static ScoreBand {
    let lowest = &SCORE_BANDS[0];
    if !score.is_finite() || score < 0.0 {
        return lowest;
    }

    let rounded = (score + 0.5).floor() as i32;
    SCORE_BANDS
        .iter()
        .find(|band| band.contains(rounded))
        .unwrap_or(lowest)
}
