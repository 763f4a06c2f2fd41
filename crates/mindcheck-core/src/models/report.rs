use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::CheckupAnswers;
use super::instrument::Instrument;
use super::recommendation::Recommendation;
use super::severity::Classification;

/// Scored and classified result for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentResult {
    pub instrument: Instrument,
    /// Sum of item responses.
    pub raw: u32,
    /// Reported score: the raw sum for PHQ-9/GAD-7, a 0–100 percentage for WHO-5.
    pub score: u32,
    /// Highest possible value of `score`.
    pub max_score: u32,
    pub classification: Classification,
}

/// Outcome of a completed checkup. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub id: Uuid,
    pub completed_at: jiff::Timestamp,
    pub depression: InstrumentResult,
    pub anxiety: InstrumentResult,
    pub wellbeing: InstrumentResult,
    /// Depression score plus anxiety score, 0–48.
    pub combined_index: u32,
    /// Raised when the PHQ-9 self-harm item was answered above zero.
    pub risk_flag: bool,
    /// Always two entries: the primary recommendation, then wellbeing.
    pub recommendations: Vec<Recommendation>,
    pub answers: CheckupAnswers,
}

impl Report {
    pub fn result(&self, instrument: Instrument) -> &InstrumentResult {
        match instrument {
            Instrument::Depression => &self.depression,
            Instrument::Anxiety => &self.anxiety,
            Instrument::Wellbeing => &self.wellbeing,
        }
    }

    pub fn primary_recommendation(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }
}
