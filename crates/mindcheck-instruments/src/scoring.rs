use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcheck_core::models::answer::AnswerSet;
use mindcheck_core::models::instrument::Instrument;

use crate::error::ScoringError;

/// How unanswered items are treated when scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MissingPolicy {
    /// Refuse to score an incomplete answer set.
    #[default]
    Reject,
    /// Count unanswered items as 0.
    TreatAsZero,
}

/// Numeric result of scoring one answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub instrument: Instrument,
    /// Sum of item responses.
    pub raw: u32,
    /// Raw sum for PHQ-9/GAD-7; 0–100 percentage for WHO-5.
    pub value: u32,
}

impl Score {
    /// Highest value `value` can take for this instrument.
    pub fn max_value(&self) -> u32 {
        match self.instrument {
            Instrument::Wellbeing => 100,
            other => other.max_raw(),
        }
    }
}

/// Score `answers` as `instrument`.
pub fn score(
    instrument: Instrument,
    answers: &AnswerSet,
    policy: MissingPolicy,
) -> Result<Score, ScoringError> {
    if answers.instrument() != instrument {
        return Err(ScoringError::WrongInstrument {
            expected: instrument,
            actual: answers.instrument(),
        });
    }

    let raw = raw_sum(answers, policy)?;
    let value = match instrument {
        Instrument::Wellbeing => percent(raw, instrument.max_raw()),
        Instrument::Depression | Instrument::Anxiety => raw,
    };

    Ok(Score {
        instrument,
        raw,
        value,
    })
}

/// Sum of all responses, honoring `policy` for unanswered items.
pub fn raw_sum(answers: &AnswerSet, policy: MissingPolicy) -> Result<u32, ScoringError> {
    if policy == MissingPolicy::Reject && !answers.is_complete() {
        return Err(ScoringError::IncompleteAnswers {
            instrument: answers.instrument(),
            missing: answers.missing(),
        });
    }

    Ok(answers
        .responses()
        .iter()
        .map(|r| u32::from(r.unwrap_or(0)))
        .sum())
}

/// `raw / max * 100`, rounded half-up.
pub fn percent(raw: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (raw * 200 + max) / (max * 2)
}

/// Depression score plus anxiety score (0–48).
pub fn combined_index(depression: &Score, anxiety: &Score) -> u32 {
    depression.value + anxiety.value
}
