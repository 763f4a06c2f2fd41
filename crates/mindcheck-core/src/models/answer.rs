use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AnswerError;
use super::instrument::Instrument;

/// Per-item responses for one instrument.
///
/// Always holds exactly `instrument.item_count()` slots. A slot is `None`
/// until answered; every stored value is within `0..=instrument.max_option()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "RawAnswerSet")]
#[ts(export)]
pub struct AnswerSet {
    instrument: Instrument,
    responses: Vec<Option<u8>>,
}

/// Wire form of [`AnswerSet`]; checked by `from_responses` before use.
#[derive(Deserialize)]
struct RawAnswerSet {
    instrument: Instrument,
    responses: Vec<Option<u8>>,
}

impl TryFrom<RawAnswerSet> for AnswerSet {
    type Error = AnswerError;

    fn try_from(raw: RawAnswerSet) -> Result<Self, Self::Error> {
        Self::from_responses(raw.instrument, raw.responses)
    }
}

impl AnswerSet {
    /// An answer set with every item unset.
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            responses: vec![None; instrument.item_count()],
        }
    }

    /// Build an answer set from raw responses, validating length and range.
    pub fn from_responses(
        instrument: Instrument,
        responses: Vec<Option<u8>>,
    ) -> Result<Self, AnswerError> {
        if responses.len() != instrument.item_count() {
            return Err(AnswerError::LengthMismatch {
                instrument,
                expected: instrument.item_count(),
                actual: responses.len(),
            });
        }
        let mut set = Self::new(instrument);
        for (item, value) in responses.into_iter().enumerate() {
            if let Some(value) = value {
                set.set(item, value)?;
            }
        }
        Ok(set)
    }

    /// Build a fully answered set.
    pub fn complete(instrument: Instrument, values: &[u8]) -> Result<Self, AnswerError> {
        Self::from_responses(instrument, values.iter().copied().map(Some).collect())
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Record a response. On error the set is left unchanged.
    pub fn set(&mut self, item: usize, value: u8) -> Result<(), AnswerError> {
        let count = self.responses.len();
        let max = self.instrument.max_option();
        let slot = self
            .responses
            .get_mut(item)
            .ok_or(AnswerError::ItemOutOfRange {
                instrument: self.instrument,
                item,
                count,
            })?;
        if value > max {
            return Err(AnswerError::InvalidResponseValue {
                instrument: self.instrument,
                item,
                value,
                max,
            });
        }
        *slot = Some(value);
        Ok(())
    }

    pub fn get(&self, item: usize) -> Option<u8> {
        self.responses.get(item).copied().flatten()
    }

    pub fn responses(&self) -> &[Option<u8>] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Indices of unanswered items, ascending.
    pub fn missing(&self) -> Vec<usize> {
        self.responses
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn answered(&self) -> usize {
        self.responses.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.responses.iter().all(Option::is_some)
    }
}

/// The three answer sets collected over one checkup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "RawCheckupAnswers")]
#[ts(export)]
pub struct CheckupAnswers {
    pub depression: AnswerSet,
    pub anxiety: AnswerSet,
    pub wellbeing: AnswerSet,
}

#[derive(Deserialize)]
struct RawCheckupAnswers {
    depression: AnswerSet,
    anxiety: AnswerSet,
    wellbeing: AnswerSet,
}

impl TryFrom<RawCheckupAnswers> for CheckupAnswers {
    type Error = AnswerError;

    fn try_from(raw: RawCheckupAnswers) -> Result<Self, Self::Error> {
        let answers = Self {
            depression: raw.depression,
            anxiety: raw.anxiety,
            wellbeing: raw.wellbeing,
        };
        for expected in Instrument::ALL {
            let actual = answers.get(expected).instrument();
            if actual != expected {
                return Err(AnswerError::InstrumentMismatch { expected, actual });
            }
        }
        Ok(answers)
    }
}

impl CheckupAnswers {
    pub fn new() -> Self {
        Self {
            depression: AnswerSet::new(Instrument::Depression),
            anxiety: AnswerSet::new(Instrument::Anxiety),
            wellbeing: AnswerSet::new(Instrument::Wellbeing),
        }
    }

    pub fn get(&self, instrument: Instrument) -> &AnswerSet {
        match instrument {
            Instrument::Depression => &self.depression,
            Instrument::Anxiety => &self.anxiety,
            Instrument::Wellbeing => &self.wellbeing,
        }
    }

    pub fn get_mut(&mut self, instrument: Instrument) -> &mut AnswerSet {
        match instrument {
            Instrument::Depression => &mut self.depression,
            Instrument::Anxiety => &mut self.anxiety,
            Instrument::Wellbeing => &mut self.wellbeing,
        }
    }

    pub fn answered(&self) -> usize {
        Instrument::ALL.iter().map(|i| self.get(*i).answered()).sum()
    }
}

impl Default for CheckupAnswers {
    fn default() -> Self {
        Self::new()
    }
}
