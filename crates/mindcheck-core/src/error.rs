use thiserror::Error;

use crate::models::instrument::Instrument;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("{instrument}: response {value} for item {item} is outside [0, {max}]")]
    InvalidResponseValue {
        instrument: Instrument,
        item: usize,
        value: u8,
        max: u8,
    },

    #[error("{instrument} has {count} items, no item at index {item}")]
    ItemOutOfRange {
        instrument: Instrument,
        item: usize,
        count: usize,
    },

    #[error("{instrument} expects {expected} responses, got {actual}")]
    LengthMismatch {
        instrument: Instrument,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} answers, got {actual}")]
    InstrumentMismatch {
        expected: Instrument,
        actual: Instrument,
    },
}
