use thiserror::Error;

use mindcheck_core::models::instrument::Instrument;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("{instrument} is incomplete: items {missing:?} are unanswered")]
    IncompleteAnswers {
        instrument: Instrument,
        missing: Vec<usize>,
    },

    #[error("expected {expected} answers, got {actual}")]
    WrongInstrument {
        expected: Instrument,
        actual: Instrument,
    },
}
