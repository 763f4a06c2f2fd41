use thiserror::Error;

use mindcheck_core::error::AnswerError;
use mindcheck_core::models::instrument::Instrument;
use mindcheck_instruments::error::ScoringError;

use crate::state::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] AnswerError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("checkup has not been started")]
    NotStarted,

    #[error("checkup is already complete")]
    AlreadyComplete,

    #[error("expected an answer for {expected} item {expected_item}, got {instrument} item {item}")]
    OutOfSequence {
        expected: Instrument,
        expected_item: usize,
        instrument: Instrument,
        item: usize,
    },

    #[error("checkup is not complete (currently at {state})")]
    SessionNotComplete { state: SessionState },
}
