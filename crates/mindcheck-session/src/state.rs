use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcheck_core::models::instrument::Instrument;

/// Position of a checkup session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "stage", rename_all = "snake_case")]
#[ts(export)]
pub enum SessionState {
    Intro,
    Answering { instrument: Instrument, item: usize },
    Complete,
}

impl SessionState {
    /// The state after the current item is answered.
    pub fn advance(self) -> SessionState {
        match self {
            SessionState::Intro => SessionState::Answering {
                instrument: Instrument::Depression,
                item: 0,
            },
            SessionState::Answering { instrument, item } if item + 1 < instrument.item_count() => {
                SessionState::Answering {
                    instrument,
                    item: item + 1,
                }
            }
            SessionState::Answering { instrument, .. } => match instrument.next() {
                Some(next) => SessionState::Answering {
                    instrument: next,
                    item: 0,
                },
                None => SessionState::Complete,
            },
            SessionState::Complete => SessionState::Complete,
        }
    }

    /// The state one step back. `Intro` and `Complete` have none.
    pub fn retreat(self) -> Option<SessionState> {
        match self {
            SessionState::Intro | SessionState::Complete => None,
            SessionState::Answering { instrument, item } if item > 0 => {
                Some(SessionState::Answering {
                    instrument,
                    item: item - 1,
                })
            }
            SessionState::Answering { instrument, .. } => Some(match instrument.previous() {
                Some(previous) => SessionState::Answering {
                    instrument: previous,
                    item: previous.item_count() - 1,
                },
                None => SessionState::Intro,
            }),
        }
    }

    pub fn instrument(self) -> Option<Instrument> {
        match self {
            SessionState::Answering { instrument, .. } => Some(instrument),
            SessionState::Intro | SessionState::Complete => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Intro => f.write_str("intro"),
            SessionState::Answering { instrument, item } => {
                write!(f, "{instrument} item {}", item + 1)
            }
            SessionState::Complete => f.write_str("complete"),
        }
    }
}

/// Read-only view of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Snapshot {
    pub state: SessionState,
    /// Questionnaire name (e.g. "PHQ-9") while answering.
    pub title: Option<String>,
    /// Question stem shown above the prompt.
    pub stem: Option<String>,
    pub prompt: Option<String>,
    pub option_labels: Vec<String>,
    /// Previously recorded answer for the current item, if the user stepped back.
    pub current_answer: Option<u8>,
    /// 1-based position within the current questionnaire.
    pub position: Option<usize>,
    pub item_count: Option<usize>,
    /// Items answered across the whole checkup.
    pub answered: usize,
    pub total: usize,
}
