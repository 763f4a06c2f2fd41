use mindcheck_core::models::answer::CheckupAnswers;
use mindcheck_core::models::instrument::Instrument;
use mindcheck_core::models::report::Report;
use mindcheck_instruments::questionnaire;
use mindcheck_instruments::scoring::MissingPolicy;

use crate::error::SessionError;
use crate::evaluate::evaluate;
use crate::state::{SessionState, Snapshot};

/// One pass through the checkup, owned by whoever started it.
///
/// Answers live only in this value. Dropping it (or calling [`abandon`])
/// discards them; no report exists until the last WHO-5 item is answered
/// and [`complete_session`] is called.
///
/// [`abandon`]: CheckupSession::abandon
/// [`complete_session`]: CheckupSession::complete_session
#[derive(Debug, Clone)]
pub struct CheckupSession {
    state: SessionState,
    answers: CheckupAnswers,
    report: Option<Report>,
}

impl CheckupSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Intro,
            answers: CheckupAnswers::new(),
            report: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &CheckupAnswers {
        &self.answers
    }

    /// The report, once [`complete_session`](Self::complete_session) has built it.
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Leave the intro and move to the first PHQ-9 item.
    pub fn start(&mut self) -> Result<SessionState, SessionError> {
        match self.state {
            SessionState::Intro => {
                self.transition(self.state.advance());
                Ok(self.state)
            }
            SessionState::Answering { .. } => Ok(self.state),
            SessionState::Complete => Err(SessionError::AlreadyComplete),
        }
    }

    /// Record `value` for `item` of `instrument`, which must be the current item.
    ///
    /// An invalid value leaves the session untouched.
    pub fn submit_answer(
        &mut self,
        instrument: Instrument,
        item: usize,
        value: u8,
    ) -> Result<SessionState, SessionError> {
        let (expected, expected_item) = match self.state {
            SessionState::Intro => return Err(SessionError::NotStarted),
            SessionState::Complete => return Err(SessionError::AlreadyComplete),
            SessionState::Answering { instrument, item } => (instrument, item),
        };
        if (instrument, item) != (expected, expected_item) {
            return Err(SessionError::OutOfSequence {
                expected,
                expected_item,
                instrument,
                item,
            });
        }

        self.answers.get_mut(instrument).set(item, value)?;
        self.transition(self.state.advance());
        Ok(self.state)
    }

    /// Answer whatever item is current.
    pub fn answer(&mut self, value: u8) -> Result<SessionState, SessionError> {
        match self.state {
            SessionState::Answering { instrument, item } => {
                self.submit_answer(instrument, item, value)
            }
            SessionState::Intro => Err(SessionError::NotStarted),
            SessionState::Complete => Err(SessionError::AlreadyComplete),
        }
    }

    /// Step back one item. Recorded answers are kept.
    ///
    /// From the first PHQ-9 item this returns to the intro; at the intro it
    /// stays put. A completed session cannot go back.
    pub fn go_back(&mut self) -> Result<SessionState, SessionError> {
        match self.state {
            SessionState::Complete => Err(SessionError::AlreadyComplete),
            SessionState::Intro => Ok(self.state),
            SessionState::Answering { .. } => {
                if let Some(previous) = self.state.retreat() {
                    self.transition(previous);
                }
                Ok(self.state)
            }
        }
    }

    /// Build the report. Only valid once every item has been answered.
    ///
    /// The report is built once; later calls return the same one.
    pub fn complete_session(&mut self) -> Result<&Report, SessionError> {
        if self.state != SessionState::Complete {
            return Err(SessionError::SessionNotComplete { state: self.state });
        }
        let report = match self.report.take() {
            Some(report) => report,
            None => evaluate(&self.answers, MissingPolicy::Reject)?,
        };
        Ok(self.report.insert(report))
    }

    /// Items answered so far and the total across all three instruments.
    pub fn progress(&self) -> (usize, usize) {
        let total = Instrument::ALL.iter().map(|i| i.item_count()).sum();
        (self.answers.answered(), total)
    }

    /// Rendering snapshot of the current position.
    pub fn current_state(&self) -> Snapshot {
        let (answered, total) = self.progress();

        match self.state {
            SessionState::Answering { instrument, item } => {
                let q = questionnaire(instrument);
                Snapshot {
                    state: self.state,
                    title: Some(q.name().to_string()),
                    stem: Some(q.stem().to_string()),
                    prompt: q.items().get(item).map(|p| p.to_string()),
                    option_labels: q.options().iter().map(|o| o.to_string()).collect(),
                    current_answer: self.answers.get(instrument).get(item),
                    position: Some(item + 1),
                    item_count: Some(q.items().len()),
                    answered,
                    total,
                }
            }
            SessionState::Intro | SessionState::Complete => Snapshot {
                state: self.state,
                title: None,
                stem: None,
                prompt: None,
                option_labels: Vec::new(),
                current_answer: None,
                position: None,
                item_count: None,
                answered,
                total,
            },
        }
    }

    /// Discard all answers and any report, back to the intro.
    pub fn reset(&mut self) {
        tracing::debug!(from = %self.state, "checkup reset");
        *self = Self::new();
    }

    /// Give up on this session. Nothing is kept.
    pub fn abandon(self) {
        tracing::debug!(
            at = %self.state,
            answered = self.answers.answered(),
            "checkup abandoned"
        );
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(from = %self.state, to = %next, "checkup transition");
        self.state = next;
    }
}

impl Default for CheckupSession {
    fn default() -> Self {
        Self::new()
    }
}
