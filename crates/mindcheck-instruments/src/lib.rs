//! mindcheck-instruments
//!
//! Screening questionnaire definitions (PHQ-9, GAD-7, WHO-5) and the pure
//! scoring pipeline: raw sums, severity bands, the self-harm risk flag and
//! rule-based recommendations. No I/O.

pub mod error;
pub mod instruments;
pub mod recommend;
pub mod risk;
pub mod scoring;
pub mod severity;

use mindcheck_core::error::AnswerError;
use mindcheck_core::models::instrument::Instrument;

/// Trait implemented by each screening questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Which instrument this questionnaire administers.
    fn instrument(&self) -> Instrument;

    /// Unique identifier (e.g., "phq9").
    fn id(&self) -> &str {
        self.instrument().id()
    }

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str {
        self.instrument().code()
    }

    /// What the questionnaire screens for (e.g., "Depression").
    fn domain(&self) -> &str;

    /// Question stem shown above every item.
    fn stem(&self) -> &str;

    /// Item prompts in presentation order.
    fn items(&self) -> &[&'static str];

    /// Response option labels; the option's index is its score.
    fn options(&self) -> &[&'static str];

    /// Check raw responses against this questionnaire's shape and scale.
    fn validate_answers(&self, responses: &[Option<u8>]) -> Vec<AnswerError> {
        let instrument = self.instrument();
        let mut errors = Vec::new();

        if responses.len() != self.items().len() {
            errors.push(AnswerError::LengthMismatch {
                instrument,
                expected: self.items().len(),
                actual: responses.len(),
            });
        }

        let max = instrument.max_option();
        for (item, value) in responses.iter().enumerate() {
            if let Some(value) = *value
                && value > max
            {
                errors.push(AnswerError::InvalidResponseValue {
                    instrument,
                    item,
                    value,
                    max,
                });
            }
        }
        errors
    }
}

/// All questionnaires in the order a checkup presents them.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    Instrument::ALL.into_iter().map(questionnaire).collect()
}

/// The questionnaire administering `instrument`.
pub fn questionnaire(instrument: Instrument) -> Box<dyn Questionnaire> {
    match instrument {
        Instrument::Depression => Box::new(instruments::phq9::Phq9),
        Instrument::Anxiety => Box::new(instruments::gad7::Gad7),
        Instrument::Wellbeing => Box::new(instruments::who5::Who5),
    }
}

/// Look up a questionnaire by ID.
pub fn find_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
