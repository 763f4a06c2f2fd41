use mindcheck_core::models::instrument::Instrument;

use crate::Questionnaire;

/// WHO-5: World Health Organization Well-Being Index, five items.
/// Each item rated 0–5. Raw total 0–25, reported as a percentage.
pub struct Who5;

const ITEMS: [&str; 5] = [
    "I have felt cheerful and in good spirits",
    "I have felt calm and relaxed",
    "I have felt active and vigorous",
    "I woke up feeling fresh and rested",
    "My daily life has been filled with things that interest me",
];

const OPTIONS: [&str; 6] = [
    "At no time",
    "Some of the time",
    "Less than half the time",
    "More than half the time",
    "Most of the time",
    "All of the time",
];

impl Questionnaire for Who5 {
    fn instrument(&self) -> Instrument {
        Instrument::Wellbeing
    }

    fn domain(&self) -> &str {
        "Wellbeing"
    }

    fn stem(&self) -> &str {
        "How well have you felt over the last 2 weeks?"
    }

    fn items(&self) -> &[&'static str] {
        &ITEMS
    }

    fn options(&self) -> &[&'static str] {
        &OPTIONS
    }
}
