use mindcheck_core::models::instrument::Instrument;

use super::{FREQUENCY_OPTIONS, TWO_WEEK_STEM};
use crate::Questionnaire;

/// GAD-7: Generalized Anxiety Disorder scale, seven items.
/// Each item rated 0–3. Total 0–21.
pub struct Gad7;

const ITEMS: [&str; 7] = [
    "Feeling nervous, anxious or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it's hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid as if something awful might happen",
];

impl Questionnaire for Gad7 {
    fn instrument(&self) -> Instrument {
        Instrument::Anxiety
    }

    fn domain(&self) -> &str {
        "Anxiety"
    }

    fn stem(&self) -> &str {
        TWO_WEEK_STEM
    }

    fn items(&self) -> &[&'static str] {
        &ITEMS
    }

    fn options(&self) -> &[&'static str] {
        &FREQUENCY_OPTIONS
    }
}
