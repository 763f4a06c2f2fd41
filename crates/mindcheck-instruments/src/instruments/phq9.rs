use mindcheck_core::models::instrument::Instrument;

use super::{FREQUENCY_OPTIONS, TWO_WEEK_STEM};
use crate::Questionnaire;

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Each item rated 0–3. Total 0–27. Item 9 asks about self-harm.
pub struct Phq9;

const ITEMS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
    "Trouble concentrating on things, such as reading or watching television",
    "Moving or speaking slowly, or being so restless that others noticed",
    "Thoughts that you would be better off dead or of hurting yourself in some way",
];

impl Questionnaire for Phq9 {
    fn instrument(&self) -> Instrument {
        Instrument::Depression
    }

    fn domain(&self) -> &str {
        "Depression"
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
