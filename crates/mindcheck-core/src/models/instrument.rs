use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the three screening questionnaires administered in a checkup.
///
/// The shape of each instrument (item count, response scale) is fixed.
/// Prompt text and option labels live in `mindcheck-instruments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Instrument {
    /// PHQ-9: nine items, each 0–3.
    Depression,
    /// GAD-7: seven items, each 0–3.
    Anxiety,
    /// WHO-5: five items, each 0–5.
    Wellbeing,
}

impl Instrument {
    /// All instruments in the order a checkup presents them.
    pub const ALL: [Instrument; 3] = [
        Instrument::Depression,
        Instrument::Anxiety,
        Instrument::Wellbeing,
    ];

    /// Stable identifier (e.g. "phq9").
    pub fn id(self) -> &'static str {
        match self {
            Instrument::Depression => "phq9",
            Instrument::Anxiety => "gad7",
            Instrument::Wellbeing => "who5",
        }
    }

    /// Published questionnaire name (e.g. "PHQ-9").
    pub fn code(self) -> &'static str {
        match self {
            Instrument::Depression => "PHQ-9",
            Instrument::Anxiety => "GAD-7",
            Instrument::Wellbeing => "WHO-5",
        }
    }

    pub fn item_count(self) -> usize {
        match self {
            Instrument::Depression => 9,
            Instrument::Anxiety => 7,
            Instrument::Wellbeing => 5,
        }
    }

    /// Highest valid response value for a single item.
    pub fn max_option(self) -> u8 {
        match self {
            Instrument::Depression | Instrument::Anxiety => 3,
            Instrument::Wellbeing => 5,
        }
    }

    pub fn option_count(self) -> usize {
        usize::from(self.max_option()) + 1
    }

    /// Highest possible raw sum.
    pub fn max_raw(self) -> u32 {
        self.item_count() as u32 * u32::from(self.max_option())
    }

    pub fn next(self) -> Option<Instrument> {
        match self {
            Instrument::Depression => Some(Instrument::Anxiety),
            Instrument::Anxiety => Some(Instrument::Wellbeing),
            Instrument::Wellbeing => None,
        }
    }

    pub fn previous(self) -> Option<Instrument> {
        match self {
            Instrument::Depression => None,
            Instrument::Anxiety => Some(Instrument::Depression),
            Instrument::Wellbeing => Some(Instrument::Anxiety),
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
