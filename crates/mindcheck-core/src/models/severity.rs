use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordinal severity band.
///
/// PHQ-9 uses all five symptom bands, GAD-7 skips `ModeratelySevere`, and
/// WHO-5 uses its own three-band scale: `Low`, `Moderate`, `Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
    Low,
    Good,
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeverityBand::Minimal => "minimal",
            SeverityBand::Mild => "mild",
            SeverityBand::Moderate => "moderate",
            SeverityBand::ModeratelySevere => "moderately_severe",
            SeverityBand::Severe => "severe",
            SeverityBand::Low => "low",
            SeverityBand::Good => "good",
        };
        f.write_str(s)
    }
}

/// Semantic color token for presenting a band. Not used in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tone {
    Success,
    Info,
    Caution,
    Warning,
    Danger,
}

impl Tone {
    /// Tailwind text color class.
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Success => "text-green-600",
            Tone::Info => "text-blue-600",
            Tone::Caution => "text-yellow-700",
            Tone::Warning => "text-orange-600",
            Tone::Danger => "text-red-600",
        }
    }

    /// Tailwind background class.
    pub fn bg_class(self) -> &'static str {
        match self {
            Tone::Success => "bg-green-100",
            Tone::Info => "bg-blue-100",
            Tone::Caution => "bg-yellow-100",
            Tone::Warning => "bg-orange-100",
            Tone::Danger => "bg-red-100",
        }
    }
}

/// A band together with its display label and tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub band: SeverityBand,
    pub label: String,
    pub tone: Tone,
}
