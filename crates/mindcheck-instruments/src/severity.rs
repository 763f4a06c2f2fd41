//! Threshold tables mapping scores to severity bands.
//!
//! Each table is an ordered rule list evaluated first-match-wins, with a
//! fallback band for scores no rule claims, so classification is total.

use mindcheck_core::models::instrument::Instrument;
use mindcheck_core::models::severity::{Classification, SeverityBand, Tone};

/// Inclusive score bound a rule matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    AtLeast(u32),
    AtMost(u32),
}

impl Bound {
    pub fn matches(self, score: u32) -> bool {
        match self {
            Bound::AtLeast(min) => score >= min,
            Bound::AtMost(max) => score <= max,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BandRule {
    pub bound: Bound,
    pub band: SeverityBand,
    pub label: &'static str,
    pub tone: Tone,
}

impl BandRule {
    fn classification(&self) -> Classification {
        Classification {
            band: self.band,
            label: self.label.to_string(),
            tone: self.tone,
        }
    }
}

#[derive(Debug)]
pub struct BandTable {
    pub rules: &'static [BandRule],
    pub fallback: BandRule,
}

impl BandTable {
    pub fn classify(&self, score: u32) -> Classification {
        self.rules
            .iter()
            .find(|rule| rule.bound.matches(score))
            .unwrap_or(&self.fallback)
            .classification()
    }

    /// Every band this table can produce, in evaluation order.
    pub fn bands(&self) -> impl Iterator<Item = SeverityBand> + '_ {
        self.rules
            .iter()
            .map(|r| r.band)
            .chain(std::iter::once(self.fallback.band))
    }
}

const fn rule(bound: Bound, band: SeverityBand, label: &'static str, tone: Tone) -> BandRule {
    BandRule {
        bound,
        band,
        label,
        tone,
    }
}

pub static DEPRESSION_BANDS: BandTable = BandTable {
    rules: &[
        rule(Bound::AtLeast(20), SeverityBand::Severe, "Severe", Tone::Danger),
        rule(
            Bound::AtLeast(15),
            SeverityBand::ModeratelySevere,
            "Moderately severe",
            Tone::Warning,
        ),
        rule(Bound::AtLeast(10), SeverityBand::Moderate, "Moderate", Tone::Caution),
        rule(Bound::AtLeast(5), SeverityBand::Mild, "Mild", Tone::Info),
    ],
    fallback: rule(Bound::AtLeast(0), SeverityBand::Minimal, "Minimal", Tone::Success),
};

pub static ANXIETY_BANDS: BandTable = BandTable {
    rules: &[
        rule(Bound::AtLeast(15), SeverityBand::Severe, "Severe", Tone::Danger),
        rule(Bound::AtLeast(10), SeverityBand::Moderate, "Moderate", Tone::Caution),
        rule(Bound::AtLeast(5), SeverityBand::Mild, "Mild", Tone::Info),
    ],
    fallback: rule(Bound::AtLeast(0), SeverityBand::Minimal, "Minimal", Tone::Success),
};

/// WHO-5 bands apply to the percentage, not the raw sum.
pub static WELLBEING_BANDS: BandTable = BandTable {
    rules: &[
        rule(Bound::AtMost(50), SeverityBand::Low, "Low wellbeing", Tone::Danger),
        rule(
            Bound::AtMost(70),
            SeverityBand::Moderate,
            "Moderate wellbeing",
            Tone::Caution,
        ),
    ],
    fallback: rule(Bound::AtLeast(71), SeverityBand::Good, "Good wellbeing", Tone::Success),
};

pub fn table(instrument: Instrument) -> &'static BandTable {
    match instrument {
        Instrument::Depression => &DEPRESSION_BANDS,
        Instrument::Anxiety => &ANXIETY_BANDS,
        Instrument::Wellbeing => &WELLBEING_BANDS,
    }
}

/// Classify a reported score (the percentage for WHO-5).
pub fn classify(instrument: Instrument, score: u32) -> Classification {
    table(instrument).classify(score)
}
