pub mod gad7;
pub mod phq9;
pub mod who5;

/// Four-point frequency scale shared by PHQ-9 and GAD-7.
pub(crate) const FREQUENCY_OPTIONS: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

pub(crate) const TWO_WEEK_STEM: &str =
    "Over the last 2 weeks, how often have you been bothered by the following?";
