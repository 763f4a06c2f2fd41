use mindcheck_core::models::answer::AnswerSet;
use mindcheck_core::models::instrument::Instrument;

/// Zero-based index of the PHQ-9 self-harm item.
pub const SELF_HARM_ITEM: usize = 8;

/// Shown ahead of everything else when the risk flag is raised.
pub const URGENT_ALERT: &str = "Immediate attention recommended: your responses show some level of \
     thoughts of self-harm. If you are in danger or may act on these thoughts, contact emergency \
     services or a crisis line immediately. If you're able, reach out to someone you trust now.";

/// True iff the PHQ-9 self-harm item was answered with a value above zero.
///
/// Reads the stored response directly. An unanswered item, or an answer
/// set for another instrument, never raises the flag.
pub fn flag(depression: &AnswerSet) -> bool {
    depression.instrument() == Instrument::Depression
        && depression.get(SELF_HARM_ITEM).is_some_and(|v| v > 0)
}

pub fn alert(risk_flag: bool) -> Option<&'static str> {
    risk_flag.then_some(URGENT_ALERT)
}
