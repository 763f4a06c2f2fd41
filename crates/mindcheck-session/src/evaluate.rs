use uuid::Uuid;

use mindcheck_core::models::answer::CheckupAnswers;
use mindcheck_core::models::instrument::Instrument;
use mindcheck_core::models::report::{InstrumentResult, Report};
use mindcheck_instruments::recommend::{Signals, recommend};
use mindcheck_instruments::scoring::{MissingPolicy, Score, combined_index, score};
use mindcheck_instruments::{risk, severity};

use crate::error::SessionError;

/// Score, classify, flag and recommend over a full set of answers.
///
/// This is the whole report pipeline; [`CheckupSession`] runs it once the
/// last WHO-5 item is answered, and batch callers can run it directly.
///
/// [`CheckupSession`]: crate::CheckupSession
pub fn evaluate(answers: &CheckupAnswers, policy: MissingPolicy) -> Result<Report, SessionError> {
    let depression = score(Instrument::Depression, &answers.depression, policy)?;
    let anxiety = score(Instrument::Anxiety, &answers.anxiety, policy)?;
    let wellbeing = score(Instrument::Wellbeing, &answers.wellbeing, policy)?;

    let combined_index = combined_index(&depression, &anxiety);
    let risk_flag = risk::flag(&answers.depression);
    let recommendations = recommend(&Signals {
        depression: depression.value,
        anxiety: anxiety.value,
        combined_index,
        wellbeing_percent: wellbeing.value,
    });

    let report = Report {
        id: Uuid::new_v4(),
        completed_at: jiff::Timestamp::now(),
        depression: result(depression),
        anxiety: result(anxiety),
        wellbeing: result(wellbeing),
        combined_index,
        risk_flag,
        recommendations,
        answers: answers.clone(),
    };

    if risk_flag {
        tracing::warn!(report_id = %report.id, "self-harm item answered above zero");
    }
    tracing::info!(
        report_id = %report.id,
        depression = report.depression.score,
        depression_band = %report.depression.classification.band,
        anxiety = report.anxiety.score,
        anxiety_band = %report.anxiety.classification.band,
        wellbeing_percent = report.wellbeing.score,
        wellbeing_band = %report.wellbeing.classification.band,
        combined_index,
        risk_flag,
        "checkup report built"
    );

    Ok(report)
}

fn result(score: Score) -> InstrumentResult {
    InstrumentResult {
        instrument: score.instrument,
        raw: score.raw,
        score: score.value,
        max_score: score.max_value(),
        classification: severity::classify(score.instrument, score.value),
    }
}
