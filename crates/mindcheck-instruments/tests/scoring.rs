use mindcheck_core::models::answer::AnswerSet;
use mindcheck_core::models::instrument::Instrument;
use mindcheck_instruments::error::ScoringError;
use mindcheck_instruments::scoring::{MissingPolicy, combined_index, percent, score};

fn complete(instrument: Instrument, values: &[u8]) -> AnswerSet {
    AnswerSet::complete(instrument, values).unwrap()
}

#[test]
fn depression_and_anxiety_score_is_the_sum() {
    let phq = complete(Instrument::Depression, &[0, 1, 2, 3, 0, 1, 2, 3, 0]);
    let s = score(Instrument::Depression, &phq, MissingPolicy::Reject).unwrap();
    assert_eq!(s.raw, 12);
    assert_eq!(s.value, 12);
    assert_eq!(s.max_value(), 27);

    let gad = complete(Instrument::Anxiety, &[3; 7]);
    let s = score(Instrument::Anxiety, &gad, MissingPolicy::Reject).unwrap();
    assert_eq!(s.value, 21);
}

#[test]
fn wellbeing_is_reported_as_percent() {
    let who = complete(Instrument::Wellbeing, &[4, 4, 4, 4, 4]);
    let s = score(Instrument::Wellbeing, &who, MissingPolicy::Reject).unwrap();
    assert_eq!(s.raw, 20);
    assert_eq!(s.value, 80);
    assert_eq!(s.max_value(), 100);
}

#[test]
fn wellbeing_percent_for_every_raw_sum() {
    for raw in 0..=25 {
        assert_eq!(percent(raw, 25), raw * 4);
    }
}

#[test]
fn percent_rounds_half_up() {
    assert_eq!(percent(1, 8), 13); // 12.5
    assert_eq!(percent(1, 3), 33); // 33.33
    assert_eq!(percent(2, 3), 67); // 66.67
    assert_eq!(percent(0, 0), 0);
}

#[test]
fn incomplete_answers_are_rejected_by_default() {
    let mut phq = AnswerSet::new(Instrument::Depression);
    for item in 0..7 {
        phq.set(item, 1).unwrap();
    }
    let err = score(Instrument::Depression, &phq, MissingPolicy::default()).unwrap_err();
    assert_eq!(
        err,
        ScoringError::IncompleteAnswers {
            instrument: Instrument::Depression,
            missing: vec![7, 8],
        }
    );
}

#[test]
fn treat_as_zero_scores_incomplete_answers() {
    let mut who = AnswerSet::new(Instrument::Wellbeing);
    who.set(0, 5).unwrap();
    who.set(3, 5).unwrap();
    let s = score(Instrument::Wellbeing, &who, MissingPolicy::TreatAsZero).unwrap();
    assert_eq!(s.raw, 10);
    assert_eq!(s.value, 40);
}

#[test]
fn mismatched_instrument_is_rejected() {
    let gad = complete(Instrument::Anxiety, &[0; 7]);
    let err = score(Instrument::Depression, &gad, MissingPolicy::Reject).unwrap_err();
    assert!(matches!(err, ScoringError::WrongInstrument { .. }));
}

#[test]
fn scores_stay_within_bounds_at_extremes() {
    for instrument in Instrument::ALL {
        let low = vec![0; instrument.item_count()];
        let high = vec![instrument.max_option(); instrument.item_count()];
        let min = score(instrument, &complete(instrument, &low), MissingPolicy::Reject).unwrap();
        let max = score(instrument, &complete(instrument, &high), MissingPolicy::Reject).unwrap();
        assert_eq!(min.value, 0);
        assert_eq!(max.value, max.max_value());
    }
}

#[test]
fn raising_any_single_answer_never_lowers_the_score() {
    for instrument in Instrument::ALL {
        let n = instrument.item_count();
        // Baseline mixes every option value across items.
        let base: Vec<u8> = (0..n)
            .map(|i| (i as u8) % (instrument.max_option() + 1))
            .collect();
        for item in 0..n {
            let mut previous = None;
            for value in 0..=instrument.max_option() {
                let mut values = base.clone();
                values[item] = value;
                let s = score(instrument, &complete(instrument, &values), MissingPolicy::Reject)
                    .unwrap();
                assert!(s.value <= s.max_value());
                if let Some(prev) = previous {
                    assert!(s.value >= prev, "{instrument} item {item} value {value}");
                }
                previous = Some(s.value);
            }
        }
    }
}

#[test]
fn combined_index_adds_depression_and_anxiety() {
    let phq = score(
        Instrument::Depression,
        &complete(Instrument::Depression, &[3; 9]),
        MissingPolicy::Reject,
    )
    .unwrap();
    let gad = score(
        Instrument::Anxiety,
        &complete(Instrument::Anxiety, &[3; 7]),
        MissingPolicy::Reject,
    )
    .unwrap();
    assert_eq!(combined_index(&phq, &gad), 48);
}

#[test]
fn missing_policy_uses_config_spelling() {
    assert_eq!(
        serde_json::to_value(MissingPolicy::TreatAsZero).unwrap(),
        "treat_as_zero"
    );
    let policy: MissingPolicy = serde_json::from_str("\"reject\"").unwrap();
    assert_eq!(policy, MissingPolicy::Reject);
    assert!(serde_json::from_str::<MissingPolicy>("\"ignore\"").is_err());
}

#[test]
fn wellbeing_score_serializes_raw_and_percent() {
    let who = complete(Instrument::Wellbeing, &[3, 3, 3, 3, 3]);
    let s = score(Instrument::Wellbeing, &who, MissingPolicy::Reject).unwrap();
    let json = serde_json::to_value(s).unwrap();
    assert_eq!(json["instrument"], "wellbeing");
    assert_eq!(json["raw"], 15);
    assert_eq!(json["value"], 60);
}
