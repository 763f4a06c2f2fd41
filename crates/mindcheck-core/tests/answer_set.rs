use mindcheck_core::error::AnswerError;
use mindcheck_core::models::answer::{AnswerSet, CheckupAnswers};
use mindcheck_core::models::instrument::Instrument;

#[test]
fn new_set_has_fixed_length_and_no_answers() {
    for instrument in Instrument::ALL {
        let set = AnswerSet::new(instrument);
        assert_eq!(set.len(), instrument.item_count());
        assert_eq!(set.answered(), 0);
        assert!(!set.is_complete());
        assert_eq!(set.missing().len(), instrument.item_count());
    }
}

#[test]
fn instrument_shapes_are_fixed() {
    assert_eq!(Instrument::Depression.item_count(), 9);
    assert_eq!(Instrument::Anxiety.item_count(), 7);
    assert_eq!(Instrument::Wellbeing.item_count(), 5);
    assert_eq!(Instrument::Depression.option_count(), 4);
    assert_eq!(Instrument::Anxiety.option_count(), 4);
    assert_eq!(Instrument::Wellbeing.option_count(), 6);
    assert_eq!(Instrument::Depression.max_raw(), 27);
    assert_eq!(Instrument::Anxiety.max_raw(), 21);
    assert_eq!(Instrument::Wellbeing.max_raw(), 25);
}

#[test]
fn instruments_chain_in_session_order() {
    assert_eq!(Instrument::Depression.next(), Some(Instrument::Anxiety));
    assert_eq!(Instrument::Anxiety.next(), Some(Instrument::Wellbeing));
    assert_eq!(Instrument::Wellbeing.next(), None);
    assert_eq!(Instrument::Depression.previous(), None);
    assert_eq!(Instrument::Wellbeing.previous(), Some(Instrument::Anxiety));
}

#[test]
fn out_of_range_value_is_rejected_and_set_unchanged() {
    let mut set = AnswerSet::new(Instrument::Anxiety);
    set.set(2, 1).unwrap();

    let err = set.set(2, 4).unwrap_err();
    assert_eq!(
        err,
        AnswerError::InvalidResponseValue {
            instrument: Instrument::Anxiety,
            item: 2,
            value: 4,
            max: 3,
        }
    );
    assert_eq!(set.get(2), Some(1));
}

#[test]
fn wellbeing_accepts_five() {
    let mut set = AnswerSet::new(Instrument::Wellbeing);
    set.set(4, 5).unwrap();
    assert_eq!(set.get(4), Some(5));
    assert!(set.set(4, 6).is_err());
}

#[test]
fn item_index_past_end_is_rejected() {
    let mut set = AnswerSet::new(Instrument::Wellbeing);
    let err = set.set(5, 0).unwrap_err();
    assert!(matches!(err, AnswerError::ItemOutOfRange { item: 5, count: 5, .. }));
}

#[test]
fn from_responses_checks_length() {
    let err = AnswerSet::from_responses(Instrument::Depression, vec![Some(0); 8]).unwrap_err();
    assert_eq!(
        err,
        AnswerError::LengthMismatch {
            instrument: Instrument::Depression,
            expected: 9,
            actual: 8,
        }
    );
}

#[test]
fn missing_lists_unset_indices() {
    let set = AnswerSet::from_responses(
        Instrument::Wellbeing,
        vec![Some(1), None, Some(2), None, Some(0)],
    )
    .unwrap();
    assert_eq!(set.missing(), vec![1, 3]);
    assert_eq!(set.answered(), 3);
}

#[test]
fn checkup_answers_counts_across_instruments() {
    let mut answers = CheckupAnswers::new();
    answers.get_mut(Instrument::Depression).set(0, 2).unwrap();
    answers.get_mut(Instrument::Wellbeing).set(4, 5).unwrap();
    assert_eq!(answers.answered(), 2);
    assert_eq!(answers.get(Instrument::Wellbeing).get(4), Some(5));
}

#[test]
fn answer_set_serializes_instrument_in_snake_case() {
    let set = AnswerSet::complete(Instrument::Anxiety, &[0, 1, 2, 3, 0, 1, 2]).unwrap();
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json["instrument"], "anxiety");
    assert_eq!(json["responses"][3], 3);
}

#[test]
fn deserializing_answer_set_checks_range_and_length() {
    let out_of_range = r#"{"instrument":"depression","responses":[200,0,0,0,0,0,0,0,0]}"#;
    let err = serde_json::from_str::<AnswerSet>(out_of_range).unwrap_err();
    assert!(err.to_string().contains("outside [0, 3]"), "{err}");

    let too_short = r#"{"instrument":"anxiety","responses":[0]}"#;
    let err = serde_json::from_str::<AnswerSet>(too_short).unwrap_err();
    assert!(err.to_string().contains("expects 7 responses, got 1"), "{err}");

    let partial = r#"{"instrument":"wellbeing","responses":[5,null,0,null,2]}"#;
    let set: AnswerSet = serde_json::from_str(partial).unwrap();
    assert_eq!(set.missing(), vec![1, 3]);
}

#[test]
fn deserializing_checkup_answers_rejects_invalid_sets() {
    let json = serde_json::json!({
        "depression": {"instrument": "depression", "responses": [200, 200, 200, 200, 200, 200, 200, 200, 200]},
        "anxiety": {"instrument": "anxiety", "responses": [0]},
        "wellbeing": {"instrument": "wellbeing", "responses": [250, 250, 250, 250, 250]},
    });
    assert!(serde_json::from_value::<CheckupAnswers>(json).is_err());
}

#[test]
fn deserializing_checkup_answers_rejects_swapped_instruments() {
    let mut answers = CheckupAnswers::new();
    answers.anxiety = AnswerSet::new(Instrument::Depression);
    let json = serde_json::to_string(&answers).unwrap();
    let err = serde_json::from_str::<CheckupAnswers>(&json).unwrap_err();
    assert!(err.to_string().contains("expected GAD-7 answers, got PHQ-9"), "{err}");
}

#[test]
fn checkup_answers_round_trip_through_json() {
    let mut answers = CheckupAnswers::new();
    answers.get_mut(Instrument::Anxiety).set(6, 3).unwrap();
    let json = serde_json::to_string(&answers).unwrap();
    let back: CheckupAnswers = serde_json::from_str(&json).unwrap();
    assert_eq!(back, answers);
}
