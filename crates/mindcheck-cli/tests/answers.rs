use mindcheck_cli::answers::parse_answers;
use mindcheck_core::models::instrument::Instrument;

#[test]
fn parses_complete_answers() {
    let answers = parse_answers(
        r#"{
            "depression": [0, 1, 2, 3, 0, 1, 2, 3, 0],
            "anxiety": [1, 1, 1, 1, 1, 1, 1],
            "wellbeing": [5, 4, 3, 2, 1]
        }"#,
    )
    .unwrap();
    assert_eq!(answers.depression.get(3), Some(3));
    assert_eq!(answers.get(Instrument::Wellbeing).get(0), Some(5));
    assert_eq!(answers.answered(), 21);
}

#[test]
fn null_marks_unanswered_items() {
    let answers = parse_answers(
        r#"{
            "depression": [0, 0, 0, 0, 0, 0, 0, 0, null],
            "anxiety": [0, 0, 0, 0, 0, 0, 0],
            "wellbeing": [null, null, null, null, null]
        }"#,
    )
    .unwrap();
    assert_eq!(answers.depression.missing(), vec![8]);
    assert_eq!(answers.wellbeing.answered(), 0);
}

#[test]
fn every_problem_is_reported() {
    let err = parse_answers(
        r#"{
            "depression": [0, 0, 0, 0, 0, 0, 0, 0],
            "anxiety": [4, 0, 0, 0, 0, 0, 0],
            "wellbeing": [6, 0, 0, 0, 0]
        }"#,
    )
    .unwrap_err()
    .to_string();
    assert!(err.contains("PHQ-9 expects 9 responses, got 8"));
    assert!(err.contains("GAD-7: response 4 for item 0 is outside [0, 3]"));
    assert!(err.contains("WHO-5: response 6 for item 0 is outside [0, 5]"));
}

#[test]
fn unknown_fields_are_rejected() {
    let result = parse_answers(
        r#"{
            "depression": [0, 0, 0, 0, 0, 0, 0, 0, 0],
            "anxiety": [0, 0, 0, 0, 0, 0, 0],
            "wellbeing": [0, 0, 0, 0, 0],
            "stress": [1]
        }"#,
    );
    assert!(result.is_err());
}
