//! Tests for validation formats and field table construction.

use sdx_model::{
    AnswerFormat, DerivedGroup, DerivedRule, Encoder, FieldRule, FieldTable, ModelError,
    QuestionRange, RoutingRule, question_id,
};

#[test]
fn yes_no_is_case_sensitive() {
    let format = AnswerFormat::YesNo;
    assert!(format.accepts("yes"));
    assert!(format.accepts("no"));
    assert!(!format.accepts("don't know"));
    assert!(!format.accepts("Yes"));
    assert!(!format.accepts("No"));
    assert!(!format.accepts("Don't know"));
}

#[test]
fn yes_no_dont_know_tolerates_apostrophes() {
    let format = AnswerFormat::YesNoDontKnow;
    assert!(format.accepts("yes"));
    assert!(format.accepts("no"));
    assert!(format.accepts("don't know"));
    assert!(format.accepts("don`t know"));
    assert!(!format.accepts("Yes"));
    assert!(!format.accepts("Don't know"));
    assert!(!format.accepts("know"));
}

#[test]
fn two_digits_accepts_one_to_two() {
    let format = AnswerFormat::Digits { max: 2 };
    assert!(format.accepts("0"));
    assert!(format.accepts("01"));
    assert!(format.accepts("88"));
    assert!(!format.accepts(""));
    assert!(!format.accepts("000"));
    assert!(!format.accepts("x1"));
}

#[test]
fn three_digits_accepts_one_to_three() {
    let format = AnswerFormat::Digits { max: 3 };
    assert!(format.accepts("1"));
    assert!(format.accepts("12"));
    assert!(format.accepts("900"));
    assert!(!format.accepts("1234"));
    assert!(!format.accepts(""));
}

#[test]
fn six_and_seven_digits_bound_length() {
    assert!(AnswerFormat::Digits { max: 6 }.accepts("123456"));
    assert!(!AnswerFormat::Digits { max: 6 }.accepts("1234567"));
    assert!(AnswerFormat::Digits { max: 7 }.accepts("1234567"));
    assert!(!AnswerFormat::Digits { max: 7 }.accepts("12345678"));
}

#[test]
fn zero_one_and_one_two_are_single_characters() {
    assert!(AnswerFormat::ZeroOne.accepts("0"));
    assert!(AnswerFormat::ZeroOne.accepts("1"));
    assert!(!AnswerFormat::ZeroOne.accepts("2"));
    assert!(!AnswerFormat::ZeroOne.accepts(""));
    assert!(AnswerFormat::OneTwo.accepts("1"));
    assert!(AnswerFormat::OneTwo.accepts("2"));
    assert!(!AnswerFormat::OneTwo.accepts("0"));
    assert!(!AnswerFormat::OneTwo.accepts(""));
}

#[test]
fn two_bit_accepts_one_or_two_binary_chars() {
    let format = AnswerFormat::TwoBit;
    for value in ["0", "1", "00", "01", "10", "11"] {
        assert!(format.accepts(value), "{value:?} should be accepted");
    }
    for value in ["", "2", "012", "1x"] {
        assert!(!format.accepts(value), "{value:?} should be rejected");
    }
}

#[test]
fn one_hot_four_accepts_no_selection() {
    let format = AnswerFormat::OneHotFour;
    for value in ["1000", "0100", "0010", "0001", "0000"] {
        assert!(format.accepts(value), "{value:?} should be accepted");
    }
    for value in ["1100", "000", "00000", "1001", ""] {
        assert!(!format.accepts(value), "{value:?} should be rejected");
    }
}

#[test]
fn question_ids_are_zero_padded_to_four() {
    assert_eq!(question_id(1), "0001");
    assert_eq!(question_id(410), "0410");
    assert_eq!(question_id(2674), "2674");
    assert_eq!(question_id(10001), "10001");
}

#[test]
fn question_range_expands_with_step() {
    let ids: Vec<String> = QuestionRange::new(410, 440, 10).ids().collect();
    assert_eq!(ids, ["0410", "0420", "0430"]);
    let ids: Vec<String> = QuestionRange::single(1310).ids().collect();
    assert_eq!(ids, ["1310"]);
}

fn rule(questions: QuestionRange, default: &'static str) -> FieldRule {
    FieldRule {
        questions,
        default,
        format: AnswerFormat::ZeroOne,
        encoder: Encoder::Checkbox,
    }
}

#[test]
fn table_rejects_overlapping_ranges() {
    let err = FieldTable::new(
        &[
            rule(QuestionRange::new(410, 440, 10), "0"),
            rule(QuestionRange::single(420), "0"),
        ],
        Vec::new(),
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateQuestion { id } if id == "0420"));
}

#[test]
fn table_rejects_routing_id_shadowing_a_field() {
    let err = FieldTable::new(
        &[rule(QuestionRange::single(410), "0")],
        vec![RoutingRule::new(410, AnswerFormat::OneTwo)],
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateQuestion { id } if id == "0410"));
}

#[test]
fn table_rejects_default_violating_format() {
    let err = FieldTable::new(
        &[FieldRule {
            questions: QuestionRange::single(900),
            default: "2",
            format: AnswerFormat::ZeroOne,
            encoder: Encoder::ConstantFalse,
        }],
        Vec::new(),
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::InvalidDefault { id, .. } if id == "0900"));
}

#[test]
fn empty_defaults_are_permitted_for_numeric_fields() {
    let table = FieldTable::new(
        &[FieldRule {
            questions: QuestionRange::single(1410),
            default: "",
            format: AnswerFormat::Digits { max: 6 },
            encoder: Encoder::ThousandsScale,
        }],
        Vec::new(),
        Vec::new(),
    )
    .expect("empty default is exempt from format validation");
    assert_eq!(table.default_for("1410"), Some(""));
}

#[test]
fn table_introspection() {
    let table = FieldTable::new(
        &[
            rule(QuestionRange::new(410, 440, 10), "0"),
            FieldRule {
                questions: QuestionRange::single(2700),
                default: "0",
                format: AnswerFormat::ZeroOne,
                encoder: Encoder::CommentPresence,
            },
        ],
        vec![RoutingRule::new(10001, AnswerFormat::OneTwo)],
        vec![DerivedGroup::new(
            DerivedRule::NoneOfTheAbove,
            &[410, 420, 430],
            440,
        )],
    )
    .expect("valid table");

    assert_eq!(table.len(), 4);
    assert_eq!(
        table.question_ids().collect::<Vec<_>>(),
        ["0410", "0420", "0430", "2700"]
    );
    assert_eq!(table.default_for("0410"), Some("0"));
    assert_eq!(table.format_for("2700"), Some(AnswerFormat::ZeroOne));
    assert_eq!(table.encoder_for("2700"), Some(Encoder::CommentPresence));
    assert_eq!(table.format_for("10001"), Some(AnswerFormat::OneTwo));
    assert_eq!(table.default_for("10001"), None);
    assert!(table.is_routing("10001"));
    assert!(!table.is_routing("0410"));
    assert_eq!(table.derived().len(), 1);
    assert_eq!(table.derived()[0].summary, "0440");
}
