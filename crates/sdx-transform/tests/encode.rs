//! Tests for the encoder catalogue, including the absent-equivalent
//! fallback policy for unrecognized answers.

use std::collections::BTreeMap;

use sdx_model::Encoder;
use sdx_transform::encode;

fn with(question: &str, answer: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(question.to_string(), answer.to_string())])
}

fn none() -> BTreeMap<String, String> {
    BTreeMap::new()
}

#[test]
fn constant_false_ignores_the_answer() {
    assert_eq!(encode(Encoder::ConstantFalse, "0001", &with("0001", "Yes")), "0");
    assert_eq!(encode(Encoder::ConstantFalse, "0001", &none()), "0");
}

#[test]
fn checkbox_is_presence_only() {
    assert_eq!(encode(Encoder::Checkbox, "0210", &with("0210", "ticked")), "1");
    assert_eq!(encode(Encoder::Checkbox, "0210", &with("0210", "")), "1");
    assert_eq!(encode(Encoder::Checkbox, "0210", &none()), "0");
}

#[test]
fn checkbox_two_bit() {
    assert_eq!(encode(Encoder::CheckboxTwoBit, "1811", &with("1811", "agreed")), "10");
    assert_eq!(encode(Encoder::CheckboxTwoBit, "1811", &none()), "00");
}

#[test]
fn radio_yes_no_10_folds_case() {
    assert_eq!(encode(Encoder::RadioYesNo10, "0410", &with("0410", "Yes")), "1");
    assert_eq!(encode(Encoder::RadioYesNo10, "0410", &with("0410", "YES")), "1");
    assert_eq!(encode(Encoder::RadioYesNo10, "0410", &with("0410", "no")), "0");
    assert_eq!(encode(Encoder::RadioYesNo10, "0410", &none()), "0");
}

#[test]
fn radio_yes_no_01_inverts_agreement() {
    assert_eq!(encode(Encoder::RadioYesNo01, "0410", &with("0410", "Yes")), "0");
    assert_eq!(encode(Encoder::RadioYesNo01, "0410", &with("0410", "No")), "1");
    assert_eq!(encode(Encoder::RadioYesNo01, "0410", &none()), "1");
}

#[test]
fn radio_yes_no_21_two_bit() {
    assert_eq!(encode(Encoder::RadioYesNo21, "0510", &with("0510", "Yes")), "10");
    assert_eq!(encode(Encoder::RadioYesNo21, "0510", &with("0510", "No")), "01");
    assert_eq!(encode(Encoder::RadioYesNo21, "0510", &none()), "00");
}

#[test]
fn unrecognized_answers_fall_back_to_the_absent_value() {
    // Absent-equivalent fallback policy: present-but-unrecognized answers
    // are indistinguishable from absent ones downstream.
    let garbage = "Maybe?";
    assert_eq!(
        encode(Encoder::RadioYesNo10, "0410", &with("0410", garbage)),
        encode(Encoder::RadioYesNo10, "0410", &none()),
    );
    assert_eq!(
        encode(Encoder::RadioYesNo01, "0410", &with("0410", garbage)),
        encode(Encoder::RadioYesNo01, "0410", &none()),
    );
    assert_eq!(
        encode(Encoder::RadioYesNo21, "0510", &with("0510", garbage)),
        encode(Encoder::RadioYesNo21, "0510", &none()),
    );
    assert_eq!(
        encode(Encoder::RadioImportance, "1210", &with("1210", garbage)),
        encode(Encoder::RadioImportance, "1210", &none()),
    );
    assert_eq!(
        encode(Encoder::RadioProportion, "2650", &with("2650", garbage)),
        encode(Encoder::RadioProportion, "2650", &none()),
    );
}

#[test]
fn radio_yes_no_dont_know_only_affirms_yes() {
    assert_eq!(encode(Encoder::RadioYesNoDontKnow, "2672", &with("2672", "Yes")), "1");
    assert_eq!(encode(Encoder::RadioYesNoDontKnow, "2672", &with("2672", "No")), "0");
    assert_eq!(
        encode(Encoder::RadioYesNoDontKnow, "2672", &with("2672", "Don't know")),
        "0"
    );
    assert_eq!(encode(Encoder::RadioYesNoDontKnow, "2672", &none()), "0");
}

#[test]
fn importance_scale_is_one_hot() {
    for (answer, code) in [
        ("Not important", "0001"),
        ("Low", "0010"),
        ("Medium", "0100"),
        ("High", "1000"),
    ] {
        assert_eq!(
            encode(Encoder::RadioImportance, "1210", &with("1210", answer)),
            code
        );
    }
    assert_eq!(encode(Encoder::RadioImportance, "1210", &none()), "0000");
}

#[test]
fn proportion_scale_is_one_hot() {
    for (answer, code) in [
        ("None", "0001"),
        ("Less than 40%", "0010"),
        ("40-90%", "0100"),
        ("Over 90%", "1000"),
    ] {
        assert_eq!(
            encode(Encoder::RadioProportion, "2650", &with("2650", answer)),
            code
        );
    }
    assert_eq!(encode(Encoder::RadioProportion, "2650", &none()), "0000");
}

#[test]
fn zero_pad_formats_and_degrades() {
    assert_eq!(encode(Encoder::ZeroPad { width: 3 }, "0810", &with("0810", "7")), "007");
    assert_eq!(encode(Encoder::ZeroPad { width: 2 }, "2800", &with("2800", "45")), "45");
    assert_eq!(encode(Encoder::ZeroPad { width: 3 }, "0810", &none()), "");
    assert_eq!(encode(Encoder::ZeroPad { width: 3 }, "0810", &with("0810", "lots")), "");
    assert_eq!(encode(Encoder::ZeroPad { width: 3 }, "0810", &with("0810", "1234")), "");
}

#[test]
fn identity_passes_raw_text_through() {
    assert_eq!(
        encode(Encoder::IdentityNumeric, "2510", &with("2510", "1234567")),
        "1234567"
    );
    assert_eq!(encode(Encoder::IdentityNumeric, "2510", &none()), "");
}

#[test]
fn comment_presence_trims_before_checking() {
    assert_eq!(encode(Encoder::CommentPresence, "2700", &with("2700", "  \t ")), "0");
    assert_eq!(encode(Encoder::CommentPresence, "2700", &with("2700", " note ")), "1");
    assert_eq!(encode(Encoder::CommentPresence, "2700", &none()), "0");
}
