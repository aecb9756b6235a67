//! Field encoders (processors).
//!
//! Each encoder is a pure function from `(question id, raw answers)` to an
//! encoded output string. Encoders never fail: malformed or unexpected raw
//! input degrades to the field's documented default, so bad upstream data
//! cannot abort a transform.
//!
//! Unrecognized-but-present answers follow the *absent-equivalent fallback*
//! policy: they encode to the same value as an absent answer.

use std::collections::BTreeMap;

use sdx_model::Encoder;

/// Applies `encoder` to the raw answer for `question`.
#[must_use]
pub fn encode(encoder: Encoder, question: &str, answers: &BTreeMap<String, String>) -> String {
    let answer = answers.get(question);
    match encoder {
        Encoder::ConstantFalse => "0".to_string(),
        Encoder::Checkbox => if answer.is_some() { "1" } else { "0" }.to_string(),
        Encoder::CheckboxTwoBit => if answer.is_some() { "10" } else { "00" }.to_string(),
        Encoder::RadioYesNo10 => radio(answer, "1", "0", "0"),
        Encoder::RadioYesNo01 => radio(answer, "0", "1", "1"),
        Encoder::RadioYesNo21 => radio(answer, "10", "01", "00"),
        Encoder::RadioYesNoDontKnow => {
            let yes = answer.is_some_and(|raw| raw.eq_ignore_ascii_case("yes"));
            if yes { "1" } else { "0" }.to_string()
        }
        Encoder::RadioImportance => one_hot(
            answer,
            &[
                ("not important", "0001"),
                ("low", "0010"),
                ("medium", "0100"),
                ("high", "1000"),
            ],
        ),
        Encoder::RadioProportion => one_hot(
            answer,
            &[
                ("none", "0001"),
                ("less than 40%", "0010"),
                ("40-90%", "0100"),
                ("over 90%", "1000"),
            ],
        ),
        Encoder::ZeroPad { width } => answer.map_or_else(String::new, |raw| zero_pad(raw, width)),
        Encoder::ThousandsScale => {
            answer.map_or_else(String::new, |raw| thousands_scale(raw))
        }
        Encoder::IdentityNumeric => answer.cloned().unwrap_or_default(),
        Encoder::CommentPresence => answer
            .map_or("0", |text| if text.trim().is_empty() { "0" } else { "1" })
            .to_string(),
    }
}

fn radio(
    answer: Option<&String>,
    yes: &'static str,
    no: &'static str,
    fallback: &'static str,
) -> String {
    let Some(answer) = answer else {
        return fallback.to_string();
    };
    match answer.to_lowercase().as_str() {
        "yes" => yes.to_string(),
        "no" => no.to_string(),
        _ => fallback.to_string(),
    }
}

fn one_hot(answer: Option<&String>, choices: &[(&str, &'static str)]) -> String {
    let Some(answer) = answer else {
        return "0000".to_string();
    };
    let folded = answer.to_lowercase();
    choices
        .iter()
        .find(|(label, _)| *label == folded)
        .map_or("0000", |(_, code)| *code)
        .to_string()
}

/// Left-pads a decimal answer with zeros to `width`. Non-numeric answers,
/// and answers too wide to fit, degrade to the empty default so the output
/// always satisfies the field's digit format.
fn zero_pad(raw: &str, width: usize) -> String {
    let Ok(value) = raw.trim().parse::<u64>() else {
        return String::new();
    };
    let padded = format!("{value:0width$}");
    if padded.len() > width {
        String::new()
    } else {
        padded
    }
}

/// Truncating division by 1000, performed on the decimal string so inputs
/// of any length stay exact: drop the last three digits, then strip the
/// leading zeros the shortened number may expose.
fn thousands_scale(raw: &str) -> String {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }
    let kept = &raw[..raw.len().saturating_sub(3)];
    let trimmed = kept.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
