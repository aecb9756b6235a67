//! Field definitions for the UK Innovation Survey (survey 144).
//!
//! This table captures the agreed downstream format of the UKIS survey:
//! every question id, its default output, the format the encoded value must
//! satisfy, and the encoder that produces it. Row order is record order
//! downstream, so rows must not be reordered.

use std::sync::{LazyLock, OnceLock};

use sdx_model::{
    AnswerFormat, DerivedGroup, DerivedRule, Encoder, FieldRule, FieldTable, ModelError,
    QuestionRange, RoutingRule,
};

const fn rule(
    questions: QuestionRange,
    default: &'static str,
    format: AnswerFormat,
    encoder: Encoder,
) -> FieldRule {
    FieldRule {
        questions,
        default,
        format,
        encoder,
    }
}

const ZERO_ONE: AnswerFormat = AnswerFormat::ZeroOne;
const TWO_BIT: AnswerFormat = AnswerFormat::TwoBit;
const TWO_DIGITS: AnswerFormat = AnswerFormat::Digits { max: 2 };
const THREE_DIGITS: AnswerFormat = AnswerFormat::Digits { max: 3 };
const SIX_DIGITS: AnswerFormat = AnswerFormat::Digits { max: 6 };
const SEVEN_DIGITS: AnswerFormat = AnswerFormat::Digits { max: 7 };
const ONE_HOT: AnswerFormat = AnswerFormat::OneHotFour;

/// The UKIS rule rows, in downstream record order.
const UKIS_RULES: &[FieldRule] = &[
    rule(QuestionRange::new(1, 4, 1), "0", ZERO_ONE, Encoder::ConstantFalse),
    rule(QuestionRange::new(210, 250, 10), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::new(410, 440, 10), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::new(2310, 2350, 10), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::single(1310), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::new(2675, 2678, 1), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::single(1410), "", SIX_DIGITS, Encoder::ThousandsScale),
    rule(QuestionRange::single(1320), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::single(1420), "", SIX_DIGITS, Encoder::ThousandsScale),
    rule(QuestionRange::new(1331, 1334, 1), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::single(1430), "", SIX_DIGITS, Encoder::ThousandsScale),
    rule(QuestionRange::single(1340), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::single(1440), "", SIX_DIGITS, Encoder::ThousandsScale),
    rule(QuestionRange::single(1350), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::single(1450), "", SIX_DIGITS, Encoder::ThousandsScale),
    rule(QuestionRange::single(1360), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::single(1460), "", SIX_DIGITS, Encoder::ThousandsScale),
    rule(QuestionRange::new(1371, 1375, 1), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::single(1470), "", SIX_DIGITS, Encoder::ThousandsScale),
    rule(QuestionRange::single(510), "00", TWO_BIT, Encoder::RadioYesNo21),
    rule(QuestionRange::new(610, 640, 10), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::single(520), "00", TWO_BIT, Encoder::RadioYesNo21),
    rule(QuestionRange::new(601, 604, 1), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::new(710, 730, 10), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::new(810, 850, 10), "", THREE_DIGITS, Encoder::ZeroPad { width: 3 }),
    rule(QuestionRange::single(900), "00", TWO_BIT, Encoder::RadioYesNo21),
    rule(QuestionRange::new(1010, 1040, 10), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::single(1100), "00", TWO_BIT, Encoder::RadioYesNo21),
    rule(QuestionRange::new(1510, 1540, 10), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::new(2657, 2668, 1), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::single(2011), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::new(2020, 2050, 10), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::new(1210, 1212, 1), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::new(1220, 1300, 10), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::new(1212, 1214, 1), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::single(1601), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::single(1620), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::new(1610, 1612, 1), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::new(1631, 1633, 1), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::new(1640, 1700, 10), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::new(1811, 1815, 1), "00", TWO_BIT, Encoder::CheckboxTwoBit),
    rule(QuestionRange::new(1821, 1825, 1), "00", TWO_BIT, Encoder::CheckboxTwoBit),
    rule(QuestionRange::new(1881, 1885, 1), "00", TWO_BIT, Encoder::CheckboxTwoBit),
    rule(QuestionRange::new(1891, 1895, 1), "00", TWO_BIT, Encoder::CheckboxTwoBit),
    rule(QuestionRange::new(1841, 1845, 1), "00", TWO_BIT, Encoder::CheckboxTwoBit),
    rule(QuestionRange::new(1851, 1855, 1), "00", TWO_BIT, Encoder::CheckboxTwoBit),
    rule(QuestionRange::new(1861, 1865, 1), "00", TWO_BIT, Encoder::CheckboxTwoBit),
    rule(QuestionRange::new(1871, 1875, 1), "00", TWO_BIT, Encoder::CheckboxTwoBit),
    rule(QuestionRange::new(2650, 2657, 1), "0000", ONE_HOT, Encoder::RadioProportion),
    rule(QuestionRange::new(2668, 2671, 1), "0", ZERO_ONE, Encoder::RadioYesNo10),
    rule(QuestionRange::new(2672, 2674, 1), "0", ZERO_ONE, Encoder::RadioYesNoDontKnow),
    rule(QuestionRange::new(2410, 2430, 10), "", SIX_DIGITS, Encoder::ThousandsScale),
    rule(QuestionRange::new(2440, 2450, 10), "", SIX_DIGITS, Encoder::ThousandsScale),
    rule(QuestionRange::new(2510, 2530, 10), "", SEVEN_DIGITS, Encoder::IdentityNumeric),
    rule(QuestionRange::new(2610, 2630, 10), "", THREE_DIGITS, Encoder::ZeroPad { width: 3 }),
    rule(QuestionRange::new(2631, 2637, 1), "0", ZERO_ONE, Encoder::Checkbox),
    rule(QuestionRange::single(2678), "0000", ONE_HOT, Encoder::RadioImportance),
    rule(QuestionRange::single(2700), "0", ZERO_ONE, Encoder::CommentPresence),
    rule(QuestionRange::single(2801), "", THREE_DIGITS, Encoder::IdentityNumeric),
    rule(QuestionRange::single(2800), "", TWO_DIGITS, Encoder::ZeroPad { width: 2 }),
    rule(QuestionRange::single(2900), "00", TWO_BIT, Encoder::RadioYesNo21),
];

/// The instrument-selector question; input only, never emitted.
const UKIS_ROUTING_FIELD: u32 = 10001;

fn ukis_derived() -> Vec<DerivedGroup> {
    vec![
        DerivedGroup::new(DerivedRule::AnyDontKnow, &[2672, 2673], 2674),
        DerivedGroup::new(DerivedRule::NoneOfTheAbove, &[410, 420, 430], 440),
        DerivedGroup::new(DerivedRule::NoneOfTheAbove, &[2668, 2669, 2670], 2671),
    ]
}

static UKIS: LazyLock<FieldTable> = LazyLock::new(|| {
    FieldTable::new(
        UKIS_RULES,
        vec![RoutingRule::new(UKIS_ROUTING_FIELD, AnswerFormat::OneTwo)],
        ukis_derived(),
    )
    .expect("UKIS field table definition is internally consistent")
});

/// The UKIS field table, built once and shared for the process lifetime.
#[must_use]
pub fn ukis() -> &'static FieldTable {
    &UKIS
}

/// Lookup from (survey id, instrument id) to a field table.
///
/// Unknown pairs are rejected here, before any transform begins; the
/// transform itself assumes it only ever runs with a table matching the
/// submitted instrument.
#[derive(Debug, Default)]
pub struct SurveyRegistry {
    tables: Vec<(&'static str, &'static str, &'static FieldTable)>,
}

impl SurveyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table for a survey/instrument pair, replacing any
    /// previous registration.
    pub fn register(
        &mut self,
        survey_id: &'static str,
        instrument_id: &'static str,
        table: &'static FieldTable,
    ) {
        self.tables
            .retain(|(survey, instrument, _)| !(*survey == survey_id && *instrument == instrument_id));
        self.tables.push((survey_id, instrument_id, table));
    }

    /// Resolves the table for a submission.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnsupportedSurvey`] when no table is registered
    /// for the pair.
    pub fn get(
        &self,
        survey_id: &str,
        instrument_id: &str,
    ) -> Result<&'static FieldTable, ModelError> {
        self.tables
            .iter()
            .find(|(survey, instrument, _)| *survey == survey_id && *instrument == instrument_id)
            .map(|(_, _, table)| *table)
            .ok_or_else(|| ModelError::UnsupportedSurvey {
                survey_id: survey_id.to_string(),
                instrument_id: instrument_id.to_string(),
            })
    }

    /// Registered (survey id, instrument id) pairs.
    pub fn instruments(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.tables
            .iter()
            .map(|(survey, instrument, _)| (*survey, *instrument))
    }
}

static DEFAULT_REGISTRY: OnceLock<SurveyRegistry> = OnceLock::new();

/// The registry holding every built-in survey table.
pub fn default_registry() -> &'static SurveyRegistry {
    DEFAULT_REGISTRY.get_or_init(|| {
        let mut registry = SurveyRegistry::new();
        registry.register("144", "0001", ukis());
        registry
    })
}
