//! The transform orchestrator.
//!
//! Applies a [`FieldTable`] to a raw answer mapping: defaults in table
//! order, routing elimination, per-field encoding, then derived-group
//! evaluation. The result is ready for positional-record serialization,
//! which is why insertion order is part of the contract.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use sdx_model::{DerivedRule, FieldTable};

use crate::encode::encode;

/// Ordered mapping of question ids to encoded output values.
pub type FieldMap = IndexMap<String, String>;

/// Transforms a raw answer mapping into the ordered downstream field map.
///
/// Total over its input domain: any mapping of strings to strings is legal.
/// The result contains every non-routing id from the table, in table order,
/// followed by any derived summary that is not itself a table id. Unknown
/// answer keys have no effect.
#[must_use]
pub fn transform(table: &FieldTable, answers: &BTreeMap<String, String>) -> FieldMap {
    let mut result: FieldMap = table
        .entries()
        .iter()
        .map(|entry| (entry.id.clone(), entry.default.to_string()))
        .collect();

    // Routing fields never reach the output, whatever they carried.
    for rule in table.routing() {
        result.shift_remove(&rule.id);
    }

    for entry in table.entries() {
        result.insert(entry.id.clone(), encode(entry.encoder, &entry.id, answers));
    }

    // Derived groups run after encoding: none-of-the-above summaries read
    // the final encoded member values, don't-know summaries read the raw
    // answers. Summaries overwrite in place or append at the end.
    for group in table.derived() {
        let value = match group.rule {
            DerivedRule::NoneOfTheAbove => {
                let any_affirmed = group
                    .members
                    .iter()
                    .any(|member| result.get(member).is_some_and(|value| value == "1"));
                if any_affirmed { "0" } else { "1" }
            }
            DerivedRule::AnyDontKnow => {
                let any_dont_know = group.members.iter().any(|member| {
                    answers
                        .get(member)
                        .is_some_and(|raw| raw.to_lowercase().ends_with("t know"))
                });
                if any_dont_know { "1" } else { "0" }
            }
        };
        result.insert(group.summary.clone(), value.to_string());
    }

    tracing::debug!(
        answered = answers.len(),
        emitted = result.len(),
        "transformed submission data"
    );

    result
}
