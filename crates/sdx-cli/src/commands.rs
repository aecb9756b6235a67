//! Command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::{info, info_span};

use sdx_cli::logging::redact_value;
use sdx_model::SurveyResponse;
use sdx_output::{SubmissionPacker, tkn_lines, tkn_name};
use sdx_transform::{default_registry, transform};

use crate::cli::{PackArgs, QuestionsArgs, TknArgs};

fn load_submission(path: &Path) -> Result<SurveyResponse> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read submission {}", path.display()))?;
    serde_json::from_str(&text).context("parse submission JSON")
}

pub fn run_pack(args: &PackArgs) -> Result<()> {
    let response = load_submission(&args.submission)?;
    let span = info_span!(
        "pack",
        survey_id = %response.survey_id,
        tx_id = response.tx_id.as_deref().unwrap_or_default(),
    );
    let _guard = span.enter();
    info!(
        ru_ref = %redact_value(response.respondent_ref()),
        period = %response.collection.period,
        "packing submission"
    );

    let table = default_registry().get(&response.survey_id, &response.collection.instrument_id)?;
    let mut packer = SubmissionPacker::new();
    let bytes = packer.pack(table, &response, args.sequence_no)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_archive_path(&args.submission, &response.survey_id, args.sequence_no));
    fs::write(&output, &bytes)
        .with_context(|| format!("write archive {}", output.display()))?;
    info!(archive = %output.display(), bytes = bytes.len(), "archive written");
    Ok(())
}

fn default_archive_path(submission: &Path, survey_id: &str, sequence_no: u32) -> PathBuf {
    let name = format!("{}.zip", tkn_name(survey_id, sequence_no));
    submission
        .parent()
        .map_or_else(|| PathBuf::from(&name), |dir| dir.join(&name))
}

pub fn run_tkn(args: &TknArgs) -> Result<()> {
    let response = load_submission(&args.submission)?;
    let table = default_registry().get(&response.survey_id, &response.collection.instrument_id)?;
    let data = transform(table, &response.data);
    for line in tkn_lines(
        &response.survey_id,
        response.respondent_ref(),
        &response.collection.period,
        &data,
    ) {
        println!("{line}");
    }
    Ok(())
}

pub fn run_questions(args: &QuestionsArgs) -> Result<()> {
    let table = default_registry().get(&args.survey_id, &args.instrument_id)?;
    let mut listing = Table::new();
    listing
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Question", "Default", "Format"]);
    for entry in table.entries() {
        listing.add_row(vec![
            entry.id.clone(),
            entry.default.to_string(),
            entry.format.to_string(),
        ]);
    }
    println!("{listing}");
    Ok(())
}
