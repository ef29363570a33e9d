use broker_readiness::error::AppError;
use broker_readiness::workflows::form_export::{BatchImporter, ScoredRow};
use broker_readiness::workflows::onboarding::{analyze, AnalysisResult, RawOnboardingResponse};
use clap::Args;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Questionnaire JSON using the form's camelCase field names
    #[arg(long)]
    pub(crate) file: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Form export CSV with one questionnaire per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit the scored rows as a JSON array instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    println!("{}", score_report(&args.file)?);
    Ok(())
}

/// Result JSON followed by the consultant briefing.
pub(crate) fn score_report(path: &Path) -> Result<String, AppError> {
    let raw = load_response(path)?;
    let result = analyze(&raw)?;

    Ok(format!(
        "{}\n\n{}",
        serde_json::to_string_pretty(&result)?,
        result.briefing()
    ))
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let rows = BatchImporter::from_path(&args.csv)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows_as_json(&rows))?);
    } else {
        print!("{}", render_batch_table(&rows));
    }
    Ok(())
}

fn load_response(path: &Path) -> Result<RawOnboardingResponse, AppError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub(crate) fn rows_as_json(rows: &[ScoredRow]) -> serde_json::Value {
    rows.iter()
        .map(|row| {
            json!({
                "row": row.row,
                "responseId": row.response_id.as_ref().map(|id| id.0.as_str()),
                "result": row.result,
                "briefing": row.result.briefing(),
            })
        })
        .collect()
}

pub(crate) fn render_batch_table(rows: &[ScoredRow]) -> String {
    let mut output = format!(
        "{:<5} {:<14} {:>5} {:>5} {:>5} {:>5} {:>5}  {:<10} {}\n",
        "row", "response", "ops", "bud", "grw", "int", "prob", "band", "sales angle"
    );
    for row in rows {
        let id = row
            .response_id
            .as_ref()
            .map(|id| id.0.as_str())
            .unwrap_or("-");
        output.push_str(&format_row(row.row, id, &row.result));
    }

    let flagged = rows
        .iter()
        .filter(|row| !row.result.risk_flags.is_empty())
        .count();
    output.push_str(&format!(
        "{} responses scored, {} with risk flags\n",
        rows.len(),
        flagged
    ));
    output
}

fn format_row(row: usize, id: &str, result: &AnalysisResult) -> String {
    let mut line = format!(
        "{:<5} {:<14} {:>5} {:>5} {:>5} {:>5} {:>4}%  {:<10} {}\n",
        row,
        id,
        result.operational_score,
        result.budget_score,
        result.growth_score,
        result.intent_score,
        result.success_probability,
        result.success_band.label(),
        result.primary_sales_angle.label(),
    );
    for flag in &result.risk_flags {
        line.push_str(&format!("      ! {}\n", flag.name()));
    }
    line
}
