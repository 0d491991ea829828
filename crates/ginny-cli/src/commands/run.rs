//! Script replay
//!
//! Feeds a JSONL file of actions through a fresh session, the same way the
//! assistant would call them, and prints each response.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use ginny_core::export::export_csv_to_file;
use ginny_core::{BudgetSession, GinnyConfig};

/// One script line
#[derive(Debug, Deserialize)]
pub struct ScriptStep {
    pub action: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Run every step in `script` against `session`, returning (action, response) pairs
pub fn run_script(session: &mut BudgetSession, script: &str) -> Result<Vec<(String, String)>> {
    let mut responses = Vec::new();

    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;

        let step: ScriptStep = serde_json::from_str(line)
            .with_context(|| format!("Line {}: not a valid action step", line_no))?;
        let response = session
            .execute(&step.action, &step.params)
            .with_context(|| format!("Line {}: {} failed", line_no, step.action))?;

        responses.push((step.action, response));
    }

    Ok(responses)
}

pub fn cmd_run(config: &GinnyConfig, file: &Path, export: Option<&Path>) -> Result<()> {
    let script = fs::read_to_string(file)
        .with_context(|| format!("Failed to read script {}", file.display()))?;

    let mut session = BudgetSession::new(config.advisor.clone());
    let responses = run_script(&mut session, &script)?;
    info!(steps = responses.len(), "Script complete");

    for (action, response) in &responses {
        println!("> {}", action);
        println!("{}", response);
        println!();
    }

    match session.store().current() {
        Some(record) => {
            println!(
                "💰 Income ${} | Expenses ${} | Left for savings ${}",
                record.monthly_income(),
                record.total_expenses(),
                record.remaining_for_savings()
            );
            if let Some(path) = export {
                export_csv_to_file(record, path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("📄 Exported to {}", path.display());
            }
        }
        None => {
            println!("No budget at end of script");
            if let Some(path) = export {
                bail!("Nothing to export to {}: no budget", path.display());
            }
        }
    }

    Ok(())
}
