//! CLI command tests

use std::io::Write;

use clap::Parser;
use ginny_core::{BudgetSession, Category, GinnyConfig};

use crate::cli::{Cli, Commands, ConfigAction};
use crate::commands::{self, param_summary, run_script};

const SCRIPT: &str = r#"
# monthly budget walkthrough
{"action": "updateIncome", "params": {"amount": 4000}}
{"action": "updateExpense", "params": {"category": "rent", "amount": 1500}}
{"action": "update_expense", "params": {"category": "diningOut", "amount": 200}}

{"action": "provideSuggestion", "params": {"category": "diningOut"}}
{"action": "deleteExpense", "params": {"category": "rent"}}
{"action": "roastUserSpendingHabits"}
"#;

fn write_script(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ========== Run Command Tests ==========

#[test]
fn test_run_script() {
    let mut session = BudgetSession::default();
    let responses = run_script(&mut session, SCRIPT).unwrap();

    assert_eq!(responses.len(), 6);
    assert_eq!(responses[0].0, "updateIncome");
    assert!(responses[3].1.contains("save $120/month"));
    assert!(responses[5].1.starts_with("ROAST DATA ANALYSIS (medium):"));

    let record = session.store().current().unwrap();
    assert_eq!(record.total_expenses(), 200.0);
    assert_eq!(record.remaining_for_savings(), 3800.0);
    assert!(!record.has_expense(&Category::Rent));
}

#[test]
fn test_run_script_unknown_action_reports_line() {
    let mut session = BudgetSession::default();
    let script = "{\"action\": \"updateIncome\", \"params\": {\"amount\": 100}}\n\
                  {\"action\": \"buyCrypto\"}\n";

    let err = run_script(&mut session, script).unwrap_err();
    assert!(format!("{:#}", err).contains("Line 2"));
    assert!(format!("{:#}", err).contains("buyCrypto"));
}

#[test]
fn test_run_script_malformed_line() {
    let mut session = BudgetSession::default();
    let err = run_script(&mut session, "not json").unwrap_err();
    assert!(err.to_string().contains("Line 1"));
}

#[test]
fn test_cmd_run_with_export() {
    let script = write_script(SCRIPT);
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("budget.csv");

    commands::cmd_run(&GinnyConfig::default(), script.path(), Some(&export)).unwrap();

    let csv = std::fs::read_to_string(&export).unwrap();
    assert!(csv.starts_with("Category,Amount,Type,Percentage\n"));
    assert!(csv.contains("diningOut,200,wants,5.0%"));
    assert!(csv.contains("Remaining for Savings,3800,,"));
}

#[test]
fn test_cmd_run_export_without_budget_fails() {
    let script = write_script("{\"action\": \"resetBudget\"}\n");
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("budget.csv");

    let result = commands::cmd_run(&GinnyConfig::default(), script.path(), Some(&export));
    assert!(result.is_err());
    assert!(!export.exists());
}

#[test]
fn test_cmd_run_missing_file() {
    let result = commands::cmd_run(
        &GinnyConfig::default(),
        std::path::Path::new("/nonexistent/script.jsonl"),
        None,
    );
    assert!(result.is_err());
}

// ========== Actions Command Tests ==========

#[test]
fn test_cmd_actions() {
    assert!(commands::cmd_actions(false, false).is_ok());
    assert!(commands::cmd_actions(true, false).is_ok());
    assert!(commands::cmd_actions(false, true).is_ok());
}

#[test]
fn test_param_summary() {
    let schema = serde_json::json!({
        "type": "object",
        "properties": {
            "amount": {"type": "number"},
            "category": {"type": "string"},
            "note": {"type": "string"}
        },
        "required": ["category", "amount"]
    });
    assert_eq!(param_summary(&schema), "amount, category, note?");
    assert_eq!(param_summary(&serde_json::json!({"type": "object"})), "");
}

// ========== Config Command Tests ==========

#[test]
fn test_load_config_explicit() {
    let file = write_script("[advisor]\ndining_out_cap = 50.0\n");
    let config = commands::load_config(Some(file.path())).unwrap();
    assert_eq!(config.advisor.dining_out_cap, 50.0);
    assert_eq!(config.server.port, 3000);
}

#[test]
fn test_load_config_missing_explicit() {
    let result = commands::load_config(Some(std::path::Path::new("/nonexistent/ginny.toml")));
    assert!(result.is_err());
}

#[test]
fn test_cmd_run_uses_configured_thresholds() {
    let config_file = write_script("[advisor]\ndining_out_threshold = 10.0\ndining_out_cap = 5.0\n");
    let config = commands::load_config(Some(config_file.path())).unwrap();

    let mut session = BudgetSession::new(config.advisor.clone());
    let responses = run_script(
        &mut session,
        "{\"action\": \"updateIncome\", \"params\": {\"amount\": 1000}}\n\
         {\"action\": \"updateExpense\", \"params\": {\"category\": \"diningOut\", \"amount\": 25}}\n\
         {\"action\": \"provideSuggestion\", \"params\": {\"category\": \"diningOut\"}}\n",
    )
    .unwrap();
    assert!(responses[2].1.contains("from $25 to $5"));
}

#[test]
fn test_cmd_config_show() {
    assert!(commands::cmd_config_show(&GinnyConfig::default()).is_ok());
    assert!(commands::cmd_config_path().is_ok());
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_serve_args() {
    let cli = Cli::try_parse_from([
        "ginny",
        "serve",
        "--port",
        "8080",
        "--mcp-port",
        "8081",
        "--verbose",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Commands::Serve {
            port,
            host,
            mcp_port,
            ..
        } => {
            assert_eq!(port, Some(8080));
            assert_eq!(host, None);
            assert_eq!(mcp_port, Some(8081));
        }
        _ => panic!("expected serve"),
    }
}

#[test]
fn test_parse_run_and_config_args() {
    let cli = Cli::try_parse_from([
        "ginny",
        "--config",
        "ginny.toml",
        "run",
        "-f",
        "script.jsonl",
        "-e",
        "out.csv",
    ])
    .unwrap();
    assert_eq!(cli.config.unwrap().to_str(), Some("ginny.toml"));
    assert!(matches!(cli.command, Commands::Run { export: Some(_), .. }));

    let cli = Cli::try_parse_from(["ginny", "config", "path"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: Some(ConfigAction::Path)
        }
    ));
}

#[test]
fn test_actions_flags_conflict() {
    assert!(Cli::try_parse_from(["ginny", "actions", "--json", "--instructions"]).is_err());
}
