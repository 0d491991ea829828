//! CSV export of a budget snapshot

use std::fs;
use std::path::Path;

use tracing::info;

use crate::derivation::{classify, percent_of_income};
use crate::error::Result;
use crate::models::BudgetRecord;

/// Suggested filename for downloads
pub const DEFAULT_EXPORT_FILENAME: &str = "my-ginny-budget.csv";

/// Render a snapshot as CSV.
///
/// One row per expense, then a blank line and the two summary rows:
///
/// ```text
/// Category,Amount,Type,Percentage
/// rent,1500,needs,37.5%
///
/// Total Expenses,1500,,
/// Remaining for Savings,2500,,
/// ```
pub fn export_csv(record: &BudgetRecord) -> String {
    let income = record.monthly_income();
    let mut out = String::from("Category,Amount,Type,Percentage\n");

    for (category, &amount) in record.expenses() {
        out.push_str(&format!(
            "{},{},{},{:.1}%\n",
            escape_csv_field(category.as_str()),
            amount,
            classify(category),
            percent_of_income(amount, income)
        ));
    }

    out.push_str(&format!("\nTotal Expenses,{},,\n", record.total_expenses()));
    out.push_str(&format!(
        "Remaining for Savings,{},,\n",
        record.remaining_for_savings()
    ));
    out
}

/// Write the CSV export to `path`
pub fn export_csv_to_file(record: &BudgetRecord, path: &Path) -> Result<()> {
    fs::write(path, export_csv(record))?;
    info!(
        path = %path.display(),
        expenses = record.expenses().len(),
        "Exported budget"
    );
    Ok(())
}

/// Escape a field for CSV output
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("rent"), "rent");
        assert_eq!(escape_csv_field("bills, misc"), "\"bills, misc\"");
        assert_eq!(escape_csv_field("the \"fun\" fund"), "\"the \"\"fun\"\" fund\"");
    }

    #[test]
    fn test_export_layout() {
        let record = BudgetRecord::new(4000.0)
            .with_expense(Category::Rent, 1500.0)
            .with_expense(Category::DiningOut, 200.0);

        let csv = export_csv(&record);
        assert_eq!(
            csv,
            "Category,Amount,Type,Percentage\n\
             rent,1500,needs,37.5%\n\
             diningOut,200,wants,5.0%\n\
             \n\
             Total Expenses,1700,,\n\
             Remaining for Savings,2300,,\n"
        );
    }

    #[test]
    fn test_export_empty_budget() {
        let csv = export_csv(&BudgetRecord::new(4000.0));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Category,Amount,Type,Percentage",
                "",
                "Total Expenses,0,,",
                "Remaining for Savings,4000,,",
            ]
        );
    }

    #[test]
    fn test_export_custom_category_escaped() {
        let record = BudgetRecord::new(1000.0).with_expense(Category::parse("coffee, tea"), 25.0);
        let csv = export_csv(&record);
        assert!(csv.contains("\"coffee, tea\",25,wants,2.5%\n"));
    }

    #[test]
    fn test_export_zero_income() {
        let record = BudgetRecord::new(0.0).with_expense(Category::Shopping, 10.0);
        let csv = export_csv(&record);
        assert!(csv.contains("shopping,10,wants,0.0%"));
        assert!(csv.contains("Remaining for Savings,-10,,"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILENAME);
        let record = BudgetRecord::new(4000.0).with_expense(Category::Rent, 1500.0);

        export_csv_to_file(&record, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, export_csv(&record));
    }
}
