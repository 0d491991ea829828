//! Derivation engine
//!
//! Pure functions over a [`BudgetRecord`]: classification, per-class sums,
//! percentages of income, and overage/shortfall against the 50/30/20 targets.
//! [`breakdown`] bundles them into the shape the budget table and the
//! 50/30/20 tiles render from.

use serde::Serialize;

use crate::models::{BudgetClass, BudgetRecord, Category};

/// Needs iff rent, groceries or transportation. Everything else, including
/// custom categories, is a want.
pub fn classify(category: &Category) -> BudgetClass {
    match category {
        Category::Rent | Category::Groceries | Category::Transportation => BudgetClass::Needs,
        _ => BudgetClass::Wants,
    }
}

/// Sum of all expenses whose category falls in `class`
pub fn sum_by_class(record: &BudgetRecord, class: BudgetClass) -> f64 {
    record
        .expenses()
        .iter()
        .filter(|(category, _)| classify(category) == class)
        .map(|(_, amount)| amount)
        .sum()
}

/// `amount` as a percentage of `income`.
///
/// An income that is zero, negative or not finite has no meaningful ratio;
/// the result is 0 rather than an infinity or NaN. Same for a non-finite
/// amount.
pub fn percent_of_income(amount: f64, income: f64) -> f64 {
    if !income.is_finite() || income <= 0.0 || !amount.is_finite() {
        return 0.0;
    }
    amount / income * 100.0
}

/// How far `current` exceeds `target` (never negative)
pub fn overage(current: f64, target: f64) -> f64 {
    (current - target).max(0.0)
}

/// How far `remaining` falls short of `target` (never negative)
pub fn shortfall(remaining: f64, target: f64) -> f64 {
    (target - remaining).max(0.0)
}

/// Remaining-for-savings as a percentage of income
pub fn savings_rate(record: &BudgetRecord) -> f64 {
    percent_of_income(record.remaining_for_savings(), record.monthly_income())
}

/// Largest want by absolute amount. Ties keep the first in category order.
pub fn worst_want(record: &BudgetRecord) -> Option<(&Category, f64)> {
    let mut worst: Option<(&Category, f64)> = None;
    for (category, &amount) in record.expenses() {
        if classify(category) != BudgetClass::Wants {
            continue;
        }
        if amount > worst.map_or(0.0, |(_, best)| best) {
            worst = Some((category, amount));
        }
    }
    worst
}

/// One row of the expense table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRow {
    pub category: Category,
    pub class: BudgetClass,
    pub amount: f64,
    pub percent_of_income: f64,
}

/// Needs or wants: actual spending against its target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBreakdown {
    pub target: f64,
    pub current: f64,
    pub percent_of_income: f64,
    pub over_by: f64,
}

/// Savings: what is left against the savings target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsBreakdown {
    pub target: f64,
    pub current: f64,
    pub percent_of_income: f64,
    pub short_by: f64,
}

/// Everything the presentation layer renders for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetBreakdown {
    pub monthly_income: f64,
    pub rows: Vec<ExpenseRow>,
    pub needs: ClassBreakdown,
    pub wants: ClassBreakdown,
    pub savings: SavingsBreakdown,
    pub total_expenses: f64,
    pub total_percent_of_income: f64,
    pub over_budget: bool,
}

fn class_breakdown(record: &BudgetRecord, class: BudgetClass) -> ClassBreakdown {
    let target = record.rule().target(class);
    let current = sum_by_class(record, class);
    ClassBreakdown {
        target,
        current,
        percent_of_income: percent_of_income(current, record.monthly_income()),
        over_by: overage(current, target),
    }
}

/// Derive the full breakdown for a snapshot
pub fn breakdown(record: &BudgetRecord) -> BudgetBreakdown {
    let income = record.monthly_income();

    let rows = record
        .expenses()
        .iter()
        .map(|(category, &amount)| ExpenseRow {
            category: category.clone(),
            class: classify(category),
            amount,
            percent_of_income: percent_of_income(amount, income),
        })
        .collect();

    let remaining = record.remaining_for_savings();
    let savings = SavingsBreakdown {
        target: record.rule().savings,
        current: remaining,
        percent_of_income: percent_of_income(remaining, income),
        short_by: shortfall(remaining, record.rule().savings),
    };

    BudgetBreakdown {
        monthly_income: income,
        rows,
        needs: class_breakdown(record, BudgetClass::Needs),
        wants: class_breakdown(record, BudgetClass::Wants),
        savings,
        total_expenses: record.total_expenses(),
        total_percent_of_income: percent_of_income(record.total_expenses(), income),
        over_budget: remaining < 0.0,
    }
}
