//! Domain models for Ginny

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Share of income targeted at needs
pub const NEEDS_SHARE: f64 = 0.5;

/// Share of income targeted at wants
pub const WANTS_SHARE: f64 = 0.3;

/// Share of income targeted at savings (the remainder after needs and wants)
pub const SAVINGS_SHARE: f64 = 0.2;

/// Largest accepted income or expense amount.
///
/// Keeps every sum over a record finite: no realistic number of categories
/// at this ceiling can overflow an `f64`.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Whether `amount` may enter a budget: finite, non-negative, at most [`MAX_AMOUNT`]
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && (0.0..=MAX_AMOUNT).contains(&amount)
}

/// An expense category
///
/// Eight canonical categories drive classification. Anything else the user
/// names becomes [`Category::Custom`] and is classified as a want. Custom
/// names can only be built through [`Category::parse`], so a canonical name
/// never ends up as a custom key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Rent,
    Groceries,
    Transportation,
    Subscriptions,
    DiningOut,
    Shopping,
    Entertainment,
    Other,
    Custom(CustomName),
}

/// Name of a user-defined category: trimmed and lowercased, never canonical
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomName(String);

impl CustomName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Category {
    /// Parse a user- or assistant-supplied category name.
    ///
    /// Case, spaces, underscores and hyphens are ignored when matching the
    /// canonical names, so "Dining Out", "dining_out" and "diningOut" all map
    /// to [`Category::DiningOut`]. Custom names are trimmed and lowercased, so
    /// "Gym" and "gym" are the same expense. Never fails.
    pub fn parse(s: &str) -> Self {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "rent" => Self::Rent,
            "groceries" => Self::Groceries,
            "transportation" => Self::Transportation,
            "subscriptions" => Self::Subscriptions,
            "diningout" => Self::DiningOut,
            "shopping" => Self::Shopping,
            "entertainment" => Self::Entertainment,
            "other" => Self::Other,
            _ => Self::Custom(CustomName(s.trim().to_lowercase())),
        }
    }

    /// Canonical name, as used for map keys and in assistant responses
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rent => "rent",
            Self::Groceries => "groceries",
            Self::Transportation => "transportation",
            Self::Subscriptions => "subscriptions",
            Self::DiningOut => "diningOut",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
            Self::Custom(name) => name.as_str(),
        }
    }

    /// The eight canonical categories, in display order
    pub fn canonical() -> &'static [Category] {
        &[
            Self::Rent,
            Self::Groceries,
            Self::Transportation,
            Self::Subscriptions,
            Self::DiningOut,
            Self::Shopping,
            Self::Entertainment,
            Self::Other,
        ]
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Needs/wants classification of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetClass {
    Needs,
    Wants,
}

impl BudgetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Needs => "needs",
            Self::Wants => "wants",
        }
    }
}

impl std::fmt::Display for BudgetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 50/30/20 targets in currency units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetRule {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl BudgetRule {
    /// Split an income by the 50/30/20 rule.
    ///
    /// Savings takes the remainder so the three targets always add back up
    /// to the income.
    pub fn from_income(income: f64) -> Self {
        let needs = income * NEEDS_SHARE;
        let wants = income * WANTS_SHARE;
        Self {
            needs,
            wants,
            savings: income - needs - wants,
        }
    }

    pub fn target(&self, class: BudgetClass) -> f64 {
        match class {
            BudgetClass::Needs => self.needs,
            BudgetClass::Wants => self.wants,
        }
    }
}

/// The budget snapshot
///
/// Every field is derived at construction time, so a `BudgetRecord` is always
/// internally consistent. Updates produce a new record; nothing mutates one in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRecord {
    monthly_income: f64,
    expenses: BTreeMap<Category, f64>,
    rule: BudgetRule,
    total_expenses: f64,
    remaining_for_savings: f64,
}

impl BudgetRecord {
    /// A fresh record with no expenses
    pub fn new(monthly_income: f64) -> Self {
        Self::derive(monthly_income, BTreeMap::new())
    }

    fn derive(monthly_income: f64, expenses: BTreeMap<Category, f64>) -> Self {
        let total_expenses: f64 = expenses.values().sum();
        Self {
            monthly_income,
            rule: BudgetRule::from_income(monthly_income),
            total_expenses,
            remaining_for_savings: monthly_income - total_expenses,
            expenses,
        }
    }

    /// Same expenses, new income
    pub fn with_income(&self, monthly_income: f64) -> Self {
        Self::derive(monthly_income, self.expenses.clone())
    }

    /// Insert or overwrite one expense
    pub fn with_expense(&self, category: Category, amount: f64) -> Self {
        let mut expenses = self.expenses.clone();
        expenses.insert(category, amount);
        Self::derive(self.monthly_income, expenses)
    }

    /// Remove one expense (missing categories are ignored)
    pub fn without_expense(&self, category: &Category) -> Self {
        let mut expenses = self.expenses.clone();
        expenses.remove(category);
        Self::derive(self.monthly_income, expenses)
    }

    pub fn monthly_income(&self) -> f64 {
        self.monthly_income
    }

    pub fn expenses(&self) -> &BTreeMap<Category, f64> {
        &self.expenses
    }

    /// Amount for a category, 0 when it has not been set
    pub fn expense(&self, category: &Category) -> f64 {
        self.expenses.get(category).copied().unwrap_or(0.0)
    }

    pub fn has_expense(&self, category: &Category) -> bool {
        self.expenses.contains_key(category)
    }

    pub fn rule(&self) -> &BudgetRule {
        &self.rule
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_expenses
    }

    pub fn remaining_for_savings(&self) -> f64 {
        self.remaining_for_savings
    }
}
