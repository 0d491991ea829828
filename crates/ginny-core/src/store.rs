//! Budget record store
//!
//! Owns the single current [`BudgetRecord`] (or its absence) and exposes the
//! four mutation operations. Every operation publishes a brand new
//! `Arc<BudgetRecord>`; snapshots handed out earlier are never touched, so a
//! reader holding one never sees a half-updated record.
//!
//! All operations are total: they never fail and never panic. Input
//! validation (negative or non-finite amounts) belongs to the action surface.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{BudgetRecord, Category};

#[derive(Debug, Default)]
pub struct BudgetStore {
    current: Option<Arc<BudgetRecord>>,
    revision: u64,
    updated_at: Option<DateTime<Utc>>,
}

impl BudgetStore {
    /// An empty store (no budget yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, if a budget exists
    pub fn snapshot(&self) -> Option<Arc<BudgetRecord>> {
        self.current.clone()
    }

    /// Borrow the current record without cloning the handle
    pub fn current(&self) -> Option<&BudgetRecord> {
        self.current.as_deref()
    }

    pub fn has_budget(&self) -> bool {
        self.current.is_some()
    }

    /// Bumped every time the record is replaced or cleared
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// When the record was last replaced or cleared
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Set the monthly income, creating the budget if it does not exist yet
    pub fn set_income(&mut self, amount: f64) -> Arc<BudgetRecord> {
        let next = match self.current.as_deref() {
            Some(prev) => prev.with_income(amount),
            None => BudgetRecord::new(amount),
        };
        debug!(income = amount, "Income set");
        self.publish(next)
    }

    /// Insert or overwrite one expense.
    ///
    /// Returns `None` without touching anything when no budget exists.
    pub fn set_expense(&mut self, category: Category, amount: f64) -> Option<Arc<BudgetRecord>> {
        let next = self.current.as_deref()?.with_expense(category.clone(), amount);
        debug!(category = %category, amount, "Expense set");
        Some(self.publish(next))
    }

    /// Remove one expense. Missing categories are a silent no-op.
    ///
    /// Returns `None` without touching anything when no budget exists.
    pub fn delete_expense(&mut self, category: &Category) -> Option<Arc<BudgetRecord>> {
        let next = self.current.as_deref()?.without_expense(category);
        debug!(category = %category, "Expense deleted");
        Some(self.publish(next))
    }

    /// Discard the budget
    pub fn reset(&mut self) {
        self.current = None;
        self.touch();
        debug!("Budget reset");
    }

    fn publish(&mut self, record: BudgetRecord) -> Arc<BudgetRecord> {
        let record = Arc::new(record);
        self.current = Some(Arc::clone(&record));
        self.touch();
        record
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_absent() {
        let store = BudgetStore::new();
        assert!(store.snapshot().is_none());
        assert!(!store.has_budget());
        assert_eq!(store.revision(), 0);
        assert!(store.updated_at().is_none());
    }

    #[test]
    fn test_set_income_creates_record() {
        let mut store = BudgetStore::new();
        let record = store.set_income(4000.0);
        assert_eq!(record.monthly_income(), 4000.0);
        assert_eq!(record.total_expenses(), 0.0);
        assert_eq!(record.remaining_for_savings(), 4000.0);
        assert_eq!(store.revision(), 1);
        assert!(store.updated_at().is_some());
    }

    #[test]
    fn test_set_expense_without_budget_is_noop() {
        let mut store = BudgetStore::new();
        assert!(store.set_expense(Category::Rent, 1500.0).is_none());
        assert!(store.snapshot().is_none());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_delete_expense_without_budget_is_noop() {
        let mut store = BudgetStore::new();
        assert!(store.delete_expense(&Category::Rent).is_none());
        assert!(store.snapshot().is_none());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_set_income_preserves_expenses() {
        let mut store = BudgetStore::new();
        store.set_income(4000.0);
        store.set_expense(Category::Rent, 1500.0);
        let record = store.set_income(5000.0);
        assert_eq!(record.expense(&Category::Rent), 1500.0);
        assert_eq!(record.total_expenses(), 1500.0);
        assert_eq!(record.remaining_for_savings(), 3500.0);
        assert_eq!(record.rule().savings, 1000.0);
    }

    #[test]
    fn test_old_snapshot_is_untouched() {
        let mut store = BudgetStore::new();
        store.set_income(4000.0);
        let before = store.snapshot().unwrap();

        store.set_expense(Category::Rent, 1500.0);

        assert_eq!(before.total_expenses(), 0.0);
        assert!(!before.has_expense(&Category::Rent));
        assert_eq!(store.current().unwrap().total_expenses(), 1500.0);
    }

    #[test]
    fn test_set_expense_idempotent() {
        let mut store = BudgetStore::new();
        store.set_income(4000.0);
        let once = store.set_expense(Category::DiningOut, 200.0).unwrap();
        let twice = store.set_expense(Category::DiningOut, 200.0).unwrap();
        assert_eq!(*once, *twice);
    }

    #[test]
    fn test_delete_missing_category_leaves_record_equal() {
        let mut store = BudgetStore::new();
        store.set_income(4000.0);
        let before = store.set_expense(Category::Rent, 1500.0).unwrap();
        let after = store.delete_expense(&Category::Shopping).unwrap();
        assert_eq!(*before, *after);
    }

    #[test]
    fn test_reset_clears_record() {
        let mut store = BudgetStore::new();
        store.set_income(4000.0);
        store.reset();
        assert!(store.snapshot().is_none());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_reset_when_absent() {
        let mut store = BudgetStore::new();
        store.reset();
        assert!(store.snapshot().is_none());
    }
}
