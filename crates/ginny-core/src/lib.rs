//! Ginny Core Library
//!
//! Shared functionality for the Ginny budgeting assistant:
//! - Budget record store holding the single current snapshot
//! - Derivation engine for the 50/30/20 (needs/wants/savings) rule
//! - Action surface describing the operations an external assistant may call
//! - Readable context and persona instructions for that assistant
//! - CSV export of the current budget
//! - Configuration loading

pub mod actions;
pub mod config;
pub mod context;
pub mod derivation;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
pub mod store;

pub use actions::{action_definitions, ActionDefinition, RoastIntensity};
pub use config::{AdvisorThresholds, GinnyConfig, ServerSettings};
pub use context::{BudgetContext, ASSISTANT_INSTRUCTIONS};
pub use derivation::{BudgetBreakdown, ClassBreakdown, ExpenseRow, SavingsBreakdown};
pub use error::{Error, Result};
pub use models::{BudgetClass, BudgetRecord, BudgetRule, Category, CustomName, MAX_AMOUNT};
pub use session::BudgetSession;
pub use store::BudgetStore;
