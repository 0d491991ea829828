//! Budget session
//!
//! One conversation's worth of state: the store plus the advisor thresholds
//! its actions read. The web server and the MCP server share a single session
//! behind a lock; the CLI `run` command owns one directly.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::actions::{
    self, DeleteExpenseParams, ProvideSuggestionParams, ResetBudgetParams, RoastParams,
    UpdateExpenseParams, UpdateIncomeParams, WhatIfScenarioParams,
};
use crate::config::AdvisorThresholds;
use crate::context::BudgetContext;
use crate::error::{Error, Result};
use crate::store::BudgetStore;

#[derive(Debug, Default)]
pub struct BudgetSession {
    store: BudgetStore,
    thresholds: AdvisorThresholds,
}

impl BudgetSession {
    pub fn new(thresholds: AdvisorThresholds) -> Self {
        Self {
            store: BudgetStore::new(),
            thresholds,
        }
    }

    pub fn store(&self) -> &BudgetStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BudgetStore {
        &mut self.store
    }

    pub fn thresholds(&self) -> &AdvisorThresholds {
        &self.thresholds
    }

    pub fn context(&self) -> BudgetContext {
        BudgetContext::from_store(&self.store)
    }

    pub fn update_income(&mut self, params: UpdateIncomeParams) -> String {
        actions::update_income(&mut self.store, params)
    }

    pub fn update_expense(&mut self, params: UpdateExpenseParams) -> String {
        actions::update_expense(&mut self.store, &self.thresholds, params)
    }

    pub fn delete_expense(&mut self, params: DeleteExpenseParams) -> String {
        actions::delete_expense(&mut self.store, params)
    }

    pub fn provide_suggestion(&self, params: ProvideSuggestionParams) -> String {
        actions::provide_suggestion(&self.store, &self.thresholds, params)
    }

    pub fn what_if_scenario(&self, params: WhatIfScenarioParams) -> String {
        actions::what_if_scenario(&self.store, params)
    }

    pub fn roast_user_spending_habits(&self, params: RoastParams) -> String {
        actions::roast_user_spending_habits(&self.store, &self.thresholds, params)
    }

    pub fn reset_budget(&mut self, params: ResetBudgetParams) -> String {
        actions::reset_budget(&mut self.store, params)
    }

    /// Run an action by name.
    ///
    /// Names match in camelCase (`updateIncome`) or snake_case
    /// (`update_income`). A `null` input is treated as `{}`.
    pub fn execute(&mut self, name: &str, input: &Value) -> Result<String> {
        let input = if input.is_null() {
            Value::Object(Default::default())
        } else {
            input.clone()
        };

        let action = resolve_action(name).ok_or_else(|| Error::UnknownAction(name.to_string()))?;
        info!(action, "Executing action");

        let response = match action {
            actions::UPDATE_INCOME => self.update_income(parse_params(action, input)?),
            actions::UPDATE_EXPENSE => self.update_expense(parse_params(action, input)?),
            actions::DELETE_EXPENSE => self.delete_expense(parse_params(action, input)?),
            actions::PROVIDE_SUGGESTION => self.provide_suggestion(parse_params(action, input)?),
            actions::WHAT_IF_SCENARIO => self.what_if_scenario(parse_params(action, input)?),
            actions::ROAST_USER_SPENDING_HABITS => {
                self.roast_user_spending_habits(parse_params(action, input)?)
            }
            actions::RESET_BUDGET => self.reset_budget(parse_params(action, input)?),
            _ => return Err(Error::UnknownAction(name.to_string())),
        };

        debug!(action, revision = self.store.revision(), "Action complete");
        Ok(response)
    }
}

/// Map a camelCase or snake_case name onto its canonical action name
fn resolve_action(name: &str) -> Option<&'static str> {
    let key: String = name
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect();

    [
        actions::UPDATE_INCOME,
        actions::UPDATE_EXPENSE,
        actions::DELETE_EXPENSE,
        actions::PROVIDE_SUGGESTION,
        actions::WHAT_IF_SCENARIO,
        actions::ROAST_USER_SPENDING_HABITS,
        actions::RESET_BUDGET,
    ]
    .into_iter()
    .find(|candidate| candidate.to_lowercase() == key)
}

fn parse_params<T: DeserializeOwned>(action: &str, input: Value) -> Result<T> {
    serde_json::from_value(input)
        .map_err(|e| Error::InvalidData(format!("Invalid parameters for {}: {}", action, e)))
}
