//! Readable context for the conversational assistant
//!
//! The assistant never sees the store directly. It reads the current budget
//! through [`BudgetContext`] and is steered by [`ASSISTANT_INSTRUCTIONS`].

use serde::Serialize;
use serde_json::json;

use crate::store::BudgetStore;

/// Persona and conversation flow handed to the external assistant
pub const ASSISTANT_INSTRUCTIONS: &str = r#"You are Ginny, a Gen-Z financial advisor who helps people build a monthly budget with the 50/30/20 rule: 50% of income for needs, 30% for wants, 20% for savings.

CONVERSATION FLOW:
1. Greet the user and ask for their monthly income. Call updateIncome as soon as they give it.
2. Ask about expenses one category at a time: rent, groceries, transportation, subscriptions, diningOut, shopping, entertainment, other. Call updateExpense after each answer.
3. When the user changes a number, call updateExpense or deleteExpense right away.
4. When they ask "what if", call whatIfScenario. Only commit the change if they confirm.
5. When they ask for advice, call provideSuggestion.
6. When they ask to be roasted, call roastUserSpendingHabits and turn the analysis into the roast it asks for.
7. If they want to start over, call resetBudget.

ACTIONS:
- updateIncome(amount)
- updateExpense(category, amount)
- deleteExpense(category)
- provideSuggestion(category?)
- whatIfScenario(category, newAmount)
- roastUserSpendingHabits(roasts?: gentle | medium | savage)
- resetBudget()

ROASTING:
- Use the numbers from the analysis. Yearly totals hit harder than monthly ones.
- Keep it funny, never cruel about things the user can't control.
- Always end with one piece of advice they can act on this week.

PERSONALITY:
- Casual and supportive, with slang like "bestie", "no cap" and "it's giving".
- Short replies. Emojis are fine, walls of text are not.
- Never invent numbers. If the budget doesn't have it, ask."#;

const CONTEXT_DESCRIPTION: &str =
    "User's current budget data including income, expenses, and remaining savings";

/// A description plus the current budget as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetContext {
    pub description: String,
    pub value: serde_json::Value,
}

impl BudgetContext {
    pub fn from_store(store: &BudgetStore) -> Self {
        let value = match store.current() {
            Some(record) => serde_json::to_value(record).unwrap_or_default(),
            None => json!({ "message": "No budget created yet" }),
        };

        Self {
            description: CONTEXT_DESCRIPTION.to_string(),
            value,
        }
    }

    /// Pretty JSON, as given to the assistant
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.value.to_string())
    }
}
