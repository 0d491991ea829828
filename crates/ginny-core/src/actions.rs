//! Action surface for the budgeting assistant
//!
//! These are the only operations the external conversational assistant can
//! invoke. Each action has a parameter struct (its JSON Schema is what the
//! assistant sees) and a handler that performs zero or more store operations
//! and returns a human-readable string.
//!
//! Handlers never fail. A missing budget or an unusable amount is answered
//! with a guidance string and the store is left untouched. Dispatch by name
//! lives on [`crate::session::BudgetSession::execute`].

use serde::{Deserialize, Serialize};

use crate::config::AdvisorThresholds;
use crate::derivation::{percent_of_income, savings_rate, sum_by_class, worst_want};
use crate::models::{BudgetClass, Category, MAX_AMOUNT};
use crate::store::BudgetStore;

pub const UPDATE_INCOME: &str = "updateIncome";
pub const UPDATE_EXPENSE: &str = "updateExpense";
pub const DELETE_EXPENSE: &str = "deleteExpense";
pub const PROVIDE_SUGGESTION: &str = "provideSuggestion";
pub const WHAT_IF_SCENARIO: &str = "whatIfScenario";
pub const ROAST_USER_SPENDING_HABITS: &str = "roastUserSpendingHabits";
pub const RESET_BUDGET: &str = "resetBudget";

pub const NO_BUDGET_SUGGESTION: &str =
    "Create a budget first by telling me your income and expenses!";
pub const NO_BUDGET_WHAT_IF: &str = "Create a budget first! Tell me your monthly income to get started.";
pub const NO_BUDGET_ROAST: &str = "Bestie, I can't roast you yet - you haven't told me your budget! \
     That's like showing up to a roast battle unarmed. Create a budget first.";
pub const NO_BUDGET_EXPENSE: &str = "I need your monthly income before I can track expenses. \
     Create a budget first by telling me what you make per month!";

/// `$1500`, `$12.5`: rounded to cents, trailing zeros dropped
fn dollars(amount: f64) -> String {
    let cents = format!("{:.2}", amount);
    format!("${}", cents.trim_end_matches('0').trim_end_matches('.'))
}

/// Guidance for an amount the store must not see, or `None` if it is usable
fn reject_amount(amount: f64, what: &str) -> Option<String> {
    if !amount.is_finite() {
        Some(format!(
            "Hmm, that doesn't look like a real number for your {}. \
             Give me a dollar amount like 1500.",
            what
        ))
    } else if amount < 0.0 {
        Some(format!(
            "Your {} can't be negative (got {}). Give me a dollar amount of zero or more.",
            what,
            dollars(amount)
        ))
    } else if amount > MAX_AMOUNT {
        Some(format!(
            "Bestie, that {} is not a real monthly number. Keep it at {} or less.",
            what,
            dollars(MAX_AMOUNT)
        ))
    } else {
        None
    }
}

fn parse_category(raw: &str) -> Option<Category> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(Category::parse(raw))
    }
}

const MISSING_CATEGORY: &str = "Which category? Try rent, groceries, transportation, \
     subscriptions, diningOut, shopping, entertainment, or other.";

// =============================================================================
// updateIncome
// =============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateIncomeParams {
    /// Monthly income in dollars
    #[schemars(description = "Monthly income in dollars")]
    pub amount: f64,
}

pub fn update_income(store: &mut BudgetStore, params: UpdateIncomeParams) -> String {
    if let Some(rejection) = reject_amount(params.amount, "income") {
        return rejection;
    }

    store.set_income(params.amount);
    format!(
        "Income updated to {}/month! Let's start tracking your expenses.",
        dollars(params.amount)
    )
}

// =============================================================================
// updateExpense
// =============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateExpenseParams {
    /// Category name (canonical or custom)
    #[schemars(
        description = "Expense category (rent, groceries, transportation, subscriptions, diningOut, shopping, entertainment, other)"
    )]
    pub category: String,

    /// Monthly amount
    #[schemars(description = "Monthly amount spent in this category")]
    pub amount: f64,
}

pub fn update_expense(
    store: &mut BudgetStore,
    thresholds: &AdvisorThresholds,
    params: UpdateExpenseParams,
) -> String {
    let Some(category) = parse_category(&params.category) else {
        return MISSING_CATEGORY.to_string();
    };
    if let Some(rejection) = reject_amount(params.amount, &format!("{} amount", category)) {
        return rejection;
    }

    if store.set_expense(category.clone(), params.amount).is_none() {
        return NO_BUDGET_EXPENSE.to_string();
    }

    let amount = params.amount;
    let commentary = match category {
        Category::DiningOut if amount > thresholds.dining_out_commentary => {
            "That's a lot of DoorDash bestie 💀"
        }
        Category::Shopping if amount > thresholds.shopping_commentary => {
            "Okay I see you shopping 👀"
        }
        Category::Subscriptions if amount > thresholds.subscriptions_commentary => {
            "Do you even use all those subscriptions tho? 🤔"
        }
        _ => "Looking good! 💅",
    };

    format!(
        "Got it! {} set to {}/month. {}",
        category,
        dollars(amount),
        commentary
    )
}

// =============================================================================
// deleteExpense
// =============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteExpenseParams {
    #[schemars(description = "Category to remove")]
    pub category: String,
}

pub fn delete_expense(store: &mut BudgetStore, params: DeleteExpenseParams) -> String {
    let Some(category) = parse_category(&params.category) else {
        return MISSING_CATEGORY.to_string();
    };

    match store.delete_expense(&category) {
        Some(_) => format!("{} removed from your budget!", category),
        None => NO_BUDGET_EXPENSE.to_string(),
    }
}

// =============================================================================
// provideSuggestion
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ProvideSuggestionParams {
    /// Optional category to focus on
    #[schemars(description = "Category to provide suggestion for (optional)")]
    pub category: Option<String>,
}

pub fn provide_suggestion(
    store: &BudgetStore,
    thresholds: &AdvisorThresholds,
    params: ProvideSuggestionParams,
) -> String {
    let Some(record) = store.current() else {
        return NO_BUDGET_SUGGESTION.to_string();
    };

    if let Some(category) = params.category.as_deref().and_then(parse_category) {
        let amount = record.expense(&category);
        return match category {
            Category::DiningOut if amount > thresholds.dining_out_threshold => {
                let monthly = amount - thresholds.dining_out_cap;
                format!(
                    "Try meal prepping on Sundays! You could cut your dining out from {} to {} \
                     and save ${:.0}/month. That's ${:.0}/year bestie! 💰",
                    dollars(amount),
                    dollars(thresholds.dining_out_cap),
                    monthly,
                    monthly * 12.0
                )
            }
            Category::Subscriptions if amount > thresholds.subscriptions_threshold => {
                format!(
                    "Review all your subscriptions. Cancel the ones you haven't used in a month. \
                     You could probably cut this to {} and save ${:.0}/month! 📺",
                    dollars(thresholds.subscriptions_cap),
                    amount - thresholds.subscriptions_cap
                )
            }
            _ => format!(
                "Your {} spending looks reasonable at {}/month. Keep it up! 💪",
                category,
                dollars(amount)
            ),
        };
    }

    let current_wants = sum_by_class(record, BudgetClass::Wants);
    if current_wants > record.rule().wants {
        let overage = current_wants - record.rule().wants;
        format!(
            "You're spending ${:.0} too much on wants! Try cutting back on dining out and \
             shopping to hit your 30% target. Small changes = big savings bestie! 💸",
            overage
        )
    } else if record.remaining_for_savings() < record.rule().savings {
        "You're short on your savings goal! Try the 52-week challenge: save $1 week 1, \
         $2 week 2, etc. You'll save $1,378 by the end! 🎯"
            .to_string()
    } else {
        "You're doing great! Your budget is balanced. Keep tracking and you'll hit your \
         goals no cap! 🔥"
            .to_string()
    }
}

// =============================================================================
// whatIfScenario
// =============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfScenarioParams {
    #[schemars(description = "Category to adjust")]
    pub category: String,

    /// Hypothetical monthly amount
    #[serde(alias = "new_amount")]
    #[schemars(description = "New amount to test")]
    pub new_amount: f64,
}

/// Projects a change without committing it; the store is only read.
pub fn what_if_scenario(store: &BudgetStore, params: WhatIfScenarioParams) -> String {
    let Some(record) = store.current() else {
        return NO_BUDGET_WHAT_IF.to_string();
    };
    let Some(category) = parse_category(&params.category) else {
        return MISSING_CATEGORY.to_string();
    };
    if let Some(rejection) = reject_amount(params.new_amount, &format!("{} amount", category)) {
        return rejection;
    }

    let current = record.expense(&category);
    let difference = current - params.new_amount;
    let new_savings = record.remaining_for_savings() + difference;

    let delta_line = if difference >= 0.0 {
        format!(
            "- You'd save ${:.2}/month (${:.2}/year)",
            difference,
            difference * 12.0
        )
    } else {
        format!(
            "- You'd spend ${:.2} more/month (${:.2}/year)",
            -difference,
            -difference * 12.0
        )
    };

    format!(
        "If you changed {category} from {from} to {to}:\n\
         {delta_line}\n\
         - Your monthly savings would be ${new_savings:.2}\n\
         \n\
         Want me to update it for real? Just say \"update {category} to {to}\"",
        category = category,
        from = dollars(current),
        to = dollars(params.new_amount),
        delta_line = delta_line,
        new_savings = new_savings,
    )
}

// =============================================================================
// roastUserSpendingHabits
// =============================================================================

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RoastIntensity {
    /// Playful teasing
    Gentle,
    /// Direct but funny
    #[default]
    Medium,
    /// Unhinged, no holding back
    Savage,
}

impl RoastIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gentle => "gentle",
            Self::Medium => "medium",
            Self::Savage => "savage",
        }
    }
}

impl std::fmt::Display for RoastIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct RoastParams {
    #[schemars(
        description = "Intensity of the roast: 'gentle' (playful teasing), 'medium' (direct but funny), or 'savage' (unhinged, no holding back)"
    )]
    pub roasts: Option<RoastIntensity>,
}

/// Builds the analysis block the assistant turns into the actual roast.
pub fn roast_user_spending_habits(
    store: &BudgetStore,
    thresholds: &AdvisorThresholds,
    params: RoastParams,
) -> String {
    let Some(record) = store.current() else {
        return NO_BUDGET_ROAST.to_string();
    };
    let intensity = params.roasts.unwrap_or_default();
    let income = record.monthly_income();

    let savings_rate = savings_rate(record);
    let wants_percentage = percent_of_income(sum_by_class(record, BudgetClass::Wants), income);

    let (worst_name, worst_amount) = worst_want(record)
        .map(|(category, amount)| (category.to_string(), amount))
        .unwrap_or_else(|| ("none".to_string(), 0.0));
    let worst_percentage = percent_of_income(worst_amount, income);
    let yearly_waste = worst_amount * 12.0;

    let all_expenses = if record.expenses().is_empty() {
        "- (none yet)".to_string()
    } else {
        record
            .expenses()
            .iter()
            .map(|(category, &amount)| format!("- {}: {}/month", category, dollars(amount)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut warnings = Vec::new();
    // Checked on the remainder: the rate reads 0% when income is zero
    if record.remaining_for_savings() < 0.0 {
        warnings.push("⚠️ CRISIS MODE: They're OVER BUDGET with NEGATIVE savings!".to_string());
    }
    if savings_rate < thresholds.low_savings_rate {
        warnings.push("⚠️ Savings rate is dangerously low!".to_string());
    }
    if worst_percentage > thresholds.category_share_warning {
        warnings.push(format!(
            "⚠️ Spending {:.1}% on {} is WILD!",
            worst_percentage, worst_name
        ));
    }
    let warnings = if warnings.is_empty() {
        "No warning flags.".to_string()
    } else {
        warnings.join("\n")
    };

    format!(
        "ROAST DATA ANALYSIS ({intensity}):\n\
         \n\
         FINANCIAL BREAKDOWN:\n\
         - Monthly income: {income}\n\
         - Total expenses: {total}\n\
         - Savings rate: {savings_rate:.1}% (Target: 20%)\n\
         - Wants spending: {wants_percentage:.1}% of income (Target: 30%)\n\
         \n\
         WORST OFFENDER:\n\
         - Category: {worst_name}\n\
         - Monthly: {worst_amount} ({worst_percentage:.1}% of income)\n\
         - Yearly: {yearly_waste} 💀\n\
         \n\
         ALL EXPENSES:\n\
         {all_expenses}\n\
         \n\
         WARNING FLAGS:\n\
         {warnings}\n\
         \n\
         Now generate a {intensity} roast that:\n\
         1. Opens with a devastating but hilarious observation about their spending\n\
         2. Calls out the worst category ({worst_name}) specifically with numbers\n\
         3. Uses Gen-Z slang: \"fam\", \"bestie\", \"no cap\", \"it's giving broke\", \"not you spending\"\n\
         4. Includes emojis: 💀, 👀, 💸, 🔥, 💅, 😭\n\
         5. Makes specific math references (like yearly waste: {yearly_waste})\n\
         6. Ends with ONE genuinely good, actionable piece of advice\n\
         7. Is just 2 sentences in total",
        intensity = intensity,
        income = dollars(income),
        total = dollars(record.total_expenses()),
        savings_rate = savings_rate,
        wants_percentage = wants_percentage,
        worst_name = worst_name,
        worst_amount = dollars(worst_amount),
        worst_percentage = worst_percentage,
        yearly_waste = dollars(yearly_waste),
        all_expenses = all_expenses,
        warnings = warnings,
    )
}

// =============================================================================
// resetBudget
// =============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ResetBudgetParams {}

pub fn reset_budget(store: &mut BudgetStore, _params: ResetBudgetParams) -> String {
    store.reset();
    "Budget cleared! Tell me your monthly income whenever you're ready to start fresh.".to_string()
}

// =============================================================================
// Action Definitions
// =============================================================================

/// Name, description and JSON Schema of one action, as handed to the assistant
#[derive(Debug, Clone, Serialize)]
pub struct ActionDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

impl ActionDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Every action the assistant can call
pub fn action_definitions() -> Vec<ActionDefinition> {
    vec![
        ActionDefinition::new(
            UPDATE_INCOME,
            "Update the user's monthly income",
            schemars::schema_for!(UpdateIncomeParams).into(),
        ),
        ActionDefinition::new(
            UPDATE_EXPENSE,
            "Add or update an expense category",
            schemars::schema_for!(UpdateExpenseParams).into(),
        ),
        ActionDefinition::new(
            DELETE_EXPENSE,
            "Remove an expense category from the budget",
            schemars::schema_for!(DeleteExpenseParams).into(),
        ),
        ActionDefinition::new(
            PROVIDE_SUGGESTION,
            "Analyze the budget and provide a specific suggestion for improvement",
            schemars::schema_for!(ProvideSuggestionParams).into(),
        ),
        ActionDefinition::new(
            WHAT_IF_SCENARIO,
            "Show what would happen if user changes a specific expense",
            schemars::schema_for!(WhatIfScenarioParams).into(),
        ),
        ActionDefinition::new(
            ROAST_USER_SPENDING_HABITS,
            "Generate a hilarious but helpful roast of the user's spending and saving habits \
             based on their budget data. Analyze their worst spending categories and savings \
             rate to create a personalized roast.",
            schemars::schema_for!(RoastParams).into(),
        ),
        ActionDefinition::new(
            RESET_BUDGET,
            "Clear the budget and start over",
            schemars::schema_for!(ResetBudgetParams).into(),
        ),
    ]
}
