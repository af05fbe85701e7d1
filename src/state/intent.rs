//! Reducer intents
//!
//! The closed set of state transitions, one variant per user-facing
//! mutation. Payloads are assumed well-formed; validation happens at the
//! input boundary before an intent is ever dispatched.

use chrono::NaiveDate;

use crate::models::{Budget, Cadence, Expense, ExpenseId, IncomeId, IncomeSource, Money};

/// An income source awaiting an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncome {
    pub name: String,
    pub amount: Money,
    pub cadence: Cadence,
}

/// An expense awaiting an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub name: String,
    pub amount: Money,
    pub cadence: Cadence,
    pub category: String,
}

/// Every transition the reducer understands
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Create a fresh empty budget, replacing any existing one
    Initialize {
        pay_cadence: Cadence,
        next_pay_date: NaiveDate,
    },

    /// Replace the budget wholesale (hydration from a backend)
    Load(Budget),

    /// Change the display normalization cadence only
    SetViewScale(Cadence),

    /// Append a new income source with a generated id
    AddIncome(NewIncome),

    /// Replace the income source matching the payload's id
    UpdateIncome(IncomeSource),

    /// Remove the income source with this id
    DeleteIncome(IncomeId),

    /// Append a new expense with a generated id
    AddExpense(NewExpense),

    /// Replace the expense matching the payload's id
    UpdateExpense(Expense),

    /// Remove the expense with this id
    DeleteExpense(ExpenseId),

    /// Replace the pay cadence and anchor date only
    UpdatePaySettings {
        pay_cadence: Cadence,
        next_pay_date: NaiveDate,
    },

    /// Record that hydration has completed
    MarkHydrated,

    /// Clear everything back to the not-set-up state
    Reset,
}
