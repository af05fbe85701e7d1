//! Core data models for BudgetFlow
//!
//! This module contains the data structures that represent the budgeting
//! domain: cadences, money, the budget aggregate and its items.

pub mod budget;
pub mod cadence;
pub mod ids;
pub mod money;

pub use budget::{
    normalize_category, Budget, BudgetValidationError, Expense, IncomeSource, DEFAULT_CATEGORY,
    EXPENSE_CATEGORIES,
};
pub use cadence::{Cadence, CadenceParseError};
pub use ids::{BudgetId, ExpenseId, IncomeId};
pub use money::Money;
