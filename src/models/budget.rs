//! Budget aggregate: income sources, expenses, and pay settings
//!
//! One budget exists per identity at a time. Items are owned exclusively by
//! their budget, mutated only by full replacement, and identified by random
//! typed ids. This is the exact shape that round-trips through both storage
//! backends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cadence::Cadence;
use super::ids::{BudgetId, ExpenseId, IncomeId};
use super::money::Money;

/// Fixed expense category suggestions
///
/// A suggestion set, not a constraint: expenses accept free-text categories,
/// with "Other" as the fallback default.
pub const EXPENSE_CATEGORIES: [&str; 12] = [
    "Housing",
    "Utilities",
    "Groceries",
    "Transportation",
    "Insurance",
    "Subscriptions",
    "Entertainment",
    "Dining Out",
    "Health",
    "Savings",
    "Debt",
    "Other",
];

/// The fallback category for expenses with no category set
pub const DEFAULT_CATEGORY: &str = "Other";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Normalize a free-text category, falling back to "Other" when blank
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        default_category()
    } else {
        trimmed.to_string()
    }
}

/// A recurring income source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeId,

    /// Display name (non-empty)
    pub name: String,

    /// Amount per occurrence (positive)
    pub amount: Money,

    /// How often this income arrives
    pub cadence: Cadence,
}

/// A recurring expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Display name (non-empty)
    pub name: String,

    /// Amount per occurrence (positive)
    pub amount: Money,

    /// How often this expense recurs
    pub cadence: Cadence,

    /// Free-text category; blank falls back to "Other"
    #[serde(default = "default_category")]
    pub category: String,
}

/// The budget aggregate for one identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    /// Income sources, unordered, unique by id
    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,

    /// Expenses, unordered, unique by id
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// The cadence the user's pay arrives at
    pub pay_cadence: Cadence,

    /// Anchor date of the next expected payday (no time component)
    pub next_pay_date: NaiveDate,
}

impl Budget {
    /// Create a fresh budget with empty item collections
    pub fn new(pay_cadence: Cadence, next_pay_date: NaiveDate) -> Self {
        Self {
            id: BudgetId::new(),
            income_sources: Vec::new(),
            expenses: Vec::new(),
            pay_cadence,
            next_pay_date,
        }
    }

    /// Look up an income source by id
    pub fn income(&self, id: IncomeId) -> Option<&IncomeSource> {
        self.income_sources.iter().find(|i| i.id == id)
    }

    /// Look up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Validate the aggregate invariants
    ///
    /// The reducer trusts its inputs; this is for the input boundary and
    /// for asserting invariants in tests.
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        for income in &self.income_sources {
            if income.name.trim().is_empty() {
                return Err(BudgetValidationError::EmptyName);
            }
            if !income.amount.is_positive() {
                return Err(BudgetValidationError::NonPositiveAmount);
            }
        }
        for expense in &self.expenses {
            if expense.name.trim().is_empty() {
                return Err(BudgetValidationError::EmptyName);
            }
            if !expense.amount.is_positive() {
                return Err(BudgetValidationError::NonPositiveAmount);
            }
        }

        for (i, income) in self.income_sources.iter().enumerate() {
            if self.income_sources[i + 1..].iter().any(|o| o.id == income.id) {
                return Err(BudgetValidationError::DuplicateId);
            }
        }
        for (i, expense) in self.expenses.iter().enumerate() {
            if self.expenses[i + 1..].iter().any(|o| o.id == expense.id) {
                return Err(BudgetValidationError::DuplicateId);
            }
        }

        Ok(())
    }
}

/// Validation errors for the budget aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    NonPositiveAmount,
    DuplicateId,
}

impl std::fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Item name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Item amount must be positive"),
            Self::DuplicateId => write!(f, "Duplicate item id within a collection"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_budget() -> Budget {
        Budget::new(
            Cadence::Monthly,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_budget_is_empty() {
        let budget = test_budget();
        assert!(budget.income_sources.is_empty());
        assert!(budget.expenses.is_empty());
        assert_eq!(budget.pay_cadence, Cadence::Monthly);
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("Groceries"), "Groceries");
        assert_eq!(normalize_category("  Pets  "), "Pets");
        assert_eq!(normalize_category(""), "Other");
        assert_eq!(normalize_category("   "), "Other");
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let mut budget = test_budget();
        budget.income_sources.push(IncomeSource {
            id: IncomeId::new(),
            name: "Salary".into(),
            amount: Money::from_cents(300_000),
            cadence: Cadence::Monthly,
        });
        budget.expenses.push(Expense {
            id: ExpenseId::new(),
            name: "Rent".into(),
            amount: Money::from_cents(120_000),
            cadence: Cadence::Monthly,
            category: "Housing".into(),
        });
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let mut budget = test_budget();
        budget.income_sources.push(IncomeSource {
            id: IncomeId::new(),
            name: "Salary".into(),
            amount: Money::zero(),
            cadence: Cadence::Monthly,
        });
        assert_eq!(
            budget.validate(),
            Err(BudgetValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut budget = test_budget();
        let id = ExpenseId::new();
        for _ in 0..2 {
            budget.expenses.push(Expense {
                id,
                name: "Rent".into(),
                amount: Money::from_cents(100),
                cadence: Cadence::Monthly,
                category: "Housing".into(),
            });
        }
        assert_eq!(budget.validate(), Err(BudgetValidationError::DuplicateId));
    }

    #[test]
    fn test_serialization_wire_shape() {
        let mut budget = test_budget();
        budget.expenses.push(Expense {
            id: ExpenseId::new(),
            name: "Netflix".into(),
            amount: Money::from_cents(1599),
            cadence: Cadence::Monthly,
            category: "Subscriptions".into(),
        });

        let json = serde_json::to_value(&budget).unwrap();
        assert_eq!(json["pay_cadence"], "monthly");
        assert_eq!(json["next_pay_date"], "2025-01-01");
        assert_eq!(json["expenses"][0]["amount"], 1599);

        let round_trip: Budget = serde_json::from_value(json).unwrap();
        assert_eq!(round_trip, budget);
    }

    #[test]
    fn test_missing_collections_default_empty() {
        let json = format!(
            r#"{{"id":"{}","pay_cadence":"weekly","next_pay_date":"2025-03-07"}}"#,
            uuid::Uuid::new_v4()
        );
        let budget: Budget = serde_json::from_str(&json).unwrap();
        assert!(budget.income_sources.is_empty());
        assert!(budget.expenses.is_empty());
    }

    #[test]
    fn test_missing_category_defaults_to_other() {
        let json = format!(
            r#"{{"id":"{}","name":"Misc","amount":500,"cadence":"weekly"}}"#,
            uuid::Uuid::new_v4()
        );
        let expense: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.category, "Other");
    }

    #[test]
    fn test_categories_list_ends_with_other() {
        assert_eq!(*EXPENSE_CATEGORIES.last().unwrap(), DEFAULT_CATEGORY);
    }
}
