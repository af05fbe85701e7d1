//! Budget totals normalized to a view scale
//!
//! Sums income and expenses at whatever cadence the user is currently
//! viewing, independent of any stored item's own cadence.

use crate::models::{Budget, Cadence};

use super::conversion::convert;

/// Threshold above which spending is flagged as tight
const TIGHT_RATIO: f64 = 0.85;

/// How the budget looks at the current allocation ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetHealth {
    /// Expenses comfortably below income
    OnTrack,
    /// Expenses above 85% of income
    Tight,
    /// Expenses exceed income
    OverBudget,
}

/// Income, expense, and remaining totals at a single view scale
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub scale: Cadence,
    pub income: f64,
    pub expenses: f64,
    pub remaining: f64,
}

impl BudgetSummary {
    /// Compute totals for a budget normalized to `scale`
    pub fn at_scale(budget: &Budget, scale: Cadence) -> Self {
        let income: f64 = budget
            .income_sources
            .iter()
            .map(|s| convert(s.amount.to_dollars(), s.cadence, scale))
            .sum();

        let expenses: f64 = budget
            .expenses
            .iter()
            .map(|e| convert(e.amount.to_dollars(), e.cadence, scale))
            .sum();

        Self {
            scale,
            income,
            expenses,
            remaining: income - expenses,
        }
    }

    /// Fraction of income allocated to expenses (0 when there is no income)
    pub fn allocation_ratio(&self) -> f64 {
        if self.income > 0.0 {
            self.expenses / self.income
        } else {
            0.0
        }
    }

    /// Health classification from the allocation ratio
    pub fn health(&self) -> BudgetHealth {
        let ratio = self.allocation_ratio();
        if ratio > 1.0 {
            BudgetHealth::OverBudget
        } else if ratio > TIGHT_RATIO {
            BudgetHealth::Tight
        } else {
            BudgetHealth::OnTrack
        }
    }
}
