//! The budget reducer
//!
//! A pure transition function over `ViewState`. Every arm returns a new
//! state; nothing is mutated in place, no arm can panic, and intents that
//! don't apply (e.g. item edits with no budget) are no-ops.

use crate::models::{normalize_category, Budget, Expense, ExpenseId, IncomeId, IncomeSource};

use super::intent::Intent;
use super::ViewState;

/// Apply an intent to a state, producing the next state
pub fn reduce(state: &ViewState, intent: Intent) -> ViewState {
    match intent {
        Intent::Initialize {
            pay_cadence,
            next_pay_date,
        } => ViewState {
            budget: Some(Budget::new(pay_cadence, next_pay_date)),
            view_scale: pay_cadence,
            setup_complete: true,
            hydrated: state.hydrated,
        },

        Intent::Load(budget) => ViewState {
            budget: Some(budget),
            setup_complete: true,
            ..state.clone()
        },

        Intent::SetViewScale(cadence) => ViewState {
            view_scale: cadence,
            ..state.clone()
        },

        Intent::AddIncome(new) => with_budget(state, |budget| {
            budget.income_sources.push(IncomeSource {
                id: IncomeId::new(),
                name: new.name,
                amount: new.amount,
                cadence: new.cadence,
            });
        }),

        Intent::UpdateIncome(income) => with_budget(state, |budget| {
            if let Some(slot) = budget.income_sources.iter_mut().find(|i| i.id == income.id) {
                *slot = income;
            }
        }),

        Intent::DeleteIncome(id) => with_budget(state, |budget| {
            budget.income_sources.retain(|i| i.id != id);
        }),

        Intent::AddExpense(new) => with_budget(state, |budget| {
            budget.expenses.push(Expense {
                id: ExpenseId::new(),
                name: new.name,
                amount: new.amount,
                cadence: new.cadence,
                category: normalize_category(&new.category),
            });
        }),

        Intent::UpdateExpense(expense) => with_budget(state, |budget| {
            if let Some(slot) = budget.expenses.iter_mut().find(|e| e.id == expense.id) {
                *slot = expense;
            }
        }),

        Intent::DeleteExpense(id) => with_budget(state, |budget| {
            budget.expenses.retain(|e| e.id != id);
        }),

        Intent::UpdatePaySettings {
            pay_cadence,
            next_pay_date,
        } => with_budget(state, |budget| {
            budget.pay_cadence = pay_cadence;
            budget.next_pay_date = next_pay_date;
        }),

        Intent::MarkHydrated => ViewState {
            hydrated: true,
            ..state.clone()
        },

        Intent::Reset => ViewState {
            hydrated: true,
            ..ViewState::default()
        },
    }
}

/// Clone the state and edit its budget; a no-op when no budget exists
fn with_budget(state: &ViewState, edit: impl FnOnce(&mut Budget)) -> ViewState {
    match &state.budget {
        None => state.clone(),
        Some(budget) => {
            let mut budget = budget.clone();
            edit(&mut budget);
            ViewState {
                budget: Some(budget),
                ..state.clone()
            }
        }
    }
}
