//! Client view state and its reducer
//!
//! The aggregate model module: it exclusively owns the budget and the
//! view state, and all mutation flows through `reduce` as tagged intents.

pub mod intent;
pub mod reducer;

pub use intent::{Intent, NewExpense, NewIncome};
pub use reducer::reduce;

use crate::models::{Budget, Cadence};

/// Everything the client needs to render: the budget plus display flags
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// The current budget, if one has been set up or loaded
    pub budget: Option<Budget>,

    /// Cadence used purely to normalize displayed totals
    pub view_scale: Cadence,

    /// True once a budget has been initialized or loaded
    pub setup_complete: bool,

    /// True once the synchronizer has resolved a source of truth,
    /// even when that source yielded no budget
    pub hydrated: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            budget: None,
            view_scale: Cadence::Monthly,
            setup_complete: false,
            hydrated: false,
        }
    }
}
