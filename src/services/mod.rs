//! Business logic layer for BudgetFlow
//!
//! Pure functions over the data models: cadence normalization, pay-cycle
//! arithmetic, and view-scale totals. Nothing here touches storage.

pub mod conversion;
pub mod paycycle;
pub mod summary;

pub use conversion::{convert, format_amount};
pub use paycycle::{
    cycle_progress, days_until, format_display_date, next_pay_date_after, PayCycleStatus,
};
pub use summary::{BudgetHealth, BudgetSummary};
