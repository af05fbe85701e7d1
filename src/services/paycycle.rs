//! Pay-cycle arithmetic
//!
//! Pure, day-granularity calendar math over the pay anchor date: days
//! remaining, elapsed-cycle fraction, and rollover. `today` is always an
//! explicit parameter so the arithmetic stays clock-free and testable.

use chrono::{Duration, Local, NaiveDate};

use crate::models::{Budget, Cadence};

use super::conversion::convert;

/// Today's date at local day granularity
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `today` until `target`, clamped to zero
///
/// A target on or before `today` yields 0, never a negative count.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days().max(0)
}

/// Fraction of the current pay cycle that has elapsed, in [0, 1]
///
/// Exactly 1.0 on the pay date. The day after, without a rollover of the
/// anchor, elapsed would exceed the cycle length; the clamp keeps the
/// result meaningful until the anchor is advanced.
pub fn cycle_progress(next_pay_date: NaiveDate, cadence: Cadence, today: NaiveDate) -> f64 {
    let total = cadence.cycle_days();
    let elapsed = total - days_until(next_pay_date, today);
    (elapsed as f64 / total as f64).clamp(0.0, 1.0)
}

/// The anchor date one full cycle after the current one
///
/// Advances by the fixed cycle length (monthly = 30 days). The reducer never
/// calls this automatically when a pay date passes; rollover is an explicit
/// caller decision via a pay-settings update.
pub fn next_pay_date_after(current: NaiveDate, cadence: Cadence) -> NaiveDate {
    current + Duration::days(cadence.cycle_days())
}

/// Format a date for display: "Wed, Jan 15"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// A snapshot of where the user stands in their pay cycle
#[derive(Debug, Clone, PartialEq)]
pub struct PayCycleStatus {
    /// Whole days until the next payday
    pub days_left: i64,

    /// Elapsed fraction of the cycle, in [0, 1]
    pub progress: f64,

    /// Income minus expenses, normalized to the pay cadence
    pub remaining: f64,

    /// What can be spent per remaining day without going over
    pub daily_allowance: f64,
}

impl PayCycleStatus {
    /// Compute the cycle status for a budget as of `today`
    pub fn for_budget(budget: &Budget, today: NaiveDate) -> Self {
        let days_left = days_until(budget.next_pay_date, today);
        let progress = cycle_progress(budget.next_pay_date, budget.pay_cadence, today);

        let income: f64 = budget
            .income_sources
            .iter()
            .map(|s| convert(s.amount.to_dollars(), s.cadence, budget.pay_cadence))
            .sum();
        let expenses: f64 = budget
            .expenses
            .iter()
            .map(|e| convert(e.amount.to_dollars(), e.cadence, budget.pay_cadence))
            .sum();
        let remaining = income - expenses;

        // On payday the full remainder is the allowance; no division by zero
        let daily_allowance = if days_left > 0 {
            remaining / days_left as f64
        } else {
            remaining
        };

        Self {
            days_left,
            progress,
            remaining,
            daily_allowance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, IncomeId, Money};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_same_day_is_zero() {
        let d = date(2025, 1, 15);
        assert_eq!(days_until(d, d), 0);
    }

    #[test]
    fn test_days_until_past_clamps_to_zero() {
        assert_eq!(days_until(date(2025, 1, 1), date(2025, 1, 15)), 0);
    }

    #[test]
    fn test_days_until_future() {
        assert_eq!(days_until(date(2025, 1, 15), date(2025, 1, 1)), 14);
    }

    #[test]
    fn test_cycle_progress_monotone_toward_payday() {
        let pay = date(2025, 1, 15);
        let mut prev = -1.0;
        for offset in 0..=14 {
            let today = date(2025, 1, 1) + Duration::days(offset);
            let progress = cycle_progress(pay, Cadence::Biweekly, today);
            assert!(progress >= prev, "progress dipped on day {}", offset);
            assert!((0.0..=1.0).contains(&progress));
            prev = progress;
        }
    }

    #[test]
    fn test_cycle_progress_full_on_payday() {
        let pay = date(2025, 1, 15);
        assert_eq!(cycle_progress(pay, Cadence::Biweekly, pay), 1.0);
        // The clamp holds the day after, too
        assert_eq!(cycle_progress(pay, Cadence::Biweekly, date(2025, 1, 16)), 1.0);
    }

    #[test]
    fn test_cycle_progress_clamps_at_zero() {
        // More days remaining than the cycle length (stale anchor far out)
        let pay = date(2025, 3, 1);
        assert_eq!(cycle_progress(pay, Cadence::Weekly, date(2025, 1, 1)), 0.0);
    }

    #[test]
    fn test_next_pay_date_after() {
        assert_eq!(
            next_pay_date_after(date(2025, 1, 15), Cadence::Biweekly),
            date(2025, 1, 29)
        );
        // Monthly is a fixed 30-day step, not calendar-month-aware
        assert_eq!(
            next_pay_date_after(date(2025, 1, 31), Cadence::Monthly),
            date(2025, 3, 2)
        );
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(date(2025, 1, 15)), "Wed, Jan 15");
        assert_eq!(format_display_date(date(2025, 3, 7)), "Fri, Mar 7");
    }

    fn budget_with_items() -> Budget {
        let mut budget = Budget::new(Cadence::Biweekly, date(2025, 1, 15));
        budget.income_sources.push(crate::models::IncomeSource {
            id: IncomeId::new(),
            name: "Salary".into(),
            amount: Money::from_cents(200_000), // $2000 biweekly
            cadence: Cadence::Biweekly,
        });
        budget.expenses.push(crate::models::Expense {
            id: ExpenseId::new(),
            name: "Rent".into(),
            amount: Money::from_cents(140_000), // $1400 monthly
            cadence: Cadence::Monthly,
            category: "Housing".into(),
        });
        budget
    }

    #[test]
    fn test_status_daily_allowance() {
        let budget = budget_with_items();
        let status = PayCycleStatus::for_budget(&budget, date(2025, 1, 10));

        assert_eq!(status.days_left, 5);
        // 2000 - 1400 * 12 / 26
        let expected_remaining = 2000.0 - 1400.0 * 12.0 / 26.0;
        assert!((status.remaining - expected_remaining).abs() < 1e-9);
        assert!((status.daily_allowance - expected_remaining / 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_status_allowance_on_payday_is_full_remainder() {
        let budget = budget_with_items();
        let status = PayCycleStatus::for_budget(&budget, date(2025, 1, 15));

        assert_eq!(status.days_left, 0);
        assert_eq!(status.progress, 1.0);
        assert!((status.daily_allowance - status.remaining).abs() < 1e-9);
    }
}
