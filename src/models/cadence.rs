//! Recurrence cadence
//!
//! The four fixed intervals an amount can recur at. Every normalization in
//! the crate goes through the annual occurrence table defined here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often an amount recurs
///
/// The set is closed: exactly these four cadences exist, and their implied
/// annual occurrence counts (365, 52, 26, 12) are fixed, never configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl Cadence {
    /// All cadences, ordered from most to least frequent
    pub const ALL: [Cadence; 4] = [
        Cadence::Daily,
        Cadence::Weekly,
        Cadence::Biweekly,
        Cadence::Monthly,
    ];

    /// How many times per year an amount at this cadence occurs
    pub const fn per_year(&self) -> u32 {
        match self {
            Self::Daily => 365,
            Self::Weekly => 52,
            Self::Biweekly => 26,
            Self::Monthly => 12,
        }
    }

    /// Length of one cycle in whole days
    ///
    /// Monthly is a fixed 30-day window, not calendar-month-aware. Callers
    /// must not assume exact month boundaries.
    pub const fn cycle_days(&self) -> i64 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
            Self::Biweekly => 14,
            Self::Monthly => 30,
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Bi-Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Ord for Cadence {
    /// Total order by implied annual occurrence count
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.per_year().cmp(&other.per_year())
    }
}

impl PartialOrd for Cadence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Cadence {
    type Err = CadenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "biweekly" | "bi-weekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(CadenceParseError::Unknown(other.to_string())),
        }
    }
}

/// Error type for cadence parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CadenceParseError {
    Unknown(String),
}

impl fmt::Display for CadenceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CadenceParseError::Unknown(s) => write!(f, "Unknown cadence: {}", s),
        }
    }
}

impl std::error::Error for CadenceParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_year_table() {
        assert_eq!(Cadence::Daily.per_year(), 365);
        assert_eq!(Cadence::Weekly.per_year(), 52);
        assert_eq!(Cadence::Biweekly.per_year(), 26);
        assert_eq!(Cadence::Monthly.per_year(), 12);
    }

    #[test]
    fn test_cycle_days_table() {
        assert_eq!(Cadence::Daily.cycle_days(), 1);
        assert_eq!(Cadence::Weekly.cycle_days(), 7);
        assert_eq!(Cadence::Biweekly.cycle_days(), 14);
        assert_eq!(Cadence::Monthly.cycle_days(), 30);
    }

    #[test]
    fn test_ordering_by_occurrence_count() {
        assert!(Cadence::Monthly < Cadence::Biweekly);
        assert!(Cadence::Biweekly < Cadence::Weekly);
        assert!(Cadence::Weekly < Cadence::Daily);
    }

    #[test]
    fn test_parse() {
        assert_eq!("daily".parse::<Cadence>().unwrap(), Cadence::Daily);
        assert_eq!("Bi-Weekly".parse::<Cadence>().unwrap(), Cadence::Biweekly);
        assert_eq!(" monthly ".parse::<Cadence>().unwrap(), Cadence::Monthly);
        assert!("fortnightly".parse::<Cadence>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cadence::Biweekly), "Bi-Weekly");
        assert_eq!(format!("{}", Cadence::Daily), "Daily");
    }

    #[test]
    fn test_lowercase_wire_format() {
        let json = serde_json::to_string(&Cadence::Biweekly).unwrap();
        assert_eq!(json, "\"biweekly\"");

        let parsed: Cadence = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, Cadence::Monthly);
    }
}
