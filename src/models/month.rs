//! The twelve sheet columns
//!
//! A month is purely a column label: no year, no dates, no time zones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SheetError;

/// One of the twelve fixed month columns, in calendar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in column order
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based column index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Month at a zero-based column index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Three-letter key used in persisted state and CSV headers
    pub const fn key(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Look up a month by its exact persisted key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Month {
    type Err = SheetError;

    /// Accepts the key in any case ("jan", "JAN"), a full name ("January")
    /// or a 1-based month number ("1".."12")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(number) = s.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| SheetError::Validation(format!("Invalid month number: {}", s)));
        }

        let lower = s.to_lowercase();
        if lower.len() >= 3 {
            if let Some(month) = Self::ALL
                .into_iter()
                .find(|m| lower.starts_with(&m.key().to_lowercase()))
            {
                return Ok(month);
            }
        }

        Err(SheetError::Validation(format!("Unknown month: {}", s)))
    }
}
