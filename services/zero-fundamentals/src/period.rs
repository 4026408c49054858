//! Fiscal period resolution.
//!
//! Maps an arbitrary calendar date to the latest quarterly reporting date
//! on or before it, and walks backward from there to build a trailing
//! window of quarter-ends. Everything here is a pure calendar computation.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// Quarterly reporting cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Month and day of the quarter-end
    pub const fn month_day(self) -> (u32, u32) {
        match self {
            Self::Q1 => (3, 31),
            Self::Q2 => (6, 30),
            Self::Q3 => (9, 30),
            Self::Q4 => (12, 31),
        }
    }

    fn from_month_day(month: u32, day: u32) -> Option<Self> {
        match (month, day) {
            (3, 31) => Some(Self::Q1),
            (6, 30) => Some(Self::Q2),
            (9, 30) => Some(Self::Q3),
            (12, 31) => Some(Self::Q4),
            _ => None,
        }
    }
}

/// A quarter-end date: Mar 31, Jun 30, Sep 30 or Dec 31 of some year.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FiscalPeriod {
    year: i32,
    quarter: Quarter,
}

impl FiscalPeriod {
    pub const fn new(year: i32, quarter: Quarter) -> Self {
        Self { year, quarter }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn quarter(&self) -> Quarter {
        self.quarter
    }

    /// Interpret a date as a fiscal period if it is exactly a quarter-end.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        Quarter::from_month_day(date.month(), date.day()).map(|q| Self::new(date.year(), q))
    }

    /// Parse a `YYYY-MM-DD` quarter-end date.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(Self::from_date)
    }

    /// The quarter-end as a calendar date.
    ///
    /// `None` only for years outside chrono's supported range.
    pub fn end_date(&self) -> Option<NaiveDate> {
        let (month, day) = self.quarter.month_day();
        NaiveDate::from_ymd_opt(self.year, month, day)
    }

    /// The quarter-end immediately before this one.
    pub const fn predecessor(&self) -> Self {
        match self.quarter {
            Quarter::Q1 => Self::new(self.year - 1, Quarter::Q4),
            Quarter::Q2 => Self::new(self.year, Quarter::Q1),
            Quarter::Q3 => Self::new(self.year, Quarter::Q2),
            Quarter::Q4 => Self::new(self.year, Quarter::Q3),
        }
    }

    fn is_after(&self, date: NaiveDate) -> bool {
        let (month, day) = self.quarter.month_day();
        (self.year, month, day) > (date.year(), date.month(), date.day())
    }
}

impl fmt::Display for FiscalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (month, day) = self.quarter.month_day();
        write!(f, "{:04}-{:02}-{:02}", self.year, month, day)
    }
}

impl Serialize for FiscalPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Latest quarter-end on or before `date`.
pub fn nearest_quarter_end(date: NaiveDate) -> FiscalPeriod {
    if let Some(period) = FiscalPeriod::from_date(date) {
        return period;
    }

    let year = date.year();
    let candidate = match date.month() {
        10..=12 => FiscalPeriod::new(year, Quarter::Q4),
        7..=9 => FiscalPeriod::new(year, Quarter::Q3),
        4..=6 => FiscalPeriod::new(year, Quarter::Q2),
        _ => FiscalPeriod::new(year - 1, Quarter::Q4),
    };

    if candidate.is_after(date) {
        candidate.predecessor()
    } else {
        candidate
    }
}

/// Contiguous run of quarter-ends in ascending order, ending at the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodWindow(Vec<FiscalPeriod>);

impl PeriodWindow {
    /// The most recent period
    pub fn anchor(&self) -> FiscalPeriod {
        // Construction guarantees at least one element
        self.0[self.0.len() - 1]
    }

    pub fn periods(&self) -> &[FiscalPeriod] {
        &self.0
    }

    pub fn contains(&self, period: &FiscalPeriod) -> bool {
        self.0.binary_search(period).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FiscalPeriod> {
        self.0.iter()
    }

    /// Periods as `YYYY-MM-DD` strings, oldest first.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

/// Walk `count` quarters back from `anchor`.
///
/// The result holds `count + 1` periods and ends with `anchor`.
pub fn trailing_window(anchor: FiscalPeriod, count: usize) -> PeriodWindow {
    let mut periods = Vec::with_capacity(count + 1);
    let mut current = anchor;
    periods.push(current);

    for _ in 0..count {
        current = current.predecessor();
        periods.push(current);
    }

    periods.sort();
    PeriodWindow(periods)
}
