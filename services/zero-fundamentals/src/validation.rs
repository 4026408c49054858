//! Query input validation.
//!
//! Tickers are normalized through [`SecurityKey::parse`]; dates must be
//! `YYYY-MM-DD`, not in the future and not before the market opened. The
//! trading-day check is opt-in and needs a [`TradingCalendar`].

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use zero_common::{Error, ResultExt};

use crate::error::{DateError, SymbolError};
use crate::security::SecurityKey;

/// First year with exchange-listed A-shares.
pub const MIN_YEAR: i32 = 1990;

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Set of valid trading days.
#[derive(Debug, Clone, Default)]
pub struct TradingCalendar {
    days: HashSet<NaiveDate>,
}

impl TradingCalendar {
    pub fn new(days: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// Parse a JSON array of `YYYY-MM-DD` strings.
    pub fn from_json(content: &str) -> zero_common::Result<Self> {
        let raw: Vec<String> = serde_json::from_str(content)?;
        let days = raw
            .iter()
            .map(|s| {
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .map_err(|_| Error::InvalidInput(format!("bad trading day '{s}'")))
            })
            .collect::<zero_common::Result<HashSet<_>>>()?;
        Ok(Self { days })
    }

    /// Load a calendar file.
    pub fn load(path: &Path) -> zero_common::Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read trading calendar {}", path.display()))?;
        let calendar = Self::from_json(&content)
            .context(format!("Failed to parse trading calendar {}", path.display()))?;
        tracing::debug!(path = %path.display(), days = calendar.len(), "Trading calendar loaded");
        Ok(calendar)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Validates raw tickers and query dates.
#[derive(Debug, Clone, Default)]
pub struct QueryValidator {
    calendar: Option<Arc<TradingCalendar>>,
}

impl QueryValidator {
    /// Validator without the trading-day check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the trading-day check against `calendar`.
    pub fn with_calendar(calendar: Arc<TradingCalendar>) -> Self {
        Self {
            calendar: Some(calendar),
        }
    }

    pub fn checks_trading_days(&self) -> bool {
        self.calendar.is_some()
    }

    pub fn validate_ticker(&self, raw: &str) -> Result<SecurityKey, SymbolError> {
        SecurityKey::parse(raw)
    }

    /// Validate a query date against the local current date.
    pub fn validate_date(&self, raw: &str) -> Result<NaiveDate, DateError> {
        self.validate_date_on(raw, Local::now().date_naive())
    }

    /// Validate a query date as of `today`.
    pub fn validate_date_on(&self, raw: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
        let trimmed = raw.trim();
        let bad_format = || DateError::BadDateFormat {
            input: trimmed.to_string(),
        };

        // chrono alone accepts unpadded fields and a leading sign
        if !DATE_SHAPE.is_match(trimmed) {
            return Err(bad_format());
        }
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| bad_format())?;

        if date > today {
            return Err(DateError::FutureDate {
                date: date.to_string(),
                today: today.to_string(),
            });
        }

        if date.year() < MIN_YEAR {
            return Err(DateError::TooEarly {
                date: date.to_string(),
                min_year: MIN_YEAR,
            });
        }

        if let Some(calendar) = &self.calendar {
            if !calendar.contains(date) {
                return Err(DateError::NotATradingDay {
                    date: date.to_string(),
                });
            }
        }

        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()
    }

    #[test]
    fn test_valid_date() {
        let validator = QueryValidator::new();
        let date = validator.validate_date_on("2023-01-01", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert!(validator.validate_date_on(" 2024-08-15 ", today()).is_ok());
    }

    #[test_case("2999-01-01" ; "far future")]
    #[test_case("2024-08-16" ; "tomorrow")]
    fn test_future_date(input: &str) {
        assert!(matches!(
            QueryValidator::new().validate_date_on(input, today()),
            Err(DateError::FutureDate { .. })
        ));
    }

    #[test_case("not-a-date" ; "garbage")]
    #[test_case("2024/01/02" ; "slashes")]
    #[test_case("2024-02-30" ; "impossible day")]
    #[test_case("" ; "empty")]
    #[test_case("2024-1-5" ; "unpadded month and day")]
    #[test_case("+2024-02-01" ; "signed year")]
    #[test_case("2024-02-01T00:00" ; "trailing time")]
    fn test_bad_format(input: &str) {
        assert!(matches!(
            QueryValidator::new().validate_date_on(input, today()),
            Err(DateError::BadDateFormat { .. })
        ));
    }

    #[test]
    fn test_too_early() {
        assert_eq!(
            QueryValidator::new().validate_date_on("1980-01-01", today()),
            Err(DateError::TooEarly {
                date: "1980-01-01".into(),
                min_year: MIN_YEAR,
            })
        );
        assert!(QueryValidator::new()
            .validate_date_on("1990-01-01", today())
            .is_ok());
    }

    #[test]
    fn test_real_clock_rejects_far_future() {
        assert!(matches!(
            QueryValidator::new().validate_date("2999-01-01"),
            Err(DateError::FutureDate { .. })
        ));
        assert!(QueryValidator::new().validate_date("2023-01-01").is_ok());
    }

    #[test]
    fn test_trading_day_check() {
        let calendar = TradingCalendar::from_json(r#"["2024-08-14", "2024-08-15"]"#).unwrap();
        let validator = QueryValidator::with_calendar(Arc::new(calendar));
        assert!(validator.checks_trading_days());

        assert!(validator.validate_date_on("2024-08-14", today()).is_ok());
        assert_eq!(
            validator.validate_date_on("2024-08-11", today()),
            Err(DateError::NotATradingDay {
                date: "2024-08-11".into()
            })
        );
    }

    #[test]
    fn test_trading_day_check_off_by_default() {
        let validator = QueryValidator::new();
        assert!(!validator.checks_trading_days());
        // A Sunday
        assert!(validator.validate_date_on("2024-08-11", today()).is_ok());
    }

    #[test]
    fn test_calendar_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.json");
        std::fs::write(&path, r#"["2024-01-02", "2024-01-03"]"#).unwrap();

        let calendar = TradingCalendar::load(&path).unwrap();
        assert_eq!(calendar.len(), 2);
        assert!(calendar.contains(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));

        std::fs::write(&path, r#"["2024-13-01"]"#).unwrap();
        let err = TradingCalendar::load(&path).unwrap_err();
        assert!(err.is_invalid_input());

        assert!(TradingCalendar::load(&dir.path().join("missing.json")).is_err());
    }
}
