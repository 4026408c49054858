//! Error taxonomy for statement queries.
//!
//! Validation failures (`SymbolError`, `DateError`) are returned to the caller
//! unchanged and never retried. Fetch failures abort the current attempt and
//! leave the snapshot cache untouched.

use thiserror::Error;

use crate::period::FiscalPeriod;
use crate::security::{Market, SecurityKey};

/// Ticker validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("Ticker must not be empty")]
    EmptyInput,

    #[error("Malformed ticker '{input}': expected CODE or CODE.SUFFIX")]
    MalformedCode { input: String },

    #[error("Invalid code '{code}': expected exactly 6 digits")]
    InvalidCodeFormat { code: String },

    #[error("Cannot infer market for code '{code}' from its leading digit")]
    UnknownMarket { code: String },

    #[error("Unsupported market suffix '{suffix}': use .SH, .SZ or .BJ")]
    UnsupportedSuffix { suffix: String },

    #[error("Code '{code}' does not belong to {market}: {rule}")]
    CodeMarketMismatch {
        code: String,
        market: Market,
        rule: &'static str,
    },
}

/// Query date validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    BadDateFormat { input: String },

    #[error("Date {date} is in the future (today is {today})")]
    FutureDate { date: String, today: String },

    #[error("Date {date} is before {min_year}, when the A-share market opened")]
    TooEarly { date: String, min_year: i32 },

    #[error("Date {date} is not a trading day")]
    NotATradingDay { date: String },
}

/// Failure of a statement fetch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error(transparent)]
    Symbol(#[from] SymbolError),

    #[error(transparent)]
    Date(#[from] DateError),

    /// Network or HTTP-level failure reaching the provider
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered but flagged the request as failed
    #[error("Provider error: {0}")]
    Provider(String),

    /// A provider record could not be interpreted
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// The provider returned no usable record for the anchor period
    #[error("No {period} report available for {security}")]
    MissingAnchor {
        security: SecurityKey,
        period: FiscalPeriod,
    },
}

impl FetchError {
    /// Check if the error came from input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Symbol(_) | Self::Date(_))
    }

    /// Check if a later attempt could plausibly succeed.
    ///
    /// The core never retries; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<FetchError> for zero_common::Error {
    fn from(err: FetchError) -> Self {
        if err.is_validation() {
            Self::InvalidInput(err.to_string())
        } else {
            Self::External(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_wrap_transparently() {
        let err: FetchError = SymbolError::EmptyInput.into();
        assert!(err.is_validation());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), SymbolError::EmptyInput.to_string());

        let err: FetchError = DateError::BadDateFormat {
            input: "not-a-date".into(),
        }
        .into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_fetch_error_classification() {
        assert!(FetchError::Transport("connection reset".into()).is_retryable());
        assert!(!FetchError::Provider("bad filter".into()).is_retryable());
        assert!(!FetchError::Provider("bad filter".into()).is_validation());
    }

    #[test]
    fn test_service_error_exit_codes() {
        let err: zero_common::Error = FetchError::from(SymbolError::EmptyInput).into();
        assert!(err.is_invalid_input());
        assert_eq!(err.exit_code(), 2);

        let err: zero_common::Error = FetchError::Provider("返回数据为空".into()).into();
        assert!(matches!(err, zero_common::Error::External(ref msg) if msg.contains("返回数据为空")));
        assert_eq!(err.exit_code(), 69);
    }

    #[test]
    fn test_mismatch_carries_rule() {
        let err = SymbolError::CodeMarketMismatch {
            code: "600519".into(),
            market: Market::Shenzhen,
            rule: Market::Shenzhen.rule_description(),
        };
        let msg = err.to_string();
        assert!(msg.contains("600519"));
        assert!(msg.contains(Market::Shenzhen.rule_description()));
    }
}
