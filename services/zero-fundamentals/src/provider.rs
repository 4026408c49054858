//! Statement provider abstraction.
//!
//! Defines the `StatementFetcher` trait that upstream data sources
//! implement, and the typed record schema the orchestrator consumes.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::FetchError;
use crate::period::{FiscalPeriod, PeriodWindow};
use crate::security::SecurityKey;
use crate::statement::projection::date_prefix;
use crate::statement::StatementKind;

/// Untyped provider row: field name to JSON value.
pub type RawRecord = Map<String, Value>;

// ============================================================================
// Provider Payload
// ============================================================================

/// Response of a single statement query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderPayload {
    /// Provider-side success flag
    pub success: bool,
    /// Provider message, usually set on failure
    pub message: Option<String>,
    /// One row per reporting period
    pub records: Vec<RawRecord>,
}

impl ProviderPayload {
    /// Successful payload carrying `records`.
    pub fn ok(records: Vec<RawRecord>) -> Self {
        Self {
            success: true,
            message: None,
            records,
        }
    }

    /// Failed payload carrying the provider's message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            records: Vec::new(),
        }
    }
}

/// A provider row whose reporting period has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRecord {
    pub period: FiscalPeriod,
    pub fields: RawRecord,
}

impl TryFrom<RawRecord> for StatementRecord {
    type Error = FetchError;

    fn try_from(fields: RawRecord) -> Result<Self, Self::Error> {
        let raw = match fields.get("REPORT_DATE") {
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(FetchError::MalformedRecord(format!(
                    "REPORT_DATE is not a string: {other}"
                )))
            }
            None => return Err(FetchError::MalformedRecord("missing REPORT_DATE".into())),
        };

        let period = FiscalPeriod::parse(date_prefix(raw)).ok_or_else(|| {
            FetchError::MalformedRecord(format!("REPORT_DATE '{raw}' is not a quarter-end"))
        })?;

        Ok(Self { period, fields })
    }
}

// ============================================================================
// Statement Fetcher Trait
// ============================================================================

/// Trait for upstream statement sources.
///
/// A fetcher serves one statement kind. It performs a single request for the
/// whole window and never retries.
#[async_trait]
pub trait StatementFetcher: Send + Sync {
    /// Provider name (e.g., "eastmoney")
    fn name(&self) -> &'static str;

    /// Statement kind this fetcher returns
    fn kind(&self) -> StatementKind;

    /// Fetch rows for `security` covering the periods of `window`.
    ///
    /// Network and HTTP failures are reported as [`FetchError::Transport`];
    /// a provider-side rejection is a payload with `success == false`.
    async fn fetch(
        &self,
        security: &SecurityKey,
        window: &PeriodWindow,
    ) -> Result<ProviderPayload, FetchError>;
}
