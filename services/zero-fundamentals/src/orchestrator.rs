//! Statement fetch orchestration.
//!
//! Validates the query, resolves the anchor period and its trailing window,
//! serves the anchor from the cache when possible and otherwise makes a
//! single provider call for the whole window. Every record that survives
//! filtering is cached under its own period.
//!
//! The cache lock is only taken for the lookup and for the inserts; it is
//! never held while the provider call is in flight. Two concurrent misses
//! for the same slot may both fetch, and the last insert wins.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};
use zero_common::logging::generate_trace_id;

use crate::cache::SnapshotCache;
use crate::error::FetchError;
use crate::period::{nearest_quarter_end, trailing_window, FiscalPeriod, PeriodWindow};
use crate::provider::{StatementFetcher, StatementRecord};
use crate::security::SecurityKey;
use crate::statement::{project, Snapshot, StatementKind};
use crate::validation::QueryValidator;

/// Trailing periods requested before the anchor.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// Total cached snapshots above which the cache is cleared.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

// ============================================================================
// Pipeline
// ============================================================================

/// Borrowed view of everything a single query needs.
struct Pipeline<'a> {
    fetcher: &'a dyn StatementFetcher,
    cache: &'a SnapshotCache,
    validator: &'a QueryValidator,
    window_size: usize,
    cache_capacity: usize,
}

impl Pipeline<'_> {
    fn resolve(
        &self,
        symbol_raw: &str,
        date_raw: &str,
    ) -> Result<(SecurityKey, PeriodWindow), FetchError> {
        let security = self.validator.validate_ticker(symbol_raw)?;
        let date = self.validator.validate_date(date_raw)?;
        let window = trailing_window(nearest_quarter_end(date), self.window_size);
        Ok((security, window))
    }

    async fn statement(&self, symbol_raw: &str, date_raw: &str) -> Result<Snapshot, FetchError> {
        let (security, window) = self.resolve(symbol_raw, date_raw)?;
        let anchor = window.anchor();
        let span = info_span!(
            "fetch_statement",
            trace_id = %generate_trace_id(),
            security = %security,
            kind = %self.fetcher.kind(),
            anchor = %anchor
        );

        async {
            if let Some(snapshot) = self.cache.get(&security, anchor) {
                debug!("Cache hit");
                return Ok(snapshot);
            }
            debug!("Cache miss");

            let mut snapshots = self.load(&security, &window).await?;
            snapshots.remove(&anchor).ok_or_else(|| {
                warn!(received = snapshots.len(), "Provider returned no record for anchor period");
                FetchError::MissingAnchor {
                    security: security.clone(),
                    period: anchor,
                }
            })
        }
        .instrument(span)
        .await
    }

    async fn window(&self, symbol_raw: &str, date_raw: &str) -> Result<Vec<Snapshot>, FetchError> {
        let (security, window) = self.resolve(symbol_raw, date_raw)?;
        let span = info_span!(
            "fetch_window",
            trace_id = %generate_trace_id(),
            security = %security,
            kind = %self.fetcher.kind(),
            anchor = %window.anchor(),
            periods = window.len()
        );

        async {
            if let Some(snapshots) = self.cache.get_window(&security, &window) {
                debug!("Cache hit for whole window");
                return Ok(snapshots);
            }
            debug!("Cache miss");

            let snapshots = self.load(&security, &window).await?;
            Ok(snapshots.into_values().rev().collect())
        }
        .instrument(span)
        .await
    }

    /// Fetch the window, project surviving records and cache them.
    async fn load(
        &self,
        security: &SecurityKey,
        window: &PeriodWindow,
    ) -> Result<BTreeMap<FiscalPeriod, Snapshot>, FetchError> {
        info!(provider = self.fetcher.name(), periods = window.len(), "Fetching statements");

        let payload = self.fetcher.fetch(security, window).await.inspect_err(|e| {
            warn!(error = %e, "Statement fetch failed");
        })?;

        if !payload.success {
            let message = payload
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "provider reported failure".to_string());
            warn!(message = %message, "Provider rejected statement request");
            return Err(FetchError::Provider(message));
        }

        let received = payload.records.len();
        let kind = self.fetcher.kind();
        let mut malformed = 0usize;
        let mut snapshots = BTreeMap::new();

        for raw in payload.records {
            let record = match StatementRecord::try_from(raw) {
                Ok(record) => record,
                Err(e) => {
                    malformed += 1;
                    warn!(error = %e, "Dropping malformed record");
                    continue;
                }
            };

            if !window.contains(&record.period) {
                debug!(period = %record.period, "Dropping record outside requested window");
                continue;
            }

            // Duplicate periods: the later record wins
            snapshots.insert(record.period, project(kind, security, record.period, &record));
        }

        if snapshots.is_empty() && malformed > 0 {
            return Err(FetchError::MalformedRecord(format!(
                "{malformed} of {received} records unusable"
            )));
        }

        for (period, snapshot) in &snapshots {
            self.cache.put(security, *period, snapshot);
        }
        self.cache.maybe_evict(self.cache_capacity);

        debug!(received, cached = snapshots.len(), malformed, "Statements cached");
        Ok(snapshots)
    }
}

// ============================================================================
// Fetch Orchestrator
// ============================================================================

/// Serves snapshots of one statement kind from a cache backed by a fetcher.
pub struct FetchOrchestrator {
    fetcher: Arc<dyn StatementFetcher>,
    cache: Arc<SnapshotCache>,
    validator: QueryValidator,
    window_size: usize,
    cache_capacity: usize,
}

impl FetchOrchestrator {
    pub fn new(fetcher: Arc<dyn StatementFetcher>, cache: Arc<SnapshotCache>) -> Self {
        Self {
            fetcher,
            cache,
            validator: QueryValidator::new(),
            window_size: DEFAULT_WINDOW_SIZE,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    pub fn with_validator(mut self, validator: QueryValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    pub fn kind(&self) -> StatementKind {
        self.fetcher.kind()
    }

    pub fn cache(&self) -> &Arc<SnapshotCache> {
        &self.cache
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    fn pipeline(&self) -> Pipeline<'_> {
        Pipeline {
            fetcher: self.fetcher.as_ref(),
            cache: &self.cache,
            validator: &self.validator,
            window_size: self.window_size,
            cache_capacity: self.cache_capacity,
        }
    }

    /// Snapshot for the latest quarter-end on or before `date_raw`.
    pub async fn fetch_statement(
        &self,
        symbol_raw: &str,
        date_raw: &str,
    ) -> Result<Snapshot, FetchError> {
        self.pipeline().statement(symbol_raw, date_raw).await
    }

    /// Every available snapshot of the trailing window, newest first.
    pub async fn fetch_window(
        &self,
        symbol_raw: &str,
        date_raw: &str,
    ) -> Result<Vec<Snapshot>, FetchError> {
        self.pipeline().window(symbol_raw, date_raw).await
    }
}

/// Fetch the anchor snapshot through `fetcher`, using `cache` for reuse.
///
/// Uses the default validator (no trading-day check) and the default cache
/// capacity.
pub async fn fetch_statement(
    symbol_raw: &str,
    date_raw: &str,
    fetcher: &dyn StatementFetcher,
    cache: &SnapshotCache,
    window_size: usize,
) -> Result<Snapshot, FetchError> {
    let validator = QueryValidator::new();
    Pipeline {
        fetcher,
        cache,
        validator: &validator,
        window_size,
        cache_capacity: DEFAULT_CACHE_CAPACITY,
    }
    .statement(symbol_raw, date_raw)
    .await
}
