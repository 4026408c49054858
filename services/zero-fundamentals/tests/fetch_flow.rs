//! Integration tests for the statement fetch flow.
//!
//! Exercises the orchestrator against mock fetchers: cache reuse, failure
//! isolation, eviction and concurrent misses for the same slot.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use zero_fundamentals::{
    fetch_statement, FetchError, FetchOrchestrator, FiscalPeriod, PeriodWindow, ProviderPayload,
    Quarter, RawRecord, SecurityKey, SnapshotCache, StatementFetcher, StatementKind,
};

// ============================================================================
// Mock Fetchers for Testing
// ============================================================================

/// Mock fetcher that answers every period of the requested window.
///
/// Each call stamps its records with the call number so tests can tell
/// which response ended up in the cache.
struct MockFetcher {
    kind: StatementKind,
    delay: Duration,
    skip_anchor: bool,
    calls: AtomicU32,
}

impl MockFetcher {
    fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            delay: Duration::ZERO,
            skip_anchor: false,
            calls: AtomicU32::new(0),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn without_anchor(mut self) -> Self {
        self.skip_anchor = true;
        self
    }

    fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

fn record(security: &SecurityKey, period: &FiscalPeriod, stamp: u32) -> RawRecord {
    let value = json!({
        "REPORT_DATE": format!("{period} 00:00:00"),
        "SECUCODE": security.to_string(),
        "TOTAL_ASSETS": f64::from(stamp) * 100.0,
        "TOTAL_LIABILITIES": f64::from(stamp) * 40.0,
        "NETPROFIT": f64::from(stamp),
    });
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[async_trait]
impl StatementFetcher for MockFetcher {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn kind(&self) -> StatementKind {
        self.kind
    }

    async fn fetch(
        &self,
        security: &SecurityKey,
        window: &PeriodWindow,
    ) -> Result<ProviderPayload, FetchError> {
        let stamp = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let anchor = window.anchor();
        let records = window
            .iter()
            .filter(|p| !(self.skip_anchor && **p == anchor))
            .map(|p| record(security, p, stamp))
            .collect();
        Ok(ProviderPayload::ok(records))
    }
}

/// Mock fetcher that always fails the same way.
struct FailingFetcher {
    error: FetchError,
    calls: AtomicU32,
}

impl FailingFetcher {
    fn new(error: FetchError) -> Self {
        Self {
            error,
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl StatementFetcher for FailingFetcher {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn kind(&self) -> StatementKind {
        StatementKind::BalanceSheet
    }

    async fn fetch(
        &self,
        _security: &SecurityKey,
        _window: &PeriodWindow,
    ) -> Result<ProviderPayload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

fn total_assets(snapshot: &zero_fundamentals::Snapshot) -> f64 {
    snapshot.value("资产负债表", "总资产(元)").unwrap_or_default()
}

// ============================================================================
// Cache Reuse Tests
// ============================================================================

#[tokio::test]
async fn test_second_query_served_from_cache() {
    let fetcher = Arc::new(MockFetcher::new(StatementKind::BalanceSheet));
    let cache = Arc::new(SnapshotCache::new());
    let orchestrator = FetchOrchestrator::new(fetcher.clone(), cache.clone());

    let first = orchestrator.fetch_statement("600519", "2024-05-01").await.unwrap();
    let second = orchestrator.fetch_statement("600519.SH", "2024-06-29").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.period, FiscalPeriod::new(2024, Quarter::Q1));
    assert_eq!(fetcher.call_count(), 1);
    // Anchor plus four trailing periods
    assert_eq!(cache.len(), 5);
}

#[tokio::test]
async fn test_earlier_period_cached_by_window_fetch() {
    let fetcher = Arc::new(MockFetcher::new(StatementKind::BalanceSheet));
    let orchestrator =
        FetchOrchestrator::new(fetcher.clone(), Arc::new(SnapshotCache::new()));

    orchestrator.fetch_statement("000001", "2024-08-01").await.unwrap();
    // 2023-12-31 arrived with the first window
    let snapshot = orchestrator.fetch_statement("000001", "2024-02-15").await.unwrap();

    assert_eq!(snapshot.period, FiscalPeriod::new(2023, Quarter::Q4));
    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn test_free_function_matches_orchestrator() {
    let fetcher = MockFetcher::new(StatementKind::IncomeStatement);
    let cache = SnapshotCache::new();

    let snapshot = fetch_statement("830799", "2023-11-20", &fetcher, &cache, 2)
        .await
        .unwrap();
    assert_eq!(snapshot.security.to_string(), "830799.BJ");
    assert_eq!(snapshot.period.to_string(), "2023-09-30");
    assert_eq!(snapshot.kind, StatementKind::IncomeStatement);
    assert_eq!(snapshot.value("利润表", "净利润"), Some(1.0));
    assert_eq!(cache.len(), 3);
}

#[tokio::test]
async fn test_cached_copy_is_isolated() {
    let fetcher = Arc::new(MockFetcher::new(StatementKind::BalanceSheet));
    let cache = Arc::new(SnapshotCache::new());
    let orchestrator = FetchOrchestrator::new(fetcher, cache.clone());

    let mut snapshot = orchestrator.fetch_statement("600519", "2024-05-01").await.unwrap();
    snapshot.sections.clear();

    let again = orchestrator.fetch_statement("600519", "2024-05-01").await.unwrap();
    assert!(!again.sections.is_empty());
    assert_eq!(total_assets(&again), 100.0);
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_transport_failure_is_not_retried() {
    let fetcher = Arc::new(FailingFetcher::new(FetchError::Transport(
        "connection refused".into(),
    )));
    let cache = Arc::new(SnapshotCache::new());
    let orchestrator = FetchOrchestrator::new(fetcher.clone(), cache.clone());

    let err = orchestrator.fetch_statement("600519", "2024-05-01").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_invalid_input_never_reaches_fetcher() {
    let fetcher = Arc::new(FailingFetcher::new(FetchError::Transport("unused".into())));
    let orchestrator = FetchOrchestrator::new(fetcher.clone(), Arc::new(SnapshotCache::new()));

    for (symbol, date) in [
        ("", "2024-05-01"),
        ("60051", "2024-05-01"),
        ("600519", "2999-01-01"),
        ("600519", "not-a-date"),
    ] {
        let err = orchestrator.fetch_statement(symbol, date).await.unwrap_err();
        assert!(err.is_validation(), "{symbol} {date}: {err}");
    }
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_anchor_reported() {
    let fetcher = Arc::new(MockFetcher::new(StatementKind::BalanceSheet).without_anchor());
    let cache = Arc::new(SnapshotCache::new());
    let orchestrator = FetchOrchestrator::new(fetcher, cache.clone());

    let err = orchestrator.fetch_statement("600519", "2024-05-01").await.unwrap_err();
    assert!(matches!(err, FetchError::MissingAnchor { .. }));
    assert_eq!(cache.len(), 4);
}

// ============================================================================
// Eviction Tests
// ============================================================================

#[tokio::test]
async fn test_eviction_clears_earlier_securities() {
    let fetcher = Arc::new(MockFetcher::new(StatementKind::BalanceSheet));
    let cache = Arc::new(SnapshotCache::new());
    let orchestrator = FetchOrchestrator::new(fetcher.clone(), cache.clone())
        .with_window_size(1)
        .with_cache_capacity(3);

    orchestrator.fetch_statement("600519", "2024-05-01").await.unwrap();
    assert_eq!(cache.len(), 2);

    // Four entries exceed the capacity of three
    orchestrator.fetch_statement("000001", "2024-05-01").await.unwrap();
    assert!(cache.is_empty());

    let key = SecurityKey::parse("600519").unwrap();
    assert!(cache.get(&key, FiscalPeriod::new(2024, Quarter::Q1)).is_none());

    // Next query goes back to the provider
    orchestrator.fetch_statement("600519", "2024-05-01").await.unwrap();
    assert_eq!(fetcher.call_count(), 3);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_misses_end_consistent() {
    let fetcher = Arc::new(
        MockFetcher::new(StatementKind::BalanceSheet).with_delay(Duration::from_millis(50)),
    );
    let cache = Arc::new(SnapshotCache::new());
    let orchestrator = Arc::new(FetchOrchestrator::new(fetcher.clone(), cache.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.fetch_statement("600519", "2024-05-01").await })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap().unwrap());
    }

    let calls = fetcher.call_count();
    assert!((1..=8).contains(&calls));
    for snapshot in &results {
        assert_eq!(snapshot.period, FiscalPeriod::new(2024, Quarter::Q1));
        let stamp = total_assets(snapshot) / 100.0;
        assert!((1.0..=f64::from(calls)).contains(&stamp));
    }

    // Whatever won, the cache holds one complete window of five periods
    assert_eq!(cache.len(), 5);
    let key = SecurityKey::parse("600519").unwrap();
    let cached = cache.get(&key, FiscalPeriod::new(2024, Quarter::Q1)).unwrap();
    let liabilities = cached.value("资产负债表", "总负债(元)").unwrap();
    // Both figures come from the same response
    assert_eq!(liabilities / 40.0, total_assets(&cached) / 100.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cache_readers_not_blocked_by_slow_fetch() {
    let fetcher = Arc::new(
        MockFetcher::new(StatementKind::BalanceSheet).with_delay(Duration::from_millis(300)),
    );
    let cache = Arc::new(SnapshotCache::new());
    let key = SecurityKey::parse("000001").unwrap();
    let period = FiscalPeriod::new(2024, Quarter::Q1);

    // Seed one entry directly
    let seeded = FetchOrchestrator::new(
        Arc::new(MockFetcher::new(StatementKind::BalanceSheet)),
        cache.clone(),
    )
    .with_window_size(0)
    .fetch_statement("000001", "2024-05-01")
    .await
    .unwrap();

    let orchestrator = Arc::new(FetchOrchestrator::new(fetcher, cache.clone()));
    let slow = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.fetch_statement("600519", "2024-05-01").await }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    let started = std::time::Instant::now();
    assert_eq!(cache.get(&key, period), Some(seeded));
    assert!(started.elapsed() < Duration::from_millis(200));

    slow.await.unwrap().unwrap();
}
