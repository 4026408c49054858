//! Zero Fundamentals - quarterly financial statement ingestion for A-shares.
//!
//! # Components
//!
//! - **Security keys**: ticker normalization to `CODE.SUFFIX` (SH, SZ, BJ)
//! - **Period resolution**: query date to the latest quarter-end, plus a
//!   trailing window of earlier quarter-ends
//! - **Snapshot cache**: thread-safe store keyed by security and period,
//!   cleared in full when over capacity
//! - **Orchestration**: validate, resolve, check cache, fetch, project, cache
//! - **Providers**: the `StatementFetcher` trait and its Eastmoney datacenter
//!   implementation
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use zero_fundamentals::{EastmoneyFetcher, FetchOrchestrator, SnapshotCache, StatementKind};
//!
//! # async fn run() -> Result<(), zero_fundamentals::FetchError> {
//! let orchestrator = FetchOrchestrator::new(
//!     Arc::new(EastmoneyFetcher::with_defaults(StatementKind::BalanceSheet)),
//!     Arc::new(SnapshotCache::new()),
//! );
//! let snapshot = orchestrator.fetch_statement("600519", "2024-05-01").await?;
//! println!("{}", zero_fundamentals::render_summary(&snapshot));
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod cache;
pub mod eastmoney;
pub mod error;
pub mod orchestrator;
pub mod period;
pub mod provider;
pub mod report;
pub mod security;
pub mod service;
pub mod statement;
pub mod validation;

pub use cache::{CacheStats, SnapshotCache};
pub use eastmoney::EastmoneyFetcher;
pub use error::{DateError, FetchError, SymbolError};
pub use orchestrator::{fetch_statement, FetchOrchestrator, DEFAULT_CACHE_CAPACITY, DEFAULT_WINDOW_SIZE};
pub use period::{nearest_quarter_end, trailing_window, FiscalPeriod, PeriodWindow, Quarter};
pub use provider::{ProviderPayload, RawRecord, StatementFetcher, StatementRecord};
pub use report::render_summary;
pub use security::{Market, SecurityKey};
pub use service::FundamentalsService;
pub use statement::{LineItem, ReportInfo, Snapshot, StatementKind, StatementSection};
pub use validation::{QueryValidator, TradingCalendar};
