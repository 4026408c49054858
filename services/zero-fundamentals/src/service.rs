//! Configured statement service.
//!
//! Wires one orchestrator per statement kind, each with its own snapshot
//! cache, from the `fundamentals` config section.

use std::sync::Arc;
use tracing::info;
use zero_common::{Error, FundamentalsConfig, Result};

use crate::cache::SnapshotCache;
use crate::eastmoney::EastmoneyFetcher;
use crate::orchestrator::FetchOrchestrator;
use crate::provider::StatementFetcher;
use crate::statement::StatementKind;
use crate::validation::{QueryValidator, TradingCalendar};

/// Balance sheet and income statement orchestrators sharing one config.
pub struct FundamentalsService {
    balance: FetchOrchestrator,
    income: FetchOrchestrator,
}

impl FundamentalsService {
    /// Build the service against the Eastmoney datacenter.
    pub fn from_config(config: &FundamentalsConfig) -> Result<Self> {
        Self::with_fetchers(
            config,
            Arc::new(EastmoneyFetcher::new(StatementKind::BalanceSheet, &config.provider)),
            Arc::new(EastmoneyFetcher::new(StatementKind::IncomeStatement, &config.provider)),
        )
    }

    /// Build the service with explicit fetchers.
    pub fn with_fetchers(
        config: &FundamentalsConfig,
        balance: Arc<dyn StatementFetcher>,
        income: Arc<dyn StatementFetcher>,
    ) -> Result<Self> {
        if balance.kind() != StatementKind::BalanceSheet
            || income.kind() != StatementKind::IncomeStatement
        {
            return Err(Error::Config("fetcher statement kinds do not match their slots".into()));
        }

        let validator = Self::validator(config)?;
        let build = |fetcher: Arc<dyn StatementFetcher>| {
            FetchOrchestrator::new(fetcher, Arc::new(SnapshotCache::new()))
                .with_validator(validator.clone())
                .with_window_size(config.window_size)
                .with_cache_capacity(config.cache_capacity)
        };

        info!(
            window_size = config.window_size,
            cache_capacity = config.cache_capacity,
            check_trading_day = validator.checks_trading_days(),
            "Fundamentals service ready"
        );

        Ok(Self {
            balance: build(balance),
            income: build(income),
        })
    }

    fn validator(config: &FundamentalsConfig) -> Result<QueryValidator> {
        if !config.check_trading_day {
            return Ok(QueryValidator::new());
        }

        let path = config.trading_calendar.as_ref().ok_or_else(|| {
            Error::Config("check_trading_day requires fundamentals.trading_calendar".into())
        })?;
        let calendar = TradingCalendar::load(path)?;
        Ok(QueryValidator::with_calendar(Arc::new(calendar)))
    }

    pub fn orchestrator(&self, kind: StatementKind) -> &FetchOrchestrator {
        match kind {
            StatementKind::BalanceSheet => &self.balance,
            StatementKind::IncomeStatement => &self.income,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_config_defaults() {
        let service = FundamentalsService::from_config(&FundamentalsConfig::default()).unwrap();
        for kind in StatementKind::ALL {
            let orchestrator = service.orchestrator(kind);
            assert_eq!(orchestrator.kind(), kind);
            assert_eq!(orchestrator.window_size(), 4);
        }
        assert!(!Arc::ptr_eq(
            service.orchestrator(StatementKind::BalanceSheet).cache(),
            service.orchestrator(StatementKind::IncomeStatement).cache()
        ));
    }

    #[test]
    fn test_swapped_fetchers_rejected() {
        let config = FundamentalsConfig::default();
        let result = FundamentalsService::with_fetchers(
            &config,
            Arc::new(EastmoneyFetcher::with_defaults(StatementKind::IncomeStatement)),
            Arc::new(EastmoneyFetcher::with_defaults(StatementKind::BalanceSheet)),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_trading_calendar_required_and_loaded() {
        let mut config = FundamentalsConfig {
            check_trading_day: true,
            ..FundamentalsConfig::default()
        };
        assert!(FundamentalsService::from_config(&config).is_err());

        config.trading_calendar = Some(PathBuf::from("/nonexistent/calendar.json"));
        assert!(FundamentalsService::from_config(&config).is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.json");
        std::fs::write(&path, r#"["2024-05-06"]"#).unwrap();
        config.trading_calendar = Some(path);
        assert!(FundamentalsService::from_config(&config).is_ok());
    }
}
