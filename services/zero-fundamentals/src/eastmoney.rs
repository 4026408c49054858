//! Eastmoney datacenter adapter for quarterly statements.
//!
//! Queries the F10 finance reports of `datacenter.eastmoney.com`, which
//! need no API key. One request covers the whole period window:
//!
//! ```text
//! GET {base_url}?type=RPT_F10_FINANCE_GBALANCE&sty=F10_FINANCE_GBALANCE
//!     &filter=(SECUCODE="600519.SH")(REPORT_DATE in ('2023-06-30',...,'2024-06-30'))
//!     &p=1&ps=5&sr=-1&st=REPORT_DATE&source=HSF10&client=PC
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use zero_common::EastmoneyConfig;

use crate::error::FetchError;
use crate::period::PeriodWindow;
use crate::provider::{ProviderPayload, RawRecord, StatementFetcher};
use crate::security::SecurityKey;
use crate::statement::StatementKind;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct EastmoneyResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: Option<EastmoneyResult>,
}

#[derive(Debug, Deserialize)]
struct EastmoneyResult {
    #[serde(default)]
    data: Option<Vec<RawRecord>>,
}

impl From<EastmoneyResponse> for ProviderPayload {
    fn from(response: EastmoneyResponse) -> Self {
        Self {
            success: response.success,
            message: response.message,
            records: response
                .result
                .and_then(|r| r.data)
                .unwrap_or_default(),
        }
    }
}

// ============================================================================
// Query Construction
// ============================================================================

/// Datacenter filter expression for a security and window.
fn build_filter(security: &SecurityKey, window: &PeriodWindow) -> String {
    let dates = window
        .iter()
        .map(|p| format!("'{}'", p))
        .collect::<Vec<_>>()
        .join(",");
    format!("(SECUCODE=\"{}\")(REPORT_DATE in ({}))", security, dates)
}

// ============================================================================
// Eastmoney Fetcher
// ============================================================================

/// Statement fetcher backed by the Eastmoney datacenter.
pub struct EastmoneyFetcher {
    client: reqwest::Client,
    kind: StatementKind,
    base_url: String,
    source: String,
    client_tag: String,
}

impl EastmoneyFetcher {
    pub fn new(kind: StatementKind, config: &EastmoneyConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            kind,
            base_url: config.base_url.clone(),
            source: config.source.clone(),
            client_tag: config.client.clone(),
        }
    }

    /// Fetcher with default endpoint settings.
    pub fn with_defaults(kind: StatementKind) -> Self {
        Self::new(kind, &EastmoneyConfig::default())
    }

    fn query(&self, security: &SecurityKey, window: &PeriodWindow) -> Vec<(&'static str, String)> {
        vec![
            ("type", self.kind.report_name().to_string()),
            ("sty", self.kind.style().to_string()),
            ("filter", build_filter(security, window)),
            ("p", "1".to_string()),
            ("ps", window.len().to_string()),
            ("sr", "-1".to_string()),
            ("st", "REPORT_DATE".to_string()),
            ("source", self.source.clone()),
            ("client", self.client_tag.clone()),
        ]
    }
}

#[async_trait]
impl StatementFetcher for EastmoneyFetcher {
    fn name(&self) -> &'static str {
        "eastmoney"
    }

    fn kind(&self) -> StatementKind {
        self.kind
    }

    async fn fetch(
        &self,
        security: &SecurityKey,
        window: &PeriodWindow,
    ) -> Result<ProviderPayload, FetchError> {
        debug!(
            security = %security,
            report = self.kind.report_name(),
            periods = ?window.to_strings(),
            "Fetching statements from eastmoney"
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query(security, window))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(FetchError::Transport(format!("HTTP {}", status)));
        }

        let data: EastmoneyResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to parse response: {}", e)))?;

        let payload = ProviderPayload::from(data);
        debug!(
            security = %security,
            success = payload.success,
            records = payload.records.len(),
            "Eastmoney response received"
        );
        Ok(payload)
    }
}
