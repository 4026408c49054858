//! Normalized statement snapshots.
//!
//! A [`Snapshot`] is one statement for one security and one fiscal period,
//! laid out as titled sections of labelled line items. Values are always
//! numbers: absent provider fields are projected to zero.

mod balance_sheet;
mod income_statement;
pub mod projection;

use serde::Serialize;
use std::fmt;

use crate::period::FiscalPeriod;
use crate::security::SecurityKey;

pub use projection::{numeric_value, project, FieldMapping, SectionMapping};

// ============================================================================
// Statement Kind
// ============================================================================

/// Which financial statement a snapshot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// 资产负债表
    BalanceSheet,
    /// 利润表 (single-quarter figures)
    IncomeStatement,
}

impl StatementKind {
    pub const ALL: [StatementKind; 2] = [Self::BalanceSheet, Self::IncomeStatement];

    /// Datacenter report name (`type` query parameter)
    pub const fn report_name(self) -> &'static str {
        match self {
            Self::BalanceSheet => "RPT_F10_FINANCE_GBALANCE",
            Self::IncomeStatement => "RPT_F10_FINANCE_GINCOMEQC",
        }
    }

    /// Datacenter column style (`sty` query parameter)
    pub const fn style(self) -> &'static str {
        match self {
            Self::BalanceSheet => "F10_FINANCE_GBALANCE",
            Self::IncomeStatement => "PC_F10_GINCOMEQC",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::BalanceSheet => "Balance sheet",
            Self::IncomeStatement => "Income statement",
        }
    }

    /// Section layout used to project provider records of this kind.
    pub fn sections(self) -> &'static [SectionMapping] {
        match self {
            Self::BalanceSheet => balance_sheet::SECTIONS,
            Self::IncomeStatement => income_statement::SECTIONS,
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BalanceSheet => write!(f, "balance"),
            Self::IncomeStatement => write!(f, "income"),
        }
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Descriptive fields reported alongside the figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportInfo {
    /// Provider security code, e.g. `600519.SH`
    pub secucode: Option<String>,
    /// Short security name
    pub name: Option<String>,
    /// e.g. 一季报, 中报, 三季报, 年报
    pub report_type: Option<String>,
    pub currency: Option<String>,
    /// Disclosure date, `YYYY-MM-DD`
    pub notice_date: Option<String>,
}

/// A labelled figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub value: f64,
}

/// A titled group of line items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementSection {
    pub title: String,
    pub items: Vec<LineItem>,
}

impl StatementSection {
    pub fn value(&self, label: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.value)
    }
}

/// One statement for one security and one fiscal period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub security: SecurityKey,
    pub period: FiscalPeriod,
    pub kind: StatementKind,
    pub info: ReportInfo,
    pub sections: Vec<StatementSection>,
}

impl Snapshot {
    pub fn section(&self, title: &str) -> Option<&StatementSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Look up a figure by section title and line-item label.
    pub fn value(&self, section: &str, label: &str) -> Option<f64> {
        self.section(section)?.value(label)
    }

    /// Flatten into `(section, label, value)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.sections.iter().flat_map(|section| {
            section
                .items
                .iter()
                .map(move |item| (section.title.as_str(), item.label.as_str(), item.value))
        })
    }

    pub fn is_all_zero(&self) -> bool {
        self.rows().all(|(_, _, value)| value == 0.0)
    }
}
