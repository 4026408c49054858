//! Projection of raw provider records into snapshots.
//!
//! Each statement kind owns a static table of sections; every line item
//! names the provider fields it sums. The projection is total: a field that
//! is missing, null or non-numeric contributes zero.

use serde_json::Value;

use super::{LineItem, ReportInfo, Snapshot, StatementKind, StatementSection};
use crate::period::FiscalPeriod;
use crate::provider::{RawRecord, StatementRecord};
use crate::security::SecurityKey;

/// A line item and the provider fields summed into it.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub label: &'static str,
    pub fields: &'static [&'static str],
}

impl FieldMapping {
    pub const fn new(label: &'static str, fields: &'static [&'static str]) -> Self {
        Self { label, fields }
    }
}

/// A titled group of field mappings.
#[derive(Debug, Clone, Copy)]
pub struct SectionMapping {
    pub title: &'static str,
    pub items: &'static [FieldMapping],
}

/// Read a provider field as a number.
///
/// Numeric strings are parsed; anything else is zero.
pub fn numeric_value(fields: &RawRecord, key: &str) -> f64 {
    match fields.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn text_value(fields: &RawRecord, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Strip the time part from a provider timestamp such as `2024-04-03 00:00:00`.
pub(crate) fn date_prefix(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or("")
}

fn report_info(fields: &RawRecord) -> ReportInfo {
    ReportInfo {
        secucode: text_value(fields, "SECUCODE"),
        name: text_value(fields, "SECURITY_NAME_ABBR"),
        report_type: text_value(fields, "REPORT_TYPE"),
        currency: text_value(fields, "CURRENCY"),
        notice_date: text_value(fields, "NOTICE_DATE")
            .map(|d| date_prefix(&d).to_string())
            .filter(|d| !d.is_empty()),
    }
}

fn project_section(mapping: &SectionMapping, fields: &RawRecord) -> StatementSection {
    StatementSection {
        title: mapping.title.to_string(),
        items: mapping
            .items
            .iter()
            .map(|item| LineItem {
                label: item.label.to_string(),
                value: item.fields.iter().map(|f| numeric_value(fields, f)).sum(),
            })
            .collect(),
    }
}

/// Project a provider record into a snapshot of `kind`.
pub fn project(
    kind: StatementKind,
    security: &SecurityKey,
    period: FiscalPeriod,
    record: &StatementRecord,
) -> Snapshot {
    Snapshot {
        security: security.clone(),
        period,
        kind,
        info: report_info(&record.fields),
        sections: kind
            .sections()
            .iter()
            .map(|section| project_section(section, &record.fields))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Quarter;
    use serde_json::json;

    fn record(value: Value) -> StatementRecord {
        let Value::Object(fields) = value else {
            panic!("record must be an object");
        };
        StatementRecord {
            period: FiscalPeriod::new(2024, Quarter::Q1),
            fields,
        }
    }

    #[test]
    fn test_numeric_value() {
        let Value::Object(fields) = json!({
            "A": 1.5,
            "B": "2.25",
            "C": null,
            "D": "n/a",
            "E": true,
        }) else {
            unreachable!()
        };
        assert_eq!(numeric_value(&fields, "A"), 1.5);
        assert_eq!(numeric_value(&fields, "B"), 2.25);
        assert_eq!(numeric_value(&fields, "C"), 0.0);
        assert_eq!(numeric_value(&fields, "D"), 0.0);
        assert_eq!(numeric_value(&fields, "E"), 0.0);
        assert_eq!(numeric_value(&fields, "MISSING"), 0.0);
    }

    #[test]
    fn test_empty_record_projects_to_zero() {
        let key = SecurityKey::parse("600519").unwrap();
        for kind in StatementKind::ALL {
            let snapshot = project(kind, &key, FiscalPeriod::new(2024, Quarter::Q1), &record(json!({})));
            assert!(snapshot.rows().count() > 0);
            assert!(snapshot.is_all_zero());
            assert_eq!(snapshot.info, ReportInfo::default());
        }
    }

    #[test]
    fn test_balance_sheet_projection() {
        let key = SecurityKey::parse("600519").unwrap();
        let rec = record(json!({
            "REPORT_DATE": "2024-03-31 00:00:00",
            "SECUCODE": "600519.SH",
            "SECURITY_NAME_ABBR": "贵州茅台",
            "REPORT_TYPE": "一季报",
            "CURRENCY": "CNY",
            "NOTICE_DATE": "2024-04-27 00:00:00",
            "TOTAL_ASSETS": 290_000_000_000.0,
            "TOTAL_LIABILITIES": 40_000_000_000.0,
            "OTHER_EQUITY_TOOL": 3.0,
            "OTHER_EQUITY_OTHER": 4.0,
            "MONETARYFUNDS": null,
        }));

        let snapshot = project(StatementKind::BalanceSheet, &key, rec.period, &rec);
        assert_eq!(snapshot.info.name.as_deref(), Some("贵州茅台"));
        assert_eq!(snapshot.info.notice_date.as_deref(), Some("2024-04-27"));
        assert_eq!(snapshot.value("资产负债表", "总资产(元)"), Some(290_000_000_000.0));
        assert_eq!(snapshot.value("资产", "资产总计"), Some(290_000_000_000.0));
        assert_eq!(snapshot.value("负债", "负债合计"), Some(40_000_000_000.0));
        assert_eq!(snapshot.value("股东权益", "其他权益工具"), Some(7.0));
        assert_eq!(snapshot.value("资产", "货币资金"), Some(0.0));
    }

    #[test]
    fn test_income_statement_projection() {
        let key = SecurityKey::parse("000001").unwrap();
        let rec = record(json!({
            "OPERATE_INCOME": "1000.5",
            "NETPROFIT": 200,
            "PARENT_NETPROFIT": 180,
        }));

        let snapshot = project(StatementKind::IncomeStatement, &key, rec.period, &rec);
        assert_eq!(snapshot.value("利润表", "营业收入"), Some(1000.5));
        assert_eq!(snapshot.value("利润表", "净利润"), Some(200.0));
        assert_eq!(snapshot.value("利润表", "归属于母公司股东的净利润"), Some(180.0));
    }

    #[test]
    fn test_labels_unique_within_section() {
        for kind in StatementKind::ALL {
            for section in kind.sections() {
                let mut labels: Vec<_> = section.items.iter().map(|i| i.label).collect();
                let total = labels.len();
                labels.sort_unstable();
                labels.dedup();
                assert_eq!(labels.len(), total, "duplicate label in {}", section.title);
            }
        }
    }
}
