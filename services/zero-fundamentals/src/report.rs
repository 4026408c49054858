//! Plain-text summaries of snapshots.

use std::fmt::Write;

use crate::statement::{Snapshot, StatementKind};

/// Format an amount with thousands separators and two decimals.
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Liabilities over assets, `None` when assets are zero.
pub fn debt_ratio(snapshot: &Snapshot) -> Option<f64> {
    let assets = snapshot.value("资产负债表", "总资产(元)")?;
    let liabilities = snapshot.value("资产负债表", "总负债(元)")?;
    (assets != 0.0).then(|| liabilities / assets)
}

fn header(out: &mut String, snapshot: &Snapshot) {
    let info = &snapshot.info;
    let _ = writeln!(
        out,
        "=== {} {} ({}) ===",
        snapshot.period,
        info.report_type.as_deref().unwrap_or("-"),
        snapshot.kind.title()
    );
    let _ = writeln!(
        out,
        "股票: {}({})",
        info.name.as_deref().unwrap_or("-"),
        info.secucode.as_deref().unwrap_or(&snapshot.security.to_string())
    );
    let _ = writeln!(out, "公告日期: {}", info.notice_date.as_deref().unwrap_or("-"));
}

fn amount_line(out: &mut String, snapshot: &Snapshot, section: &str, label: &str, name: &str) {
    let value = snapshot.value(section, label).unwrap_or(0.0);
    let _ = writeln!(out, "{name}: {}", format_amount(value));
}

fn balance_sheet(out: &mut String, snapshot: &Snapshot) {
    let _ = writeln!(out, "\n【资产负债表】");
    amount_line(out, snapshot, "资产负债表", "总资产(元)", "总资产");
    amount_line(out, snapshot, "资产负债表", "总负债(元)", "总负债");
    amount_line(out, snapshot, "资产负债表", "股东权益合计(元)", "股东权益");
    match debt_ratio(snapshot) {
        Some(ratio) => {
            let _ = writeln!(out, "资产负债率: {:.2}%", ratio * 100.0);
        }
        None => {
            let _ = writeln!(out, "资产负债率: -");
        }
    }

    let _ = writeln!(out, "\n【关键科目】");
    amount_line(out, snapshot, "关键科目", "货币资金(元)", "货币资金");
    amount_line(out, snapshot, "关键科目", "存货(元)", "存货");
    amount_line(out, snapshot, "关键科目", "合同负债(元)", "合同负债");

    let _ = writeln!(out, "\n【同比增长】");
    for (label, name) in [("总资产增长率(%)", "总资产增长"), ("股东权益增长率(%)", "股东权益增长")] {
        let value = snapshot.value("同比增长", label).unwrap_or(0.0);
        let _ = writeln!(out, "{name}: {value:.2}%");
    }
}

fn income_statement(out: &mut String, snapshot: &Snapshot) {
    let _ = writeln!(out, "\n关键财务指标:");
    for label in ["营业收入", "营业利润", "净利润", "归属于母公司股东的净利润"] {
        amount_line(out, snapshot, "利润表", label, label);
    }
}

/// Render a short human-readable summary of one snapshot.
pub fn render_summary(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    header(&mut out, snapshot);
    match snapshot.kind {
        StatementKind::BalanceSheet => balance_sheet(&mut out, snapshot),
        StatementKind::IncomeStatement => income_statement(&mut out, snapshot),
    }
    out
}
