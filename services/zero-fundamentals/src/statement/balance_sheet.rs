//! Balance sheet layout (RPT_F10_FINANCE_GBALANCE).

use super::projection::{FieldMapping, SectionMapping};

pub(super) static SECTIONS: &[SectionMapping] = &[
    SectionMapping {
        title: "资产负债表",
        items: SUMMARY,
    },
    SectionMapping {
        title: "资产",
        items: ASSETS,
    },
    SectionMapping {
        title: "负债",
        items: LIABILITIES,
    },
    SectionMapping {
        title: "股东权益",
        items: EQUITY,
    },
    SectionMapping {
        title: "关键科目",
        items: KEY_ITEMS,
    },
    SectionMapping {
        title: "同比增长",
        items: YOY_GROWTH,
    },
];

const SUMMARY: &[FieldMapping] = &[
    FieldMapping::new("流动资产合计(元)", &["TOTAL_CURRENT_ASSETS"]),
    FieldMapping::new("非流动资产合计(元)", &["TOTAL_NONCURRENT_ASSETS"]),
    FieldMapping::new("总资产(元)", &["TOTAL_ASSETS"]),
    FieldMapping::new("流动负债合计(元)", &["TOTAL_CURRENT_LIAB"]),
    FieldMapping::new("非流动负债合计(元)", &["TOTAL_NONCURRENT_LIAB"]),
    FieldMapping::new("总负债(元)", &["TOTAL_LIABILITIES"]),
    FieldMapping::new("股东权益合计(元)", &["TOTAL_EQUITY"]),
];

const ASSETS: &[FieldMapping] = &[
    FieldMapping::new("货币资金", &["MONETARYFUNDS"]),
    FieldMapping::new("结算备付金", &["SETTLE_EXCESS_RESERVE"]),
    FieldMapping::new("拆出资金", &["LEND_FUND"]),
    FieldMapping::new("交易性金融资产", &["TRADE_FINASSET_NOTFVTPL"]),
    FieldMapping::new("融出资金", &["FIN_FUND"]),
    FieldMapping::new("以公允价值计量且其变动计入当期损益的金融资产", &["FVTPL_FINASSET"]),
    FieldMapping::new("指定以公允价值计量且其变动计入当期损益的金融资产", &["APPOINT_FVTPL_FINASSET"]),
    FieldMapping::new("衍生金融资产", &["DERIVE_FINASSET"]),
    FieldMapping::new("应收票据及应收账款", &["NOTE_ACCOUNTS_RECE"]),
    FieldMapping::new("应收票据", &["NOTE_RECE"]),
    FieldMapping::new("应收账款", &["ACCOUNTS_RECE"]),
    FieldMapping::new("应收款项融资", &["FINANCE_RECE"]),
    FieldMapping::new("预付款项", &["PREPAYMENT"]),
    FieldMapping::new("应收保费", &["PREMIUM_RECE"]),
    FieldMapping::new("应收分保账款", &["REINSURE_RECE"]),
    FieldMapping::new("应收分保合同准备金", &["RC_RESERVE_RECE"]),
    FieldMapping::new("其他应收款合计", &["TOTAL_OTHER_RECE"]),
    FieldMapping::new("应收利息", &["INTEREST_RECE"]),
    FieldMapping::new("应收股利", &["DIVIDEND_RECE"]),
    FieldMapping::new("其他应收款", &["OTHER_RECE"]),
    FieldMapping::new("应收出口退税", &["EXPORT_REFUND_RECE"]),
    FieldMapping::new("应收补贴款", &["SUBSIDY_RECE"]),
    FieldMapping::new("内部应收款", &["INTERNAL_RECE"]),
    FieldMapping::new("买入返售金融资产", &["BUY_RESALE_FINASSET"]),
    FieldMapping::new("以摊余成本计量的金融资产", &["AMORTIZE_COST_FINASSET"]),
    FieldMapping::new("以公允价值计量且其变动计入其他综合收益的金融资产", &["FVTOCI_FINASSET"]),
    FieldMapping::new("存货", &["INVENTORY"]),
    FieldMapping::new("合同资产", &["CONTRACT_ASSET"]),
    FieldMapping::new("持有待售资产", &["HOLDSALE_ASSET"]),
    FieldMapping::new("一年内到期的非流动资产", &["NONCURRENT_ASSET_1YEAR"]),
    FieldMapping::new("其他流动资产", &["OTHER_CURRENT_ASSET"]),
    FieldMapping::new("流动资产其他项目", &["CURRENT_ASSET_OTHER"]),
    FieldMapping::new("流动资产合计", &["TOTAL_CURRENT_ASSETS"]),
    FieldMapping::new("发放贷款及垫款", &["LOAN_ADVANCE"]),
    FieldMapping::new("债权投资", &["CREDITOR_INVEST"]),
    FieldMapping::new("以摊余成本计量的金融资产（非流动）", &["AMORTIZE_COST_NCFINASSET"]),
    FieldMapping::new("其他债权投资", &["OTHER_CREDITOR_INVEST"]),
    FieldMapping::new("以公允价值计量且其变动计入其他综合收益的金融资产（非流动）", &["FVTOCI_NCFINASSET"]),
    FieldMapping::new("可供出售金融资产", &["AVAILABLE_SALE_FINASSET"]),
    FieldMapping::new("持有至到期投资", &["HOLD_MATURITY_INVEST"]),
    FieldMapping::new("长期应收款", &["LONG_RECE"]),
    FieldMapping::new("长期股权投资", &["LONG_EQUITY_INVEST"]),
    FieldMapping::new("其他权益工具投资", &["OTHER_EQUITY_INVEST"]),
    FieldMapping::new("其他非流动金融资产", &["OTHER_NONCURRENT_FINASSET"]),
    FieldMapping::new("投资性房地产", &["INVEST_REALESTATE"]),
    FieldMapping::new("固定资产", &["FIXED_ASSET"]),
    FieldMapping::new("在建工程", &["CIP"]),
    FieldMapping::new("使用权资产", &["USERIGHT_ASSET"]),
    FieldMapping::new("工程物资", &["PROJECT_MATERIAL"]),
    FieldMapping::new("固定资产清理", &["FIXED_ASSET_DISPOSAL"]),
    FieldMapping::new("生产性生物资产", &["PRODUCTIVE_BIOLOGY_ASSET"]),
    FieldMapping::new("油气资产", &["OIL_GAS_ASSET"]),
    FieldMapping::new("无形资产", &["INTANGIBLE_ASSET"]),
    FieldMapping::new("开发支出", &["DEVELOP_EXPENSE"]),
    FieldMapping::new("商誉", &["GOODWILL"]),
    FieldMapping::new("长期待摊费用", &["LONG_PREPAID_EXPENSE"]),
    FieldMapping::new("递延所得税资产", &["DEFER_TAX_ASSET"]),
    FieldMapping::new("其他非流动资产", &["OTHER_NONCURRENT_ASSET"]),
    FieldMapping::new("非流动资产其他项目", &["NONCURRENT_ASSET_OTHER"]),
    FieldMapping::new("非流动资产平衡项目", &["NONCURRENT_ASSET_BALANCE"]),
    FieldMapping::new("非流动资产合计", &["TOTAL_NONCURRENT_ASSETS"]),
    FieldMapping::new("资产其他项目", &["ASSET_OTHER"]),
    FieldMapping::new("资产总计", &["TOTAL_ASSETS"]),
];

const LIABILITIES: &[FieldMapping] = &[
    FieldMapping::new("短期借款", &["SHORT_LOAN"]),
    FieldMapping::new("向中央银行借款", &["LOAN_PBC"]),
    FieldMapping::new("吸收存款及同业存放", &["ACCEPT_DEPOSIT_INTERBANK"]),
    FieldMapping::new("拆入资金", &["BORROW_FUND"]),
    FieldMapping::new("交易性金融负债", &["TRADE_FINLIAB_NOTFVTPL"]),
    FieldMapping::new("以公允价值计量且其变动计入当期损益的金融负债", &["FVTPL_FINLIAB"]),
    FieldMapping::new("指定以公允价值计量且其变动计入当期损益的金融负债", &["APPOINT_FVTPL_FINLIAB"]),
    FieldMapping::new("衍生金融负债", &["DERIVE_FINLIAB"]),
    FieldMapping::new("应付票据及应付账款", &["NOTE_ACCOUNTS_PAYABLE"]),
    FieldMapping::new("应付票据", &["NOTE_PAYABLE"]),
    FieldMapping::new("应付账款", &["ACCOUNTS_PAYABLE"]),
    FieldMapping::new("预收款项", &["ADVANCE_RECEIVABLES"]),
    FieldMapping::new("合同负债", &["CONTRACT_LIAB"]),
    FieldMapping::new("卖出回购金融资产款", &["SELL_REPO_FINASSET"]),
    FieldMapping::new("应付手续费及佣金", &["FEE_COMMISSION_PAYABLE"]),
    FieldMapping::new("应付职工薪酬", &["STAFF_SALARY_PAYABLE"]),
    FieldMapping::new("应交税费", &["TAX_PAYABLE"]),
    FieldMapping::new("其他应付款合计", &["TOTAL_OTHER_PAYABLE"]),
    FieldMapping::new("应付利息", &["INTEREST_PAYABLE"]),
    FieldMapping::new("应付股利", &["DIVIDEND_PAYABLE"]),
    FieldMapping::new("其他应付款", &["OTHER_PAYABLE"]),
    FieldMapping::new("应付分保账款", &["REINSURE_PAYABLE"]),
    FieldMapping::new("内部应付款", &["INTERNAL_PAYABLE"]),
    FieldMapping::new("预计流动负债", &["PREDICT_CURRENT_LIAB"]),
    FieldMapping::new("保险合同准备金", &["INSURANCE_CONTRACT_RESERVE"]),
    FieldMapping::new("代理买卖证券款", &["AGENT_TRADE_SECURITY"]),
    FieldMapping::new("代理承销证券款", &["AGENT_UNDERWRITE_SECURITY"]),
    FieldMapping::new("以摊余成本计量的金融负债", &["AMORTIZE_COST_FINLIAB"]),
    FieldMapping::new("应付短期债券", &["SHORT_BOND_PAYABLE"]),
    FieldMapping::new("持有待售负债", &["HOLDSALE_LIAB"]),
    FieldMapping::new("一年内到期的非流动负债", &["NONCURRENT_LIAB_1YEAR"]),
    FieldMapping::new("其他流动负债", &["OTHER_CURRENT_LIAB"]),
    FieldMapping::new("流动负债其他项目", &["CURRENT_LIAB_OTHER"]),
    FieldMapping::new("流动负债平衡项目", &["CURRENT_LIAB_BALANCE"]),
    FieldMapping::new("流动负债合计", &["TOTAL_CURRENT_LIAB"]),
    FieldMapping::new("长期借款", &["LONG_LOAN"]),
    FieldMapping::new("以摊余成本计量的金融负债（非流动）", &["AMORTIZE_COST_NCFINLIAB"]),
    FieldMapping::new("应付债券", &["BOND_PAYABLE"]),
    FieldMapping::new("永续债", &["PERPETUAL_BOND_PAYBALE"]),
    FieldMapping::new("租赁负债", &["LEASE_LIAB"]),
    FieldMapping::new("长期应付款", &["LONG_PAYABLE"]),
    FieldMapping::new("长期应付职工薪酬", &["LONG_STAFFSALARY_PAYABLE"]),
    FieldMapping::new("专项应付款", &["SPECIAL_PAYABLE"]),
    FieldMapping::new("预计负债", &["PREDICT_LIAB"]),
    FieldMapping::new("递延收益", &["DEFER_INCOME"]),
    FieldMapping::new("递延所得税负债", &["DEFER_TAX_LIAB"]),
    FieldMapping::new("其他非流动负债", &["OTHER_NONCURRENT_LIAB"]),
    FieldMapping::new("非流动负债其他项目", &["NONCURRENT_LIAB_OTHER"]),
    FieldMapping::new("非流动负债平衡项目", &["NONCURRENT_LIAB_BALANCE"]),
    FieldMapping::new("非流动负债合计", &["TOTAL_NONCURRENT_LIAB"]),
    FieldMapping::new("负债其他项目", &["LIAB_OTHER"]),
    FieldMapping::new("负债平衡项目", &["LIAB_BALANCE"]),
    FieldMapping::new("负债合计", &["TOTAL_LIABILITIES"]),
];

const EQUITY: &[FieldMapping] = &[
    FieldMapping::new("实收资本（或股本）", &["SHARE_CAPITAL"]),
    FieldMapping::new("其他权益工具", &["OTHER_EQUITY_TOOL", "OTHER_EQUITY_OTHER"]),
    FieldMapping::new("优先股", &["PREFERRED_SHARES"]),
    FieldMapping::new("永续债", &["PERPETUAL_BOND"]),
    FieldMapping::new("资本公积", &["CAPITAL_RESERVE"]),
    FieldMapping::new("减:库存股", &["TREASURY_SHARES"]),
    FieldMapping::new("其他综合收益", &["OTHER_COMPRE_INCOME"]),
    FieldMapping::new("专项储备", &["SPECIAL_RESERVE"]),
    FieldMapping::new("盈余公积", &["SURPLUS_RESERVE"]),
    FieldMapping::new("一般风险准备", &["GENERAL_RISK_RESERVE"]),
    FieldMapping::new("未确定的投资损失", &["UNCONFIRM_INVEST_LOSS"]),
    FieldMapping::new("未分配利润", &["UNASSIGN_RPOFIT"]),
    FieldMapping::new("拟分配现金股利", &["ASSIGN_CASH_DIVIDEND"]),
    FieldMapping::new("外币报表折算差额", &["CONVERT_DIFF"]),
    FieldMapping::new("归属于母公司股东权益其他项目", &["PARENT_EQUITY_OTHER"]),
    FieldMapping::new("归属于母公司股东权益平衡项目", &["PARENT_EQUITY_BALANCE"]),
    FieldMapping::new("归属于母公司股东权益总计", &["TOTAL_PARENT_EQUITY"]),
    FieldMapping::new("少数股东权益", &["MINORITY_EQUITY"]),
    FieldMapping::new("股东权益其他项目", &["EQUITY_OTHER"]),
    FieldMapping::new("股东权益平衡项目", &["EQUITY_BALANCE"]),
    FieldMapping::new("股东权益合计", &["TOTAL_EQUITY"]),
    FieldMapping::new("负债和股东权益其他项目", &["LIAB_EQUITY_OTHER"]),
    FieldMapping::new("负债及股东权益平衡项目", &["LIAB_EQUITY_BALANCE"]),
    FieldMapping::new("负债和股东权益总计", &["TOTAL_LIAB_EQUITY"]),
];

const KEY_ITEMS: &[FieldMapping] = &[
    FieldMapping::new("货币资金(元)", &["MONETARYFUNDS"]),
    FieldMapping::new("应收账款(元)", &["ACCOUNTS_RECE"]),
    FieldMapping::new("存货(元)", &["INVENTORY"]),
    FieldMapping::new("固定资产(元)", &["FIXED_ASSET"]),
    FieldMapping::new("无形资产(元)", &["INTANGIBLE_ASSET"]),
    FieldMapping::new("应付账款(元)", &["ACCOUNTS_PAYABLE"]),
    FieldMapping::new("合同负债(元)", &["CONTRACT_LIAB"]),
    FieldMapping::new("应交税费(元)", &["TAX_PAYABLE"]),
];

// Year-over-year growth, in percent
const YOY_GROWTH: &[FieldMapping] = &[
    FieldMapping::new("总资产增长率(%)", &["TOTAL_ASSETS_YOY"]),
    FieldMapping::new("股东权益增长率(%)", &["TOTAL_EQUITY_YOY"]),
    FieldMapping::new("存货增长率(%)", &["INVENTORY_YOY"]),
    FieldMapping::new("合同负债增长率(%)", &["CONTRACT_LIAB_YOY"]),
];
