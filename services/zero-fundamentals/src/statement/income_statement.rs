//! Single-quarter income statement layout (RPT_F10_FINANCE_GINCOMEQC).

use super::projection::{FieldMapping, SectionMapping};

pub(super) static SECTIONS: &[SectionMapping] = &[SectionMapping {
    title: "利润表",
    items: INCOME,
}];

const INCOME: &[FieldMapping] = &[
    FieldMapping::new("营业总收入", &["TOTAL_OPERATE_INCOME"]),
    FieldMapping::new("营业收入", &["OPERATE_INCOME"]),
    FieldMapping::new("利息收入", &["INTEREST_INCOME"]),
    FieldMapping::new("已赚保费", &["EARNED_PREMIUM"]),
    FieldMapping::new("手续费及佣金收入", &["FEE_COMMISSION_INCOME"]),
    FieldMapping::new("其他业务收入", &["OTHER_BUSINESS_INCOME"]),
    FieldMapping::new("营业总收入其他项目", &["TOI_OTHER"]),
    FieldMapping::new("营业总成本", &["TOTAL_OPERATE_COST"]),
    FieldMapping::new("营业成本", &["OPERATE_COST"]),
    FieldMapping::new("利息支出", &["INTEREST_EXPENSE"]),
    FieldMapping::new("手续费及佣金支出", &["FEE_COMMISSION_EXPENSE"]),
    FieldMapping::new("研发费用", &["RESEARCH_EXPENSE"]),
    FieldMapping::new("退保金", &["SURRENDER_VALUE"]),
    FieldMapping::new("赔付支出净额", &["NET_COMPENSATE_EXPENSE"]),
    FieldMapping::new("提取保险合同准备金净额", &["NET_CONTRACT_RESERVE"]),
    FieldMapping::new("保单红利支出", &["POLICY_BONUS_EXPENSE"]),
    FieldMapping::new("分保费用", &["REINSURE_EXPENSE"]),
    FieldMapping::new("其他业务成本", &["OTHER_BUSINESS_COST"]),
    FieldMapping::new("营业税金及附加", &["OPERATE_TAX_ADD"]),
    FieldMapping::new("销售费用", &["SALE_EXPENSE"]),
    FieldMapping::new("管理费用", &["MANAGE_EXPENSE"]),
    FieldMapping::new("财务费用", &["FINANCE_EXPENSE"]),
    FieldMapping::new("利息费用", &["FE_INTEREST_EXPENSE"]),
    FieldMapping::new("利息收入(财务费用)", &["FE_INTEREST_INCOME"]),
    FieldMapping::new("资产减值损失", &["ASSET_IMPAIRMENT_LOSS"]),
    FieldMapping::new("信用减值损失", &["CREDIT_IMPAIRMENT_LOSS"]),
    FieldMapping::new("营业总成本其他项目", &["TOC_OTHER"]),
    FieldMapping::new("公允价值变动收益", &["FAIRVALUE_CHANGE_INCOME"]),
    FieldMapping::new("投资收益", &["INVEST_INCOME"]),
    FieldMapping::new("对联营企业和合营企业的投资收益", &["INVEST_JOINT_INCOME"]),
    FieldMapping::new("净敞口套期收益", &["NET_EXPOSURE_INCOME"]),
    FieldMapping::new("汇兑收益", &["EXCHANGE_INCOME"]),
    FieldMapping::new("资产处置收益", &["ASSET_DISPOSAL_INCOME"]),
    FieldMapping::new("其他收益", &["OTHER_INCOME"]),
    FieldMapping::new("营业利润其他项目", &["OPERATE_PROFIT_OTHER"]),
    FieldMapping::new("营业利润平衡项目", &["OPERATE_PROFIT_BALANCE"]),
    FieldMapping::new("营业利润", &["OPERATE_PROFIT"]),
    FieldMapping::new("营业外收入", &["NONBUSINESS_INCOME"]),
    FieldMapping::new("非流动资产处置利得", &["NONCURRENT_DISPOSAL_INCOME"]),
    FieldMapping::new("营业外支出", &["NONBUSINESS_EXPENSE"]),
    FieldMapping::new("非流动资产处置净损失", &["NONCURRENT_DISPOSAL_LOSS"]),
    FieldMapping::new("影响利润总额的其他项目", &["EFFECT_TP_OTHER"]),
    FieldMapping::new("利润总额平衡项目", &["TOTAL_PROFIT_BALANCE"]),
    FieldMapping::new("利润总额", &["TOTAL_PROFIT"]),
    FieldMapping::new("所得税", &["INCOME_TAX"]),
    FieldMapping::new("影响净利润的其他项目", &["EFFECT_NETPROFIT_OTHER"]),
    FieldMapping::new("未确认投资损失", &["UNCONFIRM_INVEST_LOSS"]),
    FieldMapping::new("净利润", &["NETPROFIT"]),
    FieldMapping::new("被合并方在合并前实现利润", &["PRECOMBINE_PROFIT"]),
    FieldMapping::new("持续经营净利润", &["CONTINUED_NETPROFIT"]),
    FieldMapping::new("终止经营净利润", &["DISCONTINUED_NETPROFIT"]),
    FieldMapping::new("归属于母公司股东的净利润", &["PARENT_NETPROFIT"]),
    FieldMapping::new("少数股东损益", &["MINORITY_INTEREST"]),
    FieldMapping::new("扣除非经常性损益后的净利润", &["DEDUCT_PARENT_NETPROFIT"]),
    FieldMapping::new("净利润其他项目", &["NETPROFIT_OTHER"]),
    FieldMapping::new("基本每股收益", &["BASIC_EPS"]),
    FieldMapping::new("稀释每股收益", &["DILUTED_EPS"]),
    FieldMapping::new("其他综合收益", &["OTHER_COMPRE_INCOME"]),
    FieldMapping::new("归属于母公司股东的其他综合收益", &["PARENT_OCI"]),
    FieldMapping::new("归属于少数股东的其他综合收益", &["MINORITY_OCI"]),
    FieldMapping::new("综合收益总额", &["TOTAL_COMPRE_INCOME"]),
    FieldMapping::new("归属于母公司股东的综合收益总额", &["PARENT_TCI"]),
    FieldMapping::new("归属于少数股东的综合收益总额", &["MINORITY_TCI"]),
];
