//! Report prose. Every paragraph is its own function over the fields it
//! shows; nothing here feeds back into the decision.

use crate::types::input::{IndustryTrend, ProjectInput};
use crate::types::result::{EvaluationResult, Narrative};

const PLACEHOLDER: &str = "—";

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn compose(input: &ProjectInput, result: &EvaluationResult) -> Narrative {
    Narrative {
        intro: intro(input),
        judge_entity: judge_entity(input),
        judge_ability: judge_ability(input),
        judge_operations: judge_operations(input),
        standard: standard(result),
        gaps: gaps(result),
        veto_warning: veto_warning(result),
        conclusion: conclusion(input, result),
    }
}

pub fn intro(input: &ProjectInput) -> String {
    format!(
        "{}，计划投资{:.0}万元，{}；占地{:.2}亩/实际建筑面积{:.0}㎡，建设内容：{}；预计经济效益：年产值{:.0}万元、年税收{:.0}万元、预计带动就业{}人。",
        input.project_name,
        input.invest_total,
        or_placeholder(&input.locate, "拟选址待定"),
        input.land_mu,
        input.building_area,
        or_placeholder(&input.intro_content, "——"),
        input.expected_output,
        input.expected_annual_tax,
        input.expected_jobs,
    )
}

pub fn judge_entity(input: &ProjectInput) -> String {
    let mut entity = format!(
        "{}，{}年注册于{}；",
        input.company_name,
        input.established_year,
        or_placeholder(&input.registered_at, PLACEHOLDER)
    );
    if !input.registered_in_district {
        entity.push_str("尚未注册于园区，");
    }
    entity.push_str(&format!(
        "拟将{}业务导入园区",
        or_placeholder(&input.import_business, "相关")
    ));
    if !input.new_business.trim().is_empty() {
        entity.push_str(&format!("，并拓展{}新业务", input.new_business));
    }
    entity.push('。');

    format!(
        "项目为{}方向，符合园区发展规划；项目主体为{}",
        input.industry.label(),
        entity
    )
}

pub fn judge_ability(input: &ProjectInput) -> String {
    let mut text = format!(
        "该项目主要需求为{}，拟承接载体：{}。项目拟开展业务：{}；具有{}技术/称号，产业链{}、技术创新{}，客户资源{}、市场基础{}。",
        input.need_type.label(),
        input.carrier.label(),
        or_placeholder(&input.intro_content, PLACEHOLDER),
        or_placeholder(&input.tech_titles, "相关"),
        input.chain_maturity.label(),
        input.innovation.label(),
        input.customer_stability.label(),
        input.market_base.label(),
    );
    if !input.chain_segment_fill.trim().is_empty() {
        text.push_str(&format!(
            "入园后，有望填补园区产业链“{}”环节。",
            input.chain_segment_fill
        ));
    }
    text
}

pub fn judge_operations(input: &ProjectInput) -> String {
    let steady = input.revenue_y1 >= input.revenue_y2 && input.tax_y1 >= input.tax_y2;
    let trend = if steady { "稳中向好" } else { "存在波动" };
    let outlook = if steady || input.industry_trend == IndustryTrend::Improving {
        "向好"
    } else {
        "需持续观察"
    };
    format!(
        "企业近两年营收由{:.0}万元变为{:.0}万元，税收由{:.0}万元变为{:.0}万元，整体{}；结合行业当前趋势“{}”，预计落地园区后经济效益{}，并带动产业协同发展。",
        input.revenue_y2,
        input.revenue_y1,
        input.tax_y2,
        input.tax_y1,
        trend,
        input.industry_trend.label(),
        outlook,
    )
}

pub fn standard(result: &EvaluationResult) -> String {
    format!(
        "达标校验：按折算亩{:.2}亩，投资强度{:.1}万/亩，税收强度{:.1}万/亩·年；阈值为投资≥{}万/亩、税收≥{}万/亩·年。",
        result.mu,
        result.invest_intensity,
        result.tax_intensity,
        result.invest_threshold,
        result.tax_threshold,
    )
}

pub fn gaps(result: &EvaluationResult) -> Vec<String> {
    let mut lines = Vec::new();
    if result.pass_hard {
        return lines;
    }
    if result.invest_need > 0.0 {
        lines.push(format!(
            "投资补齐建议：追加固定投资约 {:.0} 万元。",
            result.invest_need
        ));
    }
    if result.tax_need > 0.0 {
        lines.push(format!(
            "税收补齐建议：新增年税收约 {:.0} 万元。",
            result.tax_need
        ));
    }
    lines
}

pub fn veto_warning(result: &EvaluationResult) -> Option<String> {
    result
        .veto
        .then(|| format!("风险提示（命中一票否决）：{}", result.veto_reasons.join("；")))
}

pub fn conclusion(input: &ProjectInput, result: &EvaluationResult) -> Vec<String> {
    vec![
        format!("结论（系统判定）：{}", result.decision.label()),
        format!("参考评分：{:.1} / 100", result.score.total),
        format!(
            "投决会意向（是否拟同意入园）：{}",
            if input.intent_agree { "同意" } else { "不同意" }
        ),
        format!(
            "达产期：{}，按{}个月考核。",
            input.project_type.label(),
            result.horizon_months
        ),
    ]
}
