pub mod advice;
pub mod score;
pub mod veto;

use crate::metrics;
use crate::narrative;
use crate::types::input::ProjectInput;
use crate::types::policy::{Bands, PolicyConfig};
use crate::types::result::{Decision, EvaluationResult, Narrative};
use tracing::{debug, info};

pub fn evaluate(raw: &ProjectInput, policy: &PolicyConfig) -> EvaluationResult {
    let input = raw.normalized();
    let thresholds = policy.thresholds;

    let mu = metrics::normalized_mu(input.land_mu, input.building_area, input.floor_ratio);
    let invest_intensity = metrics::intensity(input.invest_total, mu);
    let tax_intensity = metrics::intensity(input.expected_annual_tax, mu);
    debug!(mu, invest_intensity, tax_intensity, "computed land intensities");

    let veto_reasons = veto::veto_reasons(&input);
    let veto = !veto_reasons.is_empty();

    let pass_invest = mu > 0.0 && invest_intensity >= thresholds.invest_per_mu;
    let pass_tax = mu > 0.0 && tax_intensity >= thresholds.tax_per_mu;
    let pass_hard = pass_invest && pass_tax;

    let invest_need = metrics::shortfall(thresholds.invest_per_mu, mu, input.invest_total);
    let tax_need = metrics::shortfall(thresholds.tax_per_mu, mu, input.expected_annual_tax);

    let score = score::score_project(&input, invest_intensity, tax_intensity, policy);
    debug!(score = score.total, components = score.components.len(), "scored project");

    let decision = decide(veto, pass_hard, score.total, &policy.bands);

    let mut reasons = Vec::new();
    if veto {
        reasons.push(format!("命中一票否决：{}", veto_reasons.join("；")));
    } else if !pass_hard {
        if invest_need > 0.0 {
            reasons.push(format!(
                "投资强度未达标：需追加固定投资约 {invest_need:.0} 万元"
            ));
        }
        if tax_need > 0.0 {
            reasons.push(format!("税收强度未达标：需新增年税收约 {tax_need:.0} 万元"));
        }
    }
    reasons.extend(trend_warnings(&input));

    let advice = advice::advice_for(&input, decision, &policy.advice);
    info!(
        decision = decision.label(),
        score = score.total,
        pass_hard,
        veto,
        "evaluation complete"
    );

    let mut result = EvaluationResult {
        mu,
        invest_intensity,
        tax_intensity,
        invest_threshold: thresholds.invest_per_mu,
        tax_threshold: thresholds.tax_per_mu,
        pass_invest,
        pass_tax,
        pass_hard,
        veto,
        veto_reasons,
        invest_need,
        tax_need,
        score,
        decision,
        horizon_months: policy.horizon.for_project(input.project_type),
        reasons,
        advice,
        narrative: Narrative::default(),
    };
    result.narrative = narrative::compose(&input, &result);
    result
}

pub fn decide(veto: bool, pass_hard: bool, score: f64, bands: &Bands) -> Decision {
    if veto {
        Decision::Defer
    } else if pass_hard && score >= bands.high {
        Decision::Approve
    } else if pass_hard || score >= bands.mid {
        Decision::Conditional
    } else {
        Decision::Defer
    }
}

fn trend_warnings(input: &ProjectInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.revenue_y1 < input.revenue_y2 {
        warnings.push(format!(
            "营业收入同比下降：由 {:.0} 万元降至 {:.0} 万元",
            input.revenue_y2, input.revenue_y1
        ));
    }
    if input.tax_y1 < input.tax_y2 {
        warnings.push(format!(
            "纳税额同比下降：由 {:.0} 万元降至 {:.0} 万元",
            input.tax_y2, input.tax_y1
        ));
    }
    if input.profit_y1 < 0.0 {
        warnings.push(format!("去年净利润为负：{:.0} 万元", input.profit_y1));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::input::CustomerStability;

    fn scenario_one() -> ProjectInput {
        ProjectInput {
            project_name: "高端装备制造项目".to_string(),
            land_mu: 30.0,
            invest_total: 10_000.0,
            expected_annual_tax: 1_500.0,
            ..ProjectInput::default()
        }
    }

    #[test]
    fn scenario_one_meets_both_thresholds() {
        let result = evaluate(&scenario_one(), &PolicyConfig::default());
        assert_eq!(result.mu, 30.0);
        assert_eq!(result.invest_intensity, 10_000.0 / 30.0);
        assert_eq!(format!("{:.1}", result.invest_intensity), "333.3");
        assert_eq!(result.tax_intensity, 50.0);
        assert!(result.pass_hard);
        assert_eq!(result.invest_need, 0.0);
        assert_eq!(result.tax_need, 0.0);
        assert_eq!(result.decision, Decision::Approve);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn scenario_two_without_land_fails_thresholds() {
        let input = ProjectInput {
            land_mu: 0.0,
            building_area: 0.0,
            floor_ratio: 0.0,
            ..scenario_one()
        };
        let result = evaluate(&input, &PolicyConfig::default());
        assert_eq!(result.mu, 0.0);
        assert_eq!(result.invest_intensity, 0.0);
        assert_eq!(result.tax_intensity, 0.0);
        assert!(!result.pass_hard);
        assert_eq!(result.invest_need, 0.0);
        assert_eq!(result.tax_need, 0.0);
    }

    #[test]
    fn zero_land_never_passes_even_with_zero_thresholds() {
        let mut policy = PolicyConfig::default();
        policy.thresholds.invest_per_mu = 0.0;
        policy.thresholds.tax_per_mu = 0.0;
        let result = evaluate(&ProjectInput::default(), &policy);
        assert!(!result.pass_hard);
    }

    #[test]
    fn scenario_three_veto_overrides_passing_project() {
        let input = ProjectInput {
            risk_illegal_land: true,
            ..scenario_one()
        };
        let result = evaluate(&input, &PolicyConfig::default());
        assert!(result.pass_hard);
        assert!(result.veto);
        assert_eq!(result.decision, Decision::Defer);
        assert!(result
            .reasons
            .iter()
            .any(|reason| reason.contains(veto::ILLEGAL_LAND)));
        assert_eq!(result.veto_reasons, vec![veto::ILLEGAL_LAND]);
    }

    #[test]
    fn veto_beats_perfect_score() {
        let input = ProjectInput {
            risk_dishonest: true,
            tech_titles: "国家级".to_string(),
            chain_segment_fill: "检测".to_string(),
            ..scenario_one()
        };
        let mut policy = PolicyConfig::default();
        policy.bonus.national_title = 20.0;
        let result = evaluate(&input, &policy);
        assert_eq!(result.score.total, 100.0);
        assert_eq!(result.decision, Decision::Defer);
    }

    #[test]
    fn scenario_four_reports_shortfalls() {
        let input = ProjectInput {
            land_mu: 30.0,
            invest_total: 5_000.0,
            expected_annual_tax: 500.0,
            ..ProjectInput::default()
        };
        let policy = PolicyConfig::default();
        let result = evaluate(&input, &policy);
        assert!(!result.pass_hard);
        assert!(result.score.total < policy.bands.mid);
        assert_eq!(result.decision, Decision::Defer);
        assert!((result.invest_need - 4_000.0).abs() < 1e-9);
        assert!((result.tax_need - 250.0).abs() < 1e-9);
        assert_eq!(
            result.reasons,
            vec![
                "投资强度未达标：需追加固定投资约 4000 万元".to_string(),
                "税收强度未达标：需新增年税收约 250 万元".to_string(),
            ]
        );
    }

    #[test]
    fn thresholds_met_with_low_score_is_conditional() {
        let input = ProjectInput {
            customer_stability: CustomerStability::Unstable,
            ..scenario_one()
        };
        let mut policy = PolicyConfig::default();
        policy.bands.high = 90.0;
        let result = evaluate(&input, &policy);
        assert_eq!(result.decision, Decision::Conditional);
    }

    #[test]
    fn mid_bar_score_without_thresholds_is_conditional() {
        let input = ProjectInput {
            land_mu: 30.0,
            invest_total: 9_000.0,
            expected_annual_tax: 700.0,
            tech_titles: "省级专精特新".to_string(),
            chain_segment_fill: "热处理".to_string(),
            ..ProjectInput::default()
        };
        let result = evaluate(&input, &PolicyConfig::default());
        assert!(!result.pass_hard);
        assert!(result.score.total >= 60.0);
        assert_eq!(result.decision, Decision::Conditional);
    }

    #[test]
    fn decide_follows_precedence() {
        let bands = Bands::default();
        assert_eq!(decide(true, true, 100.0, &bands), Decision::Defer);
        assert_eq!(decide(false, true, 75.0, &bands), Decision::Approve);
        assert_eq!(decide(false, true, 10.0, &bands), Decision::Conditional);
        assert_eq!(decide(false, false, 60.0, &bands), Decision::Conditional);
        assert_eq!(decide(false, false, 59.9, &bands), Decision::Defer);
        assert_eq!(decide(false, false, 99.0, &bands), Decision::Conditional);
    }

    #[test]
    fn trend_warnings_follow_shortfalls() {
        let input = ProjectInput {
            land_mu: 30.0,
            invest_total: 5_000.0,
            expected_annual_tax: 1_500.0,
            revenue_y2: 20_000.0,
            revenue_y1: 18_000.0,
            tax_y2: 1_300.0,
            tax_y1: 1_100.0,
            profit_y1: -200.0,
            ..ProjectInput::default()
        };
        let result = evaluate(&input, &PolicyConfig::default());
        assert_eq!(result.reasons.len(), 4);
        assert!(result.reasons[0].starts_with("投资强度未达标"));
        assert!(result.reasons[1].starts_with("营业收入同比下降"));
        assert!(result.reasons[2].starts_with("纳税额同比下降"));
        assert_eq!(result.reasons[3], "去年净利润为负：-200 万元");
    }

    #[test]
    fn veto_sentence_precedes_trend_warnings() {
        let input = ProjectInput {
            risk_env: true,
            risk_dishonest: true,
            invest_total: 5_000.0,
            revenue_y2: 20_000.0,
            revenue_y1: 18_000.0,
            profit_y1: -300.0,
            ..scenario_one()
        };
        let result = evaluate(&input, &PolicyConfig::default());
        assert_eq!(result.decision, Decision::Defer);
        assert_eq!(
            result.reasons,
            vec![
                format!("命中一票否决：{}；{}", veto::DISHONEST, veto::ENVIRONMENTAL),
                "营业收入同比下降：由 20000 万元降至 18000 万元".to_string(),
                "去年净利润为负：-300 万元".to_string(),
            ]
        );
    }

    #[test]
    fn intensities_use_mu_derived_from_floor_area() {
        let input = ProjectInput {
            land_mu: 0.0,
            building_area: 40_000.2,
            floor_ratio: 2.0,
            invest_total: 12_000.0,
            expected_annual_tax: 600.0,
            ..ProjectInput::default()
        };
        let result = evaluate(&input, &PolicyConfig::default());
        let mu = 40_000.2 / (2.0 * metrics::SQM_PER_MU);
        assert!((result.mu - 30.0).abs() < 1e-9);
        assert_eq!(result.invest_intensity, 12_000.0 / mu);
        assert_eq!(result.tax_intensity, 600.0 / mu);
        assert!(result.pass_invest);
        assert!(!result.pass_tax);
        assert!((result.tax_need - 150.0).abs() < 1e-6);
        assert!(result.narrative.standard.contains("折算亩30.00亩"));
    }

    #[test]
    fn negative_inputs_are_coerced_before_use() {
        let input = ProjectInput {
            land_mu: -30.0,
            invest_total: -10_000.0,
            expected_annual_tax: f64::NAN,
            ..ProjectInput::default()
        };
        let result = evaluate(&input, &PolicyConfig::default());
        assert_eq!(result.mu, 0.0);
        assert_eq!(result.invest_intensity, 0.0);
        assert_eq!(result.tax_intensity, 0.0);
        assert!((0.0..=100.0).contains(&result.score.total));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let input = ProjectInput::sample();
        let policy = PolicyConfig::default();
        let first = evaluate(&input, &policy);
        let second = evaluate(&input, &policy);
        assert_eq!(first, second);
        assert_eq!(first.score.total.to_bits(), second.score.total.to_bits());
    }

    #[test]
    fn horizon_is_taken_from_policy() {
        let result = evaluate(&scenario_one(), &PolicyConfig::default());
        assert_eq!(result.horizon_months, 36);
    }

    #[test]
    fn narrative_is_attached() {
        let result = evaluate(&scenario_one(), &PolicyConfig::default());
        assert!(result.narrative.intro.starts_with("高端装备制造项目"));
        assert!(result.narrative.standard.contains("折算亩30.00亩"));
    }
}
