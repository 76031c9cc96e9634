use crate::types::input::{CustomerStability, ProjectInput};
use crate::types::policy::PolicyConfig;
use crate::types::result::{ScoreBreakdown, ScoreComponent};

pub const MAX_SCORE: f64 = 100.0;

fn capped_ratio(value: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 {
        return 1.0;
    }
    let ratio = value / threshold;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn score_project(
    input: &ProjectInput,
    invest_intensity: f64,
    tax_intensity: f64,
    policy: &PolicyConfig,
) -> ScoreBreakdown {
    let bonus = &policy.bonus;
    let mut components = vec![
        ScoreComponent {
            id: "invest_intensity",
            label: "投资强度",
            points: capped_ratio(invest_intensity, policy.thresholds.invest_per_mu)
                * policy.weights.invest,
        },
        ScoreComponent {
            id: "tax_intensity",
            label: "税收强度",
            points: capped_ratio(tax_intensity, policy.thresholds.tax_per_mu)
                * policy.weights.tax,
        },
    ];

    if input.tech_titles.contains("国家") {
        components.push(ScoreComponent {
            id: "national_title",
            label: "国家级称号",
            points: bonus.national_title,
        });
    } else if input.tech_titles.contains('省') || input.tech_titles.contains("河北") {
        components.push(ScoreComponent {
            id: "provincial_title",
            label: "省级称号",
            points: bonus.provincial_title,
        });
    }

    if input.customer_stability == CustomerStability::Stable {
        components.push(ScoreComponent {
            id: "customer_stable",
            label: "客户资源稳定",
            points: bonus.customer_stable,
        });
    }

    if !input.chain_segment_fill.trim().is_empty() {
        components.push(ScoreComponent {
            id: "chain_fill",
            label: "补链潜力",
            points: bonus.chain_fill,
        });
    }

    if input.stable_years >= bonus.stable_years_min && bonus.stable_years > 0.0 {
        components.push(ScoreComponent {
            id: "stable_years",
            label: "稳定经营年限",
            points: bonus.stable_years,
        });
    }

    if input.credit_ready && bonus.credit_ready > 0.0 {
        components.push(ScoreComponent {
            id: "credit_ready",
            label: "信用资料齐备",
            points: bonus.credit_ready,
        });
    }

    let raw: f64 = components.iter().map(|component| component.points).sum();
    let total = if raw.is_finite() {
        round_one_decimal(raw.clamp(0.0, MAX_SCORE))
    } else {
        0.0
    };

    ScoreBreakdown { components, total }
}
