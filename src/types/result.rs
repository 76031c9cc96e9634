use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approve,
    Conditional,
    Defer,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "通过/签约",
            Self::Conditional => "附条件通过",
            Self::Defer => "暂缓/拒绝",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub id: &'static str,
    pub label: &'static str,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Narrative {
    pub intro: String,
    pub judge_entity: String,
    pub judge_ability: String,
    pub judge_operations: String,
    pub standard: String,
    pub gaps: Vec<String>,
    pub veto_warning: Option<String>,
    pub conclusion: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub mu: f64,
    pub invest_intensity: f64,
    pub tax_intensity: f64,
    pub invest_threshold: f64,
    pub tax_threshold: f64,
    pub pass_invest: bool,
    pub pass_tax: bool,
    pub pass_hard: bool,
    pub veto: bool,
    pub veto_reasons: Vec<&'static str>,
    pub invest_need: f64,
    pub tax_need: f64,
    pub score: ScoreBreakdown,
    pub decision: Decision,
    pub horizon_months: u32,
    pub reasons: Vec<String>,
    pub advice: Vec<String>,
    pub narrative: Narrative,
}
