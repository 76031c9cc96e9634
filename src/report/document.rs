use crate::types::result::EvaluationResult;
use serde::Serialize;

pub const TITLE: &str = "项目研判报告";
pub const SUBTITLE: &str = "（自动生成 · 仅供投决会参考）";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Subheading(String),
    Paragraph(String),
    Bullet(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMeta {
    pub generated_at: String,
    pub input_sha256: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ReportMeta>,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn from_result(result: &EvaluationResult, industry_analysis: Option<&str>) -> Self {
        let narrative = &result.narrative;

        let intro = Section {
            heading: "一、项目简介".to_string(),
            blocks: vec![Block::Paragraph(narrative.intro.clone())],
        };

        let mut judgment = vec![
            Block::Subheading("1）项目类别与主体".to_string()),
            Block::Paragraph(narrative.judge_entity.clone()),
            Block::Subheading("2）需求与能力、产业协同".to_string()),
            Block::Paragraph(narrative.judge_ability.clone()),
            Block::Subheading("3）经营情况与趋势".to_string()),
            Block::Paragraph(narrative.judge_operations.clone()),
        ];
        if let Some(analysis) = industry_analysis {
            judgment.push(Block::Subheading("4）行业分析".to_string()));
            judgment.push(Block::Paragraph(analysis.to_string()));
        }
        judgment.push(Block::Paragraph(narrative.standard.clone()));
        judgment.extend(narrative.gaps.iter().cloned().map(Block::Bullet));
        if let Some(warning) = &narrative.veto_warning {
            judgment.push(Block::Bullet(warning.clone()));
        }

        let mut conclusion: Vec<Block> = narrative
            .conclusion
            .iter()
            .cloned()
            .map(Block::Paragraph)
            .collect();
        if !result.reasons.is_empty() {
            conclusion.push(Block::Subheading("主要原因".to_string()));
            conclusion.extend(result.reasons.iter().cloned().map(Block::Bullet));
        }
        conclusion.push(Block::Subheading("建议".to_string()));
        if result.advice.is_empty() {
            conclusion.push(Block::Paragraph("暂无".to_string()));
        } else {
            conclusion.extend(result.advice.iter().cloned().map(Block::Bullet));
        }

        Self {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            meta: None,
            sections: vec![
                intro,
                Section {
                    heading: "二、研判".to_string(),
                    blocks: judgment,
                },
                Section {
                    heading: "三、结论与建议".to_string(),
                    blocks: conclusion,
                },
            ],
        }
    }

    pub fn with_meta(mut self, meta: ReportMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}
