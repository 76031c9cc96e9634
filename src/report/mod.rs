pub mod document;
pub mod json;
pub mod md;
pub mod text;

use crate::error::ParkgateError;
use crate::types::result::EvaluationResult;
use document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Md => "md",
            Self::Text => "txt",
        }
    }
}

/// Seam for document backends. Word and PDF writers live outside this
/// crate and implement this against the same heading hierarchy.
pub trait Exporter {
    fn export(
        &self,
        document: &Document,
        evaluation: &EvaluationResult,
    ) -> Result<Vec<u8>, ParkgateError>;
}

impl Exporter for OutputFormat {
    fn export(
        &self,
        document: &Document,
        evaluation: &EvaluationResult,
    ) -> Result<Vec<u8>, ParkgateError> {
        render(document, evaluation, *self).map(String::into_bytes)
    }
}

pub fn render(
    document: &Document,
    evaluation: &EvaluationResult,
    format: OutputFormat,
) -> Result<String, ParkgateError> {
    match format {
        OutputFormat::Json => json::to_json(document, evaluation).map_err(ParkgateError::Json),
        OutputFormat::Md => Ok(md::to_markdown(document)),
        OutputFormat::Text => Ok(text::to_text(document)),
    }
}

pub fn default_file_name(project_name: &str, format: OutputFormat) -> String {
    let trimmed = project_name.trim();
    let base = if trimmed.is_empty() { "项目" } else { trimmed };
    let safe: String = base
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();
    format!("{safe}_研判报告.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_name_falls_back_and_sanitizes() {
        assert_eq!(default_file_name("", OutputFormat::Md), "项目_研判报告.md");
        assert_eq!(
            default_file_name("园区/一期", OutputFormat::Json),
            "园区_一期_研判报告.json"
        );
    }
}
