use crate::report::document::Document;
use crate::types::result::EvaluationResult;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    document: &'a Document,
    evaluation: &'a EvaluationResult,
}

pub fn to_json(
    document: &Document,
    evaluation: &EvaluationResult,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        document,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::evaluate;
    use crate::types::input::ProjectInput;
    use crate::types::policy::PolicyConfig;

    #[test]
    fn json_report_contains_decision_and_score() {
        let result = evaluate(&ProjectInput::sample(), &PolicyConfig::default());
        let document = Document::from_result(&result, None);
        let rendered = to_json(&document, &result).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json should parse");

        assert_eq!(value["evaluation"]["decision"], "approve");
        assert_eq!(value["evaluation"]["pass_hard"], true);
        assert_eq!(value["document"]["sections"][0]["heading"], "一、项目简介");
        assert_eq!(
            value["document"]["sections"][0]["blocks"][0]["kind"],
            "paragraph"
        );
        assert!(value["document"].get("meta").is_none());
    }
}
