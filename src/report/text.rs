use crate::report::document::{Block, Document};

pub fn to_text(document: &Document) -> String {
    let mut output = format!("{}\n{}\n", document.title, document.subtitle);
    for section in &document.sections {
        output.push_str(&format!("\n{}\n", section.heading));
        for block in &section.blocks {
            match block {
                Block::Subheading(text) | Block::Paragraph(text) => {
                    output.push_str(text);
                    output.push('\n');
                }
                Block::Bullet(text) => output.push_str(&format!("  • {text}\n")),
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::evaluate;
    use crate::types::input::ProjectInput;
    use crate::types::policy::PolicyConfig;

    #[test]
    fn text_report_bullets_advice() {
        let result = evaluate(&ProjectInput::sample(), &PolicyConfig::default());
        let rendered = to_text(&Document::from_result(&result, None));
        assert!(rendered.starts_with("项目研判报告\n"));
        assert!(rendered.contains("\n二、研判\n"));
        assert!(rendered.contains("  • 土地要素："));
    }
}
