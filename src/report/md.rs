use crate::report::document::{Block, Document};

pub fn to_markdown(document: &Document) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", document.title));
    output.push_str(&format!("{}\n\n", document.subtitle));
    if let Some(meta) = &document.meta {
        output.push_str(&format!(
            "> 生成时间：{} · 输入摘要：`{}` · parkgate {}\n\n",
            meta.generated_at, meta.input_sha256, meta.tool_version
        ));
    }

    for section in &document.sections {
        output.push_str(&format!("## {}\n\n", section.heading));
        let mut in_list = false;
        for block in &section.blocks {
            match block {
                Block::Bullet(text) => {
                    output.push_str(&format!("- {text}\n"));
                    in_list = true;
                }
                Block::Subheading(text) => {
                    if in_list {
                        output.push('\n');
                        in_list = false;
                    }
                    output.push_str(&format!("### {text}\n\n"));
                }
                Block::Paragraph(text) => {
                    if in_list {
                        output.push('\n');
                        in_list = false;
                    }
                    output.push_str(&format!("{text}\n\n"));
                }
            }
        }
        if in_list {
            output.push('\n');
        }
    }

    output
}
