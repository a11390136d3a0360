use colored::Colorize;

use crate::runtime::events::{Block, Pass, RenderEvent};

pub fn render_cli(pass: &Pass) {
    print!("{}", render_cli_to_string(pass));
}

/// Terminal rendering of a pass; one element per line, indented per layout block.
pub fn render_cli_to_string(pass: &Pass) -> String {
    let mut out = String::new();
    let mut depth = 0usize;

    for ev in &pass.events {
        let indent = "  ".repeat(depth);
        match ev {
            RenderEvent::PageConfig { .. } | RenderEvent::Style(_) => {}
            RenderEvent::Title(text) => line(&mut out, &indent, format!("# {}", text).bold()),
            RenderEvent::Header(text) => line(&mut out, &indent, format!("## {}", text).bold()),
            RenderEvent::Subheader(text) => line(&mut out, &indent, format!("### {}", text).bold()),
            RenderEvent::Caption(text) => line(&mut out, &indent, text.dimmed()),
            RenderEvent::Text(text) => line(&mut out, &indent, text),
            RenderEvent::Markdown { body, .. } => {
                for body_line in body.lines() {
                    line(&mut out, &indent, body_line);
                }
            }
            RenderEvent::Info(text) => line(&mut out, &indent, format!("i {}", text).blue()),
            RenderEvent::Divider => line(&mut out, &indent, "─".repeat(32).dimmed()),
            RenderEvent::TextInput { label, value, .. } => {
                line(&mut out, &indent, format!("{}: [{}]", label, value));
            }
            RenderEvent::TextArea { label, value, .. } => {
                line(&mut out, &indent, format!("{}:", label));
                for value_line in value.lines() {
                    line(&mut out, &indent, format!("  | {}", value_line));
                }
            }
            RenderEvent::Button { label, .. } => line(&mut out, &indent, format!("[ {} ]", label).cyan()),
            RenderEvent::Checkbox { label, checked, .. } => {
                let mark = if *checked { "[x]" } else { "[ ]" };
                line(&mut out, &indent, format!("{} {}", mark, label));
            }
            RenderEvent::Radio {
                label,
                options,
                selected,
                ..
            } => {
                let choices: Vec<String> = options
                    .iter()
                    .enumerate()
                    .map(|(i, opt)| {
                        if i == *selected {
                            format!("(•) {}", opt)
                        } else {
                            format!("( ) {}", opt)
                        }
                    })
                    .collect();
                line(&mut out, &indent, format!("{}: {}", label, choices.join("  ")));
            }
            RenderEvent::BlockStart(block) => {
                match block {
                    Block::Sidebar => line(&mut out, &indent, "≡ sidebar".dimmed()),
                    Block::Columns { weights } => {
                        let ratio: Vec<String> = weights.iter().map(u32::to_string).collect();
                        line(&mut out, &indent, format!("▤ columns {}", ratio.join(":")).dimmed());
                    }
                    Block::Column { index } => line(&mut out, &indent, format!("▸ column {}", index + 1).dimmed()),
                }
                depth += 1;
            }
            RenderEvent::BlockEnd => depth = depth.saturating_sub(1),
        }
    }
    out
}

fn line(out: &mut String, indent: &str, content: impl std::fmt::Display) {
    out.push_str(indent);
    out.push_str(&content.to_string());
    out.push('\n');
}
