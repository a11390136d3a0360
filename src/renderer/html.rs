use log::warn;
use markdown::{CompileOptions, Options, ParseOptions};

use crate::interaction::CLICK_FIELD;
use crate::renderer::css::BASE_STYLE;
use crate::runtime::events::{Block, PageLayout, Pass, RenderEvent};

/// Renders one pass as a full HTML document.
///
/// With `interactive` set, the page body is a form posting back to `/`, so
/// every widget change and button press triggers the next pass.
pub fn render_html(pass: &Pass, interactive: bool) -> String {
    let mut title = pass.script.clone();
    let mut icon = None;
    let mut layout = PageLayout::default();
    let mut styles = String::new();
    let mut main = String::new();
    let mut sidebar = String::new();
    let mut stack: Vec<Block> = Vec::new();

    for ev in &pass.events {
        let in_sidebar = stack.iter().any(|b| *b == Block::Sidebar);
        let out = if in_sidebar { &mut sidebar } else { &mut main };
        match ev {
            RenderEvent::PageConfig {
                title: t,
                icon: i,
                layout: l,
            } => {
                title = t.clone();
                icon = i.clone();
                layout = *l;
            }
            RenderEvent::Style(css) => styles.push_str(css),
            RenderEvent::Title(text) => out.push_str(&format!("<h1>{}</h1>\n", html_escape(text))),
            RenderEvent::Header(text) => out.push_str(&format!("<h2>{}</h2>\n", html_escape(text))),
            RenderEvent::Subheader(text) => out.push_str(&format!("<h3>{}</h3>\n", html_escape(text))),
            RenderEvent::Caption(text) => {
                out.push_str(&format!("<p class=\"caption\">{}</p>\n", html_escape(text)))
            }
            RenderEvent::Text(text) => out.push_str(&format!("<p class=\"text\">{}</p>\n", html_escape(text))),
            RenderEvent::Markdown { body, allow_html } => {
                out.push_str(&format!(
                    "<div class=\"markdown\">{}</div>\n",
                    markdown_to_html(body, *allow_html)
                ));
            }
            RenderEvent::Info(text) => out.push_str(&format!("<div class=\"info\">{}</div>\n", html_escape(text))),
            RenderEvent::Divider => out.push_str("<hr />\n"),
            RenderEvent::TextInput { key, label, value } => {
                let key = html_escape(key.as_str());
                out.push_str(&format!(
                    "<div class=\"widget\"><label for=\"{key}\">{}</label><input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{}\"{} /></div>\n",
                    html_escape(label),
                    html_escape(value),
                    disabled(interactive),
                ));
            }
            RenderEvent::TextArea { key, label, value } => {
                let key = html_escape(key.as_str());
                out.push_str(&format!(
                    "<div class=\"widget\"><label for=\"{key}\">{}</label><textarea id=\"{key}\" name=\"{key}\" rows=\"4\"{}>{}</textarea></div>\n",
                    html_escape(label),
                    disabled(interactive),
                    html_escape(value),
                ));
            }
            RenderEvent::Button { key, label } => {
                out.push_str(&format!(
                    "<div class=\"widget\"><button class=\"btn\" type=\"submit\" name=\"{}\" value=\"{}\"{}>{}</button></div>\n",
                    CLICK_FIELD,
                    html_escape(key.as_str()),
                    disabled(interactive),
                    html_escape(label),
                ));
            }
            RenderEvent::Checkbox { key, label, checked } => {
                let key = html_escape(key.as_str());
                // Unchecked boxes are not submitted, so the hidden field carries `false`.
                out.push_str(&format!(
                    "<div class=\"widget\"><input type=\"hidden\" name=\"{key}\" value=\"false\" /><label class=\"choice\"><input type=\"checkbox\" name=\"{key}\" value=\"true\"{}{} />{}</label></div>\n",
                    if *checked { " checked" } else { "" },
                    disabled(interactive),
                    html_escape(label),
                ));
            }
            RenderEvent::Radio {
                key,
                label,
                options,
                selected,
            } => {
                let key = html_escape(key.as_str());
                out.push_str(&format!("<fieldset class=\"widget\"><label>{}</label>", html_escape(label)));
                for (index, option) in options.iter().enumerate() {
                    let option = html_escape(option);
                    out.push_str(&format!(
                        "<label class=\"choice\"><input type=\"radio\" name=\"{key}\" value=\"{option}\"{}{} />{option}</label>",
                        if index == *selected { " checked" } else { "" },
                        disabled(interactive),
                    ));
                }
                out.push_str("</fieldset>\n");
            }
            RenderEvent::BlockStart(block) => {
                match block {
                    Block::Sidebar => {}
                    Block::Columns { .. } => out.push_str("<div class=\"columns\">\n"),
                    Block::Column { index } => {
                        let weight = match stack.last() {
                            Some(Block::Columns { weights }) => weights.get(*index).copied().unwrap_or(1),
                            _ => 1,
                        };
                        out.push_str(&format!("<div class=\"column\" style=\"flex: {}\">\n", weight));
                    }
                }
                stack.push(block.clone());
            }
            RenderEvent::BlockEnd => {
                if let Some(Block::Columns { .. } | Block::Column { .. }) = stack.pop() {
                    out.push_str("</div>\n");
                }
            }
        }
    }

    while let Some(block) = stack.pop() {
        let in_sidebar = stack.iter().any(|b| *b == Block::Sidebar);
        let out = if in_sidebar { &mut sidebar } else { &mut main };
        if block != Block::Sidebar {
            out.push_str("</div>\n");
        }
    }

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n");
    let tab_title = match &icon {
        Some(icon) => format!("{} {}", icon, title),
        None => title,
    };
    page.push_str(&format!("<title>{}</title>\n", html_escape(&tab_title)));
    page.push_str("<style>");
    page.push_str(BASE_STYLE);
    page.push_str(&styles);
    page.push_str("</style>\n</head>\n<body>\n");
    if interactive {
        page.push_str("<form method=\"post\" action=\"/\">\n");
    }
    page.push_str("<div class=\"page\">\n");
    if !sidebar.is_empty() {
        page.push_str("<aside class=\"sidebar\">\n");
        page.push_str(&sidebar);
        page.push_str("</aside>\n");
    }
    match layout {
        PageLayout::Centered => page.push_str("<main>\n"),
        PageLayout::Wide => page.push_str("<main class=\"wide\">\n"),
    }
    page.push_str(&main);
    page.push_str("</main>\n</div>\n");
    if interactive {
        page.push_str("</form>\n");
    }
    page.push_str("</body>\n</html>\n");
    page
}

/// Minimal page shown by the server when a pass or interaction fails.
pub fn render_error_page(kind: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>playpage: {kind}</title>
<style>
body {{ font-family: monospace; background:#fff5f5; color:#1f2937; padding:20px; }}
.error {{ color:#b91c1c; font-weight:700; }}
</style>
</head>
<body>
<h1>{kind}</h1>
<p class="error">{message}</p>
<p><a href="/">Back to the page</a></p>
</body>
</html>
"#,
        kind = html_escape(kind),
        message = html_escape(message),
    )
}

fn markdown_to_html(body: &str, allow_html: bool) -> String {
    let options = Options {
        parse: ParseOptions::gfm(),
        compile: CompileOptions {
            allow_dangerous_html: allow_html,
            ..CompileOptions::gfm()
        },
    };
    match markdown::to_html_with_options(body, &options) {
        Ok(html) => html,
        Err(_) => {
            warn!("markdown could not be compiled; showing it as text");
            format!("<p>{}</p>", html_escape(body))
        }
    }
}

fn disabled(interactive: bool) -> &'static str {
    if interactive {
        ""
    } else {
        " disabled"
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".into(),
            '<' => "&lt;".into(),
            '>' => "&gt;".into(),
            '"' => "&quot;".into(),
            '\'' => "&#39;".into(),
            _ => c.to_string(),
        })
        .collect()
}
