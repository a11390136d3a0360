use crate::runtime::error::RuntimeError;
use crate::runtime::events::PageLayout;
use crate::runtime::ui::Ui;
use crate::scripts::Script;

pub const LAYOUT_TEXT_LEFT: &str = "Text left";
pub const LAYOUT_CENTERED: &str = "Centered";
const MAX_HIGHLIGHTS: usize = 3;

const PAGE_STYLE: &str = r#"
.placeholder-box {
  border: 2px dashed #cbd5f5;
  border-radius: 10px;
  padding: 1.6rem 1rem;
  text-align: center;
  color: #64748b;
  background-color: #f8fafc;
  font-weight: 600;
}
"#;

/// Small landing page whose copy and layout are edited from the sidebar.
pub struct Landing;

impl Script for Landing {
    fn name(&self) -> &'static str {
        "landing"
    }

    fn about(&self) -> &'static str {
        "mini website: sidebar controls for heading, hero layout and highlight cards"
    }

    fn run(&self, ui: &mut Ui) -> Result<(), RuntimeError> {
        ui.set_page_config("Mini Layout Playground", Some("🎨"), PageLayout::Wide);
        ui.style(PAGE_STYLE);

        ui.title("Mini Website Playground");
        ui.caption("Adjust a few controls in the sidebar and watch the page change right away.");

        let copy = ui.sidebar(|ui| {
            ui.header("Quick tweaks");
            let copy = PageCopy {
                heading: ui.text_input("Page heading", "Sunny Landing Page")?,
                tagline: ui.text_input("Tagline", "Keep your copy short and cheerful.")?,
                hero_headline: ui.text_input("Hero headline", "Make your layout your own")?,
                hero_body: ui.text_area("Hero text", "Use this mini playground to move text and buttons around.")?,
                primary_label: ui.text_input("Main button label", "Get Started")?,
                secondary_label: ui.text_input("Secondary link", "Learn more")?,
                layout: ui.radio("Hero layout", &[LAYOUT_TEXT_LEFT, LAYOUT_CENTERED])?,
                highlights: None,
            };

            ui.divider();
            let highlights = if ui.checkbox("Show highlight cards", true)? {
                Some(ui.text_area("Highlights (one per line)", "Fast setup\nSimple buttons\nClean text")?)
            } else {
                None
            };
            Ok(PageCopy { highlights, ..copy })
        })?;

        ui.subheader(&copy.heading);
        if !copy.tagline.trim().is_empty() {
            ui.write(&copy.tagline);
        }

        if copy.layout == LAYOUT_TEXT_LEFT {
            ui.columns(&[2, 1], |ui, index| {
                if index == 0 {
                    hero(ui, &copy, "hero_left_button")
                } else {
                    ui.markdown_html("<div class='placeholder-box'>Add your image here</div>");
                    Ok(())
                }
            })?;
        } else {
            hero(ui, &copy, "hero_center_button")?;
        }

        if let Some(raw) = &copy.highlights {
            let items = highlight_items(raw);
            ui.columns(&vec![1; items.len()], |ui, index| {
                ui.write(&format!("**{}**", items[index]));
                ui.write("Keep the description to two short sentences.");
                ui.button_with_key(format!("highlight_button_{}", index), "Action")?;
                Ok(())
            })?;
        }

        ui.divider();
        ui.info("Tip: Try deleting text or renaming the button to feel how small tweaks change the page vibe.");
        Ok(())
    }
}

struct PageCopy {
    heading: String,
    tagline: String,
    hero_headline: String,
    hero_body: String,
    primary_label: String,
    secondary_label: String,
    layout: String,
    highlights: Option<String>,
}

fn hero(ui: &mut Ui, copy: &PageCopy, button_key: &str) -> Result<(), RuntimeError> {
    ui.write(&format!("### {}", copy.hero_headline));
    ui.write(&copy.hero_body);
    ui.button_with_key(button_key, &copy.primary_label)?;
    if !copy.secondary_label.trim().is_empty() {
        ui.write(&format!("[{}](#)", copy.secondary_label));
    }
    Ok(())
}

/// Trimmed non-blank lines, at most three; a hint card when there are none.
pub fn highlight_items(raw: &str) -> Vec<String> {
    let mut items: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_HIGHLIGHTS)
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        items.push("Add highlight lines in the sidebar".to_string());
    }
    items
}
