use serde::Serialize;

use crate::runtime::value::WidgetKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    #[default]
    Centered,
    Wide,
}

/// Layout container opened by `RenderEvent::BlockStart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Sidebar,
    Columns { weights: Vec<u32> },
    Column { index: usize },
}

/// One display instruction produced during an execution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RenderEvent {
    PageConfig {
        title: String,
        icon: Option<String>,
        layout: PageLayout,
    },
    Style(String),
    Title(String),
    Header(String),
    Subheader(String),
    Caption(String),
    Text(String),
    Markdown {
        body: String,
        allow_html: bool,
    },
    Info(String),
    Divider,
    TextInput {
        key: WidgetKey,
        label: String,
        value: String,
    },
    TextArea {
        key: WidgetKey,
        label: String,
        value: String,
    },
    Button {
        key: WidgetKey,
        label: String,
    },
    Checkbox {
        key: WidgetKey,
        label: String,
        checked: bool,
    },
    Radio {
        key: WidgetKey,
        label: String,
        options: Vec<String>,
        selected: usize,
    },
    BlockStart(Block),
    BlockEnd,
}

/// Output of one complete run of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pass {
    pub number: u64,
    pub script: String,
    pub events: Vec<RenderEvent>,
}

impl Pass {
    pub fn page_title(&self) -> Option<&str> {
        self.events.iter().find_map(|ev| match ev {
            RenderEvent::PageConfig { title, .. } => Some(title.as_str()),
            _ => None,
        })
    }

    pub fn text_value(&self, key: &str) -> Option<&str> {
        self.events.iter().find_map(|ev| match ev {
            RenderEvent::TextInput { key: k, value, .. } | RenderEvent::TextArea { key: k, value, .. }
                if k.as_str() == key =>
            {
                Some(value.as_str())
            }
            _ => None,
        })
    }

    /// Whether any plain display element (title, text, info, markdown...) contains `needle`.
    pub fn displays(&self, needle: &str) -> bool {
        self.events.iter().any(|ev| match ev {
            RenderEvent::Title(s)
            | RenderEvent::Header(s)
            | RenderEvent::Subheader(s)
            | RenderEvent::Caption(s)
            | RenderEvent::Text(s)
            | RenderEvent::Info(s) => s.contains(needle),
            RenderEvent::Markdown { body, .. } => body.contains(needle),
            _ => false,
        })
    }
}
