use crate::runtime::error::RuntimeError;
use crate::runtime::events::{Block, PageLayout, RenderEvent};
use crate::runtime::session::SessionState;
use crate::runtime::value::{WidgetKey, WidgetKind, WidgetValue};

/// Context handed to a script for one execution pass.
///
/// Display calls append render events. Widget calls also register the widget
/// with the session and return its current value.
pub struct Ui<'s> {
    session: &'s mut SessionState,
    events: Vec<RenderEvent>,
}

impl<'s> Ui<'s> {
    pub(crate) fn new(session: &'s mut SessionState) -> Self {
        Self {
            session,
            events: Vec::new(),
        }
    }

    pub(crate) fn into_events(self) -> Vec<RenderEvent> {
        self.events
    }

    pub fn set_page_config(&mut self, title: &str, icon: Option<&str>, layout: PageLayout) {
        self.events.push(RenderEvent::PageConfig {
            title: title.to_string(),
            icon: icon.map(str::to_string),
            layout,
        });
    }

    /// Extra CSS placed in the page head by the HTML renderer.
    pub fn style(&mut self, css: &str) {
        self.events.push(RenderEvent::Style(css.to_string()));
    }

    pub fn title(&mut self, text: &str) {
        self.events.push(RenderEvent::Title(text.to_string()));
    }

    pub fn header(&mut self, text: &str) {
        self.events.push(RenderEvent::Header(text.to_string()));
    }

    pub fn subheader(&mut self, text: &str) {
        self.events.push(RenderEvent::Subheader(text.to_string()));
    }

    pub fn caption(&mut self, text: &str) {
        self.events.push(RenderEvent::Caption(text.to_string()));
    }

    pub fn text(&mut self, text: &str) {
        self.events.push(RenderEvent::Text(text.to_string()));
    }

    /// Markdown body; raw HTML in it is shown escaped.
    pub fn write(&mut self, body: &str) {
        self.events.push(RenderEvent::Markdown {
            body: body.to_string(),
            allow_html: false,
        });
    }

    /// Markdown body with raw HTML passed through.
    pub fn markdown_html(&mut self, body: &str) {
        self.events.push(RenderEvent::Markdown {
            body: body.to_string(),
            allow_html: true,
        });
    }

    pub fn info(&mut self, text: &str) {
        self.events.push(RenderEvent::Info(text.to_string()));
    }

    pub fn divider(&mut self) {
        self.events.push(RenderEvent::Divider);
    }

    pub fn text_input(&mut self, label: &str, default: &str) -> Result<String, RuntimeError> {
        let key = WidgetKey::derived(WidgetKind::TextInput, label);
        let value = self.text_widget(key.clone(), WidgetKind::TextInput, default)?;
        self.events.push(RenderEvent::TextInput {
            key,
            label: label.to_string(),
            value: value.clone(),
        });
        Ok(value)
    }

    pub fn text_area(&mut self, label: &str, default: &str) -> Result<String, RuntimeError> {
        let key = WidgetKey::derived(WidgetKind::TextArea, label);
        let value = self.text_widget(key.clone(), WidgetKind::TextArea, default)?;
        self.events.push(RenderEvent::TextArea {
            key,
            label: label.to_string(),
            value: value.clone(),
        });
        Ok(value)
    }

    /// Returns `true` only in the pass right after this button was clicked.
    pub fn button(&mut self, label: &str) -> Result<bool, RuntimeError> {
        self.button_with_key(WidgetKey::derived(WidgetKind::Button, label), label)
    }

    pub fn button_with_key(&mut self, key: impl Into<WidgetKey>, label: &str) -> Result<bool, RuntimeError> {
        let key = key.into();
        let clicked = self
            .session
            .register(key.clone(), WidgetKind::Button, WidgetValue::Bool(false), &[])?
            .as_bool()
            .unwrap_or(false);
        self.events.push(RenderEvent::Button {
            key,
            label: label.to_string(),
        });
        Ok(clicked)
    }

    pub fn checkbox(&mut self, label: &str, default: bool) -> Result<bool, RuntimeError> {
        let key = WidgetKey::derived(WidgetKind::Checkbox, label);
        let checked = self
            .session
            .register(key.clone(), WidgetKind::Checkbox, WidgetValue::Bool(default), &[])?
            .as_bool()
            .unwrap_or(default);
        self.events.push(RenderEvent::Checkbox {
            key,
            label: label.to_string(),
            checked,
        });
        Ok(checked)
    }

    /// Radio group defaulting to the first option; returns the selected label.
    pub fn radio(&mut self, label: &str, options: &[&str]) -> Result<String, RuntimeError> {
        let key = WidgetKey::derived(WidgetKind::Radio, label);
        if options.is_empty() {
            return Err(RuntimeError::EmptyOptions { key });
        }
        let options: Vec<String> = options.iter().map(|opt| opt.to_string()).collect();
        let selected = self
            .session
            .register(key.clone(), WidgetKind::Radio, WidgetValue::Choice(0), &options)?
            .as_choice()
            .unwrap_or(0);
        let value = options[selected].clone();
        self.events.push(RenderEvent::Radio {
            key,
            label: label.to_string(),
            options,
            selected,
        });
        Ok(value)
    }

    pub fn sidebar<T>(&mut self, body: impl FnOnce(&mut Self) -> Result<T, RuntimeError>) -> Result<T, RuntimeError> {
        self.events.push(RenderEvent::BlockStart(Block::Sidebar));
        let out = body(self);
        self.events.push(RenderEvent::BlockEnd);
        out
    }

    /// Lays out `weights.len()` columns side by side, calling `body` once per column index.
    pub fn columns(
        &mut self,
        weights: &[u32],
        mut body: impl FnMut(&mut Self, usize) -> Result<(), RuntimeError>,
    ) -> Result<(), RuntimeError> {
        if weights.is_empty() || weights.contains(&0) {
            return Err(RuntimeError::InvalidColumns);
        }
        self.events.push(RenderEvent::BlockStart(Block::Columns {
            weights: weights.to_vec(),
        }));
        for index in 0..weights.len() {
            self.events.push(RenderEvent::BlockStart(Block::Column { index }));
            let out = body(self, index);
            self.events.push(RenderEvent::BlockEnd);
            if out.is_err() {
                self.events.push(RenderEvent::BlockEnd);
                return out;
            }
        }
        self.events.push(RenderEvent::BlockEnd);
        Ok(())
    }

    fn text_widget(&mut self, key: WidgetKey, kind: WidgetKind, default: &str) -> Result<String, RuntimeError> {
        let value = self
            .session
            .register(key, kind, WidgetValue::Text(default.to_string()), &[])?;
        Ok(value.as_text().unwrap_or(default).to_string())
    }
}
