use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    TextInput,
    TextArea,
    Button,
    Checkbox,
    Radio,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::TextInput => "text_input",
            WidgetKind::TextArea => "text_area",
            WidgetKind::Button => "button",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::Radio => "radio",
        }
    }

    /// Whether `value` is the value type this kind of widget stores.
    pub fn accepts(&self, value: &WidgetValue) -> bool {
        matches!(
            (self, value),
            (WidgetKind::TextInput | WidgetKind::TextArea, WidgetValue::Text(_))
                | (WidgetKind::Button | WidgetKind::Checkbox, WidgetValue::Bool(_))
                | (WidgetKind::Radio, WidgetValue::Choice(_))
        )
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WidgetValue {
    Text(String),
    Bool(bool),
    Choice(usize),
}

impl WidgetValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            WidgetValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            WidgetValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<usize> {
        match self {
            WidgetValue::Choice(i) => Some(*i),
            _ => None,
        }
    }
}

/// Identity of a widget inside a session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WidgetKey(String);

impl WidgetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key used when the script does not name the widget.
    pub fn derived(kind: WidgetKind, label: &str) -> Self {
        Self(format!("{}:{}", kind.as_str(), label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WidgetKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}
