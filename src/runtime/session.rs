use std::collections::{BTreeMap, BTreeSet};

use crate::interaction::Interaction;
use crate::runtime::error::{InteractionError, RuntimeError};
use crate::runtime::value::{WidgetKey, WidgetKind, WidgetValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEntry {
    pub kind: WidgetKind,
    pub value: WidgetValue,
    pub options: Vec<String>,
}

/// Per-session widget store, kept across execution passes.
///
/// Values are created with the widget's default on the first pass that
/// renders it and dropped after a pass that does not. Button clicks are
/// momentary: a click is visible to exactly one pass.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    widgets: BTreeMap<WidgetKey, WidgetEntry>,
    pending_click: Option<WidgetKey>,
    seen: BTreeSet<WidgetKey>,
    checkpoint: Option<BTreeMap<WidgetKey, WidgetEntry>>,
    passes: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, key: &str) -> Option<&WidgetValue> {
        self.widgets.get(&WidgetKey::new(key)).map(|entry| &entry.value)
    }

    pub fn entry(&self, key: &WidgetKey) -> Option<&WidgetEntry> {
        self.widgets.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &WidgetKey> {
        self.widgets.keys()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Number of passes that ran to completion.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn pending_click(&self) -> Option<&WidgetKey> {
        self.pending_click.as_ref()
    }

    pub(crate) fn begin_pass(&mut self) {
        self.seen.clear();
        self.checkpoint = Some(self.widgets.clone());
    }

    /// Records that a widget was rendered in this pass and returns its current value.
    pub(crate) fn register(
        &mut self,
        key: WidgetKey,
        kind: WidgetKind,
        default: WidgetValue,
        options: &[String],
    ) -> Result<WidgetValue, RuntimeError> {
        if !self.seen.insert(key.clone()) {
            return Err(RuntimeError::DuplicateWidget { key });
        }

        let clicked = kind == WidgetKind::Button && self.pending_click.as_ref() == Some(&key);
        let entry = self.widgets.entry(key).or_insert_with(|| WidgetEntry {
            kind,
            value: default.clone(),
            options: Vec::new(),
        });
        let stale = entry.kind != kind
            || !kind.accepts(&entry.value)
            || matches!(entry.value, WidgetValue::Choice(i) if i >= options.len());
        if stale {
            entry.kind = kind;
            entry.value = default;
        }
        entry.options = options.to_vec();

        if kind == WidgetKind::Button {
            return Ok(WidgetValue::Bool(clicked));
        }
        Ok(entry.value.clone())
    }

    pub(crate) fn end_pass(&mut self) {
        let seen = std::mem::take(&mut self.seen);
        self.widgets.retain(|key, _| seen.contains(key));
        self.checkpoint = None;
        self.pending_click = None;
        self.passes += 1;
    }

    /// Failed passes still consume the click. The store goes back to what it
    /// held before the pass, so partial registrations are discarded.
    pub(crate) fn abort_pass(&mut self) {
        self.seen.clear();
        if let Some(widgets) = self.checkpoint.take() {
            self.widgets = widgets;
        }
        self.pending_click = None;
    }

    /// Applies one interaction to the store. Nothing changes on error.
    pub fn apply(&mut self, interaction: &Interaction) -> Result<(), InteractionError> {
        match interaction {
            Interaction::Click { key } => {
                let entry = self
                    .widgets
                    .get(key)
                    .ok_or_else(|| InteractionError::UnknownWidget { key: key.clone() })?;
                if entry.kind != WidgetKind::Button {
                    return Err(InteractionError::NotClickable {
                        key: key.clone(),
                        kind: entry.kind,
                    });
                }
                self.pending_click = Some(key.clone());
            }
            Interaction::Set { key, value } => {
                let entry = self
                    .widgets
                    .get_mut(key)
                    .ok_or_else(|| InteractionError::UnknownWidget { key: key.clone() })?;
                entry.value = match entry.kind {
                    WidgetKind::TextInput | WidgetKind::TextArea => WidgetValue::Text(value.clone()),
                    WidgetKind::Checkbox => WidgetValue::Bool(parse_bool(value).ok_or_else(|| {
                        InteractionError::InvalidBool {
                            key: key.clone(),
                            raw: value.clone(),
                        }
                    })?),
                    WidgetKind::Radio => {
                        let index = entry.options.iter().position(|opt| opt == value).ok_or_else(|| {
                            InteractionError::UnknownOption {
                                key: key.clone(),
                                option: value.clone(),
                            }
                        })?;
                        WidgetValue::Choice(index)
                    }
                    WidgetKind::Button => return Err(InteractionError::NotSettable { key: key.clone() }),
                };
            }
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" => Some(false),
        _ => None,
    }
}
