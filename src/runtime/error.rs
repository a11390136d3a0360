use thiserror::Error;

use crate::runtime::value::{WidgetKey, WidgetKind};

/// Widget misuse detected while a script runs. Aborts the pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("widget `{key}` was rendered twice in one pass; give one of them an explicit key")]
    DuplicateWidget { key: WidgetKey },

    #[error("radio `{key}` needs at least one option")]
    EmptyOptions { key: WidgetKey },

    #[error("columns need at least one weight and every weight must be positive")]
    InvalidColumns,

    #[error("{0}")]
    Script(String),
}

impl RuntimeError {
    pub fn script(message: impl Into<String>) -> Self {
        RuntimeError::Script(message.into())
    }
}

/// Rejected user interaction. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("malformed interaction `{0}`; expected `click:<key>` or `<key>=<value>`")]
    Malformed(String),

    #[error("no widget `{key}` on the current page")]
    UnknownWidget { key: WidgetKey },

    #[error("widget `{key}` is a {kind}, only buttons can be clicked")]
    NotClickable { key: WidgetKey, kind: WidgetKind },

    #[error("button `{key}` has no value to set; click it instead")]
    NotSettable { key: WidgetKey },

    #[error("checkbox `{key}` expects true/false, got `{raw}`")]
    InvalidBool { key: WidgetKey, raw: String },

    #[error("radio `{key}` has no option `{option}`")]
    UnknownOption { key: WidgetKey, option: String },
}
