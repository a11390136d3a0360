pub mod cli;
pub mod css;
pub mod html;
pub mod json;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::runtime::events::Pass;

pub use cli::{render_cli, render_cli_to_string};
pub use html::render_html;
pub use json::render_json;

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Cli,
    #[default]
    Html,
    Json,
}

impl RenderMode {
    pub fn extension(&self) -> &'static str {
        match self {
            RenderMode::Cli => "txt",
            RenderMode::Html => "html",
            RenderMode::Json => "json",
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders a pass as a standalone document in `mode`.
pub fn render(pass: &Pass, mode: RenderMode) -> Result<String, RenderError> {
    match mode {
        RenderMode::Cli => Ok(render_cli_to_string(pass)),
        RenderMode::Html => Ok(render_html(pass, false)),
        RenderMode::Json => render_json(pass),
    }
}
