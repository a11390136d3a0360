use crate::renderer::RenderError;
use crate::runtime::events::Pass;

pub fn render_json(pass: &Pass) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(pass)?)
}
