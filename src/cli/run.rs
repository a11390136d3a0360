use log::debug;

use crate::cli::lookup_script;
use crate::error::PlaypageError;
use crate::interaction::Interaction;
use crate::renderer::{self, RenderMode};
use crate::runtime::run::Runner;

pub fn handle_run(script: &str, mode: RenderMode, interactions: &[Interaction]) -> Result<(), PlaypageError> {
    let output = run_to_string(script, mode, interactions)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Initial pass, then one pass per interaction; returns the last pass rendered in `mode`.
pub fn run_to_string(script: &str, mode: RenderMode, interactions: &[Interaction]) -> Result<String, PlaypageError> {
    let mut runner = Runner::new(lookup_script(script)?);
    let mut pass = runner.load()?.clone();
    for interaction in interactions {
        debug!("applying {:?}", interaction);
        pass = runner.interact(interaction)?.clone();
    }
    Ok(renderer::render(&pass, mode)?)
}
