use std::fs;
use std::path::PathBuf;

use log::info;

use crate::cli::lookup_script;
use crate::config::{BuildOptions, PlaypageConfig};
use crate::error::PlaypageError;
use crate::renderer::{self, RenderMode};
use crate::runtime::run::Runner;

pub fn handle_build(
    config: Option<PathBuf>,
    script: Option<String>,
    mode: Option<RenderMode>,
    output: Option<PathBuf>,
) -> Result<PathBuf, PlaypageError> {
    let mut opts = PlaypageConfig::load(config.as_deref())?.build;
    if let Some(script) = script {
        opts.script = script;
    }
    if let Some(mode) = mode {
        opts.mode = mode;
    }
    if let Some(output) = output {
        opts.output_dir = output;
    }
    let written = build(&opts)?;
    println!("Built {}", written.display());
    Ok(written)
}

/// Renders the initial pass of `opts.script` into `<output>/<script>.<ext>`.
pub fn build(opts: &BuildOptions) -> Result<PathBuf, PlaypageError> {
    let mut runner = Runner::new(lookup_script(&opts.script)?);
    let rendered = renderer::render(runner.load()?, opts.mode)?;

    fs::create_dir_all(&opts.output_dir).map_err(|source| PlaypageError::Io {
        operation: "creating output directory",
        path: opts.output_dir.clone(),
        source,
    })?;
    let output_file = opts
        .output_dir
        .join(format!("{}.{}", opts.script, opts.mode.extension()));
    fs::write(&output_file, rendered).map_err(|source| PlaypageError::Io {
        operation: "writing build output",
        path: output_file.clone(),
        source,
    })?;
    info!("wrote {}", output_file.display());
    Ok(output_file)
}
