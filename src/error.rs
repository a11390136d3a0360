use std::path::PathBuf;

use thiserror::Error;

use crate::renderer::RenderError;
use crate::runtime::error::{InteractionError, RuntimeError};
use crate::runtime::run::RunnerError;

#[derive(Debug, Error)]
pub enum PlaypageError {
    #[error("unknown script `{0}`; run `playpage list` to see the available ones")]
    UnknownScript(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("server error on {addr}: {source}")]
    Server {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("script error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("interaction rejected: {0}")]
    Interaction(#[from] InteractionError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<RunnerError> for PlaypageError {
    fn from(err: RunnerError) -> Self {
        match err {
            RunnerError::Interaction(e) => PlaypageError::Interaction(e),
            RunnerError::Runtime(e) => PlaypageError::Runtime(e),
        }
    }
}
