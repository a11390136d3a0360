pub mod cli;
pub mod config;
pub mod error;
pub mod interaction;
pub mod logging;
pub mod renderer;
pub mod runtime;
pub mod scripts;
pub mod server;

pub use error::PlaypageError;
pub use interaction::Interaction;
pub use runtime::{Pass, RenderEvent, Runner, SessionState, Ui};
pub use scripts::Script;
