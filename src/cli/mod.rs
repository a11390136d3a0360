use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::PlaypageError;
use crate::interaction::Interaction;
use crate::renderer::RenderMode;
use crate::scripts::{self, Script};

pub mod build;
pub mod list;
pub mod run;
pub mod serve;

const PLAYPAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "playpage",
    version = PLAYPAGE_VERSION,
    about = "playpage: re-run-on-interaction page playground",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in scripts.
    List,
    /// Run a script once, replay interactions, print the last pass.
    Run {
        script: String,
        #[arg(long, value_enum, default_value = "cli")]
        mode: RenderMode,
        /// `click:<key>` or `<key>=<value>`; each one triggers a new pass.
        #[arg(short = 'i', long = "interact", value_name = "INTERACTION")]
        interactions: Vec<Interaction>,
    },
    /// Serve a script over local HTTP.
    Serve {
        script: Option<String>,
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Render the initial pass of a script to a file.
    Build {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        script: Option<String>,
        #[arg(long, value_enum)]
        mode: Option<RenderMode>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> Result<(), PlaypageError> {
    match cli.command {
        Command::List => list::handle_list(),
        Command::Run {
            script,
            mode,
            interactions,
        } => run::handle_run(&script, mode, &interactions),
        Command::Serve {
            script,
            host,
            port,
            config,
        } => serve::handle_serve(script, host, port, config),
        Command::Build {
            config,
            script,
            mode,
            output,
        } => build::handle_build(config, script, mode, output).map(|_| ()),
    }
}

pub(crate) fn lookup_script(name: &str) -> Result<&'static dyn Script, PlaypageError> {
    scripts::find(name).ok_or_else(|| PlaypageError::UnknownScript(name.to_string()))
}
