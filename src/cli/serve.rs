use std::path::PathBuf;

use crate::cli::lookup_script;
use crate::config::PlaypageConfig;
use crate::error::PlaypageError;
use crate::server::Server;

pub fn handle_serve(
    script: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
) -> Result<(), PlaypageError> {
    let mut opts = PlaypageConfig::load(config.as_deref())?.serve;
    if let Some(script) = script {
        opts.script = script;
    }
    if let Some(host) = host {
        opts.host = host;
    }
    if let Some(port) = port {
        opts.port = port;
    }
    let script = lookup_script(&opts.script)?;
    Server::bind(&opts.addr(), script, opts.session_limits())?.run()
}
