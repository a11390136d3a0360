use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::PlaypageError;
use crate::renderer::RenderMode;
use crate::server::SessionLimits;

pub const DEFAULT_CONFIG_FILE: &str = "playpage.toml";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_SCRIPT: &str = "hello";
pub const DEFAULT_OUTPUT: &str = "build";
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
pub const DEFAULT_MAX_SESSIONS: usize = 256;

#[derive(Debug, Deserialize, Default)]
struct ConfigToml {
    serve: Option<ServeSection>,
    build: Option<BuildSection>,
}

#[derive(Debug, Deserialize)]
struct ServeSection {
    host: Option<String>,
    port: Option<u16>,
    script: Option<String>,
    session_idle_secs: Option<u64>,
    max_sessions: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct BuildSection {
    script: Option<String>,
    mode: Option<RenderMode>,
    output: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    pub script: String,
    pub session_idle_secs: u64,
    pub max_sessions: usize,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            script: DEFAULT_SCRIPT.into(),
            session_idle_secs: DEFAULT_SESSION_IDLE_SECS,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServeOptions {
    fn from_section(section: Option<ServeSection>) -> Self {
        let mut opts = ServeOptions::default();
        if let Some(section) = section {
            if let Some(host) = section.host {
                opts.host = host;
            }
            if let Some(port) = section.port {
                opts.port = port;
            }
            if let Some(script) = section.script {
                opts.script = script;
            }
            if let Some(secs) = section.session_idle_secs {
                opts.session_idle_secs = secs;
            }
            if let Some(max) = section.max_sessions {
                opts.max_sessions = max;
            }
        }
        opts
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            idle: Duration::from_secs(self.session_idle_secs),
            max: self.max_sessions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub script: String,
    pub mode: RenderMode,
    pub output_dir: PathBuf,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            script: DEFAULT_SCRIPT.into(),
            mode: RenderMode::Html,
            output_dir: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl BuildOptions {
    fn from_section(section: Option<BuildSection>) -> Self {
        let mut opts = BuildOptions::default();
        if let Some(section) = section {
            if let Some(script) = section.script {
                opts.script = script;
            }
            if let Some(mode) = section.mode {
                opts.mode = mode;
            }
            if let Some(output) = section.output {
                opts.output_dir = PathBuf::from(output);
            }
        }
        opts
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaypageConfig {
    pub serve: ServeOptions,
    pub build: BuildOptions,
}

impl PlaypageConfig {
    pub fn parse(content: &str) -> Result<Self, PlaypageError> {
        let parsed: ConfigToml = toml::from_str(content).map_err(|e| PlaypageError::Config(e.to_string()))?;
        Ok(Self {
            serve: ServeOptions::from_section(parsed.serve),
            build: BuildOptions::from_section(parsed.build),
        })
    }

    /// Loads `path`, or `playpage.toml` in the working directory. A missing
    /// default file means defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, PlaypageError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !path.exists() {
            if explicit {
                return Err(PlaypageError::Config(format!("config file {} not found", path.display())));
            }
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| PlaypageError::Io {
            operation: "reading config",
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::parse(&content)
    }
}
