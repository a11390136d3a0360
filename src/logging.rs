use env_logger::Env;

/// Environment variable holding the log filter, e.g. `PLAYPAGE_LOG=debug`.
pub const LOG_ENV: &str = "PLAYPAGE_LOG";

pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
