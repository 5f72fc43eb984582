use env_logger::{Builder, Env};
use log::SetLoggerError;

/// Environment variable holding the log filter, e.g. `DIRLIST_LOG=debug`.
pub const LOG_ENV: &str = "DIRLIST_LOG";

/// Skipped entries are reported at `warn`, so that is shown by default.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr logger. Safe to call more than once.
pub fn init() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_FILTER))
        .format_timestamp(None)
        .format_target(false)
        .try_init()
}
