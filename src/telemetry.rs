//! Tracing setup.
//!
//! - `LOG_LEVEL` holds `EnvFilter` directives (e.g. "debug" or
//!   "info,potd_fetch=debug"); defaults to "info".
//! - `LOG_FORMAT=json` switches to JSON lines.
//!
//! Logs go to stderr so stdout only carries the problem report.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
