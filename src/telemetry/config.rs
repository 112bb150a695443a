use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;

static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// `--json`: emit the run summary envelope on stdout.
pub fn set_json_mode(v: bool) {
    let _ = JSON_MODE.set(v);
}

pub fn json_mode() -> bool {
    *JSON_MODE.get().unwrap_or(&false)
}

pub fn logs_are_json() -> bool {
    matches!(std::env::var("WPENUM_LOG_FORMAT").as_deref(), Ok("json"))
}

/// Accepts tracing level names plus the Python-style `WARNING`/`CRITICAL`/`NOTSET`, in any case.
pub fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    let lower = s.trim().to_ascii_lowercase();
    match lower.as_str() {
        "warning" => Ok(LevelFilter::WARN),
        "critical" | "fatal" => Ok(LevelFilter::ERROR),
        "notset" => Ok(LevelFilter::TRACE),
        other => other.parse::<LevelFilter>().map_err(|_| format!("unknown log level: {s}")),
    }
}

/// Initialize tracing/logging on stderr.
/// - `level` (from `--log-level`) wins over `RUST_LOG`; `info` if neither is set
/// - `WPENUM_LOG_FORMAT=json` for JSON logs
pub fn init_tracing(level: Option<LevelFilter>) {
    use tracing_subscriber::{fmt, EnvFilter};
    use tracing_subscriber::prelude::*; // for .with()

    let filter = match level {
        Some(lvl) => EnvFilter::default().add_directive(lvl.into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let builder = tracing_subscriber::registry().with(filter);

    if logs_are_json() {
        let _ = builder.with(fmt_layer.json().flatten_event(true)).try_init();
    } else {
        // human-friendly compact text
        let _ = builder.with(fmt_layer.compact()).try_init();
    }
}
