use std::env;

use crate::telemetry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl OutputConfig {
    pub fn from_env() -> Self {
        Self::from_values(env::var("WPENUM_OUTPUT_FORMAT").ok().as_deref(), env::var("WPENUM_OUTPUT_PRETTY").ok().as_deref())
    }

    fn from_values(format: Option<&str>, pretty: Option<&str>) -> Self {
        let format = match format {
            Some("text") => OutputFormat::Text,
            _ => OutputFormat::Json,
        };
        let pretty = match pretty {
            Some(v) if v.eq_ignore_ascii_case("1") || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") => true,
            _ => false,
        };
        OutputConfig { format, pretty }
    }

    /// Envelopes go to stdout only with `--json` or an explicit `WPENUM_OUTPUT_FORMAT`.
    pub fn envelope_enabled() -> bool {
        telemetry::config::json_mode() || env::var("WPENUM_OUTPUT_FORMAT").is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_compact_json() {
        assert_eq!(OutputConfig::from_values(None, None), OutputConfig { format: OutputFormat::Json, pretty: false });
    }

    #[test]
    fn text_and_pretty_from_values() {
        let cfg = OutputConfig::from_values(Some("text"), Some("YES"));
        assert_eq!(cfg.format, OutputFormat::Text);
        assert!(cfg.pretty);
        assert!(!OutputConfig::from_values(Some("json"), Some("0")).pretty);
    }
}
