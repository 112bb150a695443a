use std::ffi::OsString;

use clap::Parser;
use anyhow::Result;
use dotenvy::dotenv;
use tracing_subscriber::filter::LevelFilter;

mod enumerate;
mod output;
mod telemetry;
mod wp;

#[derive(Parser)]
#[command(name = "wp-enum", about = "Enumerate posts, pages, media, users and comments via the WordPress REST API")]
struct Cli {
    /// Log verbosity (TRACE, DEBUG, INFO, WARNING, ERROR, CRITICAL); overrides RUST_LOG
    #[arg(long, value_parser = telemetry::config::parse_log_level)]
    log_level: Option<LevelFilter>,
    /// Emit a single JSON envelope with the run summary to stdout; logs go to stderr
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(flatten)]
    args: enumerate::EnumerateCmd,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse_from(expand_legacy_shorts(std::env::args_os()));
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect --log-level, RUST_LOG and WPENUM_LOG_FORMAT
    telemetry::config::init_tracing(cli.log_level);

    enumerate::run(cli.args).await
}

/// Multi-letter short flags (`-po`, `-pa`, `-im`) would otherwise be read as clusters like `-i m`.
fn expand_legacy_shorts<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-po") => OsString::from("--posts"),
            Some("-pa") => OsString::from("--pages"),
            Some("-im") => OsString::from("--ignore-images"),
            _ => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_typical_invocation() {
        let cli = Cli::try_parse_from(["wp-enum", "-i", "sites.txt", "-o", "-", "--log-level", "DEBUG", "-p", "-u", "--json"]).unwrap();
        assert_eq!(cli.log_level, Some(LevelFilter::DEBUG));
        assert!(cli.json);
        assert!(cli.args.posts && cli.args.users && !cli.args.media);
        assert_eq!(cli.args.output_file, "-");
    }

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(expand_legacy_shorts(argv.iter().map(OsString::from))).unwrap()
    }

    #[test]
    fn legacy_two_letter_shorts_are_honored() {
        let cli = parse(&["wp-enum", "-i", "s.txt", "-m", "-im", "-po", "-pa"]);
        assert_eq!(cli.args.input_file.as_deref(), Some(std::path::Path::new("s.txt")));
        assert!(cli.args.media && cli.args.ignore_images && cli.args.posts && cli.args.pages);
        assert!(!cli.args.users && !cli.args.comments);
    }

    #[test]
    fn clustered_shorts_are_left_alone() {
        let cli = parse(&["wp-enum", "-pom"]);
        assert!(cli.args.posts);
        assert_eq!(cli.args.output_file, "m");
    }

    #[test]
    fn output_file_has_a_default() {
        let cli = Cli::try_parse_from(["wp-enum"]).unwrap();
        assert_eq!(cli.args.output_file, "wordpress_sites.txt");
        assert!(cli.args.input_file.is_none());
        assert!(cli.log_level.is_none());
    }
}
