use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use crate::output::config::OutputConfig;
use crate::output::types::Meta;
use crate::output::Sink;
use crate::telemetry::{self};
use crate::telemetry::ops::enumerate::Phase as EnumPhase;
use crate::wp::{filter, pager, ContentType, PageFetcher, WpClient, WpClientConfig};

pub mod settings;
pub mod sites;
pub mod types;
pub mod write;

use settings::EnumSettings;
use types::{CollectionSummary, RunResult, RunSummary, SiteResult, SiteSummary};
use write::Destination;

/// Enumerate WordPress REST content for a list of sites
#[derive(Args, Debug)]
pub struct EnumerateCmd {
    /// Newline-delimited list of site base URLs
    #[arg(short = 'i', long)]
    pub input_file: Option<PathBuf>,
    /// Where to write the JSON results (`-` for stdout)
    #[arg(short = 'o', long, default_value = "wordpress_sites.txt")]
    pub output_file: String,

    /// Fetch media
    #[arg(short = 'm', long, overrides_with = "no_media")]
    pub media: bool,
    #[arg(long, overrides_with = "media")]
    pub no_media: bool,
    /// Fetch posts
    #[arg(short = 'p', long, visible_alias = "po", overrides_with = "no_posts")]
    pub posts: bool,
    #[arg(long, overrides_with = "posts")]
    pub no_posts: bool,
    /// Fetch pages
    #[arg(short = 'P', long, visible_alias = "pa", overrides_with = "no_pages")]
    pub pages: bool,
    #[arg(long, overrides_with = "pages")]
    pub no_pages: bool,
    /// Fetch users
    #[arg(short = 'u', long, overrides_with = "no_users")]
    pub users: bool,
    #[arg(long, overrides_with = "users")]
    pub no_users: bool,
    /// Fetch comments
    #[arg(short = 'c', long, overrides_with = "no_comments")]
    pub comments: bool,
    #[arg(long, overrides_with = "comments")]
    pub no_comments: bool,
    /// Filter out media URLs with image/video extensions
    #[arg(short = 'I', long, visible_aliases = ["ignoreImages", "im"], overrides_with = "no_ignore_images")]
    pub ignore_images: bool,
    #[arg(long, overrides_with = "ignore_images")]
    pub no_ignore_images: bool,

    /// Per-request timeout in seconds [default: 10]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
    /// Items requested per page [default: 100]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: Option<u32>,
    /// Stop each collection after this many pages
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,
    #[arg(long)]
    pub user_agent: Option<String>,
    /// Verify TLS certificates (off by default so self-signed targets still answer)
    #[arg(long, default_value_t = false)]
    pub verify_tls: bool,
}

impl EnumerateCmd {
    fn enabled(&self, kind: ContentType) -> bool {
        match kind {
            ContentType::Posts => self.posts && !self.no_posts,
            ContentType::Pages => self.pages && !self.no_pages,
            ContentType::Media => self.media && !self.no_media,
            ContentType::Comments => self.comments && !self.no_comments,
            ContentType::Users => self.users && !self.no_users,
        }
    }
}

pub async fn run(args: EnumerateCmd) -> Result<()> {
    let settings = EnumSettings::resolve(&args, WpClientConfig::from_env(), settings::env_max_pages());
    let client = WpClient::new(settings.client.clone())?;
    run_with(&client, &args, &settings).await
}

/// Load sites, walk them and write results. Input and output problems are logged, not returned.
pub async fn run_with(fetcher: &dyn PageFetcher, args: &EnumerateCmd, settings: &EnumSettings) -> Result<()> {
    let t0 = Instant::now();
    let log = telemetry::enumerate();
    let _g = log.root_span_kv([
        ("input_file", format!("{:?}", args.input_file)),
        ("output_file", args.output_file.clone()),
        ("kinds", settings.kinds.iter().map(|k| k.label()).collect::<Vec<_>>().join(",")),
        ("ignore_images", settings.ignore_images.to_string()),
        ("max_pages", format!("{:?}", settings.max_pages)),
    ]).entered();

    let Some(path) = args.input_file.as_deref() else {
        log.error("No websites provided. Please specify an input file.");
        return Ok(());
    };
    let sites = {
        let _s = log.span_kv(&EnumPhase::LoadSites, [("path", path.display().to_string())]).entered();
        match sites::read_sites(path) {
            Ok(sites) => sites,
            Err(e) => {
                log.error(format!("Error reading input file: {e:#}"));
                return Ok(());
            }
        }
    };
    if sites.is_empty() {
        log.error("No websites provided. Please specify an input file.");
        return Ok(());
    }
    if settings.kinds.is_empty() {
        log.warn("No content types enabled; sites will be listed with empty results.");
    }
    if settings.client.accept_invalid_certs {
        log.debug("TLS certificate verification is disabled");
    }

    let (run, summary) = enumerate_sites(fetcher, &sites, settings).await;

    let dest = Destination::parse(&args.output_file);
    {
        let _s = log.span_kv(&EnumPhase::Write, [("dest", dest.to_string())]).entered();
        match write::write_results(&dest, &run) {
            Ok(()) => log.info(format!("💾 Results saved to {dest}")),
            Err(e) => log.error(format!("Error writing output file: {e:#}")),
        }
    }

    if OutputConfig::envelope_enabled() {
        log.result(&summary, Some(Meta { duration_ms: Some(t0.elapsed().as_millis()) }), envelope_sink(&dest))?;
    }
    Ok(())
}

/// Results on stdout push the envelope to stderr.
fn envelope_sink(dest: &Destination) -> Sink {
    match dest {
        Destination::Stdout => Sink::Stderr,
        Destination::File(_) => Sink::Stdout,
    }
}

/// Walk every site in input order, one at a time.
pub async fn enumerate_sites(fetcher: &dyn PageFetcher, sites: &[String], settings: &EnumSettings) -> (RunResult, RunSummary) {
    let log = telemetry::enumerate();
    let mut run = RunResult::new();
    let mut per_site = Vec::with_capacity(sites.len());

    for site in sites {
        let _s = log.span_kv(&EnumPhase::Site, [("site", site.clone())]).entered();
        log.info(format!("🔎 Processing {site}..."));
        let (result, summary) = enumerate_site(fetcher, site, settings).await;
        let counts: Vec<(&'static str, usize)> = summary.collections.iter().map(|c| (c.kind, c.records)).collect();
        log.site_summary(site, &counts, summary.errors());
        run.push(site.clone(), result);
        per_site.push(summary);
    }

    let sites = per_site.len();
    let records = run.iter().map(|(_, r)| r.total()).sum();
    let errors = per_site.iter().map(SiteSummary::errors).sum();
    log.totals(sites, records, errors);
    (run, RunSummary { sites, records, errors, per_site })
}

pub async fn enumerate_site(fetcher: &dyn PageFetcher, site: &str, settings: &EnumSettings) -> (SiteResult, SiteSummary) {
    let log = telemetry::enumerate();
    let mut result = SiteResult::new();
    let mut collections = Vec::with_capacity(settings.kinds.len());

    for &kind in &settings.kinds {
        let _s = log.span_kv(&EnumPhase::Collection, [("type", kind.to_string())]).entered();
        let walk = pager::fetch_all(fetcher, site, kind, settings.max_pages).await;
        let mut records = walk.records;
        let mut filtered = 0;
        if kind == ContentType::Media && settings.ignore_images {
            let _f = log.span(&EnumPhase::Filter).entered();
            let before = records.len();
            records = filter::drop_images(records);
            filtered = before - records.len();
            log.debug(format!("filtered {filtered} image URL(s) from {site} media"));
        }
        collections.push(CollectionSummary {
            kind: kind.label(),
            records: records.len(),
            pages: walk.pages,
            skipped: walk.skipped,
            filtered,
            stop: walk.stop,
        });
        result.insert(kind, records);
    }
    (result, SiteSummary { site: site.to_string(), collections })
}
