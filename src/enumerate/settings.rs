use std::time::Duration;

use crate::wp::{ContentType, WpClientConfig};

use super::EnumerateCmd;

/// Everything one run needs, resolved once from defaults, env and flags.
#[derive(Clone, Debug)]
pub struct EnumSettings {
    /// Enabled collections, in walk order.
    pub kinds: Vec<ContentType>,
    pub ignore_images: bool,
    pub max_pages: Option<u32>,
    pub client: WpClientConfig,
}

impl EnumSettings {
    pub fn resolve(args: &EnumerateCmd, mut client: WpClientConfig, env_max_pages: Option<u32>) -> Self {
        let kinds = ContentType::ALL.into_iter().filter(|k| args.enabled(*k)).collect();
        if let Some(secs) = args.timeout { client.timeout = Duration::from_secs(secs); }
        if let Some(n) = args.per_page { client.per_page = n; }
        if let Some(ua) = &args.user_agent { client.user_agent = ua.clone(); }
        if args.verify_tls { client.accept_invalid_certs = false; }
        EnumSettings {
            kinds,
            ignore_images: args.ignore_images && !args.no_ignore_images,
            max_pages: args.max_pages.or(env_max_pages),
            client,
        }
    }
}

pub fn env_max_pages() -> Option<u32> {
    std::env::var("WPENUM_MAX_PAGES").ok().and_then(|v| v.parse::<u32>().ok()).filter(|n| *n > 0)
}
