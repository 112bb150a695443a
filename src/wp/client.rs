use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::content::ContentType;
use super::error::FetchError;

const DEFAULT_USER_AGENT: &str = "WordPress Testing";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PER_PAGE: u32 = 100;

#[derive(Clone, Debug)]
pub struct WpClientConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub per_page: u32,
    /// Audited targets routinely run self-signed or expired certificates.
    pub accept_invalid_certs: bool,
}

impl Default for WpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            per_page: DEFAULT_PER_PAGE,
            accept_invalid_certs: true,
        }
    }
}

impl WpClientConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("WPENUM_USER_AGENT").ok().as_deref(),
            std::env::var("WPENUM_TIMEOUT_SECS").ok().as_deref(),
            std::env::var("WPENUM_PER_PAGE").ok().as_deref(),
        )
    }

    /// Blank, unparsable or zero values keep the default.
    fn from_values(user_agent: Option<&str>, timeout_secs: Option<&str>, per_page: Option<&str>) -> Self {
        let mut cfg = Self::default();
        if let Some(ua) = user_agent.filter(|ua| !ua.trim().is_empty()) {
            cfg.user_agent = ua.to_string();
        }
        if let Some(secs) = timeout_secs.and_then(|v| v.trim().parse::<u64>().ok()).filter(|&n| n > 0) {
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(n) = per_page.and_then(|v| v.trim().parse::<u32>().ok()).filter(|&n| n > 0) {
            cfg.per_page = n;
        }
        cfg
    }
}

/// `{site}/wp-json/wp/v2/{type}?per_page={n}&page={page}`; a trailing `/` on the site is dropped.
pub fn page_url(site: &str, kind: ContentType, per_page: u32, page: u32) -> String {
    format!(
        "{}/wp-json/wp/v2/{}?per_page={}&page={}",
        site.trim_end_matches('/'),
        kind.path(),
        per_page,
        page
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    fn per_page(&self) -> u32;
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

#[derive(Clone)]
pub struct WpClient {
    http: HttpClient,
    cfg: WpClientConfig,
}

impl WpClient {
    pub fn new(cfg: WpClientConfig) -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(cfg.timeout)
            .danger_accept_invalid_certs(cfg.accept_invalid_certs)
            .build()
            .map_err(FetchError::from_reqwest)?;
        Ok(Self { http, cfg })
    }
}

#[async_trait]
impl PageFetcher for WpClient {
    fn per_page(&self) -> u32 { self.cfg.per_page }

    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(FetchError::from_reqwest)?;
        Ok(RawResponse::new(status, body))
    }
}

#[cfg(test)]
pub use mock::MockFetcher;
