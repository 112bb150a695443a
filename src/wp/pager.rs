use serde::Serialize;

use crate::telemetry;
use crate::telemetry::ops::enumerate::Phase as EnumPhase;

use super::client::{page_url, PageFetcher};
use super::content::{ContentType, Record};
use super::decode::decode_page;
use super::extract::extract_page;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stop {
    EmptyPage,
    FetchError,
    PageLimit,
}

#[derive(Debug)]
pub struct Walk {
    pub records: Vec<Record>,
    /// Pages that produced at least one item.
    pub pages: u32,
    pub skipped: usize,
    pub stop: Stop,
}

/// Walk one collection from page 1 until an empty page, an error, or `max_pages`.
///
/// Errors never escape: whatever was gathered before the failing page is returned.
pub async fn fetch_all(fetcher: &dyn PageFetcher, site: &str, kind: ContentType, max_pages: Option<u32>) -> Walk {
    let log = telemetry::enumerate();
    let mut walk = Walk { records: Vec::new(), pages: 0, skipped: 0, stop: Stop::EmptyPage };
    let mut page: u32 = 1;

    loop {
        if max_pages.is_some_and(|max| page > max) {
            log.warn_kv(&format!("⚠️ {site} {kind}: page limit reached"), [("site", site.to_string()), ("type", kind.to_string()), ("max_pages", walk.pages.to_string())]);
            walk.stop = Stop::PageLimit;
            break;
        }

        let url = page_url(site, kind, fetcher.per_page(), page);
        let items = {
            let _s = log.span_kv(&EnumPhase::FetchPage, [("url", url.clone())]).entered();
            match fetcher.get(&url).await.and_then(|resp| {
                log.debug_kv("response", [("status", resp.status.to_string()), ("bytes", resp.body.len().to_string())]);
                decode_page(kind, resp.status, &resp.body)
            }) {
                Ok(items) => items,
                Err(e) => {
                    log.error_kv(&format!("❌ {site} {kind} page {page} failed: {e}"), [("site", site.to_string()), ("error_kind", e.kind().to_string())]);
                    walk.stop = Stop::FetchError;
                    break;
                }
            }
        };
        if items.is_empty() { break; }

        let (records, failures) = { let _s = log.span(&EnumPhase::Extract).entered(); extract_page(kind, &items) };
        for (idx, err) in &failures {
            log.error_kv(&format!("↩️ skip {kind} item {idx} on page {page}: {err}"), [("site", site.to_string())]);
        }
        log.debug(format!("{kind} page {page}: {} item(s), {} record(s)", items.len(), records.len()));
        walk.skipped += failures.len();
        walk.records.extend(records);
        walk.pages += 1;
        page += 1;
    }
    walk
}
