use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use super::content::Record;

fn image_ext_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.(jpg|gif|jpeg|png|svg|tiff|webm|webp)$").expect("static regex"))
}

/// True when the URL's path ends in an image/video extension (case-insensitive).
pub fn is_image_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(u) => image_ext_re().is_match(u.path()),
        Err(_) => image_ext_re().is_match(raw),
    }
}

/// Drop media records whose URL looks like an image. Non-URL records pass through.
pub fn drop_images(records: Vec<Record>) -> Vec<Record> {
    records.into_iter().filter(|r| !r.url().is_some_and(is_image_url)).collect()
}
