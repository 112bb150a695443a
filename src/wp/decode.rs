use serde_json::Value;

use super::content::ContentType;
use super::error::FetchError;

/// Turn one HTTP response into the page's raw items.
///
/// Anything other than a 200 with a body is an empty page, which ends
/// pagination without an error.
pub fn decode_page(kind: ContentType, status: u16, body: &str) -> Result<Vec<Value>, FetchError> {
    if status != 200 || body.trim().is_empty() { return Ok(Vec::new()); }
    let json = if kind.strips_prefix() { strip_array_prefix(body)? } else { body };
    serde_json::from_str::<Vec<Value>>(json).map_err(FetchError::Decode)
}

/// Drop everything before the first `[`, keeping that `[` as the array start.
pub fn strip_array_prefix(body: &str) -> Result<&str, FetchError> {
    body.find('[').map(|idx| &body[idx..]).ok_or(FetchError::NoArray)
}
