use serde_json::Value;

use super::content::{ContentType, Record};
use super::error::ExtractError;

pub fn extract_record(kind: ContentType, item: &Value) -> Result<Record, ExtractError> {
    match kind {
        ContentType::Posts | ContentType::Pages | ContentType::Media => {
            let guid = item.get("guid").ok_or(ExtractError::MissingField("guid.rendered"))?;
            Ok(Record::Url(string_field(guid, "rendered", "guid.rendered")?))
        }
        ContentType::Comments => Ok(Record::Comment {
            name: string_field(item, "author_name", "author_name")?,
            date: string_field(item, "date", "date")?,
            link: string_field(item, "link", "link")?,
        }),
        ContentType::Users => Ok(Record::User {
            name: string_field(item, "name", "name")?,
            username: string_field(item, "slug", "slug")?,
        }),
    }
}

/// Extract every item on a page; failures are returned alongside instead of aborting the page.
pub fn extract_page(kind: ContentType, items: &[Value]) -> (Vec<Record>, Vec<(usize, ExtractError)>) {
    let mut records = Vec::with_capacity(items.len());
    let mut failures = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        match extract_record(kind, item) {
            Ok(r) => records.push(r),
            Err(e) => failures.push((idx, e)),
        }
    }
    (records, failures)
}

fn string_field(obj: &Value, key: &str, label: &'static str) -> Result<String, ExtractError> {
    let v = obj.get(key).ok_or(ExtractError::MissingField(label))?;
    v.as_str().map(str::to_string).ok_or(ExtractError::NotAString(label))
}
