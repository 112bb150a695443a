use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::wp::pager::Stop;
use crate::wp::{ContentType, Record};

/// Records per enabled content type for one site, in walk order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SiteResult {
    entries: Vec<(ContentType, Vec<Record>)>,
}

impl SiteResult {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, kind: ContentType, records: Vec<Record>) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, existing)) => *existing = records,
            None => self.entries.push((kind, records)),
        }
    }

    pub fn get(&self, kind: ContentType) -> Option<&[Record]> {
        self.entries.iter().find(|(k, _)| *k == kind).map(|(_, r)| r.as_slice())
    }

    pub fn total(&self) -> usize { self.entries.iter().map(|(_, r)| r.len()).sum() }
}

impl Serialize for SiteResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, records) in &self.entries {
            map.serialize_entry(kind.label(), records)?;
        }
        map.end()
    }
}

/// All sites in input order. Serializes as `[{site: SiteResult}, ...]`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunResult {
    sites: Vec<(String, SiteResult)>,
}

impl RunResult {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, site: impl Into<String>, result: SiteResult) {
        self.sites.push((site.into(), result));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteResult)> {
        self.sites.iter().map(|(s, r)| (s.as_str(), r))
    }
}

struct SiteEntry<'a>(&'a str, &'a SiteResult);

impl Serialize for SiteEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, self.1)?;
        map.end()
    }
}

impl Serialize for RunResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.sites.len()))?;
        for (site, result) in &self.sites {
            seq.serialize_element(&SiteEntry(site, result))?;
        }
        seq.end()
    }
}

// Summary envelope types
#[derive(Debug, Serialize)]
pub struct CollectionSummary { pub kind: &'static str, pub records: usize, pub pages: u32, pub skipped: usize, pub filtered: usize, pub stop: Stop }

#[derive(Debug, Serialize)]
pub struct SiteSummary { pub site: String, pub collections: Vec<CollectionSummary> }

impl SiteSummary {
    pub fn errors(&self) -> usize {
        self.collections.iter().map(|c| c.skipped + usize::from(c.stop == Stop::FetchError)).sum()
    }
}

#[derive(Debug, Serialize)]
pub struct RunSummary { pub sites: usize, pub records: usize, pub errors: usize, pub per_site: Vec<SiteSummary> }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn site_keys_keep_insertion_order() {
        let mut site = SiteResult::new();
        site.insert(ContentType::Users, vec![Record::User { name: "N".into(), username: "n".into() }]);
        site.insert(ContentType::Comments, vec![]);
        site.insert(ContentType::Media, vec![Record::Url("http://x/a.mp4".into())]);
        let s = serde_json::to_string(&site).unwrap();
        assert_eq!(s, r#"{"users":[{"name":"N","username":"n"}],"comments":[],"media":["http://x/a.mp4"]}"#);
        assert_eq!(site.total(), 2);
    }

    #[test]
    fn reinserting_a_kind_replaces_its_records() {
        let mut site = SiteResult::new();
        site.insert(ContentType::Media, vec![Record::Url("http://x/a.jpg".into())]);
        site.insert(ContentType::Media, vec![]);
        assert_eq!(serde_json::to_string(&site).unwrap(), r#"{"media":[]}"#);
        assert_eq!(site.get(ContentType::Media), Some(&[][..]));
        assert_eq!(site.get(ContentType::Posts), None);
    }

    #[test]
    fn run_result_is_a_list_of_single_key_objects() {
        let mut a = SiteResult::new();
        a.insert(ContentType::Posts, vec![Record::Url("http://a/?p=1".into())]);
        let mut run = RunResult::new();
        run.push("http://b", SiteResult::new());
        run.push("http://a", a);
        assert_eq!(
            serde_json::to_value(&run).unwrap(),
            json!([{"http://b": {}}, {"http://a": {"posts": ["http://a/?p=1"]}}])
        );
        assert_eq!(run.iter().map(|(s, _)| s).collect::<Vec<_>>(), vec!["http://b", "http://a"]);
    }

    #[test]
    fn errors_count_skips_and_failed_walks() {
        let summary = SiteSummary {
            site: "http://x".into(),
            collections: vec![
                CollectionSummary { kind: "posts", records: 10, pages: 1, skipped: 2, filtered: 0, stop: Stop::EmptyPage },
                CollectionSummary { kind: "users", records: 0, pages: 0, skipped: 0, filtered: 0, stop: Stop::FetchError },
            ],
        };
        assert_eq!(summary.errors(), 3);
    }
}
