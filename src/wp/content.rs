use serde::Serialize;

/// Content collections exposed under `/wp-json/wp/v2/`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    Posts,
    Pages,
    Media,
    Comments,
    Users,
}

impl ContentType {
    /// Order in which a site's collections are walked and written out.
    pub const ALL: [ContentType; 5] = [
        ContentType::Posts,
        ContentType::Pages,
        ContentType::Comments,
        ContentType::Media,
        ContentType::Users,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Posts => "posts",
            ContentType::Pages => "pages",
            ContentType::Media => "media",
            ContentType::Comments => "comments",
            ContentType::Users => "users",
        }
    }

    // collection path segments happen to match the labels
    pub fn path(&self) -> &'static str { self.label() }

    /// Comments responses may carry non-JSON framing before the array.
    pub fn strips_prefix(&self) -> bool { matches!(self, ContentType::Comments) }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized item. Serialized untagged so posts/pages/media come out as bare URL strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Url(String),
    Comment { name: String, date: String, link: String },
    User { name: String, username: String },
}

impl Record {
    pub fn url(&self) -> Option<&str> {
        match self {
            Record::Url(u) => Some(u),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_paths_match_labels() {
        for kind in ContentType::ALL {
            assert_eq!(kind.path(), kind.label());
        }
        assert_eq!(ContentType::Media.path(), "media");
        assert_eq!(ContentType::Users.to_string(), "users");
    }

    #[test]
    fn only_comments_strip_prefix() {
        let stripping: Vec<_> = ContentType::ALL.iter().filter(|k| k.strips_prefix()).collect();
        assert_eq!(stripping, vec![&ContentType::Comments]);
    }

    #[test]
    fn records_serialize_in_output_shape() {
        let url = Record::Url("http://x/?p=1".into());
        let comment = Record::Comment { name: "A".into(), date: "2024-01-01".into(), link: "http://x".into() };
        let user = Record::User { name: "Admin".into(), username: "admin".into() };

        assert_eq!(serde_json::to_value(&url).unwrap(), json!("http://x/?p=1"));
        assert_eq!(serde_json::to_value(&comment).unwrap(), json!({"name": "A", "date": "2024-01-01", "link": "http://x"}));
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({"name": "Admin", "username": "admin"}));
        assert_eq!(user.url(), None);
        assert_eq!(url.url(), Some("http://x/?p=1"));
    }
}
