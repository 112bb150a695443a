/// Page-level failure. Ends pagination for the current (site, type) pair.
#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Timeout,
    Decode(serde_json::Error),
    /// Comments body without any `[` to start the array from.
    NoArray,
    MockQueueEmpty,
}

impl FetchError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Http(err)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Http(_) | FetchError::Timeout | FetchError::MockQueueEmpty => "transport",
            FetchError::Decode(_) | FetchError::NoArray => "decode",
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Http(err) => write!(f, "http error: {err}"),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Decode(err) => write!(f, "decode error: {err}"),
            FetchError::NoArray => write!(f, "decode error: no JSON array in response body"),
            FetchError::MockQueueEmpty => write!(f, "mock fetcher response queue is empty"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(err) => Some(err),
            FetchError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

/// Item-level failure. Only the offending item is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    MissingField(&'static str),
    NotAString(&'static str),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::MissingField(field) => write!(f, "missing field `{field}`"),
            ExtractError::NotAString(field) => write!(f, "field `{field}` is not a string"),
        }
    }
}

impl std::error::Error for ExtractError {}
