use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use splitsheet_core::Catalog;

use crate::engine::{search, ResultType, SearchResult};

/// Query-string key holding the free-text query.
pub const QUERY_PARAM: &str = "q";

/// Query-string key holding the result type.
pub const TYPE_PARAM: &str = "type";

/// A search as requested by a caller, typically decoded from URL
/// parameters like `?q=yesterday&type=writers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub result_type: ResultType,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>, result_type: ResultType) -> Self {
        Self {
            query: query.into(),
            result_type,
        }
    }

    /// Build a request from `(key, value)` parameter pairs.
    ///
    /// A missing or unrecognized `type` falls back to songs. Unknown keys
    /// are ignored. When a key repeats, the last value wins.
    pub fn from_params<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::default();

        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                QUERY_PARAM => request.query = value.to_string(),
                TYPE_PARAM => {
                    request.result_type = value.parse().unwrap_or_else(|e| {
                        log::debug!("Ignoring result type: {}", e);
                        ResultType::Songs
                    });
                }
                _ => {}
            }
        }

        request
    }

    /// Decode a URL query string such as `q=queen%20music&type=writers`.
    ///
    /// A leading `?` is ignored and `+` decodes to a space.
    #[must_use]
    pub fn from_query_string(query_string: &str) -> Self {
        let pairs = query_string
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            });
        Self::from_params(pairs)
    }

    /// Encode as `q=<query>&type=<type>`, leaving out an empty query.
    /// The query is percent-encoded.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let type_pair = format!("{TYPE_PARAM}={}", self.result_type);
        if self.query.is_empty() {
            type_pair
        } else {
            format!(
                "{QUERY_PARAM}={}&{type_pair}",
                urlencoding::encode(&self.query)
            )
        }
    }

    /// The same query with the result type reset to songs.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::new(self.query.clone(), ResultType::Songs)
    }

    /// The same query showing a different result type.
    #[must_use]
    pub fn with_result_type(&self, result_type: ResultType) -> Self {
        Self::new(self.query.clone(), result_type)
    }

    #[must_use]
    pub fn run(&self, catalog: &Catalog) -> SearchResult {
        search(catalog, &self.query, self.result_type)
    }
}

fn decode(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::debug!("Keeping undecodable parameter {:?}: {}", raw, e);
            spaced.into_owned()
        }
    }
}
