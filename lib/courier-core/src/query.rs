//! Query parameter representations.
//!
//! [`Query`] replaces a "mapping or raw string" polymorphic field with an
//! explicit tagged union. Both representations normalize to the same
//! ordered pair list, so equal inputs produce equal wire strings.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// Query parameters for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Key/value mapping; encoded in key order.
    Map(BTreeMap<String, String>),
    /// A raw, already-encoded query string (`k=v&k2=v2`).
    Raw(String),
}

impl Query {
    /// Build from key/value pairs; values stringify through [`Display`],
    /// covering maps of any printable value type.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Display,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }

    /// Wrap a raw query string.
    pub fn raw(query: impl Into<String>) -> Self {
        Self::Raw(query.into())
    }

    /// Normalized key/value pairs, in encoding (key) order.
    ///
    /// Raw strings parse `k=v&k2=v2` segments; anything without exactly one
    /// `=` is dropped, and duplicate keys keep the last value.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        match self {
            Self::Map(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            Self::Raw(raw) => parse_raw(raw)
                .into_iter()
                .collect(),
        }
    }

    /// Returns `true` when no usable pair is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Map(map) => map.is_empty(),
            Self::Raw(raw) => parse_raw(raw).is_empty(),
        }
    }

    /// URL-encode into a wire query string, sorted by key.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(&key, &value);
        }
        serializer.finish()
    }
}

fn parse_raw(raw: &str) -> BTreeMap<String, String> {
    raw.split('&')
        .filter(|segment| segment.split('=').count() == 2)
        .filter_map(|segment| {
            url::form_urlencoded::parse(segment.as_bytes())
                .into_owned()
                .next()
        })
        .collect()
}

impl From<BTreeMap<String, String>> for Query {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::Map(map)
    }
}

impl From<HashMap<String, String>> for Query {
    fn from(map: HashMap<String, String>) -> Self {
        Self::Map(map.into_iter().collect())
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for Query {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_pairs() -> Vec<(String, String)> {
        vec![
            ("key".to_string(), "value".to_string()),
            ("user_id".to_string(), "100".to_string()),
        ]
    }

    #[test]
    fn map_and_raw_agree() {
        let from_map = Query::from_pairs([("key", "value"), ("user_id", "100")]);
        let from_raw = Query::raw("key=value&user_id=100");

        assert_eq!(from_map.pairs(), expected_pairs());
        assert_eq!(from_raw.pairs(), expected_pairs());
        assert_eq!(from_map.encode(), "key=value&user_id=100");
        assert_eq!(from_raw.encode(), "key=value&user_id=100");
    }

    #[test]
    fn any_value_map() {
        let query = Query::from_pairs([("user_id", 100_u64)]);
        assert_eq!(
            query.pairs(),
            vec![("user_id".to_string(), "100".to_string())]
        );
    }

    #[test]
    fn empty_raw_is_empty() {
        let query = Query::raw("");
        assert!(query.is_empty());
        assert!(query.pairs().is_empty());
        assert_eq!(query.encode(), "");
    }

    #[test]
    fn malformed_raw_segments_are_dropped() {
        let query = Query::raw("a=1&junk&b=2=3&c=4");
        assert_eq!(
            query.pairs(),
            vec![
                ("a".to_string(), "1".to_string()),
                ("c".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn raw_duplicate_keys_keep_last() {
        let query = Query::raw("a=1&a=2");
        assert_eq!(query.pairs(), vec![("a".to_string(), "2".to_string())]);
    }

    #[test]
    fn raw_percent_decoding_round_trips() {
        let query = Query::raw("q=a+b");
        assert_eq!(query.pairs(), vec![("q".to_string(), "a b".to_string())]);
        assert_eq!(query.encode(), "q=a+b");
    }

    #[test]
    fn from_impls() {
        let mut map = BTreeMap::new();
        map.insert("k".to_string(), "v".to_string());
        assert_eq!(Query::from(map).encode(), "k=v");

        let mut map = HashMap::new();
        map.insert("k".to_string(), "v".to_string());
        assert_eq!(Query::from(map).encode(), "k=v");

        assert_eq!(Query::from("k=v").encode(), "k=v");
    }
}
