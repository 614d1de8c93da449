//! Query parameters
//!
//! An ordered, multi-valued view of a URL query string. Order is kept so
//! that re-encoded links list parameters the way the request did.

use url::form_urlencoded;

/// Query-string parameters of one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { pairs: vec![] }
    }

    /// Parse an `application/x-www-form-urlencoded` query string (no leading `?`)
    pub fn parse(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Get the value for a key. With repeated keys the last value wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get every value for a key, in request order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Replace all values of `key` with a single value.
    ///
    /// The value takes the position of the first existing occurrence, or is
    /// appended when the key is new.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || *k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// Add a value, keeping existing ones
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Remove every value of `key`; returns whether anything was removed
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of key/value pairs (repeated keys count once per value)
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode back into a query string (no leading `?`)
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_get() {
        let params = QueryParams::parse("filter=active&sort=-name&tag=a&tag=b");
        assert_eq!(params.get("filter"), Some("active"));
        assert_eq!(params.get("sort"), Some("-name"));
        assert_eq!(params.get("tag"), Some("b"));
        assert_eq!(params.get_all("tag").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_parse_decodes() {
        let params = QueryParams::parse("q=hello+world&name=caf%C3%A9");
        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("name"), Some("café"));
        assert!(QueryParams::parse("").is_empty());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::parse("sort=id&page=2&sort=name&filter=x");
        params.set("sort", "-name");
        assert_eq!(params.encode(), "sort=-name&page=2&filter=x");

        params.set("order", "up");
        assert_eq!(params.encode(), "sort=-name&page=2&filter=x&order=up");
    }

    #[test]
    fn test_remove() {
        let mut params = QueryParams::parse("tag=a&page=2&tag=b");
        assert!(params.remove("tag"));
        assert!(!params.remove("tag"));
        assert_eq!(params.encode(), "page=2");
        assert!(params.remove("page"));
        assert!(params.is_empty());
        assert_eq!(params.encode(), "");
    }

    #[test]
    fn test_encode_escapes() {
        let mut params = QueryParams::new();
        params.append("q", "a b&c");
        params.append("sort", "-created_at");
        assert_eq!(params.encode(), "q=a+b%26c&sort=-created_at");
        assert!(params.contains_key("q"));
    }
}
