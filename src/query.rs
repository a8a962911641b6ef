//! Ordered query-string parameters
//!
//! Keeps pairs in insertion order and allows repeated keys, which the API uses
//! for list parameters such as `keywords_ids[]`.

use chrono::NaiveDate;

/// Ordered list of query parameters, percent-encoded on render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, keeping any earlier pair with the same key
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Append one `key` pair per value, in iteration order
    #[must_use]
    pub fn with_list<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.push(key, value.as_ref());
        }
        self
    }

    /// Restrict position data to `from..=to` (`date_from` / `date_to`)
    #[must_use]
    pub fn date_range(self, from: NaiveDate, to: NaiveDate) -> Self {
        self.with("date_from", from.format("%Y-%m-%d").to_string())
            .with("date_to", to.format("%Y-%m-%d").to_string())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// All values stored under `key`, in order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Render as `k=v&k=v` with keys and values percent-encoded
    ///
    /// Brackets in keys are encoded too (`keywords_ids%5B%5D`); the server
    /// decodes them back to `keywords_ids[]`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.push(k, v);
        }
    }
}
