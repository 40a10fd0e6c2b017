/// URL query parameter container with unique keys.
///
/// Keys keep their insertion order; setting an existing key replaces its
/// value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Builds an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing the value if the key already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Folds another query in; keys from `other` win on collision.
    pub fn merge(&mut self, other: Query) -> &mut Self {
        for (key, value) in other.pairs {
            self.set(key, value);
        }
        self
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Key/value pairs in insertion order, as accepted by
    /// `reqwest::RequestBuilder::query`.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl From<()> for Query {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Query {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<Vec<(String, String)>> for Query {
    fn from(pairs: Vec<(String, String)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.set(key, value);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use crate::Query;

    #[test]
    fn set_replaces_existing_key_in_place() {
        let mut query = Query::from([("file_type", "json"), ("limit", "10")]);
        query.set("file_type", "xml");

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("file_type"), Some("xml"));
        assert_eq!(query.pairs()[0].0, "file_type");
    }

    #[test]
    fn merge_prefers_incoming_values() {
        let mut base = Query::from([("api_key", "key"), ("file_type", "json")]);
        base.merge(Query::from([("file_type", "xml"), ("frequency", "q")]));

        assert_eq!(base.get("api_key"), Some("key"));
        assert_eq!(base.get("file_type"), Some("xml"));
        assert_eq!(base.get("frequency"), Some("q"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn duplicate_keys_collapse_on_collect() {
        let query: Query = [("a", "1"), ("a", "2")].into();
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("a"), Some("2"));
    }

    #[test]
    fn unit_converts_to_empty_query() {
        let query: Query = ().into();
        assert!(query.is_empty());
    }
}
