/// Lookup capability the binder reads raw values from.
///
/// Absent keys yield `""`: the binder does not distinguish a missing key
/// from an empty value.
pub trait Source {
    fn value(&self, key: &str) -> &str;
}

/// Decoded key/value pairs of one input (query string or form body).
///
/// Order of insertion is preserved. Repeated keys are kept, but lookups
/// only ever see the first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Source for FormValues {
    fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }
}

/// Already-parsed input of one request: query string and submitted body,
/// kept apart so each binding flavor can pick its own view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestValues {
    pub query: FormValues,
    pub body: FormValues,
}

impl RequestValues {
    pub fn new(query: FormValues, body: FormValues) -> Self {
        Self { query, body }
    }

    /// Body value when present and non-empty, otherwise the query value.
    pub fn combined(&self) -> Combined<'_> {
        Combined(self)
    }

    /// Body values only; query-only keys read as empty.
    pub fn body_only(&self) -> BodyOnly<'_> {
        BodyOnly(&self.body)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Combined<'a>(&'a RequestValues);

impl Source for Combined<'_> {
    fn value(&self, key: &str) -> &str {
        match self.0.body.get(key) {
            Some(v) if !v.is_empty() => v,
            _ => self.0.query.value(key),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BodyOnly<'a>(&'a FormValues);

impl Source for BodyOnly<'_> {
    fn value(&self, key: &str) -> &str {
        self.0.value(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &[(&str, &str)], body: &[(&str, &str)]) -> RequestValues {
        RequestValues::new(
            query.iter().copied().collect(),
            body.iter().copied().collect(),
        )
    }

    #[test]
    fn test_first_value_wins() {
        let values: FormValues = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(values.get("a"), Some("1"));
        assert_eq!(values.len(), 3);
        assert_eq!(values.value("missing"), "");

        let mut appended = FormValues::new();
        appended.insert("k", "x");
        appended.insert("k", "y");
        assert_eq!(appended.value("k"), "x");
        assert!(!appended.is_empty());
    }

    #[test]
    fn test_combined_prefers_non_empty_body() {
        let req = request(&[("v1", "hello"), ("v2", "query")], &[("v1", ""), ("v2", "body")]);
        let src = req.combined();
        assert_eq!(src.value("v1"), "hello");
        assert_eq!(src.value("v2"), "body");
        assert_eq!(src.value("v3"), "");
    }

    #[test]
    fn test_body_only_ignores_query() {
        let req = request(&[("v1", "hello")], &[("v2", "world")]);
        let src = req.body_only();
        assert_eq!(src.value("v1"), "");
        assert_eq!(src.value("v2"), "world");
    }
}
