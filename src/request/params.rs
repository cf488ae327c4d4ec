//! The ordered query-parameter list sent to the archive endpoint.

use serde::Serialize;

/// An ordered list of `(name, value)` query parameters.
///
/// Order follows insertion so the rendered URL is stable. reqwest serializes
/// the list directly into the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &'static str, value: impl ToString) {
        self.0.push((name, value.to_string()));
    }

    /// Returns the value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_order() {
        let mut params = QueryParams::new();
        params.push("latitude", 52.52);
        params.push("hourly", "rain,snowfall");

        assert_eq!(params.get("latitude"), Some("52.52"));
        assert_eq!(params.get("hourly"), Some("rain,snowfall"));
        assert_eq!(params.get("daily"), None);
        assert_eq!(params.keys().collect::<Vec<_>>(), ["latitude", "hourly"]);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_serializes_as_pairs() -> Result<(), Box<dyn std::error::Error>> {
        let mut params = QueryParams::new();
        params.push("start_date", "2023-01-01");
        params.push("elevation", 0.0);

        let json = serde_json::to_value(&params)?;
        assert_eq!(
            json,
            serde_json::json!([["start_date", "2023-01-01"], ["elevation", "0"]])
        );
        Ok(())
    }
}
