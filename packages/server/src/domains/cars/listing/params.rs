use std::collections::HashMap;

use url::form_urlencoded;

pub const QUERY: &str = "query";
pub const SORT_KEY: &str = "sortKey";
pub const DIRECTION: &str = "direction";
pub const FUEL_TYPE: &str = "fuelType";

/// Raw listing parameters as found in the page's query string.
///
/// Values are kept verbatim; validation happens in
/// [`build_filter_spec`](super::filter::build_filter_spec).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    pub query: Option<String>,
    pub sort_key: Option<String>,
    pub direction: Option<String>,
    pub fuel_type: Option<String>,
}

impl ListingParams {
    /// Pick the recognized keys out of a query map. Unknown keys are ignored.
    pub fn from_query_map(map: &HashMap<String, String>) -> Self {
        Self {
            query: map.get(QUERY).cloned(),
            sort_key: map.get(SORT_KEY).cloned(),
            direction: map.get(DIRECTION).cloned(),
            fuel_type: map.get(FUEL_TYPE).cloned(),
        }
    }

    /// Parse an url-encoded query string (without the leading `?`).
    ///
    /// When a key repeats, the first occurrence wins.
    pub fn from_query_string(raw: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(raw.trim_start_matches('?').as_bytes()) {
            if let Some(slot) = params.slot_mut(&key) {
                if slot.is_none() {
                    *slot = Some(value.into_owned());
                }
            }
        }
        params
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            QUERY => Some(&mut self.query),
            SORT_KEY => Some(&mut self.sort_key),
            DIRECTION => Some(&mut self.direction),
            FUEL_TYPE => Some(&mut self.fuel_type),
            _ => None,
        }
    }

    /// Apply updates the way the listing page does: a non-empty value sets
    /// the key, an empty value removes it. Unknown keys are ignored.
    pub fn merge<'a, I>(&self, updates: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut next = self.clone();
        for (key, value) in updates {
            if let Some(slot) = next.slot_mut(key) {
                *slot = (!value.is_empty()).then(|| value.to_string());
            }
        }
        next
    }

    /// Render back to a query string, keys in a stable order.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in [
            (QUERY, &self.query),
            (SORT_KEY, &self.sort_key),
            (DIRECTION, &self.direction),
            (FUEL_TYPE, &self.fuel_type),
        ] {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_string_reads_known_keys() {
        let params =
            ListingParams::from_query_string("?query=Volvo%20XC&sortKey=year&fuelType=Diesel,Electric&page=3");

        assert_eq!(params.query.as_deref(), Some("Volvo XC"));
        assert_eq!(params.sort_key.as_deref(), Some("year"));
        assert_eq!(params.direction, None);
        assert_eq!(params.fuel_type.as_deref(), Some("Diesel,Electric"));
    }

    #[test]
    fn test_from_query_map_ignores_unknown_keys() {
        let map = HashMap::from([
            ("direction".to_string(), "desc".to_string()),
            ("limit".to_string(), "10".to_string()),
        ]);

        let params = ListingParams::from_query_map(&map);

        assert_eq!(
            params,
            ListingParams {
                direction: Some("desc".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_merge_sets_and_removes() {
        let params = ListingParams::from_query_string("query=audi&fuelType=Diesel");

        let next = params.merge([("query", ""), ("sortKey", "brand"), ("direction", "desc")]);

        assert_eq!(next.query, None);
        assert_eq!(next.sort_key.as_deref(), Some("brand"));
        assert_eq!(next.direction.as_deref(), Some("desc"));
        assert_eq!(next.fuel_type.as_deref(), Some("Diesel"));
    }

    #[test]
    fn test_to_query_string_is_stable() {
        let params = ListingParams::default().merge([
            ("fuelType", "Diesel,Petrol"),
            ("query", "Ford Focus"),
        ]);

        assert_eq!(
            params.to_query_string(),
            "query=Ford+Focus&fuelType=Diesel%2CPetrol"
        );
    }
}
