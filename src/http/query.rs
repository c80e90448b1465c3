use std::fmt::Display;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded::byte_serialize;

// RFC 3986 unreserved characters plus `@`, which is legal inside a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'@');

/// Percent-encode free text for use as a single path segment
pub fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Builds `?key=value&key=value` query strings from optional filters
///
/// Absent filters are skipped and the `?` is only emitted when at least one
/// filter is present, so an empty builder renders as `""`. Values are
/// form-urlencoded, so each filter stays exactly one pair.
#[derive(Debug, Default, Clone)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn push_opt<T: Display>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Like `push_opt`, but also skips empty strings
    pub fn push_non_empty(self, key: &'static str, value: Option<&str>) -> Self {
        self.push_opt(key, value.filter(|v| !v.is_empty()))
    }

    pub fn finish(self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let joined = self
            .pairs
            .iter()
            .map(|(key, value)| {
                let encoded: String = byte_serialize(value.as_bytes()).collect();
                format!("{}={}", key, encoded)
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("?{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_renders_nothing() {
        assert_eq!(QueryString::new().finish(), "");
        assert_eq!(
            QueryString::new()
                .push_opt::<bool>("activeStatus", None)
                .push_opt::<bool>("checkoutStatus", None)
                .finish(),
            ""
        );
    }

    #[test]
    fn test_single_filter_has_no_trailing_separator() {
        let query = QueryString::new()
            .push_opt("activeStatus", Some(true))
            .push_opt::<bool>("checkoutStatus", None)
            .finish();

        assert_eq!(query, "?activeStatus=true");
    }

    #[test]
    fn test_filters_keep_insertion_order() {
        let query = QueryString::new()
            .push_opt("activeStatus", Some(false))
            .push_opt("checkoutStatus", Some(true))
            .finish();

        assert_eq!(query, "?activeStatus=false&checkoutStatus=true");
    }

    #[test]
    fn test_push_non_empty_skips_blank_values() {
        let query = QueryString::new()
            .push_non_empty("searchKey", Some(""))
            .push_opt("profileId", Some(4))
            .finish();

        assert_eq!(query, "?profileId=4");
    }

    #[test]
    fn test_values_are_encoded_as_a_single_pair() {
        let query = QueryString::new()
            .push_non_empty("searchKey", Some("a&typeId=9"))
            .finish();
        assert_eq!(query, "?searchKey=a%26typeId%3D9");

        let query = QueryString::new()
            .push_non_empty("searchKey", Some("laptop #3"))
            .finish();
        assert_eq!(query, "?searchKey=laptop+%233");
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("person"), "person");
        assert_eq!(path_segment("ada@example.edu"), "ada@example.edu");
        assert_eq!(path_segment("x?y@z.edu"), "x%3Fy@z.edu");
        assert_eq!(path_segment("a/b #1"), "a%2Fb%20%231");
    }
}
