use std::collections::BTreeMap;

/// Parameters captured while matching a path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    literal: String,
    param: Option<String>,
}

/// A route path such as `/buildingView:buildingId`
///
/// Each `/`-separated segment is a literal prefix, optionally followed by a
/// `:name` capture that takes the rest of the segment. `/profileView:profileId`
/// therefore matches `/profileView42`, and a bare `:personId` segment captures
/// the whole segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = split_segments(pattern)
            .map(|raw| match raw.split_once(':') {
                Some((literal, param)) => Segment {
                    literal: literal.to_string(),
                    param: Some(param.to_string()),
                },
                None => Segment {
                    literal: raw.to_string(),
                    param: None,
                },
            })
            .collect();

        Self { segments }
    }

    /// Match a concrete path, ignoring any query string, fragment, or trailing slash
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let parts: Vec<&str> = split_segments(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match &segment.param {
                None if part == segment.literal => {}
                None => return None,
                Some(name) => {
                    let value = part.strip_prefix(segment.literal.as_str())?;
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), value.to_string());
                }
            }
        }

        Some(RouteParams(params))
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.trim_matches('/').split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_only_root() {
        let root = PathPattern::parse("/");

        assert_eq!(root.matches("/"), Some(RouteParams::default()));
        assert_eq!(root.matches(""), Some(RouteParams::default()));
        assert_eq!(root.matches("/login"), None);
    }

    #[test]
    fn test_literal_match_is_case_sensitive_and_ignores_trailing_slash() {
        let pattern = PathPattern::parse("/Maintenance");

        assert!(pattern.matches("/Maintenance").is_some());
        assert!(pattern.matches("/Maintenance/").is_some());
        assert!(pattern.matches("/maintenance").is_none());
        assert!(pattern.matches("/Maintenance/extra").is_none());
    }

    #[test]
    fn test_prefixed_param_captures_segment_remainder() {
        let pattern = PathPattern::parse("/PersonView:personId");

        let params = pattern.matches("/PersonView7").unwrap();
        assert_eq!(params.get("personId"), Some("7"));

        assert!(pattern.matches("/PersonView").is_none());
        assert!(pattern.matches("/RoomView7").is_none());
    }

    #[test]
    fn test_multi_segment_params() {
        let pattern = PathPattern::parse("/serializedAssetView:serializedAssetId/:personId");

        let params = pattern.matches("/serializedAssetView15/22").unwrap();
        assert_eq!(params.get("serializedAssetId"), Some("15"));
        assert_eq!(params.get("personId"), Some("22"));

        assert!(pattern.matches("/serializedAssetView15").is_none());
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        let pattern = PathPattern::parse("/reports");

        assert!(pattern.matches("/reports?type=asset").is_some());
        assert!(pattern.matches("/reports#top").is_some());
    }
}
