//! Cache Path Parsing
//!
//! Splits `/api/cache/<key>[/<modifier>]` into its key and modifier parts.

/// First two segments every cache path starts with.
const PREFIX: [&str; 2] = ["api", "cache"];

/// Modifier selecting the expire-update operation.
pub const EXPIRE_MODIFIER: &str = "expire";

/// Key and modifier extracted from a request path.
///
/// An invalid path is represented by both parts being empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachePath {
    pub key: String,
    pub modifier: String,
}

impl CachePath {
    pub fn is_valid(&self) -> bool {
        !(self.key.is_empty() && self.modifier.is_empty())
    }

    pub fn has_modifier(&self) -> bool {
        !self.modifier.is_empty()
    }

    pub fn is_expire(&self) -> bool {
        self.modifier == EXPIRE_MODIFIER
    }
}

/// Parses a request path.
///
/// Leading and trailing slashes are ignored. Three segments yield
/// `(key, "")`, four yield `(key, modifier)`; any other shape, a foreign
/// prefix, or an empty key yields the invalid `("", "")`.
pub fn parse_cache_path(path: &str) -> CachePath {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if segments.len() != 3 && segments.len() != 4 {
        return CachePath::default();
    }
    if segments[..2] != PREFIX || segments[2].is_empty() {
        return CachePath::default();
    }

    CachePath {
        key: segments[2].to_string(),
        modifier: segments.get(3).map(|m| m.to_string()).unwrap_or_default(),
    }
}
