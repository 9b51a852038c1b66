//! Field paths
//!
//! Provides [`FieldPath`], the token that names a field inside a query.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Location of a field within a query
///
/// Usually a plain field name (`title`), sometimes an aliased or dotted
/// accessor. The token is opaque: it is copied into fragments verbatim and
/// never split, validated or escaped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Create a path from any string-like token
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Borrow the raw token
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw token
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldPath {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FieldPath {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_opaque() {
        let path = FieldPath::new("author.name");
        assert_eq!(path.as_str(), "author.name");
        assert_eq!(path.to_string(), "author.name");
    }

    #[test]
    fn path_conversions() {
        let a: FieldPath = "title".into();
        let b: FieldPath = String::from("title").into();
        assert_eq!(a, b);
        assert_eq!(a.into_inner(), "title");
    }

    #[test]
    fn path_serializes_as_string() {
        let path = FieldPath::new("avatar");
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"avatar\"");
    }
}
