//! The path, query and fragment that follow the authority.

use std::fmt;

use crate::constants::{FRAGMENT_DELIMITER, PATH_SEPARATOR, QUERY_DELIMITER};
use crate::path::Path;
use crate::query::Query;

/// Everything after the authority: optional path, query and fragment.
///
/// Each part is independently optional. An empty path, an empty query or
/// an empty fragment is omitted on output exactly like an absent one.
///
/// # Examples
///
/// ```
/// use request_uri::{Path, Query, RelativeUri};
///
/// let relative = RelativeUri::new(
///     Some(Path::new(["search"]).unwrap()),
///     Some(Query::from_pairs([("q", "a b")]).unwrap()),
///     Some("results".to_string()),
/// );
/// assert_eq!(relative.to_uri_string(), "/search?q=a%20b#results");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RelativeUri {
    path: Option<Path>,
    query: Option<Query>,
    fragment: Option<String>,
}

impl RelativeUri {
    /// Creates a relative URI from its optional parts.
    #[must_use]
    pub const fn new(path: Option<Path>, query: Option<Query>, fragment: Option<String>) -> Self {
        Self {
            path,
            query,
            fragment,
        }
    }

    /// Returns the path, if set.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Returns the query, if set.
    #[must_use]
    pub const fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Returns the fragment, if set.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Serializes the relative part: `[/path][?query][#fragment]`.
    #[must_use]
    pub fn to_uri_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RelativeUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = self.path.as_ref().filter(|p| !p.is_empty()) {
            write!(f, "{PATH_SEPARATOR}{path}")?;
        }

        if let Some(query) = self.query.as_ref().filter(|q| !q.is_empty()) {
            write!(f, "{QUERY_DELIMITER}{query}")?;
        }

        if let Some(fragment) = self.fragment.as_deref().filter(|s| !s.is_empty()) {
            write!(f, "{FRAGMENT_DELIMITER}{fragment}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RelativeUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
