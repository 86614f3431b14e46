//! Path type for request URIs.

use std::fmt;
use std::sync::Arc;

use crate::constants::PATH_SEPARATOR;
use crate::error::UriError;

/// An ordered sequence of non-empty path segments.
///
/// Segments are emitted in insertion order, joined by `/`, and are not
/// percent-encoded: callers supply segments that are already URI-safe.
/// The segment list is shared between clones, so copying a `Path` from one
/// URI snapshot to the next does not copy the strings.
///
/// # Examples
///
/// ```
/// use request_uri::Path;
///
/// let path = Path::new(["api", "v1", "users"]).unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "api/v1/users");
///
/// assert!(Path::new(["api", ""]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Arc<[String]>,
}

impl Path {
    /// Creates a path from an ordered sequence of segments.
    ///
    /// The sequence is copied into storage owned by the path. An empty
    /// sequence is allowed and yields a path that serializes to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`UriError`] if any segment is empty.
    pub fn new<I, S>(segments: I) -> Result<Self, UriError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| {
                let segment: String = segment.into();
                if segment.is_empty() {
                    Err(UriError::empty_segment(index))
                } else {
                    Ok(segment)
                }
            })
            .collect::<Result<Arc<[String]>, _>>()?;

        Ok(Self { segments })
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns an iterator over the segments as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Writes the segments joined by `/`, without a leading separator.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for Path {
    type Error = UriError;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(segments)
    }
}

impl TryFrom<&[&str]> for Path {
    type Error = UriError;

    fn try_from(segments: &[&str]) -> Result<Self, Self::Error> {
        Self::new(segments.iter().copied())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.segments.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let segments = <Vec<String> as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(segments).map_err(serde::de::Error::custom)
    }
}
