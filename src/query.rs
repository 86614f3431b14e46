//! Query types for request URIs.

use std::fmt;
use std::sync::Arc;

use crate::constants::{QUERY_PAIR_SEPARATOR, QUERY_VALUE_SEPARATOR};
use crate::encoding::encode_query_value;
use crate::error::UriError;

/// A single `field_name=value` pair.
///
/// Both parts must be non-empty. On output the field name is written
/// verbatim and the value is percent-encoded.
///
/// # Examples
///
/// ```
/// use request_uri::QueryParameter;
///
/// let param = QueryParameter::new("q", "rust & uri").unwrap();
/// assert_eq!(param.value(), "rust & uri");
/// assert_eq!(param.to_string(), "q=rust%20%26%20uri");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryParameter {
    field_name: String,
    value: String,
}

impl QueryParameter {
    /// Creates a query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`UriError`] if the field name or the value is empty.
    pub fn new(field_name: impl Into<String>, value: impl Into<String>) -> Result<Self, UriError> {
        let field_name = field_name.into();
        let value = value.into();
        match Self::empty_argument(&field_name, &value) {
            Some(argument) => Err(UriError::empty(argument)),
            None => Ok(Self { field_name, value }),
        }
    }

    /// Names the first empty part of a pair, field name first.
    fn empty_argument(field_name: &str, value: &str) -> Option<&'static str> {
        if field_name.is_empty() {
            Some("field_name")
        } else if value.is_empty() {
            Some("value")
        } else {
            None
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Returns the raw (unencoded) value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the value as it appears in a serialized URI.
    #[must_use]
    pub fn encoded_value(&self) -> String {
        encode_query_value(&self.value).to_string()
    }
}

impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{QUERY_VALUE_SEPARATOR}{}",
            self.field_name,
            encode_query_value(&self.value)
        )
    }
}

/// An ordered list of query parameters.
///
/// Insertion order is kept and duplicate field names are allowed; nothing
/// is merged or sorted.
///
/// # Examples
///
/// ```
/// use request_uri::Query;
///
/// let query = Query::from_pairs([("tag", "a"), ("tag", "b"), ("page", "2")]).unwrap();
/// assert_eq!(query.get("tag"), Some("a"));
/// assert_eq!(query.get_all("tag").collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(query.to_string(), "tag=a&tag=b&page=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Query {
    params: Arc<[QueryParameter]>,
}

impl Query {
    /// Creates a query from already validated parameters.
    ///
    /// The sequence is copied into storage owned by the query. An empty
    /// sequence yields a query that serializes to nothing.
    #[must_use]
    pub fn new<I>(params: I) -> Self
    where
        I: IntoIterator<Item = QueryParameter>,
    {
        Self {
            params: params.into_iter().collect(),
        }
    }

    /// Creates a query from `(field_name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`UriError`] if any pair has an empty field name or value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, UriError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (field_name, value))| {
                let field_name: String = field_name.into();
                let value: String = value.into();
                match QueryParameter::empty_argument(&field_name, &value) {
                    Some(argument) => Err(UriError::empty_parameter(argument, index)),
                    None => Ok(QueryParameter { field_name, value }),
                }
            })
            .collect::<Result<Arc<[QueryParameter]>, _>>()?;

        Ok(Self { params })
    }

    /// Returns the parameters in order.
    #[must_use]
    pub fn params(&self) -> &[QueryParameter] {
        &self.params
    }

    /// Returns an iterator over `(field_name, value)` with raw values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|p| (p.field_name(), p.value()))
    }

    /// Returns the first value for a field name, if present.
    #[must_use]
    pub fn get(&self, field_name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.field_name() == field_name)
            .map(QueryParameter::value)
    }

    /// Returns every value for a field name, in insertion order.
    pub fn get_all<'a>(&'a self, field_name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |p| p.field_name() == field_name)
            .map(QueryParameter::value)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if the query has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Writes the parameters joined by `&`, without a leading `?`.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, "{QUERY_PAIR_SEPARATOR}")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

impl From<Vec<QueryParameter>> for Query {
    fn from(params: Vec<QueryParameter>) -> Self {
        Self::new(params)
    }
}

impl TryFrom<Vec<(String, String)>> for Query {
    type Error = UriError;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self, Self::Error> {
        Self::from_pairs(pairs)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Serialize};

    use super::{Query, QueryParameter};

    #[derive(Serialize)]
    struct RawParameterRef<'a> {
        field_name: &'a str,
        value: &'a str,
    }

    #[derive(Deserialize)]
    struct RawParameter {
        field_name: String,
        value: String,
    }

    impl Serialize for QueryParameter {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            RawParameterRef {
                field_name: &self.field_name,
                value: &self.value,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for QueryParameter {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let raw = RawParameter::deserialize(deserializer)?;
            Self::new(raw.field_name, raw.value).map_err(serde::de::Error::custom)
        }
    }

    impl Serialize for Query {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.collect_seq(self.params.iter())
        }
    }

    impl<'de> Deserialize<'de> for Query {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            Vec::<QueryParameter>::deserialize(deserializer).map(Self::from)
        }
    }
}
