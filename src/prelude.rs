//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use request_uri::prelude::*;
//!
//! let uri = AbsoluteUri::new("example.com", None, None).unwrap();
//! assert_eq!(uri.to_uri_string(), "http://example.com");
//! ```
//!
//! Delimiter constants are left out; import them from the crate root.

pub use crate::{
    // Core types
    AbsoluteUri, Path, Query, QueryParameter, RelativeUri, UserInfo,
    // Errors
    UriError, UriErrorKind,
    // Encoding
    encode_query_value,
    // Constants
    DEFAULT_SCHEME,
};
