//! Constants used when assembling request URIs.

/// Scheme emitted when an [`AbsoluteUri`](crate::AbsoluteUri) has none.
pub const DEFAULT_SCHEME: &str = "http";

/// Separator between the scheme and the authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// Separator between the user info and the host.
pub const USER_INFO_TERMINATOR: char = '@';

/// Separator between username and password, and between host and port.
pub const COLON: char = ':';

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Introduces the query component.
pub const QUERY_DELIMITER: char = '?';

/// Separator between query parameters.
pub const QUERY_PAIR_SEPARATOR: char = '&';

/// Separator between a query field name and its value.
pub const QUERY_VALUE_SEPARATOR: char = '=';

/// Introduces the fragment component.
pub const FRAGMENT_DELIMITER: char = '#';
