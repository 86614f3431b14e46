//! User credentials carried in the URI authority.

use std::fmt;

use crate::constants::COLON;
use crate::error::UriError;

/// A `username:password` pair for the authority component.
///
/// Both parts must be non-empty and are written verbatim. The `Debug`
/// output redacts the password.
///
/// # Examples
///
/// ```
/// use request_uri::UserInfo;
///
/// let user = UserInfo::new("alice", "s3cret").unwrap();
/// assert_eq!(user.username(), "alice");
/// assert_eq!(user.to_string(), "alice:s3cret");
/// assert!(!format!("{user:?}").contains("s3cret"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserInfo {
    username: String,
    password: String,
}

impl UserInfo {
    /// Creates user info from a username and password.
    ///
    /// # Errors
    ///
    /// Returns [`UriError`] if the username or the password is empty.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, UriError> {
        let username = username.into();
        if username.is_empty() {
            return Err(UriError::empty("username"));
        }

        let password = password.into();
        if password.is_empty() {
            return Err(UriError::empty("password"));
        }

        Ok(Self { username, password })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInfo")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Writes `username:password`, without the trailing `@`.
impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{COLON}{}", self.username, self.password)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Serialize};

    use super::UserInfo;

    #[derive(Serialize)]
    struct RawUserInfoRef<'a> {
        username: &'a str,
        password: &'a str,
    }

    #[derive(Deserialize)]
    struct RawUserInfo {
        username: String,
        password: String,
    }

    impl Serialize for UserInfo {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            RawUserInfoRef {
                username: &self.username,
                password: &self.password,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for UserInfo {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let raw = RawUserInfo::deserialize(deserializer)?;
            Self::new(raw.username, raw.password).map_err(serde::de::Error::custom)
        }
    }
}
