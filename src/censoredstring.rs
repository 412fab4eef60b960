use serde::{de, Deserialize};
use std::fmt;

pub static CENSOR_STRING: &str = "***REMOVED***";

/// A secret value that never leaks through `Debug` or `Display`.
///
/// The wrapped value is only reachable through [`CensoredString::expose`],
/// which keeps every read of the secret greppable.
#[derive(Clone, PartialEq, Eq)]
pub struct CensoredString {
    data: String,
}

impl CensoredString {
    /// Take ownership of a secret value
    pub fn new<T: Into<String>>(secret: T) -> Self {
        Self {
            data: secret.into(),
        }
    }

    pub fn expose(&self) -> &str {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<String> for CensoredString {
    fn from(src: String) -> Self {
        Self::new(src)
    }
}

impl<'de> Deserialize<'de> for CensoredString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(CensoredString::from)
    }
}

impl fmt::Debug for CensoredString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(CENSOR_STRING, f)
    }
}

impl fmt::Display for CensoredString {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(CENSOR_STRING, f)
    }
}
