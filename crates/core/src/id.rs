//! Document identifier codec.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Opaque, globally unique identifier for a stored document.
///
/// The external form is the hyphenated lowercase UUID string. This newtype
/// is the single point where identifiers cross between text and the store's
/// native type: paths and payloads go through [`DocumentId::parse`], and
/// serialization always produces the external form (no per-call-site
/// encoders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the external string form.
    ///
    /// Fails with [`CoreError::InvalidIdentifier`] on anything that is not
    /// a well-formed identifier token.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        Uuid::parse_str(text)
            .map(Self)
            .map_err(|_| CoreError::InvalidIdentifier(text.to_string()))
    }

    /// The store-native form, for binding into queries.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

impl FromStr for DocumentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
