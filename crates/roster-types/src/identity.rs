use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// Identifier of a stored user.
///
/// A `UserId` is a random UUID v4 generated when the user is inserted. It is
/// the sole lookup key and never changes for the lifetime of the record.
/// Serialized as the hyphenated lowercase UUID string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the canonical text form: hyphenated lowercase, exactly as
    /// `Display` writes it. Ids compare as opaque strings, so uppercase,
    /// simple, braced and URN spellings are rejected.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let uuid = Uuid::try_parse(s).map_err(|e| TypeError::InvalidUserId {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        let id = Self(uuid);
        if id.to_string() != s {
            return Err(TypeError::InvalidUserId {
                input: s.to_string(),
                reason: "not in canonical hyphenated lowercase form".into(),
            });
        }
        Ok(id)
    }

    /// Wrap an existing UUID. Use `generate()` for new records.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
