use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::identity::UserId;

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key
/// (via `#[serde(default)]`) becomes `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The caller-supplied part of a user record.
///
/// Neither field is validated: any JSON value is accepted. A field the
/// caller leaves out is `None` and is omitted when the record is serialized,
/// while an explicit `null` is kept as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFields {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
}

impl UserFields {
    pub fn new(name: impl Into<Value>, age: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age.into()),
        }
    }
}

/// A stored user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
}

impl User {
    /// Build a record for `id` from caller-supplied fields.
    pub fn from_fields(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
        }
    }
}
