//! Wire DTOs for the card-key REST backend.
//!
//! DESIGN
//! ======
//! Card records arrive with heterogeneous id shapes (a plain string under
//! `id` or `_id`, or a Mongo extended-JSON `{"$oid": …}` object). They are
//! normalized into one canonical `String` id here, at the serde boundary,
//! so nothing deeper in the crate ever branches on wire shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role; gates the user-management panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full access, including user management.
    #[serde(alias = "Admin")]
    Admin,
    /// Card management only.
    #[default]
    #[serde(alias = "User")]
    User,
}

/// An authenticated account as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Contact email, if set.
    pub email: Option<String>,
    /// Account role.
    pub role: Role,
}

/// Credentials payload for `POST /api/users/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response: a bearer token plus the account it belongs to.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// A card license key, normalized from its wire representation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    /// Canonical string id (see module docs).
    pub id: String,
    /// The redeemable key itself.
    pub card_number: String,
    /// Whether the key has been activated.
    pub is_activated: bool,
    /// Expiry instant, set on activation.
    pub expires_at: Option<DateTime<Utc>>,
    /// Identifier of the device/user that redeemed the key, if any.
    pub used_by_identifier: Option<String>,
    /// Username of the admin who generated the key, if recorded.
    pub created_by_username: Option<String>,
    /// Creation instant, if the record carries one.
    pub created_at: Option<DateTime<Utc>>,
}

/// Card record as it actually appears on the wire.
#[derive(Debug, Deserialize)]
struct RawCard {
    #[serde(default, rename = "_id")]
    mongo_id: Option<serde_json::Value>,
    #[serde(default)]
    id: Option<serde_json::Value>,
    card_number: String,
    #[serde(default)]
    is_activated: bool,
    // Instants travel as RFC 3339 strings on the wire.
    #[serde(default)]
    expires_at_str: Option<String>,
    #[serde(default)]
    used_by_identifier: Option<String>,
    #[serde(default)]
    created_by_username: Option<String>,
    #[serde(default)]
    created_at_str: Option<String>,
}

impl TryFrom<RawCard> for Card {
    type Error = String;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        let id = raw
            .mongo_id
            .as_ref()
            .and_then(canonical_id)
            .or_else(|| raw.id.as_ref().and_then(canonical_id))
            .ok_or_else(|| format!("card '{}' has no usable id", raw.card_number))?;
        Ok(Self {
            id,
            card_number: raw.card_number,
            is_activated: raw.is_activated,
            expires_at: raw.expires_at_str.as_deref().and_then(parse_rfc3339),
            used_by_identifier: raw.used_by_identifier,
            created_by_username: raw.created_by_username,
            created_at: raw.created_at_str.as_deref().and_then(parse_rfc3339),
        })
    }
}

/// Extract a canonical string id from either a plain string or a Mongo
/// extended-JSON `{"$oid": …}` object.
fn canonical_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Object(map) => match map.get("$oid") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Payload for `POST /api/cards/generate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateCardsRequest {
    pub duration_days: u32,
    pub count: u32,
}

/// Generation responses are a single card or a batch depending on backend
/// revision; the client tolerates both and re-fetches regardless.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn count(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::One(_) => 1,
        }
    }
}

/// Payload for `POST /api/users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

/// Payload for `PUT /api/users/{id}`. Absent fields are omitted from the
/// body entirely so a blank password never overwrites a stored one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
