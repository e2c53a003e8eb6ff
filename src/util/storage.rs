//! Durable session storage over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persisted session is the `token` / `user` entry pair, written on
//! every session change and removed on logout. The pair is atomic as far as
//! callers can observe: a half-present pair on load is treated as absent
//! and cleaned up, so a crash between writes can never rehydrate into a
//! half-authenticated state. No network access happens here.

use crate::net::types::UserProfile;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

/// Load the persisted session pair. Returns `None` (and clears any
/// leftover half) unless both entries are present and the profile parses.
pub fn load_session() -> Option<(String, UserProfile)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user = storage
            .get_item(USER_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<UserProfile>(&raw).ok());
        match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => Some((token, user)),
            _ => {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session pair.
pub fn save_session(token: &str, user: &UserProfile) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Remove both entries.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
