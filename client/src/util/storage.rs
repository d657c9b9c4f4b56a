//! Browser `localStorage` helpers for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is the only durable client state. These helpers keep the
//! hydrate-only web-sys glue in one place so the session holder never touches
//! storage directly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "jwtToken";

/// Read the stored bearer token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            leptos::logging::warn!("failed to persist session token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the bearer token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
