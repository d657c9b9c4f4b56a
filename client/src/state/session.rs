//! Session holder: the bearer token and its local validity check.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided at the app root. Pages never read
//! storage themselves; they `refresh` the session on mount and `invalidate` it
//! on logout or when the API answers 401.
//!
//! The token is a JWT. Only its `exp` claim is inspected; the signature is the
//! API's business.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// A token that passed the local expiry check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken {
    raw: String,
    expires_at: i64,
}

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Expiry in seconds since the Unix epoch.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }
}

/// Result of checking a stored token against the clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenCheck {
    Missing,
    Malformed,
    Expired,
    Valid(SessionToken),
}

#[derive(serde::Deserialize)]
struct Claims {
    exp: Option<serde_json::Value>,
}

/// Decode the `exp` claim of a JWT. `None` if the token is not a JWT or has no
/// numeric expiry.
pub fn decode_expiry(token: &str) -> Option<i64> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature)) = (segments.next(), segments.next(), segments.next()) else {
        return None;
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    match claims.exp? {
        serde_json::Value::Number(exp) => exp.as_i64().or_else(|| {
            #[allow(clippy::cast_possible_truncation)]
            exp.as_f64().filter(|v| v.is_finite()).map(|v| v as i64)
        }),
        _ => None,
    }
}

/// Classify `raw` at time `now_secs`.
pub fn check_token(raw: Option<&str>, now_secs: i64) -> TokenCheck {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return TokenCheck::Missing;
    };
    let Some(expires_at) = decode_expiry(raw) else {
        return TokenCheck::Malformed;
    };
    if expires_at <= now_secs {
        return TokenCheck::Expired;
    }
    TokenCheck::Valid(SessionToken { raw: raw.to_owned(), expires_at })
}

/// Current session for the browser tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<SessionToken>,
    /// `false` until the first `refresh`, so SSR output never redirects.
    pub checked: bool,
}

impl SessionState {
    /// Re-validate the stored token. Returns `true` when the caller must wipe
    /// storage (anything other than a valid token was found).
    pub fn refresh(&mut self, stored: Option<&str>, now_secs: i64) -> bool {
        self.checked = true;
        match check_token(stored, now_secs) {
            TokenCheck::Valid(token) => {
                self.token = Some(token);
                false
            }
            TokenCheck::Missing => {
                self.token = None;
                false
            }
            TokenCheck::Malformed | TokenCheck::Expired => {
                self.token = None;
                true
            }
        }
    }

    /// Adopt a freshly issued token after login.
    pub fn sign_in(&mut self, raw: &str, now_secs: i64) -> bool {
        self.checked = true;
        match check_token(Some(raw), now_secs) {
            TokenCheck::Valid(token) => {
                self.token = Some(token);
                true
            }
            _ => {
                self.token = None;
                false
            }
        }
    }

    /// Drop the token (logout, or the API rejected it).
    pub fn invalidate(&mut self) {
        self.token = None;
        self.checked = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Redirect once the session was checked and no token survived.
    pub fn should_redirect(&self) -> bool {
        self.checked && self.token.is_none()
    }

    pub fn token_str(&self) -> Option<String> {
        self.token.as_ref().map(|token| token.as_str().to_owned())
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token.as_str()))
    }
}
