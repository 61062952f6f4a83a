//! Authenticated session passed explicitly to API clients.
//!
//! The dashboard used to keep tokens and the current user in browser
//! storage. Here the session is a plain value owned by the caller and handed
//! to whatever needs it.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Token pair returned by the backend token endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Access token (short-lived).
    pub access: String,
    /// Refresh token (long-lived). The refresh endpoint may omit it.
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Login request payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Username or email.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
}

impl UserProfile {
    /// Returns "First Last", falling back to the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// An authenticated dashboard session.
#[derive(Clone, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for API requests.
    pub access_token: String,
    /// Token used to obtain a new access token.
    pub refresh_token: Option<String>,
    /// Signed-in user, once fetched.
    pub user: Option<UserProfile>,
}

impl Session {
    /// Creates a session from a bare access token.
    #[must_use]
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            user: None,
        }
    }

    /// Creates a session from a token pair.
    #[must_use]
    pub fn from_tokens(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access,
            refresh_token: tokens.refresh,
            user: None,
        }
    }

    /// Returns a session with a rotated access token.
    ///
    /// The refresh token is kept unless the backend issued a new one.
    #[must_use]
    pub fn refreshed(self, tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access,
            refresh_token: tokens.refresh.or(self.refresh_token),
            user: self.user,
        }
    }

    /// Attaches the signed-in user.
    #[must_use]
    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.user = Some(user);
        self
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(access: &str, refresh: Option<&str>) -> TokenPair {
        TokenPair {
            access: access.to_string(),
            refresh: refresh.map(str::to_string),
        }
    }

    #[test]
    fn test_refresh_keeps_old_refresh_token() {
        let session = Session::from_tokens(tokens("a1", Some("r1")));
        let session = session.refreshed(tokens("a2", None));

        assert_eq!(session.access_token, "a2");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
    }

    #[test]
    fn test_refresh_rotates_refresh_token() {
        let session = Session::from_tokens(tokens("a1", Some("r1")));
        let session = session.refreshed(tokens("a2", Some("r2")));

        assert_eq!(session.refresh_token.as_deref(), Some("r2"));
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(Session::from_access_token("abc").bearer(), "Bearer abc");
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let session = Session::from_tokens(tokens("secret-access", Some("secret-refresh")));
        let debug = format!("{session:?}");

        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_display_name_fallback() {
        let mut user = UserProfile {
            id: UserId::from("7"),
            username: "jnovak".to_string(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(user.display_name(), "jnovak");

        user.first_name = "Jan".to_string();
        user.last_name = "Novak".to_string();
        assert_eq!(user.display_name(), "Jan Novak");
    }
}
