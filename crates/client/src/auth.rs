//! Token and profile endpoints.

use filmflow_shared::Session;
use filmflow_shared::session::{LoginRequest, TokenPair, UserProfile};
use reqwest::Method;
use serde::Serialize;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

impl ApiClient {
    /// Exchanges credentials for a token pair (`POST /auth/token/`).
    ///
    /// The returned session is not attached to this client; pass it to
    /// [`ApiClient::with_session`].
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let tokens: TokenPair = self
            .send_json(Method::POST, "/auth/token/", &request)
            .await?;

        info!(username = %username, "Logged in to dashboard backend");
        Ok(Session::from_tokens(tokens))
    }

    /// Obtains a new access token (`POST /auth/token/refresh/`).
    pub async fn refresh(&self, session: &Session) -> ClientResult<Session> {
        let Some(refresh) = session.refresh_token.as_deref() else {
            warn!("Token refresh requested without a refresh token");
            return Err(ClientError::TokenRefreshFailed(
                "No refresh token available".to_string(),
            ));
        };

        let tokens: TokenPair = self
            .send_json(Method::POST, "/auth/token/refresh/", &RefreshRequest { refresh })
            .await
            .map_err(|e| match e {
                ClientError::Api { message, .. } => ClientError::TokenRefreshFailed(message),
                other => other,
            })?;

        info!("Access token refreshed");
        Ok(session.clone().refreshed(tokens))
    }

    /// Fetches the signed-in user (`GET /auth/profile/`).
    pub async fn profile(&self) -> ClientResult<UserProfile> {
        if self.session().is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        self.get("/auth/profile/").await
    }
}
