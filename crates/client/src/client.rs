//! HTTP plumbing shared by all endpoint groups.

use std::collections::HashSet;
use std::time::Duration;

use filmflow_shared::Session;
use filmflow_shared::config::ApiConfig;
use filmflow_shared::types::{ListResponse, PageRequest};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::error::{ClientError, ClientResult};

/// Longest response body excerpt carried into an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Typed client for the dashboard REST backend.
///
/// Every call is a single request awaited by the caller. There is no retry
/// and no implicit token refresh; call [`ApiClient::refresh`] and
/// [`ApiClient::with_session`] explicitly when the access token expires.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    /// Builds a client for the configured backend.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: None,
        })
    }

    /// Attaches a session; its access token is sent as a bearer token.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// The attached session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.session {
            Some(session) => builder.header(AUTHORIZATION, session.bearer()),
            None => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, &self.url(path)).send().await?;
        self.parse(response).await
    }

    /// Fetches every item of a list endpoint, following `next` links when
    /// the backend paginates. Stops at the first link already visited.
    pub(crate) async fn get_all<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let first_page = self
            .request(Method::GET, &self.url(path))
            .query(&PageRequest::default().query())
            .build()?;
        let mut visited = HashSet::from([first_page.url().to_string()]);

        let body: ListResponse<T> = self.parse(self.http.execute(first_page).await?).await?;
        let (mut items, mut next) = body.into_parts();

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                warn!(url = %url, fetched = items.len(), "Pagination loops back, stopping");
                break;
            }

            debug!(url = %url, fetched = items.len(), "Fetching next page");
            let body: ListResponse<T> = self
                .parse(self.request(Method::GET, &url).send().await?)
                .await?;
            let (page, following) = body.into_parts();
            items.extend(page);
            next = following;
        }

        Ok(items)
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(method, &self.url(path))
            .json(body)
            .send()
            .await?;
        self.parse(response).await
    }

    async fn parse<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status == StatusCode::UNAUTHORIZED && self.session.is_none() {
                warn!(url = %url, "Backend requires authentication");
                return Err(ClientError::NotAuthenticated);
            }

            let message = error_message(&body, status);
            error!(
                status = status.as_u16(),
                url = %url,
                message = %message,
                "Backend request failed"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!(url = %url, error = %e, "Failed to parse backend response");
            ClientError::Parse(e.to_string())
        })
    }
}

/// Extracts a human readable message from an error body.
///
/// Looks for the usual `detail` / `message` / `error` string fields, then
/// falls back to the raw body and finally to the status reason.
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        for key in ["detail", "message", "error"] {
            if let Some(serde_json::Value::String(message)) = fields.get(key) {
                return message.clone();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
    }
}
