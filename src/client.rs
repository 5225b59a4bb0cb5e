use crate::auth::AuthPayload;
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::ser::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Per-call options.
///
/// A fired `cancel` token aborts this call's own dispatch with
/// [`ApiError::Cancelled`]; it never interrupts a token refresh that other
/// callers may be waiting on.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    #[must_use]
    pub const fn cancellable(token: CancellationToken) -> Self {
        Self { cancel: Some(token) }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}

/// HTTP client for the MediaDesk backend.
///
/// Every call reads the current access token from the injected
/// [`SessionStore`] and attaches it as a bearer credential. A 401 response
/// triggers a single-flight token refresh followed by exactly one retry of
/// the failed request; a request that fails 401 again after its retry
/// propagates the error without another refresh. A failed refresh clears the
/// stored session and surfaces [`ApiError::RefreshFailed`].
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    refresh_gate: Mutex<RefreshGate>,
}

/// Single-slot coordination state for token refresh.
///
/// `generation` counts completed refresh attempts. A caller captures it
/// before dispatch; after a 401 it hands the captured value to
/// [`ApiClient::refresh`], which can then tell whether the refresh it is
/// being asked for already ran while the caller waited on the lock, and if
/// so whether that shared attempt succeeded or failed.
#[derive(Debug, Default)]
struct RefreshGate {
    generation: u64,
    last_error: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
            refresh_gate: Mutex::new(RefreshGate::default()),
        })
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, opts: &RequestOptions) -> Result<T> {
        self.request(Method::GET, path, None, opts).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        opts: &RequestOptions,
    ) -> Result<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::POST, path, Some(body), opts).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        opts: &RequestOptions,
    ) -> Result<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::PUT, path, Some(body), opts).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, opts: &RequestOptions) -> Result<T> {
        self.request(Method::DELETE, path, None, opts).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        opts: &RequestOptions,
    ) -> Result<T> {
        let generation = self.refresh_gate.lock().await.generation;
        let response = match self.dispatch(&method, path, body.as_ref(), opts).await {
            Err(ApiError::Unauthorized) => {
                self.refresh(generation).await?;
                if opts.is_cancelled() {
                    return Err(ApiError::Cancelled);
                }
                // The one permitted retry. A second 401 propagates as-is.
                self.dispatch(&method, path, body.as_ref(), opts).await?
            }
            other => other?,
        };
        Self::decode(response).await
    }

    #[tracing::instrument(skip_all, fields(method = %method, path))]
    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Value>,
        opts: &RequestOptions,
    ) -> Result<reqwest::Response> {
        let mut builder = self.http.request(method.clone(), self.endpoint(path));
        if let Some(token) = self.store.load()?.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let sent = match &opts.cancel {
            Some(cancel) => tokio::select! {
                () = cancel.cancelled() => return Err(ApiError::Cancelled),
                res = builder.send() => res,
            },
            None => builder.send().await,
        };

        let response = sent.map_err(ApiError::Network)?;
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status if status.is_success() => Ok(response),
            status => Err(Self::status_error(status, response).await),
        }
    }

    /// Single-flight token refresh.
    ///
    /// The gate serializes every caller that observed a 401. Whoever acquires
    /// it first performs the refresh; each caller that acquires it afterwards
    /// finds the generation advanced past the value it captured before its
    /// failed dispatch and shares that attempt's outcome instead of issuing a
    /// second refresh call.
    #[tracing::instrument(skip(self), err(level = "warn"))]
    async fn refresh(&self, seen: u64) -> Result<()> {
        let mut gate = self.refresh_gate.lock().await;
        if gate.generation != seen {
            return match &gate.last_error {
                Some(message) => Err(ApiError::RefreshFailed(message.clone())),
                None => Ok(()),
            };
        }

        let session = self.store.load()?;
        let Some(refresh_token) = session.refresh_token.clone() else {
            // No session to recover; the original 401 stands.
            return Err(ApiError::Unauthorized);
        };

        tracing::debug!("access token rejected, refreshing session");
        let body = serde_json::json!({ "token": session.token, "refreshToken": refresh_token });
        // Bare call through the transport, not through request(): a 401 from
        // the refresh endpoint must not recurse into another refresh.
        let outcome = self.http.post(self.endpoint("Auth/Refresh")).json(&body).send().await;

        gate.generation += 1;
        let grant = match Self::refresh_grant(outcome).await {
            Ok(grant) => grant,
            Err(message) => {
                gate.last_error = Some(message.clone());
                self.store.clear()?;
                tracing::warn!(error = %message, "refresh rejected, session cleared");
                return Err(ApiError::RefreshFailed(message));
            }
        };

        let mut next = session;
        next.token = grant.token;
        if grant.refresh_token.is_some() {
            next.refresh_token = grant.refresh_token;
        }
        self.store.save(&next)?;
        gate.last_error = None;
        tracing::debug!("session refreshed");
        Ok(())
    }

    /// Distills every way a refresh can go wrong into a failure message and
    /// guarantees the returned grant carries an access token.
    async fn refresh_grant(
        outcome: std::result::Result<reqwest::Response, reqwest::Error>,
    ) -> std::result::Result<AuthPayload, String> {
        let response = outcome.map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("refresh endpoint returned {status}"));
        }
        let grant: AuthPayload = response.json().await.map_err(|e| e.to_string())?;
        if grant.token.is_none() {
            return Err("response carried no access token".to_string());
        }
        Ok(grant)
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    body
                }
            });
        ApiError::Status { status, message }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let bytes = response.bytes().await.map_err(ApiError::Network)?;
        if bytes.is_empty() {
            // Empty bodies (e.g. from deletes) decode as JSON null.
            serde_json::from_slice(b"null").map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Error bodies the backend is known to emit, in descending preference.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    title: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.error.or(self.message).or(self.title)
    }
}
