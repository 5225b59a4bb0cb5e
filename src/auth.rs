use crate::client::{ApiClient, RequestOptions};
use crate::error::{ApiError, Result};
use crate::session::Session;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token/user payload as the backend emits it.
///
/// Canonical contract is camelCase `token` / `refreshToken` / `user`; the
/// remaining spellings are legacy shims accepted on deserialize only and
/// never produced by this crate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthPayload {
    #[serde(default, alias = "accessToken", alias = "Token")]
    pub(crate) token: Option<String>,
    #[serde(default, alias = "refresh", alias = "RefreshToken")]
    pub(crate) refresh_token: Option<String>,
    #[serde(default, alias = "userInfo", alias = "userData")]
    pub(crate) user: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Exchanges credentials for a session and persists it in the store.
    #[tracing::instrument(skip_all, err(level = "warn"))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let payload: AuthPayload =
            self.client.post("Auth/Login", credentials, &RequestOptions::default()).await?;
        let Some(token) = payload.token else {
            return Err(ApiError::Decode("login response carried no access token".into()));
        };
        let session = Session {
            token: Some(token),
            refresh_token: payload.refresh_token,
            user: payload.user,
        };
        self.client.store().save(&session)?;
        tracing::info!("logged in");
        Ok(session)
    }

    /// Revokes the refresh token on the backend (best effort, failures are
    /// ignored), then clears the local session unconditionally.
    #[tracing::instrument(skip_all)]
    pub async fn logout(&self) -> Result<()> {
        let session = self.client.store().load()?;
        if let Some(refresh_token) = session.refresh_token {
            let body = serde_json::json!({ "refreshToken": refresh_token });
            if let Err(e) =
                self.client.post::<Value, _>("Auth/Logout", &body, &RequestOptions::default()).await
            {
                tracing::debug!(error = %e, "backend logout failed, clearing local session anyway");
            }
        }
        self.client.store().clear()
    }

    /// The locally stored user record, if a session exists.
    pub fn current_user(&self) -> Result<Option<Value>> {
        Ok(self.client.store().load()?.user)
    }
}
