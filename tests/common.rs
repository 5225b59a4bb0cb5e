// Shared between integration test crates; not every crate uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use mediadesk_client::client::ApiClient;
use mediadesk_client::config::ApiConfig;
use mediadesk_client::session::SessionStore;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

pub const EMAIL: &str = "admin@example.com";
pub const PASSWORD: &str = "hunter2";

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("mediadesk_client=debug".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// Scriptable stand-in for the MediaDesk backend.
///
/// Token state is a single valid access/refresh pair; a request is authorized
/// only if it carries the current access token as a bearer credential. The
/// atomic knobs let tests widen the refresh race window or force failures.
pub struct BackendState {
    pub access_token: Mutex<String>,
    pub refresh_token: Mutex<String>,
    pub refresh_calls: AtomicUsize,
    pub protected_calls: AtomicUsize,
    pub fail_refresh: AtomicBool,
    pub fail_logout: AtomicBool,
    /// When set, protected routes 401 even with a valid token.
    pub reject_all_protected: AtomicBool,
    pub refresh_delay_ms: AtomicU64,
}

impl BackendState {
    fn new() -> Self {
        Self {
            access_token: Mutex::new("access-0".to_string()),
            refresh_token: Mutex::new("refresh-0".to_string()),
            refresh_calls: AtomicUsize::new(0),
            protected_calls: AtomicUsize::new(0),
            fail_refresh: AtomicBool::new(false),
            fail_logout: AtomicBool::new(false),
            reject_all_protected: AtomicBool::new(false),
            refresh_delay_ms: AtomicU64::new(0),
        }
    }

    pub fn current_access_token(&self) -> String {
        self.access_token.lock().unwrap().clone()
    }

    pub fn current_refresh_token(&self) -> String {
        self.refresh_token.lock().unwrap().clone()
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        if self.reject_all_protected.load(Ordering::SeqCst) {
            return false;
        }
        let expected = format!("Bearer {}", self.current_access_token());
        headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) == Some(expected.as_str())
    }
}

pub struct TestApp {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        setup_tracing();
        let state = Arc::new(BackendState::new());

        let router = Router::new()
            .route("/api/Auth/Login", post(login))
            .route("/api/Auth/Refresh", post(refresh))
            .route("/api/Auth/Logout", post(logout))
            .route("/api/Movies/getAllMovies", get(list_movies))
            .route("/api/Movies/addNewMovie", post(add_movie))
            .route("/api/Movies/updateMovie/{id}", put(update_movie))
            .route("/api/Movies/deleteMovie/{id}", delete(delete_movie))
            .route("/api/Channel/getAllChannels", get(list_channels))
            .route("/api/User/getAllUsers", get(list_users))
            .route("/api/Dashboard/DashboardStats", get(dashboard_stats))
            .route("/api/Echo/bearer", get(echo_bearer))
            .route("/api/Slow/hang", get(hang))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { base_url: format!("http://{addr}/api"), state }
    }

    pub fn client_with(&self, store: Arc<dyn SessionStore>) -> ApiClient {
        let config = ApiConfig { base_url: self.base_url.clone(), timeout_secs: 5 };
        ApiClient::new(&config, store).unwrap()
    }
}

async fn login(State(state): State<Arc<BackendState>>, axum::Json(body): axum::Json<Value>) -> Response {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        axum::Json(json!({
            "token": state.current_access_token(),
            "refreshToken": state.current_refresh_token(),
            "user": { "id": 1, "name": "Admin", "email": EMAIL },
        }))
        .into_response()
    } else {
        (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": "invalid credentials" }))).into_response()
    }
}

async fn refresh(State(state): State<Arc<BackendState>>, axum::Json(body): axum::Json<Value>) -> Response {
    let call = state.refresh_calls.fetch_add(1, Ordering::SeqCst) + 1;
    let delay = state.refresh_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let valid = body["refreshToken"] == state.current_refresh_token().as_str();
    if state.fail_refresh.load(Ordering::SeqCst) || !valid {
        return (StatusCode::UNAUTHORIZED, axum::Json(json!({ "error": "invalid refresh token" })))
            .into_response();
    }

    let access = format!("access-{call}");
    let refresh = format!("refresh-{call}");
    *state.access_token.lock().unwrap() = access.clone();
    *state.refresh_token.lock().unwrap() = refresh.clone();
    axum::Json(json!({ "token": access, "refreshToken": refresh })).into_response()
}

async fn logout(State(state): State<Arc<BackendState>>) -> Response {
    if state.fail_logout.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(json!({ "error": "logout broke" })))
            .into_response();
    }
    StatusCode::OK.into_response()
}

async fn list_movies(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    state.protected_calls.fetch_add(1, Ordering::SeqCst);
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    axum::Json(json!([
        { "id": 1, "title": "Heat", "releaseYear": 1995 },
        { "id": 2, "title": "Ran", "releaseYear": 1985, "posterUrl": "https://example.com/ran.jpg" },
    ]))
    .into_response()
}

async fn add_movie(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    axum::Json(mut body): axum::Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    body["id"] = json!(42);
    (StatusCode::CREATED, axum::Json(body)).into_response()
}

async fn update_movie(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    axum::Json(mut body): axum::Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    body["id"] = json!(id);
    axum::Json(body).into_response()
}

async fn delete_movie(
    State(state): State<Arc<BackendState>>,
    Path(_id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    StatusCode::OK.into_response()
}

async fn list_channels(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    axum::Json(json!([
        { "id": 1, "name": "News 24", "category": "news", "logoUrl": "https://example.com/n24.png" },
    ]))
    .into_response()
}

async fn list_users(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    axum::Json(json!([
        {
            "id": 1,
            "name": "Admin",
            "email": EMAIL,
            "role": "admin",
            "isActive": true,
            "createdAt": "2026-01-15T09:30:00Z",
        },
    ]))
    .into_response()
}

async fn dashboard_stats(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    axum::Json(json!({
        "totalMovies": 2543,
        "totalSeries": 487,
        "activeUsers": 5234,
        "activeSubscriptions": 3521,
    }))
    .into_response()
}

async fn echo_bearer(headers: HeaderMap) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    axum::Json(json!({ "authorization": authorization })).into_response()
}

async fn hang() -> Response {
    tokio::time::sleep(Duration::from_secs(30)).await;
    StatusCode::OK.into_response()
}
