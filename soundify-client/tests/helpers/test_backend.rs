//! Mock recommendation backend for integration tests
//!
//! Serves the four API endpoints on an ephemeral port and records every
//! request it receives, so tests can assert on exact paths, query
//! parameters, and bodies. Behavior knobs cover the failure and race
//! scenarios: rejected logins, HTTP 500 responses, malformed bodies, and
//! an artificial delay on the filtered endpoint.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use soundify_common::Song;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One request the backend received
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub body: Option<Value>,
}

/// Behavior knobs for one backend instance
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// User id handed out by /login/; None rejects every login with 400
    pub login_user_id: Option<i64>,

    /// Songs returned by each endpoint, as (title, artist) pairs
    pub default_songs: Vec<(&'static str, &'static str)>,
    pub filtered_songs: Vec<(&'static str, &'static str)>,
    pub search_songs: Vec<(&'static str, &'static str)>,

    /// Delay before the filtered endpoint responds
    pub filtered_delay: Duration,

    /// Delay before the search endpoint responds
    pub search_delay: Duration,

    /// Every recommendation endpoint returns HTTP 500
    pub fail_recommendations: bool,

    /// Recommendation endpoints return a body outside the contract shape
    pub malformed_recommendations: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            login_user_id: Some(42),
            default_songs: vec![("Daily One", "Artist A"), ("Daily Two", "Artist B")],
            filtered_songs: vec![("Filtered One", "Artist C")],
            search_songs: vec![("Searched One", "Artist D"), ("Searched Two", "Artist E")],
            filtered_delay: Duration::ZERO,
            search_delay: Duration::ZERO,
            fail_recommendations: false,
            malformed_recommendations: false,
        }
    }
}

struct Inner {
    config: BackendConfig,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl Inner {
    fn record(
        &self,
        method: &str,
        path: String,
        query: BTreeMap<String, String>,
        body: Option<Value>,
    ) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            path,
            query,
            body,
        });
    }

    fn recommendation_response(
        &self,
        songs: &[(&'static str, &'static str)],
    ) -> (StatusCode, Json<Value>) {
        if self.config.fail_recommendations {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "recommendation engine unavailable" })),
            );
        }

        if self.config.malformed_recommendations {
            return (
                StatusCode::OK,
                Json(json!({ "recommended_songs": "not-a-list" })),
            );
        }

        let songs: Vec<Value> = songs
            .iter()
            .map(|(title, artist)| json!({ "title": title, "artist": artist }))
            .collect();

        (StatusCode::OK, Json(json!({ "recommended_songs": songs })))
    }
}

/// Running mock backend bound to an ephemeral port
pub struct MockBackend {
    /// Base URL to hand to `ApiClient::new`
    pub base_url: String,
    inner: Arc<Inner>,
}

impl MockBackend {
    /// Start with default behavior (login succeeds as user 42)
    pub async fn start() -> MockBackend {
        Self::start_with(BackendConfig::default()).await
    }

    /// Start with explicit behavior knobs
    pub async fn start_with(config: BackendConfig) -> MockBackend {
        let inner = Arc::new(Inner {
            config,
            requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/api/login/", post(login))
            .route("/api/recommendations/:user_id/", get(default_recommendations))
            .route(
                "/api/recommendations/filter/:user_id/",
                get(filtered_recommendations),
            )
            .route("/api/recommendations/search/", post(search_recommendations))
            .with_state(Arc::clone(&inner));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        MockBackend {
            base_url: format!("http://{}/api", addr),
            inner,
        }
    }

    /// Every request received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    /// Paths of all received requests, in arrival order
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

/// The `Song` values a (title, artist) fixture list deserializes into
pub fn expected_songs(songs: &[(&'static str, &'static str)]) -> Vec<Song> {
    songs
        .iter()
        .map(|(title, artist)| Song {
            title: title.to_string(),
            artist: artist.to_string(),
        })
        .collect()
}

async fn login(
    State(inner): State<Arc<Inner>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    inner.record("POST", "/api/login/".to_string(), BTreeMap::new(), Some(body));

    match inner.config.login_user_id {
        Some(user_id) => (StatusCode::OK, Json(json!({ "user_id": user_id }))),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid credentials" })),
        ),
    }
}

async fn default_recommendations(
    State(inner): State<Arc<Inner>>,
    Path(user_id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    inner.record(
        "GET",
        format!("/api/recommendations/{}/", user_id),
        BTreeMap::new(),
        None,
    );

    inner.recommendation_response(&inner.config.default_songs)
}

async fn filtered_recommendations(
    State(inner): State<Arc<Inner>>,
    Path(user_id): Path<i64>,
    Query(params): Query<BTreeMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    inner.record(
        "GET",
        format!("/api/recommendations/filter/{}/", user_id),
        params,
        None,
    );

    if !inner.config.filtered_delay.is_zero() {
        tokio::time::sleep(inner.config.filtered_delay).await;
    }

    inner.recommendation_response(&inner.config.filtered_songs)
}

async fn search_recommendations(
    State(inner): State<Arc<Inner>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    inner.record(
        "POST",
        "/api/recommendations/search/".to_string(),
        BTreeMap::new(),
        Some(body),
    );

    if !inner.config.search_delay.is_zero() {
        tokio::time::sleep(inner.config.search_delay).await;
    }

    inner.recommendation_response(&inner.config.search_songs)
}
