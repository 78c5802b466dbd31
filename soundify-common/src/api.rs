//! Request/response types for the recommendation API
//!
//! Endpoint summary (base path `http://host:8000/api`):
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | Login | POST | `/login/` |
//! | Default recommendations | GET | `/recommendations/{user_id}/` |
//! | Filtered recommendations | GET | `/recommendations/filter/{user_id}/` |
//! | Search recommendations | POST | `/recommendations/search/` |
//!
//! The filtered endpoint takes optional `genre` and `mood` query
//! parameters; unset filters are omitted from the query string entirely.

use crate::types::{Song, UserId};
use serde::{Deserialize, Serialize};

/// Credentials for `POST /login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success body from `POST /login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: UserId,
}

/// Success body shared by all three recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommended_songs: Vec<Song>,
}

/// Body for `POST /recommendations/search/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}
