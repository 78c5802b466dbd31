//! Recommendation API client
//!
//! Thin wrapper over the four REST endpoints exposed by the Soundify
//! backend. Each method performs exactly one outbound request; there are
//! no retries, no backoff, and no request timeout. Failures map onto the
//! common error taxonomy and the caller decides what happens next.
//!
//! The identity travels as a plain path parameter with no token or auth
//! header; the server trusts it as-is. That matches the deployed API
//! contract and is a known security gap, not something this client is
//! free to paper over.

use serde::de::DeserializeOwned;
use soundify_common::api::{LoginRequest, LoginResponse, RecommendationsResponse, SearchRequest};
use soundify_common::{Error, QueryFilters, Result, Song, UserId};

/// Client for the Soundify recommendation API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL
    /// (e.g. `http://127.0.0.1:8000/api`)
    pub fn new(base_url: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Authenticate and return the server-assigned user id
    ///
    /// `POST /login/` with the raw credentials. Any failure (bad
    /// credentials included) surfaces as an error; the server reports
    /// invalid logins as a non-success status.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserId> {
        let url = format!("{}/login/", self.base_url);

        tracing::debug!(username = %username, url = %url, "Sending login request");

        let response = self
            .http_client
            .post(&url)
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let body: LoginResponse = read_json(response).await?;

        Ok(body.user_id)
    }

    /// Fetch default recommendations for a user
    ///
    /// `GET /recommendations/{user_id}/` with no parameters.
    pub async fn default_recommendations(&self, user_id: UserId) -> Result<Vec<Song>> {
        let url = format!("{}/recommendations/{}/", self.base_url, user_id);

        tracing::debug!(user_id = %user_id, url = %url, "Fetching default recommendations");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let body: RecommendationsResponse = read_json(response).await?;

        tracing::debug!(
            user_id = %user_id,
            count = body.recommended_songs.len(),
            "Retrieved default recommendations"
        );

        Ok(body.recommended_songs)
    }

    /// Fetch filtered recommendations for a user
    ///
    /// `GET /recommendations/filter/{user_id}/` carrying whichever of
    /// genre/mood are set as query parameters. Unset filters are omitted,
    /// never sent as empty strings.
    pub async fn filtered_recommendations(
        &self,
        user_id: UserId,
        filters: &QueryFilters,
    ) -> Result<Vec<Song>> {
        let url = format!("{}/recommendations/filter/{}/", self.base_url, user_id);

        let mut request = self.http_client.get(&url);
        if let Some(genre) = filters.genre {
            request = request.query(&[("genre", genre.as_str())]);
        }
        if let Some(mood) = filters.mood {
            request = request.query(&[("mood", mood.as_str())]);
        }

        tracing::debug!(
            user_id = %user_id,
            genre = ?filters.genre,
            mood = ?filters.mood,
            "Fetching filtered recommendations"
        );

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let body: RecommendationsResponse = read_json(response).await?;

        tracing::debug!(
            user_id = %user_id,
            count = body.recommended_songs.len(),
            "Retrieved filtered recommendations"
        );

        Ok(body.recommended_songs)
    }

    /// Fetch recommendations for a free-text query
    ///
    /// `POST /recommendations/search/` with the query string exactly as
    /// given; the caller is responsible for rejecting blank input first.
    pub async fn search_recommendations(&self, query: &str) -> Result<Vec<Song>> {
        let url = format!("{}/recommendations/search/", self.base_url);

        tracing::debug!(query = %query, "Sending search request");

        let response = self
            .http_client
            .post(&url)
            .json(&SearchRequest {
                query: query.to_string(),
            })
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let body: RecommendationsResponse = read_json(response).await?;

        tracing::debug!(
            query = %query,
            count = body.recommended_songs.len(),
            "Retrieved search results"
        );

        Ok(body.recommended_songs)
    }
}

/// Triage a response: non-success status becomes `Error::Api`, an
/// undecodable body becomes `Error::Parse`.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(Error::Api(status.as_u16(), error_text));
    }

    response.json().await.map_err(|e| Error::Parse(e.to_string()))
}
