//! Recommendation fetch policy and triggers
//!
//! Translates the user's current intent (identity plus filters, or a
//! search string) into exactly one outbound request per trigger and
//! replaces the song list from the response. A failed request leaves the
//! previously displayed list in place.
//!
//! Triggers are not coordinated with each other: a filter change and a
//! search submission can both be in flight at once, and whichever response
//! resolves last overwrites the song list. There is no sequence number and
//! no cancellation of superseded requests; callers that spawn triggers
//! concurrently get last-resolved-wins behavior.

use crate::api_client::ApiClient;
use crate::state::AppState;
use soundify_common::{Genre, Mood, QueryFilters, Result, UserId};
use std::sync::Arc;

/// Drives the recommendation API and owns the song-list replacement rules
#[derive(Clone)]
pub struct Recommender {
    api: ApiClient,
    state: Arc<AppState>,
}

impl Recommender {
    pub fn new(api: ApiClient, state: Arc<AppState>) -> Self {
        Self { api, state }
    }

    /// Fetch recommendations for `user_id`, with the request type chosen
    /// by the filter selection
    ///
    /// Neither filter set: default-recommendations request. Anything set:
    /// filtered request carrying exactly the set fields. On success the
    /// song list is replaced wholesale; on failure it is left untouched
    /// and the error is logged and returned. One request per call.
    pub async fn fetch_default_or_filtered(
        &self,
        user_id: UserId,
        filters: QueryFilters,
    ) -> Result<()> {
        let result = if filters.is_empty() {
            self.api.default_recommendations(user_id).await
        } else {
            self.api.filtered_recommendations(user_id, &filters).await
        };

        match result {
            Ok(songs) => {
                tracing::info!(user_id = %user_id, count = songs.len(), "Updated song list");
                self.state.replace_songs(songs).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Failed to fetch recommendations");
                Err(e)
            }
        }
    }

    /// Fetch recommendations for a free-text query
    ///
    /// Assumes the query is non-blank after trimming; the string is sent
    /// exactly as given. Use [`Recommender::submit_search`] for raw form
    /// input. Same success/failure semantics as
    /// [`Recommender::fetch_default_or_filtered`].
    pub async fn fetch_by_search(&self, query: &str) -> Result<()> {
        match self.api.search_recommendations(query).await {
            Ok(songs) => {
                tracing::info!(query = %query, count = songs.len(), "Updated song list");
                self.state.replace_songs(songs).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Failed to fetch search results");
                Err(e)
            }
        }
    }

    // ---- Triggers ----

    /// Log in and, on success, immediately fetch recommendations for the
    /// new identity under the current filter selection
    ///
    /// A failed login leaves the session unauthenticated; a login that
    /// succeeds but whose follow-up fetch fails still stores the identity
    /// (the fetch failure is logged and the song list keeps its previous
    /// contents).
    pub async fn login(&self, username: &str, password: &str) -> Result<UserId> {
        let user_id = match self.api.login(username, password).await {
            Ok(user_id) => user_id,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Login failed");
                return Err(e);
            }
        };

        self.state.set_user(user_id).await;
        tracing::info!(user_id = %user_id, "Logged in");

        let filters = self.state.filters().await;
        let _ = self.fetch_default_or_filtered(user_id, filters).await;

        Ok(user_id)
    }

    /// Log out unconditionally
    ///
    /// No network call; the identity is cleared and the previous song
    /// list stays displayed.
    pub async fn logout(&self) {
        self.state.clear_user().await;
        tracing::info!("Logged out");
    }

    /// Update the genre filter; re-fetches only while logged in
    pub async fn set_genre(&self, genre: Option<Genre>) -> Result<()> {
        let filters = self.state.set_genre(genre).await;
        self.refetch_if_authenticated(filters).await
    }

    /// Update the mood filter; re-fetches only while logged in
    pub async fn set_mood(&self, mood: Option<Mood>) -> Result<()> {
        let filters = self.state.set_mood(mood).await;
        self.refetch_if_authenticated(filters).await
    }

    /// Explicit search submission from the search form
    ///
    /// Blank input (empty or all whitespace) issues no request and leaves
    /// the song list untouched. Non-blank input is sent exactly as typed,
    /// surrounding whitespace included.
    pub async fn submit_search(&self, raw: &str) -> Result<()> {
        if raw.trim().is_empty() {
            tracing::debug!("Ignoring blank search submission");
            return Ok(());
        }

        self.fetch_by_search(raw).await
    }

    async fn refetch_if_authenticated(&self, filters: QueryFilters) -> Result<()> {
        match self.state.user().await {
            Some(user_id) => self.fetch_default_or_filtered(user_id, filters).await,
            None => Ok(()),
        }
    }
}
