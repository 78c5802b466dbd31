//! Shared application state
//!
//! Session identity, the selected filters, and the current song list live
//! behind one state object with controlled accessors; components share it
//! via `Arc`. Uses RwLock for concurrent read access with rare writes.

use soundify_common::{Genre, Mood, QueryFilters, Song, UserId};
use tokio::sync::RwLock;

/// Shared state accessible by the recommendation client and the view driver
///
/// Each field has one logical writer: the trigger layer for identity and
/// filters, the recommendation client for the song list. The song list is
/// only ever replaced wholesale; there is no merging or deduplication, and
/// whichever response lands last wins.
pub struct AppState {
    /// Authenticated identity (None until login succeeds)
    user: RwLock<Option<UserId>>,

    /// Currently selected genre/mood filters (both start unset)
    filters: RwLock<QueryFilters>,

    /// Songs from the most recent completed successful request
    songs: RwLock<Vec<Song>>,
}

impl AppState {
    /// Create new state: unauthenticated, no filters, empty song list
    pub fn new() -> Self {
        Self {
            user: RwLock::new(None),
            filters: RwLock::new(QueryFilters::default()),
            songs: RwLock::new(Vec::new()),
        }
    }

    /// Get the authenticated identity, if any
    pub async fn user(&self) -> Option<UserId> {
        *self.user.read().await
    }

    /// Store the identity returned by a successful login
    pub async fn set_user(&self, user_id: UserId) {
        *self.user.write().await = Some(user_id);
    }

    /// Clear the identity unconditionally
    ///
    /// The song list is deliberately kept; logout only forgets who was
    /// logged in.
    pub async fn clear_user(&self) {
        *self.user.write().await = None;
    }

    /// Get the current filter selection
    pub async fn filters(&self) -> QueryFilters {
        *self.filters.read().await
    }

    /// Update the genre filter; returns the full selection after the change
    pub async fn set_genre(&self, genre: Option<Genre>) -> QueryFilters {
        let mut filters = self.filters.write().await;
        filters.genre = genre;
        *filters
    }

    /// Update the mood filter; returns the full selection after the change
    pub async fn set_mood(&self, mood: Option<Mood>) -> QueryFilters {
        let mut filters = self.filters.write().await;
        filters.mood = mood;
        *filters
    }

    /// Get the current song list
    pub async fn songs(&self) -> Vec<Song> {
        self.songs.read().await.clone()
    }

    /// Replace the song list wholesale with the latest response
    pub async fn replace_songs(&self, songs: Vec<Song>) {
        *self.songs.write().await = songs;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
