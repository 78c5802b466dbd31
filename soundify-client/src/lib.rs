//! # Soundify Client Library
//!
//! Client side of the Soundify music recommendation system:
//! - HTTP client for the four recommendation API endpoints
//! - Shared application state (session identity, filters, song list)
//! - Fetch policy translating user intent into exactly one request

pub mod api_client;
pub mod recommender;
pub mod state;

pub use api_client::ApiClient;
pub use recommender::Recommender;
pub use state::AppState;
