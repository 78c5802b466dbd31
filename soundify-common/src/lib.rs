//! # Soundify Common Library
//!
//! Shared code for the Soundify recommendation client:
//! - API request/response types
//! - Core data types (user identity, songs, query filters)
//! - Configuration loading
//! - Common error type

pub mod api;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Genre, Mood, QueryFilters, Song, UserId};
