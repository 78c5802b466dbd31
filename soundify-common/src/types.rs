//! Core data types: user identity, songs, and query filters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for an authenticated user
///
/// Assigned by the server at login and passed back as a path parameter on
/// the recommendation endpoints. The client never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display record for one recommended song
///
/// Extra fields the server includes (genre, mood, popularity) are ignored;
/// the client does not validate or transform songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

/// Genres offered by the filter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Pop,
    Rock,
    #[serde(rename = "Hip-Hop")]
    HipHop,
    Jazz,
    Classical,
    Electronic,
    #[serde(rename = "R&B")]
    RnB,
    Metal,
    Country,
    Reggae,
}

impl Genre {
    /// All selectable genres, in display order
    pub const ALL: [Genre; 10] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Classical,
        Genre::Electronic,
        Genre::RnB,
        Genre::Metal,
        Genre::Country,
        Genre::Reggae,
    ];

    /// The server-side spelling of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::HipHop => "Hip-Hop",
            Genre::Jazz => "Jazz",
            Genre::Classical => "Classical",
            Genre::Electronic => "Electronic",
            Genre::RnB => "R&B",
            Genre::Metal => "Metal",
            Genre::Country => "Country",
            Genre::Reggae => "Reggae",
        }
    }

    /// Parse the server-side spelling; `None` for anything else
    pub fn from_name(name: &str) -> Option<Genre> {
        Genre::ALL.iter().copied().find(|g| g.as_str() == name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moods offered by the filter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Relaxed,
    Romantic,
    Angry,
    Focused,
    Nostalgic,
}

impl Mood {
    /// All selectable moods, in display order
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Relaxed,
        Mood::Romantic,
        Mood::Angry,
        Mood::Focused,
        Mood::Nostalgic,
    ];

    /// The server-side spelling of the mood
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Energetic => "Energetic",
            Mood::Relaxed => "Relaxed",
            Mood::Romantic => "Romantic",
            Mood::Angry => "Angry",
            Mood::Focused => "Focused",
            Mood::Nostalgic => "Nostalgic",
        }
    }

    /// Parse the server-side spelling; `None` for anything else
    pub fn from_name(name: &str) -> Option<Mood> {
        Mood::ALL.iter().copied().find(|m| m.as_str() == name)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currently selected genre/mood pair
///
/// Both fields start unset; neither has a default selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilters {
    pub genre: Option<Genre>,
    pub mood: Option<Mood>,
}

impl QueryFilters {
    /// True when neither filter is set
    ///
    /// Drives request selection: empty filters mean the default
    /// recommendations endpoint, anything set means the filtered one.
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.mood.is_none()
    }
}
