use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind-specific payload of a catalog entry.
///
/// The source file carries a discriminator column ("Movie" or "Series");
/// each variant holds the trailing columns specific to that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Movie {
        runtime_minutes: u32,
        has_credit_scenes: bool,
    },
    Series {
        total_episodes: u32,
        /// Season number → episode count for that season.
        episodes_per_season: BTreeMap<u32, u32>,
    },
}

impl ContentKind {
    /// Short label for display ("Movie" / "Series").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Movie { .. } => "Movie",
            Self::Series { .. } => "Series",
        }
    }
}

/// A single catalog entry: one title, movie or series.
///
/// The id is fixed at construction and unique within a catalog.
/// Availability only changes through [`check_out`](ContentItem::check_out)
/// and [`check_in`](ContentItem::check_in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    id: u32,
    pub title: String,
    pub director: String,
    pub description: String,
    pub release_year: u32,
    available: bool,
    /// Genre tags in source order, whitespace-trimmed. May be empty.
    pub genres: Vec<String>,
    pub kind: ContentKind,
}

impl ContentItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        director: impl Into<String>,
        description: impl Into<String>,
        release_year: u32,
        available: bool,
        genres: Vec<String>,
        kind: ContentKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            director: director.into(),
            description: description.into(),
            release_year,
            available,
            genres,
            kind,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Transition Available → Borrowed.
    ///
    /// Returns `true` if the item was available and is now borrowed,
    /// `false` if it was already borrowed (no state change).
    pub fn check_out(&mut self) -> bool {
        if self.available {
            self.available = false;
            true
        } else {
            false
        }
    }

    /// Transition Borrowed → Available.
    ///
    /// Returns `true` if the item was borrowed and is now available,
    /// `false` if it was already available (no state change).
    pub fn check_in(&mut self) -> bool {
        if self.available {
            false
        } else {
            self.available = true;
            true
        }
    }

    /// Case-insensitive check whether this item carries the given genre tag.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }

    /// Episode count for a season, if this is a series and the season exists.
    pub fn episodes_in_season(&self, season: u32) -> Option<u32> {
        match &self.kind {
            ContentKind::Series {
                episodes_per_season,
                ..
            } => episodes_per_season.get(&season).copied(),
            ContentKind::Movie { .. } => None,
        }
    }
}
