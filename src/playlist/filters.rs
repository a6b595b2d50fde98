use super::fallback::{OrWiden, non_empty};
use crate::models::{GenreSelection, Song};

/// Category that places no genre restriction on the catalog
pub const MATCH_ALL_CATEGORY: &str = "Wszystkie / Dowolny";

/// Category labels with the genre keywords each one covers.
/// Keywords are stored lowercase; matching lowercases the song genre.
/// The first entry is the match-all sentinel and has no keywords.
pub const GENRE_CATEGORIES: &[(&str, &[&str])] = &[
    (MATCH_ALL_CATEGORY, &[]),
    (
        "Rap / Hip-Hop / Drill",
        &[
            "rap",
            "hip hop",
            "hip-hop",
            "drill",
            "trap",
            "baddie",
            "gangsta",
            "old school",
        ],
    ),
    (
        "Pop / K-Pop",
        &["pop", "dance", "k-pop", "kpop", "korean", "mainstream"],
    ),
    (
        "Rock / Metal / Alternatywa",
        &["rock", "metal", "punk", "grunge", "indie", "alternative"],
    ),
    (
        "R&B / Soul",
        &["r&b", "rnb", "soul", "blues", "jazz", "chill"],
    ),
    (
        "Elektroniczna / Club",
        &["house", "techno", "edm", "club", "electronic"],
    ),
];

/// Song filtering functionality using static helper functions
pub struct SongFilters;

impl SongFilters {
    /// Names of the selectable categories, match-all sentinel first
    pub fn category_names() -> Vec<&'static str> {
        GENRE_CATEGORIES.iter().map(|(name, _)| *name).collect()
    }

    /// Keywords for a category; unknown categories have none
    pub fn category_keywords(category: &str) -> &'static [&'static str] {
        GENRE_CATEGORIES
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// Keep the songs whose genre falls under a category. A category
    /// without keywords matches every song.
    pub fn filter_by_category(songs: &[Song], category: &str) -> Vec<Song> {
        let keywords = Self::category_keywords(category);
        if keywords.is_empty() {
            return songs.to_vec();
        }

        songs
            .iter()
            .filter(|song| song.genre_contains_any(keywords))
            .cloned()
            .collect()
    }

    /// Keep the songs whose genre appears verbatim in the selection.
    /// A selection matching nothing widens back to the full list.
    pub fn filter_by_genre_list(songs: &[Song], selection: &GenreSelection) -> Vec<Song> {
        let GenreSelection::Genres(genres) = selection else {
            return songs.to_vec();
        };

        let matched: Vec<Song> = songs
            .iter()
            .filter(|song| {
                song.genre
                    .as_ref()
                    .is_some_and(|genre| genres.iter().any(|selected| selected == genre))
            })
            .cloned()
            .collect();

        non_empty(matched).or_widen(
            "none of the selected genres matched the catalog, using every song",
            || songs.to_vec(),
        )
    }
}
