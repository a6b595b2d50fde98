use serde::Serialize;

use crate::models::{AffectTarget, Song};

/// A song paired with its distance from the affect target
#[derive(Debug, Clone)]
pub struct ScoredSong {
    pub song: Song,
    pub distance: f32,
}

/// One playlist entry ready for presentation
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistEntry {
    pub artist: String,
    pub track_name: String,
    pub genre: Option<String>,
    pub spotify_url: String,
}

impl PlaylistEntry {
    pub fn from_song(song: &Song) -> Self {
        PlaylistEntry {
            artist: song.artist.clone(),
            track_name: song.track_name.clone(),
            genre: song.genre.clone(),
            spotify_url: song.spotify_search_url(),
        }
    }
}

/// A generated playlist together with the affect target that shaped it
#[derive(Debug, Clone, Serialize)]
pub struct MoodPlaylist {
    pub target: AffectTarget,
    pub entries: Vec<PlaylistEntry>,
}

/// Result of a generation run.
///
/// Generation never fails outright: either a playlist comes back,
/// possibly empty, or the category the listener picked has no songs.
#[derive(Debug)]
pub enum PlaylistOutcome {
    Playlist(MoodPlaylist),
    EmptyCategory { category: String },
}
