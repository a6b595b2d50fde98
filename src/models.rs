use serde::{Deserialize, Serialize};
use urlencoding::encode;

/// Neutral affect point used whenever the analyzer cannot be trusted.
pub const NEUTRAL_VALENCE: f32 = 0.5;
pub const NEUTRAL_ENERGY: f32 = 0.5;
pub const NEUTRAL_DIAGNOSIS: &str = "unknown";

/// One row of the song catalog. Immutable once loaded; catalog order is
/// preserved so distance ties resolve the same way on every run.
#[derive(Debug, Clone, Serialize)]
pub struct Song {
    pub artist: String,
    pub track_name: String,
    pub genre: Option<String>,
    pub valence: f32,
    pub energy: f32,
}

impl Song {
    /// Check whether this song's genre contains any of the given keywords
    /// as a substring. Keywords must already be lowercase; a song without a
    /// genre never matches.
    pub fn genre_contains_any(&self, keywords: &[&str]) -> bool {
        let Some(genre) = &self.genre else {
            return false;
        };
        let genre = genre.to_lowercase();
        keywords.iter().any(|keyword| genre.contains(keyword))
    }

    /// Build the Spotify search link for this song. Deterministic for a
    /// given artist + track, no network involved.
    pub fn spotify_search_url(&self) -> String {
        let query = format!("{} {}", self.artist, self.track_name);
        format!("https://open.spotify.com/search/{}", encode(&query))
    }
}

/// What the listener typed: the mood description and an optional
/// free-text genre hint (empty string means no hint).
#[derive(Debug, Clone)]
pub struct MoodQuery {
    pub text: String,
    pub genre_hint: String,
}

impl MoodQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            genre_hint: String::new(),
        }
    }

    pub fn with_genre_hint(text: impl Into<String>, genre_hint: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            genre_hint: genre_hint.into(),
        }
    }
}

/// The affect-space point a request is matched against, produced once per
/// request by the mood analyzer (or substituted by the neutral default).
#[derive(Debug, Clone, Serialize)]
pub struct AffectTarget {
    pub valence: f32,
    pub energy: f32,
    pub diagnosis: String,
}

impl AffectTarget {
    /// Build a target from raw analyzer output, coercing each field into
    /// contract range: missing or non-finite numbers become 0.5, everything
    /// else is clamped into [0, 1].
    pub fn from_parts(valence: Option<f32>, energy: Option<f32>, diagnosis: Option<String>) -> Self {
        Self {
            valence: clamp_unit(valence, NEUTRAL_VALENCE),
            energy: clamp_unit(energy, NEUTRAL_ENERGY),
            diagnosis: diagnosis
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| NEUTRAL_DIAGNOSIS.to_string()),
        }
    }

    /// The degradation target: used whenever the analyzer fails outright.
    pub fn neutral() -> Self {
        Self {
            valence: NEUTRAL_VALENCE,
            energy: NEUTRAL_ENERGY,
            diagnosis: NEUTRAL_DIAGNOSIS.to_string(),
        }
    }
}

/// Clamp an optional float into [0, 1]; absent or non-finite values take
/// the fallback.
fn clamp_unit(value: Option<f32>, fallback: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => fallback,
    }
}

/// Genre labels picked by the analyzer: either the match-all sentinel or a
/// non-empty set of catalog labels. Empty lists collapse to the sentinel at
/// construction so the invariant holds.
#[derive(Debug, Clone, PartialEq)]
pub enum GenreSelection {
    MatchAll,
    Genres(Vec<String>),
}

impl GenreSelection {
    pub fn from_labels(labels: Vec<String>) -> Self {
        let labels: Vec<String> = labels
            .into_iter()
            .filter(|label| !label.trim().is_empty())
            .collect();
        if labels.is_empty() {
            GenreSelection::MatchAll
        } else {
            GenreSelection::Genres(labels)
        }
    }
}

/// Full analyzer response when genre selection is requested.
#[derive(Debug, Clone)]
pub struct MoodAnalysis {
    pub target: AffectTarget,
    pub genres: GenreSelection,
}

impl MoodAnalysis {
    /// Neutral target plus match-all selection, for when the AI genre
    /// analysis fails outright.
    pub fn neutral() -> Self {
        Self {
            target: AffectTarget::neutral(),
            genres: GenreSelection::MatchAll,
        }
    }
}

/// Response structure for the chat completions API call
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub content: String,
}

/// The JSON object the analyzer is prompted to produce. Every key is
/// optional: a partially usable payload still yields a target, with the
/// missing pieces defaulted per key.
#[derive(Debug, Deserialize)]
pub struct MoodPayload {
    pub valence: Option<f32>,
    pub energy: Option<f32>,
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub selected_genres: Option<GenrePayload>,
}

/// `selected_genres` comes back either as a list of labels or as the
/// literal token "ALL".
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GenrePayload {
    Token(String),
    Labels(Vec<String>),
}

impl MoodPayload {
    pub fn into_target(self) -> AffectTarget {
        AffectTarget::from_parts(self.valence, self.energy, self.diagnosis)
    }

    pub fn into_analysis(self) -> MoodAnalysis {
        let genres = match &self.selected_genres {
            Some(GenrePayload::Labels(labels)) => GenreSelection::from_labels(labels.clone()),
            // A bare token ("ALL", or anything else off-contract) carries no
            // usable label list.
            Some(GenrePayload::Token(_)) | None => GenreSelection::MatchAll,
        };
        MoodAnalysis {
            target: self.into_target(),
            genres,
        }
    }
}
