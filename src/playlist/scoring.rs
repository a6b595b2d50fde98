use std::cmp::Ordering;

use super::config::ScoringWeights;
use super::outcome::ScoredSong;
use crate::models::{AffectTarget, Song};

/// Mood distance calculation
pub struct MoodScoring;

impl MoodScoring {
    /// Weighted L1 distance between a song and the affect target
    pub fn distance(song: &Song, target: &AffectTarget, weights: &ScoringWeights) -> f32 {
        weights.valence_weight * (song.valence - target.valence).abs()
            + weights.energy_weight * (song.energy - target.energy).abs()
    }

    /// Rank songs by distance to the target, closest first.
    /// The sort is stable, so equal distances keep their input order.
    pub fn rank(
        songs: &[Song],
        target: &AffectTarget,
        weights: &ScoringWeights,
    ) -> Vec<ScoredSong> {
        let mut scored: Vec<ScoredSong> = songs
            .iter()
            .map(|song| ScoredSong {
                song: song.clone(),
                distance: Self::distance(song, target, weights),
            })
            .collect();

        scored.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        });

        scored
    }
}
