// End-to-end generation tests with a mocked analysis backend

use crate::catalog::Catalog;
use crate::client::MockMoodAnalyzer;
use crate::models::{AffectTarget, MoodQuery, Song};
use crate::playlist::filters::MATCH_ALL_CATEGORY;
use crate::playlist::scoring::MoodScoring;
use crate::playlist::{PlaylistConfig, PlaylistGenerator, PlaylistOutcome, SelectionStrategy};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Build a catalog whose songs spread evenly across the affect plane
    fn build_catalog(count: usize) -> Catalog {
        let mut csv = String::from("artist,track_name,genre,valence,energy\n");
        for i in 0..count {
            let valence = i as f32 / (count - 1) as f32;
            let energy = 1.0 - valence;
            csv.push_str(&format!("Artist {i},Track {i},Rock,{valence},{energy}\n"));
        }
        Catalog::parse(&csv).unwrap()
    }

    fn warm_evening_target() -> AffectTarget {
        AffectTarget {
            valence: 0.8,
            energy: 0.2,
            diagnosis: "warm evening".to_string(),
        }
    }

    #[test]
    fn test_generates_the_requested_number_of_distinct_songs() {
        let catalog = build_catalog(40);
        let mut analyzer = MockMoodAnalyzer::new();
        analyzer
            .expect_analyze_mood()
            .returning(|_| Ok(warm_evening_target()));

        let generator = PlaylistGenerator::new(&analyzer, PlaylistConfig::default());
        let outcome = generator.generate(
            &catalog,
            &MoodQuery::new("content and a little sleepy"),
            &SelectionStrategy::Category(MATCH_ALL_CATEGORY.to_string()),
            5,
        );

        let PlaylistOutcome::Playlist(playlist) = outcome else {
            panic!("expected a playlist outcome");
        };
        assert_eq!(playlist.target.diagnosis, "warm evening");
        assert_eq!(playlist.entries.len(), 5);

        let distinct: HashSet<&str> = playlist
            .entries
            .iter()
            .map(|entry| entry.track_name.as_str())
            .collect();
        assert_eq!(distinct.len(), 5, "playlist entries should be distinct");
    }

    #[test]
    fn test_playlist_draws_from_the_closest_candidates() {
        let catalog = build_catalog(40);
        let config = PlaylistConfig::default();

        // The candidate pool is the 30 songs closest to the target
        let ranked = MoodScoring::rank(catalog.songs(), &warm_evening_target(), &config.scoring);
        let pool: HashSet<String> = ranked
            .iter()
            .take(config.candidate_pool_size)
            .map(|scored| scored.song.track_name.clone())
            .collect();

        let mut analyzer = MockMoodAnalyzer::new();
        analyzer
            .expect_analyze_mood()
            .returning(|_| Ok(warm_evening_target()));

        let generator = PlaylistGenerator::new(&analyzer, config);
        let outcome = generator.generate(
            &catalog,
            &MoodQuery::new("content and a little sleepy"),
            &SelectionStrategy::Category(MATCH_ALL_CATEGORY.to_string()),
            5,
        );

        let PlaylistOutcome::Playlist(playlist) = outcome else {
            panic!("expected a playlist outcome");
        };
        for entry in &playlist.entries {
            assert!(
                pool.contains(&entry.track_name),
                "'{}' is not among the closest candidates",
                entry.track_name
            );
        }
    }

    #[test]
    fn test_spotify_links_encode_artist_and_track() {
        let song = Song {
            artist: "Miles Davis".to_string(),
            track_name: "So What".to_string(),
            genre: Some("Jazz".to_string()),
            valence: 0.5,
            energy: 0.4,
        };

        assert_eq!(
            song.spotify_search_url(),
            "https://open.spotify.com/search/Miles%20Davis%20So%20What"
        );
    }

    #[test]
    fn test_playlist_entries_carry_spotify_links() {
        let catalog = build_catalog(10);
        let mut analyzer = MockMoodAnalyzer::new();
        analyzer
            .expect_analyze_mood()
            .returning(|_| Ok(warm_evening_target()));

        let generator = PlaylistGenerator::new(&analyzer, PlaylistConfig::default());
        let outcome = generator.generate(
            &catalog,
            &MoodQuery::new("easy morning"),
            &SelectionStrategy::Category(MATCH_ALL_CATEGORY.to_string()),
            3,
        );

        let PlaylistOutcome::Playlist(playlist) = outcome else {
            panic!("expected a playlist outcome");
        };
        assert_eq!(playlist.entries.len(), 3);
        for entry in &playlist.entries {
            assert!(
                entry
                    .spotify_url
                    .starts_with("https://open.spotify.com/search/"),
                "unexpected link: {}",
                entry.spotify_url
            );
        }
    }
}
