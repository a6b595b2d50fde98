use super::config::PlaylistConfig;
use super::fallback::OrWiden;
use super::filters::SongFilters;
use super::outcome::{MoodPlaylist, PlaylistEntry, PlaylistOutcome};
use super::sampler::DiversitySampler;
use super::scoring::MoodScoring;
use crate::catalog::Catalog;
use crate::client::MoodAnalyzer;
use crate::models::{AffectTarget, MoodAnalysis, MoodQuery, Song};

/// How the candidate songs are narrowed before ranking
#[derive(Debug, Clone)]
pub enum SelectionStrategy {
    /// The listener picked a fixed genre category up front
    Category(String),
    /// The analysis call picks matching genres from the catalog
    AiGenreSelection,
}

/// Main playlist generator
pub struct PlaylistGenerator<'a> {
    analyzer: &'a dyn MoodAnalyzer,
    config: PlaylistConfig,
}

impl<'a> PlaylistGenerator<'a> {
    pub fn new(analyzer: &'a dyn MoodAnalyzer, config: PlaylistConfig) -> Self {
        Self { analyzer, config }
    }

    /// Generate a playlist for a mood query
    pub fn generate(
        &self,
        catalog: &Catalog,
        query: &MoodQuery,
        strategy: &SelectionStrategy,
        limit: usize,
    ) -> PlaylistOutcome {
        match strategy {
            SelectionStrategy::Category(category) => {
                let candidates = SongFilters::filter_by_category(catalog.songs(), category);
                // An empty category short-circuits before the analysis call
                if candidates.is_empty() {
                    return PlaylistOutcome::EmptyCategory {
                        category: category.clone(),
                    };
                }

                let target = self.analyzer.analyze_mood(&query.text).ok().or_widen(
                    "mood analysis failed, using neutral values",
                    AffectTarget::neutral,
                );

                PlaylistOutcome::Playlist(self.finish(candidates, target, limit))
            }
            SelectionStrategy::AiGenreSelection => {
                let analysis = self
                    .analyzer
                    .analyze_mood_with_genres(
                        &query.text,
                        &query.genre_hint,
                        &catalog.distinct_genres(),
                    )
                    .ok()
                    .or_widen(
                        "mood analysis failed, using neutral values",
                        MoodAnalysis::neutral,
                    );

                let candidates =
                    SongFilters::filter_by_genre_list(catalog.songs(), &analysis.genres);

                PlaylistOutcome::Playlist(self.finish(candidates, analysis.target, limit))
            }
        }
    }

    /// Rank the candidates and sample the final entries
    fn finish(&self, candidates: Vec<Song>, target: AffectTarget, limit: usize) -> MoodPlaylist {
        let ranked = MoodScoring::rank(&candidates, &target, &self.config.scoring);
        let sampled = DiversitySampler::sample(&ranked, limit, self.config.candidate_pool_size);
        let entries = sampled.iter().map(PlaylistEntry::from_song).collect();

        MoodPlaylist { target, entries }
    }
}
