/// Configuration for playlist generation heuristics
#[derive(Debug, Clone)]
pub struct PlaylistConfig {
    pub scoring: ScoringWeights,
    /// How many of the closest-ranked songs feed the diversity sampler
    pub candidate_pool_size: usize,
}

/// Weights for the mood distance calculation.
/// Valence is weighted above energy: listeners notice a song with the
/// wrong emotional tone more than one with the wrong intensity.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub valence_weight: f32,
    pub energy_weight: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            valence_weight: 1.5,
            energy_weight: 1.0,
        }
    }
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            candidate_pool_size: 30,
        }
    }
}
