use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Song;
use crate::playlist::outcome::ScoredSong;

/// Random selection from the closest-ranked candidates.
///
/// Drawing without replacement from a pool, instead of taking the head
/// of the ranking, keeps repeated runs with the same mood from
/// producing the same playlist.
pub struct DiversitySampler;

impl DiversitySampler {
    /// Sample up to `limit` songs from the first `pool_size` ranked candidates
    pub fn sample(ranked: &[ScoredSong], limit: usize, pool_size: usize) -> Vec<Song> {
        Self::sample_with_rng(&mut rand::thread_rng(), ranked, limit, pool_size)
    }

    pub fn sample_with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        ranked: &[ScoredSong],
        limit: usize,
        pool_size: usize,
    ) -> Vec<Song> {
        let pool = &ranked[..pool_size.min(ranked.len())];
        pool.choose_multiple(rng, limit.min(pool.len()))
            .map(|scored| scored.song.clone())
            .collect()
    }
}
