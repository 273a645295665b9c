use std::collections::HashMap;

use crate::trajectory_sampling::{sample, KinematicSample};

/// Exact bit patterns of (α, t_final, frame rate, radius)
type CacheKey = [u64; 4];

/// Memo of materialized trajectories.
///
/// Sampling is a pure function of its inputs, so a cached entry is
/// indistinguishable from a fresh one. Keys compare floats bit for bit.
#[derive(Debug, Default)]
pub struct TrajectoryCache {
    entries: HashMap<CacheKey, Vec<KinematicSample>>,
    capacity: Option<usize>,
    hits: u64,
    misses: u64,
}

impl TrajectoryCache {
    /// Unbounded cache: entries are kept until [`TrajectoryCache::clear`].
    /// Use [`TrajectoryCache::with_capacity`] when inputs vary freely.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that is cleared whenever it would grow past `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    pub fn get_or_sample(
        &mut self,
        angular_accel: f64,
        duration: f64,
        frame_rate: f64,
        radius: f64,
    ) -> &[KinematicSample] {
        let key = [
            angular_accel.to_bits(),
            duration.to_bits(),
            frame_rate.to_bits(),
            radius.to_bits(),
        ];

        if self.entries.contains_key(&key) {
            self.hits += 1;
            log::debug!("trajectory cache hit ({} entries)", self.entries.len());
        } else {
            self.misses += 1;
            if let Some(capacity) = self.capacity {
                if self.entries.len() >= capacity {
                    self.entries.clear();
                }
            }
            let samples = sample(angular_accel, duration, frame_rate, radius).to_vec();
            self.entries.insert(key, samples);
        }

        self.entries.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses)
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_matches_fresh() {
        let mut cache = TrajectoryCache::new();
        let cached = cache.get_or_sample(6.0, 1.0, 30.0, 0.06).to_vec();
        let fresh = sample(6.0, 1.0, 30.0, 0.06).to_vec();
        assert_eq!(cached, fresh);
        assert_eq!(cache.stats(), (0, 1));

        let again = cache.get_or_sample(6.0, 1.0, 30.0, 0.06).to_vec();
        assert_eq!(again, fresh);
        assert_eq!(cache.stats(), (1, 1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_keys() {
        let mut cache = TrajectoryCache::new();
        let a = cache.get_or_sample(6.0, 1.0, 30.0, 0.06).len();
        let b = cache.get_or_sample(6.0, 2.0, 30.0, 0.06).len();
        assert_eq!(a, 30);
        assert_eq!(b, 60);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_capacity_bound() {
        let mut cache = TrajectoryCache::with_capacity(2);
        cache.get_or_sample(1.0, 1.0, 30.0, 0.1);
        cache.get_or_sample(2.0, 1.0, 30.0, 0.1);
        cache.get_or_sample(3.0, 1.0, 30.0, 0.1);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
