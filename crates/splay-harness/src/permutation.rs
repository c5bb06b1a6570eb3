use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// A seeded shuffle of a contiguous key range.
///
/// Uses the xoshiro256** PRNG so the same seed yields the same order on
/// every platform and every run.
///
/// # Examples
///
/// ```
/// use splay_harness::Permutation;
///
/// let a = Permutation::shuffled(-20, 20, 12);
/// let b = Permutation::shuffled(-20, 20, 12);
/// assert_eq!(a.keys(), b.keys());
/// assert_eq!(a.len(), 41);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    /// The seed the order was drawn from.
    pub seed: u64,
    keys: Vec<i64>,
}

impl Permutation {
    /// Shuffle `low..=high`. An inverted range gives an empty permutation.
    pub fn shuffled(low: i64, high: i64, seed: u64) -> Self {
        let mut keys: Vec<i64> = (low..=high).collect();
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        keys.shuffle(&mut rng);
        Self { seed, keys }
    }

    pub fn keys(&self) -> &[i64] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i64>> {
        self.keys.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = i64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
