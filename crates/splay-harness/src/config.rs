use splay_tree::VerifyOptions;

use crate::error::ScenarioError;

/// Largest key range a run accepts. Node indices are `u32`.
pub const MAX_KEYS: u64 = u32::MAX as u64;

/// Knobs for one harness run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Lowest key inserted.
    pub low: i64,
    /// Highest key inserted (inclusive).
    pub high: i64,
    /// Seed for the insertion order.
    pub insert_seed: u64,
    /// Seed for the lookup order.
    pub find_seed: u64,
    /// Run the verifier's cycle scan after every step.
    pub check_cycles: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            low: -20,
            high: 20,
            insert_seed: 12,
            find_seed: 12,
            check_cycles: true,
        }
    }
}

impl HarnessConfig {
    /// Walk the same permutation of keys in both passes.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.insert_seed = seed;
        self.find_seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.low > self.high {
            return Err(ScenarioError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        if self.span() > i128::from(MAX_KEYS) {
            return Err(ScenarioError::RangeTooLarge {
                low: self.low,
                high: self.high,
                max: MAX_KEYS,
            });
        }
        Ok(())
    }

    /// Number of distinct keys in `low..=high`, saturating at `usize::MAX`.
    pub fn key_count(&self) -> usize {
        usize::try_from(self.span()).unwrap_or(usize::MAX)
    }

    fn span(&self) -> i128 {
        if self.low > self.high {
            0
        } else {
            i128::from(self.high) - i128::from(self.low) + 1
        }
    }

    pub fn verify_options(&self) -> VerifyOptions {
        VerifyOptions {
            check_cycles: self.check_cycles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_forty_one_keys() {
        let config = HarnessConfig::default();
        assert_eq!(config.key_count(), 41);
        assert!(config.validate().is_ok());
        assert!(config.verify_options().check_cycles);
    }

    #[test]
    fn with_seed_sets_both_passes() {
        let config = HarnessConfig::default().with_seed(100);
        assert_eq!((config.insert_seed, config.find_seed), (100, 100));
        let stock = HarnessConfig::default();
        assert_eq!(stock.insert_seed, stock.find_seed);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = HarnessConfig {
            low: 3,
            high: 2,
            ..HarnessConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScenarioError::InvalidRange { low: 3, high: 2 })
        ));
        assert_eq!(config.key_count(), 0);
    }

    #[test]
    fn oversized_ranges_are_rejected() {
        let full = HarnessConfig {
            low: i64::MIN,
            high: i64::MAX,
            ..HarnessConfig::default()
        };
        assert!(matches!(
            full.validate(),
            Err(ScenarioError::RangeTooLarge { max: MAX_KEYS, .. })
        ));
        assert_ne!(full.key_count(), 0);

        let widest = HarnessConfig {
            low: 0,
            high: MAX_KEYS as i64 - 1,
            ..HarnessConfig::default()
        };
        assert!(widest.validate().is_ok());
        let over = HarnessConfig {
            high: MAX_KEYS as i64,
            ..widest
        };
        assert!(over.validate().is_err());
    }
}
