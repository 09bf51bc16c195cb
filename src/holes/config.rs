// Criteria for flagging phonotactic holes
//
// A hole is an instantiation whose overlapping sub-sequences are attested
// while the whole sequence is (nearly) absent. The defaults reproduce the
// plain definition: both parts seen at least once, the whole never.

use crate::error::{LacunaError, Result};
use serde::{Deserialize, Serialize};

/// Thresholds used by the hole detector
///
/// # Example
/// ```
/// use lacuna::holes::HoleCriteria;
///
/// let criteria = HoleCriteria::default();
/// assert_eq!(criteria.min_part_count, 1);
/// assert_eq!(criteria.max_whole_count, 0);
/// assert!(criteria.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleCriteria {
    /// Minimum count for both the prefix and the suffix sub-sequence
    ///
    /// Default: 1 (attested at all)
    pub min_part_count: u64,

    /// Maximum count of the whole sequence still considered a hole
    ///
    /// Default: 0 (never attested)
    pub max_whole_count: u64,
}

impl Default for HoleCriteria {
    fn default() -> Self {
        Self {
            min_part_count: 1,
            max_whole_count: 0,
        }
    }
}

impl HoleCriteria {
    /// Require both parts to be attested at least twice
    ///
    /// Filters out holes that rest on a single accidental occurrence.
    pub fn strict() -> Self {
        Self {
            min_part_count: 2,
            max_whole_count: 0,
        }
    }

    /// Whether the three counts make a hole
    pub fn is_hole(&self, prefix_count: u64, suffix_count: u64, whole_count: u64) -> bool {
        prefix_count >= self.min_part_count
            && suffix_count >= self.min_part_count
            && whole_count <= self.max_whole_count
    }

    /// Validate criteria
    pub fn validate(&self) -> Result<()> {
        if self.min_part_count == 0 {
            return Err(LacunaError::InvalidCriteria(
                "min_part_count must be >= 1, otherwise unattested parts qualify".to_string(),
            ));
        }

        Ok(())
    }
}
