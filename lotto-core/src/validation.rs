use crate::error::{DrawError, Result};
use crate::models::{Combination, RawCombination, Rules, Submission};

/// Validates a whole batch of raw combinations.
///
/// The batch is accepted or refused as a unit: nothing is dropped, repaired or
/// deduplicated. Identical combinations stay separate submissions, each with
/// its own 1-based index.
pub fn validate_batch(rules: &Rules, raw: &[RawCombination]) -> Result<Vec<Submission>> {
    if raw.len() > rules.max_submissions() {
        return Err(DrawError::InvalidBatchSize {
            count: raw.len(),
            max: rules.max_submissions(),
        });
    }
    if raw.is_empty() {
        return Err(DrawError::EmptyBatch);
    }

    raw.iter()
        .enumerate()
        .map(|(i, numbers)| {
            let index = i + 1;
            Combination::new(rules, numbers)
                .map(|combination| Submission { index, combination })
                .map_err(|reason| DrawError::InvalidCombination { index, reason })
        })
        .collect()
}
