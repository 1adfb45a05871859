use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;
use rand::seq::index;

use crate::error::{DrawError, Result};
use crate::models::{Combination, Number, Rules, Submission};

/// Distinct combination values of a batch.
///
/// Submissions sharing a value collapse into one entry: exclusion depends on
/// the value only, not on how many tickets carry it.
pub fn exclusion_set(submissions: &[Submission]) -> HashSet<&Combination> {
    submissions.iter().map(|s| &s.combination).collect()
}

/// Draws `pick_count` distinct numbers, every subset of the range being
/// equally likely.
pub fn sample_combination<R: Rng + ?Sized>(rules: &Rules, rng: &mut R) -> Combination {
    let numbers: Vec<Number> = index::sample(rng, rules.pool_size(), rules.pick_count())
        .into_iter()
        .map(|offset| rules.low() + offset as Number)
        .collect();
    Combination::from_numbers(numbers)
}

/// Rejection sampling: resample until the draw equals none of the submitted
/// combinations, giving up after `retry_limit` attempts.
///
/// Membership is tested on whole combinations. A number that appears in some
/// submission stays as likely as any other to be drawn.
pub fn generate_draw<R: Rng + ?Sized>(
    rules: &Rules,
    submissions: &[Submission],
    rng: &mut R,
) -> Result<Combination> {
    let excluded = exclusion_set(submissions);

    for attempt in 1..=rules.retry_limit() {
        let candidate = sample_combination(rules, rng);
        if !excluded.contains(&candidate) {
            debug!("Draw {candidate} accepted after {attempt} attempt(s)");
            return Ok(candidate);
        }
        debug!("Attempt {attempt}: {candidate} matches a submitted combination, resampling");
    }

    warn!(
        "No non-matching draw after {} attempts ({} excluded combinations)",
        rules.retry_limit(),
        excluded.len()
    );
    Err(DrawError::GenerationExhausted {
        attempts: rules.retry_limit(),
    })
}
