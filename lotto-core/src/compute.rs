use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::analysis::{HitReport, analyse_hits};
use crate::error::Result;
use crate::generator::{exclusion_set, generate_draw};
use crate::models::{Combination, RawCombination, Rules};
use crate::validation::validate_batch;

/// Everything produced for one batch of submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawOutcome {
    pub draw: Combination,
    pub combinations_submitted: usize,
    pub unique_combinations: usize,
    pub report: HitReport,
}

impl DrawOutcome {
    pub fn message(&self) -> String {
        format!(
            "Draw generated! It does not match any of your {} unique combination(s).",
            self.unique_combinations
        )
    }
}

/// Validates `raw`, draws a non-matching combination and scores every
/// submission, using the standard rules and a freshly seeded generator.
pub fn compute_draw(raw: &[RawCombination]) -> Result<DrawOutcome> {
    let mut rng = StdRng::from_rng(&mut rand::rng());
    compute_draw_with(&Rules::default(), raw, &mut rng)
}

pub fn compute_draw_with<R: Rng + ?Sized>(
    rules: &Rules,
    raw: &[RawCombination],
    rng: &mut R,
) -> Result<DrawOutcome> {
    let submissions = validate_batch(rules, raw)?;
    let unique_combinations = exclusion_set(&submissions).len();

    let draw = generate_draw(rules, &submissions, rng)?;
    let report = analyse_hits(rules, &submissions, &draw);

    info!(
        "Drew {draw} against {} submission(s), {} with reportable hits",
        submissions.len(),
        report.total_with_hits()
    );

    Ok(DrawOutcome {
        draw,
        combinations_submitted: submissions.len(),
        unique_combinations,
        report,
    })
}
