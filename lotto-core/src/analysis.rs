use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Combination, Number, Rules, Submission};

/// A submission that reached the lowest reporting threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HitDetail {
    pub index: usize,
    pub combination: Combination,
    pub hits: usize,
    pub hit_numbers: Vec<Number>,
    pub miss_numbers: Vec<Number>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HitReport {
    /// Number of submissions with exactly `hits` matches, per threshold.
    totals: BTreeMap<usize, usize>,
    /// Sorted by hits, descending; ties stay in submission order.
    details: Vec<HitDetail>,
}

impl HitReport {
    /// Submissions with exactly `hits` matches. Zero for a hit count that is
    /// not a reporting threshold.
    pub fn count_for(&self, hits: usize) -> usize {
        self.totals.get(&hits).copied().unwrap_or(0)
    }

    /// `(threshold, count)` pairs, ascending by threshold.
    pub fn totals(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.totals.iter().map(|(&hits, &count)| (hits, count))
    }

    pub fn total_with_hits(&self) -> usize {
        self.totals.values().sum()
    }

    pub fn details(&self) -> &[HitDetail] {
        &self.details
    }
}

/// Scores every submission against `draw`.
pub fn analyse_hits(rules: &Rules, submissions: &[Submission], draw: &Combination) -> HitReport {
    let mut totals: BTreeMap<usize, usize> =
        rules.thresholds().iter().map(|&t| (t, 0)).collect();
    let lowest = rules.lowest_threshold();
    let mut details = Vec::new();

    for submission in submissions {
        let hit_numbers = submission.combination.intersection(draw);
        let hits = hit_numbers.len();

        if let Some(total) = totals.get_mut(&hits) {
            *total += 1;
        }
        if hits >= lowest {
            details.push(HitDetail {
                index: submission.index,
                combination: submission.combination.clone(),
                hits,
                hit_numbers,
                miss_numbers: submission.combination.difference(draw),
            });
        }
    }

    // sort_by is stable
    details.sort_by(|a, b| b.hits.cmp(&a.hits));

    HitReport { totals, details }
}
