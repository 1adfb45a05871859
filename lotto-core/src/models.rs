use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{CombinationFault, DrawError, Result};

pub type Number = u8;

/// A combination as received from the caller, before validation.
pub type RawCombination = Vec<i64>;

pub const LOW: Number = 1;
pub const HIGH: Number = 36;
pub const PICK_COUNT: usize = 7;
pub const MAX_SUBMISSIONS: usize = 200;
pub const RETRY_LIMIT: u32 = 10_000;
pub const REPORT_THRESHOLDS: [usize; 3] = [4, 5, 6];

/// Game rules shared by validation, generation and analysis.
///
/// `Rules::default()` is the 7-out-of-36 game. Other shapes only exist so the
/// algorithms can be exercised on domains small enough to enumerate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rules {
    low: Number,
    high: Number,
    pick_count: usize,
    max_submissions: usize,
    retry_limit: u32,
    thresholds: Vec<usize>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            low: LOW,
            high: HIGH,
            pick_count: PICK_COUNT,
            max_submissions: MAX_SUBMISSIONS,
            retry_limit: RETRY_LIMIT,
            thresholds: REPORT_THRESHOLDS.to_vec(),
        }
    }
}

impl Rules {
    pub fn new(
        low: Number,
        high: Number,
        pick_count: usize,
        max_submissions: usize,
        retry_limit: u32,
        thresholds: &[usize],
    ) -> Result<Self> {
        let invalid = |message: String| -> Result<Self> { Err(DrawError::InvalidRules { message }) };

        if low > high {
            return invalid(format!("empty range {low}-{high}"));
        }
        let pool_size = (high - low) as usize + 1;
        if pick_count == 0 || pick_count > pool_size {
            return invalid(format!("cannot pick {pick_count} numbers out of {pool_size}"));
        }
        if retry_limit == 0 {
            return invalid("retry limit must be at least 1".to_string());
        }
        if thresholds.is_empty() {
            return invalid("at least one reporting threshold is required".to_string());
        }
        if let Some(&t) = thresholds.iter().find(|&&t| t == 0 || t > pick_count) {
            return invalid(format!("threshold {t} must be within 1-{pick_count}"));
        }

        let mut thresholds = thresholds.to_vec();
        thresholds.sort_unstable();
        thresholds.dedup();

        Ok(Self {
            low,
            high,
            pick_count,
            max_submissions,
            retry_limit,
            thresholds,
        })
    }

    pub fn low(&self) -> Number {
        self.low
    }

    pub fn high(&self) -> Number {
        self.high
    }

    pub fn pick_count(&self) -> usize {
        self.pick_count
    }

    pub fn max_submissions(&self) -> usize {
        self.max_submissions
    }

    pub fn retry_limit(&self) -> u32 {
        self.retry_limit
    }

    /// Reporting thresholds, ascending.
    pub fn thresholds(&self) -> &[usize] {
        &self.thresholds
    }

    pub fn lowest_threshold(&self) -> usize {
        self.thresholds.first().copied().unwrap_or(self.pick_count)
    }

    pub fn pool_size(&self) -> usize {
        (self.high - self.low) as usize + 1
    }

    pub fn in_range(&self, value: i64) -> bool {
        value >= self.low as i64 && value <= self.high as i64
    }
}

/// A validated set of distinct numbers.
///
/// Numbers are kept ascending, so two combinations built from the same values
/// in a different order compare, hash and print the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Combination(Vec<Number>);

impl Combination {
    pub fn new(rules: &Rules, raw: &[i64]) -> std::result::Result<Self, CombinationFault> {
        if raw.len() != rules.pick_count() {
            return Err(CombinationFault::WrongLength {
                expected: rules.pick_count(),
                actual: raw.len(),
            });
        }

        let mut seen = HashSet::with_capacity(raw.len());
        let mut numbers = Vec::with_capacity(raw.len());
        for &value in raw {
            if !rules.in_range(value) {
                return Err(CombinationFault::OutOfRange {
                    value,
                    low: rules.low(),
                    high: rules.high(),
                });
            }
            let n = value as Number;
            if !seen.insert(n) {
                return Err(CombinationFault::Duplicate { value: n });
            }
            numbers.push(n);
        }

        numbers.sort_unstable();
        Ok(Self(numbers))
    }

    /// Caller guarantees `numbers` are distinct and in range.
    pub(crate) fn from_numbers(mut numbers: Vec<Number>) -> Self {
        numbers.sort_unstable();
        Self(numbers)
    }

    pub fn numbers(&self) -> &[Number] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, n: Number) -> bool {
        self.0.binary_search(&n).is_ok()
    }

    /// Numbers shared with `other`, ascending.
    pub fn intersection(&self, other: &Combination) -> Vec<Number> {
        self.0.iter().copied().filter(|&n| other.contains(n)).collect()
    }

    /// Numbers of `self` absent from `other`, ascending.
    pub fn difference(&self, other: &Combination) -> Vec<Number> {
        self.0.iter().copied().filter(|&n| !other.contains(n)).collect()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");
        write!(f, "{joined}")
    }
}

/// A validated combination along with its 1-based position in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub index: usize,
    pub combination: Combination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.low(), 1);
        assert_eq!(rules.high(), 36);
        assert_eq!(rules.pick_count(), 7);
        assert_eq!(rules.max_submissions(), 200);
        assert_eq!(rules.retry_limit(), 10_000);
        assert_eq!(rules.thresholds(), &[4, 5, 6]);
        assert_eq!(rules.lowest_threshold(), 4);
        assert_eq!(rules.pool_size(), 36);
    }

    #[test]
    fn test_rules_reject_impossible_shapes() {
        assert!(Rules::new(10, 1, 3, 10, 10, &[2]).is_err());
        assert!(Rules::new(1, 5, 6, 10, 10, &[2]).is_err());
        assert!(Rules::new(1, 5, 3, 10, 0, &[2]).is_err());
        assert!(Rules::new(1, 5, 3, 10, 10, &[]).is_err());
        assert!(Rules::new(1, 5, 3, 10, 10, &[4]).is_err());
    }

    #[test]
    fn test_rules_sort_thresholds() {
        let rules = Rules::new(1, 10, 4, 10, 10, &[3, 2, 3]).unwrap();
        assert_eq!(rules.thresholds(), &[2, 3]);
        assert_eq!(rules.lowest_threshold(), 2);
    }

    #[test]
    fn test_combination_ok() {
        let rules = Rules::default();
        let c = Combination::new(&rules, &[7, 1, 36, 2, 3, 4, 5]).unwrap();
        assert_eq!(c.numbers(), &[1, 2, 3, 4, 5, 7, 36]);
    }

    #[test]
    fn test_combination_order_independent() {
        let rules = Rules::default();
        let a = Combination::new(&rules, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
        let b = Combination::new(&rules, &[7, 6, 5, 4, 3, 2, 1]).unwrap();
        assert_eq!(a, b);

        let set: HashSet<Combination> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_combination_wrong_length() {
        let rules = Rules::default();
        assert_eq!(
            Combination::new(&rules, &[1, 2, 3, 4, 5, 6]),
            Err(CombinationFault::WrongLength { expected: 7, actual: 6 })
        );
        assert!(Combination::new(&rules, &[1, 2, 3, 4, 5, 6, 7, 8]).is_err());
        assert!(Combination::new(&rules, &[]).is_err());
    }

    #[test]
    fn test_combination_out_of_range() {
        let rules = Rules::default();
        assert_eq!(
            Combination::new(&rules, &[0, 1, 2, 3, 4, 5, 6]),
            Err(CombinationFault::OutOfRange { value: 0, low: 1, high: 36 })
        );
        assert!(Combination::new(&rules, &[1, 2, 3, 4, 5, 6, 37]).is_err());
        assert!(Combination::new(&rules, &[1, 2, 3, 4, 5, 6, -1]).is_err());
        // must not wrap around when narrowed to u8
        assert!(Combination::new(&rules, &[1, 2, 3, 4, 5, 6, 257]).is_err());
    }

    #[test]
    fn test_combination_duplicate() {
        let rules = Rules::default();
        assert_eq!(
            Combination::new(&rules, &[1, 1, 2, 3, 4, 5, 6]),
            Err(CombinationFault::Duplicate { value: 1 })
        );
    }

    #[test]
    fn test_intersection_and_difference() {
        let rules = Rules::default();
        let a = Combination::new(&rules, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
        let b = Combination::new(&rules, &[5, 6, 7, 8, 9, 10, 1]).unwrap();
        assert_eq!(a.intersection(&b), vec![1, 5, 6, 7]);
        assert_eq!(a.difference(&b), vec![2, 3, 4]);
        assert!(a.contains(4));
        assert!(!b.contains(4));
    }

    #[test]
    fn test_display() {
        let rules = Rules::default();
        let c = Combination::new(&rules, &[12, 3, 36, 4, 5, 6, 7]).unwrap();
        assert_eq!(c.to_string(), " 3 -  4 -  5 -  6 -  7 - 12 - 36");
    }

    #[test]
    fn test_serialize_as_plain_list() {
        let rules = Rules::default();
        let c = Combination::new(&rules, &[7, 6, 5, 4, 3, 2, 1]).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "[1,2,3,4,5,6,7]");
    }
}
