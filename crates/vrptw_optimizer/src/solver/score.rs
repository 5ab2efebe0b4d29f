use std::{cmp::Ordering, fmt};

use serde::Serialize;

/// Objective value of a solution. Lower is better.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct Score {
    pub value: f64,
}

impl Score {
    pub fn new(value: f64) -> Self {
        Score { value }
    }

    /// `true` when `self` beats `other` by more than `epsilon`.
    pub fn improves_on(&self, other: &Score, epsilon: f64) -> bool {
        self.value + epsilon < other.value
    }
}

impl Eq for Score {}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Breakdown of a [`Score`] into its raw, unweighted components.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ScoreAnalysis {
    pub score: Score,
    pub distance: f64,
    pub penalty: i64,
    pub vehicle_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_cmp() {
        assert!(Score::new(1.0) < Score::new(2.0));
        assert!(Score::new(-1.0) < Score::new(0.0));
        assert!(Score::new(f64::MAX) > Score::new(1e300));

        let scores = [Score::new(3.0), Score::new(1.5), Score::new(2.0)];
        assert_eq!(scores.iter().min(), Some(&Score::new(1.5)));
    }

    #[test]
    fn test_improves_on() {
        let current = Score::new(10.0);

        assert!(Score::new(9.98).improves_on(&current, 1e-2));
        assert!(!Score::new(9.995).improves_on(&current, 1e-2));
        assert!(!Score::new(10.0).improves_on(&current, 1e-2));
    }
}
