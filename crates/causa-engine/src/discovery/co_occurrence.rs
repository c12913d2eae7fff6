//! Co-occurrence counting and the correlation proxy.
//! `correlation(a, b) = co(a, b) / sqrt(count(a) · count(b))`.

use std::collections::BTreeMap;

use causa_core::models::Observation;

/// A pair of variables that co-occur strongly enough to be a candidate link.
/// `first < second` lexicographically; direction is decided later.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub first: String,
    pub second: String,
    pub co_count: usize,
    pub correlation: f64,
}

/// Per-variable and per-pair occurrence counts over a batch.
#[derive(Debug, Default)]
pub struct CoOccurrence {
    counts: BTreeMap<String, usize>,
    pairs: BTreeMap<(String, String), usize>,
}

impl CoOccurrence {
    pub fn count(observations: &[Observation]) -> Self {
        let mut table = Self::default();
        for observation in observations {
            let occurring: Vec<&str> = observation.occurring().into_iter().collect();
            for (i, a) in occurring.iter().enumerate() {
                *table.counts.entry((*a).to_string()).or_default() += 1;
                for b in &occurring[i + 1..] {
                    *table
                        .pairs
                        .entry(((*a).to_string(), (*b).to_string()))
                        .or_default() += 1;
                }
            }
        }
        table
    }

    pub fn occurrences(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn correlation(&self, a: &str, b: &str, co_count: usize) -> f64 {
        let denominator = (self.occurrences(a) as f64 * self.occurrences(b) as f64).sqrt();
        if denominator == 0.0 {
            return 0.0;
        }
        co_count as f64 / denominator
    }

    /// Pairs above `threshold` (strict) with at least `min_support`
    /// co-occurrences, in lexicographic order.
    pub fn candidates(&self, threshold: f64, min_support: usize) -> Vec<Candidate> {
        self.pairs
            .iter()
            .filter(|(_, &co)| co >= min_support)
            .filter_map(|((a, b), &co)| {
                let correlation = self.correlation(a, b, co);
                (correlation > threshold).then(|| Candidate {
                    first: a.clone(),
                    second: b.clone(),
                    co_count: co,
                    correlation,
                })
            })
            .collect()
    }
}
