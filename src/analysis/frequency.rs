//! Symbol frequency statistics.
//!
//! These are sanity checks for gross bias in the digit draws, not proofs of
//! uniformity. A broken mapping from bits to symbols (for example dropping
//! the overdraw, or an off-by-one in a base) shows up quickly here.

/// Occurrence counts for each symbol index of one alphabet.
#[derive(Debug, Clone)]
pub struct SymbolFrequencies {
    /// Count per symbol index.
    counts: Vec<u64>,
    /// Total observations.
    total: u64,
}

impl SymbolFrequencies {
    /// Creates empty counts for an alphabet of `size` symbols.
    pub fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size],
            total: 0,
        }
    }

    /// Records one observation of symbol `index`.
    pub fn record(&mut self, index: usize) {
        self.counts[index] += 1;
        self.total += 1;
    }

    /// Records every index yielded by `indices`.
    pub fn record_all(&mut self, indices: impl IntoIterator<Item = usize>) {
        for index in indices {
            self.record(index);
        }
    }

    /// Returns the count per symbol index.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Returns the number of observations.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Pearson chi-square statistic against the uniform distribution.
    pub fn chi_square(&self) -> f64 {
        if self.total == 0 || self.counts.is_empty() {
            return 0.0;
        }

        let expected = self.total as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum()
    }

    /// Largest relative deviation of any count from its expected value.
    pub fn max_relative_deviation(&self) -> f64 {
        if self.total == 0 || self.counts.is_empty() {
            return 0.0;
        }

        let expected = self.total as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|&c| (c as f64 - expected).abs() / expected)
            .fold(0.0, f64::max)
    }

    /// Returns true if the chi-square statistic is not wildly off.
    ///
    /// The bound is the mean of the chi-square distribution plus six
    /// standard deviations, so a uniform source essentially never fails it.
    pub fn looks_uniform(&self) -> bool {
        let df = self.counts.len().saturating_sub(1) as f64;
        if df == 0.0 {
            return true;
        }
        self.chi_square() <= df + 6.0 * (2.0 * df).sqrt()
    }
}
