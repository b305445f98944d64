use std::collections::HashMap;

use shufl_core::sequence;

/// Tally of shuffle outputs keyed by their dasherized form.
#[derive(Debug, Default)]
pub struct Distribution {
    counts: HashMap<String, u64>,
    total: u64,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies a whole batch of outputs.
    pub fn analyze<I>(outputs: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut distribution = Self::new();
        for output in outputs {
            distribution.record(&output);
        }
        distribution
    }

    pub fn record(&mut self, permutation: &[String]) {
        let key = sequence::to_dasherized(permutation);
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Observed permutation classes only; classes never produced have no
    /// entry.
    pub fn counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Highest-count class. Equal counts fall back to key order so the
    /// answer is stable.
    pub fn largest_class(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(key, count)| (key.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shufl_core::sequence::from_dasherized;

    #[test]
    fn test_record_tallies_by_dasherized_key() {
        let mut distribution = Distribution::new();
        distribution.record(&from_dasherized("B-A"));
        distribution.record(&from_dasherized("A-B"));
        distribution.record(&from_dasherized("B-A"));
        assert_eq!(distribution.total(), 3);
        assert_eq!(distribution.distinct(), 2);
        assert_eq!(distribution.counts().get("B-A"), Some(&2));
        assert_eq!(distribution.counts().get("A-B"), Some(&1));
    }

    #[test]
    fn test_analyze_aggregates_a_batch() {
        let outputs = vec![
            from_dasherized("A-B"),
            from_dasherized("A-B"),
            from_dasherized("B-A"),
        ];
        let distribution = Distribution::analyze(outputs);
        assert_eq!(distribution.total(), 3);
        assert_eq!(distribution.largest_class(), Some(("A-B", 2)));
    }

    #[test]
    fn test_largest_class_breaks_ties_by_key() {
        let mut distribution = Distribution::new();
        distribution.record(&from_dasherized("B-A"));
        distribution.record(&from_dasherized("A-B"));
        assert_eq!(distribution.largest_class(), Some(("A-B", 1)));
    }
}
