//! Weighted categorical sampler.

use crate::generator::GeneratorError;
use rand::Rng;

/// Picks one label according to relative weights.
///
/// The cumulative weight table is built once; [`pick`](Self::pick) is a
/// single draw plus a binary search, and never mutates the picker, so one
/// instance can be shared by every row (and every thread).
#[derive(Debug, Clone)]
pub struct WeightedPicker<T> {
    labels: Vec<T>,
    cumulative: Vec<f64>,
    total: f64,
}

impl<T> WeightedPicker<T> {
    /// Build a picker from parallel label and weight lists.
    ///
    /// Fails with [`GeneratorError::Configuration`] if the lists are empty,
    /// differ in length, or the weights do not add up to a positive total.
    pub fn new(labels: Vec<T>, weights: &[f64]) -> Result<Self, GeneratorError> {
        if labels.is_empty() {
            return Err(GeneratorError::Configuration(
                "weighted picker needs at least one label".to_string(),
            ));
        }
        if labels.len() != weights.len() {
            return Err(GeneratorError::Configuration(format!(
                "weighted picker got {} labels but {} weights",
                labels.len(),
                weights.len()
            )));
        }

        let mut total = 0.0;
        let cumulative: Vec<f64> = weights
            .iter()
            .map(|w| {
                total += *w;
                total
            })
            .collect();

        if !total.is_finite() || total <= 0.0 {
            return Err(GeneratorError::Configuration(format!(
                "weighted picker weights must sum to a positive value (got {total})"
            )));
        }

        Ok(Self {
            labels,
            cumulative,
            total,
        })
    }

    /// Build a picker from `(label, weight)` pairs, keeping their order.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (labels, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        Self::new(labels, &weights)
    }

    /// Draw one label.
    ///
    /// Consumes exactly one `f64` from `rng`. Returns the first label whose
    /// cumulative weight is `>=` the draw, so ties resolve to the earliest
    /// label in input order.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &T {
        let draw = rng.random::<f64>() * self.total;
        let idx = self.cumulative.partition_point(|c| *c < draw);
        // partition_point can only run off the end through float rounding.
        &self.labels[idx.min(self.labels.len() - 1)]
    }

    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_rejected() {
        let result = WeightedPicker::<&str>::new(vec![], &[]);
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = WeightedPicker::new(vec!["a", "b"], &[1.0]);
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_zero_total_rejected() {
        let result = WeightedPicker::new(vec!["a", "b"], &[0.0, 0.0]);
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_single_label_always_picked() {
        let picker = WeightedPicker::new(vec!["only"], &[1.0]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(*picker.pick(&mut rng), "only");
        }
    }

    #[test]
    fn test_zero_weight_label_never_picked() {
        let picker = WeightedPicker::new(vec!["a", "never", "b"], &[0.5, 0.0, 0.5]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..10_000 {
            assert_ne!(*picker.pick(&mut rng), "never");
        }
    }

    #[test]
    fn test_convergence() {
        let picker = WeightedPicker::from_pairs([("a", 0.7), ("b", 0.3)]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let samples = 100_000;
        let a_count = (0..samples)
            .filter(|_| *picker.pick(&mut rng) == "a")
            .count();
        let a_freq = a_count as f64 / samples as f64;

        assert!((a_freq - 0.7).abs() < 0.01, "a frequency was {a_freq}");
        assert!(((1.0 - a_freq) - 0.3).abs() < 0.01);
    }

    #[test]
    fn test_same_stream_same_picks() {
        let picker = WeightedPicker::from_pairs([("a", 0.2), ("b", 0.5), ("c", 0.3)]).unwrap();
        let mut rng1 = ChaCha8Rng::seed_from_u64(9);
        let mut rng2 = ChaCha8Rng::seed_from_u64(9);

        let picks1: Vec<&str> = (0..50).map(|_| *picker.pick(&mut rng1)).collect();
        let picks2: Vec<&str> = (0..50).map(|_| *picker.pick(&mut rng2)).collect();
        assert_eq!(picks1, picks2);
    }

    #[test]
    fn test_accessors() {
        let picker = WeightedPicker::from_pairs([("a", 0.25), ("b", 0.75)]).unwrap();
        assert_eq!(picker.labels(), &["a", "b"]);
        assert_eq!(picker.total(), 1.0);
    }
}
