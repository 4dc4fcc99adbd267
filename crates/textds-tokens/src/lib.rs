/// Whitespace-word token estimator
///
/// Deliberately not a real tokenizer: records carry an estimate, and the
/// word count is stable, dependency-free, and good enough for dataset
/// sizing.
pub struct TokenEstimator;

impl TokenEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimate token count for a single string
    pub fn estimate(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// Estimate tokens for multiple strings (batch processing)
    pub fn estimate_batch(&self, texts: &[&str]) -> Vec<usize> {
        texts.iter().map(|text| self.estimate(text)).collect()
    }
}

impl Default for TokenEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_estimation() {
        let estimator = TokenEstimator::new();

        assert_eq!(estimator.estimate("Hello, world!"), 2);
        assert_eq!(estimator.estimate(""), 0);
        assert_eq!(estimator.estimate("  padded   words  "), 2);
        assert_eq!(estimator.estimate("line\nbreaks\ncount"), 3);
    }

    #[test]
    fn test_batch_estimation() {
        let estimator = TokenEstimator::new();

        let texts = vec!["Hello", "two words", ""];
        assert_eq!(estimator.estimate_batch(&texts), vec![1, 2, 0]);
    }
}
