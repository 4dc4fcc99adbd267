use serde::Serialize;

use textds_core::Record;

/// Token-count summary over the full deduplicated record set.
#[derive(Debug, Clone, Serialize)]
pub struct TokenStats {
    pub records: usize,
    pub tokens_est: TokenSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenSummary {
    pub min: usize,
    pub max: usize,
    /// Rounded to two decimal places
    pub mean: f64,
    pub p50: usize,
}

impl TokenStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut counts: Vec<usize> = records.into_iter().map(|r| r.tokens_est).collect();
        counts.sort_unstable();

        if counts.is_empty() {
            return Self {
                records: 0,
                tokens_est: TokenSummary {
                    min: 0,
                    max: 0,
                    mean: 0.0,
                    p50: 0,
                },
            };
        }

        let n = counts.len();
        let sum: usize = counts.iter().sum();
        let mean = (sum as f64 / n as f64 * 100.0).round() / 100.0;

        Self {
            records: n,
            tokens_est: TokenSummary {
                min: counts[0],
                max: counts[n - 1],
                mean,
                p50: counts[n / 2],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textds_core::sha1_hex;

    fn record(tokens: usize) -> Record {
        let text = "w ".repeat(tokens).trim_end().to_string();
        Record {
            id: sha1_hex("doc:0"),
            source_path: "a.txt".to_string(),
            title: "a".to_string(),
            hash: sha1_hex(&text),
            text,
            tokens_est: tokens,
            tags: vec![],
        }
    }

    #[test]
    fn test_summary_values() {
        let records = vec![record(10), record(20), record(31)];
        let stats = TokenStats::from_records(&records);

        assert_eq!(stats.records, 3);
        assert_eq!(stats.tokens_est.min, 10);
        assert_eq!(stats.tokens_est.max, 31);
        assert_eq!(stats.tokens_est.p50, 20);
        assert_eq!(stats.tokens_est.mean, 20.33);
    }

    #[test]
    fn test_empty_set() {
        let empty: Vec<Record> = vec![];
        let stats = TokenStats::from_records(&empty);
        assert_eq!(stats.records, 0);
        assert_eq!(stats.tokens_est.mean, 0.0);
    }

    #[test]
    fn test_mean_rounding() {
        let records = vec![record(1), record(2)];
        let stats = TokenStats::from_records(&records);
        assert_eq!(stats.tokens_est.mean, 1.5);
    }
}
