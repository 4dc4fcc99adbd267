use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use textds_core::{Error, Record, Result};

/// Train/val/test percentages, validated to sum to 100.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SplitSpec {
    pub train: u32,
    pub val: u32,
    pub test: u32,
}

impl SplitSpec {
    /// Parse `"train,val,test"` (e.g. `"90,5,5"`).
    pub fn parse(spec: &str) -> Result<Self> {
        let parts: Vec<u32> = spec
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| Error::InvalidSplitSpec(spec.to_string()))?;

        let [train, val, test] = parts[..] else {
            return Err(Error::InvalidSplitSpec(spec.to_string()));
        };
        // sum in u64: percentages up to u32::MAX must reject, not wrap
        if u64::from(train) + u64::from(val) + u64::from(test) != 100 {
            return Err(Error::InvalidSplitSpec(spec.to_string()));
        }

        Ok(Self { train, val, test })
    }
}

/// Shuffle records with a seeded RNG and cut into three splits.
///
/// Cut points use floor division, so val and train may round down and the
/// remainder lands in test. Same records and same seed give identical
/// membership on every run.
pub fn partition(
    mut records: Vec<Record>,
    spec: &SplitSpec,
    seed: u64,
) -> (Vec<Record>, Vec<Record>, Vec<Record>) {
    let mut rng = StdRng::seed_from_u64(seed);
    records.shuffle(&mut rng);

    let n = records.len();
    let train_cut = n * spec.train as usize / 100;
    let val_cut = train_cut + n * spec.val as usize / 100;

    let test = records.split_off(val_cut);
    let val = records.split_off(train_cut);
    (records, val, test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use textds_core::sha1_hex;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                let text = format!("record number {i}");
                Record {
                    id: sha1_hex(&format!("doc:{i}")),
                    source_path: format!("{i}.txt"),
                    title: format!("{i}"),
                    tokens_est: 3,
                    hash: sha1_hex(&text),
                    text,
                    tags: vec![],
                }
            })
            .collect()
    }

    #[test]
    fn test_parse_valid() {
        let spec = SplitSpec::parse("80,10,10").unwrap();
        assert_eq!((spec.train, spec.val, spec.test), (80, 10, 10));

        let spec = SplitSpec::parse(" 100, 0, 0 ").unwrap();
        assert_eq!((spec.train, spec.val, spec.test), (100, 0, 0));
    }

    #[test]
    fn test_parse_rejects_bad_specs() {
        assert!(SplitSpec::parse("80,10").is_err());
        assert!(SplitSpec::parse("80,10,5").is_err());
        assert!(SplitSpec::parse("eighty,10,10").is_err());
        assert!(SplitSpec::parse("80,10,10,0").is_err());
        assert!(SplitSpec::parse("-80,170,10").is_err());
    }

    #[test]
    fn test_parse_rejects_wrapping_sums() {
        // 4294967295 + 101 wraps to 100 in u32 arithmetic
        assert!(SplitSpec::parse("4294967295,101,0").is_err());
        assert!(SplitSpec::parse("4294967295,1,100").is_err());
    }

    #[test]
    fn test_partition_sizes() {
        let spec = SplitSpec::parse("80,10,10").unwrap();
        let (train, val, test) = partition(records(100), &spec, 17);
        assert_eq!(train.len(), 80);
        assert_eq!(val.len(), 10);
        assert_eq!(test.len(), 10);
    }

    #[test]
    fn test_splits_are_disjoint_and_complete() {
        let spec = SplitSpec::parse("80,10,10").unwrap();
        let all = records(100);
        let expected: HashSet<String> = all.iter().map(|r| r.id.clone()).collect();

        let (train, val, test) = partition(all, &spec, 17);
        let mut seen = HashSet::new();
        for record in train.iter().chain(&val).chain(&test) {
            assert!(seen.insert(record.id.clone()), "duplicate id across splits");
        }
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_same_seed_same_membership() {
        let spec = SplitSpec::parse("70,20,10").unwrap();
        let (a_train, a_val, a_test) = partition(records(50), &spec, 17);
        let (b_train, b_val, b_test) = partition(records(50), &spec, 17);

        let ids = |v: &[Record]| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a_train), ids(&b_train));
        assert_eq!(ids(&a_val), ids(&b_val));
        assert_eq!(ids(&a_test), ids(&b_test));
    }

    #[test]
    fn test_remainder_goes_to_test() {
        let spec = SplitSpec::parse("90,5,5").unwrap();
        // 7 records: floor gives train 6, val 0, test the remaining 1
        let (train, val, test) = partition(records(7), &spec, 17);
        assert_eq!(train.len(), 6);
        assert_eq!(val.len(), 0);
        assert_eq!(test.len(), 1);
    }
}
