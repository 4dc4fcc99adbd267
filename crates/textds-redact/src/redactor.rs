use regex::Regex;
use std::collections::BTreeMap;

use crate::patterns;
use crate::pseudonym::PseudonymTable;

/// Every category the redactor reports, in application order. All keys are
/// present in the returned count map even when nothing matched.
pub const CATEGORIES: &[&str] = &[
    "email",
    "phone",
    "ssn",
    "credit_card",
    "ip",
    "url",
    "date",
    "name",
    "location",
    "pronoun",
    "relation",
];

#[derive(Debug, Clone, Default)]
pub struct RedactOptions {
    /// Skip the URL detector entirely
    pub keep_urls: bool,
}

/// One entry in the ordered detector list.
enum Stage {
    /// Fixed literal placeholder, one per category
    Structural {
        category: &'static str,
        pattern: &'static Regex,
        placeholder: &'static str,
    },
    /// Numeric and month-name dates, pseudonymized per distinct literal
    Dates,
    /// Configured term list, whole-word case-insensitive, pseudonymized
    Terms {
        category: &'static str,
        token_prefix: &'static str,
        terms: Vec<Regex>,
    },
    /// First-person pronoun rewriting
    Pronouns(Vec<(Regex, &'static str)>),
}

/// Ordered-detector redaction engine.
///
/// The stage order is the contract: overlapping matches resolve
/// deterministically because earlier detectors consume their text first.
pub struct Redactor {
    stages: Vec<Stage>,
}

impl Redactor {
    pub fn new(names: &[String], locations: &[String], relations: &[String]) -> Self {
        let pronouns = patterns::PRONOUN_RULES
            .iter()
            .map(|(pat, repl)| (Regex::new(pat).expect("pronoun rule"), *repl))
            .collect();

        let stages = vec![
            Stage::Structural {
                category: "email",
                pattern: &patterns::EMAIL,
                placeholder: "<EMAIL>",
            },
            Stage::Structural {
                category: "phone",
                pattern: &patterns::PHONE,
                placeholder: "<PHONE>",
            },
            Stage::Structural {
                category: "ssn",
                pattern: &patterns::SSN,
                placeholder: "<SSN>",
            },
            Stage::Structural {
                category: "credit_card",
                pattern: &patterns::CREDIT_CARD,
                placeholder: "<CREDIT_CARD>",
            },
            Stage::Structural {
                category: "ip",
                pattern: &patterns::IP,
                placeholder: "<IP>",
            },
            Stage::Structural {
                category: "url",
                pattern: &patterns::URL,
                placeholder: "<URL>",
            },
            Stage::Dates,
            Stage::Terms {
                category: "name",
                token_prefix: "NAME",
                terms: compile_terms(names),
            },
            Stage::Terms {
                category: "location",
                token_prefix: "LOC",
                terms: compile_terms(locations),
            },
            Stage::Pronouns(pronouns),
            Stage::Terms {
                category: "relation",
                token_prefix: "RELATION",
                terms: compile_terms(relations),
            },
        ];

        Self { stages }
    }

    /// Redact `text`, returning the redacted string and per-category match
    /// counts. Never fails; any input produces a result. Pseudonym
    /// assignments accumulate in `table` across calls within one run.
    pub fn redact(
        &self,
        text: &str,
        options: &RedactOptions,
        table: &mut PseudonymTable,
    ) -> (String, BTreeMap<String, usize>) {
        let mut counts: BTreeMap<String, usize> =
            CATEGORIES.iter().map(|c| ((*c).to_string(), 0)).collect();
        let mut result = text.to_string();

        for stage in &self.stages {
            match stage {
                Stage::Structural {
                    category,
                    pattern,
                    placeholder,
                } => {
                    if *category == "url" && options.keep_urls {
                        continue;
                    }
                    let count = pattern.find_iter(&result).count();
                    if count > 0 {
                        result = pattern.replace_all(&result, *placeholder).to_string();
                        *counts.entry((*category).to_string()).or_default() += count;
                    }
                }
                Stage::Dates => {
                    for pattern in [&*patterns::DATE_NUMERIC, &*patterns::DATE_MONTH] {
                        let mut count = 0;
                        result = pattern
                            .replace_all(&result, |caps: &regex::Captures<'_>| {
                                count += 1;
                                table.token_for("DATE", &caps[0])
                            })
                            .to_string();
                        *counts.entry("date".to_string()).or_default() += count;
                    }
                }
                Stage::Terms {
                    category,
                    token_prefix,
                    terms,
                } => {
                    for pattern in terms {
                        let mut count = 0;
                        result = pattern
                            .replace_all(&result, |caps: &regex::Captures<'_>| {
                                count += 1;
                                table.token_for(token_prefix, &caps[0])
                            })
                            .to_string();
                        *counts.entry((*category).to_string()).or_default() += count;
                    }
                }
                Stage::Pronouns(rules) => {
                    for (pattern, replacement) in rules {
                        let count = pattern.find_iter(&result).count();
                        if count > 0 {
                            result = pattern.replace_all(&result, *replacement).to_string();
                            *counts.entry("pronoun".to_string()).or_default() += count;
                        }
                    }
                }
            }
        }

        (result, counts)
    }
}

fn compile_terms(terms: &[String]) -> Vec<Regex> {
    terms
        .iter()
        .filter(|t| !t.trim().is_empty())
        .filter_map(|t| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(t))).ok())
        .collect()
}
