use std::path::Path;

use glob::Pattern;
use tracing::warn;

/// Compiled ingestion denylist.
///
/// Pattern strings come from config; one that fails to compile is logged
/// and ignored rather than aborting the build, so a typo in one rule
/// never disables the rest of the list.
pub struct Denylist {
    rules: Vec<Pattern>,
}

impl Denylist {
    pub fn new(patterns: Vec<String>) -> Self {
        let mut rules = Vec::with_capacity(patterns.len());
        for raw in patterns {
            match Pattern::new(&raw) {
                Ok(pattern) => rules.push(pattern),
                Err(e) => warn!("Ignoring invalid denylist pattern {:?}: {}", raw, e),
            }
        }
        Self { rules }
    }

    /// The first pattern excluding `path`, or `None` when the file is
    /// allowed. The pattern string doubles as the skip reason in logs.
    pub fn deny_reason(&self, path: &Path) -> Option<&str> {
        let text = path.to_string_lossy();
        self.rules
            .iter()
            .find(|pattern| pattern.matches(&text))
            .map(|pattern| pattern.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn denylist(patterns: &[&str]) -> Denylist {
        Denylist::new(patterns.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_deny_reason_names_the_pattern() {
        let deny = denylist(&["**/.env*", "**/*.key"]);

        assert_eq!(deny.deny_reason(&PathBuf::from(".env")), Some("**/.env*"));
        assert_eq!(
            deny.deny_reason(&PathBuf::from("notes/api.key")),
            Some("**/*.key")
        );
        assert_eq!(deny.deny_reason(&PathBuf::from("journal.txt")), None);
    }

    #[test]
    fn test_directory_patterns() {
        let deny = denylist(&["**/secrets/**"]);

        assert!(deny.deny_reason(&PathBuf::from("secrets/notes.txt")).is_some());
        assert!(deny
            .deny_reason(&PathBuf::from("home/user/secrets/plan.md"))
            .is_some());
        assert!(deny.deny_reason(&PathBuf::from("secret_recipes.txt")).is_none());
    }

    #[test]
    fn test_invalid_pattern_ignored() {
        // "[" is not a valid glob; the valid rule still applies
        let deny = denylist(&["[", "**/*.pem"]);

        assert!(deny.deny_reason(&PathBuf::from("certs/server.pem")).is_some());
        assert!(deny.deny_reason(&PathBuf::from("journal.txt")).is_none());
    }

    #[test]
    fn test_empty_list_allows_everything() {
        let deny = denylist(&[]);
        assert!(deny.is_empty());
        assert!(deny.deny_reason(&PathBuf::from(".env")).is_none());
    }
}
