//! Rename rules
//!
//! This module contains the settings that describe how a name is rewritten.

use serde::Deserialize;

/// How a base name (without its extension) is rewritten
///
/// An empty string leaves the corresponding step switched off. In a
/// configuration file the rule looks like this:
///
/// ```yaml
/// rename:
///   replace: report
///   with: summary
///   prefix: "2024_"
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RenameRule {
    /// Text put in front of the name
    pub prefix: String,
    /// Text appended to the name, before the extension
    pub suffix: String,
    /// Text to look for in the name
    #[serde(rename = "replace")]
    pub replace_from: String,
    /// Text each occurrence of `replace_from` becomes
    #[serde(rename = "with")]
    pub replace_with: String,
    /// Lets an empty `replace_with` delete `replace_from`; otherwise an empty
    /// `replace_with` switches the replace step off
    pub allow_empty_replacement: bool,
}

impl RenameRule {
    pub fn new() -> Self {
        RenameRule::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn replace(mut self, from: impl Into<String>, with: impl Into<String>) -> Self {
        self.replace_from = from.into();
        self.replace_with = with.into();
        self
    }

    pub fn allow_empty_replacement(mut self, allow: bool) -> Self {
        self.allow_empty_replacement = allow;
        self
    }

    /// Whether the replace step runs
    pub fn replaces(&self) -> bool {
        !self.replace_from.is_empty()
            && (!self.replace_with.is_empty() || self.allow_empty_replacement)
    }

    /// Whether any step of the rule would change a name
    pub fn is_active(&self) -> bool {
        self.replaces() || !self.prefix.is_empty() || !self.suffix.is_empty()
    }

    /// Rewrites a base name: replace first, then prefix, then suffix
    ///
    /// Replacing before adding the affixes keeps the prefix and suffix out
    /// of reach of the replace step.
    pub fn apply(&self, stem: &str) -> String {
        let mut name = if self.replaces() {
            stem.replace(&self.replace_from, &self.replace_with)
        } else {
            stem.to_string()
        };

        if !self.prefix.is_empty() {
            name.insert_str(0, &self.prefix);
        }

        if !self.suffix.is_empty() {
            name.push_str(&self.suffix);
        }

        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_all_occurrences() {
        let rule = RenameRule::new().replace("a", "o");
        assert_eq!(rule.apply("banana"), "bonono");
    }

    #[test]
    fn test_empty_with_is_ignored_by_default() {
        let rule = RenameRule::new().replace("draft_", "");
        assert!(!rule.replaces());
        assert_eq!(rule.apply("draft_notes"), "draft_notes");
    }

    #[test]
    fn test_empty_with_deletes_when_allowed() {
        let rule = RenameRule::new()
            .replace("draft_", "")
            .allow_empty_replacement(true);
        assert_eq!(rule.apply("draft_notes"), "notes");
    }

    #[test]
    fn test_affixes_are_not_replaced() {
        let rule = RenameRule::new()
            .replace("x", "y")
            .prefix("x")
            .suffix("x");
        assert_eq!(rule.apply("axa"), "xayax");
    }

    #[test]
    fn test_inactive_rule() {
        let rule = RenameRule::new();
        assert!(!rule.is_active());
        assert_eq!(rule.apply("unchanged"), "unchanged");
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = "replace: report\nwith: summary\nprefix: \"2024_\"\n";
        let rule: RenameRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            rule,
            RenameRule::new().replace("report", "summary").prefix("2024_")
        );
    }
}
