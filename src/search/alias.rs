use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use crate::search::normalize::normalize;

/// Shorthand queries shipped with the service: (alias, canonical name).
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("rdr2", "red dead redemption 2"),
    ("reddead2", "red dead redemption 2"),
    ("fifa", "fifa 23"),
    ("fifa23", "fifa 23"),
    ("split", "split fiction"),
    ("gta5", "grand theft auto v"),
    ("gtav", "grand theft auto v"),
    ("cp2077", "cyberpunk 2077"),
];

/// Immutable map from normalized shorthand to normalized canonical name.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// The built-in aliases.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ALIASES.iter().copied())
    }

    /// Build a table from arbitrary pairs. Keys and values are normalized;
    /// pairs whose key or value normalizes to empty are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for (alias, canonical) in pairs {
            let alias = normalize(alias.as_ref());
            let canonical = normalize(canonical.as_ref());
            if alias.is_empty() || canonical.is_empty() {
                continue;
            }
            entries.insert(alias, canonical);
        }
        Self { entries }
    }

    /// Built-ins overlaid with a JSON object file (`{"alias": "Canonical"}`).
    /// File entries win over built-ins.
    pub fn builtin_with_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read alias file {}", path.display()))?;
        let extra: HashMap<String, String> = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse alias file {}", path.display()))?;

        let mut table = Self::builtin();
        let overlay = Self::from_pairs(extra);
        table.entries.extend(overlay.entries);
        Ok(table)
    }

    /// Exact lookup on an already-normalized query. No partial matching.
    pub fn resolve(&self, normalized_query: &str) -> Option<&str> {
        self.entries.get(normalized_query).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_aliases_resolve() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("split"), Some("split fiction"));
        assert_eq!(table.resolve("rdr2"), Some("red dead redemption 2"));
        assert_eq!(table.resolve("reddead2"), Some("red dead redemption 2"));
        assert_eq!(table.resolve("fifa"), Some("fifa 23"));
        assert_eq!(table.resolve("fifa23"), Some("fifa 23"));
    }

    #[test]
    fn test_no_partial_matching() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("spl"), None);
        assert_eq!(table.resolve("split fiction"), None);
        assert_eq!(table.resolve("rdr"), None);
    }

    #[test]
    fn test_pairs_are_normalized() {
        let table = AliasTable::from_pairs([("  ER ", "Elden Ring"), ("", "ignored"), ("x", "  ")]);
        assert_eq!(table.resolve("er"), Some("elden ring"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_file_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(&path, r#"{"fifa": "FIFA 24", "botw": "Breath of the Wild"}"#).unwrap();

        let table = AliasTable::builtin_with_file(&path).unwrap();
        assert_eq!(table.resolve("fifa"), Some("fifa 24"));
        assert_eq!(table.resolve("botw"), Some("breath of the wild"));
        assert_eq!(table.resolve("split"), Some("split fiction"));
    }

    #[test]
    fn test_bad_alias_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(AliasTable::builtin_with_file(&path).is_err());
        assert!(AliasTable::builtin_with_file(&dir.path().join("missing.json")).is_err());
    }
}
