//! Resolver boundary: maps a free qualifier and its observed member symbols
//! to a canonical import path. Implementations are injected into the
//! pipeline so a static table or a workspace index can be swapped without
//! touching the stages.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

/// The resolver's backing index could not be reached. This is the one
/// condition that aborts the whole pipeline for a tree; "no mapping found"
/// is reported as `Ok(None)`, never as this error.
#[derive(Debug, Error)]
#[error("import resolution backend unavailable: {reason}")]
pub struct ResolutionUnavailable {
    pub reason: String,
}

impl ResolutionUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

pub trait Resolver {
    /// Resolve `qualifier` to a canonical import path. `Ok(None)` means no
    /// mapping exists and callers treat it as a silent no-op. When several
    /// symbols were observed, any one of them may serve as the
    /// representative; only one path is ever needed per qualifier in a
    /// single pass.
    fn resolve(
        &self,
        qualifier: &str,
        symbols: &BTreeSet<String>,
    ) -> Result<Option<String>, ResolutionUnavailable>;
}

/// Static `qualifier.symbol -> path` lookup table, the default resolver
/// strategy.
#[derive(Debug, Clone, Default)]
pub struct TableResolver {
    table: HashMap<String, String>,
}

impl TableResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, qualifier: &str, symbol: &str, path: impl Into<String>) {
        self.table.insert(format!("{}.{}", qualifier, symbol), path.into());
    }

    /// Build from `("qualifier.Symbol", path)` pairs.
    pub fn from_pairs<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut resolver = Self::default();
        for (key, path) in entries {
            resolver.table.insert(key.to_string(), path.to_string());
        }
        resolver
    }
}

impl Resolver for TableResolver {
    fn resolve(
        &self,
        qualifier: &str,
        symbols: &BTreeSet<String>,
    ) -> Result<Option<String>, ResolutionUnavailable> {
        for symbol in symbols {
            if let Some(path) = self.table.get(&format!("{}.{}", qualifier, symbol)) {
                return Ok(Some(path.clone()));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn table_hit_through_any_observed_symbol() {
        let resolver = TableResolver::from_pairs([("bytes.NewReader", "bytes")]);
        let path = resolver.resolve("bytes", &symbols(&["Buffer", "NewReader"])).unwrap();
        assert_eq!(path.as_deref(), Some("bytes"));
    }

    #[test]
    fn miss_is_ok_none() {
        let resolver = TableResolver::new();
        let path = resolver.resolve("bytes", &symbols(&["Buffer"])).unwrap();
        assert!(path.is_none());
    }

    #[test]
    fn insert_builds_the_same_key_shape() {
        let mut resolver = TableResolver::new();
        resolver.insert("zip", "NewReader", "archive/zip");
        let path = resolver.resolve("zip", &symbols(&["NewReader"])).unwrap();
        assert_eq!(path.as_deref(), Some("archive/zip"));
    }

    #[test]
    fn unavailable_formats_reason() {
        let err = ResolutionUnavailable::new("index offline");
        assert!(err.to_string().contains("index offline"));
    }
}
