//! Bookkeeping for the file's current import declarations, keyed by local
//! binding name, together with the "used" marks accumulated by the scan.

use std::collections::HashMap;

use crate::model::SourceTree;

#[derive(Debug, Default)]
pub struct ImportRegistry {
    entries: HashMap<String, Entry>,
}

#[derive(Debug)]
struct Entry {
    path: String,
    used: bool,
}

impl ImportRegistry {
    /// Gather every non-sentinel spec currently declared by the tree, all
    /// initially unused. Sentinel specs never produce a unique binding and
    /// are not tracked.
    pub fn collect(tree: &SourceTree) -> Self {
        let mut registry = Self::default();
        for group in tree.import_groups() {
            for spec in &group.specs {
                if spec.is_sentinel() {
                    continue;
                }
                registry.entries.insert(
                    spec.binding().to_string(),
                    Entry { path: spec.path.clone(), used: false },
                );
            }
        }
        registry
    }

    pub fn contains(&self, binding: &str) -> bool {
        self.entries.contains_key(binding)
    }

    pub fn mark_used(&mut self, binding: &str) {
        if let Some(entry) = self.entries.get_mut(binding) {
            entry.used = true;
        }
    }

    pub fn is_used(&self, binding: &str) -> bool {
        self.entries.get(binding).map(|entry| entry.used).unwrap_or(false)
    }

    /// Record a spec created by the synthesizer. It exists because a live
    /// reference demanded it, so it starts out used and survives the
    /// same-pass prune.
    pub fn register_used(&mut self, binding: impl Into<String>, path: impl Into<String>) {
        self.entries.insert(binding.into(), Entry { path: path.into(), used: true });
    }

    pub fn path_of(&self, binding: &str) -> Option<&str> {
        self.entries.get(binding).map(|entry| entry.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
