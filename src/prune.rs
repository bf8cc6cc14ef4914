//! Unused-import pruning and group collapse.

use log::debug;

use crate::model::{Decl, SourceTree};
use crate::registry::ImportRegistry;

/// Drop every non-sentinel spec the scan never marked used, preserving the
/// relative order of the remainder. Emptied groups are deleted from the
/// tree outright; a group reduced to a single spec renders ungrouped.
/// Returns the removed binding names.
pub fn prune_unused(tree: &mut SourceTree, registry: &ImportRegistry) -> Vec<String> {
    let mut removed = Vec::new();
    for decl in &mut tree.decls {
        let Decl::Import(group) = decl else { continue };
        group.specs.retain(|spec| {
            if spec.is_sentinel() || registry.is_used(spec.binding()) {
                return true;
            }
            removed.push(spec.binding().to_string());
            false
        });
        if group.specs.len() == 1 {
            group.grouped = false;
        }
    }
    tree.decls
        .retain(|decl| !matches!(decl, Decl::Import(group) if group.specs.is_empty()));
    if !removed.is_empty() {
        debug!("pruned {} unused import(s): {:?}", removed.len(), removed);
    }
    removed
}
