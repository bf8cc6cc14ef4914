//! Import synthesis: materialize a spec for a qualifier the resolver could
//! map to a canonical path.

use log::debug;

use crate::model::{Decl, ImportGroup, ImportSpec, SourceTree};
use crate::registry::ImportRegistry;

/// Ensure a spec bound to `path` exists. A tree with no import group gets
/// one inserted as the first top-level declaration; the new spec always
/// lands at the front of the FIRST group (final visual ordering belongs to
/// the downstream formatter). The new binding is registered as used so the
/// same-pass prune keeps it. Binding names stay unique: when a spec
/// already owns the path's binding, it is marked used instead of
/// duplicated. Returns whether a spec was actually inserted.
pub fn add_import(tree: &mut SourceTree, registry: &mut ImportRegistry, path: &str) -> bool {
    let spec = ImportSpec::new(path);
    if registry.contains(spec.binding()) {
        registry.mark_used(spec.binding());
        return false;
    }
    if !tree.has_import_group() {
        tree.decls.insert(0, Decl::Import(ImportGroup::default()));
    }
    for decl in &mut tree.decls {
        let Decl::Import(group) = decl else { continue };
        debug!("adding import {:?} bound to {:?}", path, spec.binding());
        registry.register_used(spec.binding(), path);
        group.specs.insert(0, spec);
        group.grouped = group.specs.len() > 1;
        return true;
    }
    false
}
