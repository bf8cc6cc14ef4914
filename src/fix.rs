//! Pipeline entry point. Runs scan → resolve & synthesize → prune exactly
//! once over a single tree and reports what changed.

use log::{debug, trace};
use serde::Serialize;

use crate::model::SourceTree;
use crate::prune::prune_unused;
use crate::registry::ImportRegistry;
use crate::resolve::{ResolutionUnavailable, Resolver};
use crate::scan::scan;
use crate::synth::add_import;

/// One import synthesized during a fix pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedImport {
    /// Qualifier whose reference demanded the import.
    pub qualifier: String,
    /// Canonical path the resolver produced for it.
    pub path: String,
}

/// Outcome of a fix pass, for callers that render diffs or summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixReport {
    pub added: Vec<AddedImport>,
    /// Binding names of the specs the prune removed.
    pub removed: Vec<String>,
}

impl FixReport {
    pub fn changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Reconcile the tree's imports with the references it actually makes.
///
/// The four stages run once, in fixed order; there is no fixed-point loop,
/// so a qualifier that only becomes resolvable because of an import added
/// in the same pass is not re-examined. A second invocation on the fixed
/// tree finds nothing to resolve and nothing unused, hence mutates nothing.
///
/// An unresolvable qualifier is a silent no-op. [`ResolutionUnavailable`]
/// aborts the pass immediately; imports already synthesized in this pass
/// are left in place, not rolled back.
pub fn fix_imports(
    tree: &mut SourceTree,
    resolver: &dyn Resolver,
) -> Result<FixReport, ResolutionUnavailable> {
    let mut registry = ImportRegistry::collect(tree);
    let table = scan(tree, &mut registry);
    debug!(
        "scan: {} declared binding(s), {} unresolved qualifier(s)",
        registry.len(),
        table.len()
    );

    let mut report = FixReport::default();
    for (qualifier, symbols) in table.iter() {
        match resolver.resolve(qualifier, symbols)? {
            Some(path) => {
                if add_import(tree, &mut registry, &path) {
                    report.added.push(AddedImport { qualifier: qualifier.to_string(), path });
                }
            }
            None => trace!("no import found for {:?}", qualifier),
        }
    }

    report.removed = prune_unused(tree, &registry);
    Ok(report)
}
