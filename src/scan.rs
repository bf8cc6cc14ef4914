//! Single-pass reference scan: marks existing imports used and collects the
//! free qualifiers that still need one.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::visit::{self, Visit};
use crate::model::{Expr, MemberExpr, ScopeKind, SourceTree};
use crate::registry::ImportRegistry;

/// Free qualifiers and the member symbols observed with each, awaiting
/// resolution. Ordered so resolver calls happen in a deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionTable {
    refs: BTreeMap<String, BTreeSet<String>>,
}

impl ResolutionTable {
    pub fn record(&mut self, qualifier: &str, member: &str) {
        self.refs
            .entry(qualifier.to_string())
            .or_default()
            .insert(member.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.refs.iter().map(|(qualifier, symbols)| (qualifier.as_str(), symbols))
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

/// Walk the tree once. Qualifiers the scope layer marked local are ignored;
/// qualifiers matching a declared binding mark it used; everything else
/// lands in the returned table.
pub fn scan(tree: &SourceTree, registry: &mut ImportRegistry) -> ResolutionTable {
    let mut scanner = ReferenceScanner { registry, table: ResolutionTable::default() };
    scanner.visit_tree(tree);
    scanner.table
}

struct ReferenceScanner<'a> {
    registry: &'a mut ImportRegistry,
    table: ResolutionTable,
}

impl Visit for ReferenceScanner<'_> {
    fn visit_member_expr(&mut self, node: &MemberExpr) {
        // Only the simple qualifier-dot-symbol shape counts as a package
        // reference; other base shapes are skipped, and the walk below
        // still reaches any qualified reference nested inside them.
        if let Expr::Ident(ident) = node.base.as_ref() {
            if ident.scope == ScopeKind::Free {
                if self.registry.contains(&ident.name) {
                    self.registry.mark_used(&ident.name);
                } else {
                    self.table.record(&ident.name, &node.member);
                }
            }
        }
        visit::walk_member_expr(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Decl, FuncDecl, Ident, ImportGroup, ImportSpec, SourceTree};

    fn func_tree(body: Vec<Expr>) -> SourceTree {
        SourceTree::new(vec![Decl::Func(FuncDecl::new("bar", body))])
    }

    #[test]
    fn locally_bound_qualifier_is_ignored() {
        let tree = func_tree(vec![Expr::member_of(
            Expr::Ident(Ident::local("bytes")),
            "Buffer",
        )]);
        let mut registry = ImportRegistry::collect(&tree);
        let table = scan(&tree, &mut registry);
        assert!(table.is_empty());
    }

    #[test]
    fn existing_binding_is_marked_used_not_recorded() {
        let tree = SourceTree::new(vec![
            Decl::Import(ImportGroup::new(vec![ImportSpec::new("fmt")])),
            Decl::Func(FuncDecl::new("bar", vec![Expr::member("fmt", "Println")])),
        ]);
        let mut registry = ImportRegistry::collect(&tree);
        let table = scan(&tree, &mut registry);
        assert!(table.is_empty());
        assert!(registry.is_used("fmt"));
    }

    #[test]
    fn free_qualifier_accumulates_member_symbols() {
        let tree = func_tree(vec![
            Expr::member("bytes", "Buffer"),
            Expr::member("bytes", "NewReader"),
        ]);
        let mut registry = ImportRegistry::collect(&tree);
        let table = scan(&tree, &mut registry);
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries.len(), 1);
        let (qualifier, symbols) = &entries[0];
        assert_eq!(*qualifier, "bytes");
        assert!(symbols.contains("Buffer"));
        assert!(symbols.contains("NewReader"));
    }

    #[test]
    fn nested_base_is_skipped_but_inner_reference_found() {
        // a.b.c: the outer member's base is itself a member expression, so
        // only the inner a.b is a candidate package reference.
        let tree = func_tree(vec![Expr::member_of(Expr::member("a", "b"), "c")]);
        let mut registry = ImportRegistry::collect(&tree);
        let table = scan(&tree, &mut registry);
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "a");
        assert!(entries[0].1.contains("b"));
    }

    #[test]
    fn call_arguments_are_walked() {
        let tree = func_tree(vec![Expr::call(
            Expr::member("fmt", "Println"),
            vec![Expr::member("bytes", "Buffer")],
        )]);
        let mut registry = ImportRegistry::collect(&tree);
        let table = scan(&tree, &mut registry);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn aliased_import_matches_by_alias() {
        let tree = SourceTree::new(vec![
            Decl::Import(ImportGroup::new(vec![ImportSpec::aliased("bs", "bytes")])),
            Decl::Func(FuncDecl::new("bar", vec![Expr::member("bs", "Buffer")])),
        ]);
        let mut registry = ImportRegistry::collect(&tree);
        let table = scan(&tree, &mut registry);
        assert!(table.is_empty());
        assert!(registry.is_used("bs"));
    }
}
