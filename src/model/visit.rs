//! Read-only traversal over the module tree. Trait methods default to the
//! free `walk_*` functions, so implementors override only the nodes they
//! care about and call `walk_*` to keep descending.

use super::{CallExpr, Decl, Expr, FuncDecl, Ident, ImportGroup, ImportSpec, MemberExpr, SourceTree};

pub trait Visit {
    fn visit_tree(&mut self, node: &SourceTree) {
        walk_tree(self, node);
    }
    fn visit_decl(&mut self, node: &Decl) {
        walk_decl(self, node);
    }
    fn visit_import_group(&mut self, node: &ImportGroup) {
        walk_import_group(self, node);
    }
    fn visit_import_spec(&mut self, _node: &ImportSpec) {}
    fn visit_func(&mut self, node: &FuncDecl) {
        walk_func(self, node);
    }
    fn visit_expr(&mut self, node: &Expr) {
        walk_expr(self, node);
    }
    fn visit_member_expr(&mut self, node: &MemberExpr) {
        walk_member_expr(self, node);
    }
    fn visit_call_expr(&mut self, node: &CallExpr) {
        walk_call_expr(self, node);
    }
    fn visit_ident(&mut self, _node: &Ident) {}
}

pub fn walk_tree<V: Visit + ?Sized>(visitor: &mut V, node: &SourceTree) {
    for decl in &node.decls {
        visitor.visit_decl(decl);
    }
}

pub fn walk_decl<V: Visit + ?Sized>(visitor: &mut V, node: &Decl) {
    match node {
        Decl::Import(group) => visitor.visit_import_group(group),
        Decl::Func(func) => visitor.visit_func(func),
    }
}

pub fn walk_import_group<V: Visit + ?Sized>(visitor: &mut V, node: &ImportGroup) {
    for spec in &node.specs {
        visitor.visit_import_spec(spec);
    }
}

pub fn walk_func<V: Visit + ?Sized>(visitor: &mut V, node: &FuncDecl) {
    for expr in &node.body {
        visitor.visit_expr(expr);
    }
}

pub fn walk_expr<V: Visit + ?Sized>(visitor: &mut V, node: &Expr) {
    match node {
        Expr::Ident(ident) => visitor.visit_ident(ident),
        Expr::Member(member) => visitor.visit_member_expr(member),
        Expr::Call(call) => visitor.visit_call_expr(call),
    }
}

pub fn walk_member_expr<V: Visit + ?Sized>(visitor: &mut V, node: &MemberExpr) {
    visitor.visit_expr(&node.base);
}

pub fn walk_call_expr<V: Visit + ?Sized>(visitor: &mut V, node: &CallExpr) {
    visitor.visit_expr(&node.callee);
    for arg in &node.args {
        visitor.visit_expr(arg);
    }
}
