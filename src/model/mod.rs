//! Tree data model for the import reconciliation pipeline.
//!
//! The tree is produced by an external parser and rendered back to text by
//! a downstream printer; the pipeline only mutates it in place. Identifier
//! scope annotations ([`ScopeKind`]) are supplied by the parser's scope
//! resolver, never computed here.

pub mod visit;

use serde::{Deserialize, Serialize};

/// Alias of a blank import, kept for side effects only.
pub const BLANK_BINDING: &str = "_";
/// Alias of an inline-unqualified (dot) import, kept for side effects only.
pub const INLINE_BINDING: &str = ".";

/// Ordered top-level declarations of one module. Owns all child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTree {
    pub decls: Vec<Decl>,
}

impl SourceTree {
    pub fn new(decls: Vec<Decl>) -> Self {
        Self { decls }
    }

    pub fn has_import_group(&self) -> bool {
        self.decls.iter().any(|decl| matches!(decl, Decl::Import(_)))
    }

    pub fn import_groups(&self) -> impl Iterator<Item = &ImportGroup> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Import(group) => Some(group),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decl {
    Import(ImportGroup),
    Func(FuncDecl),
}

/// Syntactic container of one or more import specs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportGroup {
    pub specs: Vec<ImportSpec>,
    /// Parenthesized rendering. A singleton group renders ungrouped.
    pub grouped: bool,
}

impl ImportGroup {
    pub fn new(specs: Vec<ImportSpec>) -> Self {
        let grouped = specs.len() > 1;
        Self { specs, grouped }
    }
}

/// One `(alias?, path)` binding declared by an import group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSpec {
    pub alias: Option<String>,
    pub path: String,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self { alias: None, path: path.into() }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self { alias: Some(alias.into()), path: path.into() }
    }

    /// Local binding name: the alias if present, else the final path segment.
    pub fn binding(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => self.path.rsplit('/').next().unwrap_or(self.path.as_str()),
        }
    }

    /// Blank and dot imports never produce a unique binding and are exempt
    /// from unused-pruning.
    pub fn is_sentinel(&self) -> bool {
        matches!(self.alias.as_deref(), Some(BLANK_BINDING) | Some(INLINE_BINDING))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    pub body: Vec<Expr>,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>, body: Vec<Expr>) -> Self {
        Self { name: name.into(), body }
    }
}

/// How the parser's scope layer classified an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeKind {
    /// Not bound by any enclosing scope; a candidate package qualifier.
    Free,
    /// Bound to a parameter, local, type, or other in-scope declaration.
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    pub scope: ScopeKind,
}

impl Ident {
    pub fn free(name: impl Into<String>) -> Self {
        Self { name: name.into(), scope: ScopeKind::Free }
    }

    pub fn local(name: impl Into<String>) -> Self {
        Self { name: name.into(), scope: ScopeKind::Local }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Ident(Ident),
    Member(MemberExpr),
    Call(CallExpr),
}

impl Expr {
    /// `qualifier.member` with a free identifier base, the shape the
    /// scanner recognizes as a package reference.
    pub fn member(qualifier: impl Into<String>, member: impl Into<String>) -> Self {
        Expr::member_of(Expr::Ident(Ident::free(qualifier)), member)
    }

    pub fn member_of(base: Expr, member: impl Into<String>) -> Self {
        Expr::Member(MemberExpr { base: Box::new(base), member: member.into() })
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr { callee: Box::new(callee), args })
    }
}

/// `base.member` access; the qualifier-dot-symbol shape when `base` is a
/// simple identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberExpr {
    pub base: Box<Expr>,
    pub member: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
}
