//! Reconciles a module's import declarations with the identifiers the
//! module actually uses: imports for referenced-but-unimported qualifiers
//! are synthesized through an injected [`Resolver`], declared-but-unused
//! imports are pruned, and single vs. grouped rendering is preserved.
//!
//! Parsing, identifier scope resolution, and pretty-printing stay with
//! external collaborators. The pipeline mutates an already-parsed
//! [`model::SourceTree`] in place, exactly once per invocation; it does not
//! iterate to a fixed point.

pub mod fix;
pub mod model;
pub mod prune;
pub mod registry;
pub mod resolve;
pub mod scan;
pub mod synth;

pub use fix::{fix_imports, AddedImport, FixReport};
pub use resolve::{ResolutionUnavailable, Resolver, TableResolver};
