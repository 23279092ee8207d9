//! Symbol table of VCL's built-in objects.
//!
//! [`new_symbol_table`] builds the static catalog of `req`, `resp`,
//! `bereq`, `beresp`, `client`, `server`, `obj`, `local`, `remote`,
//! `now`, and `storage`; [`table::SymbolTable::lookup`] resolves a
//! dotted path against it (with a special rule for header-map fields),
//! and [`table::SymbolTable::insert`] adds user declarations discovered
//! by a later pass over the AST.

pub mod builtins;
pub mod table;

pub use builtins::new_symbol_table;
pub use table::{MethodSig, Symbol, SymbolKind, SymbolTable, VclType};
