//! vclc-util - shared foundation types for the VCL front-end.
//!
//! Every crate in this workspace (`vclc-lex`, `vclc-par`, `vclc-sem`,
//! `vclc-drv`) builds on two small pieces defined here:
//!
//! - [`span`]: `Position` and `Span`, attached to every token and AST node.
//! - [`diagnostic`]: rendering a position as a source snippet, shared by
//!   the lexer's and parser's otherwise-independent error types.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{render_snippet, ErrorKind};
pub use span::{Position, Span};
