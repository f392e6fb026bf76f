//! Go syntax source.
//!
//! Wraps the tree-sitter Go grammar: source text in, [`SourceFile`] out.

pub mod ast;
pub mod parser;

pub use ast::{Decl, Field, FuncType, InterfaceType, SourceFile, TypeExpr, TypeSpec};
pub use parser::{check_syntax, parse_source, SyntaxError};
