//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that consumes the
//! tokenizer's output with a single buffered lookahead token. It handles:
//!
//! - Top-level definitions (`def`, `type`)
//! - Stack-effect signatures and type references
//! - Expressions (terms, literals, closures, match)
//!
//! Every production fails fast: the first syntax error anywhere aborts the
//! whole parse and is the only diagnostic surfaced to the caller.

pub mod definitions;
pub mod expr;
pub mod parser;
pub mod types;
