//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the AST structure
//!
//! Submodules:
//! - definitions: Top-level definitions and the program root
//! - expressions: Definitions for various expression types
//! - types: Type references and stack-effect signatures
pub mod definitions;
pub mod expressions;
pub mod types;
