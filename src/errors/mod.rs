//! Error types and error handling for the front end.
//!
//! This module defines the single diagnostic type produced anywhere in the
//! pipeline. It includes:
//!
//! - The `ParseError` structure carrying a message and a source location
//! - The closed set of message kinds for lexing and parsing failures
//! - The user-facing caret rendering of a diagnostic

pub mod errors;
