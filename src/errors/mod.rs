//! Error types for lexical analysis.
//!
//! This module defines:
//!
//! - The scan errors (`BadNumber`, `BadIdentifier`, `UnpairedQuote`), each of
//!   which aborts the scan in progress
//! - Error names and suggestions for reporting
//! - Value errors raised when an identifier's value would change kind

pub mod errors;
