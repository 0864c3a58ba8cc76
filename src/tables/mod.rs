//! Symbol tables filled in by the scanner.
//!
//! Holds the identifiers, string literals and numbers met during a scan,
//! and the typed values identifiers are later bound to.

pub mod tables;
