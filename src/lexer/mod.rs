//! Lexical analysis for the interpreter's source language.
//!
//! This module contains the scanner that turns source text into a sequence
//! of lexemes. It handles:
//!
//! - `#` comments and `"` quoted strings, which ignore word boundaries
//! - Splitting words on the longest leftmost operator spelling
//! - Classifying what is left as a keyword, number or identifier
//! - The fixed operator and keyword tables lexemes index into

pub mod lexer;
pub mod tokens;
