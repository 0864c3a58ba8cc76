#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod tables;

extern crate regex;

/// Renders a scan error for the user.
///
/// ```text
/// Error: BadNumber (Invalid number: `1.2.3`, numbers are digits with at most one `.`)
/// -> main.lang
/// ```
pub fn format_error(error: &Error) -> String {
    let heading = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> {}", heading, error.get_source())
}

pub fn display_error(error: &Error) {
    println!("{}", format_error(error));
}
