//! Utility macros for the lexer.
//!
//! - `MK_LEXEME!` - Creates a Lexeme instance

/// Creates a Lexeme instance.
///
/// # Arguments
///
/// * `$table` - The TableKind the lexeme points into
/// * `$index` - The lexeme's index in that table
///
/// # Example
///
/// ```
/// use lexan::{lexer::tokens::{Lexeme, TableKind}, MK_LEXEME};
///
/// let lexeme = MK_LEXEME!(TableKind::Number, 0);
/// assert_eq!(lexeme.index, 0);
/// ```
#[macro_export]
macro_rules! MK_LEXEME {
    ($table:expr, $index:expr) => {
        Lexeme {
            table: $table,
            index: $index,
        }
    };
}
