use std::{collections::HashMap, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    tables::tables::Tables,
    MK_LEXEME,
};

use super::tokens::{Keyword, Lexeme, TableKind, KEYWORDS, KEYWORD_LOOKUP, OPERATORS};

const COMMENT_MARKER: char = '#';
const QUOTE: char = '"';

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new("[^ \t\n]+").unwrap();
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// What to do when an identifier name shows up more than once.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum IdentifierPolicy {
    /// Every occurrence gets its own entry in the identifier table.
    #[default]
    AppendEach,
    /// Occurrences of a known name point at the first entry for it.
    Reuse,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub identifiers: IdentifierPolicy,
}

/// Splits source text into lexemes, filling in the symbol tables as it goes.
///
/// Lexemes and tables accumulate over successive calls to [`Scanner::scan`].
/// After a failed scan they hold everything classified before the failure.
#[derive(Debug, Clone)]
pub struct Scanner {
    operators: &'static [&'static str],
    keywords: &'static HashMap<&'static str, Keyword>,
    tables: Tables,
    lexemes: Vec<Lexeme>,
    read_pos: usize,
    source: Rc<String>,
    options: ScanOptions,
}

impl Scanner {
    pub fn new(source: Option<String>) -> Scanner {
        Scanner::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: Option<String>, options: ScanOptions) -> Scanner {
        let source_name = if let Some(source) = source {
            Rc::new(source)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            operators: &OPERATORS,
            keywords: &KEYWORD_LOOKUP,
            tables: Tables::new(),
            lexemes: vec![],
            read_pos: 0,
            source: source_name,
            options,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source
    }

    pub fn operators(&self) -> &'static [&'static str] {
        self.operators
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        &KEYWORDS
    }

    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn tables_mut(&mut self) -> &mut Tables {
        &mut self.tables
    }

    /// Scans one source unit, appending its lexemes in source order.
    ///
    /// A `#` that comes before any quote discards the rest of `text`,
    /// newlines included.
    pub fn scan(&mut self, text: &str) -> Result<(), Error> {
        debug!(source = %self.source, len = text.len(), "scanning source unit");
        let before = self.lexemes.len();

        if let Err(error) = self.scan_segment(text) {
            debug!(source = %self.source, error = %error, "scan aborted");
            return Err(error);
        }

        debug!(
            source = %self.source,
            emitted = self.lexemes.len() - before,
            total = self.lexemes.len(),
            "scan finished"
        );
        Ok(())
    }

    /// Scans every line of `text` as its own source unit, so a comment only
    /// runs to the end of its line.
    pub fn scan_lines(&mut self, text: &str) -> Result<(), Error> {
        for line in text.split('\n') {
            self.scan(line)?;
        }
        Ok(())
    }

    /// Returns the next lexeme not yet handed out, for a parser reading the
    /// sequence front to back.
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.read_pos).copied()?;
        self.read_pos += 1;
        Some(lexeme)
    }

    /// The literal text a lexeme stands for, or `None` if its index is out of
    /// range for its table.
    pub fn resolve(&self, lexeme: &Lexeme) -> Option<String> {
        match lexeme.table {
            TableKind::Operator => self.operators.get(lexeme.index).map(|op| op.to_string()),
            TableKind::Keyword => Keyword::from_index(lexeme.index).map(|kw| kw.to_string()),
            TableKind::Identifier => self
                .tables
                .identifiers
                .get(lexeme.index)
                .map(|id| id.to_string()),
            TableKind::String => self.tables.strings.get(lexeme.index).cloned(),
            TableKind::Number => self.tables.numbers.get(lexeme.index).map(|n| n.to_string()),
            TableKind::PolizLabel | TableKind::AssignPos => Some(lexeme.index.to_string()),
        }
    }

    /// Renders every lexeme as `Table: <table>; Value: <literal>`, one per line.
    pub fn dump(&self) -> String {
        let mut result = String::new();
        for lexeme in &self.lexemes {
            result.push_str(&format!(
                "Table: {}; Value: {}\n",
                lexeme.table,
                self.resolve(lexeme).unwrap_or_default()
            ));
        }
        result
    }

    pub fn print_lexemes(&self) {
        print!("{}", self.dump());
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, Rc::clone(&self.source))
    }

    fn push(&mut self, lexeme: Lexeme) {
        trace!(lexeme = %lexeme, "emit");
        self.lexemes.push(lexeme);
    }

    fn scan_segment(&mut self, text: &str) -> Result<(), Error> {
        let mut rest = text;

        loop {
            let comment = rest.find(COMMENT_MARKER);
            let quote = rest.find(QUOTE);

            match (comment, quote) {
                (Some(comment), quote) if quote.map_or(true, |quote| comment < quote) => {
                    trace!(dropped = rest.len() - comment, "comment");
                    rest = &rest[..comment];
                }
                (_, Some(open)) => {
                    self.scan_words(&rest[..open])?;

                    let after_open = &rest[open + 1..];
                    let Some(close) = after_open.find(QUOTE) else {
                        return Err(self.error(ErrorImpl::UnpairedQuote {
                            text: after_open.to_string(),
                        }));
                    };

                    let index = self.tables.add_string(&after_open[..close]);
                    self.push(MK_LEXEME!(TableKind::String, index));

                    rest = &after_open[close + 1..];
                }
                _ => return self.scan_words(rest),
            }
        }
    }

    fn scan_words(&mut self, text: &str) -> Result<(), Error> {
        for word in WORD_PATTERN.find_iter(text) {
            self.scan_word(word.as_str())?;
        }
        Ok(())
    }

    fn scan_word(&mut self, word: &str) -> Result<(), Error> {
        let mut rest = word;

        while let Some((start, operator)) = self.find_operator(rest) {
            if start > 0 {
                self.classify(&rest[..start])?;
            }
            self.push(MK_LEXEME!(TableKind::Operator, operator));
            rest = &rest[start + self.operators[operator].len()..];
        }

        if !rest.is_empty() {
            self.classify(rest)?;
        }
        Ok(())
    }

    /// Finds the leftmost operator in `word`; of several starting at the same
    /// place the longest wins. Returns its byte offset and operator index.
    fn find_operator(&self, word: &str) -> Option<(usize, usize)> {
        let mut found: Option<(usize, usize)> = None;

        for (index, spelling) in self.operators.iter().enumerate() {
            let Some(start) = word.find(spelling) else {
                continue;
            };

            let better = match found {
                None => true,
                Some((best_start, best)) => {
                    start < best_start
                        || (start == best_start && spelling.len() > self.operators[best].len())
                }
            };

            if better {
                found = Some((start, index));
            }
        }

        found
    }

    fn classify(&mut self, sub_word: &str) -> Result<(), Error> {
        if let Some(keyword) = self.keywords.get(sub_word) {
            self.push(MK_LEXEME!(TableKind::Keyword, keyword.index()));
        } else if sub_word.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            let Some(number) = decode_number(sub_word) else {
                return Err(self.error(ErrorImpl::BadNumber {
                    token: sub_word.to_string(),
                }));
            };
            let index = self.tables.add_number(number);
            self.push(MK_LEXEME!(TableKind::Number, index));
        } else if is_identifier(sub_word) {
            let index = match self.options.identifiers {
                IdentifierPolicy::Reuse => self
                    .tables
                    .find_identifier(sub_word)
                    .unwrap_or_else(|| self.tables.add_identifier(sub_word)),
                IdentifierPolicy::AppendEach => self.tables.add_identifier(sub_word),
            };
            self.push(MK_LEXEME!(TableKind::Identifier, index));
        } else {
            return Err(self.error(ErrorImpl::BadIdentifier {
                token: sub_word.to_string(),
            }));
        }

        Ok(())
    }
}

/// Decodes a run of digits with at most one `.` in it. `"12.50"` gives `12.5`,
/// a lone `"."` gives `0`.
pub fn decode_number(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }

    let mut value = 0.0;
    let mut scale = 1.0;
    let mut seen_dot = false;

    for c in text.chars() {
        match c {
            '0'..='9' => {
                value = value * 10.0 + f64::from(c as u8 - b'0');
                if seen_dot {
                    scale *= 10.0;
                }
            }
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }

    Some(value / scale)
}

pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(text)
}

/// Scans `source` into a fresh scanner.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Scanner, Error> {
    let mut scanner = Scanner::new(file);
    scanner.scan(source)?;
    Ok(scanner)
}
