use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Operator spellings, indexed by [`Operator`] ordinal.
pub const OPERATORS: [&str; 18] = [
    "==", "!=", "&&", "||", "+", "-", "*", "/", "=", "(", ")", "{", "}", ";", "<", ">", "<=", ">=",
];

/// Keyword spellings, indexed by [`Keyword`] ordinal.
pub const KEYWORDS: [&str; 6] = ["for", "while", "if", "else", "print", "get"];

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        for keyword in Keyword::ALL {
            map.insert(keyword.spelling(), keyword);
        }
        map
    };
}

/// The table a lexeme points into.
///
/// `PolizLabel` and `AssignPos` are never produced by the scanner; they are
/// reserved for the translator that turns lexemes into postfix code.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TableKind {
    Operator,
    Keyword,
    Identifier,
    String,
    Number,
    PolizLabel,
    AssignPos,
}

impl TableKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            TableKind::Operator => "Operators",
            TableKind::Keyword => "Key words",
            TableKind::Identifier => "Identifiers",
            TableKind::String => "Strings",
            TableKind::Number => "Numbers",
            TableKind::PolizLabel => "POLIZ labels",
            TableKind::AssignPos => "Assign positions",
        }
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Lexeme {
    pub table: TableKind,
    pub index: usize,
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.table, self.index)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Equals,        // ==
    NotEquals,     // !=
    And,           // &&
    Or,            // ||
    Plus,          // +
    Dash,          // -
    Star,          // *
    Slash,         // /
    Assignment,    // =
    OpenParen,     // (
    CloseParen,    // )
    OpenCurly,     // {
    CloseCurly,    // }
    Semicolon,     // ;
    Less,          // <
    Greater,       // >
    LessEquals,    // <=
    GreaterEquals, // >=
}

impl Operator {
    pub const ALL: [Operator; 18] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::And,
        Operator::Or,
        Operator::Plus,
        Operator::Dash,
        Operator::Star,
        Operator::Slash,
        Operator::Assignment,
        Operator::OpenParen,
        Operator::CloseParen,
        Operator::OpenCurly,
        Operator::CloseCurly,
        Operator::Semicolon,
        Operator::Less,
        Operator::Greater,
        Operator::LessEquals,
        Operator::GreaterEquals,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Operator> {
        Operator::ALL.get(index).copied()
    }

    pub fn spelling(self) -> &'static str {
        OPERATORS[self.index()]
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    For,
    While,
    If,
    Else,
    Print,
    Get,
}

impl Keyword {
    pub const ALL: [Keyword; 6] = [
        Keyword::For,
        Keyword::While,
        Keyword::If,
        Keyword::Else,
        Keyword::Print,
        Keyword::Get,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Keyword> {
        Keyword::ALL.get(index).copied()
    }

    pub fn spelling(self) -> &'static str {
        KEYWORDS[self.index()]
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}
