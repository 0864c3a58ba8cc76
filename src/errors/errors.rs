use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::tables::tables::ValueKind;

/// A lexical error together with the name of the source unit that raised it.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    source: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, source: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            source,
        }
    }

    pub fn get_source(&self) -> &str {
        &self.source
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::BadNumber { .. } => "BadNumber",
            ErrorImpl::BadIdentifier { .. } => "BadIdentifier",
            ErrorImpl::UnpairedQuote { .. } => "UnpairedQuote",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::BadNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, numbers are digits with at most one `.`",
                token
            )),
            ErrorImpl::BadIdentifier { token } if token.is_empty() => ErrorTip::None,
            ErrorImpl::BadIdentifier { token } => ErrorTip::Suggestion(format!(
                "Invalid identifier: `{}`, identifiers start with a letter or `_`",
                token
            )),
            ErrorImpl::UnpairedQuote { text } => ErrorTip::Suggestion(format!(
                "Unterminated string starting at `\"{}`, did you miss a closing quote?",
                text
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}", self.internal_error, self.source)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("bad number: {token:?}")]
    BadNumber { token: String },
    #[error("bad identifier: {token:?}")]
    BadIdentifier { token: String },
    #[error("not paired quotes: {text:?}")]
    UnpairedQuote { text: String },
}

/// Raised when a value that already holds one kind is asked to hold another.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    #[error("cannot store a {attempted} in a value that holds a {current}")]
    KindMismatch {
        current: ValueKind,
        attempted: ValueKind,
    },
}
