// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io};

#[derive(Debug)]
pub enum AnnotatorError {
    Io(io::Error),
    MalformedInput(String),
    NoReferenceSequence { block: usize },
    LengthMismatch {
        id: String,
        expected: usize,
        found: usize,
    },
    EmptySequenceSet,
}

// These allow conversion to AnnotatorError, required for main() to return Result<()> and for '?'
// to work.

impl From<io::Error> for AnnotatorError {
    fn from(e: io::Error) -> Self {
        AnnotatorError::Io(e)
    }
}

impl From<String> for AnnotatorError {
    fn from(s: String) -> Self {
        AnnotatorError::MalformedInput(s)
    }
}

impl From<serde_json::Error> for AnnotatorError {
    fn from(e: serde_json::Error) -> Self {
        AnnotatorError::MalformedInput(e.to_string())
    }
}

impl fmt::Display for AnnotatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotatorError::Io(e) => write!(f, "I/O error: {}", e),
            AnnotatorError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            AnnotatorError::NoReferenceSequence { block } => {
                write!(f, "No reference sequence in block {}", block)
            }
            AnnotatorError::LengthMismatch {
                id,
                expected,
                found,
            } => write!(
                f,
                "Length mismatch for '{}': expected {} symbols, found {}",
                id, expected, found
            ),
            AnnotatorError::EmptySequenceSet => write!(f, "No sequences to render"),
        }
    }
}

impl error::Error for AnnotatorError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AnnotatorError::Io(e) => Some(e),
            _ => None,
        }
    }
}
