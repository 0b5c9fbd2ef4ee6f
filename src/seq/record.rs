// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Input records, as they appear in a JSON input file. They are checked and turned into
// `Sequence` values by `seq::input`; FastA files yield the same records, minus annotations.

use serde::Deserialize;

use crate::config::RenderConfig;
use crate::seq::annotation::{AnnotationPosition, DEFAULT_ANNOTATION_COLOR};
use crate::seq::file::SeqFile;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputFile {
    #[serde(default)]
    pub config: RenderConfig,
    pub sequences: SeqFile,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
    #[serde(default)]
    pub reference: bool,
    #[serde(default)]
    pub frame: usize,
    #[serde(default, alias = "annotation")]
    pub annotations: Vec<AnnotationRecord>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        SequenceRecord {
            id: id.into(),
            sequence: sequence.into(),
            reference: false,
            frame: 0,
            annotations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationRecord {
    pub start: usize,
    pub end: usize,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub position: AnnotationPosition,
}

fn default_color() -> String {
    String::from(DEFAULT_ANNOTATION_COLOR)
}
