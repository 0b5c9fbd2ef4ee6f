// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use serde::Deserialize;

pub const DEFAULT_ANNOTATION_COLOR: &str = "blue";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationPosition {
    #[default]
    Top,
    Bottom,
}

// A labelled, inclusive [start, end] range of nucleotide columns. Coordinates are 0-based and
// relative to whatever sequence (or chunk) owns the annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub start: usize,
    pub end: usize,
    pub color: String,
    pub text: Option<String>,
    pub position: AnnotationPosition,
}

impl Annotation {
    pub fn new(start: usize, end: usize) -> Self {
        Annotation {
            start,
            end,
            color: String::from(DEFAULT_ANNOTATION_COLOR),
            text: None,
            position: AnnotationPosition::Top,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn at(mut self, position: AnnotationPosition) -> Self {
        self.position = position;
        self
    }

    /// Copy of this annotation moved `delta` columns to the left. Coordinates stop at 0.
    pub fn shifted_left(&self, delta: usize) -> Self {
        Annotation {
            start: self.start.saturating_sub(delta),
            end: self.end.saturating_sub(delta),
            ..self.clone()
        }
    }
}
