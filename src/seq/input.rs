// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::Path;

use hex_color::HexColor;
use log::{info, warn};
use regex::Regex;
use serde_json::Value;

use crate::config::RenderConfig;
use crate::errors::AnnotatorError;
use crate::genetic_code::GeneticCode;
use crate::seq::annotation::Annotation;
use crate::seq::file::SeqFile;
use crate::seq::record::{AnnotationRecord, InputFile, SequenceRecord};
use crate::seq::sequence::Sequence;

// A checked input: configuration plus the sequences to render.
#[derive(Debug)]
pub struct Input {
    pub config: RenderConfig,
    pub sequences: Vec<Sequence>,
}

pub fn read_input_file<P: AsRef<Path>>(path: P) -> Result<Input, AnnotatorError> {
    let path = path.as_ref();
    info!("Reading input from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_input(&text)
}

pub fn parse_input(text: &str) -> Result<Input, AnnotatorError> {
    let input: InputFile = serde_json::from_str(text)?;
    input_from_file(input)
}

pub fn input_from_value(value: &Value) -> Result<Input, AnnotatorError> {
    let input: InputFile = serde_json::from_value(value.clone())?;
    input_from_file(input)
}

fn input_from_file(input: InputFile) -> Result<Input, AnnotatorError> {
    input.config.validate()?;
    let sequences = build_sequences(input.sequences, &input.config)?;
    Ok(Input {
        config: input.config,
        sequences,
    })
}

// Checks every record and translates it with the configured genetic code.
pub fn build_sequences(
    records: SeqFile,
    config: &RenderConfig,
) -> Result<Vec<Sequence>, AnnotatorError> {
    let code = config.code()?;
    let color_names = Regex::new(r"^[A-Za-z]+$").map_err(|e| e.to_string())?;
    records
        .into_iter()
        .map(|record| build_sequence(record, &code, &color_names))
        .collect()
}

fn build_sequence(
    record: SequenceRecord,
    code: &GeneticCode,
    color_names: &Regex,
) -> Result<Sequence, AnnotatorError> {
    if record.id.is_empty() {
        return Err(AnnotatorError::MalformedInput(String::from(
            "Sequence with empty id",
        )));
    }
    if record.frame > 2 {
        return Err(AnnotatorError::MalformedInput(format!(
            "Sequence '{}': frame must be 0, 1 or 2, got {}",
            record.id, record.frame
        )));
    }
    let len = record.sequence.chars().count();
    let annotations = record
        .annotations
        .into_iter()
        .map(|a| build_annotation(&record.id, len, a, color_names))
        .collect::<Result<Vec<Annotation>, AnnotatorError>>()?;

    Ok(
        Sequence::translated(record.id, &record.sequence, record.frame, code)
            .with_annotations(annotations)
            .with_reference(record.reference),
    )
}

fn build_annotation(
    id: &str,
    seq_len: usize,
    record: AnnotationRecord,
    color_names: &Regex,
) -> Result<Annotation, AnnotatorError> {
    if record.start > record.end {
        return Err(AnnotatorError::MalformedInput(format!(
            "Sequence '{}': annotation starts after it ends ({} > {})",
            id, record.start, record.end
        )));
    }
    if record.end >= seq_len {
        warn!(
            "Sequence '{}': annotation {}-{} extends past the sequence end",
            id, record.start, record.end
        );
    }
    let color = normalize_color(&record.color, color_names).map_err(|msg| {
        AnnotatorError::MalformedInput(format!("Sequence '{}': {}", id, msg))
    })?;
    let mut annotation = Annotation::new(record.start, record.end)
        .with_color(color)
        .at(record.position);
    annotation.text = record.text;
    Ok(annotation)
}

// Named colors pass through as they are; hex colors are normalized to lowercase #rrggbb (or
// #rrggbbaa when not opaque).
fn normalize_color(color: &str, color_names: &Regex) -> Result<String, String> {
    if color_names.is_match(color) {
        return Ok(color.to_string());
    }
    if color.starts_with('#') {
        let c = HexColor::parse(color).map_err(|e| format!("bad color '{}': {}", color, e))?;
        let mut hex = format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b);
        if c.a != u8::MAX {
            hex.push_str(&format!("{:02x}", c.a));
        }
        return Ok(hex);
    }
    Err(format!("bad color '{}'", color))
}
