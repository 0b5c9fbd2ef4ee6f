// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod svg;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::config::RenderConfig;
use crate::errors::AnnotatorError;
use crate::genetic_code::STOP;
use crate::matching::{compute_match, compute_match_padded};
use crate::render::svg::{Document, Line, Polyline, Text, TextAnchor};
use crate::seq::annotation::{Annotation, AnnotationPosition};
use crate::seq::sequence::{CodonPart, Sequence};

// Vertical steps, in units of the font size.
const FIRST_ROW_Y: f64 = 1.5;
const AFTER_TICKS: f64 = 1.0;
const AFTER_TOP_ANNOTATIONS: f64 = 1.1;
const BEFORE_BOTTOM_ANNOTATIONS: f64 = 0.1;
const AFTER_BOTTOM_ANNOTATIONS: f64 = 1.0;
const BEFORE_TRANSLATION: f64 = 1.0;
const AFTER_ROW: f64 = 1.5;
const AFTER_BLOCK: f64 = 3.0;

const ANNOTATION_STROKE_WIDTH: f64 = 5.0;

const MATCH_COLOR: &str = "black";
const MISMATCH_COLOR: &str = "red";
const STOP_COLOR: &str = "purple";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    pub tick_index: usize,
}

// Lays sequences out block by block, top to bottom. A block is the same window of columns across
// all sequences; each block gets its own tick ruler. The cursor only ever moves down.
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    blocks: Vec<Vec<Sequence>>,
    cursor: Cursor,
    document: Document,
}

impl<'a> Renderer<'a> {
    pub fn new(sequences: &[Sequence], config: &'a RenderConfig) -> Result<Self, AnnotatorError> {
        let first = sequences.first().ok_or(AnnotatorError::EmptySequenceSet)?;
        config.validate()?;
        for seq in sequences {
            if seq.len() != first.len() {
                return Err(AnnotatorError::LengthMismatch {
                    id: seq.id.clone(),
                    expected: first.len(),
                    found: seq.len(),
                });
            }
        }

        // Ids are right-aligned against a common margin, so the widest id sets it for all blocks.
        let max_id_len = sequences
            .iter()
            .map(|s| s.id.chars().count())
            .max()
            .unwrap_or(0);
        let chunked: Vec<Vec<Sequence>> = sequences
            .iter()
            .map(|s| s.chunk_with(config.block_width, config.rebase_annotations))
            .collect();

        Ok(Renderer {
            config,
            blocks: into_blocks(chunked),
            cursor: Cursor {
                x: (max_id_len + 1) as f64 * config.fontsize,
                y: FIRST_ROW_Y * config.fontsize,
                tick_index: 0,
            },
            document: Document::new(config.view_box.clone()),
        })
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn blocks(&self) -> &[Vec<Sequence>] {
        &self.blocks
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn text(&self, content: impl Into<String>, x: f64, y: f64) -> Text {
        Text::new(content, x, y).font(self.config.fontsize, self.config.fontfamily.clone())
    }

    pub fn write_ticks(&mut self, block_start: i64, columns: usize) {
        let fs = self.config.fontsize;
        for i in 0..columns {
            self.cursor.tick_index += 1;
            if self.cursor.tick_index % self.config.offset != 0 {
                continue;
            }
            let x = self.cursor.x + i as f64 * fs;
            let y = self.cursor.y;
            let label = self.text((block_start + i as i64 + 1).to_string(), x, y - fs);
            self.document.add_text(label);
            self.document.add_line(Line::new(x, y - fs / 4.0, x, y));
        }
        self.cursor.y += fs * AFTER_TICKS;
    }

    fn write_annotation(&mut self, annotation: &Annotation, label_y: f64, bar_y: f64) {
        let fs = self.config.fontsize;
        let x = self.cursor.x;
        let (start, end) = (annotation.start as f64, annotation.end as f64);
        if let Some(content) = &annotation.text {
            let label = self.text(content.clone(), x + fs * (start + end) / 2.0, label_y);
            self.document.add_text(label);
        }
        self.document.add_line(
            Line::new(x + fs * (start - 0.5), bar_y, x + fs * (end + 0.5), bar_y)
                .stroke(annotation.color.clone())
                .stroke_width(ANNOTATION_STROKE_WIDTH),
        );
    }

    pub fn write_sequence_row(
        &mut self,
        sequence: &Sequence,
        reference: &Sequence,
    ) -> Result<(), AnnotatorError> {
        let fs = self.config.fontsize;
        let x = self.cursor.x;

        let top: Vec<&Annotation> = sequence
            .annotations
            .iter()
            .filter(|a| a.position == AnnotationPosition::Top)
            .collect();
        if !top.is_empty() {
            let y = self.cursor.y;
            for annotation in top {
                self.write_annotation(annotation, y, y + fs / 2.0);
            }
            self.cursor.y += fs * AFTER_TOP_ANNOTATIONS;
        }

        let y = self.cursor.y;
        let id = self.text(sequence.id.clone(), x - fs * 1.5, y).anchor(TextAnchor::End);
        self.document.add_text(id);

        let matches = compute_match(&sequence.id, &reference.nucleotide, &sequence.nucleotide)?;
        for (i, (nuc, matched)) in sequence.nucleotide.iter().zip(matches).enumerate() {
            let fill = if matched { MATCH_COLOR } else { MISMATCH_COLOR };
            let symbol = self.text(nuc.to_string(), x + fs * i as f64, y).fill(fill);
            self.document.add_text(symbol);
        }

        let bottom: Vec<&Annotation> = sequence
            .annotations
            .iter()
            .filter(|a| a.position == AnnotationPosition::Bottom)
            .collect();
        if !bottom.is_empty() {
            self.cursor.y += fs * BEFORE_BOTTOM_ANNOTATIONS;
            let y = self.cursor.y;
            for annotation in bottom {
                self.write_annotation(annotation, y + fs, y + fs / 2.0);
            }
            self.cursor.y += fs * AFTER_BOTTOM_ANNOTATIONS;
        }

        if self.config.with_translation {
            self.cursor.y += fs * BEFORE_TRANSLATION;
            self.write_translation(sequence, reference);
        }

        Ok(())
    }

    // One bracket per codon: `[` under its first nucleotide, top and bottom bars plus the residue
    // under the middle one, `]` under the last. Nothing is drawn past the first stop codon.
    fn write_translation(&mut self, sequence: &Sequence, reference: &Sequence) {
        let fs = self.config.fontsize;
        let half = fs / 2.0;
        let (x, y) = (self.cursor.x, self.cursor.y);
        let (top, bottom) = (y - half, y + half);
        let matches = compute_match_padded(&reference.residues(), &sequence.residues());

        for (aa, matched) in sequence.protein.iter().zip(matches) {
            let px = x + fs * aa.position as f64;
            match aa.number {
                CodonPart::First => {
                    self.document.add_polyline(Polyline::new(vec![
                        (px + half, top),
                        (px - half, top),
                        (px - half, bottom),
                        (px + half, bottom),
                    ]));
                }
                CodonPart::Middle => {
                    self.document
                        .add_line(Line::new(px - half, top, px + half, top));
                    self.document
                        .add_line(Line::new(px - half, bottom, px + half, bottom));
                    let fill = if aa.text == STOP {
                        STOP_COLOR
                    } else if matched {
                        MATCH_COLOR
                    } else {
                        MISMATCH_COLOR
                    };
                    let residue = self.text(aa.text.to_string(), px, y).fill(fill);
                    self.document.add_text(residue);
                }
                CodonPart::Last => {
                    self.document.add_polyline(Polyline::new(vec![
                        (px - half, top),
                        (px + half, top),
                        (px + half, bottom),
                        (px - half, bottom),
                    ]));
                    if aa.text == STOP {
                        break;
                    }
                }
            }
        }
    }

    pub fn write_block(
        &mut self,
        block_index: usize,
        rows: &[Sequence],
    ) -> Result<(), AnnotatorError> {
        let mut references = rows.iter().filter(|r| r.reference);
        let reference = references
            .next()
            .ok_or(AnnotatorError::NoReferenceSequence { block: block_index })?;
        if references.next().is_some() {
            warn!(
                "Block {}: several reference sequences, using '{}'",
                block_index, reference.id
            );
        }
        debug!(
            "Block {}: {} rows, reference '{}', y = {}",
            block_index,
            rows.len(),
            reference.id,
            self.cursor.y
        );

        let columns = rows.iter().map(Sequence::len).max().unwrap_or(0);
        let block_start = self.config.start + (block_index * self.config.block_width) as i64;
        self.write_ticks(block_start, columns);

        for row in rows {
            self.write_sequence_row(row, reference)?;
            self.cursor.y += self.config.fontsize * AFTER_ROW;
        }
        Ok(())
    }

    pub fn write_all_blocks(&mut self) -> Result<(), AnnotatorError> {
        let blocks = std::mem::take(&mut self.blocks);
        let result = blocks.iter().enumerate().try_for_each(|(i, block)| {
            self.write_block(i, block)?;
            self.cursor.y += self.config.fontsize * AFTER_BLOCK;
            Ok(())
        });
        self.blocks = blocks;
        result
    }

    pub fn render(mut self) -> Result<Document, AnnotatorError> {
        self.write_all_blocks()?;
        Ok(self.document)
    }

    // Renders in memory first: the destination is only touched once the whole document exists.
    pub fn emit<P: AsRef<Path>>(self, path: P) -> Result<(), AnnotatorError> {
        let path = path.as_ref();
        let document = self.render()?;
        write_atomically(path, &document.to_svg_string())?;
        info!(
            "Wrote {} SVG elements to {}",
            document.nodes().len(),
            path.display()
        );
        Ok(())
    }
}

pub fn render_to_string(
    sequences: &[Sequence],
    config: &RenderConfig,
) -> Result<String, AnnotatorError> {
    Ok(Renderer::new(sequences, config)?.render()?.to_svg_string())
}

// chunked[s][b] is block b of sequence s; blocks[b][s] is the same chunk.
fn into_blocks(chunked: Vec<Vec<Sequence>>) -> Vec<Vec<Sequence>> {
    let num_blocks = chunked.first().map_or(0, Vec::len);
    let mut blocks: Vec<Vec<Sequence>> = (0..num_blocks)
        .map(|_| Vec::with_capacity(chunked.len()))
        .collect();
    for chunks in chunked {
        for (block, chunk) in blocks.iter_mut().zip(chunks) {
            block.push(chunk);
        }
    }
    blocks
}

fn temp_path_for(path: &Path) -> Result<PathBuf, AnnotatorError> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Not a file path: {}", path.display()),
        )
    })?;
    Ok(path.with_file_name(format!(
        ".{}.tmp-{}",
        file_name.to_string_lossy(),
        std::process::id()
    )))
}

fn write_atomically(path: &Path, contents: &str) -> Result<(), AnnotatorError> {
    let tmp = temp_path_for(path)?;
    if let Err(e) = fs::write(&tmp, contents).and_then(|_| fs::rename(&tmp, path)) {
        fs::remove_file(&tmp).ok();
        return Err(e.into());
    }
    Ok(())
}
