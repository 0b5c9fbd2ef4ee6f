// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use itertools::Itertools;

use crate::genetic_code::{GeneticCode, STOP};
use crate::seq::annotation::Annotation;

pub const GAP: char = '-';

// Which third of its codon an amino-acid element stands for. The renderer draws a different part
// of the codon bracket for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonPart {
    First,
    Middle,
    Last,
}

impl CodonPart {
    const ALL: [CodonPart; 3] = [CodonPart::First, CodonPart::Middle, CodonPart::Last];

    pub fn number(self) -> usize {
        match self {
            CodonPart::First => 0,
            CodonPart::Middle => 1,
            CodonPart::Last => 2,
        }
    }
}

// One nucleotide's share of a translated codon: all three elements of a codon carry the same
// residue. `position` indexes the nucleotide this element stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AminoAcid {
    pub text: char,
    pub position: usize,
    pub number: CodonPart,
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.text, self.position, self.number.number())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub id: String,
    pub nucleotide: Vec<char>,
    pub reference: bool,
    pub frame: usize,
    pub protein: Vec<AminoAcid>,
    pub annotations: Vec<Annotation>,
    /// Code the protein was (or would be) translated with; chunks translate with it too.
    pub code: GeneticCode,
}

impl Sequence {
    /// Sequence in frame 0, translated with the standard genetic code.
    pub fn new(id: impl Into<String>, nucleotide: &str) -> Self {
        Sequence::translated(id, nucleotide, 0, &GeneticCode::standard())
    }

    pub fn translated(
        id: impl Into<String>,
        nucleotide: &str,
        frame: usize,
        code: &GeneticCode,
    ) -> Self {
        let nucleotide: Vec<char> = nucleotide.chars().collect();
        let protein = translate(&nucleotide, frame, code);
        Sequence {
            id: id.into(),
            nucleotide,
            reference: false,
            frame,
            protein,
            annotations: Vec::new(),
            code: *code,
        }
    }

    // Takes the protein as is, even if empty: nothing gets translated.
    pub fn with_protein(
        id: impl Into<String>,
        nucleotide: Vec<char>,
        frame: usize,
        protein: Vec<AminoAcid>,
    ) -> Self {
        Sequence {
            id: id.into(),
            nucleotide,
            reference: false,
            frame,
            protein,
            annotations: Vec::new(),
            code: GeneticCode::standard(),
        }
    }

    pub fn with_code(mut self, code: GeneticCode) -> Self {
        self.code = code;
        self
    }

    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_reference(mut self, reference: bool) -> Self {
        self.reference = reference;
        self
    }

    pub fn len(&self) -> usize {
        self.nucleotide.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nucleotide.is_empty()
    }

    pub fn nucleotide_string(&self) -> String {
        self.nucleotide.iter().collect()
    }

    // One residue per codon, e.g. "MR*".
    pub fn protein_string(&self) -> String {
        self.protein
            .iter()
            .filter(|aa| aa.number == CodonPart::First)
            .map(|aa| aa.text)
            .collect()
    }

    pub fn residues(&self) -> Vec<char> {
        self.protein.iter().map(|aa| aa.text).collect()
    }

    pub fn chunk(&self, size: usize) -> Vec<Sequence> {
        self.chunk_with(size, false)
    }

    // Splits into consecutive windows of `size` columns (the last one may be shorter). Protein
    // elements are carried over with positions relative to the window; a window left with no
    // protein at all (e.g. past a stop codon) is translated afresh from its own start, in
    // `frame`. Annotations are kept in the window holding their start; their coordinates stay
    // relative to the whole sequence unless `rebase_annotations` is set. A `size` of 0 yields
    // no chunks.
    pub fn chunk_with(&self, size: usize, rebase_annotations: bool) -> Vec<Sequence> {
        if size == 0 {
            return Vec::new();
        }
        self.nucleotide
            .chunks(size)
            .enumerate()
            .map(|(k, window)| {
                let lo = k * size;
                let hi = lo + window.len();
                let mut protein: Vec<AminoAcid> = self
                    .protein
                    .iter()
                    .filter(|aa| (lo..hi).contains(&aa.position))
                    .map(|aa| AminoAcid {
                        position: aa.position - lo,
                        ..aa.clone()
                    })
                    .collect();
                if protein.is_empty() {
                    protein = translate(window, self.frame, &self.code);
                }
                let annotations = self
                    .annotations
                    .iter()
                    .filter(|a| (lo..hi).contains(&a.start))
                    .map(|a| {
                        if rebase_annotations {
                            a.shifted_left(lo)
                        } else {
                            a.clone()
                        }
                    })
                    .collect();
                Sequence::with_protein(self.id.clone(), window.to_vec(), self.frame, protein)
                    .with_code(self.code)
                    .with_annotations(annotations)
                    .with_reference(self.reference)
            })
            .collect()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nucleotide: {}", self.nucleotide_string())?;
        write!(f, "protein: [{}]", self.protein.iter().join(", "))
    }
}

// Reads codons from `frame` on, skipping gaps. Each full codon yields three elements, one per
// nucleotide, carrying the nucleotide's index in `nucleotide`. Translation ends after the first
// stop codon; a trailing partial codon is dropped.
pub fn translate(nucleotide: &[char], frame: usize, code: &GeneticCode) -> Vec<AminoAcid> {
    let mut protein = Vec::new();
    let mut codon: Vec<(char, usize)> = Vec::with_capacity(3);

    for (i, &nuc) in nucleotide.iter().enumerate().skip(frame) {
        if nuc == GAP {
            continue;
        }
        codon.push((nuc, i));
        if codon.len() < 3 {
            continue;
        }
        let residue = code.translate_codon([codon[0].0, codon[1].0, codon[2].0]);
        protein.extend(
            codon
                .iter()
                .zip(CodonPart::ALL)
                .map(|(&(_, position), number)| AminoAcid {
                    text: residue,
                    position,
                    number,
                }),
        );
        codon.clear();
        if residue == STOP {
            break;
        }
    }

    protein
}
