// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

#[test]
fn renders_example_without_panic() {
    let svg = utils::render_example(|_| {});

    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(svg.contains("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1500 750\">"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<svg ").count(), 1);
}

#[test]
fn element_counts() {
    let svg = utils::render_example(|_| {});

    // ids (3 x 2 blocks), nucleotides (3 x 24), ticks (4), annotation labels (2), residues:
    // ref and seq1 have 7 codons each, seq2 has 6.
    assert_eq!(utils::count_elements(&svg, "text"), 6 + 72 + 4 + 2 + 20);
    // One left and one right bracket per codon.
    assert_eq!(utils::count_elements(&svg, "polyline"), 2 * 20);
    // Tick marks, annotation bars, and two bracket bars per codon.
    assert_eq!(utils::count_elements(&svg, "line"), 4 + 2 + 2 * 20);
}

#[test]
fn without_translation_there_are_no_brackets() {
    let svg = utils::render_example(|c| c.with_translation = false);
    assert_eq!(utils::count_elements(&svg, "polyline"), 0);
    assert_eq!(utils::count_elements(&svg, "text"), 6 + 72 + 4 + 2);
}

#[test]
fn tick_labels() {
    let svg = utils::render_example(|_| {});
    for label in [5, 10, 15, 20] {
        assert!(
            svg.contains(&format!(">{}</text>", label)),
            "tick {} missing",
            label
        );
    }
    assert!(!svg.contains(">25</text>"));

    let svg = utils::render_example(|c| c.start = 1000);
    assert!(svg.contains(">1005</text>"));
    assert!(svg.contains(">1020</text>"));
}

#[test]
fn colors() {
    let svg = utils::render_example(|_| {});
    // Stop codons of ref and seq1; seq2 is frame-shifted and has none.
    assert_eq!(svg.matches("fill=\"purple\"").count(), 2);
    // seq1: one nucleotide; seq2: gap, T->A, and residues S, S, N, C.
    assert_eq!(svg.matches("fill=\"red\"").count(), 1 + 2 + 4);
}
