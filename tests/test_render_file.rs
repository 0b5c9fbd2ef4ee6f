// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use std::fs;

use crate::common::utils;
use gene_annotator::{
    errors::AnnotatorError,
    seq::{
        fasta::{mark_reference, read_fasta_file},
        input::{build_sequences, parse_input},
    },
    RenderConfig, Renderer,
};

#[test]
fn emit_example_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.svg");
    let input = utils::example_input();
    Renderer::new(&input.sequences, &input.config)
        .unwrap()
        .emit(&path)
        .unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert_eq!(svg, utils::render_example(|_| {}));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn annotations_keep_sequence_coordinates() {
    // The "site" annotation (14..=17) falls in the second 12-column block; with the default
    // settings it is drawn at its whole-sequence position.
    let svg = utils::render_example(|_| {});
    assert!(svg.contains(
        "<line x1=\"370\" y1=\"314\" x2=\"450\" y2=\"314\" stroke=\"#3366cc\" stroke-width=\"5\"/>"
    ));

    let svg = utils::render_example(|c| c.rebase_annotations = true);
    assert!(svg.contains(
        "<line x1=\"130\" y1=\"314\" x2=\"210\" y2=\"314\" stroke=\"#3366cc\" stroke-width=\"5\"/>"
    ));
}

#[test]
fn fasta_renders_like_json() {
    let mut records = read_fasta_file(utils::EXAMPLE_FASTA).unwrap();
    mark_reference(&mut records, None).unwrap();
    let config = RenderConfig {
        block_width: 12,
        offset: 5,
        ..RenderConfig::default()
    };
    let sequences = build_sequences(records, &config).unwrap();
    assert_eq!(sequences.len(), 3);
    assert!(sequences[0].reference);

    // Same alignment as the JSON example, minus the annotations.
    let mut json = utils::example_input();
    for seq in json.sequences.iter_mut() {
        seq.annotations.clear();
    }
    assert_eq!(
        gene_annotator::render_to_string(&sequences, &config).unwrap(),
        gene_annotator::render_to_string(&json.sequences, &json.config).unwrap()
    );
}

#[test]
fn failed_render_leaves_existing_output_alone() {
    let dir = tempfile::tempdir().unwrap();
    let out = utils::write_file(dir.path(), "out.svg", "previous");
    let input = parse_input(
        r#"{"sequences": [{"id": "a", "sequence": "ATG"}, {"id": "b", "sequence": "ATA"}]}"#,
    )
    .unwrap();
    let res = Renderer::new(&input.sequences, &input.config)
        .unwrap()
        .emit(&out);
    assert!(matches!(
        res,
        Err(AnnotatorError::NoReferenceSequence { block: 0 })
    ));
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn malformed_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = utils::write_file(dir.path(), "bad.json", "{\"sequences\": [");
    assert!(matches!(
        gene_annotator::seq::input::read_input_file(&path),
        Err(AnnotatorError::MalformedInput(_))
    ));
}
