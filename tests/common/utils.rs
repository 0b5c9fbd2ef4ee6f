// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use gene_annotator::{
    render_to_string,
    seq::input::{read_input_file, Input},
    RenderConfig,
};

pub const EXAMPLE_JSON: &str = "tests/data/example.json";
pub const EXAMPLE_FASTA: &str = "tests/data/example.fas";

#[allow(dead_code)]
pub fn example_input() -> Input {
    read_input_file(EXAMPLE_JSON).expect("read")
}

// Renders the example input after letting `tweak` adjust its configuration.
#[allow(dead_code)]
pub fn render_example<F>(tweak: F) -> String
where
    F: FnOnce(&mut RenderConfig),
{
    let mut input = example_input();
    tweak(&mut input.config);
    render_to_string(&input.sequences, &input.config).expect("render")
}

#[allow(dead_code)]
pub fn count_elements(svg: &str, tag: &str) -> usize {
    svg.matches(&format!("<{} ", tag)).count()
}

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write test input");
    path
}
