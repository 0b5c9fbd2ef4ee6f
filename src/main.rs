// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use gene_annotator::errors::AnnotatorError;

fn main() -> Result<(), AnnotatorError> {
    gene_annotator::run()
}
