// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod annotation;
pub mod fasta;
pub mod file;
pub mod input;
pub mod record;
pub mod sequence;
