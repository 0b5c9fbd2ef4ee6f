// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod config;
pub mod errors;
pub mod genetic_code;
pub mod matching;
pub mod render;
mod runner;
pub mod seq;
pub mod similarity;

use crate::errors::AnnotatorError;

pub use crate::config::RenderConfig;
pub use crate::render::{render_to_string, Renderer};
pub use crate::seq::sequence::Sequence;

pub fn run() -> Result<(), AnnotatorError> {
    runner::run()
}
