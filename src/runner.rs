// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, path::PathBuf};

use clap::{Parser, ValueEnum};
use log::info;

use crate::config::RenderConfig;
use crate::errors::AnnotatorError;
use crate::render::Renderer;
use crate::seq::fasta::{mark_reference, read_fasta_file};
use crate::seq::input::{build_sequences, read_input_file, Input};
use crate::seq::sequence::Sequence;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
pub struct Cli {
    /// Input file (JSON document, or FastA with -f fasta)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output SVG file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input file format
    #[arg(short, long = "format", default_value_t = InputFormat::Json,
        help = "Input file format [json|fasta] (or just j|f); default: json",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    pub format: InputFormat,

    /// Id of the reference sequence (FastA input only; default: first record)
    #[arg(short, long)]
    pub reference: Option<String>,

    /// Font size [px]
    #[arg(long)]
    pub fontsize: Option<f64>,

    /// Font family
    #[arg(long = "font-family")]
    pub font_family: Option<String>,

    /// Columns per block
    #[arg(long = "block-width")]
    pub block_width: Option<usize>,

    /// Interval between tick marks
    #[arg(long)]
    pub offset: Option<usize>,

    /// Offset added to coordinate labels
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<i64>,

    /// Do not draw the translation rows
    #[arg(long = "no-translation")]
    pub no_translation: bool,

    /// SVG viewBox, e.g. "0 0 1500 750"
    #[arg(long = "view-box")]
    pub view_box: Option<String>,

    /// NCBI genetic code table id
    #[arg(long = "genetic-code")]
    pub genetic_code: Option<u8>,

    /// Draw annotations relative to their block rather than to the whole sequence
    #[arg(long = "rebase-annotations")]
    pub rebase_annotations: bool,

    /// Info mode (print a summary of the input, render nothing)
    #[arg(long)]
    pub info: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
pub enum InputFormat {
    #[clap(name = "json")]
    #[clap(alias = "j")]
    Json,
    #[clap(name = "fasta")]
    #[clap(alias = "f")]
    FastA,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputFormat::Json => "json",
            InputFormat::FastA => "fasta",
        };
        write!(f, "{}", s)
    }
}

impl Cli {
    // Command-line values win over the input file's config block.
    fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(fontsize) = self.fontsize {
            config.fontsize = fontsize;
        }
        if let Some(family) = &self.font_family {
            config.fontfamily = family.clone();
        }
        if let Some(width) = self.block_width {
            config.block_width = width;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if self.no_translation {
            config.with_translation = false;
        }
        if let Some(view_box) = &self.view_box {
            config.view_box = view_box.clone();
        }
        if let Some(code) = self.genetic_code {
            config.genetic_code = code;
        }
        if self.rebase_annotations {
            config.rebase_annotations = true;
        }
    }
}

pub fn load(cli: &Cli) -> Result<Input, AnnotatorError> {
    match cli.format {
        InputFormat::Json => {
            let mut input = read_input_file(&cli.input)?;
            let before = input.config.clone();
            cli.apply_overrides(&mut input.config);
            input.config.validate()?;
            // Translation depends on the genetic code, so a new one means translating again.
            if input.config.genetic_code != before.genetic_code {
                let code = input.config.code()?;
                input.sequences = input
                    .sequences
                    .into_iter()
                    .map(|s| {
                        Sequence::translated(s.id.clone(), &s.nucleotide_string(), s.frame, &code)
                            .with_annotations(s.annotations)
                            .with_reference(s.reference)
                    })
                    .collect();
            }
            Ok(input)
        }
        InputFormat::FastA => {
            let mut records = read_fasta_file(&cli.input)?;
            mark_reference(&mut records, cli.reference.as_deref())?;
            let mut config = RenderConfig::default();
            cli.apply_overrides(&mut config);
            config.validate()?;
            let sequences = build_sequences(records, &config)?;
            Ok(Input { config, sequences })
        }
    }
}

pub fn output_info(cli: &Cli, input: &Input) {
    let aln_len = input.sequences.iter().map(|s| s.len()).max().unwrap_or(0);
    println!("name: {}", cli.input.display());
    println!("nb_sequences: {}", input.sequences.len());
    println!("nb_columns: {}", aln_len);
    println!(
        "nb_blocks: {}",
        aln_len.div_ceil(input.config.block_width)
    );
    for seq in &input.sequences {
        println!(
            "{}{}\t{} nt\t{} aa",
            seq.id,
            if seq.reference { " (reference)" } else { "" },
            seq.len(),
            seq.protein.len() / 3
        );
    }
    println!();
}

pub fn run_with(cli: &Cli) -> Result<(), AnnotatorError> {
    let input = load(cli)?;
    info!(
        "Loaded {} sequences from {}",
        input.sequences.len(),
        cli.input.display()
    );

    if cli.info {
        output_info(cli, &input);
        return Ok(());
    }

    let output = cli.output.as_ref().ok_or_else(|| {
        AnnotatorError::MalformedInput(String::from("An output file is required (-o)"))
    })?;
    let renderer = Renderer::new(&input.sequences, &input.config)?;
    renderer.emit(output)
}

pub fn run() -> Result<(), AnnotatorError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    run_with(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "gene-annotator",
            "-i",
            "in.fas",
            "-o",
            "out.svg",
            "-f",
            "f",
            "--block-width",
            "30",
            "--start",
            "-5",
            "--no-translation",
        ])
        .unwrap();
        assert_eq!(cli.format, InputFormat::FastA);
        let mut config = RenderConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.block_width, 30);
        assert_eq!(config.start, -5);
        assert!(!config.with_translation);
        assert_eq!(config.offset, 10);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["gene-annotator", "-o", "out.svg"]).is_err());
    }

    #[test]
    fn test_load_json_with_genetic_code_override() {
        let cli = Cli::try_parse_from([
            "gene-annotator",
            "-i",
            "tests/data/example.json",
            "--genetic-code",
            "2",
        ])
        .unwrap();
        let input = load(&cli).unwrap();
        assert_eq!(input.config.genetic_code, 2);
        assert_eq!(input.config.block_width, 12);
        // The reference ends in TGA, a stop in the standard code but Trp in table 2.
        assert!(input.sequences[0].protein_string().ends_with('W'));
        assert_eq!(input.sequences[0].annotations.len(), 2);
        assert!(input.sequences[0].reference);
    }

    #[test]
    fn test_load_fasta() {
        let cli = Cli::try_parse_from([
            "gene-annotator",
            "-i",
            "tests/data/example.fas",
            "-f",
            "fasta",
            "-r",
            "seq1",
        ])
        .unwrap();
        let input = load(&cli).unwrap();
        assert_eq!(input.sequences.len(), 3);
        assert!(!input.sequences[0].reference);
        assert!(input.sequences[1].reference);
        assert_eq!(input.config, RenderConfig::default());
    }

    #[test]
    fn test_missing_output() {
        let cli = Cli::try_parse_from(["gene-annotator", "-i", "tests/data/example.json"]).unwrap();
        assert!(matches!(
            run_with(&cli),
            Err(AnnotatorError::MalformedInput(_))
        ));
    }
}
