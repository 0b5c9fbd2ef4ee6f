// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::errors::AnnotatorError;
use crate::seq::file::SeqFile;
use crate::seq::record::SequenceRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, AnnotatorError> {
    let file = File::open(path)?;
    read_fasta(file)
}

pub fn read_fasta<R: Read>(source: R) -> Result<SeqFile, AnnotatorError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SequenceRecord> = None;

    for (linenum, line) in BufReader::new(source).lines().enumerate() {
        let l = line?;
        let l = l.trim_end();
        if let Some(hdr) = l.strip_prefix('>') {
            // push existing record
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            // The id is the first word of the header; the rest is description.
            let id = hdr.split_whitespace().next().unwrap_or("");
            current_record = Some(SequenceRecord::new(id, String::new()));
        } else if l.is_empty() {
            continue;
        } else {
            // append line to current record's sequence
            match current_record.as_mut() {
                Some(record) => record.sequence.push_str(l),
                None => {
                    return Err(AnnotatorError::MalformedInput(format!(
                        "Sequence without header at line {}",
                        linenum + 1
                    )))
                }
            }
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    Ok(result)
}

// Flags the record called `reference_id` as reference, or the first record if no id is given.
pub fn mark_reference(
    records: &mut SeqFile,
    reference_id: Option<&str>,
) -> Result<(), AnnotatorError> {
    let idx = match reference_id {
        Some(id) => records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| {
                AnnotatorError::MalformedInput(format!("No sequence with id '{}'", id))
            })?,
        None => 0,
    };
    if let Some(record) = records.get_mut(idx) {
        record.reference = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fasta_file() {
        let path = "tests/data/example.fas";
        let fasta: SeqFile = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta.len(), 3);
        assert_eq!(fasta[0].id, "ref");
        assert_eq!(fasta[0].sequence, "ATGGCCAAGTTCGAACTG---TGA");
        assert_eq!(fasta[2].id, "seq2");
    }

    #[test]
    fn test_multiline_records_and_descriptions() {
        let text = ">s1 some description\nATG\nCCC\n\n>s2\nATG\r\nCCA\n";
        let fasta = read_fasta(text.as_bytes()).unwrap();
        assert_eq!(fasta.len(), 2);
        assert_eq!(fasta[0].id, "s1");
        assert_eq!(fasta[0].sequence, "ATGCCC");
        assert_eq!(fasta[1].sequence, "ATGCCA");
    }

    #[test]
    fn test_sequence_before_header() {
        let res = read_fasta("ATG\n>s1\nATG\n".as_bytes());
        assert!(matches!(res, Err(AnnotatorError::MalformedInput(_))));
    }

    #[test]
    fn test_mark_reference() {
        let mut fasta = read_fasta(">a\nAT\n>b\nAT\n".as_bytes()).unwrap();
        mark_reference(&mut fasta, Some("b")).unwrap();
        assert!(!fasta[0].reference);
        assert!(fasta[1].reference);

        let mut fasta = read_fasta(">a\nAT\n>b\nAT\n".as_bytes()).unwrap();
        mark_reference(&mut fasta, None).unwrap();
        assert!(fasta[0].reference);

        assert!(mark_reference(&mut fasta, Some("zz")).is_err());
    }
}
