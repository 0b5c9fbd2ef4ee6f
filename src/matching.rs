// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::errors::AnnotatorError;

// Position-wise equality of a candidate against a reference. Both must have the same length;
// `id` only serves to name the candidate in the error.
pub fn compute_match<T: PartialEq>(
    id: &str,
    reference: &[T],
    candidate: &[T],
) -> Result<Vec<bool>, AnnotatorError> {
    if reference.len() != candidate.len() {
        return Err(AnnotatorError::LengthMismatch {
            id: id.to_string(),
            expected: reference.len(),
            found: candidate.len(),
        });
    }
    Ok(reference
        .iter()
        .zip(candidate)
        .map(|(r, c)| r == c)
        .collect())
}

// Like compute_match(), but over the candidate's length: positions past the end of the
// reference are mismatches. Translated rows differ in length whenever a stop codon or a gap
// shifts the codons, so this is what the protein row uses.
pub fn compute_match_padded<T: PartialEq>(reference: &[T], candidate: &[T]) -> Vec<bool> {
    candidate
        .iter()
        .enumerate()
        .map(|(i, c)| reference.get(i) == Some(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_positional() {
        let m = compute_match("s", &['A', 'C'], &['A', 'T']).unwrap();
        assert_eq!(m, vec![true, false]);
    }

    #[test]
    fn test_self_match_all_true() {
        let seq: Vec<char> = "ATG-CGATTA".chars().collect();
        let m = compute_match("s", &seq, &seq).unwrap();
        assert!(m.iter().all(|&b| b));
        assert_eq!(m.len(), seq.len());
    }

    #[test]
    fn test_length_mismatch() {
        let e = compute_match("cand", &['A', 'C', 'G'], &['A', 'C']).unwrap_err();
        match e {
            AnnotatorError::LengthMismatch {
                id,
                expected,
                found,
            } => {
                assert_eq!(id, "cand");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_padded_shorter_reference() {
        let m = compute_match_padded(&['M', 'K'], &['M', 'R', 'L']);
        assert_eq!(m, vec![true, false, false]);
    }

    #[test]
    fn test_padded_equal_length_agrees() {
        let r = ['M', 'K', '*'];
        let c = ['M', 'R', '*'];
        assert_eq!(
            compute_match_padded(&r, &c),
            compute_match("c", &r, &c).unwrap()
        );
    }
}
