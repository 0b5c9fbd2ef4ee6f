// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Pairwise semantic similarity between ontology terms (e.g. GO ids), and the similarity graph
// built from it. The metric itself (Resnik, Lin, Wang, ...) lives with whatever ontology the
// caller loaded; it is passed in explicitly rather than looked up from global state.

use std::collections::HashMap;

pub trait SimilarityMetric {
    fn score(&self, term_a: &str, term_b: &str) -> f64;
}

impl<F> SimilarityMetric for F
where
    F: Fn(&str, &str) -> f64,
{
    fn score(&self, term_a: &str, term_b: &str) -> f64 {
        self(term_a, term_b)
    }
}

// Full n x n matrix, row i holding the scores of terms[i] against every term.
pub fn similarity_matrix<S: AsRef<str>>(
    terms: &[S],
    metric: &dyn SimilarityMetric,
) -> Vec<Vec<f64>> {
    terms
        .iter()
        .map(|a| {
            terms
                .iter()
                .map(|b| metric.score(a.as_ref(), b.as_ref()))
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityEdge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

// Undirected, weighted graph over the terms: one edge per unordered pair scoring at least
// `min_score`. Self-similarity is not an edge.
#[derive(Debug, Clone)]
pub struct SimilarityGraph {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<SimilarityEdge>,
}

impl SimilarityGraph {
    pub fn new<S: AsRef<str>>(terms: &[S], metric: &dyn SimilarityMetric, min_score: f64) -> Self {
        let terms: Vec<String> = terms.iter().map(|t| t.as_ref().to_string()).collect();
        let matrix = similarity_matrix(&terms[..], metric);
        let mut edges = Vec::new();
        for (i, row) in matrix.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate().take(i) {
                if weight >= min_score {
                    edges.push(SimilarityEdge { a: j, b: i, weight });
                }
            }
        }
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        SimilarityGraph {
            terms,
            index,
            edges,
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn edges(&self) -> &[SimilarityEdge] {
        &self.edges
    }

    // Terms linked to `term`, with edge weights, in edge order.
    pub fn neighbours(&self, term: &str) -> Vec<(&str, f64)> {
        let Some(&idx) = self.index.get(term) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter_map(|e| {
                if e.a == idx {
                    Some((self.terms[e.b].as_str(), e.weight))
                } else if e.b == idx {
                    Some((self.terms[e.a].as_str(), e.weight))
                } else {
                    None
                }
            })
            .collect()
    }
}
