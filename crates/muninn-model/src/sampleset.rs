//! Resolved logical sample sets.
//!
//! A sample set is the post-processed view of a solver run: chain breaks
//! have already been resolved, so each shot carries exactly one value per
//! logical variable. Variable order is stable and shared by every row.
//! When the sample set was produced through an embedding composite, that
//! embedding rides along so the display layer can project logical values
//! back onto physical qubits.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::embedding::Embedding;
use crate::error::{ModelError, ModelResult};

/// Resolved per-shot logical samples with a stable variable order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    variables: Vec<String>,
    samples: Vec<Vec<i8>>,
    energies: Vec<f64>,
    num_occurrences: Vec<u32>,
    embedding: Option<Embedding>,
    timing: Map<String, Value>,
}

impl SampleSet {
    /// Create a sample set, validating that rows, energies and
    /// occurrence counts are parallel and that every row matches the
    /// variable order in width.
    pub fn new(
        variables: Vec<String>,
        samples: Vec<Vec<i8>>,
        energies: Vec<f64>,
        num_occurrences: Vec<u32>,
    ) -> ModelResult<Self> {
        if energies.len() != samples.len() {
            return Err(ModelError::ShapeMismatch {
                field: "energies",
                expected: samples.len(),
                actual: energies.len(),
            });
        }
        if num_occurrences.len() != samples.len() {
            return Err(ModelError::ShapeMismatch {
                field: "num_occurrences",
                expected: samples.len(),
                actual: num_occurrences.len(),
            });
        }
        for row in &samples {
            if row.len() != variables.len() {
                return Err(ModelError::ShapeMismatch {
                    field: "sample row",
                    expected: variables.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(Self {
            variables,
            samples,
            energies,
            num_occurrences,
            embedding: None,
            timing: Map::new(),
        })
    }

    /// Attach the embedding this sample set was produced through.
    pub fn with_embedding(mut self, embedding: Embedding) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Attach solver timing info.
    pub fn with_timing(mut self, timing: Map<String, Value>) -> Self {
        self.timing = timing;
        self
    }

    /// Variable labels in column order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Resolved sample rows, one per distinct returned assignment.
    pub fn samples(&self) -> &[Vec<i8>] {
        &self.samples
    }

    /// Per-row energies.
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    /// Per-row occurrence counts.
    pub fn num_occurrences(&self) -> &[u32] {
        &self.num_occurrences
    }

    /// The embedding context, when attached.
    pub fn embedding(&self) -> Option<&Embedding> {
        self.embedding.as_ref()
    }

    /// Solver timing info, empty when none was attached.
    pub fn timing(&self) -> &Map<String, Value> {
        &self.timing
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the set holds no rows.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Column index per variable label.
    pub fn variable_indices(&self) -> FxHashMap<&str, usize> {
        self.variables
            .iter()
            .enumerate()
            .map(|(idx, var)| (var.as_str(), idx))
            .collect()
    }
}
