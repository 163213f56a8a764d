//! The three snapshot entry points.
//!
//! Each input shape — raw problem + response, BQM + embedding +
//! response, BQM + resolved sample set — funnels into the same pipeline:
//! normalize the problem onto the solver coordinate system, encode the
//! answer block, assemble the snapshot. Only the embedding-specific
//! steps branch per shape. The adapter holds the leniency [`Policy`] and
//! the chain strength used when re-encoding a BQM through a fixed
//! embedding; the free functions at the bottom use the defaults.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use muninn_model::{
    BinaryQuadraticModel, DEFAULT_CHAIN_STRENGTH, Embedding, Ising, Problem, ProblemType,
    SampleSet,
};
use muninn_solver::{Solver, SolverResponse, SolverTopology, UNUSED_QUBIT};

use crate::encode::encode_answer;
use crate::error::{InspectError, InspectResult, Leniency, Policy};
use crate::normalize::normalize_problem;
use crate::reconcile::reconcile_chain_breaks;
use crate::snapshot::{Answer, Details, InspectorSnapshot, ProblemData, ProblemPayload};

/// Snapshot encoder with configurable leniency.
///
/// Stateless apart from configuration; every conversion is a pure
/// function of its inputs and identical inputs produce byte-identical
/// snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adapter {
    policy: Policy,
    chain_strength: f64,
}

impl Default for Adapter {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            chain_strength: DEFAULT_CHAIN_STRENGTH,
        }
    }
}

impl Adapter {
    /// Adapter with the default (tolerant) policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leniency policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the chain strength used when re-encoding a BQM through a
    /// fixed embedding.
    pub fn with_chain_strength(mut self, chain_strength: f64) -> Self {
        self.chain_strength = chain_strength;
        self
    }

    /// Snapshot from a raw physical-index problem and its response.
    pub fn from_problem_and_response(
        &self,
        problem: &Problem,
        response: &SolverResponse,
        params: Map<String, Value>,
    ) -> InspectResult<InspectorSnapshot> {
        if problem.problem_type() != response.problem_type {
            return Err(InspectError::ProblemTypeMismatch {
                response: response.problem_type,
                problem: problem.problem_type(),
            });
        }
        self.assemble_from_response(problem.display_form(), None, response, params, Vec::new())
    }

    /// Snapshot from a logical BQM, the embedding that realized it, and
    /// the raw response.
    ///
    /// The physical problem is reconstructed by re-encoding the BQM
    /// through the supplied embedding onto the solver's couplers; the
    /// embedding itself is attached to the snapshot verbatim.
    pub fn from_bqm_and_response(
        &self,
        bqm: &BinaryQuadraticModel,
        embedding: &Embedding,
        response: &SolverResponse,
        params: Map<String, Value>,
    ) -> InspectResult<InspectorSnapshot> {
        let display = self.embed_display(
            bqm,
            embedding,
            &response.solver.topology,
            response.problem_type,
        )?;
        self.assemble_from_response(display, Some(embedding), response, params, Vec::new())
    }

    /// Snapshot from a logical BQM and a resolved sample set.
    ///
    /// The sample set carries no per-physical-qubit answer, so physical
    /// rows are reconstructed by broadcasting each resolved logical
    /// value across its chain. Without an embedding there is nothing to
    /// unembed: under the default policy the logical samples pass
    /// through as physical answers with a warning, under
    /// [`Leniency::Fail`] the conversion aborts.
    pub fn from_bqm_and_sampleset(
        &self,
        bqm: &BinaryQuadraticModel,
        sampleset: &SampleSet,
        solver: &Solver,
        params: Map<String, Value>,
    ) -> InspectResult<InspectorSnapshot> {
        let problem_type = bqm.vartype.problem_type();
        let mut warnings = Vec::new();

        match sampleset.embedding().filter(|e| !e.is_empty()) {
            Some(embedding) => {
                let display =
                    self.embed_display(bqm, embedding, &solver.topology, problem_type)?;

                let known = solver.topology.qubit_set();
                let mut active = embedding.physical_qubits();
                active.retain(|q| known.contains(q));

                let rows = reconcile_chain_breaks(
                    sampleset,
                    embedding,
                    &solver.topology,
                    self.policy,
                    &mut warnings,
                )?;
                let answer = encode_answer(
                    &active,
                    &rows,
                    sampleset.energies(),
                    sampleset.num_occurrences(),
                    active.len(),
                    sampleset.timing().clone(),
                )?;

                self.assemble(
                    Details {
                        id: None,
                        solver: solver.id.clone(),
                    },
                    display,
                    Some(embedding),
                    problem_type,
                    &solver.topology,
                    &active,
                    answer,
                    params,
                    warnings,
                )
            }
            None => {
                if self.policy.missing_embedding == Leniency::Fail {
                    return Err(InspectError::MissingEmbedding);
                }
                warn!("sample set has no embedding; passing logical samples through");
                warnings.push(
                    "no embedding attached to sample set; \
                     displaying resolved logical samples as physical answers"
                        .to_string(),
                );
                self.passthrough_sampleset(bqm, sampleset, solver, problem_type, params, warnings)
            }
        }
    }

    /// Re-encode a BQM through a fixed embedding into the display form
    /// matching the response's problem type.
    fn embed_display(
        &self,
        bqm: &BinaryQuadraticModel,
        embedding: &Embedding,
        topology: &SolverTopology,
        problem_type: ProblemType,
    ) -> InspectResult<Ising> {
        let (h, j, _offset) = bqm.to_ising();
        let embedded =
            embedding.embed_ising(&h, &j, &topology.encoding_couplers, self.chain_strength)?;
        Ok(match problem_type {
            ProblemType::Ising => embedded,
            ProblemType::Qubo => embedded.to_qubo().split(),
        })
    }

    /// Shared tail for the response-carrying entry points.
    fn assemble_from_response(
        &self,
        display: Ising,
        embedding: Option<&Embedding>,
        response: &SolverResponse,
        params: Map<String, Value>,
        warnings: Vec<String>,
    ) -> InspectResult<InspectorSnapshot> {
        let answer = encode_answer(
            &response.active_variables,
            &response.solutions,
            &response.energies,
            &response.num_occurrences,
            response.num_variables,
            response.timing.clone(),
        )?;
        self.assemble(
            Details {
                id: response.problem_id.clone(),
                solver: response.solver.id.clone(),
            },
            display,
            embedding,
            response.problem_type,
            &response.solver.topology,
            &response.active_variables,
            answer,
            params,
            warnings,
        )
    }

    /// One assembly pipeline for every input shape.
    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        details: Details,
        display: Ising,
        embedding: Option<&Embedding>,
        problem_type: ProblemType,
        topology: &SolverTopology,
        active_variables: &[u32],
        answer: Answer,
        params: Map<String, Value>,
        mut warnings: Vec<String>,
    ) -> InspectResult<InspectorSnapshot> {
        let (lin, quad) =
            normalize_problem(&display, topology, active_variables, self.policy, &mut warnings)?;

        let mut payload = ProblemPayload::new(lin, quad);
        if let Some(embedding) = embedding {
            payload = payload.with_embedding(embedding);
        }

        debug!(
            solver = %details.solver,
            rows = answer.solutions.len(),
            warnings = warnings.len(),
            "assembled inspector snapshot"
        );

        Ok(InspectorSnapshot::assemble(
            details,
            ProblemData {
                problem_type,
                params,
                data: payload,
            },
            answer,
            warnings,
        ))
    }

    /// Fallback for sample sets without an embedding: treat the logical
    /// samples as the physical answer, mapping variable labels to qubit
    /// indices by parsing them as integers where possible and by column
    /// position otherwise.
    fn passthrough_sampleset(
        &self,
        bqm: &BinaryQuadraticModel,
        sampleset: &SampleSet,
        solver: &Solver,
        problem_type: ProblemType,
        params: Map<String, Value>,
        warnings: Vec<String>,
    ) -> InspectResult<InspectorSnapshot> {
        let variables = sampleset.variables();
        let parsed: Option<Vec<u32>> = variables
            .iter()
            .map(|var| var.parse::<u32>().ok())
            .collect();
        let qubits: Vec<u32> =
            parsed.unwrap_or_else(|| (0..variables.len() as u32).collect());

        // The BQM's own biases, relabelled onto those indices.
        let label_to_qubit: FxHashMap<&str, u32> = variables
            .iter()
            .map(String::as_str)
            .zip(qubits.iter().copied())
            .collect();
        let mut display = Ising::default();
        for (var, &bias) in &bqm.linear {
            if let Some(&qubit) = label_to_qubit.get(var.as_str()) {
                display.h.insert(qubit, bias);
            }
        }
        for ((u, v), &bias) in &bqm.quadratic {
            if let (Some(&qu), Some(&qv)) = (
                label_to_qubit.get(u.as_str()),
                label_to_qubit.get(v.as_str()),
            ) {
                display.j.insert((qu, qv), bias);
            }
        }

        // Full-width rows with each column's value at its qubit index.
        let width = qubits.iter().max().map_or(0, |&q| q as usize + 1);
        let rows: Vec<Vec<i8>> = sampleset
            .samples()
            .iter()
            .map(|sample| {
                let mut row = vec![UNUSED_QUBIT; width];
                for (column, &qubit) in qubits.iter().enumerate() {
                    row[qubit as usize] = sample[column];
                }
                row
            })
            .collect();

        let mut active = qubits.clone();
        active.sort_unstable();

        let answer = encode_answer(
            &active,
            &rows,
            sampleset.energies(),
            sampleset.num_occurrences(),
            variables.len(),
            sampleset.timing().clone(),
        )?;

        self.assemble(
            Details {
                id: None,
                solver: solver.id.clone(),
            },
            display,
            None,
            problem_type,
            &solver.topology,
            &active,
            answer,
            params,
            warnings,
        )
    }
}

/// Snapshot from a raw physical-index problem and its response, with
/// default policy.
pub fn from_problem_and_response(
    problem: &Problem,
    response: &SolverResponse,
    params: Map<String, Value>,
) -> InspectResult<InspectorSnapshot> {
    Adapter::new().from_problem_and_response(problem, response, params)
}

/// Snapshot from a BQM, its embedding, and the raw response, with
/// default policy.
pub fn from_bqm_and_response(
    bqm: &BinaryQuadraticModel,
    embedding: &Embedding,
    response: &SolverResponse,
    params: Map<String, Value>,
) -> InspectResult<InspectorSnapshot> {
    Adapter::new().from_bqm_and_response(bqm, embedding, response, params)
}

/// Snapshot from a BQM and a resolved sample set, with default policy.
pub fn from_bqm_and_sampleset(
    bqm: &BinaryQuadraticModel,
    sampleset: &SampleSet,
    solver: &Solver,
    params: Map<String, Value>,
) -> InspectResult<InspectorSnapshot> {
    Adapter::new().from_bqm_and_sampleset(bqm, sampleset, solver, params)
}
