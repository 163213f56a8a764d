//! Property-based tests for the encoding laws.
//!
//! - coupling direction never matters: swapping every J key yields an
//!   identical snapshot payload;
//! - a QUBO and the Ising built from its coefficient split encode
//!   identically;
//! - every produced snapshot survives a JSON encode/decode cycle intact.

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use serde_json::Map;

use muninn_inspect::normalize::normalize_problem;
use muninn_inspect::{InspectorSnapshot, Policy, from_problem_and_response};
use muninn_model::{Ising, Problem, ProblemType, Qubo};
use muninn_solver::{Solver, SolverResponse, SolverTopology};

const N: u32 = 5;

fn arb_couplings() -> impl Strategy<Value = FxHashMap<(u32, u32), f64>> {
    prop::collection::vec(((0..N, 0..N), -2.0f64..2.0), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .filter(|((u, v), _)| u != v)
            .collect()
    })
}

fn arb_linear() -> impl Strategy<Value = FxHashMap<u32, f64>> {
    prop::collection::vec((0..N, -2.0f64..2.0), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

fn arb_spin_row() -> impl Strategy<Value = Vec<i8>> {
    prop::collection::vec(prop::sample::select(vec![-1i8, 1]), N as usize)
}

fn params(num_reads: u32) -> Map<String, serde_json::Value> {
    let mut params = Map::new();
    params.insert("num_reads".to_string(), num_reads.into());
    params
}

proptest! {
    #[test]
    fn quad_is_invariant_under_key_direction(j in arb_couplings()) {
        let topology = SolverTopology::complete(N);
        let active: Vec<u32> = (0..N).collect();

        let swapped: FxHashMap<(u32, u32), f64> =
            j.iter().map(|(&(u, v), &bias)| ((v, u), bias)).collect();

        let mut warnings = Vec::new();
        let (lin_a, quad_a) = normalize_problem(
            &Ising::from_couplings(j),
            &topology,
            &active,
            Policy::default(),
            &mut warnings,
        )
        .unwrap();
        let (lin_b, quad_b) = normalize_problem(
            &Ising::from_couplings(swapped),
            &topology,
            &active,
            Policy::default(),
            &mut warnings,
        )
        .unwrap();

        prop_assert_eq!(lin_a, lin_b);
        prop_assert_eq!(quad_a, quad_b);
        prop_assert!(warnings.is_empty());
    }

    #[test]
    fn qubo_and_split_ising_agree(
        j in arb_couplings(),
        diag in arb_linear(),
    ) {
        let mut q = j;
        for (qubit, bias) in diag {
            q.insert((qubit, qubit), bias);
        }
        let qubo = Qubo::new(q);
        let ising = qubo.split();

        let topology = SolverTopology::complete(N);
        let active: Vec<u32> = (0..N).collect();
        let mut warnings = Vec::new();

        let (lin_q, quad_q) = normalize_problem(
            &qubo.split(),
            &topology,
            &active,
            Policy::default(),
            &mut warnings,
        )
        .unwrap();
        let (lin_i, quad_i) =
            normalize_problem(&ising, &topology, &active, Policy::default(), &mut warnings)
                .unwrap();

        prop_assert_eq!(lin_q, lin_i);
        prop_assert_eq!(quad_q, quad_i);
    }

    #[test]
    fn snapshot_roundtrips_through_json(
        h in arb_linear(),
        j in arb_couplings(),
        row in arb_spin_row(),
        energy in -10.0f64..10.0,
        num_reads in 1u32..1000,
    ) {
        let solver = Solver::new("prop_solver", SolverTopology::complete(N));
        let response = SolverResponse::new(solver, ProblemType::Ising)
            .with_problem_id("prop-req")
            .with_active_variables((0..N).collect())
            .with_shot(row, energy, num_reads);

        let problem = Problem::Ising(Ising::new(h, j));
        let snapshot =
            from_problem_and_response(&problem, &response, params(num_reads)).unwrap();

        let decoded: InspectorSnapshot =
            serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded, snapshot);
    }
}
