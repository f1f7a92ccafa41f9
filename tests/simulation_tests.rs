// tests/simulation_tests.rs

// Import necessary types from the qssm crate
use qssm::{
    Circuit, CircuitBuilder, Gate, Operation, QssmError, QubitId, ShotResult, Simulator, bell_pair,
};

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::PI;

// Helper function to create QubitId for tests
fn qid(id: u64) -> QubitId {
    QubitId(id)
}

// Helper function to check a measured bit in a shot result
fn check_bit(result: &ShotResult, qubit_id: QubitId, expected: u8) {
    match result.bit(&qubit_id) {
        Some(bit) => assert_eq!(bit, expected, "Mismatch for {}", qubit_id),
        None => panic!("{} was not measured", qubit_id),
    }
}

#[test]
fn test_empty_circuit() -> Result<(), QssmError> {
    let circuit = Circuit::new();
    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = simulator.run(&circuit, &mut rng)?;

    assert!(
        result.all_bits().is_empty(),
        "Empty circuit should yield empty results"
    );
    Ok(())
}

#[test]
fn test_initial_state_measurement() -> Result<(), QssmError> {
    // Measuring the default |00> state yields zeros for both qubits
    let q0 = qid(0);
    let q1 = qid(1);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Measure {
            targets: vec![q0, q1],
        })
        .build();

    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = simulator.run(&circuit, &mut rng)?;

    assert_eq!(result.all_bits().len(), 2, "Should have two measured bits");
    check_bit(&result, q0, 0);
    check_bit(&result, q1, 0);
    assert_eq!(result.bitstring(), "00");
    Ok(())
}

#[test]
fn test_flip_measurement() -> Result<(), QssmError> {
    // |0> flipped to |1> measures 1 deterministically
    let q0 = qid(0);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Gate {
            target: q0,
            gate: Gate::Flip,
        })
        .add_op(Operation::Measure { targets: vec![q0] })
        .build();

    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = simulator.run(&circuit, &mut rng)?;

    check_bit(&result, q0, 1);
    Ok(())
}

#[test]
fn test_controlled_flip_with_unset_control() -> Result<(), QssmError> {
    // Control stays |0>, so the target must not flip
    let q0 = qid(0);
    let q1 = qid(1);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Controlled {
            control: q0,
            target: q1,
            gate: Gate::Flip,
        })
        .add_op(Operation::Measure {
            targets: vec![q0, q1],
        })
        .build();

    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = simulator.run(&circuit, &mut rng)?;

    check_bit(&result, q0, 0);
    check_bit(&result, q1, 0);
    Ok(())
}

#[test]
fn test_controlled_flip_with_set_control() -> Result<(), QssmError> {
    // Flip the control first: |10> -> controlled flip -> |11>
    let q0 = qid(0);
    let q1 = qid(1);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Gate {
            target: q0,
            gate: Gate::Flip,
        })
        .add_op(Operation::Controlled {
            control: q0,
            target: q1,
            gate: Gate::Flip,
        })
        .add_op(Operation::Measure {
            targets: vec![q0, q1],
        })
        .build();

    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = simulator.run(&circuit, &mut rng)?;

    check_bit(&result, q0, 1);
    check_bit(&result, q1, 1);
    assert_eq!(result.bitstring(), "11");
    Ok(())
}

#[test]
fn test_phase_shift_leaves_probabilities_unchanged() -> Result<(), QssmError> {
    // A phase on |1> is invisible to a computational-basis measurement
    let q0 = qid(0);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Gate {
            target: q0,
            gate: Gate::Flip,
        })
        .add_op(Operation::PhaseShift {
            target: q0,
            theta: PI / 2.0,
        })
        .add_op(Operation::Measure { targets: vec![q0] })
        .build();

    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..32 {
        let result = simulator.run(&circuit, &mut rng)?;
        check_bit(&result, q0, 1);
    }
    Ok(())
}

#[test]
fn test_same_control_and_target_rejected() {
    let q0 = qid(0);
    let circuit = CircuitBuilder::new()
        .add_op(Operation::Controlled {
            control: q0,
            target: q0,
            gate: Gate::Flip,
        })
        .build();

    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = simulator.run(&circuit, &mut rng);
    assert!(matches!(outcome, Err(QssmError::InvalidOperation { .. })));
}

#[test]
fn test_tally_total_matches_shot_count() -> Result<(), QssmError> {
    let circuit = bell_pair(qid(0), qid(1));
    let simulator = Simulator::new();

    for shots in [1u64, 2, 64, 1000] {
        let mut rng = StdRng::seed_from_u64(17);
        let tally = simulator.sample(&circuit, shots, &mut rng)?;
        assert_eq!(tally.total(), shots, "tally total for {} shots", shots);
    }
    Ok(())
}

#[test]
fn test_cross_terms_absent_at_every_scale() -> Result<(), QssmError> {
    // The modeled invariant: "01" and "10" never occur, so the cross-term
    // fraction is pinned at zero no matter how many shots are taken.
    let circuit = bell_pair(qid(0), qid(1));
    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(21);

    for shots in [16u64, 256, 4096] {
        let tally = simulator.sample(&circuit, shots, &mut rng)?;
        assert_eq!(tally.cross_term_count(), 0);
        assert_eq!(tally.cross_term_fraction(), 0.0);
    }
    Ok(())
}

#[test]
fn test_bell_distribution_is_two_sided() -> Result<(), QssmError> {
    // With enough shots both correlated outcomes must show up.
    let circuit = bell_pair(qid(0), qid(1));
    let simulator = Simulator::new();
    let mut rng = StdRng::seed_from_u64(8);

    let tally = simulator.sample(&circuit, 2048, &mut rng)?;
    assert!(tally.count("00") > 0, "|00> never observed");
    assert!(tally.count("11") > 0, "|11> never observed");
    Ok(())
}

#[test]
fn test_seeded_batches_are_identical() -> Result<(), QssmError> {
    let circuit = bell_pair(qid(0), qid(1));
    let simulator = Simulator::new();

    let mut rng_a = StdRng::seed_from_u64(4242);
    let mut rng_b = StdRng::seed_from_u64(4242);
    let tally_a = simulator.sample(&circuit, 1024, &mut rng_a)?;
    let tally_b = simulator.sample(&circuit, 1024, &mut rng_b)?;

    assert_eq!(tally_a, tally_b);
    assert_eq!(tally_a.sorted_counts(), tally_b.sorted_counts());
    Ok(())
}

#[test]
fn test_circuit_display_lists_wires() {
    let circuit = bell_pair(qid(0), qid(1));
    let rendered = format!("{}", circuit);
    assert!(rendered.contains("3 operations on 2 qubits"));
    assert!(rendered.contains("q0"));
    assert!(rendered.contains("q1"));
    assert!(rendered.contains("H"));
    assert!(rendered.contains("M"));
}
