// src/operations/mod.rs

//! Defines the operations a circuit can apply to its qubits: single-qubit
//! gates, controlled gates, phase shifts, and measurement.

use crate::core::QubitId;
use num_complex::Complex;
use num_traits::Zero;

/// The single-qubit gates understood by the simulation engine.
///
/// The set is intentionally small: enough to prepare and probe the
/// entangled pair the correlation sampler studies, plus the Pauli basis
/// used by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Equal superposition (Hadamard).
    Superposition,
    /// Bit flip (Pauli X).
    Flip,
    /// Phase flip (Pauli Z).
    PhaseFlip,
}

impl Gate {
    /// The 2x2 unitary for this gate in the {|0>, |1>} basis.
    pub(crate) fn matrix(&self) -> [[Complex<f64>; 2]; 2] {
        const ONE_OVER_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
        match self {
            Gate::Superposition => [
                [
                    Complex::new(ONE_OVER_SQRT_2, 0.0),
                    Complex::new(ONE_OVER_SQRT_2, 0.0),
                ],
                [
                    Complex::new(ONE_OVER_SQRT_2, 0.0),
                    Complex::new(-ONE_OVER_SQRT_2, 0.0),
                ],
            ],
            Gate::Flip => [
                [Complex::zero(), Complex::new(1.0, 0.0)],
                [Complex::new(1.0, 0.0), Complex::zero()],
            ],
            Gate::PhaseFlip => [
                [Complex::new(1.0, 0.0), Complex::zero()],
                [Complex::zero(), Complex::new(-1.0, 0.0)],
            ],
        }
    }

    /// One- or two-character symbol used by the circuit diagram renderer.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::Superposition => "H",
            Gate::Flip => "X",
            Gate::PhaseFlip => "Z",
        }
    }
}

/// One step in a circuit's ordered operation sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Applies a single-qubit gate.
    Gate {
        /// The qubit the gate acts on.
        target: QubitId,
        /// Which gate to apply.
        gate: Gate,
    },

    /// Applies a gate to `target` conditioned on `control` being |1>.
    Controlled {
        /// The qubit whose state gates the interaction.
        control: QubitId,
        /// The qubit that is transformed when the control is set.
        target: QubitId,
        /// Which gate to apply to the target.
        gate: Gate,
    },

    /// Applies the phase factor `e^(i*theta)` to the |1> component of a
    /// single qubit.
    PhaseShift {
        /// The qubit whose |1> amplitude picks up the phase.
        target: QubitId,
        /// Phase angle in radians.
        theta: f64,
    },

    /// Samples a definite bit value for each target qubit from the Born
    /// distribution of the current state, collapsing it.
    Measure {
        /// The qubits to read out.
        targets: Vec<QubitId>,
    },
}

impl Operation {
    /// Returns every qubit id mentioned by this operation's parameters.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Gate { target, .. } => vec![*target],
            Operation::Controlled { control, target, .. } => vec![*control, *target],
            Operation::PhaseShift { target, .. } => vec![*target],
            Operation::Measure { targets } => targets.clone(),
        }
    }
}
