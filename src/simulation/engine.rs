// src/simulation/engine.rs
use crate::core::{QssmError, QubitId, StateVector};
use crate::operations::Operation;
use crate::simulation::ShotResult;
use crate::validation::check_normalization;
use num_complex::Complex;
use num_traits::Zero;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// The state-vector engine behind `Simulator`: holds the joint amplitude
/// vector of all qubits in a circuit and evolves it one operation at a
/// time. (Internal visibility)
pub(crate) struct SimulationEngine {
    /// Maps qubit ids to their index (0..N-1) in the ordered list used for
    /// the global state vector.
    qubit_indices: HashMap<QubitId, usize>,
    /// The joint state vector of all simulated qubits; dimension 2^N.
    state: StateVector,
    /// Number of qubits being simulated (N).
    num_qubits: usize,
}

impl SimulationEngine {
    /// Initializes the engine for a given set of qubits in the |0...0>
    /// state.
    pub(crate) fn init(qubit_ids: &HashSet<QubitId>) -> Result<Self, QssmError> {
        if qubit_ids.is_empty() {
            return Err(QssmError::InvalidOperation {
                message: "cannot initialize simulation engine with zero qubits".to_string(),
            });
        }

        let num_qubits = qubit_ids.len();
        let dim = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or_else(|| QssmError::SimulationError {
                message: "qubit count too large, state vector dimension overflows usize"
                    .to_string(),
            })?;

        // Sorted ids give deterministic index assignment regardless of
        // HashSet iteration order.
        let mut sorted_ids: Vec<QubitId> = qubit_ids.iter().cloned().collect();
        sorted_ids.sort();
        let mut qubit_indices = HashMap::with_capacity(num_qubits);
        for (index, qubit_id) in sorted_ids.into_iter().enumerate() {
            qubit_indices.insert(qubit_id, index);
        }

        let mut initial_vec = vec![Complex::zero(); dim];
        initial_vec[0] = Complex::new(1.0, 0.0);

        Ok(Self {
            qubit_indices,
            state: StateVector::new(initial_vec),
            num_qubits,
        })
    }

    /// Read access for validation and tests.
    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    // Direct state injection for engine-level tests.
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), QssmError> {
        if state.dim() != self.state.dim() {
            Err(QssmError::SimulationError {
                message: format!(
                    "cannot set state: provided dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            })
        } else {
            self.state = state;
            Ok(())
        }
    }

    /// Applies a single non-measurement operation to the global state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), QssmError> {
        match op {
            Operation::Gate { target, gate } => {
                let target_idx = self.get_qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &gate.matrix());
            }
            Operation::PhaseShift { target, theta } => {
                let target_idx = self.get_qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &phase_shift_matrix(*theta));
            }
            Operation::Controlled { control, target, gate } => {
                let control_idx = self.get_qubit_index(control)?;
                let target_idx = self.get_qubit_index(target)?;
                if control_idx == target_idx {
                    return Err(QssmError::InvalidOperation {
                        message: "control and target qubits cannot be the same for a controlled operation"
                            .to_string(),
                    });
                }
                self.apply_controlled_gate(control_idx, target_idx, &gate.matrix());
            }
            Operation::Measure { .. } => {
                return Err(QssmError::InvalidOperation {
                    message: "Measure should not be passed directly to apply_operation"
                        .to_string(),
                });
            }
        };
        Ok(())
    }

    /// Samples one definite outcome for the targeted qubits.
    ///
    /// Outcome probabilities are the squared amplitude magnitudes of the
    /// basis states (Born rule). The draw comes from the caller-supplied
    /// RNG so that shot sequences are reproducible from an explicit seed.
    /// The state collapses to the chosen basis state and the measured bit
    /// of each target is recorded in `result`.
    pub(crate) fn measure<R: Rng + ?Sized>(
        &mut self,
        targets: &[QubitId],
        rng: &mut R,
        result: &mut ShotResult,
    ) -> Result<(), QssmError> {
        if targets.is_empty() {
            return Ok(()); // Nothing to measure
        }

        check_normalization(&self.state, None)?;

        let dim = self.state.dim();
        let probabilities = self.state.probabilities();
        let total: f64 = probabilities.iter().sum();

        // Cumulative scan against a uniform draw in [0, total). The
        // fallback index guards against rounding at the top of the scan and
        // must itself carry probability mass.
        let p_sample: f64 = rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        let mut chosen_index = probabilities
            .iter()
            .rposition(|&p| p > 0.0)
            .unwrap_or(dim - 1);
        for (index, p) in probabilities.iter().enumerate() {
            cumulative += *p;
            if p_sample < cumulative {
                chosen_index = index;
                break;
            }
        }

        // Collapse to the chosen basis state |k>.
        let mut new_vec = vec![Complex::zero(); dim];
        new_vec[chosen_index] = Complex::new(1.0, 0.0);
        self.state = StateVector::new(new_vec);

        // Record measured bits for the targeted qubits.
        for target in targets {
            if let Some(target_idx) = self.qubit_indices.get(target) {
                let bit_pos = self.num_qubits - 1 - *target_idx;
                let bit = ((chosen_index >> bit_pos) & 1) as u8;
                result.record_bit(*target, bit);
            } else {
                return Err(QssmError::QubitNotFound { qubit: *target });
            }
        }

        Ok(())
    }

    /// Helper to get a qubit's index, returning a specific error if absent.
    fn get_qubit_index(&self, qubit_id: &QubitId) -> Result<usize, QssmError> {
        self.qubit_indices
            .get(qubit_id)
            .copied()
            .ok_or(QssmError::QubitNotFound { qubit: *qubit_id })
    }

    /// Applies a 2x2 matrix to a single qubit within the global state
    /// vector, iterating over basis-state pairs that differ only at the
    /// target's bit position.
    fn apply_single_qubit_gate(&mut self, target_idx: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let t_mask = 1usize << (self.num_qubits - 1 - target_idx);
        let dim = self.state.dim();
        let mut new_vec = vec![Complex::zero(); dim];

        for i0 in 0..dim {
            if i0 & t_mask != 0 {
                continue;
            }
            let i1 = i0 | t_mask;
            let psi_0 = self.state.vector()[i0];
            let psi_1 = self.state.vector()[i1];
            new_vec[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            new_vec[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }

        self.state = StateVector::new(new_vec);
    }

    /// Applies a 2x2 matrix to `target` only within the subspace where
    /// `control` is |1>, leaving the control-|0> subspace untouched.
    fn apply_controlled_gate(
        &mut self,
        control_idx: usize,
        target_idx: usize,
        matrix: &[[Complex<f64>; 2]; 2],
    ) {
        let c_mask = 1usize << (self.num_qubits - 1 - control_idx);
        let t_mask = 1usize << (self.num_qubits - 1 - target_idx);
        let dim = self.state.dim();
        let mut new_vec = self.state.vector().to_vec();

        for i0 in 0..dim {
            if i0 & c_mask == 0 || i0 & t_mask != 0 {
                continue;
            }
            let i1 = i0 | t_mask;
            let psi_0 = self.state.vector()[i0];
            let psi_1 = self.state.vector()[i1];
            new_vec[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            new_vec[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }

        self.state = StateVector::new(new_vec);
    }
}

/// Provides the 2x2 matrix for the PhaseShift operation: the phase factor
/// `e^(i*theta)` applied to the |1> component.
fn phase_shift_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::new(1.0, 0.0), Complex::zero()],
        [Complex::zero(), Complex::new(theta.cos(), theta.sin())],
    ]
}
