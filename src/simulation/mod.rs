// src/simulation/mod.rs

//! Executes `crate::circuits::Circuit` under a stochastic state-vector
//! simulator. This module contains the `Simulator` entry point and the
//! internal `SimulationEngine` responsible for evolving the state and
//! sampling measurement outcomes.

mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::{OutcomeTally, ShotResult};

use crate::circuits::Circuit;
use crate::core::QssmError;
use crate::operations::Operation;
use engine::SimulationEngine;
use rand::Rng;
use tracing::debug;

/// Runs circuits shot by shot, sampling measurement outcomes from the
/// Born distribution with a caller-supplied random generator.
///
/// The generator handle is threaded through every draw rather than held
/// as global state, so a fixed seed reproduces a batch exactly.
#[derive(Default)]
pub struct Simulator {}

impl Simulator {
    /// Creates a new Simulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes one shot of the circuit.
    ///
    /// Initializes all involved qubits to |0>, applies the operations in
    /// order, and samples any measurements using `rng`.
    ///
    /// # Returns
    /// * `Ok(ShotResult)` with the bits recorded by measurement operations
    ///   (empty if the circuit measures nothing).
    /// * `Err(QssmError)` on invalid operations or a non-normalized state.
    pub fn run<R: Rng + ?Sized>(
        &self,
        circuit: &Circuit,
        rng: &mut R,
    ) -> Result<ShotResult, QssmError> {
        if circuit.is_empty() {
            return Ok(ShotResult::new());
        }

        let mut engine = SimulationEngine::init(circuit.qubits())?;
        let mut result = ShotResult::new();

        for op in circuit.operations() {
            match op {
                Operation::Measure { targets } => {
                    engine.measure(targets, rng, &mut result)?;
                }
                _ => {
                    engine.apply_operation(op)?;
                }
            }
        }

        Ok(result)
    }

    /// Executes `shots` independent shots of the circuit and tallies the
    /// joint outcome bitstrings.
    ///
    /// # Errors
    /// * `InvalidOperation` if `shots` is zero or the circuit contains no
    ///   measurement (the tally would be vacuous either way).
    pub fn sample<R: Rng + ?Sized>(
        &self,
        circuit: &Circuit,
        shots: u64,
        rng: &mut R,
    ) -> Result<OutcomeTally, QssmError> {
        if shots == 0 {
            return Err(QssmError::InvalidOperation {
                message: "shot count must be at least 1".to_string(),
            });
        }
        if !circuit.has_measurement() {
            return Err(QssmError::InvalidOperation {
                message: "cannot tally outcomes of a circuit without measurement".to_string(),
            });
        }

        let mut tally = OutcomeTally::new();
        for _ in 0..shots {
            let shot = self.run(circuit, rng)?;
            tally.record(shot.bitstring());
        }
        debug!(shots, outcomes = tally.sorted_counts().len(), "sampled circuit batch");
        Ok(tally)
    }
}
