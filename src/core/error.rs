//! Error handling logic

use std::fmt;

/// Unique identifier for a qubit within a circuit or simulation.
/// Uniqueness is context-dependent: the same id refers to the same wire
/// across all operations of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub u64);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Error types for both simulation pipelines.
#[derive(Debug, Clone, PartialEq)]
pub enum QssmError {
    /// An applied operation is inconsistent with the current state or the
    /// circuit being executed.
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// The state vector norm deviated from 1 beyond tolerance, so outcome
    /// probabilities are not well defined.
    NormalizationFailure {
        /// NormalizationFailure failure message
        message: String,
    },

    /// A referenced qubit does not exist in the simulation context.
    QubitNotFound {
        /// The missing qubit
        qubit: QubitId,
    },

    /// The bounded rejection sampler exhausted its attempt budget without
    /// accepting enough candidates.
    SamplingFailure {
        /// Number of batch rounds attempted before giving up
        attempts: usize,
        /// SamplingFailure failure message
        message: String,
    },

    /// General error encountered during the simulation process itself.
    SimulationError {
        /// SimulationError failure message
        message: String,
    },
}

impl fmt::Display for QssmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QssmError::InvalidOperation { message } => write!(f, "Invalid Operation: {}", message),
            QssmError::NormalizationFailure { message } => {
                write!(f, "Normalization Failure: {}", message)
            }
            QssmError::QubitNotFound { qubit } => {
                write!(f, "Qubit Not Found: {} is not part of this simulation", qubit)
            }
            QssmError::SamplingFailure { attempts, message } => {
                write!(f, "Sampling Failure (after {} rounds): {}", attempts, message)
            }
            QssmError::SimulationError { message } => {
                write!(f, "Simulation Process Error: {}", message)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QssmError {}
