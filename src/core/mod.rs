// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qssm::core::TypeName`
pub use error::{QssmError, QubitId};
pub use state::StateVector;
