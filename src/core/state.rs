// src/core/state.rs

use num_complex::Complex;
use std::fmt;

/// The complex amplitude vector of an N-qubit register.
///
/// The dimension is always 2^N with basis states ordered by their binary
/// index, qubit 0 occupying the most significant bit. Amplitudes use
/// `Complex<f64>` so that phase survives gate composition even though the
/// circuits simulated here only ever read out probabilities.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Creates a state vector from raw amplitudes.
    ///
    /// Normalization is not enforced here; it is checked before any
    /// measurement sampling (see `validation::check_normalization`).
    pub(crate) fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitudes.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Gets the dimension (2^N) of the register this state describes.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Sum of squared amplitude magnitudes. 1.0 for a normalized state.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Born-rule weights |c_k|^2 per basis state, in basis order.
    pub(crate) fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
