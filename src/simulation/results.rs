// src/simulation/results.rs
use crate::core::QubitId;
use std::collections::HashMap;
use std::fmt;

/// The measured bits of a single shot.
///
/// Maps each measured qubit to the bit it resolved to. Qubits that were
/// never measured during the shot are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotResult {
    bits: HashMap<QubitId, u8>,
}

impl ShotResult {
    /// Creates a new, empty result set. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self {
            bits: HashMap::new(),
        }
    }

    /// Records a measured bit for a qubit. (Internal visibility)
    pub(crate) fn record_bit(&mut self, qubit_id: QubitId, bit: u8) {
        self.bits.insert(qubit_id, bit);
    }

    /// Gets the measured bit for a qubit, if it was measured this shot.
    pub fn bit(&self, qubit_id: &QubitId) -> Option<u8> {
        self.bits.get(qubit_id).copied()
    }

    /// Returns a reference to the map of all measured bits.
    pub fn all_bits(&self) -> &HashMap<QubitId, u8> {
        &self.bits
    }

    /// The joint outcome as a bitstring, measured qubits in ascending id
    /// order (e.g. "01" means q0 read 0 and q1 read 1).
    pub fn bitstring(&self) -> String {
        let mut sorted: Vec<_> = self.bits.iter().collect();
        sorted.sort_by_key(|(id, _)| *id);
        sorted
            .into_iter()
            .map(|(_, bit)| if *bit == 0 { '0' } else { '1' })
            .collect()
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shot Result:")?;
        if self.bits.is_empty() {
            writeln!(f, "  No qubits were measured.")?;
        } else {
            let mut sorted: Vec<_> = self.bits.iter().collect();
            sorted.sort_by_key(|(id, _)| *id);
            for (id, bit) in sorted {
                writeln!(f, "  {}: {}", id, bit)?;
            }
        }
        Ok(())
    }
}

/// Outcome frequencies accumulated over a batch of shots.
///
/// Keys are joint bitstrings as produced by `ShotResult::bitstring`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutcomeTally {
    counts: HashMap<String, u64>,
}

impl OutcomeTally {
    /// Creates an empty tally. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Adds one observation of `outcome`. (Internal visibility)
    pub(crate) fn record(&mut self, outcome: String) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// The number of times `outcome` was observed.
    pub fn count(&self, outcome: &str) -> u64 {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Total observations across all outcomes; equals the shot count of
    /// the batch that produced this tally.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Observations of the two-qubit cross terms "01" and "10".
    ///
    /// For the entangled pair prepared by `circuits::bell_pair` these are
    /// forbidden, so any non-zero value measures a correlation violation.
    pub fn cross_term_count(&self) -> u64 {
        self.count("01") + self.count("10")
    }

    /// Cross-term observations as a fraction of all shots. 0.0 when the
    /// tally is empty.
    pub fn cross_term_fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.cross_term_count() as f64 / total as f64
        }
    }

    /// All (outcome, count) pairs sorted by bitstring, for display and
    /// plotting.
    pub fn sorted_counts(&self) -> Vec<(String, u64)> {
        let mut sorted: Vec<_> = self
            .counts
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        sorted
    }
}

impl fmt::Display for OutcomeTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return writeln!(f, "  (no shots recorded)");
        }
        for (outcome, count) in self.sorted_counts() {
            writeln!(f, "  |{}>: {}", outcome, count)?;
        }
        Ok(())
    }
}
