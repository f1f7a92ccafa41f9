// src/circuits/mod.rs

//! Structures for representing and building ordered sequences of
//! operations (`crate::operations::Operation`).
//!
//! A `Circuit` is an immutable, ordered pathway of gates and measurements;
//! the `CircuitBuilder` assembles one through method chaining. The module
//! also provides `bell_pair`, the canonical two-qubit entangling circuit
//! used by the correlation sampler.

use crate::core::QubitId;
use crate::operations::Operation;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// An ordered sequence of operations applied to a set of qubits.
///
/// The order of operations is significant; the set of qubits is derived
/// automatically from the operations added.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    /// The unique set of qubits involved across all operations.
    qubits: HashSet<QubitId>,

    /// The ordered operation sequence defining the circuit's logic.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: HashSet::new(),
            operations: Vec::new(),
        }
    }

    /// Adds a single operation to the end of the circuit's sequence,
    /// registering any qubits it mentions.
    pub fn add_operation(&mut self, op: Operation) {
        for qubit in op.involved_qubits() {
            self.qubits.insert(qubit);
        }
        self.operations.push(op);
    }

    /// Adds multiple operations from an iterator to the end of the sequence.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// Returns the set of unique qubit ids involved in this circuit.
    pub fn qubits(&self) -> &HashSet<QubitId> {
        &self.qubits
    }

    /// Returns the ordered sequence of operations.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns `true` if any operation in the sequence is a measurement.
    pub fn has_measurement(&self) -> bool {
        self.operations
            .iter()
            .any(|op| matches!(op, Operation::Measure { .. }))
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper for programmatically constructing `Circuit` instances using
/// method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
        }
    }

    /// Adds a single operation to the circuit being built.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the two-qubit entangling circuit whose measurement statistics
/// the correlation sampler studies: superposition on `q0`, a controlled
/// flip onto `q1`, then a joint measurement of both qubits.
///
/// Under ideal simulation the prepared state is (|00> + |11>)/sqrt(2), so
/// the cross terms "01" and "10" never occur.
pub fn bell_pair(q0: QubitId, q1: QubitId) -> Circuit {
    CircuitBuilder::new()
        .add_op(Operation::Gate {
            target: q0,
            gate: crate::operations::Gate::Superposition,
        })
        .add_op(Operation::Controlled {
            control: q0,
            target: q1,
            gate: crate::operations::Gate::Flip,
        })
        .add_op(Operation::Measure {
            targets: vec![q0, q1],
        })
        .build()
}

//-------------------------------------------------------------------------
// Diagram rendering
//-------------------------------------------------------------------------

const GATE_WIDTH: usize = 7; // e.g. "───H───"
const H_WIRE: char = '─';
const V_WIRE: char = '│';

/// Centers a gate symbol within a wire segment of `GATE_WIDTH` columns.
fn format_gate(symbol: &str) -> String {
    let slen = symbol.chars().count();
    if slen >= GATE_WIDTH {
        symbol.chars().take(GATE_WIDTH).collect()
    } else {
        let total_dashes = GATE_WIDTH - slen;
        let pre = total_dashes / 2;
        let post = total_dashes - pre;
        format!(
            "{}{}{}",
            H_WIRE.to_string().repeat(pre),
            symbol,
            H_WIRE.to_string().repeat(post)
        )
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            return writeln!(f, "qssm::Circuit[0 operations on 0 qubits]");
        }

        let num_ops = self.operations.len();

        // Sorted qubit list gives each wire a stable row.
        let mut sorted_qubits: Vec<QubitId> = self.qubits.iter().cloned().collect();
        sorted_qubits.sort();
        let num_qubits = sorted_qubits.len();
        let qubit_to_row: HashMap<QubitId, usize> = sorted_qubits
            .iter()
            .enumerate()
            .map(|(i, q)| (*q, i))
            .collect();

        let max_label_width = sorted_qubits
            .iter()
            .map(|q| format!("{}", q).len())
            .max()
            .unwrap_or(0);

        let wire = H_WIRE.to_string().repeat(GATE_WIDTH);
        // op_grid[row][time] holds the gate/wire segment; v_connect[row][time]
        // holds the connector drawn below that row.
        let mut op_grid: Vec<Vec<String>> = vec![vec![wire.clone(); num_ops]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        for (t, op) in self.operations.iter().enumerate() {
            match op {
                Operation::Gate { target, gate } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate(gate.symbol());
                    }
                }
                Operation::PhaseShift { target, .. } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("P");
                    }
                }
                Operation::Controlled { control, target, gate } => {
                    if let (Some(r_ctrl), Some(r_tgt)) =
                        (qubit_to_row.get(control), qubit_to_row.get(target))
                    {
                        op_grid[*r_ctrl][t] = format_gate("@");
                        op_grid[*r_tgt][t] = format_gate(gate.symbol());

                        let r_min = (*r_ctrl).min(*r_tgt);
                        let r_max = (*r_ctrl).max(*r_tgt);
                        for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                            row_vec[t] = V_WIRE;
                        }
                    }
                }
                Operation::Measure { targets } => {
                    for target in targets {
                        if let Some(r) = qubit_to_row.get(target) {
                            op_grid[*r][t] = format_gate("M");
                        }
                    }
                }
            }
        }

        writeln!(
            f,
            "qssm::Circuit[{} operations on {} qubits]",
            num_ops, num_qubits
        )?;
        for r in 0..num_qubits {
            let label = format!("{}: ", sorted_qubits[r]);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", " ".repeat(max_label_width + 2))?;
                for t in 0..num_ops {
                    let connector = v_connect[r][t];
                    let padding = GATE_WIDTH - 1;
                    let pre = padding / 2;
                    let post = padding - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), connector, " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
