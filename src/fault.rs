//! Terminal execution faults.

use crate::types::Word;
use thiserror::Error;

/// A fault stops the run for good. Both kinds describe a malformed program or input,
/// so nothing is retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The low two digits of the instruction cell name no known instruction.
    #[error("unknown opcode {opcode} at pointer {pointer}")]
    UnknownOpcode {
        /// Decoded opcode (`cell % 100`).
        opcode: Word,
        /// Instruction pointer when the cell was fetched.
        pointer: usize,
    },

    /// A read, write or jump target fell outside `[0, len(memory))`.
    #[error("address {address} out of bounds at pointer {pointer}")]
    OutOfBounds {
        /// Instruction pointer when the access was attempted.
        pointer: usize,
        /// The offending address.
        address: Word,
    },
}

impl Fault {
    /// Pointer value at the time the fault was raised.
    #[must_use]
    pub const fn pointer(&self) -> usize {
        match self {
            Fault::UnknownOpcode { pointer, .. } | Fault::OutOfBounds { pointer, .. } => *pointer,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Fault::UnknownOpcode { .. } => "UnknownOpcode",
            Fault::OutOfBounds { .. } => "OutOfBounds",
        }
    }
}
