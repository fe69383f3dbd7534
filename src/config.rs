//! Interpreter configuration constants and run options.
//! Opcode table and mode digits for the decimal instruction encoding.

use crate::types::Word;

// ============================================================================
// Instruction encoding
// ============================================================================
/// The low two decimal digits of a cell select the instruction.
pub const OPCODE_MODULUS: Word = 100;
/// Each higher decimal digit holds one parameter mode.
pub const MODE_RADIX: Word = 10;

// ============================================================================
// Parameter modes
// ============================================================================
/// Any other mode digit is read as position mode.
pub const MODE_IMMEDIATE: Word = 1;

// ============================================================================
// Opcodes
// ============================================================================
pub const OPCODE_ADD: Word = 1;
pub const OPCODE_MULTIPLY: Word = 2;
pub const OPCODE_INPUT: Word = 3;
pub const OPCODE_OUTPUT: Word = 4;
pub const OPCODE_JUMP_IF_TRUE: Word = 5;
pub const OPCODE_JUMP_IF_FALSE: Word = 6;
pub const OPCODE_LESS_THAN: Word = 7;
pub const OPCODE_EQUALS: Word = 8;
pub const OPCODE_HALT: Word = 99;

/// Every opcode the interpreter recognises, in table order.
pub const KNOWN_OPCODES: [Word; 9] = [
    OPCODE_ADD,
    OPCODE_MULTIPLY,
    OPCODE_INPUT,
    OPCODE_OUTPUT,
    OPCODE_JUMP_IF_TRUE,
    OPCODE_JUMP_IF_FALSE,
    OPCODE_LESS_THAN,
    OPCODE_EQUALS,
    OPCODE_HALT,
];

// ============================================================================
// Run limits
// ============================================================================
/// No step bound: a program that never halts runs forever.
pub const DEFAULT_STEP_LIMIT: Option<u64> = None;

/// Options applied to a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Maximum number of instructions to execute before stopping with
    /// [`Status::OutOfSteps`](crate::types::Status::OutOfSteps). `None` = unbounded.
    pub step_limit: Option<u64>,
}

impl RunConfig {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::unbounded()
    }
}
