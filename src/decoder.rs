//! Instruction decoder: opcode and per-parameter addressing modes from one encoded cell.

use crate::config::{MODE_IMMEDIATE, MODE_RADIX, OPCODE_MODULUS};
use crate::types::Word;

/// Per-operand addressing tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterMode {
    /// The operand is an address; its value is read from memory.
    Position,
    /// The operand is the value.
    Immediate,
}

/// Opcode = the low two decimal digits of the cell.
#[must_use]
pub const fn decode_opcode(cell: Word) -> Word {
    cell % OPCODE_MODULUS
}

/// Raw mode digit of parameter `n` (1-indexed): drop the two opcode digits, then `n - 1`
/// more, and take the next digit.
#[must_use]
pub fn mode_digit(cell: Word, n: usize) -> Word {
    let mut rest = cell / OPCODE_MODULUS;
    for _ in 1..n {
        if rest == 0 {
            break;
        }
        rest /= MODE_RADIX;
    }
    rest % MODE_RADIX
}

/// Mode of parameter `n`. Only digit `1` selects immediate; every other digit reads as position.
#[must_use]
pub fn decode_parameter_mode(cell: Word, n: usize) -> ParameterMode {
    if mode_digit(cell, n) == MODE_IMMEDIATE {
        ParameterMode::Immediate
    } else {
        ParameterMode::Position
    }
}
