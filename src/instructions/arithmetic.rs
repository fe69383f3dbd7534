//! Arithmetic instructions: ADD (1) and MULTIPLY (2).
//! Both wrap on overflow rather than panic.

use crate::config::{OPCODE_ADD, OPCODE_MULTIPLY};
use crate::instructions::base::{execute_binary_store, InstructionHandler};
use crate::types::{InstructionContext, InstructionResult, Word};

// --- ADD (1) ---
/// mem[c] = a + b
pub struct AddInstruction;

impl AddInstruction {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InstructionHandler for AddInstruction {
    fn opcode(&self) -> Word {
        OPCODE_ADD
    }
    fn name(&self) -> &'static str {
        "ADD"
    }
    fn width(&self) -> usize {
        4
    }
    fn execute(&self, context: &mut InstructionContext<'_>) -> InstructionResult {
        execute_binary_store(context, Word::wrapping_add)
    }
}

impl Default for AddInstruction {
    fn default() -> Self {
        Self::new()
    }
}

// --- MULTIPLY (2) ---
/// mem[c] = a * b
pub struct MultiplyInstruction;

impl MultiplyInstruction {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InstructionHandler for MultiplyInstruction {
    fn opcode(&self) -> Word {
        OPCODE_MULTIPLY
    }
    fn name(&self) -> &'static str {
        "MULTIPLY"
    }
    fn width(&self) -> usize {
        4
    }
    fn execute(&self, context: &mut InstructionContext<'_>) -> InstructionResult {
        execute_binary_store(context, Word::wrapping_mul)
    }
}

impl Default for MultiplyInstruction {
    fn default() -> Self {
        Self::new()
    }
}
