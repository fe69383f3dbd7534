//! System instructions (HALT).

use crate::config::OPCODE_HALT;
use crate::instructions::base::InstructionHandler;
use crate::types::{InstructionContext, InstructionResult, Word};

/// HALT (opcode 99): the only successful way out of a run.
pub struct HaltInstruction;

impl HaltInstruction {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InstructionHandler for HaltInstruction {
    fn opcode(&self) -> Word {
        OPCODE_HALT
    }

    fn name(&self) -> &'static str {
        "HALT"
    }

    fn width(&self) -> usize {
        1
    }

    fn execute(&self, _context: &mut InstructionContext<'_>) -> InstructionResult {
        InstructionResult::Halt
    }
}

impl Default for HaltInstruction {
    fn default() -> Self {
        Self::new()
    }
}
