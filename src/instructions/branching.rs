//! Branching instructions: JUMP_IF_TRUE (5) and JUMP_IF_FALSE (6).
//! A taken jump sets the pointer to parameter 2; otherwise the engine advances by 3.

use crate::config::{OPCODE_JUMP_IF_FALSE, OPCODE_JUMP_IF_TRUE};
use crate::instructions::base::{execute_conditional_jump, InstructionHandler};
use crate::types::{InstructionContext, InstructionResult, Word};

macro_rules! jump_instruction {
    ($name:ident, $opcode:ident, $mnemonic:literal, $cond:expr) => {
        pub struct $name;

        impl $name {
            #[must_use]
            pub const fn new() -> Self {
                Self
            }
        }

        impl InstructionHandler for $name {
            fn opcode(&self) -> Word {
                $opcode
            }
            fn name(&self) -> &'static str {
                $mnemonic
            }
            fn width(&self) -> usize {
                3
            }
            fn execute(&self, context: &mut InstructionContext<'_>) -> InstructionResult {
                execute_conditional_jump(context, $cond)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

fn is_true(value: Word) -> bool {
    value != 0
}
fn is_false(value: Word) -> bool {
    value == 0
}

jump_instruction!(JumpIfTrueInstruction, OPCODE_JUMP_IF_TRUE, "JUMP_IF_TRUE", is_true);
jump_instruction!(JumpIfFalseInstruction, OPCODE_JUMP_IF_FALSE, "JUMP_IF_FALSE", is_false);
