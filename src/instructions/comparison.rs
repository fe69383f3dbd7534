//! Comparison instructions: LESS_THAN (7) and EQUALS (8). Store 1 or 0 at the destination.

use crate::config::{OPCODE_EQUALS, OPCODE_LESS_THAN};
use crate::instructions::base::{execute_binary_store, InstructionHandler};
use crate::types::{InstructionContext, InstructionResult, Word};

macro_rules! compare_instruction {
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
                4
            }
            fn execute(&self, context: &mut InstructionContext<'_>) -> InstructionResult {
                execute_binary_store(context, |a, b| Word::from($cond(a, b)))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

fn less_than(a: Word, b: Word) -> bool {
    a < b
}
fn equals(a: Word, b: Word) -> bool {
    a == b
}

compare_instruction!(LessThanInstruction, OPCODE_LESS_THAN, "LESS_THAN", less_than);
compare_instruction!(EqualsInstruction, OPCODE_EQUALS, "EQUALS", equals);
