//! Register all instruction handlers into the registry.

use super::arithmetic::{AddInstruction, MultiplyInstruction};
use super::branching::{JumpIfFalseInstruction, JumpIfTrueInstruction};
use super::comparison::{EqualsInstruction, LessThanInstruction};
use super::input_output::{InputInstruction, OutputInstruction};
use super::registry::InstructionRegistry;
use super::system::HaltInstruction;

pub fn register_all_instructions(registry: &mut InstructionRegistry) {
    registry.register(Box::new(AddInstruction::new()));
    registry.register(Box::new(MultiplyInstruction::new()));
    registry.register(Box::new(InputInstruction::new()));
    registry.register(Box::new(OutputInstruction::new()));
    registry.register(Box::new(JumpIfTrueInstruction::new()));
    registry.register(Box::new(JumpIfFalseInstruction::new()));
    registry.register(Box::new(LessThanInstruction::new()));
    registry.register(Box::new(EqualsInstruction::new()));

    registry.register(Box::new(HaltInstruction::new()));
}
