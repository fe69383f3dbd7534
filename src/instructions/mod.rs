//! Instruction set: one handler per opcode, collected in a registry.

pub mod arithmetic;
pub mod base;
pub mod branching;
pub mod comparison;
pub mod input_output;
pub mod registry;
pub mod registry_instructions;
pub mod system;
