//! I/O instructions: INPUT (3) pulls one value into memory, OUTPUT (4) pushes one value out.

use crate::config::{OPCODE_INPUT, OPCODE_OUTPUT};
use crate::instructions::base::InstructionHandler;
use crate::types::{InstructionContext, InstructionResult, Word};

// --- INPUT (3) ---
/// mem[a] = next input. The destination is always a raw address.
pub struct InputInstruction;

impl InputInstruction {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InstructionHandler for InputInstruction {
    fn opcode(&self) -> Word {
        OPCODE_INPUT
    }
    fn name(&self) -> &'static str {
        "INPUT"
    }
    fn width(&self) -> usize {
        2
    }
    fn execute(&self, context: &mut InstructionContext<'_>) -> InstructionResult {
        let destination = context.destination(1);
        // Check the target first so a faulting input leaves the source untouched.
        if context.probe(destination).is_none() {
            return InstructionResult::Continue;
        }
        let value = context.input.next_input();
        context.write(destination, value);
        InstructionResult::Continue
    }
}

impl Default for InputInstruction {
    fn default() -> Self {
        Self::new()
    }
}

// --- OUTPUT (4) ---
/// Emit parameter 1.
pub struct OutputInstruction;

impl OutputInstruction {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InstructionHandler for OutputInstruction {
    fn opcode(&self) -> Word {
        OPCODE_OUTPUT
    }
    fn name(&self) -> &'static str {
        "OUTPUT"
    }
    fn width(&self) -> usize {
        2
    }
    fn execute(&self, context: &mut InstructionContext<'_>) -> InstructionResult {
        let value = context.parameter(1);
        if !context.has_fault() {
            context.output.emit(value);
        }
        InstructionResult::Continue
    }
}

impl Default for OutputInstruction {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::test_support::run_with_io;

    #[test]
    fn input_writes_pulled_value() {
        let run = run_with_io(&InputInstruction::new(), vec![3, 0, 4, 0, 99], 0, vec![123]);
        assert_eq!(run.memory, vec![123, 0, 4, 0, 99]);
        assert_eq!(run.fault, None);
    }

    #[test]
    fn input_ignores_immediate_mode_digit_on_destination() {
        let run = run_with_io(&InputInstruction::new(), vec![103, 2, 0], 0, vec![7]);
        assert_eq!(run.memory, vec![103, 2, 7]);
    }

    #[test]
    fn input_to_bad_address_consumes_nothing() {
        let run = run_with_io(&InputInstruction::new(), vec![3, 9], 0, vec![5]);
        assert_eq!(run.memory, vec![3, 9]);
        assert!(run.fault.is_some());
        assert_eq!(run.inputs_left, 1);
    }

    #[test]
    fn output_in_both_modes() {
        let run = run_with_io(&OutputInstruction::new(), vec![4, 2, 77], 0, vec![]);
        assert_eq!(run.outputs, vec![77]);
        let run = run_with_io(&OutputInstruction::new(), vec![104, -9], 0, vec![]);
        assert_eq!(run.outputs, vec![-9]);
    }

    #[test]
    fn faulting_output_emits_nothing() {
        let run = run_with_io(&OutputInstruction::new(), vec![4, 50], 0, vec![]);
        assert!(run.outputs.is_empty());
        assert!(run.fault.is_some());
    }
}
