//! Base instruction handler trait and shared operand helpers.

use crate::types::{InstructionContext, InstructionResult, Word};

/// One handler per opcode. Handlers read their operands through the context (which applies
/// mode-aware dereferencing and bounds checks), apply their effect, and either fall through
/// or record a jump with [`InstructionContext::set_pointer`].
pub trait InstructionHandler: Send + Sync {
    fn opcode(&self) -> Word;
    fn name(&self) -> &'static str;

    /// Cells occupied by the instruction, opcode cell included. The engine advances by this
    /// much unless the handler jumped.
    fn width(&self) -> usize;

    fn execute(&self, context: &mut InstructionContext<'_>) -> InstructionResult;
}

/// `mem[c] = op(a, b)` for the three-parameter instructions (add, multiply, less-than, equals).
/// Nothing is written if reading `a`, `b` or `c` faulted.
pub fn execute_binary_store(
    context: &mut InstructionContext<'_>,
    op: fn(Word, Word) -> Word,
) -> InstructionResult {
    let a = context.parameter(1);
    let b = context.parameter(2);
    let destination = context.destination(3);
    context.write(destination, op(a, b));
    InstructionResult::Continue
}

/// Jump to parameter 2 when `condition(parameter 1)` holds, otherwise fall through.
pub fn execute_conditional_jump(
    context: &mut InstructionContext<'_>,
    condition: fn(Word) -> bool,
) -> InstructionResult {
    let value = context.parameter(1);
    let target = context.parameter(2);
    if context.has_fault() {
        return InstructionResult::Continue;
    }
    if condition(value) {
        context.set_pointer(target);
    }
    InstructionResult::Continue
}
