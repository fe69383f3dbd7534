//! Interpreter type definitions: cells, modes, per-instruction context and run results.

use crate::crypto::memory_digest;
use crate::decoder::{decode_parameter_mode, ParameterMode};
use crate::fault::Fault;
use crate::io::{InputSource, OutputSink};
use crate::memory::Memory;

/// One memory cell.
pub type Word = i64;

// ============================================================================
// Instruction execution result
// ============================================================================

/// What the engine does after a handler returns. Faults travel through
/// [`InstructionContext::fault`] rather than through this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionResult {
    /// Advance (or take the jump the handler recorded) and keep running.
    Continue,
    /// Stop with success.
    Halt,
}

// ============================================================================
// Engine status
// ============================================================================

#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running = 0,
    Halted = 1,
    Faulted = 2,
    /// The opt-in step limit ran out before the program halted.
    OutOfSteps = 3,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::Running)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Halted => "halted",
            Status::Faulted => "faulted",
            Status::OutOfSteps => "out_of_steps",
        }
    }
}

// ============================================================================
// Instruction context (memory, fault latch, I/O, pointer)
// ============================================================================

/// Everything a handler may touch while executing one instruction.
pub struct InstructionContext<'a> {
    pub memory: &'a mut Memory,
    /// Fault latch shared with the engine. Once set, reads yield 0 and writes are dropped.
    pub fault: &'a mut Option<Fault>,
    pub input: &'a mut dyn InputSource,
    pub output: &'a mut dyn OutputSink,
    /// Pointer of the instruction being executed.
    pub instruction_pointer: usize,
    /// The encoded instruction cell (opcode plus mode digits).
    pub cell: Word,
    /// Set by [`set_pointer`](Self::set_pointer); `None` means fall through.
    pub jump_target: Option<usize>,
}

impl InstructionContext<'_> {
    #[must_use]
    pub fn has_fault(&self) -> bool {
        self.fault.is_some()
    }

    pub fn read(&mut self, address: Word) -> Word {
        self.memory
            .read_guarded(address, self.instruction_pointer, self.fault)
    }

    pub fn write(&mut self, address: Word, value: Word) {
        self.memory
            .write_guarded(address, value, self.instruction_pointer, self.fault);
    }

    /// Bounds-check `address` without touching memory. Raises [`Fault::OutOfBounds`] and
    /// returns `None` when out of range or already faulted.
    pub fn probe(&mut self, address: Word) -> Option<usize> {
        if self.has_fault() {
            return None;
        }
        let index = self.memory.index_of(address);
        if index.is_none() {
            crate::vm_log_error!(
                "address {} out of bounds at pointer {}",
                address,
                self.instruction_pointer
            );
            *self.fault = Some(Fault::OutOfBounds {
                pointer: self.instruction_pointer,
                address,
            });
        }
        index
    }

    /// Redirect the pointer. The target gets the same bounds check as a read.
    pub fn set_pointer(&mut self, target: Word) {
        if let Some(index) = self.probe(target) {
            self.jump_target = Some(index);
        }
    }

    /// Raw operand cell `n` (1-indexed) following the instruction cell.
    pub fn operand(&mut self, n: usize) -> Word {
        let address = (self.instruction_pointer + n) as Word;
        self.read(address)
    }

    /// Effective value of parameter `n`, dereferenced according to its mode digit.
    pub fn parameter(&mut self, n: usize) -> Word {
        let raw = self.operand(n);
        match decode_parameter_mode(self.cell, n) {
            ParameterMode::Immediate => raw,
            ParameterMode::Position => self.read(raw),
        }
    }

    /// Parameter `n` used as a write target: always the raw address, whatever its mode digit.
    pub fn destination(&mut self, n: usize) -> Word {
        self.operand(n)
    }
}

// ============================================================================
// Run outcome
// ============================================================================

/// Final snapshot handed back to the caller once the engine stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub outputs: Vec<Word>,
    pub memory: Vec<Word>,
    pub fault: Option<Fault>,
    pub status: Status,
    pub steps: u64,
}

impl Outcome {
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.status == Status::Halted
    }

    /// BLAKE2b-256 of the final memory.
    #[must_use]
    pub fn memory_digest(&self) -> [u8; 32] {
        memory_digest(&self.memory)
    }

    /// The caller-facing triple: outputs, final memory, fault.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Word>, Vec<Word>, Option<Fault>) {
        (self.outputs, self.memory, self.fault)
    }
}
