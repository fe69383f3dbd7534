//! Execution engine. Owns memory, the instruction pointer and the fault latch, and drives
//! the fetch-decode-dispatch loop until halt or fault.
//!
//! There is no implicit step cap: a program that never halts runs forever unless the caller
//! opts into [`RunConfig::step_limit`].

use crate::config::RunConfig;
use crate::decoder::decode_opcode;
use crate::fault::Fault;
use crate::instructions::registry::{get_registry, InstructionRegistry};
use crate::io::{InputSource, OutputLog, OutputSink, QueueInput};
use crate::memory::Memory;
use crate::types::{InstructionContext, InstructionResult, Outcome, Status, Word};

/// One interpreter instance. Not shared: run several programs with several machines.
pub struct Machine<I = QueueInput, O = OutputLog> {
    memory: Memory,
    pointer: usize,
    fault: Option<Fault>,
    status: Status,
    steps: u64,
    config: RunConfig,
    input: I,
    output: O,
    registry: &'static InstructionRegistry,
}

impl Machine<QueueInput, OutputLog> {
    /// Machine over `memory` that reads from a queue of `inputs` and logs outputs.
    #[must_use]
    pub fn new(memory: impl Into<Memory>, inputs: impl IntoIterator<Item = Word>) -> Self {
        Self::with_io(memory, QueueInput::new(inputs), OutputLog::new())
    }

    /// Consume the machine and hand back the final snapshot.
    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        let steps = self.steps;
        let status = self.status;
        let (memory, _input, output, fault) = self.into_parts();
        Outcome {
            outputs: output.into_values(),
            memory: memory.into_cells(),
            fault,
            status,
            steps,
        }
    }
}

impl<I: InputSource, O: OutputSink> Machine<I, O> {
    #[must_use]
    pub fn with_io(memory: impl Into<Memory>, input: I, output: O) -> Self {
        Self {
            memory: memory.into(),
            pointer: 0,
            fault: None,
            status: Status::Running,
            steps: 0,
            config: RunConfig::default(),
            input,
            output,
            registry: get_registry(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    #[must_use]
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    #[must_use]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Bounds-checked read; raises OutOfBounds and faults the machine when out of range.
    /// Yields 0 once faulted. After a halt or step-limit stop the final memory is only
    /// inspected: out-of-range addresses read as 0 and latch nothing.
    pub fn read(&mut self, address: Word) -> Word {
        if self.is_settled() {
            return self.memory.get(address).unwrap_or(0);
        }
        let value = self
            .memory
            .read_guarded(address, self.pointer, &mut self.fault);
        self.sync_fault_status();
        value
    }

    /// Bounds-checked write; no-op once the machine has stopped.
    pub fn write(&mut self, address: Word, value: Word) {
        if self.is_settled() {
            return;
        }
        self.memory
            .write_guarded(address, value, self.pointer, &mut self.fault);
        self.sync_fault_status();
    }

    /// Move the pointer to `address`, refusing (with OutOfBounds) anything outside memory.
    pub fn set_pointer(&mut self, address: Word) {
        if self.fault.is_some() || self.is_settled() {
            return;
        }
        match self.memory.index_of(address) {
            Some(index) => self.pointer = index,
            None => {
                self.fault = Some(Fault::OutOfBounds {
                    pointer: self.pointer,
                    address,
                });
                self.sync_fault_status();
            }
        }
    }

    /// Execute one instruction and return the resulting status.
    pub fn step(&mut self) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }
        if self.fault.is_some() {
            self.status = Status::Faulted;
            return self.status;
        }
        if let Some(limit) = self.config.step_limit {
            if self.steps >= limit {
                crate::vm_log!("step limit {} reached at pointer {}", limit, self.pointer);
                self.status = Status::OutOfSteps;
                return self.status;
            }
        }

        let pointer = self.pointer;
        let cell = self.read(pointer as Word);
        if self.fault.is_some() {
            return self.status;
        }
        let opcode = decode_opcode(cell);
        let registry = self.registry;
        let Some(handler) = registry.get_handler(opcode) else {
            crate::vm_log_error!("unknown opcode {} at pointer {}", opcode, pointer);
            self.fault = Some(Fault::UnknownOpcode { opcode, pointer });
            self.status = Status::Faulted;
            return self.status;
        };

        self.steps += 1;
        let mut context = InstructionContext {
            memory: &mut self.memory,
            fault: &mut self.fault,
            input: &mut self.input,
            output: &mut self.output,
            instruction_pointer: pointer,
            cell,
            jump_target: None,
        };
        let result = handler.execute(&mut context);
        let jump_target = context.jump_target;

        if self.fault.is_some() {
            self.status = Status::Faulted;
            return self.status;
        }
        match result {
            InstructionResult::Halt => {
                crate::vm_log!("halted at pointer {} after {} steps", pointer, self.steps);
                self.status = Status::Halted;
            }
            InstructionResult::Continue => {
                self.pointer = jump_target.unwrap_or(pointer + handler.width());
            }
        }
        self.status
    }

    /// Run until halt, fault or (if configured) step-limit exhaustion.
    pub fn run(&mut self) -> Status {
        crate::vm_log!(
            "run start: {} cells, pointer {}",
            self.memory.len(),
            self.pointer
        );
        while !self.step().is_terminal() {}
        self.status
    }

    /// Execute at most `n` instructions. Returns the status after the last one.
    pub fn run_steps(&mut self, n: u64) -> Status {
        for _ in 0..n {
            if self.step().is_terminal() {
                break;
            }
        }
        self.status
    }

    /// Consume the machine: final memory, both I/O adapters and the fault, if any.
    #[must_use]
    pub fn into_parts(self) -> (Memory, I, O, Option<Fault>) {
        (self.memory, self.input, self.output, self.fault)
    }

    /// Stopped without a fault (halt or step limit); the outcome is final.
    fn is_settled(&self) -> bool {
        self.status.is_terminal() && self.fault.is_none()
    }

    fn sync_fault_status(&mut self) {
        if self.fault.is_some() {
            self.status = Status::Faulted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn step_walks_one_instruction_at_a_time() {
        let mut machine = Machine::new(vec![1, 0, 0, 0, 99], []);
        assert_eq!(machine.step(), Status::Running);
        assert_eq!(machine.pointer(), 4);
        assert_eq!(machine.memory().as_slice(), &[2, 0, 0, 0, 99]);
        assert_eq!(machine.step(), Status::Halted);
        assert_eq!(machine.step(), Status::Halted);
        assert_eq!(machine.steps(), 2);
    }

    #[test]
    fn running_off_the_end_faults_on_fetch() {
        let mut machine = Machine::new(vec![1101, 1, 1, 0], []);
        assert_eq!(machine.run(), Status::Faulted);
        assert_eq!(
            machine.fault(),
            Some(Fault::OutOfBounds {
                pointer: 4,
                address: 4
            })
        );
        assert_eq!(machine.memory().as_slice(), &[2, 1, 1, 0]);
    }

    #[test]
    fn truncated_instruction_faults_without_partial_write() {
        let mut machine = Machine::new(vec![1101, 5, 6], []);
        assert_eq!(machine.run(), Status::Faulted);
        assert_eq!(machine.memory().as_slice(), &[1101, 5, 6]);
        assert_eq!(machine.fault().map(|f| f.pointer()), Some(0));
    }

    #[test]
    fn unknown_opcode_reports_opcode_and_pointer() {
        let mut machine = Machine::new(vec![1101, 0, 0, 0, 42], []);
        assert_eq!(machine.run(), Status::Faulted);
        assert_eq!(
            machine.fault(),
            Some(Fault::UnknownOpcode {
                opcode: 42,
                pointer: 4
            })
        );
        assert_eq!(machine.steps(), 1);
    }

    #[test]
    fn jump_to_self_loops_until_step_limit() {
        let mut machine =
            Machine::new(vec![1105, 1, 0], []).with_config(RunConfig::with_step_limit(25));
        assert_eq!(machine.run(), Status::OutOfSteps);
        assert_eq!(machine.steps(), 25);
        assert_eq!(machine.pointer(), 0);
        assert_eq!(machine.fault(), None);
    }

    #[test]
    fn run_steps_stops_early_and_resumes() {
        let mut machine = Machine::new(vec![1101, 2, 3, 0, 1101, 4, 5, 1, 99], []);
        assert_eq!(machine.run_steps(1), Status::Running);
        assert_eq!(machine.memory().as_slice()[0], 5);
        assert_eq!(machine.run_steps(10), Status::Halted);
        assert_eq!(machine.steps(), 3);
    }

    #[test]
    fn direct_access_shares_the_fault_latch() {
        let mut machine = Machine::new(vec![99, 7], []);
        assert_eq!(machine.read(1), 7);
        machine.write(1, 8);
        assert_eq!(machine.read(1), 8);
        machine.set_pointer(2);
        assert_eq!(machine.status(), Status::Faulted);
        assert_eq!(machine.read(1), 0);
        machine.write(0, 1);
        assert_eq!(machine.memory().as_slice(), &[99, 8]);
        assert_eq!(machine.step(), Status::Faulted);
    }

    #[test]
    fn halted_machine_keeps_its_outcome() {
        let mut machine = Machine::new(vec![99, 7], []);
        assert_eq!(machine.run(), Status::Halted);
        assert_eq!(machine.read(5), 0);
        assert_eq!(machine.read(1), 7);
        machine.write(1, 8);
        machine.write(-1, 8);
        machine.set_pointer(1);
        machine.set_pointer(40);
        assert_eq!(machine.pointer(), 0);
        assert_eq!(machine.status(), Status::Halted);
        let outcome = machine.into_outcome();
        assert_eq!(outcome.fault, None);
        assert_eq!(outcome.status, Status::Halted);
        assert_eq!(outcome.memory, vec![99, 7]);
    }

    #[test]
    fn step_limit_stop_is_not_turned_into_a_fault() {
        let mut machine =
            Machine::new(vec![1105, 1, 0], []).with_config(RunConfig::with_step_limit(3));
        assert_eq!(machine.run(), Status::OutOfSteps);
        assert_eq!(machine.read(-1), 0);
        machine.set_pointer(99);
        assert_eq!(machine.status(), Status::OutOfSteps);
        assert_eq!(machine.fault(), None);
    }

    #[test]
    fn custom_io_adapters_plug_in() {
        let input: VecDeque<Word> = VecDeque::from(vec![21]);
        let program = vec![3, 9, 1002, 9, 2, 9, 4, 9, 99, 0];
        let mut machine = Machine::with_io(program, input, Vec::<Word>::new());
        assert_eq!(machine.run(), Status::Halted);
        let (memory, input, output, fault) = machine.into_parts();
        assert_eq!(output, vec![42]);
        assert!(input.is_empty());
        assert_eq!(fault, None);
        assert_eq!(memory.as_slice()[9], 42);
    }

    #[test]
    fn empty_program_faults_immediately() {
        let outcome = {
            let mut machine = Machine::new(Vec::<Word>::new(), []);
            machine.run();
            machine.into_outcome()
        };
        assert_eq!(outcome.status, Status::Faulted);
        assert_eq!(
            outcome.fault,
            Some(Fault::OutOfBounds {
                pointer: 0,
                address: 0
            })
        );
        assert!(outcome.memory.is_empty());
    }
}
