//! Stored-program integer interpreter.
//!
//! A program is a flat buffer of signed cells. Each instruction cell encodes an opcode in its
//! low two decimal digits and one addressing mode per parameter in the digits above. The
//! engine runs a fetch-decode-dispatch loop against that buffer, pulling inputs from an
//! [`io::InputSource`] and pushing outputs to an [`io::OutputSink`], until it halts (opcode
//! 99) or raises a [`Fault`].
//!
//! ```
//! use intcode_vm::{run_program, Status};
//!
//! let outcome = run_program(vec![3, 0, 4, 0, 99], [123]);
//! assert_eq!(outcome.status, Status::Halted);
//! assert_eq!(outcome.outputs, vec![123]);
//! assert_eq!(outcome.memory, vec![123, 0, 4, 0, 99]);
//! ```

/// Compile-time removable logging for run lifecycle events.
/// No-op unless built with `--features vm_logging`.
#[macro_export]
macro_rules! vm_log {
    ($($t:tt)*) => {
        #[cfg(feature = "vm_logging")]
        eprintln!($($t)*);
    };
}

/// Log only on fault paths and input under-supply.
/// Prints when `vm_errors_only` or `vm_logging` is enabled.
#[macro_export]
macro_rules! vm_log_error {
    ($($t:tt)*) => {
        #[cfg(any(feature = "vm_logging", feature = "vm_errors_only"))]
        eprintln!($($t)*);
    };
}

pub mod config;
pub mod crypto;
pub mod decoder;
pub mod fault;
pub mod instructions;
pub mod io;
pub mod machine;
pub mod memory;
#[cfg(feature = "napi")]
mod node;
pub mod parser;
pub mod types;

pub use config::RunConfig;
pub use crypto::memory_digest;
pub use fault::Fault;
pub use io::{InputSource, OutputLog, OutputSink, QueueInput};
pub use machine::Machine;
pub use memory::Memory;
pub use parser::{parse_program, ParseError};
pub use types::{Outcome, Status, Word};

/// Run `memory` to completion against `inputs` with no step bound.
#[must_use]
pub fn run_program(memory: Vec<Word>, inputs: impl IntoIterator<Item = Word>) -> Outcome {
    run_program_with_config(memory, inputs, RunConfig::default())
}

/// Run `memory` against `inputs` under `config`.
#[must_use]
pub fn run_program_with_config(
    memory: Vec<Word>,
    inputs: impl IntoIterator<Item = Word>,
    config: RunConfig,
) -> Outcome {
    let mut machine = Machine::new(memory, inputs).with_config(config);
    machine.run();
    machine.into_outcome()
}

/// Parse program text, then run it.
pub fn run_program_text(
    text: &str,
    inputs: impl IntoIterator<Item = Word>,
) -> Result<Outcome, ParseError> {
    let memory = parse_program(text)?;
    Ok(run_program(memory, inputs))
}
