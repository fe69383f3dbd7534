//! I/O adapters: a pull source for input values and a push sink for output values.
//! The engine only sees the two traits, so any transport can stand behind them.

use crate::types::Word;
use std::collections::VecDeque;

/// Pull side. Each call consumes one value.
pub trait InputSource {
    fn next_input(&mut self) -> Word;
}

/// Push side. Values arrive in emission order.
pub trait OutputSink {
    fn emit(&mut self, value: Word);
}

/// Array-backed input queue.
///
/// The interpreter does not count inputs; running dry is the caller's error. An exhausted
/// queue yields 0 so the run stays deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueInput {
    values: VecDeque<Word>,
}

impl QueueInput {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = Word>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn push(&mut self, value: Word) {
        self.values.push_back(value);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl InputSource for QueueInput {
    fn next_input(&mut self) -> Word {
        self.values.pop_front().unwrap_or_else(|| {
            crate::vm_log_error!("input queue exhausted; supplying 0");
            0
        })
    }
}

impl InputSource for VecDeque<Word> {
    fn next_input(&mut self) -> Word {
        self.pop_front().unwrap_or(0)
    }
}

/// Append-only output log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputLog {
    values: Vec<Word>,
}

impl OutputLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[must_use]
    pub fn values(&self) -> &[Word] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Word> {
        self.values
    }
}

impl OutputSink for OutputLog {
    fn emit(&mut self, value: Word) {
        self.values.push(value);
    }
}

impl OutputSink for Vec<Word> {
    fn emit(&mut self, value: Word) {
        self.push(value);
    }
}
