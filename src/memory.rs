//! Flat, fixed-size cell memory.
//! The buffer is sized once at load time and never grows; every access is bounds-checked.

use crate::fault::Fault;
use crate::types::Word;

/// Zero-indexed signed cells, exclusively owned by one engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<Word>,
}

impl Memory {
    #[must_use]
    pub fn new(cells: Vec<Word>) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index for `address` if `0 <= address < len`.
    #[must_use]
    pub fn index_of(&self, address: Word) -> Option<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&index| index < self.cells.len())
    }

    #[must_use]
    pub fn get(&self, address: Word) -> Option<Word> {
        self.index_of(address).map(|index| self.cells[index])
    }

    /// Store `value` at `address`. Returns false, leaving memory untouched, when out of range.
    pub fn set(&mut self, address: Word, value: Word) -> bool {
        match self.index_of(address) {
            Some(index) => {
                self.cells[index] = value;
                true
            }
            None => false,
        }
    }

    /// Read through the fault latch: an out-of-range address raises
    /// [`Fault::OutOfBounds`]; once any fault is latched the result is 0.
    pub fn read_guarded(&self, address: Word, pointer: usize, fault: &mut Option<Fault>) -> Word {
        if fault.is_some() {
            return 0;
        }
        match self.get(address) {
            Some(value) => value,
            None => {
                crate::vm_log_error!("read of {} out of bounds at pointer {}", address, pointer);
                *fault = Some(Fault::OutOfBounds { pointer, address });
                0
            }
        }
    }

    /// Write through the fault latch: same bounds check as [`read_guarded`](Self::read_guarded),
    /// no-op once a fault is latched.
    pub fn write_guarded(
        &mut self,
        address: Word,
        value: Word,
        pointer: usize,
        fault: &mut Option<Fault>,
    ) {
        if fault.is_some() {
            return;
        }
        if !self.set(address, value) {
            crate::vm_log_error!("write of {} out of bounds at pointer {}", address, pointer);
            *fault = Some(Fault::OutOfBounds { pointer, address });
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.cells
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<Word> {
        self.cells
    }
}

impl From<Vec<Word>> for Memory {
    fn from(cells: Vec<Word>) -> Self {
        Self::new(cells)
    }
}
