//! Instruction registry: map opcode → handler.

use crate::instructions::base::InstructionHandler;
use crate::instructions::registry_instructions::register_all_instructions;
use crate::types::Word;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Central registry mapping opcodes to instruction handlers.
pub struct InstructionRegistry {
    handlers: HashMap<Word, Box<dyn InstructionHandler>>,
}

impl InstructionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry holding the full instruction set.
    #[must_use]
    pub fn with_all_instructions() -> Self {
        let mut registry = Self::new();
        register_all_instructions(&mut registry);
        registry
    }

    pub fn register(&mut self, handler: Box<dyn InstructionHandler>) {
        self.handlers.insert(handler.opcode(), handler);
    }

    #[must_use]
    pub fn get_handler(&self, opcode: Word) -> Option<&dyn InstructionHandler> {
        self.handlers.get(&opcode).map(|b| b.as_ref())
    }

    #[must_use]
    pub fn has_handler(&self, opcode: Word) -> bool {
        self.handlers.contains_key(&opcode)
    }

    #[must_use]
    pub fn registered_opcodes(&self) -> Vec<Word> {
        let mut opcodes: Vec<Word> = self.handlers.keys().copied().collect();
        opcodes.sort_unstable();
        opcodes
    }
}

impl Default for InstructionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry, built on first use.
pub fn get_registry() -> &'static InstructionRegistry {
    static REGISTRY: OnceLock<InstructionRegistry> = OnceLock::new();
    REGISTRY.get_or_init(InstructionRegistry::with_all_instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KNOWN_OPCODES;

    #[test]
    fn global_registry_holds_exactly_the_known_set() {
        let registry = get_registry();
        assert_eq!(registry.registered_opcodes(), KNOWN_OPCODES.to_vec());
        assert!(!registry.has_handler(0));
        assert!(registry.get_handler(9).is_none());
    }

    #[test]
    fn handler_widths_cover_their_operands() {
        let registry = get_registry();
        let expected = [(1, 4), (2, 4), (3, 2), (4, 2), (5, 3), (6, 3), (7, 4), (8, 4), (99, 1)];
        for (opcode, width) in expected {
            let handler = registry.get_handler(opcode).expect("registered");
            assert_eq!(handler.width(), width, "{}", handler.name());
            assert_eq!(handler.opcode(), opcode);
        }
    }

    #[test]
    fn empty_registry_knows_nothing() {
        let registry = InstructionRegistry::default();
        assert!(registry.registered_opcodes().is_empty());
    }
}
