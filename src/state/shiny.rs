//! Shiny sprite display state: one global preference plus per-card overrides.

use std::collections::HashMap;

/// Two-tier shiny display state.
///
/// The global preference applies to every card unless a card carries its own override.
/// Changing the global preference drops all overrides so every card resyncs to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShinyState {
    global: bool,
    overrides: HashMap<u32, bool>,
}

impl ShinyState {
    pub fn new(global: bool) -> Self {
        Self {
            global,
            overrides: HashMap::new(),
        }
    }

    pub fn global(&self) -> bool {
        self.global
    }

    pub fn set_global(&mut self, shiny: bool) {
        self.global = shiny;
        self.overrides.clear();
    }

    /// Effective flag for one card.
    pub fn is_shiny(&self, id: u32) -> bool {
        self.overrides.get(&id).copied().unwrap_or(self.global)
    }

    /// Flips one card's effective flag. Flipping back to the global value removes the override.
    pub fn toggle(&mut self, id: u32) {
        let flipped = !self.is_shiny(id);
        if flipped == self.global {
            self.overrides.remove(&id);
        } else {
            self.overrides.insert(id, flipped);
        }
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}
