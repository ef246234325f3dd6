//! Binding pair: one before/after remapping rule in VSCodeVim's settings shape

use serde::{Deserialize, Serialize};

/// A single remapping rule mapping one key-chord sequence to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingPair {
    /// Chords the user types
    pub before: Vec<String>,
    /// Chords the editor sees instead
    pub after: Vec<String>,
}

impl BindingPair {
    /// Create a single-chord binding
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: vec![before.into()],
            after: vec![after.into()],
        }
    }

    /// Create a binding from full chord sequences
    pub fn chord(before: Vec<String>, after: Vec<String>) -> Self {
        Self { before, after }
    }

    /// Prepend `prefix` to `before`. An empty prefix yields an identical pair.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self.clone();
        }

        let mut before = Vec::with_capacity(self.before.len() + 1);
        before.push(prefix.to_string());
        before.extend(self.before.iter().cloned());

        Self {
            before,
            after: self.after.clone(),
        }
    }

    /// Upper-case every chord on both sides, giving the shifted variant
    pub fn to_upper(&self) -> Self {
        Self {
            before: self.before.iter().map(|chord| chord.to_uppercase()).collect(),
            after: self.after.iter().map(|chord| chord.to_uppercase()).collect(),
        }
    }

    /// Get display string for this binding, e.g. `<C-w> d → h`
    pub fn display_string(&self) -> String {
        format!("{} → {}", self.before.join(" "), self.after.join(" "))
    }
}

/// Return `pair` with `prefix` prepended to its `before` sequence
pub fn prefix(prefix: &str, pair: &BindingPair) -> BindingPair {
    pair.with_prefix(prefix)
}

/// Return `pair` with its `before` and `after` sequences upper-cased
pub fn uppercase(pair: &BindingPair) -> BindingPair {
    pair.to_upper()
}
