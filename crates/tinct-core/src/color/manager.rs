//! Swatch list manager for the full color picker.
//!
//! Owns an ordered list of color tokens plus a cursor for the swatch being
//! edited. Like the gradient manager, it keeps a floor of one entry and
//! reports refused operations as outcomes rather than errors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::token::ColorToken;

/// Result of [`ColorManager::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The swatch at the index was removed.
    Removed,
    /// Only one swatch left; the floor was hit and nothing changed.
    MinimumReached,
    /// The index was past the end; nothing changed.
    OutOfBounds,
}

/// An ordered list of color swatches with a current-edit cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorManager {
    colors: Vec<ColorToken>,
    current: usize,
}

impl ColorManager {
    /// Creates a manager over the given swatches. An empty list is seeded
    /// with a single default token so the one-swatch floor holds from the
    /// start.
    pub fn new(colors: Vec<ColorToken>) -> Self {
        let colors = if colors.is_empty() {
            vec![ColorToken::default()]
        } else {
            colors
        };
        Self { colors, current: 0 }
    }

    pub fn colors(&self) -> &[ColorToken] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the swatch currently being edited.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The swatch currently being edited.
    pub fn current(&self) -> ColorToken {
        self.colors[self.current]
    }

    /// Moves the cursor. Out-of-range indices are ignored.
    pub fn set_current(&mut self, index: usize) {
        if index < self.colors.len() {
            self.current = index;
        }
    }

    /// Appends a swatch at the end of the list.
    pub fn push(&mut self, color: ColorToken) {
        debug!(swatch = %color, "push swatch");
        self.colors.push(color);
    }

    /// Overwrites the current swatch.
    pub fn replace_current(&mut self, color: ColorToken) {
        self.colors[self.current] = color;
    }

    /// Removes the swatch at `index`, keeping at least one swatch.
    ///
    /// The cursor is pulled back when it pointed at or past the removed
    /// entry so it always stays in range.
    pub fn remove(&mut self, index: usize) -> RemoveOutcome {
        if index >= self.colors.len() {
            return RemoveOutcome::OutOfBounds;
        }
        if self.colors.len() <= 1 {
            return RemoveOutcome::MinimumReached;
        }
        self.colors.remove(index);
        if self.current >= index && self.current > 0 {
            self.current -= 1;
        }
        debug!(index, remaining = self.colors.len(), "removed swatch");
        RemoveOutcome::Removed
    }
}

impl Default for ColorManager {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
