//! Per-session gradient editing state: the gradient plus the stop selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::token::ColorToken;
use crate::gradient::data::GradientData;
use crate::gradient::samples;
use crate::gradient::stop::{GradientStop, StopId};

/// Default location for stops added through the picker's add action.
pub const DEFAULT_STOP_LOCATION: f32 = 0.5;

/// Result of [`GradientManager::delete_selected`].
///
/// A picker UI collapses every refusal into the same silent no-op; keeping
/// them distinct lets callers and tests tell "nothing was selected" from
/// "the one-stop floor was hit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The selected stop was removed and the selection cleared.
    Removed(StopId),
    /// No stop was selected; nothing changed.
    NoSelection,
    /// Removing would drop below one stop; nothing changed.
    MinimumReached,
    /// The selection named an id no longer in the collection; nothing
    /// changed and the stale selection is left for readers to ignore.
    StaleSelection,
}

/// Owns one gradient and the optional selected-stop pointer for an editing
/// session. Single-threaded by design: one session, one owner, no sharing.
///
/// The selection may go stale (name a removed id); every reader treats a
/// stale pointer as "no selection" instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientManager {
    pub gradient: GradientData,
    #[serde(skip)]
    selected: Option<StopId>,
}

impl GradientManager {
    pub fn new(gradient: GradientData) -> Self {
        Self {
            gradient,
            selected: None,
        }
    }

    /// The current selection pointer, which may be stale.
    pub const fn selected(&self) -> Option<StopId> {
        self.selected
    }

    /// Points the selection at `id`. Unknown ids are permitted; the
    /// selection simply resolves to nothing until it is repointed.
    pub fn select(&mut self, id: StopId) {
        debug!(%id, "select stop");
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Resolves the selection to a live stop, treating absent and stale
    /// pointers alike.
    pub fn selected_stop(&self) -> Option<&GradientStop> {
        self.gradient.stop(self.selected?)
    }

    /// Creates a stop with a fresh id and appends it at the end of the
    /// paint order. The selection is left untouched.
    pub fn append(&mut self, color: ColorToken, location: f32) -> StopId {
        let stop = GradientStop::new(color, location);
        let id = stop.id();
        debug!(%id, location, color = %color, "append stop");
        self.gradient.stops.push(stop);
        id
    }

    /// The picker's add button: appends at the default location, copying
    /// the selected stop's color, or `fallback` when nothing resolves.
    pub fn append_from_selection(&mut self, fallback: &ColorToken) -> StopId {
        let color = self
            .selected_stop()
            .map(|s| s.color)
            .unwrap_or(*fallback);
        self.append(color, DEFAULT_STOP_LOCATION)
    }

    /// The picker's delete button: removes the selected stop, keeping at
    /// least one stop in the collection.
    ///
    /// The selection is cleared only when a stop was actually removed; the
    /// refused paths leave both the stops and the pointer as they were.
    pub fn delete_selected(&mut self) -> DeleteOutcome {
        let Some(id) = self.selected else {
            return DeleteOutcome::NoSelection;
        };
        if self.gradient.stops.len() <= 1 {
            debug!(%id, "delete refused, one-stop floor");
            return DeleteOutcome::MinimumReached;
        }
        let Some(index) = self.gradient.stops.iter().position(|s| s.id() == id) else {
            debug!(%id, "delete refused, stale selection");
            return DeleteOutcome::StaleSelection;
        };
        self.gradient.stops.remove(index);
        self.selected = None;
        debug!(%id, remaining = self.gradient.stops.len(), "removed stop");
        DeleteOutcome::Removed(id)
    }
}

impl Default for GradientManager {
    /// A session over the default two-stop gradient.
    fn default() -> Self {
        Self::new(samples::default_gradient())
    }
}
