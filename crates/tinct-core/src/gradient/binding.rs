//! Selection binding: a two-way accessor over a gradient session plus an
//! external fallback color cell.
//!
//! A color editor built on this pair works identically whether or not a
//! gradient stop is selected: reads resolve to the selected stop's color or
//! the fallback, writes land on the selected stop or in the fallback cell.
//! The editor never learns which.

use tracing::debug;

use crate::color::token::ColorToken;
use crate::gradient::manager::GradientManager;
use crate::gradient::stop::StopId;

/// Where a [`SelectedColor::commit`] write landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTarget {
    /// The selected stop's color was replaced in place.
    Stop(StopId),
    /// No live selection; the fallback cell was overwritten.
    Fallback,
}

/// Read/write view over the selection of one gradient session.
///
/// Borrows the session and the fallback cell for the duration of an edit;
/// construct it per interaction, not long-lived.
pub struct SelectedColor<'a> {
    manager: &'a mut GradientManager,
    fallback: &'a mut ColorToken,
}

impl<'a> SelectedColor<'a> {
    pub fn new(manager: &'a mut GradientManager, fallback: &'a mut ColorToken) -> Self {
        Self { manager, fallback }
    }

    /// The selected stop's color, or a copy of the fallback when the
    /// selection is absent or stale.
    pub fn resolve(&self) -> ColorToken {
        self.manager
            .selected_stop()
            .map(|s| s.color)
            .unwrap_or(*self.fallback)
    }

    /// Routes `new` to the selected stop (id and location preserved, paint
    /// order untouched) or, without a live selection, to the fallback cell.
    pub fn commit(&mut self, new: ColorToken) -> CommitTarget {
        let Some(id) = self.manager.selected() else {
            *self.fallback = new;
            return CommitTarget::Fallback;
        };
        let Some(stop) = self
            .manager
            .gradient
            .stops
            .iter_mut()
            .find(|s| s.id() == id)
        else {
            // Stale selection behaves exactly like no selection.
            *self.fallback = new;
            return CommitTarget::Fallback;
        };
        stop.color = new;
        debug!(%id, color = %new, "committed color to stop");
        CommitTarget::Stop(id)
    }
}
