//! Gradient stops and their process-unique identities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::color::token::ColorToken;

static NEXT_STOP_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a gradient stop.
///
/// Ids are allocated from a process-wide monotone counter: stable for the
/// lifetime of the stop, never reused, never reassigned. Deserialized stops
/// get fresh ids (persisted ids from another process cannot be trusted to
/// stay unique here), so a stop selection never survives a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(u64);

impl StopId {
    /// Allocates the next unused id.
    pub fn fresh() -> Self {
        Self(NEXT_STOP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

/// A single (identity, color, location) triple within a gradient.
///
/// `location` is nominally in [0, 1] along the gradient's parametrized axis
/// but is deliberately not clamped; out-of-range stops are accepted as-is
/// and only sampling clamps at read time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    #[serde(skip, default = "StopId::fresh")]
    id: StopId,
    pub color: ColorToken,
    pub location: f32,
}

impl GradientStop {
    /// Pairs a fresh id with the given color and location.
    pub fn new(color: ColorToken, location: f32) -> Self {
        Self {
            id: StopId::fresh(),
            color,
            location,
        }
    }

    pub const fn id(&self) -> StopId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = StopId::fresh();
        let b = StopId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn test_new_stop_keeps_inputs_verbatim() {
        let color = ColorToken::rgb(0.2, 0.4, 0.6);
        let stop = GradientStop::new(color, 1.7);
        assert_eq!(stop.color, color);
        assert_eq!(stop.location, 1.7, "locations are not clamped");
    }

    #[test]
    fn test_deserialized_stop_gets_fresh_id() {
        let stop = GradientStop::new(ColorToken::rgb(1.0, 0.0, 0.0), 0.5);
        let json = serde_json::to_string(&stop).unwrap();
        let back: GradientStop = serde_json::from_str(&json).unwrap();
        assert_eq!(back.color, stop.color);
        assert_eq!(back.location, stop.location);
        assert_ne!(back.id(), stop.id());
    }
}
