//! Tinct Core — domain layer for color and gradient editing.
//!
//! This crate contains the color token type with its cross-space accessors,
//! the gradient stop collection, session managers, and the selection-binding
//! accessors that route color edits. No GUI or framework dependencies.

pub mod color;
pub mod error;
pub mod gradient;

// Re-exports for convenience.
pub use color::manager::{ColorManager, RemoveOutcome};
pub use color::space::ColorSpace;
pub use color::token::ColorToken;
pub use error::ColorParseError;
pub use gradient::binding::{CommitTarget, SelectedColor};
pub use gradient::data::{GradientData, GradientShape};
pub use gradient::geometry::UnitPoint;
pub use gradient::manager::{DeleteOutcome, GradientManager};
pub use gradient::stop::{GradientStop, StopId};
