//! Color model — the multi-space color token and the swatch list manager.

pub mod manager;
pub mod space;
pub mod token;
