//! Gradient model — stop collection, shape metadata, session manager, and
//! the selection-binding accessors.

pub mod binding;
pub mod data;
pub mod geometry;
pub mod manager;
pub mod samples;
pub mod stop;
