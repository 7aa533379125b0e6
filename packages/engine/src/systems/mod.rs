//! Systems - per-frame algorithms over borrowed state
//!
//! Each system is a free function: the caller owns the field, the random
//! source and the settings, which keeps every pass testable in isolation.

pub mod propagation;
pub mod wind;
pub mod injection;

pub use injection::{inject_heat, Brush};
pub use propagation::propagate;
pub use wind::{Wind, WindShift};
