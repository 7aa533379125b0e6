//! Core storage for the fire automaton
//!
//! - utils/   - zero-cost access and console logging macros
//! - grid     - row-major heat field with its snapshot buffer
//! - random   - injectable random source

#[macro_use]
pub mod utils;
pub mod grid;
pub mod random;
