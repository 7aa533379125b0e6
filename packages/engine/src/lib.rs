//! Doomfire Engine - cellular-automaton fire effect in WASM
//!
//! The bottom row of a heat grid is the fuel. Every frame each cell copies
//! the cell below it from the previous frame, minus a little random decay,
//! and heat levels index a cold-to-hot palette.
//!
//! Architecture:
//! - core/        - heat field storage, random source, macros
//! - domain/      - palette and configuration
//! - systems/     - per-frame algorithms (propagation, wind, heat injection)
//! - simulation/  - FireGrid orchestration and the JS facade

// Macros must be declared first so later modules see them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use domain::config;
pub use domain::palette;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🔥 Doomfire WASM engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Number of levels in the built-in palette
#[wasm_bindgen]
pub fn classic_palette_size() -> usize {
    Palette::classic().len()
}

// Re-export main types
pub use crate::core::grid::{Heat, HeatField};
pub use crate::core::random::{HeatRng, Xorshift32};
pub use domain::config::FireConfig;
pub use domain::palette::{Palette, Rgb};
pub use simulation::{FireGrid, FireSim, Letterbox, PerfStats};
pub use systems::WindShift;
