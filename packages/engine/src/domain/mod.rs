pub mod palette;
pub mod config;
