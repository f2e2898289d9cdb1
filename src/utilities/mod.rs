//! Utility modules shared across the analysis passes.

pub mod cancel;
pub mod config;
pub mod errors;
pub mod sink;
pub mod text;
