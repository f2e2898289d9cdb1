//! Static pattern catalog — read-only tables shared by every analysis pass.
//!
//! Tables are compiled once (`once_cell::sync::Lazy`) and never mutated, so
//! any number of analyzer instances or concurrent calls may read them without
//! coordination.

pub mod emotions;
pub mod layers;
pub mod names;
pub mod themes;
