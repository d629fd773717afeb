//! citygdp-rs
//!
//! Host crate for the workspace. Re-exports [`citygdp_core`] so the demos
//! under `demos/` can `use citygdp_rs::prelude::*`.

pub use citygdp_core::*;
