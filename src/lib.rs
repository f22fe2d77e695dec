//! Rail Wing - a pointer-steered rail shooter core
//!
//! Core modules:
//! - `sim`: Per-frame game simulation (ship pose, projectiles, obstacles, scoring)
//! - `input`: Pointer sampling (raw pixels to a normalized steering signal)
//! - `tuning`: Data-driven game feel constants
//!
//! Rendering is deliberately absent from this crate: the simulation publishes a
//! complete state snapshot once per frame and any renderer consumes it
//! read-only.

pub mod input;
pub mod sim;
pub mod tuning;

pub use input::PointerSampler;
pub use tuning::Tuning;
