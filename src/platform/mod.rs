//! Platform abstraction layer
//!
//! Native-only pieces the simulation stays independent of:
//! - Frame pacing and delta measurement

pub mod clock;

pub use clock::FrameClock;
