//! Platform abstraction layer
//!
//! Handles the host-side services the simulation consumes:
//! - Monotonic time
//! - Frame pacing

pub mod clock;

pub use clock::{Clock, FrameClock, ManualClock};
