//! Platform abstraction layer
//!
//! Handles the pieces that differ between a real window and a test harness:
//! - Time/ticks
//! - Input events

pub mod clock;
pub mod input;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{InputSource, InputState, Key, RawEvent, ScriptedInput};
