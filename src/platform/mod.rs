//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks
//! - Input events
//! - Storage (LocalStorage on web)

pub mod input;
pub mod storage;
pub mod time;

pub use input::{InputEvent, Intent, IntentBuffer, Key};
pub use storage::{KeyValueStore, MemoryStore};
pub use time::FrameClock;
