//! The calculator core.
//!
//! This module provides functionality to:
//! - Decode raw key characters into a closed set of key events
//! - Run the key-event state machine that owns the display and operands
//! - Format computed results to fit the fixed-width display

mod engine;
mod event;
mod format;

pub use engine::{Calculator, EntryMode};
pub use event::{Key, Op};
pub use format::format_number;
