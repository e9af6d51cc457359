//! Shows a daily word of the day from the terminal and keeps an hourly
//! repeating reminder notification in step with the calendar day. The word is
//! picked by a deterministic, midnight-safe day index, so the selection only
//! moves when the local date does.
//!

pub mod cli;
pub mod notify;
pub mod reminder;
pub mod store;
pub mod utils;
pub mod words;
