//! Formatting utilities for durations expressed in minutes.
//!
//! One display policy is used everywhere (listings and all three report
//! formats): both components are always shown and minutes are zero-padded,
//! so 45 renders as "0h 45m" and 60 as "1h 00m".

/// Decompose a minute count into whole hours and leftover minutes.
pub fn split_minutes(mins: u32) -> (u32, u32) {
    (mins / 60, mins % 60)
}

/// Render minutes as "Hh MMm".
pub fn hours_minutes(mins: i64) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;
    format!("{}h {:02}m", hours, minutes)
}
