#![forbid(unsafe_code)]

//! Frame-set presets.
//!
//! Any `&[&str]` works as a frame set; these are the common ones. Frames are
//! strings rather than chars so multi-column and multi-grapheme frames work.

/// Braille dots, the usual smooth spinner.
pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// ASCII line spinner, safe for dumb terminals.
pub const LINE: &[&str] = &["|", "/", "-", "\\"];

/// Quarter-arc sweep.
pub const ARC: &[&str] = &["◜", "◠", "◝", "◞", "◡", "◟"];
