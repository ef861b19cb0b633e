#![forbid(unsafe_code)]

//! Hierarchical animated terminal spinners.
//!
//! A [`Spinner`] is one animated unit: a frame sequence cycled on an interval
//! until the spinner is marked done, at which point it shows a fixed
//! completion string instead. Spinners nest — a spinner can spawn child
//! spinners — and [`Spinner::render`] produces a multi-line snapshot of the
//! whole subtree with box-drawing connectors (`├─`, `└─`, `│ `) showing the
//! structure.
//!
//! The crate does no terminal I/O of its own. An external driver owns the
//! refresh loop: it creates a shared [`ProcessContext`] carrying the global
//! refresh interval, binds the root to it, and calls `render` once per tick,
//! writing the returned string to the screen however it likes. Each render
//! call on a working node credits one refresh interval to that node's internal
//! timer; the frame index advances whenever the timer reaches the node's own
//! interval.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use spintree::{ProcessContext, Spinner, charset};
//!
//! let ctx = Arc::new(ProcessContext::new(Duration::from_millis(100)));
//! let root = Spinner::new(charset::DOTS, Duration::from_millis(100));
//! root.bind(&ctx).set_suffix(" downloading");
//!
//! let unpack = root.add_child(charset::LINE, Duration::from_millis(200));
//! unpack.set_suffix(" unpacking").set_completion("✓ unpacked");
//!
//! let frame = root.render();
//! assert!(frame.lines().count() == 2);
//!
//! unpack.mark_done();
//! assert!(root.render().contains("✓ unpacked"));
//! ```
//!
//! # Concurrency
//!
//! Every operation is safe to call from any thread. Each node guards its own
//! mutable state with its own mutex and never holds it while touching another
//! node, so completion cascades, reactivation, and concurrent renders cannot
//! deadlock. A render racing an `add_child` on the same node may miss the new
//! child for one tick; it never observes a half-built one.

pub mod charset;
pub mod context;
pub mod spinner;

pub use context::ProcessContext;
pub use spinner::Spinner;
