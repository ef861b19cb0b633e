#![forbid(unsafe_code)]

//! The spinner tree: node lifecycle, completion cascade, and tree rendering.
//!
//! A tree is built from [`Spinner`] handles (`Arc<Spinner>`). The child list
//! is the sole ownership path; the parent link is a `Weak` back reference, so
//! dropping the root drops the whole tree. Each node carries one mutex around
//! its own mutable state and never locks across nodes, which keeps the
//! completion cascade (downward) and reactivation (upward) deadlock-free no
//! matter which threads trigger them.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use crate::context::ProcessContext;

/// Everything about a node that can change after construction, guarded by the
/// node's mutex.
struct SpinnerState {
    frames: Vec<String>,
    frame_index: usize,
    interval: Duration,
    accumulated: Duration,
    prefix: String,
    suffix: String,
    completion: String,
    done: bool,
    context: Option<Arc<ProcessContext>>,
    children: Vec<Arc<Spinner>>,
}

/// One animated unit in a spinner tree.
///
/// While working it renders `prefix + frame + suffix`; once [`mark_done`]
/// fires it renders its completion text instead and its timer stops. Children
/// render below it, indented with box-drawing connectors.
///
/// All methods take `&self` and are thread-safe; decoration setters return
/// `&Self` so calls chain:
///
/// ```
/// use std::time::Duration;
/// use spintree::{Spinner, charset};
///
/// let sp = Spinner::new(charset::LINE, Duration::from_millis(120));
/// sp.set_prefix("[").set_suffix("] fetching").set_completion("[done]");
/// ```
///
/// [`mark_done`]: Spinner::mark_done
pub struct Spinner {
    depth: usize,
    parent: Weak<Spinner>,
    state: Mutex<SpinnerState>,
}

impl Spinner {
    /// Creates a detached spinner: working, frame 0, no parent, no context.
    ///
    /// An empty `frames` set is accepted here so callers can fill it in with
    /// [`set_frames`](Spinner::set_frames) before the first render; rendering
    /// a *working* spinner whose frame set is still empty panics.
    pub fn new(frames: &[&str], interval: Duration) -> Arc<Self> {
        Self::build(frames, interval, Weak::new(), 0, None)
    }

    fn build(
        frames: &[&str],
        interval: Duration,
        parent: Weak<Spinner>,
        depth: usize,
        context: Option<Arc<ProcessContext>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            depth,
            parent,
            state: Mutex::new(SpinnerState {
                frames: frames.iter().map(|f| f.to_string()).collect(),
                frame_index: 0,
                interval,
                accumulated: Duration::ZERO,
                prefix: String::new(),
                suffix: String::new(),
                completion: String::new(),
                done: false,
                context,
                children: Vec::new(),
            }),
        })
    }

    /// Appends a new child and returns its handle.
    ///
    /// The child inherits this node's process context, links back to this node
    /// as its parent, and sits one level deeper. Growing a finished branch
    /// reopens it: the parent (and any done ancestors above it) resumes
    /// working, exactly as if [`resume`](Spinner::resume) had been called.
    pub fn add_child(self: &Arc<Self>, frames: &[&str], interval: Duration) -> Arc<Self> {
        let context = self.state().context.clone();
        let child = Self::build(frames, interval, Arc::downgrade(self), self.depth + 1, context);
        self.state().children.push(Arc::clone(&child));
        self.resume();
        child
    }

    /// Attaches the shared tick source.
    ///
    /// Children created afterwards inherit it; children created before do not,
    /// so bind the root before growing the tree. An unbound node still renders
    /// but its timer never advances.
    pub fn bind(&self, context: &Arc<ProcessContext>) -> &Self {
        self.state().context = Some(Arc::clone(context));
        self
    }

    /// Replaces the frame set and rewinds to frame 0.
    pub fn set_frames(&self, frames: &[&str]) -> &Self {
        let mut st = self.state();
        st.frames = frames.iter().map(|f| f.to_string()).collect();
        st.frame_index = 0;
        self
    }

    /// Replaces the frame-advance threshold.
    ///
    /// A zero interval advances the frame on every render call.
    pub fn set_interval(&self, interval: Duration) -> &Self {
        self.state().interval = interval;
        self
    }

    /// Sets the text shown in place of the animation once done.
    pub fn set_completion(&self, text: impl Into<String>) -> &Self {
        self.state().completion = text.into();
        self
    }

    /// Sets the text rendered before the active frame.
    pub fn set_prefix(&self, text: impl Into<String>) -> &Self {
        self.state().prefix = text.into();
        self
    }

    /// Sets the text rendered after the active frame.
    pub fn set_suffix(&self, text: impl Into<String>) -> &Self {
        self.state().suffix = text.into();
        self
    }

    /// Reverses playback order in place.
    ///
    /// The current frame index is kept, so the visible effect depends on where
    /// the animation happens to be.
    pub fn reverse_frames(&self) -> &Self {
        self.state().frames.reverse();
        self
    }

    /// Marks this node and every descendant done.
    ///
    /// Idempotent. A done node renders its completion text and its timer
    /// stops. The cascade is strictly downward: a parent is always done
    /// before any of its children, and ancestors are untouched.
    pub fn mark_done(&self) {
        let children = {
            let mut st = self.state();
            if st.done {
                return;
            }
            st.done = true;
            st.children.clone()
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(depth = self.depth, "spinner marked done");
        for child in &children {
            child.mark_done();
        }
    }

    /// Puts a done node back to work.
    ///
    /// Idempotent. Cascades upward through done ancestors and stops at the
    /// first working one; descendants are never reopened.
    pub fn resume(&self) {
        {
            let mut st = self.state();
            if !st.done {
                return;
            }
            st.done = false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(depth = self.depth, "spinner resumed");
        if let Some(parent) = self.parent.upgrade() {
            parent.resume();
        }
    }

    pub fn is_done(&self) -> bool {
        self.state().done
    }

    /// Distance from the root; the root is 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Renders this node and its whole subtree as one multi-line string.
    ///
    /// Each node contributes exactly one newline-terminated line: the
    /// completion text when done, `prefix + frame + suffix` otherwise.
    /// Children follow in insertion order, prefixed with `"├─"` (more siblings
    /// below) or `"└─"` (last), under one `"│ "` or `"  "` cell per ancestor
    /// level. The string is a complete snapshot suitable for overwriting the
    /// previous tick's output.
    ///
    /// Rendering a working node credits one refresh interval to its timer, so
    /// call this exactly once per tick.
    ///
    /// # Panics
    ///
    /// Panics if a working node in the subtree has an empty frame set.
    pub fn render(&self) -> String {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("spinner_render", depth = self.depth).entered();

        let mut out = String::new();
        let mut connectors = Vec::new();
        self.render_node(&mut connectors, &mut out);
        out
    }

    /// Recursive worker. `connectors` holds one flag per ancestor level: true
    /// when that ancestor has later siblings and needs a `"│ "` continuation
    /// cell. Flags are pushed before each child and popped after, so sibling
    /// subtrees never see each other's state.
    fn render_node(&self, connectors: &mut Vec<bool>, out: &mut String) {
        // Own line and timer advance under the guard; children snapshotted so
        // recursion runs with no lock held.
        let children = {
            let mut st = self.state();
            if st.done {
                out.push_str(&st.completion);
                out.push('\n');
            } else {
                assert!(
                    !st.frames.is_empty(),
                    "rendering a working spinner with an empty frame set"
                );
                out.push_str(&st.prefix);
                out.push_str(&st.frames[st.frame_index]);
                out.push_str(&st.suffix);
                out.push('\n');
                st.advance_timer();
            }
            st.children.clone()
        };

        if children.is_empty() {
            return;
        }
        let indent: String = connectors
            .iter()
            .map(|&more| if more { "│ " } else { "  " })
            .collect();
        let last = children.len() - 1;
        for (i, child) in children.iter().enumerate() {
            out.push_str(&indent);
            out.push_str(if i == last { "└─" } else { "├─" });
            connectors.push(i != last);
            child.render_node(connectors, out);
            connectors.pop();
        }
    }

    /// Locks this node's state, recovering from poisoning so one panicked
    /// render cannot wedge every other thread touching the node.
    fn state(&self) -> MutexGuard<'_, SpinnerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SpinnerState {
    /// Credits one refresh interval and advances the frame when the node's own
    /// interval is reached. Called exactly once per render of a working node,
    /// under the guard.
    fn advance_timer(&mut self) {
        let tick = self
            .context
            .as_ref()
            .map_or(Duration::ZERO, |ctx| ctx.refresh_interval());
        self.accumulated += tick;
        if self.interval.is_zero() {
            self.frame_index = (self.frame_index + 1) % self.frames.len();
            self.accumulated = Duration::ZERO;
        } else if self.accumulated >= self.interval {
            self.frame_index = (self.frame_index + 1) % self.frames.len();
            let rem = self.accumulated.as_nanos() % self.interval.as_nanos();
            self.accumulated = Duration::from_nanos(rem as u64);
        }
    }
}
