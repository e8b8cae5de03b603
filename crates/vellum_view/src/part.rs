//! The view part contract
//!
//! Anything implementing [`ViewPart`] can be registered with a host. There
//! is no shared base type: parts compose a [`RenderRequest`] for the
//! pending-render bookkeeping and implement the handlers they care about.
//!
//! # Frame lifecycle
//!
//! ```text
//!   host event ──► on_*_changed() ──► dirty? ──► host marks part
//!                                                     │
//!                 ┌───────────────────────────────────┘
//!                 ▼
//!   prepare_render(&RenderingContext)        read-only, fails if not requested
//!                 │
//!                 ▼
//!   render(&RestrictedRenderingContext)      writes the presentation node
//! ```
//!
//! Event handlers only touch in-memory state. Several events between two
//! frames therefore coalesce into one commit.

use vellum_core::{
    ConfigurationChangedEvent, LayoutInfo, Result, ScrollEvent, ViewError, ViewEvent,
};

use crate::node::PresentationNode;

/// Frame data available during the prepare phase
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderingContext {
    /// Monotonic frame number, starting at 1
    pub frame: u64,
    /// Latest viewport layout seen by the host
    pub viewport: LayoutInfo,
    /// Latest scroll position seen by the host
    pub scroll: ScrollEvent,
}

/// Frame data available during the commit phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RestrictedRenderingContext {
    pub frame: u64,
}

/// Pending-render flag for a view part
///
/// Set whenever a handler reports a change, cleared by the commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pending: bool,
}

impl RenderRequest {
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Record a handler's dirty signal and pass it through
    pub fn mark_if(&mut self, dirty: bool) -> bool {
        self.pending |= dirty;
        dirty
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = false;
    }

    /// Fail with [`ViewError::ProtocolViolation`] unless a render is pending
    pub fn check_prepare(&self, part: &'static str) -> Result<()> {
        if self.pending {
            Ok(())
        } else {
            tracing::error!(part, "prepare_render called without a pending render request");
            Err(ViewError::ProtocolViolation { part })
        }
    }
}

/// A component that participates in the host's render pipeline
pub trait ViewPart {
    /// Stable name for logging and error reports
    fn name(&self) -> &'static str;

    fn on_configuration_changed(&mut self, _event: &ConfigurationChangedEvent) -> bool {
        false
    }

    fn on_layout_changed(&mut self, _layout: &LayoutInfo) -> bool {
        false
    }

    fn on_scroll_changed(&mut self, _event: &ScrollEvent) -> bool {
        false
    }

    /// Route an event to the matching handler and return its dirty signal
    fn handle_event(&mut self, event: &ViewEvent) -> bool {
        match event {
            ViewEvent::ConfigurationChanged(e) => self.on_configuration_changed(e),
            ViewEvent::LayoutChanged(layout) => self.on_layout_changed(layout),
            ViewEvent::ScrollChanged(e) => self.on_scroll_changed(e),
        }
    }

    /// Whether the part has asked to render since its last commit
    fn should_render(&self) -> bool;

    /// Read-only measurement pass.
    ///
    /// Must return [`ViewError::ProtocolViolation`] if the part did not ask
    /// to render.
    fn prepare_render(&mut self, ctx: &RenderingContext) -> Result<()>;

    /// Commit pass: write state to the presentation node.
    ///
    /// Must be idempotent for unchanged state.
    fn render(&mut self, ctx: &RestrictedRenderingContext);

    fn presentation_node(&self) -> &PresentationNode;

    fn presentation_node_mut(&mut self) -> &mut PresentationNode;
}
