//! Scroll decoration
//!
//! Draws a thin shadow along the top edge of the viewport while the content
//! is scrolled away from the top and scroll shadows are enabled.
//!
//! Visibility is derived, never assigned:
//!
//! ```text
//!   visible = use_shadows && scroll_top > 0
//!
//!   Hidden ──(becomes true)──► Shown
//!   Shown  ──(becomes false)─► Hidden
//! ```
//!
//! The viewport width is tracked independently and is its own dirty source.

use vellum_core::events::clamp_dimension;
use vellum_core::{ConfigurationChangedEvent, LayoutInfo, Result, ScrollEvent, SharedConfiguration};

use crate::node::PresentationNode;
use crate::part::{RenderRequest, RenderingContext, RestrictedRenderingContext, ViewPart};

/// Class applied to the node while the shadow is shown
pub const SCROLL_DECORATION_CLASS: &str = "scroll-decoration";

/// Observable state of the decoration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecorationState {
    #[default]
    Hidden,
    Shown,
}

/// View part that owns the scroll shadow node
#[derive(Debug)]
pub struct ScrollDecoration {
    config: SharedConfiguration,
    node: PresentationNode,
    scroll_top: f32,
    width: f32,
    use_shadows: bool,
    should_show: bool,
    request: RenderRequest,
}

impl ScrollDecoration {
    /// Create the decoration. Reads `use_shadows` once; the node starts
    /// unattached and untouched.
    pub fn new(config: SharedConfiguration) -> Self {
        let use_shadows = config.use_shadows();
        Self {
            config,
            node: PresentationNode::default(),
            scroll_top: 0.0,
            width: 0.0,
            use_shadows,
            should_show: false,
            request: RenderRequest::new(),
        }
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn use_shadows(&self) -> bool {
        self.use_shadows
    }

    pub fn is_visible(&self) -> bool {
        self.should_show
    }

    pub fn state(&self) -> DecorationState {
        if self.should_show {
            DecorationState::Shown
        } else {
            DecorationState::Hidden
        }
    }

    /// Recompute visibility, returning true if it flipped
    fn update_should_show(&mut self) -> bool {
        let should_show = self.use_shadows && self.scroll_top > 0.0;
        if self.should_show == should_show {
            return false;
        }
        self.should_show = should_show;
        tracing::trace!(
            visible = should_show,
            scroll_top = self.scroll_top,
            use_shadows = self.use_shadows,
            "scroll decoration visibility changed"
        );
        true
    }
}

impl ViewPart for ScrollDecoration {
    fn name(&self) -> &'static str {
        "scroll_decoration"
    }

    fn on_configuration_changed(&mut self, event: &ConfigurationChangedEvent) -> bool {
        if event.scrollbar {
            self.use_shadows = self.config.use_shadows();
        }
        let changed = self.update_should_show();
        self.request.mark_if(changed)
    }

    fn on_layout_changed(&mut self, layout: &LayoutInfo) -> bool {
        let width = clamp_dimension(layout.width);
        if self.width == width {
            return false;
        }
        self.width = width;
        self.request.mark_if(true)
    }

    fn on_scroll_changed(&mut self, event: &ScrollEvent) -> bool {
        self.scroll_top = clamp_dimension(event.scroll_top);
        let changed = self.update_should_show();
        self.request.mark_if(changed)
    }

    fn should_render(&self) -> bool {
        self.request.is_pending()
    }

    fn prepare_render(&mut self, _ctx: &RenderingContext) -> Result<()> {
        // Nothing to measure
        self.request.check_prepare(self.name())
    }

    fn render(&mut self, ctx: &RestrictedRenderingContext) {
        self.node.set_width(self.width);
        self.node.toggle_class(SCROLL_DECORATION_CLASS, self.should_show);
        self.node.mark_committed();
        self.request.clear();

        tracing::trace!(
            frame = ctx.frame,
            width = self.width,
            visible = self.should_show,
            "scroll decoration committed"
        );
    }

    fn presentation_node(&self) -> &PresentationNode {
        &self.node
    }

    fn presentation_node_mut(&mut self) -> &mut PresentationNode {
        &mut self.node
    }
}
