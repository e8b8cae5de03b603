//! View events
//!
//! Events pushed by the host into every registered view part. Handlers
//! return a dirty signal; the host aggregates those to decide which parts
//! take part in the next render pass.

/// Which groups of editor options changed
///
/// A field is `true` when the corresponding options group may have changed
/// and dependents should re-read it from the configuration handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigurationChangedEvent {
    /// Scrollbar options (including shadows) changed
    pub scrollbar: bool,
    /// Font family or size changed
    pub font_info: bool,
    /// Line height changed
    pub line_height: bool,
    /// Word wrapping changed
    pub word_wrap: bool,
}

impl ConfigurationChangedEvent {
    /// A delta with every group marked as changed
    pub const fn all() -> Self {
        Self {
            scrollbar: true,
            font_info: true,
            line_height: true,
            word_wrap: true,
        }
    }

    /// A delta that only touches scrollbar options
    pub const fn scrollbar() -> Self {
        Self {
            scrollbar: true,
            font_info: false,
            line_height: false,
            word_wrap: false,
        }
    }

    /// Check if no group changed
    pub const fn is_empty(&self) -> bool {
        !(self.scrollbar || self.font_info || self.line_height || self.word_wrap)
    }
}

/// Viewport layout as computed by the host
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutInfo {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
}

impl LayoutInfo {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_dimension(width),
            height: clamp_dimension(height),
        }
    }
}

/// Current scroll position of the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollEvent {
    /// Vertical offset from the top of the content
    pub scroll_top: f32,
    /// Horizontal offset from the left of the content
    pub scroll_left: f32,
}

impl ScrollEvent {
    pub fn new(scroll_top: f32, scroll_left: f32) -> Self {
        Self {
            scroll_top: clamp_dimension(scroll_top),
            scroll_left: clamp_dimension(scroll_left),
        }
    }

    /// Vertical-only scroll event
    pub fn vertical(scroll_top: f32) -> Self {
        Self::new(scroll_top, 0.0)
    }
}

/// An event delivered to view parts
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent {
    ConfigurationChanged(ConfigurationChangedEvent),
    LayoutChanged(LayoutInfo),
    ScrollChanged(ScrollEvent),
}

impl ViewEvent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ViewEvent::ConfigurationChanged(_) => "configuration_changed",
            ViewEvent::LayoutChanged(_) => "layout_changed",
            ViewEvent::ScrollChanged(_) => "scroll_changed",
        }
    }
}

/// Normalize a host-provided offset or dimension to a finite value `>= 0`.
///
/// Negative values and NaN become `0.0`.
pub fn clamp_dimension(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
