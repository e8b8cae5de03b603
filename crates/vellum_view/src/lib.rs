//! Vellum View Parts
//!
//! Event-driven view components with a two-phase render contract:
//!
//! - **View parts**: the [`ViewPart`] trait every component implements
//! - **Presentation nodes**: headless visual elements mutated only on commit
//! - **Scroll decoration**: the top-edge shadow shown while scrolled
//! - **Host**: registers parts, dispatches events, runs prepare/commit frames
//!
//! # Example
//!
//! ```rust
//! use vellum_core::{Configuration, EditorOptions, LayoutInfo, ScrollEvent, ViewEvent};
//! use vellum_view::{ScrollDecoration, ViewHost, SCROLL_DECORATION_CLASS};
//!
//! let mut host = ViewHost::new(Configuration::shared(EditorOptions::default()));
//! let deco = host.register(Box::new(ScrollDecoration::new(host.configuration())));
//!
//! host.emit(ViewEvent::LayoutChanged(LayoutInfo::new(800.0, 600.0)));
//! host.emit(ViewEvent::ScrollChanged(ScrollEvent::vertical(24.0)));
//! let report = host.render_frame()?;
//! assert_eq!(report.commit_count(), 1);
//!
//! let node = host.part(deco).unwrap().presentation_node();
//! assert!(node.has_class(SCROLL_DECORATION_CLASS));
//! # Ok::<(), vellum_core::ViewError>(())
//! ```

pub mod host;
pub mod node;
pub mod part;
pub mod scroll_decoration;

pub use host::{FrameReport, ViewHost, ViewPartId};
pub use node::{NodeSnapshot, PresentationNode};
pub use part::{RenderRequest, RenderingContext, RestrictedRenderingContext, ViewPart};
pub use scroll_decoration::{DecorationState, ScrollDecoration, SCROLL_DECORATION_CLASS};
