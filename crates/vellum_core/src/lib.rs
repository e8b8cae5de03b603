//! Vellum Core
//!
//! Foundational types shared by Vellum view parts and their host:
//!
//! - **Configuration**: editor options and the shared handle parts re-query
//! - **Events**: configuration, layout and scroll notifications
//! - **Errors**: the view pipeline error taxonomy

pub mod config;
pub mod error;
pub mod events;

pub use config::{Configuration, EditorOptions, ScrollbarOptions, SharedConfiguration};
pub use error::{Result, ViewError};
pub use events::{ConfigurationChangedEvent, LayoutInfo, ScrollEvent, ViewEvent};
