//! View host
//!
//! Minimal render scheduler for view parts. It owns the registered parts,
//! queues incoming events, and runs frames in two passes:
//!
//! 1. Deliver every queued event, collecting the parts that reported dirty
//! 2. `prepare_render` on each dirty part (abort the frame on any error)
//! 3. `render` on each dirty part, then clear the dirty set
//!
//! Events are always drained before a frame's prepare pass, so a frame
//! observes the latest state of every part.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use vellum_core::{
    ConfigurationChangedEvent, EditorOptions, LayoutInfo, Result, ScrollEvent,
    SharedConfiguration, ViewEvent,
};

use crate::part::{RenderingContext, RestrictedRenderingContext, ViewPart};

new_key_type! {
    /// Handle to a registered view part
    pub struct ViewPartId;
}

/// Outcome of a completed frame
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    /// Parts committed this frame, in registration order
    pub committed: SmallVec<[ViewPartId; 8]>,
}

impl FrameReport {
    pub fn commit_count(&self) -> usize {
        self.committed.len()
    }
}

/// Owns view parts and drives their render passes
pub struct ViewHost {
    config: SharedConfiguration,
    parts: SlotMap<ViewPartId, Box<dyn ViewPart>>,
    /// Registration order, used for dispatch and render order
    order: Vec<ViewPartId>,
    queue: VecDeque<ViewEvent>,
    dirty: FxHashSet<ViewPartId>,
    frame: u64,
    viewport: LayoutInfo,
    scroll: ScrollEvent,
}

impl ViewHost {
    pub fn new(config: SharedConfiguration) -> Self {
        Self {
            config,
            parts: SlotMap::with_key(),
            order: Vec::new(),
            queue: VecDeque::new(),
            dirty: FxHashSet::default(),
            frame: 0,
            viewport: LayoutInfo::default(),
            scroll: ScrollEvent::default(),
        }
    }

    /// Configuration handle to pass to new view parts
    pub fn configuration(&self) -> SharedConfiguration {
        SharedConfiguration::clone(&self.config)
    }

    /// Register a part and attach its presentation node
    pub fn register(&mut self, mut part: Box<dyn ViewPart>) -> ViewPartId {
        part.presentation_node_mut().set_attached(true);
        let name = part.name();
        let id = self.parts.insert(part);
        self.order.push(id);
        tracing::debug!(part = name, ?id, "view part registered");
        id
    }

    /// Detach and drop a part
    pub fn remove(&mut self, id: ViewPartId) -> Option<Box<dyn ViewPart>> {
        let mut part = self.parts.remove(id)?;
        part.presentation_node_mut().set_attached(false);
        self.order.retain(|other| *other != id);
        self.dirty.remove(&id);
        tracing::debug!(part = part.name(), ?id, "view part removed");
        Some(part)
    }

    pub fn part(&self, id: ViewPartId) -> Option<&dyn ViewPart> {
        self.parts.get(id).map(|part| &**part)
    }

    /// Number of registered parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether the host will render this part in the next frame
    pub fn is_dirty(&self, id: ViewPartId) -> bool {
        self.dirty.contains(&id)
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Queue an event for delivery before the next frame
    pub fn emit(&mut self, event: ViewEvent) {
        self.queue.push_back(event);
    }

    /// Store new options and queue the resulting change event, if any
    pub fn update_options(&mut self, options: EditorOptions) -> ConfigurationChangedEvent {
        let delta = self.config.apply(options);
        if !delta.is_empty() {
            self.emit(ViewEvent::ConfigurationChanged(delta));
        }
        delta
    }

    /// Schedule a part for rendering even though it did not ask to render
    pub fn force_render(&mut self, id: ViewPartId) -> bool {
        if !self.parts.contains_key(id) {
            return false;
        }
        self.dirty.insert(id);
        true
    }

    /// Deliver all queued events in order. Returns the number delivered.
    pub fn dispatch_pending(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.queue.pop_front() {
            match event {
                ViewEvent::LayoutChanged(layout) => self.viewport = layout,
                ViewEvent::ScrollChanged(scroll) => self.scroll = scroll,
                ViewEvent::ConfigurationChanged(_) => {}
            }

            for &id in &self.order {
                let Some(part) = self.parts.get_mut(id) else {
                    continue;
                };
                if part.handle_event(&event) {
                    tracing::trace!(part = part.name(), event = event.kind(), "part requested render");
                    self.dirty.insert(id);
                }
            }
            delivered += 1;
        }
        delivered
    }

    /// Run one frame: drain events, prepare all dirty parts, then commit them.
    ///
    /// If any part fails to prepare, nothing is committed and the error is
    /// returned. The dirty set is left as it was.
    pub fn render_frame(&mut self) -> Result<FrameReport> {
        self.dispatch_pending();
        self.frame += 1;
        let frame = self.frame;

        let scheduled: SmallVec<[ViewPartId; 8]> = self
            .order
            .iter()
            .copied()
            .filter(|id| self.dirty.contains(id))
            .collect();

        if scheduled.is_empty() {
            tracing::trace!(frame, "nothing to render");
            return Ok(FrameReport {
                frame,
                committed: SmallVec::new(),
            });
        }

        let ctx = RenderingContext {
            frame,
            viewport: self.viewport,
            scroll: self.scroll,
        };
        for &id in &scheduled {
            if let Some(part) = self.parts.get_mut(id) {
                if let Err(err) = part.prepare_render(&ctx) {
                    tracing::error!(part = part.name(), frame, %err, "aborting frame");
                    return Err(err);
                }
            }
        }

        let commit_ctx = RestrictedRenderingContext { frame };
        for &id in &scheduled {
            if let Some(part) = self.parts.get_mut(id) {
                part.render(&commit_ctx);
            }
        }
        self.dirty.clear();

        tracing::debug!(frame, parts = scheduled.len(), "frame committed");
        Ok(FrameReport {
            frame,
            committed: scheduled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_decoration::{ScrollDecoration, SCROLL_DECORATION_CLASS};
    use vellum_core::{Configuration, ViewError};

    fn host_with_decoration() -> (ViewHost, ViewPartId) {
        let mut host = ViewHost::new(Configuration::shared(EditorOptions::default()));
        let deco = ScrollDecoration::new(host.configuration());
        let id = host.register(Box::new(deco));
        (host, id)
    }

    #[test]
    fn test_register_attaches_node() {
        let (host, id) = host_with_decoration();
        assert_eq!(host.len(), 1);
        let part = host.part(id).unwrap();
        assert!(part.presentation_node().is_attached());
        assert_eq!(part.name(), "scroll_decoration");
    }

    #[test]
    fn test_remove_detaches_node() {
        let (mut host, id) = host_with_decoration();
        let part = host.remove(id).unwrap();
        assert!(!part.presentation_node().is_attached());
        assert!(host.is_empty());
        assert!(host.part(id).is_none());
        assert!(host.remove(id).is_none());
    }

    #[test]
    fn test_empty_frame_commits_nothing() {
        let (mut host, _) = host_with_decoration();
        let report = host.render_frame().unwrap();
        assert_eq!(report.frame, 1);
        assert_eq!(report.commit_count(), 0);
    }

    #[test]
    fn test_events_are_delivered_before_prepare() {
        let (mut host, id) = host_with_decoration();
        host.emit(ViewEvent::LayoutChanged(LayoutInfo::new(500.0, 300.0)));
        host.emit(ViewEvent::ScrollChanged(ScrollEvent::vertical(20.0)));
        assert_eq!(host.pending_events(), 2);

        let report = host.render_frame().unwrap();
        assert_eq!(host.pending_events(), 0);
        assert_eq!(report.committed.as_slice(), &[id]);

        let node = host.part(id).unwrap().presentation_node();
        assert_eq!(node.width(), Some(500.0));
        assert!(node.has_class(SCROLL_DECORATION_CLASS));
        assert!(!host.is_dirty(id));
    }

    #[test]
    fn test_forced_render_is_protocol_violation() {
        let (mut host, id) = host_with_decoration();
        assert!(host.force_render(id));

        let err = host.render_frame().unwrap_err();
        assert!(matches!(err, ViewError::ProtocolViolation { .. }));
        assert_eq!(host.part(id).unwrap().presentation_node().commit_count(), 0);
    }

    #[test]
    fn test_update_options_queues_delta() {
        let (mut host, _) = host_with_decoration();

        let delta = host.update_options(EditorOptions::default());
        assert!(delta.is_empty());
        assert_eq!(host.pending_events(), 0);

        let mut options = EditorOptions::default();
        options.scrollbar.use_shadows = false;
        let delta = host.update_options(options);
        assert!(delta.scrollbar);
        assert_eq!(host.pending_events(), 1);
    }
}
