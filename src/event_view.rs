//! The timed event view.
//!
//! While its event is being edited, the view shows two resize handles that stick out above and
//! below it. Pointer events are routed to those handles before the view’s own bounds are checked,
//! so the protruding parts work too.

use crate::color::Color;
use crate::config::EventViewConfig;
use crate::descriptor::EventDescriptor;
use crate::events::{EventHandler, HandleEvent, Pointer};
use crate::style::{Font, LabelStyle, LayerShadow, LineBreakMode};
use cgmath::Point2;
use std::sync::Arc;
use timeline_core::hit::{self, Hit};
use timeline_core::{
    ContentLayout, HandleTag, LayoutDirection, LayoutResult, OverlayRegion, Rect,
};
use tracing::trace;

/// Text and colors derived from the event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPresentation {
    pub text: String,
    pub font: Font,
    pub text_color: Color,
    pub line_break_mode: Option<LineBreakMode>,
    pub time_label: (String, LabelStyle),
    pub symbol_label: (String, LabelStyle),
    pub background_color: Color,
    /// Accent line and handle border color.
    pub color: Color,
}

impl EventPresentation {
    fn from_descriptor(descriptor: &dyn EventDescriptor) -> EventPresentation {
        let appearance = descriptor.appearance();
        EventPresentation {
            text: descriptor.text().to_string(),
            font: appearance.font.clone(),
            text_color: appearance.text_color,
            line_break_mode: descriptor.line_break_mode(),
            time_label: (
                descriptor.time_label_text().to_string(),
                appearance.time_label.clone(),
            ),
            symbol_label: (
                descriptor.symbol_label_text().to_string(),
                appearance.symbol_label.clone(),
            ),
            background_color: appearance.background_color,
            color: appearance.color,
        }
    }
}

/// Output of [`EventView::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventViewLayout {
    /// The view’s own bounds.
    pub bounds: Rect,
    pub content: ContentLayout,
    /// Both resize handles, start first. Only hit-testable while they’re visible.
    pub handles: [OverlayRegion; 2],
    pub handles_visible: bool,
    pub shadow: Option<LayerShadow>,
}

impl EventViewLayout {
    /// Handles that currently take part in hit testing.
    pub fn active_handles(&self) -> &[OverlayRegion] {
        if self.handles_visible {
            &self.handles
        } else {
            &[]
        }
    }
}

/// What a point in an event view hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventViewHit {
    ResizeHandle(HandleTag),
    Body,
    None,
}

#[derive(Debug)]
pub struct EventView {
    config: EventViewConfig,
    descriptor: Option<Arc<dyn EventDescriptor>>,
    presentation: Option<EventPresentation>,
    editing: bool,
    resize_action: Option<EventHandler<HandleEvent>>,
}

impl EventView {
    pub fn new(config: EventViewConfig) -> LayoutResult<EventView> {
        config.validate()?;
        Ok(EventView {
            config,
            descriptor: None,
            presentation: None,
            editing: false,
            resize_action: None,
        })
    }

    pub fn descriptor(&self) -> Option<&Arc<dyn EventDescriptor>> {
        self.descriptor.as_ref()
    }

    pub fn presentation(&self) -> Option<&EventPresentation> {
        self.presentation.as_ref()
    }

    /// Shows the given event.
    ///
    /// Handles are only shown, and the shadow only drawn, while the event is being edited.
    pub fn update_with_descriptor(&mut self, descriptor: Arc<dyn EventDescriptor>) {
        self.presentation = Some(EventPresentation::from_descriptor(&*descriptor));
        self.editing = descriptor.is_editing();
        self.descriptor = Some(descriptor);
    }

    pub fn handles_visible(&self) -> bool {
        self.editing
    }

    pub fn draws_shadow(&self) -> bool {
        self.editing
    }

    /// Sets the handler that receives pointer events landing on a resize handle.
    pub fn set_resize_action(&mut self, action: Option<EventHandler<HandleEvent>>) {
        self.resize_action = action;
    }

    /// Lays out the view for the given frame (in its container’s coordinates).
    pub fn layout(&self, frame: Rect, direction: LayoutDirection) -> LayoutResult<EventViewLayout> {
        let content = ContentLayout::compute(frame, direction, &self.config.content_policy())?;
        let handles = self.config.handle_geometry().regions(frame.size)?;
        let bounds = frame.bounds();
        let shadow = if self.draws_shadow() {
            Some(self.config.editing_shadow.to_layer_shadow(bounds))
        } else {
            None
        };

        Ok(EventViewLayout {
            bounds,
            content,
            handles,
            handles_visible: self.handles_visible(),
            shadow,
        })
    }

    /// Hit-tests a point in view coordinates.
    ///
    /// Visible handles are checked first, even outside the view’s bounds.
    pub fn hit_test(
        &self,
        point: Point2<f64>,
        layout: &EventViewLayout,
    ) -> LayoutResult<EventViewHit> {
        let hit = match hit::hit_test(point, layout.bounds, layout.active_handles())? {
            Hit::Overlay(handle) => EventViewHit::ResizeHandle(handle.tag),
            Hit::Parent => EventViewHit::Body,
            Hit::Miss => EventViewHit::None,
        };
        trace!("event view hit test at ({}, {}): {:?}", point.x, point.y, hit);
        Ok(hit)
    }

    /// Delivers a pointer event to the resize handle under it.
    ///
    /// Returns true if a handle received the event.
    pub fn dispatch_pointer(
        &self,
        pointer: &Pointer,
        layout: &EventViewLayout,
    ) -> LayoutResult<bool> {
        let routed = hit::route_hit(pointer.location, layout.bounds, layout.active_handles())?;
        let handle = match routed {
            Some(handle) => handle,
            None => return Ok(false),
        };
        let action = match &self.resize_action {
            Some(action) => action,
            None => return Ok(false),
        };

        let origin = handle.frame.origin;
        action.call(HandleEvent {
            tag: handle.tag,
            location: Point2::new(pointer.location.x - origin.x, pointer.location.y - origin.y),
            pointer: pointer.clone(),
        });
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{DateInterval, Event};
    use crate::events::PointerPhase;
    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;

    fn event() -> Event {
        let start = Utc.with_ymd_and_hms(2021, 12, 10, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2021, 12, 10, 10, 0, 0).unwrap();
        let mut event = Event::new("Standup", DateInterval::new(start, end).unwrap());
        event.time_label_text = "9:00".to_string();
        event.symbol_label_text = "●".to_string();
        event
    }

    fn editing_view() -> EventView {
        let original = event().into_shared();
        let mut view = EventView::new(EventViewConfig::default()).unwrap();
        view.update_with_descriptor(Arc::new(Event::make_editable(&original)));
        view
    }

    fn frame() -> Rect {
        Rect::from_xywh(0., 120., 100., 50.)
    }

    #[test]
    fn presentation_follows_descriptor() {
        let mut view = EventView::new(EventViewConfig::default()).unwrap();
        view.update_with_descriptor(Arc::new(event()));

        let presentation = view.presentation().unwrap();
        assert_eq!(presentation.text, "Standup");
        assert_eq!(presentation.time_label.0, "9:00");
        assert_eq!(presentation.symbol_label.0, "●");
        assert_eq!(presentation.font, Font::bold_system(12.));
        assert!(!view.handles_visible());
        assert!(!view.draws_shadow());
    }

    #[test]
    fn editing_shows_handles_and_shadow() {
        let view = editing_view();
        assert!(view.handles_visible());
        assert!(view.draws_shadow());

        let layout = view.layout(frame(), LayoutDirection::LeftToRight).unwrap();
        assert_eq!(layout.handles[0].frame, Rect::from_xywh(52., -20., 40., 40.));
        assert_eq!(layout.handles[1].frame, Rect::from_xywh(8., 30., 40., 40.));
        assert_eq!(layout.shadow.map(|s| s.opacity), Some(0.13));
        assert_eq!(layout.bounds, Rect::from_xywh(0., 0., 100., 50.));
    }

    #[test]
    fn protruding_handles_receive_hits() {
        let view = editing_view();
        let layout = view.layout(frame(), LayoutDirection::LeftToRight).unwrap();

        // above the view, inside the start handle
        assert_eq!(
            view.hit_test(Point2::new(70., -10.), &layout).unwrap(),
            EventViewHit::ResizeHandle(HandleTag::Start)
        );
        // below the view, inside the end handle
        assert_eq!(
            view.hit_test(Point2::new(20., 65.), &layout).unwrap(),
            EventViewHit::ResizeHandle(HandleTag::End)
        );
        // inside the view, outside both handles
        assert_eq!(view.hit_test(Point2::new(5., 5.), &layout).unwrap(), EventViewHit::Body);
        // outside everything
        assert_eq!(view.hit_test(Point2::new(-5., -30.), &layout).unwrap(), EventViewHit::None);
    }

    #[test]
    fn hidden_handles_are_ignored() {
        let mut view = EventView::new(EventViewConfig::default()).unwrap();
        view.update_with_descriptor(Arc::new(event()));
        let layout = view.layout(frame(), LayoutDirection::LeftToRight).unwrap();

        assert!(layout.active_handles().is_empty());
        assert_eq!(view.hit_test(Point2::new(70., -10.), &layout).unwrap(), EventViewHit::None);
        // inside both the body and the (hidden) start handle
        assert_eq!(view.hit_test(Point2::new(70., 10.), &layout).unwrap(), EventViewHit::Body);
    }

    #[test]
    fn dispatch_reaches_handle_action() {
        let mut view = editing_view();
        let received = Arc::new(Mutex::new(Vec::new()));
        let received2 = Arc::clone(&received);
        view.set_resize_action(Some(EventHandler::new(move |event: HandleEvent| {
            received2.lock().push(event)
        })));
        let layout = view.layout(frame(), LayoutDirection::LeftToRight).unwrap();

        let pointer = Pointer::touch(Point2::new(70., -10.), PointerPhase::Began);
        assert!(view.dispatch_pointer(&pointer, &layout).unwrap());

        let miss = Pointer::touch(Point2::new(5., 5.), PointerPhase::Began);
        assert!(!view.dispatch_pointer(&miss, &layout).unwrap());

        let received = received.lock();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].tag, HandleTag::Start);
        assert_eq!(received[0].location, Point2::new(18., 10.));
    }

    #[test]
    fn dispatch_without_action_is_not_handled() {
        let view = editing_view();
        let layout = view.layout(frame(), LayoutDirection::LeftToRight).unwrap();
        let pointer = Pointer::touch(Point2::new(70., -10.), PointerPhase::Began);
        assert!(!view.dispatch_pointer(&pointer, &layout).unwrap());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EventViewConfig {
            handle_diameter: -1.,
            ..EventViewConfig::default()
        };
        assert!(EventView::new(config).is_err());
    }
}
