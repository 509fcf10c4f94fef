//! Events.

use cgmath::Point2;
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;
use timeline_core::HandleTag;

pub trait EventType: fmt::Debug {
    fn type_name() -> &'static str;
}

/// Types of pointing devices or mechanisms.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDevice {
    /// Touch input from a finger or something of the sort; is expected to be imprecise.
    Touch = 0,

    /// Pen input.
    Pen = 1,

    /// Eraser input.
    Eraser = 2,

    /// Any indirect input mechanism.
    Cursor = 3,
}

impl PointerDevice {
    /// If true, the input mechanism is precise and can hit small targets.
    pub fn is_precise(&self) -> bool {
        match self {
            PointerDevice::Touch => false,
            PointerDevice::Pen | PointerDevice::Eraser | PointerDevice::Cursor => true,
        }
    }

    /// If true, the input mechanism is volatile and can’t be expected to hold perfectly still.
    ///
    /// Dragging a resize handle is a bad experience with these when not accounted for because the
    /// event jumps a tiny bit e.g. when you lift the pen from the screen.
    pub fn is_volatile(&self) -> bool {
        match self {
            PointerDevice::Touch | PointerDevice::Pen | PointerDevice::Eraser => true,
            PointerDevice::Cursor => false,
        }
    }
}

/// Phases of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// A pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct Pointer {
    /// Unique ID of the pointer, or zero.
    pub id: u64,

    /// Event location in the event view’s coordinate system.
    pub location: Point2<f64>,

    pub phase: PointerPhase,

    /// Pointer pressure, between 0 and 1.
    pub pressure: f64,

    /// The device type that emitted this pointer event.
    pub device: PointerDevice,
}

impl Pointer {
    /// A full-pressure touch at the given location.
    pub fn touch(location: Point2<f64>, phase: PointerPhase) -> Pointer {
        Pointer {
            id: 0,
            location,
            phase,
            pressure: 1.,
            device: PointerDevice::Touch,
        }
    }
}

impl EventType for Pointer {
    fn type_name() -> &'static str {
        "Pointer"
    }
}

/// A pointer event that landed on a resize handle.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleEvent {
    pub tag: HandleTag,

    /// Event location in the handle’s coordinate system.
    pub location: Point2<f64>,

    pub pointer: Pointer,
}

impl EventType for HandleEvent {
    fn type_name() -> &'static str {
        "HandleEvent"
    }
}

pub struct EventHandler<Type>(Arc<Mutex<dyn FnMut(Type) + Send>>);

impl<T> Clone for EventHandler<T> {
    fn clone(&self) -> Self {
        EventHandler(Arc::clone(&self.0))
    }
}

impl<T: EventType> EventHandler<T> {
    pub fn new<F: 'static + FnMut(T) + Send>(handler: F) -> Self {
        EventHandler(Arc::new(Mutex::new(handler)))
    }

    /// Calls the handler.
    ///
    /// The handler stays locked while it runs, so it must not call itself (or a clone of itself)
    /// again; doing so deadlocks.
    pub fn call(&self, event: T) {
        (&mut *self.0.lock())(event)
    }
}

impl<T: EventType> fmt::Debug for EventHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EventHandler<{}>", T::type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_clones_share_state() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls2 = Arc::clone(&calls);
        let handler = EventHandler::new(move |event: HandleEvent| calls2.lock().push(event.tag));
        let clone = handler.clone();

        let pointer = Pointer::touch(Point2::new(1., 2.), PointerPhase::Began);
        handler.call(HandleEvent {
            tag: HandleTag::Start,
            location: pointer.location,
            pointer: pointer.clone(),
        });
        clone.call(HandleEvent {
            tag: HandleTag::End,
            location: pointer.location,
            pointer,
        });

        assert_eq!(*calls.lock(), vec![HandleTag::Start, HandleTag::End]);
        assert_eq!(format!("{:?}", handler), "EventHandler<HandleEvent>");
    }

    #[test]
    fn handler_can_forward_to_another_handler() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls2 = Arc::clone(&calls);
        let inner = EventHandler::new(move |event: HandleEvent| calls2.lock().push(event.tag));
        let outer = EventHandler::new(move |event: HandleEvent| inner.call(event));

        let pointer = Pointer::touch(Point2::new(0., 0.), PointerPhase::Moved);
        outer.call(HandleEvent {
            tag: HandleTag::End,
            location: pointer.location,
            pointer,
        });
        assert_eq!(*calls.lock(), vec![HandleTag::End]);
    }

    #[test]
    fn device_precision() {
        assert!(!PointerDevice::Touch.is_precise());
        assert!(PointerDevice::Cursor.is_precise());
        assert!(!PointerDevice::Cursor.is_volatile());
        assert!(PointerDevice::Pen.is_volatile());
    }
}
