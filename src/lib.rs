//! Calendar timeline views.
//!
//! # Conceptual overview
//! This crate provides the models behind two timeline views: the all-day band at the top of a
//! day or week, and the timed event blocks inside the timeline. The models compute everything a
//! renderer needs (heights, frames, presentation values, hit targets) from the current events and
//! configuration; drawing, scrolling, and gesture recognition are left to the renderer.
//!
//! The geometry itself lives in [`timeline_core`], which this crate re-exports the common types
//! of.
//!
//! ## Events
//! Events are supplied as shared [`EventDescriptor`]s. Views only read them and never reorder
//! them, so the caller decides the order (usually chronological). An event is being edited when it
//! is an editable copy of another event (see [`Event::make_editable`]); editing events show resize
//! handles and a shadow.
//!
//! ## Relayout
//! There is no cached layout to invalidate. Whenever the events, the container size, or the style
//! change, the renderer just asks for a new layout.
//!
//! ## Pointer Events
//! Resize handles protrude past their event view, so an event view routes pointer events to its
//! visible handles before checking its own bounds. Events that land on a handle are delivered to
//! the view’s resize action in handle coordinates.

pub mod all_day_view;
pub mod color;
pub mod config;
pub mod descriptor;
pub mod event_view;
pub mod events;
pub mod style;

pub use all_day_view::{AllDayEventView, AllDayViewLayout};
pub use config::{ConfigError, TimelineConfig};
pub use descriptor::{DateInterval, Event, EventDescriptor, EventId};
pub use event_view::{EventView, EventViewHit, EventViewLayout};
pub use timeline_core::{HandleTag, LayoutDirection, LayoutError, LayoutResult, Rect};
