//! Layout policy for calendar timelines.
//!
//! # Conceptual overview
//! This crate holds the geometry behind the timeline views; it doesn’t draw anything. A renderer
//! feeds it the current events and sizes, gets plain values back (heights, frames, overlay
//! regions), and does the actual drawing, scrolling, and gesture dispatch itself.
//!
//! Everything here is a pure function of its inputs: there is no cached layout, and all of it is
//! recomputed from scratch whenever the events, the container size, or the style change.
//!
//! ## All-day band
//! All-day events are stacked into rows of a fixed height, in the order they were supplied. The
//! band reserves at most a configured maximum height; if the rows need more than that, they are
//! all still laid out and the band scrolls internally. See [`all_day::layout`].
//!
//! ## Overlay hit routing
//! Timed events get two resize handles while being edited, and those handles stick out past the
//! top and bottom of the event. Default hit testing only accepts points inside a view’s bounds,
//! which would make the protruding parts dead. So overlays live in an explicit ordered list that
//! is tested *before* the containment check; see [`hit::route_hit`].
//!
//! ## Coordinate System
//! Coordinates are local to the parent view. The origin is at the top left corner and positive y
//! points down. Overlays may have negative coordinates.

pub mod all_day;
pub mod error;
pub mod handles;
pub mod hit;
mod rect;

pub use all_day::{AllDayBand, BandRow, RowInsets};
pub use error::{LayoutError, LayoutResult};
pub use handles::{ContentLayout, ContentPolicy, HandleGeometry, InfoRowPolicy, LayoutDirection};
pub use hit::{HandleTag, Hit, HitTestable, OverlayRegion};
pub use rect::Rect;
