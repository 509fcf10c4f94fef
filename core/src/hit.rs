//! Hit routing for interactive overlays.
//!
//! A view normally only receives pointer events inside its own bounds. Overlays such as resize
//! handles are allowed to protrude past their parent, so they are kept in an explicit ordered list
//! that is tested *before* the default containment check. If none of them claims the point, the
//! caller falls back to containment.

use crate::error::LayoutResult;
use crate::rect::Rect;
use cgmath::Point2;
use tracing::trace;

/// Anything that can claim a point for pointer interaction.
pub trait HitTestable {
    /// The region’s frame in the parent’s local coordinate space.
    fn frame(&self) -> Rect;

    /// Returns true if the point (in the parent’s local coordinate space) hits this region.
    fn contains(&self, point: Point2<f64>) -> bool {
        self.frame().contains(point)
    }
}

impl HitTestable for Rect {
    fn frame(&self) -> Rect {
        *self
    }
}

/// Identifies one of the two resize handles of an event view.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandleTag {
    /// Top handle; drags the event start.
    Start = 0,
    /// Bottom handle; drags the event end.
    End = 1,
}

impl HandleTag {
    /// Both tags, in hit-testing order.
    pub const ALL: [HandleTag; 2] = [HandleTag::Start, HandleTag::End];

    /// The ordinal tag (0 for the start handle, 1 for the end handle).
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// An interactive rectangle that may lie partly or entirely outside its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRegion {
    pub frame: Rect,
    pub tag: HandleTag,
}

impl OverlayRegion {
    pub fn new(frame: Rect, tag: HandleTag) -> OverlayRegion {
        OverlayRegion { frame, tag }
    }
}

impl HitTestable for OverlayRegion {
    fn frame(&self) -> Rect {
        self.frame
    }
}

/// Returns the overlay that should receive an interaction at `point`, if any.
///
/// Overlays are tested in slice order and the first one containing the point wins, so callers
/// should put the front-most overlay first. Whether `point` lies inside `parent_bounds` does not
/// matter here. `None` tells the caller to continue with containment-based hit testing.
///
/// Fails if the parent bounds or any overlay has a negative or non-finite size.
pub fn route_hit<'a, R: HitTestable>(
    point: Point2<f64>,
    parent_bounds: Rect,
    overlays: &'a [R],
) -> LayoutResult<Option<&'a R>> {
    parent_bounds.validate()?;
    for overlay in overlays {
        overlay.frame().validate()?;
    }

    let hit = overlays.iter().position(|overlay| overlay.contains(point));
    trace!(
        "routed hit at ({}, {}) over {} overlays: {:?}",
        point.x,
        point.y,
        overlays.len(),
        hit
    );
    Ok(hit.map(|i| &overlays[i]))
}

/// Result of a full hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit<'a, R> {
    /// An overlay claimed the point.
    Overlay(&'a R),
    /// No overlay claimed it but the point is inside the parent.
    Parent,
    /// Neither.
    Miss,
}

impl<'a, R> Hit<'a, R> {
    pub fn is_miss(&self) -> bool {
        match self {
            Hit::Miss => true,
            _ => false,
        }
    }
}

/// Routes through the overlays first and only then applies default containment.
pub fn hit_test<'a, R: HitTestable>(
    point: Point2<f64>,
    parent_bounds: Rect,
    overlays: &'a [R],
) -> LayoutResult<Hit<'a, R>> {
    if let Some(overlay) = route_hit(point, parent_bounds, overlays)? {
        return Ok(Hit::Overlay(overlay));
    }
    if parent_bounds.contains(point) {
        Ok(Hit::Parent)
    } else {
        Ok(Hit::Miss)
    }
}
