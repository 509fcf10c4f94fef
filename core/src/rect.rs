//! Rectangles.

use crate::error::{require_non_negative, LayoutError, LayoutResult};
use cgmath::{EuclideanSpace, Point2, Vector2};
use std::ops;

/// A rectangle in a view’s local coordinate space (positive y points down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin (top left corner).
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    /// Creates a new rectangle from its components.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            origin: Point2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.y
    }

    /// Returns the same rectangle, or an error if it has a negative or non-finite size.
    ///
    /// Origins may be anywhere, including negative coordinates.
    pub fn validate(self) -> LayoutResult<Rect> {
        for &(what, value) in &[("rectangle x", self.origin.x), ("rectangle y", self.origin.y)] {
            if !value.is_finite() {
                return Err(LayoutError::invalid(what, "finite", value));
            }
        }
        require_non_negative("rectangle width", self.size.x)?;
        require_non_negative("rectangle height", self.size.y)?;
        Ok(self)
    }

    /// Returns true if the point is inside the rectangle.
    ///
    /// The minimum edges are inclusive and the maximum edges are exclusive, so adjacent
    /// rectangles never both contain a point on their shared edge.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.origin.x + self.size.x
            && point.y < self.origin.y + self.size.y
    }

    /// Returns true if the two rectangles intersect.
    pub fn intersects(&self, rect: Rect) -> bool {
        let own_opposite = self.origin + self.size;
        let rect_opposite = rect.origin + rect.size;

        self.origin.x < rect_opposite.x
            && self.origin.y < rect_opposite.y
            && rect.origin.x < own_opposite.x
            && rect.origin.y < own_opposite.y
    }

    /// Returns the intersection rectangle.
    pub fn intersect(&self, rect: Rect) -> Option<Rect> {
        if !self.intersects(rect) {
            return None;
        }

        let min_x = self.origin.x.max(rect.origin.x);
        let min_y = self.origin.y.max(rect.origin.y);
        let max_x = self.max_x().min(rect.max_x());
        let max_y = self.max_y().min(rect.max_y());

        Some(Rect {
            origin: (min_x, min_y).into(),
            size: (max_x - min_x, max_y - min_y).into(),
        })
    }

    /// Returns a new rectangle inset by the specified amount.
    ///
    /// Negative amounts grow the rectangle.
    pub fn inset(&self, horiz: f64, vert: f64) -> Rect {
        Rect {
            origin: (self.origin.x + horiz, self.origin.y + vert).into(),
            size: (self.size.x - 2. * horiz, self.size.y - 2. * vert).into(),
        }
    }

    /// Returns a new rectangle with the given origin.
    pub fn with_origin(&self, origin: Point2<f64>) -> Rect {
        Rect {
            origin,
            size: self.size,
        }
    }

    /// Returns the same rectangle at the coordinate origin; i.e. the bounds for this frame.
    pub fn bounds(&self) -> Rect {
        self.with_origin(Point2::origin())
    }
}

impl ops::Add<Vector2<f64>> for Rect {
    type Output = Rect;
    fn add(self, offset: Vector2<f64>) -> Rect {
        Rect {
            origin: self.origin + offset,
            size: self.size,
        }
    }
}

impl ops::Add<Point2<f64>> for Rect {
    type Output = Rect;
    fn add(self, point: Point2<f64>) -> Rect {
        self + point.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::from_xywh(0., 0., 100., 50.);
        assert!(r.contains(Point2::new(0., 0.)));
        assert!(r.contains(Point2::new(99.9, 49.9)));
        assert!(!r.contains(Point2::new(100., 10.)));
        assert!(!r.contains(Point2::new(10., 50.)));
        assert!(!r.contains(Point2::new(95., -10.)));
    }

    #[test]
    fn negative_origin_contains() {
        let r = Rect::from_xywh(70., -20., 40., 40.);
        assert!(r.contains(Point2::new(95., -10.)));
    }

    #[test]
    fn validate_rejects_negative_size() {
        assert!(Rect::from_xywh(-5., -5., 0., 0.).validate().is_ok());
        assert!(Rect::from_xywh(0., 0., -1., 10.).validate().is_err());
        assert!(Rect::from_xywh(0., 0., 10., -1.).validate().is_err());
        assert!(Rect::from_xywh(0., 0., f64::NAN, 10.).validate().is_err());
    }

    #[test]
    fn intersect_overlapping() {
        let a = Rect::from_xywh(0., 0., 10., 10.);
        let b = Rect::from_xywh(5., 5., 10., 10.);
        assert_eq!(a.intersect(b), Some(Rect::from_xywh(5., 5., 5., 5.)));
        assert_eq!(a.intersect(Rect::from_xywh(10., 0., 5., 5.)), None);
    }

    #[test]
    fn negative_inset_grows() {
        let r = Rect::from_xywh(0., 0., 10., 10.).inset(-2., -2.);
        assert_eq!(r, Rect::from_xywh(-2., -2., 14., 14.));
    }

    #[test]
    fn offset_by_vector_and_point() {
        let r = Rect::from_xywh(1., 2., 3., 4.);
        assert_eq!(r + Vector2::new(1., 1.), Rect::from_xywh(2., 3., 3., 4.));
        assert_eq!(r + Point2::new(-1., 0.), Rect::from_xywh(0., 2., 3., 4.));
        assert_eq!(r.bounds(), Rect::from_xywh(0., 0., 3., 4.));
    }
}
