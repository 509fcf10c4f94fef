//! Geometry of a timed event view: resize handles and content frames.

use crate::error::{require_non_negative, require_positive, LayoutResult};
use crate::hit::{HandleTag, OverlayRegion};
use crate::rect::Rect;
use cgmath::Vector2;

/// Resize handle placement.
///
/// Handles are square, `diameter` wide, and protrude past the view by half their height: the
/// start handle above the top trailing corner, the end handle below the bottom leading corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGeometry {
    pub diameter: f64,
    pub margin_left: f64,
    pub margin_right: f64,
}

impl Default for HandleGeometry {
    fn default() -> Self {
        HandleGeometry {
            diameter: 40.,
            margin_left: 8.,
            margin_right: 8.,
        }
    }
}

impl HandleGeometry {
    pub fn validate(&self) -> LayoutResult<()> {
        require_positive("handle diameter", self.diameter)?;
        require_non_negative("handle left margin", self.margin_left)?;
        require_non_negative("handle right margin", self.margin_right)?;
        Ok(())
    }

    /// Frame of the given handle for a view of the given size, in view coordinates.
    pub fn frame(&self, tag: HandleTag, size: Vector2<f64>) -> Rect {
        let d = self.diameter;
        let protrusion = d / 2.;
        match tag {
            HandleTag::Start => Rect::from_xywh(size.x - d - self.margin_right, -protrusion, d, d),
            HandleTag::End => Rect::from_xywh(self.margin_left, size.y + protrusion - d, d, d),
        }
    }

    /// Overlay regions for both handles, in [`HandleTag::ALL`] order.
    pub fn regions(&self, size: Vector2<f64>) -> LayoutResult<[OverlayRegion; 2]> {
        self.validate()?;
        Rect::new((0., 0.).into(), size).validate()?;
        Ok(HandleTag::ALL.map(|tag| OverlayRegion::new(self.frame(tag, size), tag)))
    }
}

/// Sizing of the secondary info row (time and symbol labels) below the event text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoRowPolicy {
    /// Views shorter than this use a compressed info row.
    pub compact_threshold: f64,
    /// In compact views, the info row is the view height minus this.
    pub compact_inset: f64,
    /// Info row height in regular views.
    pub max_height: f64,
}

impl Default for InfoRowPolicy {
    fn default() -> Self {
        InfoRowPolicy {
            compact_threshold: 40.,
            compact_inset: 15.,
            max_height: 20.,
        }
    }
}

impl InfoRowPolicy {
    pub fn validate(&self) -> LayoutResult<()> {
        require_positive("info row compact threshold", self.compact_threshold)?;
        require_non_negative("info row compact inset", self.compact_inset)?;
        require_non_negative("info row max height", self.max_height)?;
        Ok(())
    }

    /// Info row height for a view of the given height. Never negative.
    pub fn height(&self, view_height: f64) -> f64 {
        let height = if view_height < self.compact_threshold {
            view_height - self.compact_inset
        } else {
            self.max_height
        };
        height.max(0.)
    }
}

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    LeftToRight,
    RightToLeft,
}

impl Default for LayoutDirection {
    fn default() -> Self {
        LayoutDirection::LeftToRight
    }
}

/// Content sizing for a timed event view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentPolicy {
    /// Stroke width of the accent line along the leading edge; the text is inset by this much.
    pub accent_width: f64,
    /// Distance of the accent line from the trailing edge in right-to-left layouts.
    pub trailing_accent_offset: f64,
    pub info_row: InfoRowPolicy,
}

impl Default for ContentPolicy {
    fn default() -> Self {
        ContentPolicy {
            accent_width: 3.,
            trailing_accent_offset: 1.,
            info_row: InfoRowPolicy::default(),
        }
    }
}

impl ContentPolicy {
    pub fn validate(&self) -> LayoutResult<()> {
        require_non_negative("accent width", self.accent_width)?;
        require_non_negative("trailing accent offset", self.trailing_accent_offset)?;
        self.info_row.validate()
    }
}

/// The vertical accent line drawn along the leading edge of an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentLine {
    pub x: f64,
    pub height: f64,
    pub width: f64,
}

/// Frames of an event view’s contents, in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentLayout {
    pub text: Rect,
    pub info_row: Rect,
    pub accent_line: AccentLine,
}

impl ContentLayout {
    /// Lays out the contents of an event view with the given frame (in its container’s
    /// coordinates).
    ///
    /// If the frame starts above its container, the text is pushed down into the visible part.
    pub fn compute(
        frame: Rect,
        direction: LayoutDirection,
        policy: &ContentPolicy,
    ) -> LayoutResult<ContentLayout> {
        frame.validate()?;
        policy.validate()?;

        let width = frame.width();
        let height = frame.height();
        let info_height = policy.info_row.height(height);
        let content_width = (width - policy.accent_width).max(0.);
        let text_height = (height - info_height).max(0.);

        let text_x = match direction {
            LayoutDirection::LeftToRight => policy.accent_width,
            LayoutDirection::RightToLeft => 0.,
        };
        let mut text = Rect::from_xywh(text_x, 0., content_width, text_height);
        let mut info_row = Rect::from_xywh(0., text_height, content_width, info_height);

        if frame.origin.y < 0. {
            // the info row collapses onto the visible text area
            text.origin.y = -frame.origin.y;
            text.size.y = (text.size.y + frame.origin.y).max(0.);
            info_row = text;
        }

        let accent_x = match direction {
            LayoutDirection::LeftToRight => 0.,
            LayoutDirection::RightToLeft => width - policy.trailing_accent_offset,
        };

        Ok(ContentLayout {
            text,
            info_row,
            accent_line: AccentLine {
                x: accent_x,
                height,
                width: policy.accent_width,
            },
        })
    }
    /// Combined height of the text and info row frames.
    pub fn content_height(&self) -> f64 {
        self.text.height() + self.info_row.height()
    }
}
