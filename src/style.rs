//! Styles and presentation values.
//!
//! Styles are plain immutable values. Views never mutate label state with them; instead they run
//! them through pure functions like [`apply_style`] to get fresh presentation values.

use crate::color::Color;
use crate::descriptor::{EventDescriptor, EventId};
use serde::{Deserialize, Serialize};
use timeline_core::{AllDayBand, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::Regular
    }
}

/// A font description; resolved to an actual font by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family; `None` for the system font.
    #[serde(default)]
    pub family: Option<String>,
    pub size: f64,
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    pub fn system(size: f64) -> Font {
        Font {
            family: None,
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn bold_system(size: f64) -> Font {
        Font {
            weight: FontWeight::Bold,
            ..Font::system(size)
        }
    }
}

/// How text that doesn’t fit is wrapped or truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreakMode {
    WordWrap,
    CharWrap,
    Clip,
    TruncateHead,
    TruncateTail,
    TruncateMiddle,
}

/// Font and color of a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub font: Font,
    pub color: Color,
}

/// How an event wants to be shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAppearance {
    pub font: Font,
    pub text_color: Color,
    /// Accent color: the leading line and the resize handle borders.
    pub color: Color,
    pub background_color: Color,
    pub time_label: LabelStyle,
    pub symbol_label: LabelStyle,
}

impl Default for EventAppearance {
    fn default() -> Self {
        EventAppearance {
            font: Font::bold_system(12.),
            text_color: Color::BLACK,
            color: Color::TINT,
            background_color: Color::TINT.with_alpha(0.3),
            time_label: LabelStyle {
                font: Font::system(11.),
                color: Color::BLACK,
            },
            symbol_label: LabelStyle {
                font: Font::system(11.),
                color: Color::BLACK,
            },
        }
    }
}

/// Style of the all-day band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllDayEventViewStyle {
    pub background_color: Color,
    pub event_font: Font,
    pub event_color: Color,
}

impl Default for AllDayEventViewStyle {
    fn default() -> Self {
        AllDayEventViewStyle {
            background_color: Color::WHITE,
            event_font: Font::system(12.),
            event_color: Color::BLACK,
        }
    }
}

/// Presentation of one all-day row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPresentation {
    pub event: EventId,
    pub text: String,
    pub font: Font,
    pub text_color: Color,
}

/// Applies the band style to every row.
///
/// The result has one entry per row, in row order; the band’s geometry is left alone.
pub fn apply_style(
    style: &AllDayEventViewStyle,
    band: &AllDayBand<dyn EventDescriptor>,
) -> Vec<RowPresentation> {
    band.rows()
        .iter()
        .map(|row| RowPresentation {
            event: row.descriptor.id(),
            text: row.descriptor.text().to_string(),
            font: style.event_font.clone(),
            text_color: style.event_color,
        })
        .collect()
}

/// Shadow parameters the way design tools describe them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchShadow {
    pub color: Color,
    pub alpha: f64,
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
}

impl Default for SketchShadow {
    fn default() -> Self {
        SketchShadow {
            color: Color::BLACK,
            alpha: 0.5,
            x: 0.,
            y: 2.,
            blur: 4.,
            spread: 0.,
        }
    }
}

impl SketchShadow {
    /// The shadow used for events that are being edited.
    pub fn editing() -> SketchShadow {
        SketchShadow {
            alpha: 0.13,
            blur: 10.,
            ..SketchShadow::default()
        }
    }

    /// Converts to layer shadow properties for a layer with the given bounds.
    pub fn to_layer_shadow(&self, bounds: Rect) -> LayerShadow {
        LayerShadow {
            color: self.color,
            opacity: self.alpha,
            offset: (self.x, self.y),
            radius: self.blur / 2.,
            path: if self.spread == 0. {
                None
            } else {
                Some(bounds.inset(-self.spread, -self.spread))
            },
        }
    }
}

/// Shadow properties of a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerShadow {
    pub color: Color,
    pub opacity: f64,
    pub offset: (f64, f64),
    pub radius: f64,
    /// Explicit shadow shape; `None` to follow the layer contents.
    pub path: Option<Rect>,
}
