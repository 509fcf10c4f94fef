//! The all-day event band view.

use crate::color::Color;
use crate::config::AllDayConfig;
use crate::descriptor::EventDescriptor;
use crate::style::{apply_style, AllDayEventViewStyle, RowPresentation};
use std::sync::Arc;
use timeline_core::error::require_non_negative;
use timeline_core::{all_day, AllDayBand, LayoutResult, Rect};
use tracing::debug;

/// Shows the all-day events of a period as a stack of rows.
///
/// The rows are rebuilt from the full event list whenever it changes; ordering is up to the
/// caller (usually chronological).
#[derive(Debug)]
pub struct AllDayEventView {
    config: AllDayConfig,
    events: Vec<Arc<dyn EventDescriptor>>,
    band: AllDayBand<dyn EventDescriptor>,
}

/// A laid-out row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// Row frame in band content coordinates.
    pub frame: Rect,
    pub presentation: RowPresentation,
}

/// Output of [`AllDayEventView::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct AllDayViewLayout {
    /// Height to reserve for the band.
    pub height: f64,
    /// Height of the scrollable content; larger than `height` if the band overflows.
    pub content_height: f64,
    /// If true, the content has to be scrollable (and clipped to `height`).
    pub scrollable: bool,
    pub background_color: Color,
    pub rows: Vec<RowLayout>,
}

impl AllDayEventView {
    pub fn new(config: AllDayConfig) -> LayoutResult<AllDayEventView> {
        config.validate()?;
        let no_events: &[Arc<dyn EventDescriptor>] = &[];
        let band = all_day::layout(no_events, config.row_height, config.max_band_height)?;
        Ok(AllDayEventView {
            config,
            events: Vec::new(),
            band,
        })
    }

    pub fn events(&self) -> &[Arc<dyn EventDescriptor>] {
        &self.events
    }

    /// Replaces the events and recomputes the band.
    pub fn set_events(&mut self, events: Vec<Arc<dyn EventDescriptor>>) -> LayoutResult<()> {
        let config = &self.config;
        self.band = all_day::layout(&events, config.row_height, config.max_band_height)?;
        self.events = events;
        Ok(())
    }

    pub fn band(&self) -> &AllDayBand<dyn EventDescriptor> {
        &self.band
    }

    pub fn style(&self) -> &AllDayEventViewStyle {
        &self.config.style
    }

    /// Swaps the style. Only affects presentation, never the band geometry.
    pub fn update_style(&mut self, style: AllDayEventViewStyle) {
        debug!("updating all-day band style");
        self.config.style = style;
    }

    /// Height the band needs.
    pub fn height(&self) -> f64 {
        self.band.capped_height()
    }

    /// Lays out the band for the given width.
    ///
    /// Fails on a negative or non-finite width, even while the band is empty.
    pub fn layout(&self, width: f64) -> LayoutResult<AllDayViewLayout> {
        require_non_negative("band width", width)?;
        let insets = self.config.row_insets();
        let presentations = apply_style(&self.config.style, &self.band);

        let mut rows = Vec::with_capacity(presentations.len());
        for (index, presentation) in presentations.into_iter().enumerate() {
            if let Some(frame) = self.band.row_frame(index, width, insets)? {
                rows.push(RowLayout {
                    frame,
                    presentation,
                });
            }
        }

        Ok(AllDayViewLayout {
            height: self.band.capped_height(),
            content_height: self.band.natural_height(),
            scrollable: self.band.is_scrollable(),
            background_color: self.config.style.background_color,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{DateInterval, Event};
    use crate::style::Font;
    use timeline_core::LayoutError;
    use chrono::{TimeZone, Utc};

    fn events(n: usize) -> Vec<Arc<dyn EventDescriptor>> {
        let start = Utc.with_ymd_and_hms(2021, 12, 10, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2021, 12, 11, 0, 0, 0).unwrap();
        let interval = DateInterval::new(start, end).unwrap();
        (0..n)
            .map(|i| {
                let event: Arc<dyn EventDescriptor> =
                    Arc::new(Event::all_day(format!("Event {}", i), interval));
                event
            })
            .collect()
    }

    #[test]
    fn empty_view_has_no_height() {
        let view = AllDayEventView::new(AllDayConfig::default()).unwrap();
        assert_eq!(view.height(), 0.);
        let layout = view.layout(320.).unwrap();
        assert!(layout.rows.is_empty());
        assert!(!layout.scrollable);
    }

    #[test]
    fn rows_stack_in_order() {
        let mut view = AllDayEventView::new(AllDayConfig::default()).unwrap();
        view.set_events(events(3)).unwrap();

        let layout = view.layout(320.).unwrap();
        assert_eq!(layout.height, 72.);
        assert_eq!(layout.content_height, 72.);
        let texts: Vec<&str> = layout
            .rows
            .iter()
            .map(|r| r.presentation.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Event 0", "Event 1", "Event 2"]);
        assert_eq!(layout.rows[2].frame, Rect::from_xywh(10., 48., 300., 24.));
    }

    #[test]
    fn overflowing_band_is_capped_and_scrollable() {
        let mut view = AllDayEventView::new(AllDayConfig::default()).unwrap();
        view.set_events(events(10)).unwrap();

        let layout = view.layout(320.).unwrap();
        assert_eq!(layout.height, 168.);
        assert_eq!(layout.content_height, 240.);
        assert!(layout.scrollable);
        assert_eq!(layout.rows.len(), 10);
    }

    #[test]
    fn replacing_events_recomputes_from_scratch() {
        let mut view = AllDayEventView::new(AllDayConfig::default()).unwrap();
        view.set_events(events(10)).unwrap();
        view.set_events(events(2)).unwrap();
        assert_eq!(view.band().row_count(), 2);
        assert_eq!(view.events().len(), 2);
        assert_eq!(view.height(), 48.);
    }

    #[test]
    fn restyling_keeps_geometry() {
        let mut view = AllDayEventView::new(AllDayConfig::default()).unwrap();
        view.set_events(events(4)).unwrap();
        let before = view.layout(320.).unwrap();

        view.update_style(AllDayEventViewStyle {
            background_color: Color::BLACK,
            event_font: Font::bold_system(16.),
            event_color: Color::WHITE,
        });
        let after = view.layout(320.).unwrap();

        assert_eq!(after.height, before.height);
        assert_eq!(after.rows.len(), before.rows.len());
        for (a, b) in after.rows.iter().zip(before.rows.iter()) {
            assert_eq!(a.frame, b.frame);
        }
        assert_eq!(after.background_color, Color::BLACK);
        assert_eq!(after.rows[0].presentation.font, Font::bold_system(16.));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AllDayConfig {
            max_band_height: 0.,
            ..AllDayConfig::default()
        };
        assert!(AllDayEventView::new(config).is_err());
    }

    #[test]
    fn negative_inset_fails_at_construction() {
        let config = AllDayConfig {
            inset_left: -5.,
            ..AllDayConfig::default()
        };
        match AllDayEventView::new(config) {
            Err(LayoutError::InvalidConfiguration { what, .. }) => assert_eq!(what, "left inset"),
            other => panic!("expected invalid config, got {:?}", other),
        }
    }

    #[test]
    fn bad_width_fails_with_or_without_rows() {
        let mut view = AllDayEventView::new(AllDayConfig::default()).unwrap();
        assert!(view.layout(-50.).is_err());
        assert!(view.layout(f64::NAN).is_err());

        view.set_events(events(1)).unwrap();
        assert!(view.layout(-50.).is_err());
        assert!(view.layout(320.).is_ok());
    }
}
