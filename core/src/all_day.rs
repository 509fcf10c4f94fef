//! All-day band layout.
//!
//! The band stacks one fixed-height row per all-day event, in the order the caller supplied them.
//! Its visible height is capped; rows past the cap stay in the layout so the band can scroll.

use crate::error::{require_non_negative, require_positive, LayoutResult};
use crate::rect::Rect;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Horizontal insets applied to each row inside the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowInsets {
    pub left: f64,
    pub right: f64,
}

impl Default for RowInsets {
    fn default() -> Self {
        RowInsets {
            left: 10.,
            right: 10.,
        }
    }
}

impl RowInsets {
    pub fn validate(&self) -> LayoutResult<()> {
        require_non_negative("left inset", self.left)?;
        require_non_negative("right inset", self.right)?;
        Ok(())
    }
}

/// One event’s slot in the band.
pub struct BandRow<D: ?Sized> {
    /// The event shown in this row.
    pub descriptor: Arc<D>,
    /// Offset of the row’s top edge from the top of the band content.
    pub offset: f64,
    pub height: f64,
}

// manual impls so that D doesn’t need to be Clone/Debug itself
impl<D: ?Sized> Clone for BandRow<D> {
    fn clone(&self) -> Self {
        BandRow {
            descriptor: Arc::clone(&self.descriptor),
            offset: self.offset,
            height: self.height,
        }
    }
}

impl<D: ?Sized> fmt::Debug for BandRow<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BandRow")
            .field("descriptor", &Arc::as_ptr(&self.descriptor))
            .field("offset", &self.offset)
            .field("height", &self.height)
            .finish()
    }
}

/// Rows compare by descriptor identity, not by value.
impl<D: ?Sized> PartialEq for BandRow<D> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.descriptor, &other.descriptor)
            && self.offset == other.offset
            && self.height == other.height
    }
}

/// The laid-out all-day band.
pub struct AllDayBand<D: ?Sized> {
    rows: Vec<BandRow<D>>,
    row_height: f64,
    max_band_height: f64,
}

impl<D: ?Sized> Clone for AllDayBand<D> {
    fn clone(&self) -> Self {
        AllDayBand {
            rows: self.rows.clone(),
            row_height: self.row_height,
            max_band_height: self.max_band_height,
        }
    }
}

impl<D: ?Sized> fmt::Debug for AllDayBand<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AllDayBand")
            .field("rows", &self.rows)
            .field("row_height", &self.row_height)
            .field("max_band_height", &self.max_band_height)
            .finish()
    }
}

impl<D: ?Sized> PartialEq for AllDayBand<D> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.row_height == other.row_height
            && self.max_band_height == other.max_band_height
    }
}

/// Lays out the all-day band.
///
/// Produces one row per descriptor in input order. Fails if `row_height` or `max_band_height`
/// is not a positive finite number.
pub fn layout<D: ?Sized>(
    descriptors: &[Arc<D>],
    row_height: f64,
    max_band_height: f64,
) -> LayoutResult<AllDayBand<D>> {
    require_positive("row height", row_height)?;
    require_positive("max band height", max_band_height)?;

    let rows = descriptors
        .iter()
        .enumerate()
        .map(|(i, descriptor)| BandRow {
            descriptor: Arc::clone(descriptor),
            offset: i as f64 * row_height,
            height: row_height,
        })
        .collect();

    let band = AllDayBand {
        rows,
        row_height,
        max_band_height,
    };
    debug!(
        "laid out all-day band: {} rows, natural height {}, capped height {}",
        band.row_count(),
        band.natural_height(),
        band.capped_height()
    );
    Ok(band)
}

impl<D: ?Sized> AllDayBand<D> {
    pub fn rows(&self) -> &[BandRow<D>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn max_band_height(&self) -> f64 {
        self.max_band_height
    }

    /// Height of all rows stacked.
    pub fn natural_height(&self) -> f64 {
        self.row_height * self.rows.len() as f64
    }

    /// Height the renderer must reserve for the band.
    pub fn capped_height(&self) -> f64 {
        self.natural_height().min(self.max_band_height)
    }

    /// If true, the rows don’t fit and the band content must scroll.
    pub fn is_scrollable(&self) -> bool {
        self.natural_height() > self.capped_height()
    }

    /// How far the content can be scrolled.
    pub fn overflow(&self) -> f64 {
        self.natural_height() - self.capped_height()
    }

    /// Returns the frame of a row in band content coordinates, for a band of the given width.
    ///
    /// Returns `None` if the index is out of range. Fails on negative insets or width.
    pub fn row_frame(
        &self,
        index: usize,
        width: f64,
        insets: RowInsets,
    ) -> LayoutResult<Option<Rect>> {
        require_non_negative("band width", width)?;
        insets.validate()?;

        Ok(self.rows.get(index).map(|row| {
            let inner_width = (width - insets.left - insets.right).max(0.);
            Rect::from_xywh(insets.left, row.offset, inner_width, row.height)
        }))
    }

    /// Clamps a scroll offset to the scrollable range.
    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.;
        }
        offset.max(0.).min(self.overflow())
    }

    /// Returns the rows that are at least partially visible at the given scroll offset.
    ///
    /// The offset is clamped to the scrollable range first.
    pub fn visible_rows(&self, scroll_offset: f64) -> &[BandRow<D>] {
        let top = self.clamp_scroll_offset(scroll_offset);
        let bottom = top + self.capped_height();

        let first = self
            .rows
            .iter()
            .position(|row| row.offset + row.height > top)
            .unwrap_or_else(|| self.rows.len());
        let end = self.rows[first..]
            .iter()
            .position(|row| row.offset >= bottom)
            .map_or(self.rows.len(), |i| first + i);
        &self.rows[first..end]
    }
}
