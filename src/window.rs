//! Clipping and encoding of addressing windows.
//!
//! Everything here is pure arithmetic; the driver turns the results into
//! CASET / RASET / RAMWR traffic.

use crate::{Error, PanelGeometry};

/// One axis of an addressing window in device coordinates, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AddressRange {
    pub start: u16,
    pub end: u16,
}

impl AddressRange {
    /// Clip a logical `start..end` range against `bound` and shift it by the
    /// axis origin.
    ///
    /// A range with `start > end` or `end > bound` is rejected. `start == end`
    /// is accepted. Adding the origin wraps at 16 bits like the controller's
    /// address counters.
    pub fn clip(start: u16, end: u16, bound: u16, origin: u16) -> Result<Self, Error> {
        if start > end || end > bound {
            return Err(Error::OutOfBounds);
        }
        Ok(Self {
            start: start.wrapping_add(origin),
            end: end.wrapping_add(origin),
        })
    }

    /// Parameter bytes of the CASET/RASET command: start then `end - 1`,
    /// both big-endian. `end - 1` wraps like the 16-bit subtraction the
    /// controller expects, so `end == 0` encodes as `0xFFFF`.
    pub fn to_bytes(self) -> [u8; 4] {
        let [start_hi, start_lo] = self.start.to_be_bytes();
        let [end_hi, end_lo] = self.end.wrapping_sub(1).to_be_bytes();
        [start_hi, start_lo, end_hi, end_lo]
    }
}

/// Rectangle to write after `fill_rect` clipping: window corners handed to
/// `set_window` and the number of pixels to stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClippedRect {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
    pub pixels: u32,
}

/// Clip a `fill_rect` request against the panel.
///
/// Only an origin at or beyond the right/bottom edge is rejected; width and
/// height are cut back so the rectangle ends on the panel edge. Negative
/// origins are not rejected here, the range setters refuse them later.
pub(crate) fn clip_rect(
    geometry: &PanelGeometry,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) -> Result<ClippedRect, Error> {
    let width = i32::from(geometry.width);
    let height = i32::from(geometry.height);
    if x >= width || y >= height {
        return Err(Error::OutOfBounds);
    }
    let w = if x.saturating_add(w) > width {
        width.saturating_sub(x)
    } else {
        w
    };
    let h = if y.saturating_add(h) > height {
        height.saturating_sub(y)
    } else {
        h
    };
    Ok(ClippedRect {
        x0: x as u16,
        y0: y as u16,
        x1: x.saturating_add(w) as u16,
        y1: y.saturating_add(h) as u16,
        pixels: (w.max(0) as u32).saturating_mul(h.max(0) as u32),
    })
}

/// Bounds check of a single pixel; unlike [`clip_rect`] negative coordinates
/// are rejected too.
pub(crate) fn check_pixel(geometry: &PanelGeometry, x: i32, y: i32) -> Result<(u16, u16), Error> {
    if x < 0 || x >= i32::from(geometry.width) || y < 0 || y >= i32::from(geometry.height) {
        return Err(Error::OutOfBounds);
    }
    Ok((x as u16, y as u16))
}
