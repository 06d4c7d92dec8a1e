//! RGB565 frame buffer for bulk transfers.
//!
//! [`DmaFrameBuffer`] holds pixels exactly as they go over the wire: two
//! bytes per pixel, high byte first, rows top to bottom. Handing it (or a
//! `&mut` to it) to [`crate::St7789::arm_and_stream`] streams it into a
//! window of the same size without any conversion.
//!
//! # Type Parameters
//! - `COLS`: Width of the region in pixels
//! - `ROWS`: Height of the region in pixels
//! - `BYTES`: Capacity in bytes, must equal
//!   [`compute_buffer_len(COLS, ROWS)`](crate::compute_buffer_len); a mismatch
//!   fails to compile
//!
//! # Example
//! ```rust
//! use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
//! use st7789_framebuffer::compute_buffer_len;
//! use st7789_framebuffer::framebuffer::DmaFrameBuffer;
//!
//! const COLS: usize = 32;
//! const ROWS: usize = 16;
//! const BYTES: usize = compute_buffer_len(COLS, ROWS);
//!
//! let mut buffer = DmaFrameBuffer::<COLS, ROWS, BYTES>::new();
//! buffer.fill(Rgb565::BLACK);
//! Rectangle::new(Point::new(2, 2), Size::new(8, 4))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut buffer)
//!     .unwrap();
//! assert_eq!(buffer.pixel(Point::new(2, 2)), Some(Rgb565::RED));
//! ```

use core::convert::Infallible;

#[cfg(not(feature = "esp-dma"))]
use embedded_dma::ReadBuffer;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::{OriginDimensions, Point, Size};
use embedded_graphics::Pixel;
#[cfg(feature = "esp-dma")]
use esp_hal::dma::ReadBuffer;

use crate::{color_bytes, compute_buffer_len, Color};

/// Fixed-capacity RGB565 byte buffer a bulk channel can read from.
///
/// Aligned to four bytes so DMA engines with word-sized bursts can read it.
#[derive(Copy, Clone)]
#[repr(C)]
#[repr(align(4))]
pub struct DmaFrameBuffer<const COLS: usize, const ROWS: usize, const BYTES: usize> {
    data: [u8; BYTES],
}

impl<const COLS: usize, const ROWS: usize, const BYTES: usize> Default
    for DmaFrameBuffer<COLS, ROWS, BYTES>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize, const BYTES: usize> DmaFrameBuffer<COLS, ROWS, BYTES> {
    const CAPACITY_MATCHES: () = assert!(
        BYTES == compute_buffer_len(COLS, ROWS),
        "BYTES must equal compute_buffer_len(COLS, ROWS)"
    );

    /// Create a zeroed (black) buffer.
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::CAPACITY_MATCHES;
        Self { data: [0; BYTES] }
    }

    /// Size of the buffer in bytes, for sizing `esp-hal` DMA descriptors.
    #[cfg(feature = "esp-dma")]
    #[must_use]
    pub const fn dma_buffer_size_bytes() -> usize {
        BYTES
    }

    /// Number of pixels the buffer holds.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        COLS * ROWS
    }

    /// Write `color` into every pixel, high byte first.
    pub fn fill(&mut self, color: Color) {
        let bytes = color_bytes(color);
        for pixel in self.data.chunks_exact_mut(2) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Set one pixel; points outside the buffer are ignored.
    pub fn set_pixel(&mut self, p: Point, color: Color) {
        if let Some(offset) = Self::offset(p) {
            self.data[offset..offset + 2].copy_from_slice(&color_bytes(color));
        }
    }

    /// Read one pixel back, `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, p: Point) -> Option<Color> {
        let offset = Self::offset(p)?;
        let raw = u16::from_be_bytes([self.data[offset], self.data[offset + 1]]);
        Some(RawU16::new(raw).into())
    }

    /// The wire image of the buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn offset(p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= COLS || y >= ROWS {
            return None;
        }
        Some((y * COLS + x) * 2)
    }
}

impl<const COLS: usize, const ROWS: usize, const BYTES: usize> OriginDimensions
    for DmaFrameBuffer<COLS, ROWS, BYTES>
{
    fn size(&self) -> Size {
        Size::new(COLS as u32, ROWS as u32)
    }
}

impl<const COLS: usize, const ROWS: usize, const BYTES: usize>
    embedded_graphics::draw_target::DrawTarget for DmaFrameBuffer<COLS, ROWS, BYTES>
{
    type Color = Color;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

unsafe impl<const COLS: usize, const ROWS: usize, const BYTES: usize> ReadBuffer
    for DmaFrameBuffer<COLS, ROWS, BYTES>
{
    #[cfg(not(feature = "esp-dma"))]
    type Word = u8;

    unsafe fn read_buffer(&self) -> (*const u8, usize) {
        (self.data.as_ptr(), BYTES)
    }
}

unsafe impl<const COLS: usize, const ROWS: usize, const BYTES: usize> ReadBuffer
    for &mut DmaFrameBuffer<COLS, ROWS, BYTES>
{
    #[cfg(not(feature = "esp-dma"))]
    type Word = u8;

    unsafe fn read_buffer(&self) -> (*const u8, usize) {
        (self.data.as_ptr(), BYTES)
    }
}

impl<const COLS: usize, const ROWS: usize, const BYTES: usize> core::fmt::Debug
    for DmaFrameBuffer<COLS, ROWS, BYTES>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DmaFrameBuffer")
            .field("cols", &COLS)
            .field("rows", &ROWS)
            .field("size", &BYTES)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<const COLS: usize, const ROWS: usize, const BYTES: usize> defmt::Format
    for DmaFrameBuffer<COLS, ROWS, BYTES>
{
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DmaFrameBuffer<{}, {}, {}>", COLS, ROWS, BYTES);
    }
}
