//! Window addressing, pixel transfer and bitmap text for ST7789 TFT panels.
//!
//! ## How the ST7789 is driven
//!
//! The ST7789 is a TFT controller with its own frame memory (GRAM). The host
//! never scans the panel; it writes pixels into GRAM over a 4-wire SPI bus:
//!
//! - **SCK / MOSI** – serial clock and data
//! - **CS** – chip-select, active LOW; frames every exchange
//! - **D/C** – data/command strobe; LOW marks the byte on the wire as a
//!   command opcode, HIGH as a parameter or pixel byte
//! - **RST** – hardware reset, active LOW
//!
//! ### Writing a rectangle
//! 1. `CASET` (2Ah) with four parameter bytes selects the column range,
//!    start and end, both big-endian and inclusive.
//! 2. `RASET` (2Bh) does the same for rows.
//! 3. `RAMWR` (2Ch) opens frame memory; every following data byte pair is one
//!    RGB565 pixel, high byte first. The controller walks the window left to
//!    right, top to bottom.
//!
//! A window of `w × h` pixels therefore costs 15 framing bytes followed by
//! `2 × w × h` pixel bytes. Clearing a 240 × 320 panel moves 153 600 bytes,
//! which is why bulk writes go through a DMA channel while the CPU does
//! something else.
//!
//! ## Crate layout
//!
//! - [`St7789`] – the driver: init sequence, mode toggles, the addressing
//!   engine ([`St7789::set_window`]) and the synchronous pixel engine
//!   ([`St7789::fill_rect`], [`St7789::draw_pixel`])
//! - [`BulkTransfer`] – handle of an in-flight DMA transfer started with
//!   [`St7789::begin_bulk_transfer`] or [`St7789::arm_and_stream`]
//! - [`framebuffer::DmaFrameBuffer`] – fixed-capacity RGB565 byte buffer that
//!   a [`BulkChannel`] can read from
//! - [`font`] – row-encoded bitmap fonts and the character → glyph mapping
//!   used by [`St7789::draw_char`] / [`St7789::draw_string`]
//! - [`interface`] – the [`ByteTransport`] and [`BulkChannel`] capabilities
//!   and an `embedded-hal` based [`SpiInterface`]
//!
//! Geometry is never validated loudly: a rectangle or pixel outside the panel
//! sends nothing to the controller. The methods report it as
//! [`Error::OutOfBounds`] so callers can observe the rejection, and ignoring
//! the result is always safe.
//!
//! ## Example
//! ```rust
//! use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
//! use st7789_framebuffer::framebuffer::DmaFrameBuffer;
//! use st7789_framebuffer::{compute_buffer_len, BulkChannel, ByteTransport, Config, St7789};
//!
//! # struct Spi;
//! # impl ByteTransport for Spi {
//! #     fn send_data(&mut self, _: u8) {}
//! #     fn select(&mut self) {}
//! #     fn deselect(&mut self) {}
//! #     fn command_mode(&mut self) {}
//! #     fn data_mode(&mut self) {}
//! #     fn set_reset(&mut self, _: bool) {}
//! #     fn flush(&mut self) {}
//! #     fn data_register(&self) -> *mut u8 { core::ptr::null_mut() }
//! # }
//! # struct Dma;
//! # impl BulkChannel for Dma {
//! #     unsafe fn configure(&mut self, _: *const u8, _: *mut u8, _: usize) {}
//! #     fn enable(&mut self) {}
//! #     fn disable(&mut self) {}
//! #     fn remaining(&self) -> usize { 0 }
//! #     fn clear_complete_flag(&mut self) {}
//! # }
//! const COLS: usize = 120;
//! const ROWS: usize = 160;
//! const BYTES: usize = compute_buffer_len(COLS, ROWS);
//!
//! let mut display = St7789::new(Spi, Dma, Config::default());
//! let mut buffer = DmaFrameBuffer::<COLS, ROWS, BYTES>::new();
//!
//! // Small areas go through the CPU...
//! let _ = display.fill_rect(10, 10, 20, 20, Rgb565::RED);
//!
//! // ...large ones through the bulk channel.
//! buffer.fill(Rgb565::BLUE);
//! let transfer = display.arm_and_stream(&mut buffer, 0, 0, COLS as u16, ROWS as u16);
//! let _buffer = transfer.wait();
//! ```
//!
//! ## Available Feature Flags
//!
//! ### `esp-dma` Feature
//! Switches the [`PixelSource`] bound (and the [`framebuffer::DmaFrameBuffer`]
//! implementation) from `embedded-dma`'s `ReadBuffer` to
//! `esp_hal::dma::ReadBuffer`, so frame buffers can be handed straight to
//! `esp-hal` DMA transfers. Enabled by the `esp32`, `esp32s3` and `esp32c6`
//! chip features.
//!
//! ```toml
//! [dependencies]
//! st7789-framebuffer = { version = "0.1.0", features = ["esp32s3"] }
//! ```
//!
//! ### `defmt` Feature
//! Implements `defmt::Format` for the public types and emits `defmt` trace
//! and debug messages for rejected geometry and bulk transfer state changes.
#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::RgbColor;

mod fmt;

pub mod command;
mod driver;
pub mod font;
pub mod framebuffer;
pub mod interface;
mod text;
mod window;

#[cfg(test)]
mod mock;

pub use command::{Instruction, MemoryAccessControl, PixelFormat};
pub use driver::{BulkTransfer, St7789, TransferState};
pub use font::Font;
pub use interface::{BulkChannel, ByteTransport, NoChannel, PixelSource, SpiInterface};

/// Color type used by the driver and the frame buffer
pub type Color = Rgb565;

/// Computes the byte capacity of a frame buffer covering `cols × rows` pixels
///
/// # Arguments
///
/// * `cols` - Width of the region in pixels
/// * `rows` - Height of the region in pixels
///
/// # Returns
///
/// Number of bytes needed: two per RGB565 pixel
#[must_use]
pub const fn compute_buffer_len(cols: usize, rows: usize) -> usize {
    cols * rows * 2
}

/// Encodes a color the way the controller expects it on the wire: RGB565,
/// high byte first.
#[must_use]
pub fn color_bytes(color: Color) -> [u8; 2] {
    RawU16::from(color).into_inner().to_be_bytes()
}

/// Panel size and the offset of the visible area inside the controller's
/// frame memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelGeometry {
    /// Visible columns
    pub width: u16,
    /// Visible rows
    pub height: u16,
    /// Column of GRAM shown at the panel's left edge
    pub x_origin: u16,
    /// Row of GRAM shown at the panel's top edge
    pub y_origin: u16,
}

impl PanelGeometry {
    /// 240 × 320 panel mapped at the origin of frame memory.
    pub const ST7789_240X320: Self = Self::new(240, 320, 0, 0);

    /// Describe a panel.
    #[must_use]
    pub const fn new(width: u16, height: u16, x_origin: u16, y_origin: u16) -> Self {
        Self {
            width,
            height,
            x_origin,
            y_origin,
        }
    }

    /// Number of pixels on the panel.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::ST7789_240X320
    }
}

/// Settings applied by [`St7789::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Panel size and GRAM offset
    pub geometry: PanelGeometry,
    /// MADCTL parameter, passed through verbatim
    pub rotation: MemoryAccessControl,
    /// COLMOD parameter
    pub pixel_format: PixelFormat,
    /// Enable display inversion (most IPS modules need it)
    pub inverted: bool,
    /// Color the whole panel is filled with at the end of init
    pub clear_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geometry: PanelGeometry::ST7789_240X320,
            rotation: MemoryAccessControl::RGB,
            pixel_format: PixelFormat::rgb565(),
            inverted: true,
            clear_color: Color::WHITE,
        }
    }
}

/// Reasons a drawing call sent nothing to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The requested range, rectangle or pixel lies outside the panel.
    OutOfBounds,
    /// The character code has no glyph in the font.
    UnknownGlyph,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OutOfBounds => f.write_str("outside of the panel bounds"),
            Error::UnknownGlyph => f.write_str("no glyph for character code"),
        }
    }
}
