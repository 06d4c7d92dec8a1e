//! The ST7789 driver: init sequence, addressing engine and pixel transfer
//! engine.
//!
//! # Transfers
//! Pixels reach the panel in one of two ways:
//!
//! - **Synchronous**: [`St7789::write_pixels`] (and everything built on it,
//!   [`St7789::fill_rect`], [`St7789::draw_pixel`], the glyph rasterizer)
//!   pushes every byte through [`ByteTransport::send_data`] and returns only
//!   after the last byte left the bus. Cost grows linearly with the pixel
//!   count, fine for small areas.
//! - **Bulk**: [`St7789::begin_bulk_transfer`] arms a [`BulkChannel`] with a
//!   pre-filled buffer and returns a [`BulkTransfer`] immediately. The
//!   channel streams the buffer while the CPU carries on; completion is
//!   observed with [`BulkTransfer::is_done`] or [`BulkTransfer::wait`].
//!
//! Only one transfer is ever in flight. The [`BulkTransfer`] handle borrows
//! the driver mutably and owns the buffer, so neither a second transfer nor
//! a write to the buffer compiles while the channel may still be reading it.
//! Leaking the handle with [`core::mem::forget`] defeats this: the buffer is
//! handed back to the borrow checker while the channel still streams from
//! it, and the next transfer races the running one.

use core::convert::Infallible;
use core::mem::ManuallyDrop;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::prelude::{Dimensions, OriginDimensions, Point, Size};
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;
use embedded_hal::delay::DelayNs;

use crate::command::{Instruction, MemoryAccessControl, PixelFormat};
use crate::fmt::{debug, trace, warning};
use crate::interface::{BulkChannel, ByteTransport, NoChannel, PixelSource};
use crate::window::{check_pixel, clip_rect, AddressRange};
use crate::{color_bytes, Color, Config, Error, PanelGeometry};

/// Controller needs 120 ms after a reset before it accepts SLPOUT.
const RESET_SETTLE_MS: u32 = 150;
const SLEEP_OUT_MS: u32 = 10;
const RESET_PULSE_US: u32 = 10;

/// State of the bulk transfer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferState {
    /// No bulk transfer armed.
    Idle,
    /// The bulk channel was enabled and completion has not been observed.
    Armed,
}

/// ST7789 driver over a [`ByteTransport`] and an optional [`BulkChannel`].
///
/// Not reentrant: every operation takes `&mut self` and scopes its own
/// chip-select assertion.
pub struct St7789<T, C = NoChannel> {
    transport: T,
    channel: C,
    config: Config,
    state: TransferState,
}

impl<T: ByteTransport> St7789<T, NoChannel> {
    /// Driver without a bulk channel; bulk transfers complete immediately
    /// without moving any data.
    pub fn without_channel(transport: T, config: Config) -> Self {
        Self::new(transport, NoChannel, config)
    }
}

impl<T, C> St7789<T, C>
where
    T: ByteTransport,
    C: BulkChannel,
{
    /// Create the driver. Nothing is sent until [`St7789::init`] or a drawing
    /// call.
    pub fn new(transport: T, channel: C, config: Config) -> Self {
        Self {
            transport,
            channel,
            config,
            state: TransferState::Idle,
        }
    }

    /// Give the transport and channel back.
    pub fn release(self) -> (T, C) {
        (self.transport, self.channel)
    }

    /// Panel geometry all addressing is clipped against.
    #[must_use]
    pub fn geometry(&self) -> PanelGeometry {
        self.config.geometry
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// State of the bulk transfer engine.
    #[must_use]
    pub fn transfer_state(&self) -> TransferState {
        self.state
    }

    /// Bring the panel up: hardware and software reset, leave sleep, program
    /// pixel format and rotation, address the full panel, switch the display
    /// on and clear it to [`Config::clear_color`].
    pub fn init(&mut self, delay: &mut impl DelayNs) {
        debug!("st7789 init");
        self.hard_reset(delay);

        self.software_reset();
        delay.delay_ms(RESET_SETTLE_MS);

        self.sleep_out();
        delay.delay_ms(SLEEP_OUT_MS);

        self.set_pixel_format(self.config.pixel_format);
        self.set_rotation(self.config.rotation);

        // full panel, unclipped
        let geometry = self.config.geometry;
        let columns = AddressRange {
            start: geometry.x_origin,
            end: geometry.x_origin.wrapping_add(geometry.width),
        };
        let rows = AddressRange {
            start: geometry.y_origin,
            end: geometry.y_origin.wrapping_add(geometry.height),
        };
        self.write_command(Instruction::ColumnAddressSet, &columns.to_bytes());
        self.write_command(Instruction::RowAddressSet, &rows.to_bytes());

        self.normal_mode_on();
        if self.config.inverted {
            self.inversion_on();
        } else {
            self.inversion_off();
        }
        self.display_on();

        let _ = self.fill_rect(
            0,
            0,
            i32::from(geometry.width),
            i32::from(geometry.height),
            self.config.clear_color,
        );
    }

    /// Timed pulse on the reset line, then wait for the controller to come
    /// out of reset.
    pub fn hard_reset(&mut self, delay: &mut impl DelayNs) {
        self.transport.set_reset(true);
        delay.delay_us(RESET_PULSE_US);
        self.transport.set_reset(false);
        delay.delay_ms(RESET_SETTLE_MS);
    }

    /// Send a raw command byte. Chip-select is left as it is.
    pub fn send_command(&mut self, command: u8) {
        self.transport.send_command(command);
    }

    /// Send a raw data byte. Chip-select is left as it is.
    pub fn send_data(&mut self, data: u8) {
        self.transport.send_data(data);
    }

    fn write_command(&mut self, instruction: Instruction, params: &[u8]) {
        self.transport.select();
        self.transport.send_command(instruction.into());
        for param in params {
            self.transport.send_data(*param);
        }
        self.transport.deselect();
    }

    /// SWRESET. The controller needs 120 ms before the next command.
    pub fn software_reset(&mut self) {
        self.write_command(Instruction::SoftwareReset, &[]);
    }

    /// SLPIN
    pub fn sleep_in(&mut self) {
        self.write_command(Instruction::SleepIn, &[]);
    }

    /// SLPOUT
    pub fn sleep_out(&mut self) {
        self.write_command(Instruction::SleepOut, &[]);
    }

    /// NORON, leaves partial mode.
    pub fn normal_mode_on(&mut self) {
        self.write_command(Instruction::NormalDisplayOn, &[]);
    }

    /// INVON
    pub fn inversion_on(&mut self) {
        self.write_command(Instruction::InversionOn, &[]);
    }

    /// INVOFF
    pub fn inversion_off(&mut self) {
        self.write_command(Instruction::InversionOff, &[]);
    }

    /// DISPON
    pub fn display_on(&mut self) {
        self.write_command(Instruction::DisplayOn, &[]);
    }

    /// DISPOFF
    pub fn display_off(&mut self) {
        self.write_command(Instruction::DisplayOff, &[]);
    }

    /// COLMOD. The pixel engine always produces RGB565.
    pub fn set_pixel_format(&mut self, format: PixelFormat) {
        self.write_command(Instruction::PixelFormat, &[format.bits()]);
    }

    /// MADCTL, the byte is passed through untouched. Geometry is not
    /// swapped for rotated orientations.
    pub fn set_rotation(&mut self, rotation: MemoryAccessControl) {
        self.write_command(Instruction::MemoryAccessControl, &[rotation.bits()]);
    }

    /// Select columns `start..end` (CASET).
    ///
    /// Rejected without sending anything when `start > end` or
    /// `end > width`. Otherwise the origin is added and the controller
    /// receives `start` and `end - 1`. Chip-select is not touched; the
    /// caller scopes it as [`St7789::set_window`] does.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] when the range was rejected.
    pub fn set_column_range(&mut self, start: u16, end: u16) -> Result<(), Error> {
        let geometry = self.config.geometry;
        let range = AddressRange::clip(start, end, geometry.width, geometry.x_origin)
            .inspect_err(|_| trace!("column range {}..{} rejected", start, end))?;
        self.send_range(Instruction::ColumnAddressSet, range);
        Ok(())
    }

    /// Select rows `start..end` (RASET). Same rules as
    /// [`St7789::set_column_range`] against the panel height.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] when the range was rejected.
    pub fn set_row_range(&mut self, start: u16, end: u16) -> Result<(), Error> {
        let geometry = self.config.geometry;
        let range = AddressRange::clip(start, end, geometry.height, geometry.y_origin)
            .inspect_err(|_| trace!("row range {}..{} rejected", start, end))?;
        self.send_range(Instruction::RowAddressSet, range);
        Ok(())
    }

    fn send_range(&mut self, instruction: Instruction, range: AddressRange) {
        self.transport.send_command(instruction.into());
        for byte in range.to_bytes() {
            self.transport.send_data(byte);
        }
    }

    /// Address the window `x0..x1` × `y0..y1` and open frame memory for
    /// writing.
    ///
    /// A rejected axis keeps whatever range the controller had before; the
    /// memory-write command is sent regardless. Pixel data must follow,
    /// either through [`St7789::write_pixels`] or a bulk transfer.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        self.transport.select();
        let _ = self.set_column_range(x0, x1);
        let _ = self.set_row_range(y0, y1);
        self.transport.send_command(Instruction::MemoryWrite.into());
        self.transport.deselect();
    }

    /// Stream `count` copies of `color` into the current window, blocking on
    /// every byte.
    pub fn write_pixels(&mut self, color: Color, count: u32) {
        let [hi, lo] = color_bytes(color);
        self.transport.select();
        for _ in 0..count {
            self.transport.send_data(hi);
            self.transport.send_data(lo);
        }
        self.transport.deselect();
    }

    /// Fill a `w × h` rectangle at `(x, y)` with one color.
    ///
    /// The rectangle is cut back to the panel edge. Nothing is sent when the
    /// origin lies at or beyond the right or bottom edge.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] when nothing was sent.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> Result<(), Error> {
        let rect = clip_rect(&self.config.geometry, x, y, w, h)
            .inspect_err(|_| trace!("fill_rect at ({}, {}) rejected", x, y))?;
        self.set_window(rect.x0, rect.y0, rect.x1, rect.y1);
        self.write_pixels(color, rect.pixels);
        Ok(())
    }

    /// Set a single pixel. Negative coordinates are rejected as well.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] when nothing was sent.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), Error> {
        let (x, y) = check_pixel(&self.config.geometry, x, y)?;
        self.set_window(x, y, x, y);
        self.write_pixels(color, 1);
        Ok(())
    }

    /// Arm the bulk channel with `buffer` and start streaming it into the
    /// window opened by the last [`St7789::set_window`].
    ///
    /// Returns as soon as the channel is enabled. The buffer is held by the
    /// returned [`BulkTransfer`] until completion is observed.
    pub fn begin_bulk_transfer<B: PixelSource>(&mut self, buffer: B) -> BulkTransfer<'_, T, C, B> {
        if self.state == TransferState::Armed {
            warning!("bulk transfer armed while a previous one was never completed");
        }
        // SAFETY: the buffer moves into the returned handle, which only gives
        // it back (or drops it) after the channel reported completion.
        let (source, len) = unsafe { buffer.read_buffer() };
        unsafe {
            self.channel
                .configure(source, self.transport.data_register(), len);
        }
        self.transport.select();
        self.channel.enable();
        self.state = TransferState::Armed;
        debug!("bulk transfer armed, {} bytes", len);
        BulkTransfer {
            driver: self,
            buffer: ManuallyDrop::new(buffer),
        }
    }

    /// Address `x0..x1` × `y0..y1` and stream the whole of `buffer` into it
    /// over the bulk channel.
    ///
    /// The window's pixel count is expected to match the buffer; this is not
    /// checked. A shorter buffer leaves the rest of the window untouched, a
    /// longer one wraps around inside the window.
    pub fn arm_and_stream<B: PixelSource>(
        &mut self,
        buffer: B,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> BulkTransfer<'_, T, C, B> {
        self.set_window(x0, y0, x1, y1);
        self.begin_bulk_transfer(buffer)
    }

    /// Disable the bulk channel and acknowledge its completion flag, returning
    /// the engine to [`TransferState::Idle`].
    ///
    /// Part of [`BulkTransfer::wait`]; calling it directly only makes sense
    /// after completion was observed by other means.
    pub fn stop_bulk_transfer(&mut self) {
        self.channel.disable();
        self.channel.clear_complete_flag();
        self.state = TransferState::Idle;
    }

    fn bulk_transfer_done(&self) -> bool {
        self.channel.remaining() == 0
    }

    /// Blocks until the channel drained and the transport went idle.
    fn finish_bulk_transfer(&mut self) {
        while !self.bulk_transfer_done() {}
        self.transport.flush();
        self.transport.deselect();
        self.stop_bulk_transfer();
        debug!("bulk transfer complete");
    }
}

/// In-flight bulk transfer.
///
/// Holds the driver and the source buffer until completion is observed.
/// Dropping an unfinished transfer blocks until the channel is done; there
/// is no way to cancel a running transfer.
#[must_use = "dropping the transfer blocks until the channel finished"]
pub struct BulkTransfer<'d, T, C, B>
where
    T: ByteTransport,
    C: BulkChannel,
{
    driver: &'d mut St7789<T, C>,
    buffer: ManuallyDrop<B>,
}

impl<T, C, B> BulkTransfer<'_, T, C, B>
where
    T: ByteTransport,
    C: BulkChannel,
{
    /// Poll the channel once: `true` when no bytes remain.
    ///
    /// The transport may still be shifting out the last byte; call
    /// [`BulkTransfer::wait`] to release the bus.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.driver.bulk_transfer_done()
    }

    /// Block until the channel drained and the transport is idle, release
    /// chip-select, stop the channel and hand the buffer back.
    pub fn wait(mut self) -> B {
        self.driver.finish_bulk_transfer();
        // SAFETY: `self` is forgotten right after, so the buffer is taken
        // exactly once and `Drop` never sees it.
        let buffer = unsafe { ManuallyDrop::take(&mut self.buffer) };
        core::mem::forget(self);
        buffer
    }
}

impl<T, C, B> Drop for BulkTransfer<'_, T, C, B>
where
    T: ByteTransport,
    C: BulkChannel,
{
    fn drop(&mut self) {
        self.driver.finish_bulk_transfer();
        // SAFETY: the channel stopped reading; the buffer is dropped once.
        unsafe { ManuallyDrop::drop(&mut self.buffer) };
    }
}

impl<T, C> OriginDimensions for St7789<T, C> {
    fn size(&self) -> Size {
        Size::new(
            u32::from(self.config.geometry.width),
            u32::from(self.config.geometry.height),
        )
    }
}

impl<T, C> DrawTarget for St7789<T, C>
where
    T: ByteTransport,
    C: BulkChannel,
{
    type Color = Color;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let _ = self.draw_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable = area.intersection(&self.bounding_box());
        let Some(bottom_right) = drawable.bottom_right() else {
            return Ok(());
        };
        let top_left = drawable.top_left;
        self.set_window(
            top_left.x as u16,
            top_left.y as u16,
            (bottom_right.x + 1) as u16,
            (bottom_right.y + 1) as u16,
        );
        self.transport.select();
        for (_, color) in area
            .points()
            .zip(colors)
            .filter(|(point, _)| drawable.contains(*point))
        {
            let [hi, lo] = color_bytes(color);
            self.transport.send_data(hi);
            self.transport.send_data(lo);
        }
        self.transport.deselect();
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.size == Size::zero() {
            return Ok(());
        }
        let Point { x, y } = drawable.top_left;
        let _ = self.fill_rect(
            x,
            y,
            drawable.size.width as i32,
            drawable.size.height as i32,
            color,
        );
        Ok(())
    }
}
