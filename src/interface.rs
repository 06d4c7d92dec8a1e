//! Capabilities the driver consumes: a byte-level transport and an optional
//! bulk (DMA) channel.
//!
//! Both traits describe *blocking* hardware: every method returns only once
//! the requested condition holds. There are no timeouts; a peripheral that
//! never reaches the expected state (clock gated off, bus fault, ...) stalls
//! the caller indefinitely.
//!
//! [`SpiInterface`] implements [`ByteTransport`] on top of the
//! `embedded-hal` 1.0 SPI and GPIO traits for boards where the panel hangs
//! off a regular HAL SPI bus.

#[cfg(not(feature = "esp-dma"))]
use embedded_dma::ReadBuffer;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
#[cfg(feature = "esp-dma")]
use esp_hal::dma::ReadBuffer;

/// Byte-level transport to the panel: SPI data register plus the chip-select,
/// data/command and reset lines.
pub trait ByteTransport {
    /// Transmit one byte and block until it has physically left the
    /// transport (transmit-empty set, busy clear).
    ///
    /// The data/command line is left as it is.
    fn send_data(&mut self, byte: u8);

    /// Assert chip-select (active low on the wire).
    fn select(&mut self);

    /// Release chip-select.
    fn deselect(&mut self);

    /// Drive the data/command strobe to "command".
    fn command_mode(&mut self);

    /// Drive the data/command strobe to "data".
    fn data_mode(&mut self);

    /// Drive the reset line; `true` holds the controller in reset.
    fn set_reset(&mut self, asserted: bool);

    /// Block until the transport is idle: transmit buffer empty and not busy.
    fn flush(&mut self);

    /// Address of the transport's data register, used as the destination
    /// of bulk transfers.
    fn data_register(&self) -> *mut u8;

    /// Transmit one byte as a command, leaving the strobe in data mode.
    fn send_command(&mut self, command: u8) {
        self.command_mode();
        self.send_data(command);
        self.data_mode();
    }

    /// Toggle the reset line back to back.
    ///
    /// No pulse width is enforced here; use
    /// [`St7789::hard_reset`](crate::St7789::hard_reset) when a timed pulse
    /// is required.
    fn pulse_reset(&mut self) {
        self.set_reset(true);
        self.set_reset(false);
    }
}

/// Peripheral-driven channel that streams bytes from memory into the
/// transport's data register without CPU involvement once enabled.
pub trait BulkChannel {
    /// Program source address, destination address and byte count.
    ///
    /// # Safety
    ///
    /// The channel reads `len` bytes from `source` after [`enable`] returns,
    /// concurrently with the CPU. The caller must keep that memory alive and
    /// unmodified until [`remaining`] reports zero.
    ///
    /// [`enable`]: BulkChannel::enable
    /// [`remaining`]: BulkChannel::remaining
    unsafe fn configure(&mut self, source: *const u8, destination: *mut u8, len: usize);

    /// Start the transfer.
    fn enable(&mut self);

    /// Stop the channel.
    fn disable(&mut self);

    /// Bytes still to be transferred; zero once the transfer completed.
    fn remaining(&self) -> usize;

    /// Acknowledge the channel's transfer-complete flag.
    fn clear_complete_flag(&mut self);
}

/// Buffer the bulk channel can read bytes from.
///
/// Blanket-implemented for every byte-sized [`embedded_dma::ReadBuffer`], or
/// for every `esp_hal::dma::ReadBuffer` with the `esp-dma` feature.
#[cfg(not(feature = "esp-dma"))]
pub trait PixelSource: ReadBuffer<Word = u8> {}

#[cfg(not(feature = "esp-dma"))]
impl<T: ReadBuffer<Word = u8>> PixelSource for T {}

/// Buffer the bulk channel can read bytes from.
///
/// Blanket-implemented for every byte-sized `embedded_dma::ReadBuffer`, or
/// for every [`esp_hal::dma::ReadBuffer`] with the `esp-dma` feature.
#[cfg(feature = "esp-dma")]
pub trait PixelSource: ReadBuffer {}

#[cfg(feature = "esp-dma")]
impl<T: ReadBuffer> PixelSource for T {}

/// [`ByteTransport`] over an `embedded-hal` SPI bus and three output pins.
///
/// Chip-select is driven manually so it can stay asserted across the
/// command/data boundary of a pixel write. Bus and pin errors are dropped:
/// the transport contract has no failure path.
pub struct SpiInterface<SPI, DC, CS, RST> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    data_register: *mut u8,
}

impl<SPI, DC, CS, RST> SpiInterface<SPI, DC, CS, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    /// Wrap an SPI bus with its D/C, CS and reset pins.
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        Self {
            spi,
            dc,
            cs,
            rst,
            data_register: core::ptr::null_mut(),
        }
    }

    /// Record the SPI peripheral's data register address so a
    /// [`BulkChannel`] can target it.
    #[must_use]
    pub fn with_data_register(mut self, data_register: *mut u8) -> Self {
        self.data_register = data_register;
        self
    }

    /// Give the bus and pins back.
    pub fn release(self) -> (SPI, DC, CS, RST) {
        (self.spi, self.dc, self.cs, self.rst)
    }
}

impl<SPI, DC, CS, RST> ByteTransport for SpiInterface<SPI, DC, CS, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    fn send_data(&mut self, byte: u8) {
        let _ = self.spi.write(&[byte]);
        let _ = self.spi.flush();
    }

    fn select(&mut self) {
        let _ = self.cs.set_low();
    }

    fn deselect(&mut self) {
        let _ = self.cs.set_high();
    }

    fn command_mode(&mut self) {
        let _ = self.dc.set_low();
    }

    fn data_mode(&mut self) {
        let _ = self.dc.set_high();
    }

    fn set_reset(&mut self, asserted: bool) {
        // reset is active low
        let _ = if asserted {
            self.rst.set_low()
        } else {
            self.rst.set_high()
        };
    }

    fn flush(&mut self) {
        let _ = self.spi.flush();
    }

    fn data_register(&self) -> *mut u8 {
        self.data_register
    }
}

/// Placeholder channel for drivers built without a bulk channel.
///
/// Reports every transfer as already complete and never touches memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoChannel;

impl BulkChannel for NoChannel {
    unsafe fn configure(&mut self, _source: *const u8, _destination: *mut u8, _len: usize) {}

    fn enable(&mut self) {}

    fn disable(&mut self) {}

    fn remaining(&self) -> usize {
        0
    }

    fn clear_complete_flag(&mut self) {}
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::RefCell;
    use core::convert::Infallible;
    use std::rc::Rc;
    use std::vec;
    use std::vec::Vec;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Write(u8),
        Flush,
        Pin(&'static str, bool),
    }

    type Ops = Rc<RefCell<Vec<Op>>>;

    struct Bus(Ops);

    impl embedded_hal::spi::ErrorType for Bus {
        type Error = Infallible;
    }

    impl SpiBus<u8> for Bus {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            self.0.borrow_mut().extend(words.iter().map(|b| Op::Write(*b)));
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            self.write(write)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Op::Flush);
            Ok(())
        }
    }

    struct Pin(&'static str, Ops);

    impl embedded_hal::digital::ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.1.borrow_mut().push(Op::Pin(self.0, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.1.borrow_mut().push(Op::Pin(self.0, true));
            Ok(())
        }
    }

    fn interface(ops: &Ops) -> SpiInterface<Bus, Pin, Pin, Pin> {
        SpiInterface::new(
            Bus(ops.clone()),
            Pin("dc", ops.clone()),
            Pin("cs", ops.clone()),
            Pin("rst", ops.clone()),
        )
    }

    #[test]
    fn test_send_data_blocks_until_flushed() {
        let ops = Ops::default();
        let mut iface = interface(&ops);

        iface.send_data(0xA5);

        assert_eq!(*ops.borrow(), vec![Op::Write(0xA5), Op::Flush]);
    }

    #[test]
    fn test_send_command_toggles_dc() {
        let ops = Ops::default();
        let mut iface = interface(&ops);

        iface.send_command(0x2C);

        assert_eq!(
            *ops.borrow(),
            vec![
                Op::Pin("dc", false),
                Op::Write(0x2C),
                Op::Flush,
                Op::Pin("dc", true),
            ]
        );
    }

    #[test]
    fn test_chip_select_is_active_low() {
        let ops = Ops::default();
        let mut iface = interface(&ops);

        iface.select();
        iface.deselect();

        assert_eq!(
            *ops.borrow(),
            vec![Op::Pin("cs", false), Op::Pin("cs", true)]
        );
    }

    #[test]
    fn test_pulse_reset() {
        let ops = Ops::default();
        let mut iface = interface(&ops);

        iface.pulse_reset();

        assert_eq!(
            *ops.borrow(),
            vec![Op::Pin("rst", false), Op::Pin("rst", true)]
        );
    }

    #[test]
    fn test_data_register() {
        let ops = Ops::default();
        let mut register = 0u8;
        let iface = interface(&ops);
        assert!(iface.data_register().is_null());

        let iface = iface.with_data_register(&mut register as *mut u8);
        assert_eq!(iface.data_register(), &mut register as *mut u8);
    }

    #[test]
    fn test_no_channel_is_always_complete() {
        let mut channel = NoChannel;
        channel.enable();
        assert_eq!(channel.remaining(), 0);
        channel.disable();
        channel.clear_complete_flag();
    }
}
