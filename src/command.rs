//! ST7789 command opcodes and the parameter bytes the driver builds.
//!
//! Only the subset of the controller's instruction set used by this crate is
//! listed. Parameter bytes with internal structure (MADCTL and COLMOD) are
//! modelled as bitfields so individual flags can be set without magic
//! numbers.

use bitfield::bitfield;

/// Command opcodes understood by the ST7789 controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Instruction {
    /// Software reset (01h)
    SoftwareReset = 0x01,
    /// Sleep in (10h)
    SleepIn = 0x10,
    /// Sleep out (11h)
    SleepOut = 0x11,
    /// Normal display mode on, i.e. partial mode off (13h)
    NormalDisplayOn = 0x13,
    /// Display inversion off (20h)
    InversionOff = 0x20,
    /// Display inversion on (21h)
    InversionOn = 0x21,
    /// Display off (28h)
    DisplayOff = 0x28,
    /// Display on (29h)
    DisplayOn = 0x29,
    /// Column address set (2Ah)
    ColumnAddressSet = 0x2A,
    /// Row address set (2Bh)
    RowAddressSet = 0x2B,
    /// Memory write (2Ch); every following data byte goes to frame memory
    MemoryWrite = 0x2C,
    /// Memory data access control (36h)
    MemoryAccessControl = 0x36,
    /// Interface pixel format (3Ah)
    PixelFormat = 0x3A,
}

impl From<Instruction> for u8 {
    fn from(instruction: Instruction) -> Self {
        instruction as u8
    }
}

bitfield! {
    /// Parameter byte of the MADCTL command.
    ///
    /// The byte is passed through to the controller untouched, so any raw
    /// value can be wrapped with `MemoryAccessControl::from(raw)`.
    ///
    /// Bit layout:
    /// - Bit 7: MY, page (row) address order
    /// - Bit 6: MX, column address order
    /// - Bit 5: MV, page/column exchange
    /// - Bit 4: ML, line address order
    /// - Bit 3: BGR colour order (0 = RGB)
    /// - Bit 2: MH, display data latch order
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct MemoryAccessControl(u8);
    impl Debug;
    pub row_order, set_row_order: 7;
    pub column_order, set_column_order: 6;
    pub row_column_exchange, set_row_column_exchange: 5;
    pub line_order, set_line_order: 4;
    pub bgr, set_bgr: 3;
    pub latch_order, set_latch_order: 2;
}

impl MemoryAccessControl {
    /// Default orientation, RGB colour order.
    pub const RGB: Self = Self(0x00);
    /// Default orientation, BGR colour order.
    pub const BGR: Self = Self(0x08);

    /// Raw parameter byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl From<u8> for MemoryAccessControl {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MemoryAccessControl {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "MemoryAccessControl({=u8:#04x})", self.0);
    }
}

bitfield! {
    /// Parameter byte of the COLMOD command.
    ///
    /// Bit layout:
    /// - Bits 6-4: RGB interface colour format (`0b101` = 65K)
    /// - Bits 2-0: control interface colour format (`0b101` = 16 bit/pixel)
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct PixelFormat(u8);
    impl Debug;
    pub u8, rgb_interface, set_rgb_interface: 6, 4;
    pub u8, control_interface, set_control_interface: 2, 0;
}

impl PixelFormat {
    /// RGB interface value for 65K colours.
    pub const COLORS_65K: u8 = 0b101;
    /// Control interface value for 16 bits per pixel.
    pub const BITS_16: u8 = 0b101;

    /// 65K colours over a 16 bit/pixel control interface (`0x55`), the only
    /// format the pixel engine produces.
    #[must_use]
    pub const fn rgb565() -> Self {
        Self((Self::COLORS_65K << 4) | Self::BITS_16)
    }

    /// Raw parameter byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl From<u8> for PixelFormat {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PixelFormat {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PixelFormat({=u8:#04x})", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_opcodes() {
        assert_eq!(u8::from(Instruction::SoftwareReset), 0x01);
        assert_eq!(u8::from(Instruction::SleepIn), 0x10);
        assert_eq!(u8::from(Instruction::SleepOut), 0x11);
        assert_eq!(u8::from(Instruction::NormalDisplayOn), 0x13);
        assert_eq!(u8::from(Instruction::InversionOff), 0x20);
        assert_eq!(u8::from(Instruction::InversionOn), 0x21);
        assert_eq!(u8::from(Instruction::DisplayOff), 0x28);
        assert_eq!(u8::from(Instruction::DisplayOn), 0x29);
        assert_eq!(u8::from(Instruction::ColumnAddressSet), 0x2A);
        assert_eq!(u8::from(Instruction::RowAddressSet), 0x2B);
        assert_eq!(u8::from(Instruction::MemoryWrite), 0x2C);
        assert_eq!(u8::from(Instruction::MemoryAccessControl), 0x36);
        assert_eq!(u8::from(Instruction::PixelFormat), 0x3A);
    }

    #[test]
    fn test_madctl_flags() {
        let mut madctl = MemoryAccessControl::default();
        assert_eq!(madctl.bits(), 0);

        madctl.set_row_column_exchange(true);
        madctl.set_column_order(true);
        assert_eq!(madctl.bits(), 0x60);

        madctl.set_bgr(true);
        assert!(madctl.bgr());
        assert_eq!(madctl.bits(), 0x68);

        madctl.set_column_order(false);
        assert!(!madctl.column_order());
        assert!(madctl.row_column_exchange());
        assert_eq!(madctl.bits(), 0x28);
    }

    #[test]
    fn test_madctl_passthrough() {
        for raw in [0x00u8, 0x08, 0x60, 0xA0, 0xC0, 0xFF] {
            assert_eq!(MemoryAccessControl::from(raw).bits(), raw);
        }
        assert_eq!(MemoryAccessControl::RGB.bits(), 0x00);
        assert_eq!(MemoryAccessControl::BGR.bits(), 0x08);
    }

    #[test]
    fn test_pixel_format_rgb565() {
        let format = PixelFormat::rgb565();
        assert_eq!(format.bits(), 0x55);
        assert_eq!(format.rgb_interface(), PixelFormat::COLORS_65K);
        assert_eq!(format.control_interface(), PixelFormat::BITS_16);
    }

    #[test]
    fn test_pixel_format_fields_isolated() {
        let mut format = PixelFormat::default();
        format.set_control_interface(0b110);
        assert_eq!(format.bits(), 0x06);
        format.set_rgb_interface(0b110);
        assert_eq!(format.bits(), 0x66);
        assert_eq!(format.control_interface(), 0b110);
    }
}
