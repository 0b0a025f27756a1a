//! Fixed Super I/O protocol constants shared by every Nuvoton part.

/// Written twice to the index port to enter Extended Function Mode.
pub const ENTER_KEY: [u8; 2] = [0x87, 0x87];
/// Written once to the index port to leave Extended Function Mode.
pub const EXIT_KEY: u8 = 0xAA;

/// Logical device select register.
pub const CR_LOGICAL_DEVICE: u8 = 0x07;
/// Device ID, high byte.
pub const CR_CHIP_ID_HIGH: u8 = 0x20;
/// Device ID, low byte.
pub const CR_CHIP_ID_LOW: u8 = 0x21;
/// First register banked per logical device. Everything below is global.
pub const CR_DEVICE_BANK_START: u8 = 0x30;
/// I/O base address of the selected logical device, high byte.
pub const CR_BASE_HIGH: u8 = 0x60;
/// I/O base address of the selected logical device, low byte.
pub const CR_BASE_LOW: u8 = 0x61;

/// Hardware monitor logical device number.
pub const LDN_HWM: u8 = 0x0B;
