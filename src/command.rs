//! SH1107 command definitions
//!
//! This module defines the command bytes used to control the SH1107 OLED
//! display controller. Every bus write is prefixed with a register selector
//! byte: [`REG_COMMAND`] for a command stream and [`REG_DATA`] for display
//! RAM data.
//!
//! ## Command Structure
//!
//! Single-byte commands carry their argument in the low bits of the opcode
//! (page address, column nibbles, on/off flags). Double-byte commands are an
//! opcode followed by exactly one parameter byte, and must be sent together
//! in the same command stream.
//!
//! ## Example
//!
//! ```
//! use sh1107::command;
//!
//! assert_eq!(command::page_address(3), 0xB3);
//! assert_eq!(command::column_address(0x5A), [0x0A, 0x15]);
//! assert_eq!(command::DEFAULT_INIT_SEQUENCE[0], command::DISPLAY_OFF);
//! ```

// Register selectors

/// Register selector for a command stream (0x00)
pub const REG_COMMAND: u8 = 0x00;

/// Register selector for display RAM data (0x40)
pub const REG_DATA: u8 = 0x40;

// Fundamental commands

/// Display off command (0xAE, POR)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Contrast control command (0x81)
///
/// Double-byte: followed by the contrast level (POR = 0x80).
pub const SET_CONTRAST: u8 = 0x81;

/// Normal display polarity (0xA6, POR)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display polarity (0xA7)
pub const INVERSE_DISPLAY: u8 = 0xA7;

/// Entire display on disabled, RAM content is shown (0xA4, POR)
pub const ENTIRE_DISPLAY_OFF: u8 = 0xA4;

/// Entire display forced on regardless of RAM content (0xA5)
pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;

// Addressing commands

/// Lower column address nibble base (0x00 - 0x0F)
pub const COLUMN_LOW: u8 = 0x00;

/// Higher column address nibble base (0x10 - 0x17)
pub const COLUMN_HIGH: u8 = 0x10;

/// Page addressing mode (0x20, POR)
pub const PAGE_ADDRESSING_MODE: u8 = 0x20;

/// Page address base (0xB0 - 0xBF)
///
/// The page index is added to this value.
pub const PAGE_ADDRESS: u8 = 0xB0;

// Hardware configuration commands

/// Segment remap, normal direction (0xA0, POR)
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0;

/// Segment remap, reverse direction (0xA1)
pub const SEGMENT_REMAP_REVERSE: u8 = 0xA1;

/// Multiplex ratio command (0xA8)
///
/// Double-byte: followed by ratio - 1 (POR = 0x7F, 128 lines).
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// Display offset command (0xD3)
///
/// Double-byte: followed by the COM offset (POR = 0x00).
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// DC-DC (charge pump) control command (0xAD)
///
/// Double-byte: followed by the DC-DC setting (0x81 = on).
pub const SET_DC_DC: u8 = 0xAD;

/// COM output scan direction, COM0 to COM\[N-1\] (0xC0, POR)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// COM output scan direction, COM\[N-1\] to COM0 (0xC8)
pub const COM_SCAN_REVERSE: u8 = 0xC8;

/// Display start line command (0xDC)
///
/// Double-byte: followed by the start line (POR = 0x00).
pub const SET_START_LINE: u8 = 0xDC;

// Timing and driving commands

/// Display clock divide ratio / oscillator frequency command (0xD5)
///
/// Double-byte: followed by the ratio/frequency (POR = 0x50).
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Discharge / pre-charge period command (0xD9)
///
/// Double-byte: followed by the period (POR = 0x22).
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOM deselect level command (0xDB)
///
/// Double-byte: followed by the level (POR = 0x35).
pub const SET_VCOM_DESELECT: u8 = 0xDB;

/// Power-on initialization sequence
///
/// Brings the controller into page addressing mode with datasheet defaults
/// and turns the panel on. Sent as a single command stream so double-byte
/// commands are never split.
pub const DEFAULT_INIT_SEQUENCE: [u8; 26] = [
    DISPLAY_OFF,
    SET_CLOCK_DIVIDE,
    0x50,
    COLUMN_LOW,
    COLUMN_HIGH,
    PAGE_ADDRESSING_MODE,
    SET_CONTRAST,
    0x80,
    SEGMENT_REMAP_NORMAL,
    SET_MULTIPLEX_RATIO,
    0x7F,
    ENTIRE_DISPLAY_OFF,
    NORMAL_DISPLAY,
    SET_DISPLAY_OFFSET,
    0x00,
    SET_DC_DC,
    0x81,
    PAGE_ADDRESS,
    COM_SCAN_NORMAL,
    SET_PRECHARGE,
    0x22,
    SET_VCOM_DESELECT,
    0x35,
    SET_START_LINE,
    0x00,
    DISPLAY_ON,
];

/// Page address command byte for `page`
pub const fn page_address(page: u8) -> u8 {
    PAGE_ADDRESS.wrapping_add(page)
}

/// Column address command bytes for `column`
///
/// Low nibble first, then the high nibble tagged with [`COLUMN_HIGH`].
pub const fn column_address(column: u8) -> [u8; 2] {
    [
        COLUMN_LOW | (column & 0x0F),
        COLUMN_HIGH | ((column & 0xF0) >> 4),
    ]
}
