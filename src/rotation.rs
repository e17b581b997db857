//! Coordinate rotation utilities
//!
//! This module provides functions for applying rotation transformations to pixel
//! coordinates when mapping to the display buffer.
//!
//! The SH1107 stores pixels page by page: each byte holds 8 vertically stacked
//! pixels of one column, with the least significant bit at the top of the page.
//! When the display is rotated, the logical coordinate is first mapped to a
//! physical one, then to its byte index and bit.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation
//! - **Rotate90**: 90° clockwise, width and height swapped
//! - **Rotate180**: 180° rotation, origin at bottom-right
//! - **Rotate270**: 270° clockwise (or 90° counter-clockwise)
//!
//! ## Example
//!
//! ```
//! use sh1107::{rotation::apply_rotation, Rotation};
//!
//! // On a 128x64 panel, pixel (0,0) is byte 0, bit 0 (LSB)
//! let (idx, bit) = apply_rotation(0, 0, 128, 64, Rotation::Rotate0);
//! assert_eq!(idx, 0);
//! assert_eq!(bit, 0x01);
//!
//! // Pixel (3,9) lives in page 1, column 3, bit 1
//! let (idx, bit) = apply_rotation(3, 9, 128, 64, Rotation::Rotate0);
//! assert_eq!(idx, 128 + 3);
//! assert_eq!(bit, 0x02);
//! ```

use crate::config::Rotation;

/// Apply rotation transformation to get buffer index and bit mask
///
/// # Arguments
///
/// * `x` - Logical X coordinate
/// * `y` - Logical Y coordinate
/// * `width` - Physical display width in pixels
/// * `height` - Physical display height in pixels (multiple of 8)
/// * `rotation` - Rotation mode
///
/// The caller must keep `(x, y)` inside the rotated bounds.
pub fn apply_rotation(x: u32, y: u32, width: u32, height: u32, rotation: Rotation) -> (usize, u8) {
    let (px, py) = match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (width - 1 - y, x),
        Rotation::Rotate180 => (width - 1 - x, height - 1 - y),
        Rotation::Rotate270 => (y, height - 1 - x),
    };
    let index = ((py / 8) * width + px) as usize;
    let bit = 1 << (py % 8);
    (index, bit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate0() {
        let (idx, bit) = apply_rotation(0, 7, 128, 64, Rotation::Rotate0);
        assert_eq!(idx, 0);
        assert_eq!(bit, 0x80);

        let (idx, bit) = apply_rotation(127, 63, 128, 64, Rotation::Rotate0);
        assert_eq!(idx, 7 * 128 + 127);
        assert_eq!(bit, 0x80);
    }

    #[test]
    fn test_rotate180() {
        // Logical origin is the physical bottom-right corner
        let (idx, bit) = apply_rotation(0, 0, 128, 64, Rotation::Rotate180);
        assert_eq!(idx, 7 * 128 + 127);
        assert_eq!(bit, 0x80);
    }

    #[test]
    fn test_rotate90() {
        // Logical (0,0) on a rotated 128x64 panel is physical (127,0)
        let (idx, bit) = apply_rotation(0, 0, 128, 64, Rotation::Rotate90);
        assert_eq!(idx, 127);
        assert_eq!(bit, 0x01);

        // Logical (63,127) is physical (0,63)
        let (idx, bit) = apply_rotation(63, 127, 128, 64, Rotation::Rotate90);
        assert_eq!(idx, 7 * 128);
        assert_eq!(bit, 0x80);
    }

    #[test]
    fn test_rotate270() {
        // Logical (0,0) is physical (0,63)
        let (idx, bit) = apply_rotation(0, 0, 128, 64, Rotation::Rotate270);
        assert_eq!(idx, 7 * 128);
        assert_eq!(bit, 0x80);
    }
}
