//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! ## Example
//!
//! ```
//! use sh1107::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Height must be a whole number of pages
//! let result = Dimensions::new(128, 100);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum rows (COM outputs) supported by the SH1107 controller
///
/// NOTE: 128x64 modules wire only half of the COM lines; configure
/// [`crate::Dimensions`] accordingly.
pub const MAX_ROWS: u16 = 128;

/// Maximum columns (SEG outputs) supported by the SH1107 controller
pub const MAX_COLUMNS: u16 = 128;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus transport error
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation.
    /// The operation was aborted at the failing write.
    Interface(I::Error),
    /// The display has not been initialized
    ///
    /// Call [`Display::initialize`](crate::Display::initialize) first, and
    /// again after a failed initialization.
    NotInitialized,
    /// Page index is outside the panel
    InvalidPage {
        /// Requested page
        page: u8,
        /// Number of pages on the panel
        page_count: u8,
    },
    /// Page range is empty or extends past the panel
    InvalidPageRange {
        /// First page of the range
        start: u8,
        /// Last page of the range (inclusive)
        end: u8,
        /// Number of pages on the panel
        page_count: u8,
    },
    /// Byte or pixel coordinate is outside the panel
    OutOfBounds {
        /// X coordinate (column)
        x: u32,
        /// Y coordinate (row or page)
        y: u32,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::InvalidPage { page, page_count } => {
                write!(f, "Invalid page {page} (display has {page_count} pages)")
            }
            Self::InvalidPageRange {
                start,
                end,
                page_count,
            } => write!(
                f,
                "Invalid page range {start}..={end} (display has {page_count} pages)"
            ),
            Self::OutOfBounds { x, y } => write!(f, "Coordinate out of bounds: x={x}, y={y}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u8,
        /// Height requested
        height: u8,
    },
    /// Chunk size must be at least one byte
    InvalidChunkSize,
    /// Init sequence override is empty
    EmptyInitSequence,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be multiple of 8)"
            ),
            Self::InvalidChunkSize => write!(f, "Chunk size must be at least 1 byte"),
            Self::EmptyInitSequence => write!(f, "Init sequence must not be empty"),
        }
    }
}

impl core::error::Error for BuilderError {}
