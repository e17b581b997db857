//! Display configuration types and builder

use core::num::NonZeroUsize;

use crate::command::DEFAULT_INIT_SEQUENCE;
pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};
use crate::interface::DEFAULT_ADDRESS;

/// Default maximum number of data bytes per bus write
pub const DEFAULT_CHUNK_SIZE: usize = 32;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u8,
    /// Height in pixels (rows, a whole number of pages)
    pub height: u8,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    /// - height % 8 != 0 (pages are 8 rows tall)
    pub fn new(width: u8, height: u8) -> Result<Self, BuilderError> {
        if width == 0 || u16::from(width) > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || u16::from(height) > MAX_ROWS || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn page_count(&self) -> u8 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.page_count() as usize
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// 7-bit bus address of the controller
    ///
    /// Applied to the transport by [`Display::new`](crate::display::Display::new).
    pub address: u8,
    /// Maximum number of data bytes per bus write
    pub chunk_size: NonZeroUsize,
    /// Command stream sent by `initialize`
    pub init_sequence: &'static [u8],
}

impl Config {
    /// Get the rotated dimensions based on rotation setting
    ///
    /// Returned as `(width, height)` since a rotated panel need not have a
    /// height that is a multiple of 8.
    pub fn rotated_size(&self) -> (u8, u8) {
        let Dimensions { width, height } = self.dimensions;
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => (width, height),
            Rotation::Rotate90 | Rotation::Rotate270 => (height, width),
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use sh1107::{Builder, Dimensions, Rotation};
///
/// let dims = Dimensions::new(128, 64).unwrap();
/// let config = Builder::new()
///     .dimensions(dims)
///     .chunk_size(16)
///     .rotation(Rotation::Rotate180)
///     .build()
///     .unwrap();
/// assert_eq!(config.address, 0x3C);
/// assert_eq!(config.dimensions.page_count(), 8);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// Bus address
    address: u8,
    /// Maximum data bytes per write
    chunk_size: usize,
    /// Initialization command stream
    init_sequence: &'static [u8],
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            address: DEFAULT_ADDRESS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            init_sequence: &DEFAULT_INIT_SEQUENCE,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the 7-bit bus address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the maximum number of data bytes per bus write
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Override the initialization command stream
    ///
    /// For panel variants that share the SH1107 protocol but need different
    /// multiplex, offset or remap settings.
    pub fn init_sequence(mut self, sequence: &'static [u8]) -> Self {
        self.init_sequence = sequence;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// `BuilderError::InvalidChunkSize` for a zero chunk size and
    /// `BuilderError::EmptyInitSequence` for an empty init override.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let chunk_size = NonZeroUsize::new(self.chunk_size).ok_or(BuilderError::InvalidChunkSize)?;
        if self.init_sequence.is_empty() {
            return Err(BuilderError::EmptyInitSequence);
        }
        Ok(Config {
            dimensions,
            rotation: self.rotation,
            address: self.address,
            chunk_size,
            init_sequence: self.init_sequence,
        })
    }
}
