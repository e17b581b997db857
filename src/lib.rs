//! SH1107 OLED Display Driver
//!
//! A driver for the SH1107 monochrome OLED controller (128x128 and 128x64
//! modules) over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable dimensions, bus address, chunk size and init sequence
//! - Per-page dirty tracking with range and dirty-only flushes
//! - Rotation support
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use sh1107::{Builder, Dimensions, Display, I2cInterface};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).chunk_size(32).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! // The bus address comes from the config (0x3C unless overridden)
//! let mut display = Display::new(I2cInterface::new(i2c), config);
//! let _ = display.initialize();
//!
//! let _ = display.set_pixel(10, 10, true);
//! let _ = display.update(1, 1);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SH1107 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Per-page dirty tracking
pub mod dirty;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Register-selecting command/data framer
pub mod framer;
/// Hardware interface abstraction
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{Builder, Config, DEFAULT_CHUNK_SIZE, Dimensions, MAX_COLUMNS, MAX_ROWS, Rotation};
pub use dirty::DirtyPages;
pub use display::{BUFFER_SIZE, Display};
pub use error::{BuilderError, Error};
pub use framer::Framer;
pub use interface::{DEFAULT_ADDRESS, DisplayInterface, I2cInterface, InterfaceError};
