//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for communicating with the SH1107 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The SH1107 in I2C mode needs only SDA and SCL. Every write starts with a
//! register selector byte telling the controller whether the rest of the
//! transfer is a command stream or display RAM data.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use sh1107::{command, DisplayInterface, I2cInterface};
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
//! // Create interface at the default address (0x3C)
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Turn the panel on
//! let _ = interface.write(command::REG_COMMAND, &[command::DISPLAY_ON]);
//!
//! // Write eight columns of display RAM
//! let _ = interface.write(command::REG_DATA, &[0xFF; 8]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of the SH1107
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Trait for the bus transport to the SH1107 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// transport able to write a register-selected byte stream.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. If you need
/// custom behavior (e.g., a bus shared behind a mutex, or a recording
/// transport for tests), implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write `payload` to the controller behind register selector `register`
    ///
    /// The selector and payload must reach the controller as one bus
    /// transfer. Callers never pass more bytes than the configured chunk
    /// size for data writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails. Implementations must not
    /// retry internally.
    fn write(&mut self, register: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Point the transport at the configured device address
    ///
    /// Called once by [`Display::new`](crate::display::Display::new) with
    /// [`Config::address`](crate::config::Config::address). Transports
    /// without bus addressing keep the default no-op.
    fn set_address(&mut self, _address: u8) {}
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error
    I2c(I2cErr),
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// I2C transport implementation for SH1107
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 [`I2c`].
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
///
/// When wrapped in a [`Display`](crate::display::Display), the address comes
/// from the display's [`Config`](crate::config::Config).
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface at [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a new interface at a specific 7-bit address
    ///
    /// Panels with the SA0 pin pulled high answer at 0x3D. Standalone use
    /// only: [`Display::new`](crate::display::Display::new) replaces it
    /// with the configured address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c<SevenBitAddress>,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error>;

    fn write(&mut self, register: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error> {
        // Adjacent writes in one transaction go out without a repeated start,
        // so the selector and payload form a single transfer.
        let selector = [register];
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&selector), Operation::Write(payload)],
            )
            .map_err(InterfaceError::I2c)
    }

    fn set_address(&mut self, address: u8) {
        self.address = address;
    }
}
