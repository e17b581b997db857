//! Core display operations
//!
//! [`Display`] owns the framebuffer, the per-page dirty tracker and the
//! framed transport. Drawing only touches the buffer; [`Display::update`]
//! and [`Display::flush`] stream pages to the controller, re-asserting the
//! page/column cursor before every page.

use log::{debug, trace, warn};

use crate::command::{
    DISPLAY_OFF, DISPLAY_ON, INVERSE_DISPLAY, NORMAL_DISPLAY, SET_CONTRAST, column_address,
    page_address,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::dirty::DirtyPages;
use crate::error::{Error, MAX_COLUMNS, MAX_ROWS};
use crate::framer::Framer;
use crate::interface::DisplayInterface;
use crate::rotation::apply_rotation;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Framebuffer size for the largest supported panel (128x128)
pub const BUFFER_SIZE: usize = (MAX_COLUMNS as usize * MAX_ROWS as usize) / 8;

/// Core display driver for SH1107
///
/// Not designed for concurrent use: every operation runs to completion on the
/// bus before returning, and callers must not interleave operations on one
/// instance.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Framed bus transport
    framer: Framer<I>,
    /// Display configuration
    config: Config,
    /// Page-packed pixel buffer, `width` bytes per page
    buffer: [u8; BUFFER_SIZE],
    /// Pages changed since they were last flushed
    dirty: DirtyPages,
    /// Whether `initialize` completed
    is_initialized: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The buffer starts cleared. Nothing is sent until [`initialize`](Self::initialize).
    /// The transport is pointed at [`Config::address`] here, so the config
    /// is the single source of the bus address.
    pub fn new(mut interface: I, config: Config) -> Self {
        interface.set_address(config.address);
        Self {
            framer: Framer::new(interface, config.chunk_size),
            config,
            buffer: [0; BUFFER_SIZE],
            dirty: DirtyPages::new(),
            is_initialized: false,
        }
    }

    /// Send the init sequence and clear the panel
    ///
    /// Always emits the full configured sequence, then writes an all-zero
    /// frame to every page so stale controller RAM is never shown. The local
    /// buffer is cleared as well.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] on the first failing write. The display
    /// is then left uninitialized and the whole call must be retried.
    pub fn initialize(&mut self) -> DisplayResult<I> {
        self.is_initialized = false;
        debug!(
            "initializing {}x{} panel ({} command bytes)",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.init_sequence.len()
        );

        let sequence = self.config.init_sequence;
        self.send_command(sequence)?;

        self.clear_buffer();
        self.flush_range(0, self.last_page())?;

        self.is_initialized = true;
        debug!("panel initialized");
        Ok(())
    }

    /// Flush pages `start_page..=end_page` to the controller
    ///
    /// Each page is sent in ascending order: the cursor is set to column 0
    /// of the page, then `width` bytes of buffer are streamed. On success
    /// the flushed pages are no longer dirty; pages outside the range keep
    /// their state.
    ///
    /// # Errors
    ///
    /// - [`Error::NotInitialized`] before a successful [`initialize`](Self::initialize)
    /// - [`Error::InvalidPageRange`] if `start_page > end_page` or the range
    ///   leaves the panel
    /// - [`Error::Interface`] on a transport failure; later pages are not
    ///   sent and no dirty state is cleared, so the call can be retried
    pub fn update(&mut self, start_page: u8, end_page: u8) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let page_count = self.page_count();
        if start_page > end_page || end_page >= page_count {
            return Err(Error::InvalidPageRange {
                start: start_page,
                end: end_page,
                page_count,
            });
        }
        self.flush_range(start_page, end_page)
    }

    /// Flush every page
    pub fn update_all(&mut self) -> DisplayResult<I> {
        self.update(0, self.last_page())
    }

    /// Flush only the dirty pages, in ascending order
    ///
    /// Each page is marked clean as soon as it has been sent, so a failure
    /// leaves exactly the unsent pages dirty.
    pub fn flush(&mut self) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let pending = self.dirty;
        for page in pending.iter() {
            if let Err(e) = self.flush_page(page) {
                warn!("flush aborted at page {page}");
                return Err(e);
            }
            self.dirty.clear_range(page, page);
        }
        Ok(())
    }

    /// Point the controller's page cursor at `page`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPage`] if `page` is outside the panel.
    pub fn set_page(&mut self, page: u8) -> DisplayResult<I> {
        let page_count = self.page_count();
        if page >= page_count {
            return Err(Error::InvalidPage { page, page_count });
        }
        self.send_command(&[page_address(page)])
    }

    /// Point the controller's column cursor at `column`
    ///
    /// Sends the low nibble, then the high nibble, as two single-byte
    /// command writes.
    pub fn set_column(&mut self, column: u8) -> DisplayResult<I> {
        let [low, high] = column_address(column);
        self.send_command(&[low])?;
        self.send_command(&[high])
    }

    /// Set page, then column
    pub fn set_position(&mut self, column: u8, page: u8) -> DisplayResult<I> {
        self.set_page(page)?;
        self.set_column(column)
    }

    /// Turn the panel on or off (RAM is retained)
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(&[if on { DISPLAY_ON } else { DISPLAY_OFF }])
    }

    /// Set contrast (0x00 - 0xFF, POR 0x80)
    pub fn set_contrast(&mut self, level: u8) -> DisplayResult<I> {
        self.send_command(&[SET_CONTRAST, level])
    }

    /// Invert pixel polarity in hardware
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(&[if inverted {
            INVERSE_DISPLAY
        } else {
            NORMAL_DISPLAY
        }])
    }

    /// Clear the buffer, optionally flushing the whole panel
    ///
    /// # Errors
    ///
    /// With `flush` set, as for [`update`](Self::update).
    pub fn clear_display(&mut self, flush: bool) -> DisplayResult<I> {
        self.clear_buffer();
        if flush {
            self.update_all()?;
        }
        Ok(())
    }

    /// Current buffer contents, `width` bytes per page
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..self.config.dimensions.buffer_size()]
    }

    /// Mutable buffer access
    ///
    /// Marks every page dirty, since the changes cannot be tracked.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        let page_count = self.page_count();
        self.dirty.mark_all(page_count);
        let size = self.config.dimensions.buffer_size();
        &mut self.buffer[..size]
    }

    /// Write one buffer byte (8 vertical pixels, LSB on top)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `page`/`column` is outside the panel.
    pub fn set_byte(&mut self, page: u8, column: u8, value: u8) -> DisplayResult<I> {
        let Dimensions { width, .. } = self.config.dimensions;
        if page >= self.page_count() || column >= width {
            return Err(Error::OutOfBounds {
                x: column as u32,
                y: page as u32,
            });
        }
        let index = page as usize * width as usize + column as usize;
        if self.buffer[index] != value {
            self.buffer[index] = value;
            self.dirty.mark(page);
        }
        Ok(())
    }

    /// Set or clear the pixel at logical (rotated) coordinates
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the pixel is outside the rotated panel.
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) -> DisplayResult<I> {
        let (index, bit) = self.pixel_index(x, y).ok_or(Error::OutOfBounds { x, y })?;
        let before = self.buffer[index];
        if on {
            self.buffer[index] |= bit;
        } else {
            self.buffer[index] &= !bit;
        }
        if self.buffer[index] != before {
            let page = index / self.config.dimensions.width as usize;
            self.dirty.mark(page as u8);
        }
        Ok(())
    }

    /// Read the pixel at logical (rotated) coordinates
    ///
    /// Returns `None` outside the panel.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<bool> {
        self.pixel_index(x, y)
            .map(|(index, bit)| self.buffer[index] & bit != 0)
    }

    /// Pages with unflushed changes
    pub fn dirty_pages(&self) -> DirtyPages {
        self.dirty
    }

    /// Whether `initialize` has completed
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the transport
    pub fn release(self) -> I {
        self.framer.release()
    }

    pub(crate) fn fill_buffer(&mut self, value: u8) {
        let page_count = self.page_count();
        let size = self.config.dimensions.buffer_size();
        self.buffer[..size].fill(value);
        self.dirty.mark_all(page_count);
    }

    fn clear_buffer(&mut self) {
        self.fill_buffer(0x00);
    }

    fn page_count(&self) -> u8 {
        self.config.dimensions.page_count()
    }

    fn last_page(&self) -> u8 {
        self.page_count() - 1
    }

    fn pixel_index(&self, x: u32, y: u32) -> Option<(usize, u8)> {
        let (width, height) = self.config.rotated_size();
        if x >= width as u32 || y >= height as u32 {
            return None;
        }
        let Dimensions { width, height } = self.config.dimensions;
        Some(apply_rotation(
            x,
            y,
            width as u32,
            height as u32,
            self.config.rotation,
        ))
    }

    fn ensure_initialized(&self) -> DisplayResult<I> {
        if self.is_initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn flush_range(&mut self, start: u8, end: u8) -> DisplayResult<I> {
        for page in start..=end {
            if let Err(e) = self.flush_page(page) {
                warn!("update aborted at page {page} (range {start}..={end})");
                return Err(e);
            }
        }
        self.dirty.clear_range(start, end);
        Ok(())
    }

    fn flush_page(&mut self, page: u8) -> DisplayResult<I> {
        self.set_position(0, page)?;
        let width = self.config.dimensions.width as usize;
        let start = page as usize * width;
        trace!("flushing page {page} ({width} bytes)");
        self.framer
            .send_data(&self.buffer[start..start + width])
            .map_err(Error::Interface)
    }

    fn send_command(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.framer.send_command(commands).map_err(Error::Interface)
    }
}
