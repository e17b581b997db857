//! Command/data framing
//!
//! [`Framer`] wraps a [`DisplayInterface`] and prefixes every write with the
//! right register selector. Data payloads are split into consecutive chunks
//! no larger than the transport's chunk limit, so a long page write never
//! exceeds what one bus transaction can carry.
//!
//! ## Example
//!
//! ```
//! use core::num::NonZeroUsize;
//! use sh1107::framer::chunks;
//!
//! let payload = [0u8; 70];
//! let size = NonZeroUsize::new(32).unwrap();
//! let lengths: Vec<usize> = chunks(&payload, size).map(<[u8]>::len).collect();
//! assert_eq!(lengths, [32, 32, 6]);
//! ```

use core::num::NonZeroUsize;

use crate::command::{REG_COMMAND, REG_DATA};
use crate::interface::DisplayInterface;

type FramerResult<E> = core::result::Result<(), E>;

/// Split `payload` into consecutive chunks of at most `size` bytes
///
/// An empty payload yields no chunks.
pub fn chunks(payload: &[u8], size: NonZeroUsize) -> core::slice::Chunks<'_, u8> {
    payload.chunks(size.get())
}

/// Register-selecting framer over a bus transport
#[derive(Debug)]
pub struct Framer<I> {
    interface: I,
    chunk_size: NonZeroUsize,
}

impl<I> Framer<I>
where
    I: DisplayInterface,
{
    /// Create a framer that sends at most `chunk_size` data bytes per write
    pub fn new(interface: I, chunk_size: NonZeroUsize) -> Self {
        Self {
            interface,
            chunk_size,
        }
    }

    /// Maximum number of data bytes per transport write
    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Send a command stream in a single transport write
    ///
    /// Double-byte commands must be passed together with their parameter so
    /// they reach the controller in the same transfer.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub fn send_command(&mut self, commands: &[u8]) -> FramerResult<I::Error> {
        self.interface.write(REG_COMMAND, commands)
    }

    /// Send display RAM data, one transport write per chunk
    ///
    /// # Errors
    ///
    /// Returns the transport error of the first failing chunk. Remaining
    /// chunks are not sent.
    pub fn send_data(&mut self, data: &[u8]) -> FramerResult<I::Error> {
        for chunk in chunks(data, self.chunk_size) {
            self.interface.write(REG_DATA, chunk)?;
        }
        Ok(())
    }

    /// Borrow the underlying transport
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Mutably borrow the underlying transport
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Release the underlying transport
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockInterface {
        writes: Vec<(u8, Vec<u8>)>,
        fail_at: Option<usize>,
    }

    impl DisplayInterface for MockInterface {
        type Error = usize;

        fn write(&mut self, register: u8, payload: &[u8]) -> Result<(), Self::Error> {
            if self.fail_at == Some(self.writes.len()) {
                return Err(self.writes.len());
            }
            self.writes.push((register, payload.to_vec()));
            Ok(())
        }
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_chunks_count_and_reassembly() {
        let payload: Vec<u8> = (0..=255u8).collect();
        for chunk_size in 1..=40 {
            for len in [0, 1, chunk_size - 1, chunk_size, chunk_size + 1, 200] {
                let data = &payload[..len];
                let parts: Vec<&[u8]> = chunks(data, size(chunk_size)).collect();
                assert_eq!(parts.len(), len.div_ceil(chunk_size));
                assert!(parts.iter().all(|p| !p.is_empty() && p.len() <= chunk_size));
                assert_eq!(parts.concat(), data);
            }
        }
    }

    #[test]
    fn test_send_command_single_write() {
        let mut framer = Framer::new(MockInterface::default(), size(4));
        framer.send_command(&[0xAE, 0xD5, 0x50, 0x00, 0x10]).unwrap();
        let writes = framer.release().writes;
        assert_eq!(writes, [(REG_COMMAND, alloc::vec![0xAE, 0xD5, 0x50, 0x00, 0x10])]);
    }

    #[test]
    fn test_send_data_chunks_in_order() {
        let mut framer = Framer::new(MockInterface::default(), size(3));
        framer.send_data(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        let writes = framer.release().writes;
        assert_eq!(
            writes,
            [
                (REG_DATA, alloc::vec![1, 2, 3]),
                (REG_DATA, alloc::vec![4, 5, 6]),
                (REG_DATA, alloc::vec![7]),
            ]
        );
    }

    #[test]
    fn test_send_data_empty_payload_writes_nothing() {
        let mut framer = Framer::new(MockInterface::default(), size(16));
        framer.send_data(&[]).unwrap();
        assert!(framer.interface().writes.is_empty());
    }

    #[test]
    fn test_send_data_failure_aborts_remaining_chunks() {
        let interface = MockInterface {
            fail_at: Some(1),
            ..MockInterface::default()
        };
        let mut framer = Framer::new(interface, size(2));
        let result = framer.send_data(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(result, Err(1));
        assert_eq!(framer.interface().writes, [(REG_DATA, alloc::vec![1, 2])]);
    }
}
