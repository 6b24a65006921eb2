//! Serial transport trait

use crate::errors::TransportError;

/// Byte sink for the report block
///
/// Implementations wrap a UART, a USB CDC class or stdout.
pub trait Transport {
    /// Write the whole buffer or fail
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Push buffered bytes out
    fn flush(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        T::write_all(self, bytes)
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        T::flush(self)
    }
}

/// Stdout as a serial console, for hosted runs
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct StdoutTransport;

#[cfg(feature = "std")]
impl Transport for StdoutTransport {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        use std::io::Write;
        std::io::stdout()
            .lock()
            .write_all(bytes)
            .map_err(|_| TransportError::WriteFailed)
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        use std::io::Write;
        std::io::stdout()
            .lock()
            .flush()
            .map_err(|_| TransportError::WriteFailed)
    }
}
