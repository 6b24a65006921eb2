//! Serial Report Framing

/// Banner line opening and closing every block.
pub const REPORT_BANNER: &str = "#############################";

/// Line terminator on the serial link.
pub const LINE_ENDING: &str = "\r\n";

/// Capacity of the per-cycle report buffer (bytes).
///
/// A full block with three sensors and failure reasons is under 256 bytes.
pub const REPORT_BUFFER_SIZE: usize = 384;

/// Serial link speed (baud).
pub const SERIAL_BAUD_RATE: u32 = 115_200;
