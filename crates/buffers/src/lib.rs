//! Little-endian binary buffer utilities for treepack.
//!
//! # Overview
//!
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//!
//! All multi-byte accessors are little-endian: the typed-array payloads this
//! workspace produces are mandated LE regardless of host byte order.
//!
//! # Example
//!
//! ```
//! use treepack_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! let data = writer.flush();
//! assert_eq!(data, [0x01, 0x03, 0x02]);
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), 0x01);
//! assert_eq!(reader.u16(), 0x0203);
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;
