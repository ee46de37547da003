//! Text buffer for finni.
//!
//! The document is a plain byte vector with a single cursor offset.
//! Lines are delimited by `\n` only, and every operation works on bytes,
//! never on characters or graphemes.

mod buffer;
mod error;
mod position;

pub use buffer::TextBuffer;
pub use error::BufferError;
pub use position::LinePosition;

/// Line separator recognized by the buffer.
pub const NEWLINE: u8 = b'\n';
