//! Wire framing for uplink command packets.
//!
//! This crate handles the binary frame structure: the sync marker, the
//! 6-byte primary header, and the CRC-16 trailer. It does not know which
//! commands exist or what their data fields mean—only the shape of the
//! frame around them.
//!
//! # Design Principles
//!
//! - **Stable wire format** - The frame layout is fixed; receivers in the
//!   field depend on every bit of it.
//! - **Bounded encoding** - The data field length is validated against the
//!   length word's range before any bytes are produced.
//! - **No domain knowledge** - This crate handles framing, not command
//!   semantics.
//!
//! See `WIRE_FORMAT.md` for the complete layout.

mod checksum;
mod error;
mod header;

pub use checksum::checksum;
pub use error::{FrameError, FrameResult};
pub use header::{
    encode_header, PrimaryHeader, COMMAND_WORD_FLAGS, HEADER_SIZE, MAX_DATA_LEN, SEQUENCE_WORD,
    SYNC_MARKER, SYNC_SIZE, TRAILER_SIZE,
};
