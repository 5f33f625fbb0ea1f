//! Command data-field encoding and packet assembly.
//!
//! This is the main encoder crate: it ties the catalog and wire layers
//! together to turn an operator's command selection and field values
//! into the exact byte sequence to transmit.
//!
//! # Features
//!
//! - Per-command data field serialization
//! - Single-shot packet assembly (sync ‖ header ‖ data ‖ checksum)
//! - A typed error taxonomy surfaced to the request boundary
//! - Boundary request/response types (`serde` feature)
//!
//! # Design Principles
//!
//! - **Fail before emitting** - Every failure is detected before any
//!   bytes exist; no partial packets are ever returned.
//! - **Deterministic** - Same inputs produce same outputs.
//! - **Correctness first** - Every emitted layout is pinned by a golden
//!   test.

mod assemble;
mod data;
mod error;
mod values;

#[cfg(feature = "serde")]
mod boundary;

pub use assemble::{assemble, packet_len};
pub use data::{DataEncoder, PLACEHOLDER_DATA};
pub use error::{EncodeError, EncodeResult};
pub use values::FieldValues;

#[cfg(feature = "serde")]
pub use boundary::{
    catalog_export, handle_request, parse_apid, render_byte_list, CatalogEntry,
    CatalogFieldEntry, EncodeRequest, EncodeResponse, ErrorKind, ErrorReport,
};
