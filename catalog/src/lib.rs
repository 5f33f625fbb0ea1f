//! Command catalog and field descriptors for the uplink packet encoder.
//!
//! This crate defines which commands the ground station can emit:
//! - Command definitions (code, display name, ordered field descriptors)
//! - Catalog construction and validation
//! - The built-in flight command table
//! - Deterministic catalog hashing
//!
//! # Design Principles
//!
//! - **Immutable after startup** - A catalog is validated once at
//!   construction and never mutated; it can be shared freely.
//! - **Explicit definitions** - No reflection; every command is spelled out.
//! - **Deterministic hashing** - The digest is stable given the same table.

mod catalog;
mod code;
mod error;
mod field;
mod flight;
mod hash;

pub use catalog::{Catalog, CatalogBuilder, CommandDef};
pub use code::CommandCode;
pub use error::{CatalogError, CatalogResult};
pub use field::{FieldDef, FieldType};
pub use flight::flight_catalog;
pub use hash::catalog_hash;
