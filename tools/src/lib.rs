//! Operator tooling for the uplink packet encoder.
//!
//! This crate provides the pieces behind the `uplink-tools` CLI:
//!
//! - Catalog listing (pretty and JSON)
//! - One-shot packet encoding from command-line field values
//! - Packet breakdown display (sync / header / data / trailer)
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - An operator should see exactly what will
//!   be transmitted before it is transmitted.

use std::fmt::Write as _;

use catalog::Catalog;
use encoder::{handle_request, EncodeRequest, EncodeResponse, ErrorReport};
use wire::{HEADER_SIZE, SYNC_SIZE, TRAILER_SIZE};

/// Parses a `NAME=VALUE` field argument.
pub fn parse_field_arg(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got {arg:?}")),
    }
}

/// Encodes one command from CLI field arguments.
pub fn encode_command(
    catalog: &Catalog,
    apid: &str,
    fields: &[(String, String)],
) -> Result<EncodeResponse, ErrorReport> {
    let request = EncodeRequest {
        apid: apid.to_string(),
        fields: fields.iter().cloned().collect(),
    };
    handle_request(catalog, &request)
}

/// Formats the catalog as an aligned table, one command per line.
#[must_use]
pub fn format_catalog_pretty(catalog: &Catalog) -> String {
    let mut out = String::new();
    for command in catalog.commands() {
        let fields = if command.fields.is_empty() {
            "-".to_string()
        } else {
            command
                .fields
                .iter()
                .map(|field| match field.ty {
                    Some(ty) => format!("{}:{}", field.name, ty.name()),
                    None => field.name.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(out, "{}  {:<28} {fields}", command.code, command.name);
    }
    out
}

/// Formats packet bytes as space-separated uppercase hex.
#[must_use]
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a packet as a labeled frame breakdown.
///
/// The input must be a complete packet as produced by the encoder.
#[must_use]
pub fn format_breakdown(bytes: &[u8]) -> String {
    let header_end = SYNC_SIZE + HEADER_SIZE;
    let data_end = bytes.len() - TRAILER_SIZE;

    let mut out = String::new();
    let _ = writeln!(out, "sync     {}", format_hex(&bytes[..SYNC_SIZE]));
    let _ = writeln!(
        out,
        "header   {}",
        format_hex(&bytes[SYNC_SIZE..header_end])
    );
    let _ = writeln!(out, "data     {}", format_hex(&bytes[header_end..data_end]));
    let _ = writeln!(out, "crc      {}", format_hex(&bytes[data_end..]));
    let _ = write!(out, "total    {} bytes", bytes.len());
    out
}
