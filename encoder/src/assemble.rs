//! Single-shot packet assembly.

use catalog::{Catalog, CommandCode};
use wire::{
    checksum, encode_header, FrameError, PrimaryHeader, HEADER_SIZE, SYNC_MARKER, SYNC_SIZE,
    TRAILER_SIZE,
};

use crate::data::DataEncoder;
use crate::error::{EncodeError, EncodeResult};
use crate::values::FieldValues;

/// Returns the total packet length for a given data field length.
#[must_use]
pub const fn packet_len(data_len: usize) -> usize {
    SYNC_SIZE + HEADER_SIZE + data_len + TRAILER_SIZE
}

/// Encodes the complete packet for a command.
///
/// Resolves the definition through the catalog, produces the data field,
/// builds the header from the final data length, and appends the CRC-16
/// trailer computed over `header ‖ data`. Every failure is detected
/// before any bytes are returned; there are no partial packets.
pub fn assemble(catalog: &Catalog, code: u16, values: &FieldValues) -> EncodeResult<Vec<u8>> {
    let command_code =
        CommandCode::from_raw(code).ok_or(EncodeError::Frame(FrameError::CodeOutOfRange { code }))?;
    let command = catalog.lookup(command_code)?;

    let data = DataEncoder::for_command(command).encode(values)?;

    let header = PrimaryHeader::for_command(code, data.len())?;
    let mut header_bytes = [0u8; HEADER_SIZE];
    encode_header(&header, &mut header_bytes)?;

    let mut packet = Vec::with_capacity(packet_len(data.len()));
    packet.extend_from_slice(&SYNC_MARKER.to_be_bytes());
    packet.extend_from_slice(&header_bytes);
    packet.extend_from_slice(&data);

    let crc = checksum(&packet[SYNC_SIZE..]);
    packet.extend_from_slice(&crc.to_be_bytes());

    Ok(packet)
}
