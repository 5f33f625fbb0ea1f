//! Checksum engine for the frame trailer.

use crc::{Crc, CRC_16_IBM_3740};

// CRC-16/CCITT-FALSE: polynomial 0x1021, initial value 0xFFFF, no
// reflection, no final XOR.
const CCITT_FALSE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Computes the CRC-16/CCITT-FALSE checksum over the given bytes.
///
/// The trailer covers exactly `header ‖ data`; the sync marker is never
/// included, nor is the checksum itself.
#[must_use]
pub fn checksum(bytes: &[u8]) -> u16 {
    CCITT_FALSE.checksum(bytes)
}
