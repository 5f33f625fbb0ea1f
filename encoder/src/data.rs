//! Per-command data field layouts.

use catalog::CommandDef;

use crate::error::{EncodeError, EncodeResult};
use crate::values::FieldValues;

// Commands with hand-written layouts, by code.
const REQUEST_FILE: u8 = 0x16;
const DELETE_FILE: u8 = 0x42;
const UNZIP_FILE: u8 = 0x43;
const LIST_FILES: u8 = 0xFE;

// Field names the hand-written layouts consume. These must match the
// catalog entries byte-for-byte; operators key their values by them.
const DIRECTORY_FLAG: &str = "Directory Flag";
const FILE_NAME: &str = "File/Directory Name";
const DIRECTORY_PATH: &str = "Directory Path";
const ZIP_NAME: &str = "ZipFile Name";
const DEST_PATH: &str = "Destination Directory Path";
const TRANSFER_ID: &str = "Transfer ID";
const TRANSFER_FLAG: &str = "Transfer Flag";
const CHUNK_INDEX: &str = "Chunk Index";
const CHUNK_COUNT: &str = "Number of Chunks to Transfer (if flag != 0xFF)";

// A transfer flag of 0xFF forces the chunk count to zero; the supplied
// count is ignored even if present.
const ALL_CHUNKS_FLAG: u8 = 0xFF;

/// Data emitted for commands without a hand-written layout.
pub const PLACEHOLDER_DATA: [u8; 4] = 0xDEAD_BEEF_u32.to_be_bytes();

/// The data field layout for one command.
///
/// Each variant is one hand-written binary layout, registered by command
/// code; `Placeholder` covers every command without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DataEncoder {
    DeleteFile,
    ListFiles,
    UnzipFile,
    RequestFile,
    Placeholder,
}

impl DataEncoder {
    /// Resolves the layout registered for a command code.
    #[must_use]
    pub const fn for_code(code: u8) -> Self {
        match code {
            DELETE_FILE => Self::DeleteFile,
            LIST_FILES => Self::ListFiles,
            UNZIP_FILE => Self::UnzipFile,
            REQUEST_FILE => Self::RequestFile,
            _ => Self::Placeholder,
        }
    }

    /// Resolves the layout for a command definition.
    #[must_use]
    pub const fn for_command(command: &CommandDef) -> Self {
        Self::for_code(command.code.raw())
    }

    /// Encodes the data field from the supplied values.
    pub fn encode(self, values: &FieldValues) -> EncodeResult<Vec<u8>> {
        match self {
            Self::DeleteFile => encode_delete_file(values),
            Self::ListFiles => encode_list_files(values),
            Self::UnzipFile => encode_unzip_file(values),
            Self::RequestFile => encode_request_file(values),
            Self::Placeholder => Ok(PLACEHOLDER_DATA.to_vec()),
        }
    }
}

// flag byte ‖ u16 name length ‖ name bytes
fn encode_delete_file(values: &FieldValues) -> EncodeResult<Vec<u8>> {
    let flag = parse_hex_u8(DIRECTORY_FLAG, values.require(DIRECTORY_FLAG)?)?;
    let name = values.require(FILE_NAME)?.as_bytes();
    let name_len = byte_len_u16(FILE_NAME, name)?;

    let mut data = Vec::with_capacity(3 + name.len());
    data.push(flag);
    data.extend_from_slice(&name_len.to_be_bytes());
    data.extend_from_slice(name);
    Ok(data)
}

// u16 path length ‖ path bytes
fn encode_list_files(values: &FieldValues) -> EncodeResult<Vec<u8>> {
    let path = values.require(DIRECTORY_PATH)?.as_bytes();
    let path_len = byte_len_u16(DIRECTORY_PATH, path)?;

    let mut data = Vec::with_capacity(2 + path.len());
    data.extend_from_slice(&path_len.to_be_bytes());
    data.extend_from_slice(path);
    Ok(data)
}

// u16 zip length ‖ u16 destination length ‖ zip bytes ‖ destination bytes
fn encode_unzip_file(values: &FieldValues) -> EncodeResult<Vec<u8>> {
    let zip = values.require(ZIP_NAME)?.as_bytes();
    let dest = values.require(DEST_PATH)?.as_bytes();
    let zip_len = byte_len_u16(ZIP_NAME, zip)?;
    let dest_len = byte_len_u16(DEST_PATH, dest)?;

    let mut data = Vec::with_capacity(4 + zip.len() + dest.len());
    data.extend_from_slice(&zip_len.to_be_bytes());
    data.extend_from_slice(&dest_len.to_be_bytes());
    data.extend_from_slice(zip);
    data.extend_from_slice(dest);
    Ok(data)
}

// u16 transfer id ‖ u8 flag ‖ u16 chunk index ‖ u16 chunk count
fn encode_request_file(values: &FieldValues) -> EncodeResult<Vec<u8>> {
    let id = parse_u16(TRANSFER_ID, values.require(TRANSFER_ID)?)?;
    let flag = parse_u8(TRANSFER_FLAG, values.require(TRANSFER_FLAG)?)?;
    let index = parse_u16(CHUNK_INDEX, values.require(CHUNK_INDEX)?)?;
    let chunks = if flag == ALL_CHUNKS_FLAG {
        0
    } else {
        parse_u16(CHUNK_COUNT, values.require(CHUNK_COUNT)?)?
    };

    let mut data = Vec::with_capacity(7);
    data.extend_from_slice(&id.to_be_bytes());
    data.push(flag);
    data.extend_from_slice(&index.to_be_bytes());
    data.extend_from_slice(&chunks.to_be_bytes());
    Ok(data)
}

fn byte_len_u16(field: &'static str, bytes: &[u8]) -> EncodeResult<u16> {
    u16::try_from(bytes.len()).map_err(|_| EncodeError::InvalidField {
        field: field.to_string(),
        expected: "at most 65535 bytes of UTF-8",
        value: format!("{} bytes", bytes.len()),
    })
}

fn parse_u8(field: &'static str, value: &str) -> EncodeResult<u8> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(field, "a decimal integer 0-255", value))
}

fn parse_u16(field: &'static str, value: &str) -> EncodeResult<u16> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(field, "a decimal integer 0-65535", value))
}

fn parse_hex_u8(field: &'static str, value: &str) -> EncodeResult<u8> {
    let digits = value.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    u8::from_str_radix(digits, 16).map_err(|_| invalid(field, "a base-16 integer 0x00-0xFF", value))
}

fn invalid(field: &'static str, expected: &'static str, value: &str) -> EncodeError {
    EncodeError::InvalidField {
        field: field.to_string(),
        expected,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Dispatch tests
    #[test]
    fn for_code_registry() {
        assert_eq!(DataEncoder::for_code(0x42), DataEncoder::DeleteFile);
        assert_eq!(DataEncoder::for_code(0xFE), DataEncoder::ListFiles);
        assert_eq!(DataEncoder::for_code(0x43), DataEncoder::UnzipFile);
        assert_eq!(DataEncoder::for_code(0x16), DataEncoder::RequestFile);
        assert_eq!(DataEncoder::for_code(0x5B), DataEncoder::Placeholder);
        assert_eq!(DataEncoder::for_code(0x00), DataEncoder::Placeholder);
    }

    // Delete File tests
    #[test]
    fn delete_file_layout() {
        let values = FieldValues::new()
            .with("Directory Flag", "0x01")
            .with("File/Directory Name", "abc");
        let data = DataEncoder::DeleteFile.encode(&values).unwrap();
        assert_eq!(data, vec![0x01, 0x00, 0x03, 0x61, 0x62, 0x63]);
    }

    #[test]
    fn delete_file_flag_without_prefix() {
        let values = FieldValues::new()
            .with("Directory Flag", "1F")
            .with("File/Directory Name", "x");
        let data = DataEncoder::DeleteFile.encode(&values).unwrap();
        assert_eq!(data[0], 0x1F);
    }

    #[test]
    fn delete_file_name_length_is_utf8_bytes() {
        let values = FieldValues::new()
            .with("Directory Flag", "0x00")
            .with("File/Directory Name", "é");
        let data = DataEncoder::DeleteFile.encode(&values).unwrap();
        // "é" is two UTF-8 bytes, one char.
        assert_eq!(&data[1..3], &[0x00, 0x02]);
        assert_eq!(data.len(), 5);
    }

    #[test]
    fn delete_file_missing_name() {
        let values = FieldValues::new().with("Directory Flag", "0x01");
        let err = DataEncoder::DeleteFile.encode(&values).unwrap_err();
        assert_eq!(
            err,
            EncodeError::MissingField {
                field: "File/Directory Name".to_string(),
            }
        );
    }

    #[test]
    fn delete_file_bad_flag() {
        let values = FieldValues::new()
            .with("Directory Flag", "zz")
            .with("File/Directory Name", "abc");
        let err = DataEncoder::DeleteFile.encode(&values).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidField { ref field, .. } if field == "Directory Flag"));
    }

    // List Files tests
    #[test]
    fn list_files_layout() {
        let values = FieldValues::new().with("Directory Path", "a");
        let data = DataEncoder::ListFiles.encode(&values).unwrap();
        assert_eq!(data, vec![0x00, 0x01, 0x61]);
    }

    #[test]
    fn list_files_empty_path() {
        let values = FieldValues::new().with("Directory Path", "");
        let data = DataEncoder::ListFiles.encode(&values).unwrap();
        assert_eq!(data, vec![0x00, 0x00]);
    }

    #[test]
    fn list_files_missing_path() {
        let err = DataEncoder::ListFiles.encode(&FieldValues::new()).unwrap_err();
        assert!(matches!(err, EncodeError::MissingField { .. }));
    }

    // Unzip File tests
    #[test]
    fn unzip_file_lengths_precede_both_strings() {
        let values = FieldValues::new()
            .with("ZipFile Name", "a.zip")
            .with("Destination Directory Path", "/tmp");
        let data = DataEncoder::UnzipFile.encode(&values).unwrap();

        let mut expected = vec![0x00, 0x05, 0x00, 0x04];
        expected.extend_from_slice(b"a.zip");
        expected.extend_from_slice(b"/tmp");
        assert_eq!(data, expected);
    }

    #[test]
    fn unzip_file_missing_destination() {
        let values = FieldValues::new().with("ZipFile Name", "a.zip");
        let err = DataEncoder::UnzipFile.encode(&values).unwrap_err();
        assert_eq!(
            err,
            EncodeError::MissingField {
                field: "Destination Directory Path".to_string(),
            }
        );
    }

    // Request File tests
    #[test]
    fn request_file_layout() {
        let values = FieldValues::new()
            .with("Transfer ID", "5")
            .with("Transfer Flag", "1")
            .with("Chunk Index", "2")
            .with("Number of Chunks to Transfer (if flag != 0xFF)", "16");
        let data = DataEncoder::RequestFile.encode(&values).unwrap();
        assert_eq!(data, vec![0x00, 0x05, 0x01, 0x00, 0x02, 0x00, 0x10]);
    }

    #[test]
    fn request_file_flag_255_forces_zero_chunks() {
        let values = FieldValues::new()
            .with("Transfer ID", "5")
            .with("Transfer Flag", "255")
            .with("Chunk Index", "2")
            .with("Number of Chunks to Transfer (if flag != 0xFF)", "99");
        let data = DataEncoder::RequestFile.encode(&values).unwrap();
        assert_eq!(data, vec![0x00, 0x05, 0xFF, 0x00, 0x02, 0x00, 0x00]);
    }

    #[test]
    fn request_file_flag_255_chunk_count_not_required() {
        let values = FieldValues::new()
            .with("Transfer ID", "5")
            .with("Transfer Flag", "255")
            .with("Chunk Index", "2");
        let data = DataEncoder::RequestFile.encode(&values).unwrap();
        assert_eq!(&data[5..7], &[0x00, 0x00]);
    }

    #[test]
    fn request_file_chunk_count_required_otherwise() {
        let values = FieldValues::new()
            .with("Transfer ID", "5")
            .with("Transfer Flag", "1")
            .with("Chunk Index", "2");
        let err = DataEncoder::RequestFile.encode(&values).unwrap_err();
        assert_eq!(
            err,
            EncodeError::MissingField {
                field: "Number of Chunks to Transfer (if flag != 0xFF)".to_string(),
            }
        );
    }

    #[test]
    fn request_file_rejects_wide_flag() {
        let values = FieldValues::new()
            .with("Transfer ID", "5")
            .with("Transfer Flag", "256")
            .with("Chunk Index", "2")
            .with("Number of Chunks to Transfer (if flag != 0xFF)", "1");
        let err = DataEncoder::RequestFile.encode(&values).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidField { ref field, .. } if field == "Transfer Flag"));
    }

    #[test]
    fn request_file_rejects_non_numeric_id() {
        let values = FieldValues::new()
            .with("Transfer ID", "five")
            .with("Transfer Flag", "1")
            .with("Chunk Index", "2")
            .with("Number of Chunks to Transfer (if flag != 0xFF)", "1");
        let err = DataEncoder::RequestFile.encode(&values).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidField { ref field, .. } if field == "Transfer ID"));
    }

    #[test]
    fn request_file_trims_whitespace() {
        let values = FieldValues::new()
            .with("Transfer ID", " 5 ")
            .with("Transfer Flag", "1")
            .with("Chunk Index", "2")
            .with("Number of Chunks to Transfer (if flag != 0xFF)", "16");
        let data = DataEncoder::RequestFile.encode(&values).unwrap();
        assert_eq!(&data[0..2], &[0x00, 0x05]);
    }

    // Placeholder tests
    #[test]
    fn placeholder_sentinel_bytes() {
        let data = DataEncoder::Placeholder.encode(&FieldValues::new()).unwrap();
        assert_eq!(data, vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn placeholder_ignores_values() {
        let values = FieldValues::new().with("anything", "at all");
        let data = DataEncoder::Placeholder.encode(&values).unwrap();
        assert_eq!(data, PLACEHOLDER_DATA.to_vec());
    }
}
