//! Request/response types exchanged with the operator-facing layer.
//!
//! The HTTP layer that collects field values and renders the catalog is
//! an external collaborator; these are the only shapes that cross it.
//! Failures cross as [`ErrorReport`] values with a machine-readable
//! kind—never as panics or raw error strings.

use std::collections::BTreeMap;
use std::fmt;

use catalog::{Catalog, FieldType};
use serde::{Deserialize, Serialize};

use crate::assemble::assemble;
use crate::error::{EncodeError, EncodeResult};
use crate::values::FieldValues;

/// One encode request from the operator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeRequest {
    /// Command code as submitted, e.g. `"0x42"`.
    pub apid: String,
    /// Field values keyed by field name.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// The encoded packet returned to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResponse {
    /// Display rendering of the packet as a bracketed list of decimal
    /// integers, e.g. `"[53, 46, 248, 83, ...]"`. The operator consoles
    /// have always shown packets this way.
    pub hex: String,
    /// The exact bytes to transmit.
    pub bytes: Vec<u8>,
}

/// One catalog entry exported for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: u8,
    pub name: String,
    pub fields: Vec<CatalogFieldEntry>,
}

/// One field descriptor within an exported catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFieldEntry {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<FieldType>,
}

/// Machine-readable failure kind surfaced across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownCommand,
    MissingField,
    InvalidField,
    InvalidCode,
    DataTooLong,
    Internal,
}

impl ErrorKind {
    /// Returns the boundary name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown_command",
            Self::MissingField => "missing_field",
            Self::InvalidField => "invalid_field",
            Self::InvalidCode => "invalid_code",
            Self::DataTooLong => "data_too_long",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure surfaced across the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorReport {
    /// Maps an encode failure to its boundary report.
    #[must_use]
    pub fn from_error(err: &EncodeError) -> Self {
        let kind = match err {
            EncodeError::Catalog(catalog::CatalogError::UnknownCommand { .. }) => {
                ErrorKind::UnknownCommand
            }
            EncodeError::Frame(wire::FrameError::CodeOutOfRange { .. }) => ErrorKind::InvalidCode,
            EncodeError::Frame(wire::FrameError::DataTooLong { .. }) => ErrorKind::DataTooLong,
            EncodeError::MissingField { .. } => ErrorKind::MissingField,
            EncodeError::InvalidField { .. } => ErrorKind::InvalidField,
            // Catalog duplicates and frame buffer sizing cannot arise
            // from request input.
            EncodeError::Catalog(_) | EncodeError::Frame(_) => ErrorKind::Internal,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// Parses an APID string (`"0x42"` or bare hex digits) into a raw code.
pub fn parse_apid(apid: &str) -> EncodeResult<u16> {
    let digits = apid.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    u16::from_str_radix(digits, 16).map_err(|_| EncodeError::InvalidField {
        field: "apid".to_string(),
        expected: "a base-16 command code, e.g. \"0x42\"",
        value: apid.to_string(),
    })
}

/// Renders bytes the way the operator display expects: a bracketed list
/// of decimal integers.
#[must_use]
pub fn render_byte_list(bytes: &[u8]) -> String {
    let rendered: Vec<String> = bytes.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

/// Handles one encode request end to end.
pub fn handle_request(
    catalog: &Catalog,
    request: &EncodeRequest,
) -> Result<EncodeResponse, ErrorReport> {
    encode_request(catalog, request).map_err(|err| ErrorReport::from_error(&err))
}

fn encode_request(catalog: &Catalog, request: &EncodeRequest) -> EncodeResult<EncodeResponse> {
    let code = parse_apid(&request.apid)?;
    let values: FieldValues = request
        .fields
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let bytes = assemble(catalog, code, &values)?;

    Ok(EncodeResponse {
        hex: render_byte_list(&bytes),
        bytes,
    })
}

/// Exports the catalog for display, in catalog order.
#[must_use]
pub fn catalog_export(catalog: &Catalog) -> Vec<CatalogEntry> {
    catalog
        .commands()
        .iter()
        .map(|command| CatalogEntry {
            code: command.code.raw(),
            name: command.name.clone(),
            fields: command
                .fields
                .iter()
                .map(|field| CatalogFieldEntry {
                    name: field.name.clone(),
                    ty: field.ty,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::flight_catalog;

    #[test]
    fn parse_apid_accepts_prefixed_hex() {
        assert_eq!(parse_apid("0x42").unwrap(), 0x42);
        assert_eq!(parse_apid("0XFE").unwrap(), 0xFE);
    }

    #[test]
    fn parse_apid_accepts_bare_hex() {
        assert_eq!(parse_apid("42").unwrap(), 0x42);
    }

    #[test]
    fn parse_apid_rejects_garbage() {
        let err = parse_apid("delete").unwrap_err();
        assert!(matches!(err, EncodeError::InvalidField { ref field, .. } if field == "apid"));
    }

    #[test]
    fn render_byte_list_matches_console_format() {
        assert_eq!(render_byte_list(&[53, 46, 248, 83]), "[53, 46, 248, 83]");
        assert_eq!(render_byte_list(&[]), "[]");
    }

    #[test]
    fn handle_request_success() {
        let catalog = flight_catalog();
        let request = EncodeRequest {
            apid: "0x42".to_string(),
            fields: [
                ("Directory Flag".to_string(), "0x01".to_string()),
                ("File/Directory Name".to_string(), "abc".to_string()),
            ]
            .into(),
        };

        let response = handle_request(&catalog, &request).unwrap();
        assert_eq!(
            response.bytes,
            vec![
                0x35, 0x2E, 0xF8, 0x53, 0x20, 0x42, 0xC0, 0x00, 0x00, 0x07, 0x01, 0x00, 0x03,
                0x61, 0x62, 0x63, 0xC2, 0xFF,
            ]
        );
        assert_eq!(
            response.hex,
            "[53, 46, 248, 83, 32, 66, 192, 0, 0, 7, 1, 0, 3, 97, 98, 99, 194, 255]"
        );
    }

    #[test]
    fn handle_request_unknown_command_kind() {
        let catalog = flight_catalog();
        let request = EncodeRequest {
            apid: "0x99".to_string(),
            fields: BTreeMap::new(),
        };

        let report = handle_request(&catalog, &request).unwrap_err();
        assert_eq!(report.kind, ErrorKind::UnknownCommand);
        assert!(report.message.contains("0x99"));
    }

    #[test]
    fn handle_request_invalid_code_kind() {
        let catalog = flight_catalog();
        let request = EncodeRequest {
            apid: "0x142".to_string(),
            fields: BTreeMap::new(),
        };

        let report = handle_request(&catalog, &request).unwrap_err();
        assert_eq!(report.kind, ErrorKind::InvalidCode);
    }

    #[test]
    fn handle_request_bad_apid_kind() {
        let catalog = flight_catalog();
        let request = EncodeRequest {
            apid: "reboot".to_string(),
            fields: BTreeMap::new(),
        };

        let report = handle_request(&catalog, &request).unwrap_err();
        assert_eq!(report.kind, ErrorKind::InvalidField);
    }

    #[test]
    fn handle_request_missing_field_names_field() {
        let catalog = flight_catalog();
        let request = EncodeRequest {
            apid: "0x42".to_string(),
            fields: [("Directory Flag".to_string(), "0x01".to_string())].into(),
        };

        let report = handle_request(&catalog, &request).unwrap_err();
        assert_eq!(report.kind, ErrorKind::MissingField);
        assert!(report.message.contains("File/Directory Name"));
    }

    #[test]
    fn catalog_export_preserves_order_and_types() {
        let catalog = flight_catalog();
        let export = catalog_export(&catalog);

        assert_eq!(export.len(), catalog.len());
        assert_eq!(export[0].code, 0x01);
        assert_eq!(export[0].name, "Reboot");
        assert_eq!(export[0].fields[0].name, "device_id");
        assert_eq!(export[0].fields[0].ty, Some(FieldType::U8));

        let delete = export.iter().find(|entry| entry.code == 0x42).unwrap();
        assert_eq!(delete.fields[1].name, "File/Directory Name");
        assert_eq!(delete.fields[1].ty, None);
    }

    #[test]
    fn error_kind_names() {
        assert_eq!(ErrorKind::UnknownCommand.as_str(), "unknown_command");
        assert_eq!(ErrorKind::DataTooLong.to_string(), "data_too_long");
    }
}
