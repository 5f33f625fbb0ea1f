//! The built-in flight command table.

use crate::{Catalog, CommandCode, CommandDef, FieldDef, FieldType};

/// Builds the catalog of flight commands this ground station can emit.
///
/// The table is fixed at release time. Deployments with a different
/// command set construct their own [`Catalog`] instead.
#[must_use]
pub fn flight_catalog() -> Catalog {
    let commands = vec![
        CommandDef::new(CommandCode::new(0x01), "Reboot")
            .field(FieldDef::typed("device_id", FieldType::U8))
            .field(FieldDef::typed("state", FieldType::U8)),
        CommandDef::new(CommandCode::new(0x02), "Shutdown")
            .field(FieldDef::typed("telemetry_id", FieldType::U16))
            .field(FieldDef::typed("rate_hz", FieldType::U8)),
        CommandDef::new(CommandCode::new(0xC2), "Enable Time")
            .field(FieldDef::typed("mode", FieldType::U8))
            .field(FieldDef::typed("timeout_sec", FieldType::U16)),
        CommandDef::new(CommandCode::new(0x5E), "Emergency Revert"),
        CommandDef::new(CommandCode::new(0x67), "Execute File"),
        CommandDef::new(CommandCode::new(0xFE), "List Files")
            .field(FieldDef::new("Directory Path")),
        CommandDef::new(CommandCode::new(0xAB), "Auto Downlink File"),
        CommandDef::new(CommandCode::new(0xAF), "Zip Downlink File"),
        CommandDef::new(CommandCode::new(0xAC), "Zip Downlink PAT Data"),
        // Name misspelled in the flight database; kept verbatim so
        // operator-facing labels match the deployed consoles.
        CommandDef::new(CommandCode::new(0x15), "Disasaemble File"),
        CommandDef::new(CommandCode::new(0x16), "Request File")
            .field(FieldDef::new("Transfer ID"))
            .field(FieldDef::new("Transfer Flag"))
            .field(FieldDef::new("Chunk Index"))
            .field(FieldDef::new("Number of Chunks to Transfer (if flag != 0xFF)")),
        CommandDef::new(CommandCode::new(0xCD), "Uplink File"),
        CommandDef::new(CommandCode::new(0x39), "Assemble File"),
        CommandDef::new(CommandCode::new(0x40), "Validate File"),
        CommandDef::new(CommandCode::new(0x41), "Move File"),
        CommandDef::new(CommandCode::new(0x42), "Delete File")
            .field(FieldDef::new("Directory Flag"))
            .field(FieldDef::new("File/Directory Name")),
        CommandDef::new(CommandCode::new(0x43), "Unzip File")
            .field(FieldDef::new("ZipFile Name"))
            .field(FieldDef::new("Destination Directory Path")),
        CommandDef::new(CommandCode::new(0xCC), "Auto Assemble File"),
        CommandDef::new(CommandCode::new(0x2A), "Update Options"),
        CommandDef::new(CommandCode::new(0xB3), "Set PAT Mode"),
        CommandDef::new(CommandCode::new(0xB4), "Update PAT Offset Params"),
        CommandDef::new(CommandCode::new(0xF1), "Single Capture"),
        CommandDef::new(CommandCode::new(0x28), "FSM Test"),
        CommandDef::new(CommandCode::new(0x32), "Run Calibration"),
        CommandDef::new(CommandCode::new(0x35), "Test ADCs Feedback"),
        CommandDef::new(CommandCode::new(0x86), "Update Acquisition Params"),
        CommandDef::new(CommandCode::new(0x87), "TX Align"),
        CommandDef::new(CommandCode::new(0x88), "Update TX Offsets"),
        CommandDef::new(CommandCode::new(0x89), "Update FSM Angles"),
        CommandDef::new(CommandCode::new(0x90), "Enter PAT Main"),
        CommandDef::new(CommandCode::new(0x91), "Exit PAT Main"),
        CommandDef::new(CommandCode::new(0x92), "End PAT Process"),
        CommandDef::new(CommandCode::new(0x54), "Set FPGA"),
        CommandDef::new(CommandCode::new(0x0E), "Get FPGA"),
        CommandDef::new(CommandCode::new(0x97), "Set HK"),
        CommandDef::new(CommandCode::new(0x3D), "Echo"),
        CommandDef::new(CommandCode::new(0x5B), "NOOP"),
        CommandDef::new(CommandCode::new(0x80), "Selftest"),
        CommandDef::new(CommandCode::new(0xE0), "Downlink Mode"),
        CommandDef::new(CommandCode::new(0xD0), "Debug Mode"),
    ];
    Catalog::new(commands).expect("flight catalog must be valid")
}
