//! Command code newtype.

use std::fmt;

/// A command code (APID) selecting one command definition.
///
/// Codes occupy the low byte of the command word, so only values 0-255
/// are representable on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandCode(u8);

impl CommandCode {
    /// Creates a command code from a raw byte.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Creates a command code from a wider integer, if it fits in a byte.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Option<Self> {
        if raw <= u8::MAX as u16 {
            Some(Self(raw as u8))
        } else {
            None
        }
    }

    /// Returns the raw code value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

impl From<u8> for CommandCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<CommandCode> for u8 {
    fn from(code: CommandCode) -> Self {
        code.0
    }
}
