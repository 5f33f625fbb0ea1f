//! Catalog definitions and validation.

use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};
use crate::{CommandCode, FieldDef};

/// A command definition within a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandDef {
    /// The code operators select the command by.
    pub code: CommandCode,
    /// Display name.
    pub name: String,
    /// Ordered field descriptors.
    pub fields: Vec<FieldDef>,
}

impl CommandDef {
    /// Creates a command definition with no fields.
    #[must_use]
    pub fn new(code: CommandCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a command definition with the provided fields.
    #[must_use]
    pub fn with_fields(code: CommandCode, name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            code,
            name: name.into(),
            fields,
        }
    }

    /// Adds a field descriptor to the command.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// An ordered, read-only table of command definitions.
///
/// A catalog is validated once at construction and never mutated
/// afterward, so it can sit behind concurrent request handlers without
/// locking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    commands: Vec<CommandDef>,
}

impl Catalog {
    /// Creates a catalog from definitions after validation.
    pub fn new(commands: Vec<CommandDef>) -> CatalogResult<Self> {
        let catalog = Self { commands };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Creates a catalog builder.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder {
            commands: Vec::new(),
        }
    }

    /// Looks up the definition for a command code.
    pub fn lookup(&self, code: CommandCode) -> CatalogResult<&CommandDef> {
        self.commands
            .iter()
            .find(|command| command.code == code)
            .ok_or(CatalogError::UnknownCommand { code })
    }

    /// Returns the definitions in catalog order.
    #[must_use]
    pub fn commands(&self) -> &[CommandDef] {
        &self.commands
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the catalog has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Validates catalog invariants.
    ///
    /// Deserialized catalogs bypass [`Catalog::new`]; call this before
    /// using one.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut codes = HashSet::new();
        for command in &self.commands {
            if !codes.insert(command.code) {
                return Err(CatalogError::DuplicateCommandCode { code: command.code });
            }

            let mut names = HashSet::new();
            for field in &command.fields {
                if !names.insert(field.name.as_str()) {
                    return Err(CatalogError::DuplicateFieldName {
                        code: command.code,
                        field: field.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Builder for [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    commands: Vec<CommandDef>,
}

impl CatalogBuilder {
    /// Adds a command definition.
    #[must_use]
    pub fn command(mut self, command: CommandDef) -> Self {
        self.commands.push(command);
        self
    }

    /// Builds the catalog after validation.
    pub fn build(self) -> CatalogResult<Catalog> {
        Catalog::new(self.commands)
    }
}
