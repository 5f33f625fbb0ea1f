//! Deterministic catalog hashing.

use blake3::Hasher;

use crate::{Catalog, FieldDef, FieldType};

/// Computes a deterministic digest for catalog revision checking.
///
/// The digest covers command order, codes, names, and field descriptors,
/// so operators on different consoles can confirm they are working from
/// the same command table.
#[must_use]
pub fn catalog_hash(catalog: &Catalog) -> u64 {
    let mut hasher = Hasher::new();
    write_u32(&mut hasher, catalog.len() as u32);

    for command in catalog.commands() {
        write_u8(&mut hasher, command.code.raw());
        write_str(&mut hasher, &command.name);
        write_u32(&mut hasher, command.fields.len() as u32);

        for field in &command.fields {
            write_field(&mut hasher, field);
        }
    }

    let hash = hasher.finalize();
    let bytes = hash.as_bytes();
    u64::from_le_bytes(bytes[0..8].try_into().unwrap())
}

fn write_field(hasher: &mut Hasher, field: &FieldDef) {
    write_str(hasher, &field.name);
    match field.ty {
        None => write_u8(hasher, 0),
        Some(FieldType::U8) => write_u8(hasher, 1),
        Some(FieldType::U16) => write_u8(hasher, 2),
        Some(FieldType::U32) => write_u8(hasher, 3),
    }
}

fn write_str(hasher: &mut Hasher, value: &str) {
    write_u32(hasher, value.len() as u32);
    hasher.update(value.as_bytes());
}

fn write_u8(hasher: &mut Hasher, value: u8) {
    hasher.update(&[value]);
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}
