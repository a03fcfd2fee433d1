//! Deterministic layout hashing.

use blake3::Hasher;

use crate::{FieldEncoding, FieldSource, RecordLayout};

/// Computes a deterministic hash identifying a record layout.
///
/// The hash is stable across runs and platforms for the same definition, and
/// changes when any field name, encoding, value source, or the wrap bound
/// changes. Run summaries record it so a fixture file can be tied back to the
/// exact layout that produced it.
#[must_use]
pub fn layout_hash(layout: &RecordLayout) -> u64 {
    let mut hasher = Hasher::new();
    write_u32(&mut hasher, layout.fields.len() as u32);

    for field in &layout.fields {
        write_u32(&mut hasher, field.name.len() as u32);
        hasher.update(field.name.as_bytes());
        write_encoding(&mut hasher, field.encoding);
        write_source(&mut hasher, field.source);
    }

    match layout.id_max {
        None => write_u8(&mut hasher, 0),
        Some(id_max) => {
            write_u8(&mut hasher, 1);
            write_i32(&mut hasher, id_max);
        }
    }

    let hash = hasher.finalize();
    let bytes = hash.as_bytes();
    u64::from_le_bytes(bytes[0..8].try_into().unwrap())
}

fn write_encoding(hasher: &mut Hasher, encoding: FieldEncoding) {
    match encoding {
        FieldEncoding::Int16Le => write_u8(hasher, 0),
        FieldEncoding::Float32Le => write_u8(hasher, 1),
    }
}

fn write_source(hasher: &mut Hasher, source: FieldSource) {
    match source {
        FieldSource::DirectCurrent => write_u8(hasher, 0),
        FieldSource::QuadratureCurrent => write_u8(hasher, 1),
        FieldSource::TorqueEstimate => write_u8(hasher, 2),
        FieldSource::Constant(value) => {
            write_u8(hasher, 3);
            hasher.update(&value.to_bits().to_le_bytes());
        }
    }
}

fn write_u8(hasher: &mut Hasher, value: u8) {
    hasher.update(&[value]);
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}

fn write_i32(hasher: &mut Hasher, value: i32) {
    hasher.update(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldDef;

    #[test]
    fn hash_is_stable_for_same_definition() {
        assert_eq!(
            layout_hash(&RecordLayout::basic()),
            layout_hash(&RecordLayout::basic())
        );
        assert_eq!(
            layout_hash(&RecordLayout::extended()),
            layout_hash(&RecordLayout::extended())
        );
    }

    #[test]
    fn presets_hash_differently() {
        assert_ne!(
            layout_hash(&RecordLayout::basic()),
            layout_hash(&RecordLayout::extended())
        );
    }

    #[test]
    fn hash_depends_on_field_name() {
        let a = RecordLayout::builder()
            .field(FieldDef::constant("speed", FieldEncoding::Int16Le, 500.0))
            .build()
            .unwrap();
        let b = RecordLayout::builder()
            .field(FieldDef::constant("rpm", FieldEncoding::Int16Le, 500.0))
            .build()
            .unwrap();
        assert_ne!(layout_hash(&a), layout_hash(&b));
    }

    #[test]
    fn hash_depends_on_encoding() {
        let a = RecordLayout::builder()
            .field(FieldDef::constant("speed", FieldEncoding::Int16Le, 500.0))
            .build()
            .unwrap();
        let b = RecordLayout::builder()
            .field(FieldDef::constant("speed", FieldEncoding::Float32Le, 500.0))
            .build()
            .unwrap();
        assert_ne!(layout_hash(&a), layout_hash(&b));
    }

    #[test]
    fn hash_depends_on_constant_value() {
        let a = RecordLayout::builder()
            .field(FieldDef::constant("temp", FieldEncoding::Float32Le, 80.0))
            .build()
            .unwrap();
        let b = RecordLayout::builder()
            .field(FieldDef::constant("temp", FieldEncoding::Float32Le, 25.0))
            .build()
            .unwrap();
        assert_ne!(layout_hash(&a), layout_hash(&b));
    }

    #[test]
    fn hash_depends_on_wrap_bound() {
        let field = || {
            FieldDef::new(
                "id",
                FieldEncoding::Int16Le,
                crate::FieldSource::DirectCurrent,
            )
        };
        let unbounded = RecordLayout::new(vec![field()], None).unwrap();
        let bounded = RecordLayout::new(vec![field()], Some(1000)).unwrap();
        assert_ne!(layout_hash(&unbounded), layout_hash(&bounded));
    }
}
