use bytestream::{ByteReader, ByteWriter};

#[test]
fn writer_roundtrip_record_shape() {
    // One basic-layout-shaped record: four i16 fields.
    let mut writer = ByteWriter::with_capacity(8);
    writer.write_i16_le(0);
    writer.write_i16_le(7);
    writer.write_i16_le(500);
    writer.write_i16_le(77);
    let bytes = writer.finish();
    assert_eq!(bytes.len(), 8);

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_i16_le().unwrap(), 0);
    assert_eq!(reader.read_i16_le().unwrap(), 7);
    assert_eq!(reader.read_i16_le().unwrap(), 500);
    assert_eq!(reader.read_i16_le().unwrap(), 77);
    assert!(reader.is_empty());
}

#[test]
fn writer_roundtrip_float_record_shape() {
    // One extended-layout-shaped record: nine f32 fields.
    let values = [0.0f32, 0.0, 500.0, 0.0, 0.01, 0.02, 0.001, 0.003, 80.0];
    let mut writer = ByteWriter::with_capacity(36);
    for value in values {
        writer.write_f32_le(value);
    }
    let bytes = writer.finish();
    assert_eq!(bytes.len(), 36);

    let mut reader = ByteReader::new(&bytes);
    for value in values {
        assert_eq!(reader.read_f32_le().unwrap().to_bits(), value.to_bits());
    }
    assert!(reader.is_empty());
}

#[test]
fn clear_reuses_buffer_across_records() {
    let mut writer = ByteWriter::with_capacity(4);
    let mut out = Vec::new();

    for record in 0..3i16 {
        writer.clear();
        writer.write_i16_le(record);
        writer.write_i16_le(record * 2);
        out.extend_from_slice(writer.as_bytes());
    }
    assert_eq!(out.len(), 12);

    let mut reader = ByteReader::new(&out);
    for record in 0..3i16 {
        assert_eq!(reader.read_i16_le().unwrap(), record);
        assert_eq!(reader.read_i16_le().unwrap(), record * 2);
    }
}
