use upright_common::exif::{ByteOrder, Tag};
use upright_common::orientation::Orientation;
use upright_exif::error::Error;
use upright_exif::internal::*;
use upright_exif::Exif;

/// TIFF data with a single IFD
///
/// Entries are given as tag, type, count, and value. Values are written
/// like a writer would for a SHORT with count 1.
fn data(byte_order: ByteOrder, entries: &[(u16, u16, u32, u16)]) -> Vec<u8> {
    let u16_bytes = |x: u16| match byte_order {
        ByteOrder::LittleEndian => x.to_le_bytes(),
        ByteOrder::BigEndian => x.to_be_bytes(),
    };
    let u32_bytes = |x: u32| match byte_order {
        ByteOrder::LittleEndian => x.to_le_bytes(),
        ByteOrder::BigEndian => x.to_be_bytes(),
    };

    let mut data = Vec::new();

    // Byte order
    data.extend_from_slice(match byte_order {
        ByteOrder::LittleEndian => b"II",
        ByteOrder::BigEndian => b"MM",
    });
    // Magic bits
    data.extend_from_slice(&u16_bytes(42));
    // Offset
    data.extend_from_slice(&u32_bytes(8));
    // Number entries
    data.extend_from_slice(&u16_bytes(entries.len().try_into().unwrap()));

    for (tag, data_type, count, value) in entries {
        data.extend_from_slice(&u16_bytes(*tag));
        data.extend_from_slice(&u16_bytes(*data_type));
        data.extend_from_slice(&u32_bytes(*count));
        // SHORT is left aligned in the value field
        data.extend_from_slice(&u16_bytes(*value));
        data.extend_from_slice(&[0, 0]);
    }

    // Next offset
    data.extend_from_slice(&[0, 0, 0, 0]);

    data
}

fn orientation_data(byte_order: ByteOrder, value: u16) -> Vec<u8> {
    data(
        byte_order,
        &[(0x010F, 2, 6, 0), (0x0112, 3, 1, value), (0x011A, 5, 1, 0)],
    )
}

#[test]
fn basic_low_level() {
    let data = orientation_data(ByteOrder::LittleEndian, 7);
    let decoder = ExifRaw::new(&data).unwrap();

    assert_eq!(decoder.byte_order(), ByteOrder::LittleEndian);
    assert_eq!(decoder.ifd_offset, 8);
    assert_eq!(decoder.n_entries, 3);

    let entry = decoder.lookup_entry(Tag::ORIENTATION).unwrap().unwrap();
    assert_eq!(entry.position, 10 + 12);
    assert_eq!(entry.data_type, Type::Short);
    assert_eq!(entry.count, 1);
    assert_eq!(entry.value_offset, [7, 0, 0, 0]);
    assert!(entry.is_single_short());
    assert_eq!(entry.short(), 7);

    assert_eq!(decoder.lookup_short(Tag::ORIENTATION).unwrap(), Some(7));
    assert_eq!(decoder.lookup_short(Tag(0x0131)).unwrap(), None);

    let tags = decoder
        .entries()
        .map(|x| x.unwrap().tag)
        .collect::<Vec<_>>();
    assert_eq!(tags, vec![Tag(0x010F), Tag(0x0112), Tag(0x011A)]);
}

#[test]
fn basic_high_level() {
    let data = orientation_data(ByteOrder::LittleEndian, 7);
    let exif = Exif::new(&data).unwrap();
    assert_eq!(exif.orientation(), Orientation::MirroredRotation270);
}

#[test]
fn big_endian() {
    let data = orientation_data(ByteOrder::BigEndian, 6);
    let exif = Exif::new(&data).unwrap();

    assert_eq!(exif.raw().byte_order(), ByteOrder::BigEndian);
    let entry = exif.raw().lookup_entry(Tag::ORIENTATION).unwrap().unwrap();
    assert_eq!(entry.value_offset, [0, 6, 0, 0]);
    assert_eq!(exif.orientation(), Orientation::Rotation270);
}

#[test]
fn both_byte_orders_agree() {
    for value in 0..=10 {
        let le = orientation_data(ByteOrder::LittleEndian, value);
        let be = orientation_data(ByteOrder::BigEndian, value);

        let le = Exif::new(&le).unwrap().orientation();
        let be = Exif::new(&be).unwrap().orientation();

        assert_eq!(le, be);
        if (1..=8).contains(&value) {
            assert_eq!(le.exif_code(), value);
        } else {
            assert_eq!(le, Orientation::Id);
        }
    }
}

#[test]
fn first_entry_wins() {
    let data = data(
        ByteOrder::LittleEndian,
        &[(0x0112, 3, 1, 3), (0x0112, 3, 1, 8)],
    );
    let exif = Exif::new(&data).unwrap();
    assert_eq!(exif.orientation(), Orientation::Rotation180);
}

#[test]
fn invalid_first_entry_wins() {
    let data = data(
        ByteOrder::LittleEndian,
        &[(0x0112, 3, 1, 9), (0x0112, 3, 1, 8)],
    );
    let exif = Exif::new(&data).unwrap();
    assert_eq!(exif.orientation(), Orientation::Id);
}

#[test]
fn non_conforming_type_is_read() {
    // LONG instead of SHORT, value still in the first two bytes
    let data = data(ByteOrder::BigEndian, &[(0x0112, 4, 1, 5)]);
    let exif = Exif::new(&data).unwrap();

    let entry = exif.raw().lookup_entry(Tag::ORIENTATION).unwrap().unwrap();
    assert!(!entry.is_single_short());
    assert_eq!(entry.data_type, Type::Long);
    assert_eq!(exif.orientation(), Orientation::MirroredRotation90);
}

#[test]
fn missing_tag() {
    let other_tag = data(ByteOrder::LittleEndian, &[(0x010F, 2, 6, 0)]);
    let exif = Exif::new(&other_tag).unwrap();
    assert_eq!(exif.orientation(), Orientation::Id);

    let empty_ifd = data(ByteOrder::LittleEndian, &[]);
    let exif = Exif::new(&empty_ifd).unwrap();
    assert_eq!(exif.raw().entries().count(), 0);
    assert_eq!(exif.orientation(), Orientation::Id);
}

#[test]
fn header_errors() {
    assert!(matches!(ExifRaw::new(b""), Err(Error::HeaderEof(0))));
    assert!(matches!(ExifRaw::new(b"II*\0\x08"), Err(Error::HeaderEof(5))));
    assert!(matches!(
        ExifRaw::new(b"XX*\0\x08\0\0\0\0\0"),
        Err(Error::UnknownByteOrder([b'X', b'X']))
    ));
    // Magic in the wrong byte order
    assert!(matches!(
        ExifRaw::new(b"II\0*\x08\0\0\0\0\0"),
        Err(Error::MagicBytesWrong(0x2A00))
    ));
    assert!(matches!(
        ExifRaw::new(b"MM\0\x2B\0\0\0\x08\0\0"),
        Err(Error::MagicBytesWrong(43))
    ));
}

#[test]
fn ifd_offset_errors() {
    // Offset points to the last byte
    assert!(matches!(
        ExifRaw::new(b"II*\0\x08\0\0\0\0"),
        Err(Error::IfdOffsetInvalid(8))
    ));
    assert!(matches!(
        ExifRaw::new(b"II*\0\xFF\xFF\xFF\xFF\0\0"),
        Err(Error::IfdOffsetInvalid(u32::MAX))
    ));
}

#[test]
fn entry_exceeds_data() {
    let mut data = data(
        ByteOrder::LittleEndian,
        &[(0x010F, 2, 6, 0), (0x0112, 3, 1, 6)],
    );
    // Cut into the orientation entry
    data.truncate(10 + 12 + 11);

    let decoder = ExifRaw::new(&data).unwrap();
    let entries = decoder.entries().collect::<Vec<_>>();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_ok());
    assert!(matches!(entries[1], Err(Error::EntryEof(1))));

    assert!(matches!(
        decoder.lookup_entry(Tag::ORIENTATION),
        Err(Error::EntryEof(1))
    ));
    assert_eq!(Exif::new(&data).unwrap().orientation(), Orientation::Id);
}

#[test]
fn entry_count_exceeds_data() {
    let mut data = data(ByteOrder::BigEndian, &[(0x0112, 3, 1, 8)]);
    // Claim more entries than present, the first one is still found
    data[9] = 200;

    let exif = Exif::new(&data).unwrap();
    assert_eq!(exif.raw().n_entries, 200);
    assert_eq!(exif.orientation(), Orientation::Rotation90);
    assert!(exif.raw().entries().last().unwrap().is_err());
}

#[test]
fn from_jpeg() {
    let tiff = orientation_data(ByteOrder::BigEndian, 3);

    let mut app1 = upright_jpeg::EXIF_IDENTIFIER_STRING.to_vec();
    app1.extend_from_slice(&tiff);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&u16::try_from(app1.len() + 2).unwrap().to_be_bytes());
    jpeg.extend_from_slice(&app1);
    jpeg.extend_from_slice(&[0xFF, 0xD9, 0, 0]);

    let jpeg = upright_jpeg::Jpeg::new(&jpeg).unwrap();
    let exif_data = jpeg.exif_data().unwrap().unwrap();
    assert_eq!(exif_data, tiff.as_slice());

    let exif = Exif::new(exif_data).unwrap();
    assert_eq!(exif.orientation(), Orientation::Rotation180);
}
