//! The NaN encoding of the empty point.

use std::io::{Cursor, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::Result;
use crate::io::wkb::common::{Endianness, WKBType, EWKB_SRID_FLAG};

/// The byte length of a WKB point with `dim` ordinates.
pub fn point_wkb_size(dim: usize) -> usize {
    let header = 1 + 4;
    let coords = dim * 8;
    header + coords
}

/// Write the empty point: a little-endian 2D point at (NaN, NaN).
pub fn write_empty_point_as_wkb<W: Write>(mut writer: W) -> Result<()> {
    writer.write_u8(Endianness::LittleEndian.into())?;
    writer.write_u32::<LittleEndian>(WKBType::Point.into())?;
    writer.write_f64::<LittleEndian>(f64::NAN)?;
    writer.write_f64::<LittleEndian>(f64::NAN)?;
    Ok(())
}

/// Whether `buf` is a single point whose ordinates are all NaN.
///
/// Extended WKB with an SRID is recognized too; the SRID is ignored.
pub fn is_nan_point(buf: &[u8]) -> bool {
    let Some(&order) = buf.first() else {
        return false;
    };
    match Endianness::try_from(order) {
        Ok(Endianness::LittleEndian) => is_nan_point_with::<LittleEndian>(buf),
        Ok(Endianness::BigEndian) => is_nan_point_with::<BigEndian>(buf),
        Err(_) => false,
    }
}

fn is_nan_point_with<B: ByteOrder>(buf: &[u8]) -> bool {
    let mut reader = Cursor::new(buf);
    reader.set_position(1);
    let Ok(type_code) = reader.read_u32::<B>() else {
        return false;
    };
    let Ok(wkb_type) = WKBType::try_from(type_code & !EWKB_SRID_FLAG) else {
        return false;
    };

    let mut expected = point_wkb_size(wkb_type.ordinates());
    if type_code & EWKB_SRID_FLAG != 0 {
        if reader.read_u32::<B>().is_err() {
            return false;
        }
        expected += 4;
    }
    if buf.len() != expected {
        return false;
    }

    let ordinates = wkb_type.ordinates();
    (0..ordinates).all(|_| matches!(reader.read_f64::<B>(), Ok(value) if value.is_nan()))
}
