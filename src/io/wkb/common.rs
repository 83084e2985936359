use num_enum::{IntoPrimitive, TryFromPrimitive};

/// WKB geometry type codes for points, in ISO and extended flavours.
#[derive(Clone, Copy, Debug, PartialEq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    Point = 1,
    PointZ = 1001,
    /// Extended WKB: the Z flag is the high bit of the type code.
    PointZFlagged = 0x8000_0001,
}

/// Extended WKB flag: an SRID follows the type code.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

impl WKBType {
    /// The number of ordinates per coordinate.
    pub fn ordinates(&self) -> usize {
        match self {
            WKBType::Point => 2,
            WKBType::PointZ | WKBType::PointZFlagged => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(other),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        match value {
            Endianness::BigEndian => 0,
            Endianness::LittleEndian => 1,
        }
    }
}
