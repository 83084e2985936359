use arrow_array::BinaryArray;
use geos::{ByteOrder, OutputDimension, WKBWriter};
use tracing::debug;

use crate::array::GeometryArray;
use crate::error::{GeoshapeError, Result};
use crate::geometry::Geometry;
use crate::io::wkb::point::{is_nan_point, point_wkb_size, write_empty_point_as_wkb};
use crate::kind::GeometryKind;

/// Encode a geometry as little-endian WKB, keeping Z when present.
pub fn to_wkb(geom: &Geometry) -> Result<Vec<u8>> {
    if geom.kind() == GeometryKind::Point && geom.is_empty() {
        let mut buf = Vec::with_capacity(point_wkb_size(2));
        write_empty_point_as_wkb(&mut buf)?;
        return Ok(buf);
    }

    let mut writer = WKBWriter::new()?;
    writer.set_wkb_byte_order(ByteOrder::LittleEndian);
    writer.set_output_dimension(OutputDimension::ThreeD);
    let buf = writer.write_wkb(geom.native())?;
    let bytes: &[u8] = buf.as_ref();
    Ok(bytes.to_vec())
}

/// Decode one WKB geometry.
pub fn from_wkb(buf: &[u8]) -> Result<Geometry> {
    if is_nan_point(buf) {
        return Geometry::empty(GeometryKind::Point);
    }

    let native = geos::Geometry::new_from_wkb(buf).map_err(|err| {
        debug!(len = buf.len(), "rejected WKB input");
        GeoshapeError::Codec(format!("Invalid WKB: {err}"))
    })?;
    Geometry::from_native(native).map_err(into_codec_error)
}

/// Geometries the registry cannot represent are malformed input from the caller's side.
fn into_codec_error(err: GeoshapeError) -> GeoshapeError {
    match err {
        GeoshapeError::Construction(message) => {
            GeoshapeError::Codec(format!("Unsupported WKB geometry: {message}"))
        }
        other => other,
    }
}

/// Encode every element, in row-major order. Missing elements become nulls.
pub fn to_wkb_array(arr: &GeometryArray) -> Result<BinaryArray> {
    let values = arr
        .iter()
        .map(|geom| geom.map(to_wkb).transpose())
        .collect::<Result<Vec<_>>>()?;
    Ok(values.into_iter().collect())
}

/// Decode a one-dimensional array. Nulls become missing elements.
pub fn from_wkb_array(arr: &BinaryArray) -> Result<GeometryArray> {
    let values = arr
        .iter()
        .map(|buf| buf.map(from_wkb).transpose())
        .collect::<Result<Vec<_>>>()?;
    Ok(GeometryArray::from_vec(values))
}

impl Geometry {
    /// See [`to_wkb`].
    pub fn to_wkb(&self) -> Result<Vec<u8>> {
        to_wkb(self)
    }

    /// See [`from_wkb`].
    pub fn from_wkb(buf: &[u8]) -> Result<Self> {
        from_wkb(buf)
    }
}

#[cfg(test)]
mod test {
    use arrow_array::Array;

    use super::*;
    use crate::test::{
        empty_of_each_kind, geometry_of_each_kind, geometry_z_of_each_kind, point_array,
    };

    #[test]
    fn round_trip_every_kind() {
        for geom in geometry_of_each_kind()
            .into_iter()
            .chain(geometry_z_of_each_kind())
            .chain(empty_of_each_kind())
        {
            let decoded = from_wkb(&to_wkb(&geom).unwrap()).unwrap();
            // WKB has no ring type: rings come back as line strings.
            if geom.kind() == GeometryKind::LinearRing {
                assert_eq!(decoded.kind(), GeometryKind::LineString);
                assert_eq!(decoded.is_empty(), geom.is_empty());
                if let Geometry::LinearRing(ring) = &geom {
                    let line = decoded.as_line_string().unwrap();
                    assert_eq!(line.coords().unwrap(), ring.coords().unwrap());
                }
            } else {
                assert_eq!(decoded, geom, "{geom:?}");
            }
        }
    }

    #[test]
    fn empty_point_bytes() {
        let empty = Geometry::empty(GeometryKind::Point).unwrap();
        let buf = empty.to_wkb().unwrap();
        assert_eq!(
            buf,
            [
                0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x7F,
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x7F,
            ]
        );
        let decoded = Geometry::from_wkb(&buf).unwrap();
        assert_eq!(decoded.kind(), GeometryKind::Point);
        assert!(decoded.is_empty());
    }

    #[test]
    fn z_is_kept() {
        let point = Geometry::point_z(1., 2., 3.).unwrap();
        let decoded = from_wkb(&point.to_wkb().unwrap()).unwrap();
        assert_eq!(decoded.as_point().unwrap().z().unwrap(), Some(3.));

        for geom in geometry_z_of_each_kind() {
            assert!(from_wkb(&geom.to_wkb().unwrap()).unwrap().has_z(), "{geom}");
        }
    }

    #[test]
    fn malformed() {
        let result = from_wkb(&[0x01, 0x03, 0x00]);
        assert!(matches!(result, Err(GeoshapeError::Codec(_))));
    }

    #[test]
    fn unsupported_kind_is_a_codec_error() {
        let err = into_codec_error(GeoshapeError::Construction("CircularString".to_string()));
        assert!(
            matches!(err, GeoshapeError::Codec(message) if message.contains("CircularString"))
        );
        let err = into_codec_error(GeoshapeError::InvalidArgument("x".to_string()));
        assert!(matches!(err, GeoshapeError::InvalidArgument(_)));
    }

    #[test]
    fn ewkb_empty_point_with_srid() {
        let mut buf = vec![0x01, 0x01, 0x00, 0x00, 0x20, 0xE6, 0x10, 0x00, 0x00];
        buf.extend_from_slice(&f64::NAN.to_le_bytes());
        buf.extend_from_slice(&f64::NAN.to_le_bytes());
        let decoded = from_wkb(&buf).unwrap();
        assert_eq!(decoded.kind(), GeometryKind::Point);
        assert!(decoded.is_empty());
    }

    #[test]
    fn bulk() {
        let mut values: Vec<_> = point_array().iter().map(|g| g.cloned()).collect();
        values.insert(1, None);
        let arr = GeometryArray::from_vec(values);

        let encoded = to_wkb_array(&arr).unwrap();
        assert_eq!(encoded.len(), 4);
        assert_eq!(encoded.null_count(), 1);

        let decoded = from_wkb_array(&encoded).unwrap();
        assert_eq!(decoded, arr);
    }
}
