//! Well-known text.

use arrow_array::StringArray;
use geos::{OutputDimension, WKTWriter};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::array::GeometryArray;
use crate::error::{GeoshapeError, Result};
use crate::geometry::Geometry;

/// Options for writing WKT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WktOptions {
    /// Number of decimal places. `None` writes the shortest exact representation.
    pub precision: Option<u32>,
}

/// Encode a geometry as WKT with default options.
pub fn to_wkt(geom: &Geometry) -> Result<String> {
    to_wkt_with_options(geom, &WktOptions::default())
}

/// Encode a geometry as WKT. Empty values are written as `<KIND> EMPTY`.
pub fn to_wkt_with_options(geom: &Geometry, options: &WktOptions) -> Result<String> {
    if geom.is_empty() {
        return Ok(format!("{} EMPTY", geom.kind().wkt_name()));
    }

    let mut writer = WKTWriter::new()?;
    writer.set_trim(true);
    writer.set_output_dimension(OutputDimension::ThreeD);
    if let Some(precision) = options.precision {
        writer.set_rounding_precision(precision);
    }
    Ok(writer.write(geom.native())?)
}

/// Decode one WKT geometry.
pub fn from_wkt(text: &str) -> Result<Geometry> {
    let native = geos::Geometry::new_from_wkt(text).map_err(|err| {
        debug!(len = text.len(), "rejected WKT input");
        GeoshapeError::Codec(format!("Invalid WKT: {err}"))
    })?;
    Geometry::from_native(native)
}

/// Encode every element, in row-major order. Missing elements become nulls.
pub fn to_wkt_array(arr: &GeometryArray) -> Result<StringArray> {
    let values = arr
        .iter()
        .map(|geom| geom.map(to_wkt).transpose())
        .collect::<Result<Vec<_>>>()?;
    Ok(values.into_iter().collect())
}

/// Decode a one-dimensional array. Nulls become missing elements.
pub fn from_wkt_array(arr: &StringArray) -> Result<GeometryArray> {
    let values = arr
        .iter()
        .map(|text| text.map(from_wkt).transpose())
        .collect::<Result<Vec<_>>>()?;
    Ok(GeometryArray::from_vec(values))
}

impl Geometry {
    /// See [`to_wkt`].
    pub fn to_wkt(&self) -> Result<String> {
        to_wkt(self)
    }

    pub fn to_wkt_with_options(&self, options: &WktOptions) -> Result<String> {
        to_wkt_with_options(self, options)
    }

    /// See [`from_wkt`].
    pub fn from_wkt(text: &str) -> Result<Self> {
        from_wkt(text)
    }
}

#[cfg(test)]
mod test {
    use arrow_array::Array;

    use super::*;
    use crate::kind::GeometryKind;
    use crate::test::{
        empty_of_each_kind, geometry_of_each_kind, geometry_z_of_each_kind, unit_square,
    };

    #[test]
    fn empties_name_their_kind() {
        let text: Vec<_> = empty_of_each_kind()
            .iter()
            .map(|geom| geom.to_wkt().unwrap())
            .collect();
        assert_eq!(
            text,
            vec![
                "POINT EMPTY",
                "LINESTRING EMPTY",
                "LINEARRING EMPTY",
                "POLYGON EMPTY",
                "MULTIPOINT EMPTY",
                "MULTILINESTRING EMPTY",
                "MULTIPOLYGON EMPTY",
                "GEOMETRYCOLLECTION EMPTY",
            ]
        );
    }

    #[test]
    fn round_trip_every_kind() {
        for geom in geometry_of_each_kind()
            .into_iter()
            .chain(empty_of_each_kind())
        {
            let decoded = from_wkt(&geom.to_wkt().unwrap()).unwrap();
            assert_eq!(decoded, geom, "{geom}");
        }
    }

    #[test]
    fn display_is_wkt() {
        let point = Geometry::point(1., 2.).unwrap();
        assert_eq!(point.to_string(), "POINT (1 2)");
        assert_eq!(format!("{point:?}"), "Geometry(POINT (1 2))");
    }

    #[test]
    fn precision() {
        let point = Geometry::point(1. / 3., 2.).unwrap();
        let options = WktOptions { precision: Some(2) };
        assert_eq!(point.to_wkt_with_options(&options).unwrap(), "POINT (0.33 2)");
    }

    #[test]
    fn z_round_trip() {
        for geom in geometry_z_of_each_kind() {
            let decoded = from_wkt(&geom.to_wkt().unwrap()).unwrap();
            assert!(decoded.has_z(), "{geom}");
            assert_eq!(decoded, geom, "{geom}");
        }
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            from_wkt("POLYGON ((0 0, 1 0"),
            Err(GeoshapeError::Codec(_))
        ));
    }

    #[test]
    fn bulk() {
        let arr = GeometryArray::from_vec(vec![Some(unit_square()), None]);
        let encoded = to_wkt_array(&arr).unwrap();
        assert_eq!(encoded.null_count(), 1);
        assert_eq!(encoded.value(0), "POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))");
        assert_eq!(from_wkt_array(&encoded).unwrap(), arr);
    }

    #[test]
    fn kind_names_parse_back() {
        for geom in empty_of_each_kind() {
            let text = geom.to_wkt().unwrap();
            let name = text.trim_end_matches(" EMPTY");
            assert_eq!(GeometryKind::from_wkt_name(name), Some(geom.kind()));
        }
    }
}
