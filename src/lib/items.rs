use super::codec::Codec;
use super::error::Result;
use super::render::geometry_literal;
use super::shapes::GeometryKind;
use geo_types::Geometry;

/// One row of a fixture: a geometry and what the codec made of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub kind: GeometryKind,
    pub geometry: Geometry<f64>,
    /// `geo-types` expression rebuilding `geometry`.
    pub literal: String,
    pub hex: String,
    pub wkb: Vec<u8>,
    pub wkt: String,
}

impl TestCase {
    pub fn new(kind: GeometryKind, geometry: Geometry<f64>, codec: &dyn Codec) -> Result<Self> {
        let wkb = codec.to_wkb(&geometry)?;
        let hex = hex::encode(&wkb);
        let wkt = codec.to_wkt(&geometry)?;
        let literal = geometry_literal(&geometry)?;
        Ok(TestCase {
            kind,
            geometry,
            literal,
            hex,
            wkb,
            wkt,
        })
    }
}
