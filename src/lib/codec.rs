use super::error::Result;
use geo_types::Geometry;
use geozero::wkb::Wkb;
use geozero::wkt::Wkt;
use geozero::{CoordDimensions, ToGeo, ToWkb, ToWkt};

/// Encoder producing the expected values of a fixture.
///
/// Whatever an implementation returns ends up verbatim in the fixture; no
/// validation happens on this side.
pub trait Codec {
    fn to_wkb(&self, geometry: &Geometry<f64>) -> Result<Vec<u8>>;
    fn to_wkt(&self, geometry: &Geometry<f64>) -> Result<String>;
}

/// Two dimensional little endian WKB and WKT as written by geozero.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeozeroCodec;

impl Codec for GeozeroCodec {
    fn to_wkb(&self, geometry: &Geometry<f64>) -> Result<Vec<u8>> {
        Ok(geometry.to_wkb(CoordDimensions::xy())?)
    }

    fn to_wkt(&self, geometry: &Geometry<f64>) -> Result<String> {
        Ok(geometry.to_wkt()?)
    }
}

impl GeozeroCodec {
    pub fn read_wkb(&self, wkb: &[u8]) -> Result<Geometry<f64>> {
        Ok(Wkb(wkb.to_vec()).to_geo()?)
    }

    pub fn read_wkt(&self, wkt: &str) -> Result<Geometry<f64>> {
        Ok(Wkt(wkt).to_geo()?)
    }
}
