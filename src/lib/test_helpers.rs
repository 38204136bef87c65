use super::codec::{Codec, GeozeroCodec};
use super::config::FixtureConfig;
use super::error::{FixtureError, Result};
use super::generate;
use super::items::TestCase;
use geo_types::Geometry;
use geozero::error::GeozeroError;

pub struct FailingCodec;

impl Codec for FailingCodec {
    fn to_wkb(&self, _geometry: &Geometry<f64>) -> Result<Vec<u8>> {
        let error = GeozeroError::Geometry("refusing to encode".to_string());
        Err(FixtureError::Codec(error))
    }

    fn to_wkt(&self, _geometry: &Geometry<f64>) -> Result<String> {
        Ok(String::new())
    }
}

pub fn failing_codec() -> FailingCodec {
    FailingCodec
}

/// The default fixture, as emitted by the binary.
pub fn fixture() -> Vec<TestCase> {
    generate(&FixtureConfig::default(), &GeozeroCodec).unwrap()
}
