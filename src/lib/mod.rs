use self::geo::Extent;
use codec::Codec;
use config::FixtureConfig;
use error::Result;
use items::TestCase;
use log::{debug, info};
use output::Output;
use random::RandomSource;
use shapes::GeometryKind;
use std::io::Write;

pub mod codec;
pub mod config;
pub mod error;
pub mod geo;
pub mod items;
pub mod output;
pub mod random;
pub mod render;
pub mod shapes;

/// Generate the fixture table.
///
/// One random source is seeded from `config.seed` and consumed in order:
/// `config.count_per_kind` geometries for every kind in
/// [`GeometryKind::ALL`](shapes::GeometryKind::ALL). Each geometry is encoded
/// right away, the first codec error aborts the run.
///
/// # Example
///
/// ```
/// use geom_fixtures::codec::GeozeroCodec;
/// use geom_fixtures::config::FixtureConfig;
/// use geom_fixtures::generate;
///
/// let cases = generate(&FixtureConfig::default(), &GeozeroCodec).unwrap();
/// assert_eq!(cases.len(), 48);
/// ```
pub fn generate(config: &FixtureConfig, codec: &dyn Codec) -> Result<Vec<TestCase>> {
    let mut source = RandomSource::new(config);
    let mut cases = Vec::with_capacity(GeometryKind::ALL.len() * config.count_per_kind);
    for &kind in GeometryKind::ALL.iter() {
        for i in 0..config.count_per_kind {
            let geometry = kind.synthesize(&mut source);
            let case = TestCase::new(kind, geometry, codec)?;
            debug!(
                "{} #{}: {} coordinates, {} WKB bytes",
                kind,
                i,
                case.geometry.coordinate_count(),
                case.wkb.len()
            );
            cases.push(case);
        }
    }
    Ok(cases)
}

/// Generate the fixture and write it as Rust source to `writer`.
pub fn process(config: &FixtureConfig, codec: &dyn Codec, writer: &mut dyn Write) -> Result<()> {
    info!(
        "generating {} cases per kind with seed {}",
        config.count_per_kind, config.seed
    );
    let cases = generate(config, codec)?;
    cases.write_fixture(writer)?;
    writer.flush()?;
    info!("wrote {} cases", cases.len());
    Ok(())
}

#[cfg(test)]
mod test_helpers;
