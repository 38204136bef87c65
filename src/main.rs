use geom_fixtures::codec::GeozeroCodec;
use geom_fixtures::config::FixtureConfig;
use geom_fixtures::process;
use std::error::Error;
use std::io::{self, BufWriter};
use structopt::StructOpt;

/// Print a Rust source file of random geometries with their WKB, hex WKB and
/// WKT encodings. Redirect the output into the test suite.
///
/// Seed and counts are fixed, so every run prints the same file.
#[derive(StructOpt, Debug)]
#[structopt(name = "geom_fixtures")]
struct Opt {}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let _opt = Opt::from_args();
    let config = FixtureConfig::default();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    process(&config, &GeozeroCodec, &mut writer)?;
    Ok(())
}
