use super::error::Result;
use super::items::TestCase;
use itertools::Itertools;
use std::io::Write;

pub trait Output {
    fn write_fixture(&self, writer: &mut dyn Write) -> Result<()>;
}

const HEADER: &str = "\
// Code generated by geom_fixtures. DO NOT EDIT.

//! Random geometries with their WKB, hex WKB and WKT encodings.

use geo_types::{
    Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

pub struct Case {
    pub g: Geometry<f64>,
    pub hex: &'static str,
    pub wkb: &'static [u8],
    pub wkt: &'static str,
}
";

/// `b"..."` literal with every byte escaped as `\xHH`.
fn byte_string(bytes: &[u8]) -> String {
    let escaped = bytes.iter().map(|b| format!("\\x{:02X}", b)).join("");
    format!("b\"{}\"", escaped)
}

/// WKT as a Rust string literal.
fn string(value: &str) -> String {
    format!("{:?}", value)
}

impl Output for Vec<TestCase> {
    fn write_fixture(&self, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "{}", HEADER)?;
        writeln!(writer, "#[rustfmt::skip]")?;
        writeln!(writer, "pub fn cases() -> Vec<Case> {{")?;
        writeln!(writer, "    vec![")?;
        for case in self.iter() {
            writeln!(writer, "        Case {{")?;
            writeln!(writer, "            g: {},", case.literal)?;
            writeln!(writer, "            hex: {},", string(&case.hex))?;
            writeln!(writer, "            wkb: {},", byte_string(&case.wkb))?;
            writeln!(writer, "            wkt: {},", string(&case.wkt))?;
            writeln!(writer, "        }},")?;
        }
        writeln!(writer, "    ]")?;
        writeln!(writer, "}}")?;
        Ok(())
    }
}
