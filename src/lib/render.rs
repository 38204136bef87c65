//! Renders geometries as `geo-types` construction expressions.
//!
//! Coordinates use the shortest representation that parses back to the same
//! `f64` (`{:?}`), which is always a valid float literal. Ring, point and
//! member order is preserved.

use super::error::{FixtureError, Result};
use super::shapes::{
    RandomLineString, RandomMultiLineString, RandomMultiPoint, RandomMultiPolygon, RandomPoint,
    RandomPolygon,
};
use geo_types::{Coord, Geometry, LineString};
use itertools::Itertools;

pub trait Literal {
    /// Expression constructing the bare geometry, e.g. `Point::new(0.5, 1.0)`.
    fn literal(&self) -> String;
}

fn coord_pair(coord: &Coord<f64>) -> String {
    format!("({:?}, {:?})", coord.x, coord.y)
}

fn line_string_literal(line_string: &LineString<f64>) -> String {
    format!(
        "LineString::from(vec![{}])",
        line_string.0.iter().map(coord_pair).join(", ")
    )
}

impl Literal for RandomPoint {
    fn literal(&self) -> String {
        format!("Point::new({:?}, {:?})", self.0.x(), self.0.y())
    }
}

impl Literal for RandomLineString {
    fn literal(&self) -> String {
        line_string_literal(&self.0)
    }
}

impl Literal for RandomPolygon {
    fn literal(&self) -> String {
        let interiors = self.0.interiors().iter().map(line_string_literal).join(", ");
        format!(
            "Polygon::new({}, vec![{}])",
            line_string_literal(self.0.exterior()),
            interiors
        )
    }
}

impl Literal for RandomMultiPoint {
    fn literal(&self) -> String {
        let points = (self.0)
            .0
            .iter()
            .map(|point| RandomPoint::from_coord(point.0).literal())
            .join(", ");
        format!("MultiPoint(vec![{}])", points)
    }
}

impl Literal for RandomMultiLineString {
    fn literal(&self) -> String {
        let line_strings = (self.0)
            .0
            .iter()
            .map(|line_string| RandomLineString::from_coords(line_string.0.clone()).literal())
            .join(", ");
        format!("MultiLineString(vec![{}])", line_strings)
    }
}

impl Literal for RandomMultiPolygon {
    fn literal(&self) -> String {
        let polygons = (self.0)
            .0
            .iter()
            .map(|polygon| RandomPolygon::from_rings(RandomPolygon::rings(polygon)).literal())
            .join(", ");
        format!("MultiPolygon(vec![{}])", polygons)
    }
}

/// Renders a top level geometry wrapped in its `Geometry` variant.
///
/// The geometry's coordinates are re-wrapped without drawing anything new.
pub fn geometry_literal(geometry: &Geometry<f64>) -> Result<String> {
    let (variant, inner) = match geometry {
        Geometry::Point(p) => ("Point", RandomPoint::from_coord(p.0).literal()),
        Geometry::LineString(ls) => (
            "LineString",
            RandomLineString::from_coords(ls.0.clone()).literal(),
        ),
        Geometry::Polygon(p) => (
            "Polygon",
            RandomPolygon::from_rings(RandomPolygon::rings(p)).literal(),
        ),
        Geometry::MultiPoint(mp) => (
            "MultiPoint",
            RandomMultiPoint::from_points(mp.0.clone()).literal(),
        ),
        Geometry::MultiLineString(mls) => (
            "MultiLineString",
            RandomMultiLineString::from_line_strings(mls.0.clone()).literal(),
        ),
        Geometry::MultiPolygon(mp) => (
            "MultiPolygon",
            RandomMultiPolygon::from_polygons(mp.0.clone()).literal(),
        ),
        _ => return Err(FixtureError::Unsupported(format!("{:?}", geometry))),
    };
    Ok(format!("Geometry::{}({})", variant, inner))
}
