use super::random::RandomSource;
use geo_types::{
    Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use std::fmt;

/// Inclusive bounds of the number of points in a line string.
pub const LINE_STRING_POINTS: (usize, usize) = (2, 8);
/// Inclusive bounds of the number of points drawn for a polygon ring.
pub const RING_POINTS: (usize, usize) = (3, 8);
/// Inclusive bounds of the number of holes in a polygon.
pub const INTERIOR_RINGS: (usize, usize) = (0, 4);
/// Inclusive bounds of the number of members in a multi geometry.
pub const MEMBERS: (usize, usize) = (1, 8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryKind {
    /// Emission order of a fixture.
    pub const ALL: [GeometryKind; 6] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
        }
    }

    pub fn of(geometry: &Geometry<f64>) -> Option<Self> {
        match geometry {
            Geometry::Point(_) => Some(GeometryKind::Point),
            Geometry::LineString(_) => Some(GeometryKind::LineString),
            Geometry::Polygon(_) => Some(GeometryKind::Polygon),
            Geometry::MultiPoint(_) => Some(GeometryKind::MultiPoint),
            Geometry::MultiLineString(_) => Some(GeometryKind::MultiLineString),
            Geometry::MultiPolygon(_) => Some(GeometryKind::MultiPolygon),
            _ => None,
        }
    }

    /// Draws a fresh random geometry of this kind.
    pub fn synthesize(self, source: &mut RandomSource) -> Geometry<f64> {
        match self {
            GeometryKind::Point => RandomPoint::random(source).into(),
            GeometryKind::LineString => RandomLineString::random(source).into(),
            GeometryKind::Polygon => RandomPolygon::random(source).into(),
            GeometryKind::MultiPoint => RandomMultiPoint::random(source).into(),
            GeometryKind::MultiLineString => RandomMultiLineString::random(source).into(),
            GeometryKind::MultiPolygon => RandomMultiPolygon::random(source).into(),
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn draw_count(source: &mut RandomSource, bounds: (usize, usize)) -> usize {
    source.count(bounds.0, bounds.1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomPoint(pub Point<f64>);

impl RandomPoint {
    pub fn random(source: &mut RandomSource) -> Self {
        Self::from_coord(source.coord())
    }

    pub fn from_coord(coord: Coord<f64>) -> Self {
        RandomPoint(coord.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomLineString(pub LineString<f64>);

impl RandomLineString {
    pub fn random(source: &mut RandomSource) -> Self {
        let n = draw_count(source, LINE_STRING_POINTS);
        Self::from_coords(source.coords(n))
    }

    pub fn from_coords(coords: Vec<Coord<f64>>) -> Self {
        assert!(
            coords.len() >= LINE_STRING_POINTS.0,
            "line string needs at least {} points, got {}",
            LINE_STRING_POINTS.0,
            coords.len()
        );
        RandomLineString(LineString::from(coords))
    }
}

/// A polygon whose rings are random point clouds. Rings are neither simple
/// nor oriented; `Polygon::new` only closes them.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomPolygon(pub Polygon<f64>);

impl RandomPolygon {
    pub fn random(source: &mut RandomSource) -> Self {
        let n = draw_count(source, RING_POINTS);
        let mut rings = vec![LineString::from(source.coords(n))];
        let holes = draw_count(source, INTERIOR_RINGS);
        for _ in 0..holes {
            let n = draw_count(source, RING_POINTS);
            rings.push(LineString::from(source.coords(n)));
        }
        Self::from_rings(rings)
    }

    /// Exterior ring first, interior rings following in order.
    pub fn from_rings(mut rings: Vec<LineString<f64>>) -> Self {
        assert!(!rings.is_empty(), "polygon without exterior ring");
        let interiors = rings.split_off(1);
        let exterior = rings.remove(0);
        for ring in std::iter::once(&exterior).chain(&interiors) {
            assert!(
                ring.0.len() >= RING_POINTS.0,
                "ring needs at least {} points, got {}",
                RING_POINTS.0,
                ring.0.len()
            );
        }
        RandomPolygon(Polygon::new(exterior, interiors))
    }

    /// Rings of a polygon in the order `from_rings` expects.
    pub fn rings(polygon: &Polygon<f64>) -> Vec<LineString<f64>> {
        std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomMultiPoint(pub MultiPoint<f64>);

impl RandomMultiPoint {
    pub fn random(source: &mut RandomSource) -> Self {
        let n = draw_count(source, MEMBERS);
        let points = (0..n).map(|_| RandomPoint::random(source).0).collect();
        Self::from_points(points)
    }

    pub fn from_points(points: Vec<Point<f64>>) -> Self {
        assert!(!points.is_empty(), "multi point without members");
        RandomMultiPoint(MultiPoint(points))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomMultiLineString(pub MultiLineString<f64>);

impl RandomMultiLineString {
    pub fn random(source: &mut RandomSource) -> Self {
        let n = draw_count(source, MEMBERS);
        let line_strings = (0..n)
            .map(|_| RandomLineString::random(source).0)
            .collect();
        Self::from_line_strings(line_strings)
    }

    pub fn from_line_strings(line_strings: Vec<LineString<f64>>) -> Self {
        assert!(!line_strings.is_empty(), "multi line string without members");
        RandomMultiLineString(MultiLineString(line_strings))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomMultiPolygon(pub MultiPolygon<f64>);

impl RandomMultiPolygon {
    pub fn random(source: &mut RandomSource) -> Self {
        let n = draw_count(source, MEMBERS);
        let polygons = (0..n).map(|_| RandomPolygon::random(source).0).collect();
        Self::from_polygons(polygons)
    }

    pub fn from_polygons(polygons: Vec<Polygon<f64>>) -> Self {
        assert!(!polygons.is_empty(), "multi polygon without members");
        RandomMultiPolygon(MultiPolygon(polygons))
    }
}

macro_rules! into_geometry {
    ($($wrapper:ident => $variant:ident),*) => {
        $(
            impl From<$wrapper> for Geometry<f64> {
                fn from(wrapper: $wrapper) -> Self {
                    Geometry::$variant(wrapper.0)
                }
            }
        )*
    };
}

into_geometry!(
    RandomPoint => Point,
    RandomLineString => LineString,
    RandomPolygon => Polygon,
    RandomMultiPoint => MultiPoint,
    RandomMultiLineString => MultiLineString,
    RandomMultiPolygon => MultiPolygon
);
