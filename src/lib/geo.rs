use geo::{BoundingRect, CoordsIter};
use geo_types::Geometry;

#[derive(Debug, PartialEq)]
pub struct Bounds {
    pub e: f64,
    pub n: f64,
    pub s: f64,
    pub w: f64,
}

impl Bounds {
    /// Whether the bounds lie within `[-range, range]` on both axes.
    pub fn within(&self, range: f64) -> bool {
        [self.e, self.n, self.s, self.w]
            .iter()
            .all(|v| v.is_finite() && v.abs() <= range)
    }
}

pub trait Extent {
    fn bounds(&self) -> Option<Bounds>;
    fn coordinate_count(&self) -> usize;
}

impl Extent for Geometry<f64> {
    fn bounds(&self) -> Option<Bounds> {
        let rect = self.bounding_rect()?;
        Some(Bounds {
            e: rect.max().x,
            n: rect.max().y,
            s: rect.min().y,
            w: rect.min().x,
        })
    }

    fn coordinate_count(&self) -> usize {
        self.coords_count()
    }
}

/// Whether `value` has no digits beyond `resolution` fractional places.
pub fn is_quantized(value: f64, resolution: u32) -> bool {
    let scale = 10f64.powi(resolution as i32);
    (value * scale).round() / scale == value
}
