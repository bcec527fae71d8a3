//! Straight-edged stroke primitives: lines, polylines and capsules

use smallvec::SmallVec;

use super::{check_object_id, Expand, UnitScale};
use crate::error::Result;
use crate::geometry::{Color, Extent, Vec2};
use crate::record::PackedRecord;

/// A single stroked segment
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
    pub color: Color,
}

impl Line {
    pub fn new(start: Vec2, end: Vec2, thickness: f32, color: Color) -> Self {
        Self {
            start,
            end,
            thickness,
            color,
        }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE, 0.1, Color::BLACK)
    }
}

impl Expand for Line {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.start = scale.position(self.start);
            self.end = scale.position(self.end);
            self.thickness = scale.length(self.thickness);
        }
    }

    fn expand_into(
        &self,
        object_id: i32,
        _tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()> {
        check_object_id(object_id)?;
        out.push(
            PackedRecord::line(self.start, self.end, self.color, self.thickness)
                .with_object_id(object_id),
        );
        Ok(())
    }
}

/// Connected run of stroked segments sharing one color and width
///
/// `k` points expand to `k - 1` line records; fewer than two points expand to
/// nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyLine {
    pub points: SmallVec<[Vec2; 8]>,
    pub color: Color,
    pub thickness: f32,
}

impl PolyLine {
    pub fn new(points: impl IntoIterator<Item = Vec2>, color: Color, thickness: f32) -> Self {
        Self {
            points: points.into_iter().collect(),
            color,
            thickness,
        }
    }

    /// Number of segments this polyline expands to
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

impl Default for PolyLine {
    fn default() -> Self {
        Self::new(
            [
                Vec2::new(0.1, 0.1),
                Vec2::new(0.1, 0.5),
                Vec2::new(0.5, 0.5),
                Vec2::new(0.5, 0.1),
            ],
            Color::BLACK,
            0.1,
        )
    }
}

impl Expand for PolyLine {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.thickness = scale.length(self.thickness);
            for point in self.points.iter_mut() {
                *point = scale.position(*point);
            }
        }
    }

    fn expand_into(
        &self,
        object_id: i32,
        _tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()> {
        check_object_id(object_id)?;
        out.reserve(self.segment_count());
        out.extend(self.points.windows(2).map(|pair| {
            PackedRecord::line(pair[0], pair[1], self.color, self.thickness)
                .with_object_id(object_id)
        }));
        Ok(())
    }
}

/// Filled capsule: a segment inflated by `radius` with round ends
#[derive(Clone, Debug, PartialEq)]
pub struct Capsule {
    pub endpoint_a: Vec2,
    pub endpoint_b: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Capsule {
    pub fn new(endpoint_a: Vec2, endpoint_b: Vec2, radius: f32, color: Color) -> Self {
        Self {
            endpoint_a,
            endpoint_b,
            radius,
            color,
        }
    }
}

impl Default for Capsule {
    fn default() -> Self {
        Self::new(Vec2::new(0.1, 0.5), Vec2::new(0.9, 0.5), 0.2, Color::BLACK)
    }
}

impl Expand for Capsule {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.endpoint_a = scale.position(self.endpoint_a);
            self.endpoint_b = scale.position(self.endpoint_b);
            self.radius = scale.length(self.radius);
        }
    }

    fn expand_into(
        &self,
        object_id: i32,
        _tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()> {
        check_object_id(object_id)?;
        out.push(
            PackedRecord::capsule(self.endpoint_a, self.endpoint_b, self.radius, self.color)
                .with_object_id(object_id),
        );
        Ok(())
    }
}
