//! Filled triangles

use std::f32::consts::PI;

use super::{check_object_id, Expand, UnitScale};
use crate::error::Result;
use crate::geometry::{Color, Extent, Vec2};
use crate::record::PackedRecord;

/// Filled triangle from three explicit vertices
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub color: Color,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2, color: Color) -> Self {
        Self { a, b, c, color }
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(
            Vec2::new(0.1, 0.1),
            Vec2::new(0.5, 0.9),
            Vec2::new(0.9, 0.1),
            Color::BLACK,
        )
    }
}

impl Expand for Triangle {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.a = scale.position(self.a);
            self.b = scale.position(self.b);
            self.c = scale.position(self.c);
        }
    }

    fn expand_into(
        &self,
        object_id: i32,
        _tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()> {
        check_object_id(object_id)?;
        out.push(PackedRecord::triangle(self.a, self.b, self.c, self.color).with_object_id(object_id));
        Ok(())
    }
}

/// Equilateral triangle inscribed in a circle of radius `size`
///
/// The first vertex sits at `angle` radians from `center`, the others follow
/// at +120° and +240°.
#[derive(Clone, Debug, PartialEq)]
pub struct EquilateralTriangle {
    pub center: Vec2,
    pub size: f32,
    pub angle: f32,
    pub color: Color,
}

impl EquilateralTriangle {
    pub fn new(center: Vec2, size: f32, angle: f32, color: Color) -> Self {
        Self {
            center,
            size,
            angle,
            color,
        }
    }

    /// The three vertices, counter-clockwise starting at `angle`
    pub fn vertices(&self) -> [Vec2; 3] {
        const THIRD: f32 = 2.0 * PI / 3.0;
        [0.0, THIRD, 2.0 * THIRD].map(|offset| {
            self.center + Vec2::from_angle(self.angle + offset) * self.size
        })
    }
}

impl Default for EquilateralTriangle {
    fn default() -> Self {
        Self::new(Vec2::splat(0.5), 0.05, 0.0, Color::BLACK)
    }
}

impl Expand for EquilateralTriangle {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.center = scale.position(self.center);
            self.size = scale.length(self.size);
        }
    }

    fn expand_into(
        &self,
        object_id: i32,
        _tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()> {
        check_object_id(object_id)?;
        let [a, b, c] = self.vertices();
        out.push(PackedRecord::triangle(a, b, c, self.color).with_object_id(object_id));
        Ok(())
    }
}
