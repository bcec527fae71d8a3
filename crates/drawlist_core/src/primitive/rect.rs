//! Filled rectangles: axis-aligned, rotated and rounded

use std::f32::consts::FRAC_PI_2;

use super::{check_object_id, Expand, UnitScale};
use crate::error::Result;
use crate::geometry::{Color, Extent, Vec2};
use crate::record::PackedRecord;

/// Axis-aligned filled rectangle given by center and half extent
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub half_size: Vec2,
    pub color: Color,
}

impl Rect {
    pub fn new(center: Vec2, half_size: Vec2, color: Color) -> Self {
        Self {
            center,
            half_size,
            color,
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(Vec2::splat(0.5), Vec2::splat(0.5), Color::BLACK)
    }
}

impl Expand for Rect {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.center = scale.position(self.center);
            self.half_size = scale.position(self.half_size);
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
            PackedRecord::rect(self.center, self.half_size, self.color).with_object_id(object_id),
        );
        Ok(())
    }
}

/// Filled rectangle rotated around its center
#[derive(Clone, Debug, PartialEq)]
pub struct OrientedRect {
    pub center: Vec2,
    pub half_size: Vec2,
    pub rotation_radians: f32,
    pub color: Color,
}

impl OrientedRect {
    pub fn new(center: Vec2, half_size: Vec2, rotation_radians: f32, color: Color) -> Self {
        Self {
            center,
            half_size,
            rotation_radians,
            color,
        }
    }
}

impl Default for OrientedRect {
    fn default() -> Self {
        Self::new(Vec2::new(0.25, 0.5), Vec2::splat(0.5), FRAC_PI_2, Color::BLACK)
    }
}

impl Expand for OrientedRect {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.center = scale.position(self.center);
            self.half_size = scale.position(self.half_size);
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
            PackedRecord::oriented_rect(
                self.center,
                self.half_size,
                self.rotation_radians,
                self.color,
            )
            .with_object_id(object_id),
        );
        Ok(())
    }
}

/// Filled rectangle with elliptical corners of radii `(rx, ry)`
#[derive(Clone, Debug, PartialEq)]
pub struct RoundedRect {
    pub center: Vec2,
    pub half_size: Vec2,
    pub corner_radii: Vec2,
    pub color: Color,
}

impl RoundedRect {
    pub fn new(center: Vec2, half_size: Vec2, corner_radii: Vec2, color: Color) -> Self {
        Self {
            center,
            half_size,
            corner_radii,
            color,
        }
    }
}

impl Default for RoundedRect {
    fn default() -> Self {
        Self::new(
            Vec2::new(0.25, 0.5),
            Vec2::splat(0.5),
            Vec2::splat(0.1),
            Color::BLACK,
        )
    }
}

impl Expand for RoundedRect {
    // Corner radii are lengths: both scale by the shorter side.
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.center = scale.position(self.center);
            self.half_size = scale.position(self.half_size);
            self.corner_radii = Vec2::new(
                scale.length(self.corner_radii.x),
                scale.length(self.corner_radii.y),
            );
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
            PackedRecord::rounded_rect(self.center, self.half_size, self.corner_radii, self.color)
                .with_object_id(object_id),
        );
        Ok(())
    }
}
