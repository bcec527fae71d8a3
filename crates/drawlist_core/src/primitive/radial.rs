//! Radial lines and polar arrays built from a radial-line prototype
//!
//! The arrays never touch their stored prototype while expanding: each
//! repetition is expanded from a local copy whose angle alone differs.

use super::{check_object_id, Expand, UnitScale};
use crate::error::Result;
use crate::geometry::{turns_to_radians, Color, Extent, Vec2};
use crate::record::PackedRecord;

/// Line segment lying on a ray from `center`
///
/// The ray points at `angle_turns`; the segment spans from
/// `radial_fraction.x * radius` to `radial_fraction.y * radius` along it.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialLine {
    pub center: Vec2,
    pub radial_fraction: Vec2,
    pub radius: f32,
    pub angle_turns: f32,
    pub color: Color,
    pub thickness: f32,
}

impl RadialLine {
    pub fn new(
        center: Vec2,
        radial_fraction: Vec2,
        radius: f32,
        angle_turns: f32,
        color: Color,
        thickness: f32,
    ) -> Self {
        Self {
            center,
            radial_fraction,
            radius,
            angle_turns,
            color,
            thickness,
        }
    }

    /// Segment endpoints, inner first
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let dir = Vec2::from_angle(turns_to_radians(self.angle_turns));
        (
            self.center + dir * (self.radial_fraction.x * self.radius),
            self.center + dir * (self.radial_fraction.y * self.radius),
        )
    }
}

impl Default for RadialLine {
    fn default() -> Self {
        Self::new(
            Vec2::splat(0.5),
            Vec2::new(0.5, 0.9),
            0.25,
            0.0,
            Color::BLACK,
            0.1,
        )
    }
}

impl Expand for RadialLine {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.center = scale.position(self.center);
            self.radius = scale.length(self.radius);
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
        let (start, end) = self.endpoints();
        out.push(PackedRecord::line(start, end, self.color, self.thickness).with_object_id(object_id));
        Ok(())
    }
}

/// Expand `count` copies of `prototype`, rotating each by `step_turns`
///
/// Repetition `i` uses angle `prototype.angle_turns + i * step_turns`. A
/// count of zero or less emits nothing.
pub fn compose_radial(
    prototype: &RadialLine,
    count: i32,
    step_turns: f32,
    object_id: i32,
    tolerance: f32,
    out: &mut Vec<PackedRecord>,
) -> Result<()> {
    check_object_id(object_id)?;
    let count = count.max(0);
    out.reserve(count as usize);

    let mut working = prototype.clone();
    for i in 0..count {
        working.angle_turns = prototype.angle_turns + i as f32 * step_turns;
        working.expand_into(object_id, tolerance, out)?;
    }
    Ok(())
}

/// Radial lines repeated at a fixed angular step
#[derive(Clone, Debug, PartialEq)]
pub struct PolarRadialLineArray {
    pub prototype: RadialLine,
    pub angle_step_turns: f32,
    pub count: i32,
}

impl PolarRadialLineArray {
    pub fn new(prototype: RadialLine, angle_step_turns: f32, count: i32) -> Self {
        Self {
            prototype,
            angle_step_turns,
            count,
        }
    }

    /// Angle of repetition `index`, in turns
    pub fn angle_at(&self, index: i32) -> f32 {
        self.prototype.angle_turns + index as f32 * self.angle_step_turns
    }
}

impl Default for PolarRadialLineArray {
    fn default() -> Self {
        Self::new(RadialLine::default(), 0.1, 5)
    }
}

impl Expand for PolarRadialLineArray {
    fn initialize(&mut self, extent: Extent) {
        self.prototype.initialize(extent);
    }

    fn expand_into(
        &self,
        object_id: i32,
        tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()> {
        compose_radial(
            &self.prototype,
            self.count,
            self.angle_step_turns,
            object_id,
            tolerance,
            out,
        )
    }
}

/// Radial lines spread evenly over a fixed total sweep
///
/// The step is `total_angle_span_turns / count`, so changing `count` changes
/// the density but not the sweep. With a full-turn span the last repetition
/// stops one step short of the first.
#[derive(Clone, Debug, PartialEq)]
pub struct PolarAngleSpanRadialLineArray {
    pub prototype: RadialLine,
    pub total_angle_span_turns: f32,
    pub count: i32,
}

impl PolarAngleSpanRadialLineArray {
    pub fn new(prototype: RadialLine, total_angle_span_turns: f32, count: i32) -> Self {
        Self {
            prototype,
            total_angle_span_turns,
            count,
        }
    }

    /// Angular distance between neighbouring repetitions, in turns
    ///
    /// Zero when `count` is not positive.
    pub fn step_turns(&self) -> f32 {
        if self.count > 0 {
            self.total_angle_span_turns / self.count as f32
        } else {
            0.0
        }
    }
}

impl Default for PolarAngleSpanRadialLineArray {
    fn default() -> Self {
        Self::new(RadialLine::default(), 1.0, 12)
    }
}

impl Expand for PolarAngleSpanRadialLineArray {
    fn initialize(&mut self, extent: Extent) {
        self.prototype.initialize(extent);
    }

    fn expand_into(
        &self,
        object_id: i32,
        tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()> {
        compose_radial(
            &self.prototype,
            self.count,
            self.step_turns(),
            object_id,
            tolerance,
            out,
        )
    }
}
