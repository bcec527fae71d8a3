//! Circular primitives: stroked circles and arcs, filled disks

use super::{check_object_id, Expand, UnitScale};
use crate::error::Result;
use crate::geometry::{turns_to_radians, Color, Extent, Vec2};
use crate::record::PackedRecord;

/// Stroked full circle, packed as an arc spanning one turn
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    pub thickness: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32, color: Color, thickness: f32) -> Self {
        Self {
            center,
            radius,
            color,
            thickness,
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(Vec2::splat(0.5), 0.25, Color::BLACK, 0.05)
    }
}

impl Expand for Circle {
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
        out.push(
            PackedRecord::full_circle(self.center, self.radius, self.color, self.thickness)
                .with_object_id(object_id),
        );
        Ok(())
    }
}

/// Stroked arc
///
/// Angles are stored in turns and only converted to radians when packed.
#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub start_angle_turns: f32,
    pub end_angle_turns: f32,
    pub radius: f32,
    pub color: Color,
    pub thickness: f32,
}

impl Arc {
    pub fn new(
        center: Vec2,
        start_angle_turns: f32,
        end_angle_turns: f32,
        radius: f32,
        color: Color,
        thickness: f32,
    ) -> Self {
        Self {
            center,
            start_angle_turns,
            end_angle_turns,
            radius,
            color,
            thickness,
        }
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new(Vec2::splat(0.5), 0.0, 0.5, 0.5, Color::BLACK, 0.5)
    }
}

impl Expand for Arc {
    fn initialize(&mut self, extent: Extent) {
        *self = Self {
            thickness: 0.1,
            ..Self::default()
        };
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
        out.push(
            PackedRecord::arc(
                self.center,
                turns_to_radians(self.start_angle_turns),
                turns_to_radians(self.end_angle_turns),
                self.radius,
                self.color,
                self.thickness,
            )
            .with_object_id(object_id),
        );
        Ok(())
    }
}

/// Filled disk
#[derive(Clone, Debug, PartialEq)]
pub struct Disk {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Disk {
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self::new(Vec2::splat(0.5), 0.5, Color::BLACK)
    }
}

impl Expand for Disk {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.center = scale.position(self.center);
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
        out.push(PackedRecord::disk(self.center, self.radius, self.color).with_object_id(object_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TAU;
    use crate::primitive::DEFAULT_TOLERANCE;
    use crate::record::CommandType;

    #[test]
    fn test_circle_packs_as_full_arc() {
        let circle = Circle::new(Vec2::new(0.5, 0.5), 0.25, Color::BLACK, 0.05);
        let records = circle.expand(7, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(records.len(), 1);
        let r = records[0];
        assert_eq!(r.kind(), Some(CommandType::Arc));
        assert_eq!(r.start, [0.5, 0.5]);
        assert_eq!(r.end, [0.0, TAU]);
        assert_eq!(r.radius, 0.25);
        assert_eq!(r.thickness, 0.05);
        assert_eq!(r.object_id, 7);
    }

    #[test]
    fn test_arc_converts_turns_at_expansion() {
        let arc = Arc::new(Vec2::ZERO, 0.25, 0.75, 1.0, Color::BLACK, 0.1);
        let r = arc.expand(0, DEFAULT_TOLERANCE).unwrap()[0];
        assert!((r.end[0] - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((r.end[1] - 1.5 * std::f32::consts::PI).abs() < 1e-6);
        // stored angles stay in turns
        assert_eq!(arc.start_angle_turns, 0.25);
        assert_eq!(arc.end_angle_turns, 0.75);
    }

    #[test]
    fn test_arc_initialize_uses_thin_stroke() {
        let mut arc = Arc::default();
        assert_eq!(arc.thickness, 0.5);
        arc.initialize(Extent::NORMALIZED);
        assert_eq!(arc.thickness, 0.1);
        assert_eq!(arc.end_angle_turns, 0.5);
    }

    #[test]
    fn test_circle_initialize_scales_by_shorter_side() {
        let mut circle = Circle::default();
        circle.initialize(Extent::new(400, 200));
        assert_eq!(circle.center, Vec2::new(200.0, 100.0));
        assert_eq!(circle.radius, 50.0);
        assert!((circle.thickness - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_disk_is_filled() {
        let r = Disk::default().expand(1, DEFAULT_TOLERANCE).unwrap()[0];
        assert_eq!(r.kind(), Some(CommandType::Disk));
        assert_eq!(r.thickness, 0.0);
        assert_eq!(r.end, [0.0, 0.0]);
        assert_eq!(r.radius, 0.5);
    }
}
