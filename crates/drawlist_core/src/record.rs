//! GPU draw records
//!
//! Every primitive compiles down to one or more [`PackedRecord`]s. The record
//! is `#[repr(C)]` and implements `bytemuck::Pod`, so a `&[PackedRecord]` can
//! be copied into a storage buffer as-is. Its size does not depend on the
//! command type, which keeps a mixed buffer a valid GPU resource.
//!
//! Slot meaning per command type (must match the shader):
//!
//! | type            | start    | end                | third_corner  | radius   | thickness |
//! |-----------------|----------|--------------------|---------------|----------|-----------|
//! | `Line`          | point A  | point B            | -             | -        | width     |
//! | `Arc`           | center   | (start, end) rad   | -             | radius   | width     |
//! | `Disk`          | center   | -                  | -             | radius   | 0         |
//! | `Rect`          | center   | half extent        | -             | 0        | 0         |
//! | `OrientedRect`  | center   | half extent        | -             | rotation | 0         |
//! | `RoundedRect`   | center   | half extent        | corner radii  | 0        | 0         |
//! | `Capsule`       | point A  | point B            | -             | radius   | 0         |
//! | `Triangle`      | vertex A | vertex B           | vertex C      | 0        | 0         |

use crate::geometry::{Color, Vec2, TAU};

/// Command types (must match shader constants)
#[repr(i32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CommandType {
    #[default]
    Line = 0,
    Arc = 1,
    Disk = 2,
    Rect = 3,
    OrientedRect = 4,
    RoundedRect = 5,
    Capsule = 6,
    Triangle = 7,
}

impl CommandType {
    pub const ALL: [CommandType; 8] = [
        CommandType::Line,
        CommandType::Arc,
        CommandType::Disk,
        CommandType::Rect,
        CommandType::OrientedRect,
        CommandType::RoundedRect,
        CommandType::Capsule,
        CommandType::Triangle,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CommandType::Line => "LINE",
            CommandType::Arc => "ARC",
            CommandType::Disk => "DISK",
            CommandType::Rect => "RECT",
            CommandType::OrientedRect => "ORIENTED_RECT",
            CommandType::RoundedRect => "ROUNDED_RECT",
            CommandType::Capsule => "CAPSULE",
            CommandType::Triangle => "TRIANGLE",
        }
    }
}

impl TryFrom<i32> for CommandType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        CommandType::ALL
            .into_iter()
            .find(|t| *t as i32 == value)
            .ok_or(value)
    }
}

/// A packed draw record (matches shader `DrawCommand` struct)
///
/// Memory layout:
/// - start: `vec2<f32>`        (8 bytes)
/// - end: `vec2<f32>`          (8 bytes)
/// - third_corner: `vec2<f32>` (8 bytes)
/// - radius: f32               (4 bytes)
/// - color: `vec4<f32>`        (16 bytes)
/// - thickness: f32            (4 bytes)
/// - command_type: i32         (4 bytes)
/// - object_id: i32            (4 bytes)
/// Total: 56 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedRecord {
    /// Primary reference point (endpoint A, center or vertex A)
    pub start: [f32; 2],
    /// Endpoint B, vertex B, half extent, or (start, end) angles for arcs
    pub end: [f32; 2],
    /// Vertex C for triangles, corner radii for rounded rects
    pub third_corner: [f32; 2],
    /// Radius, or rotation in radians for oriented rects
    pub radius: f32,
    /// Fill / stroke color (RGBA)
    pub color: [f32; 4],
    /// Stroke width, 0 for filled shapes
    pub thickness: f32,
    /// [`CommandType`] discriminant
    pub command_type: i32,
    /// Index of the primitive this record was expanded from
    pub object_id: i32,
}

const _: () = assert!(std::mem::size_of::<PackedRecord>() == 12 * 4 + 2 * 4);

impl PackedRecord {
    /// Byte stride of one record in a GPU buffer
    pub const STRIDE: usize = std::mem::size_of::<PackedRecord>();

    fn with_type(command_type: CommandType, color: Color) -> Self {
        Self {
            color: color.to_array(),
            command_type: command_type as i32,
            ..Default::default()
        }
    }

    /// Stroked line segment from `a` to `b`
    pub fn line(a: Vec2, b: Vec2, color: Color, thickness: f32) -> Self {
        Self {
            start: a.to_array(),
            end: b.to_array(),
            thickness,
            ..Self::with_type(CommandType::Line, color)
        }
    }

    /// Stroked arc, angles in radians
    pub fn arc(
        center: Vec2,
        start_angle: f32,
        end_angle: f32,
        radius: f32,
        color: Color,
        thickness: f32,
    ) -> Self {
        Self {
            start: center.to_array(),
            end: [start_angle, end_angle],
            radius,
            thickness,
            ..Self::with_type(CommandType::Arc, color)
        }
    }

    /// Stroked circle, an arc spanning `[0, 2π]`
    pub fn full_circle(center: Vec2, radius: f32, color: Color, thickness: f32) -> Self {
        Self::arc(center, 0.0, TAU, radius, color, thickness)
    }

    /// Filled disk
    pub fn disk(center: Vec2, radius: f32, color: Color) -> Self {
        Self {
            start: center.to_array(),
            radius,
            ..Self::with_type(CommandType::Disk, color)
        }
    }

    /// Filled axis-aligned rectangle
    pub fn rect(center: Vec2, half_size: Vec2, color: Color) -> Self {
        Self {
            start: center.to_array(),
            end: half_size.to_array(),
            ..Self::with_type(CommandType::Rect, color)
        }
    }

    /// Filled rectangle rotated by `rotation` radians around its center
    pub fn oriented_rect(center: Vec2, half_size: Vec2, rotation: f32, color: Color) -> Self {
        Self {
            start: center.to_array(),
            end: half_size.to_array(),
            radius: rotation,
            ..Self::with_type(CommandType::OrientedRect, color)
        }
    }

    /// Filled rectangle with elliptical corners
    pub fn rounded_rect(center: Vec2, half_size: Vec2, corner_radii: Vec2, color: Color) -> Self {
        Self {
            start: center.to_array(),
            end: half_size.to_array(),
            third_corner: corner_radii.to_array(),
            ..Self::with_type(CommandType::RoundedRect, color)
        }
    }

    /// Filled capsule (segment `a`-`b` inflated by `radius`)
    pub fn capsule(a: Vec2, b: Vec2, radius: f32, color: Color) -> Self {
        Self {
            start: a.to_array(),
            end: b.to_array(),
            radius,
            ..Self::with_type(CommandType::Capsule, color)
        }
    }

    /// Filled triangle
    pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: Color) -> Self {
        Self {
            start: a.to_array(),
            end: b.to_array(),
            third_corner: c.to_array(),
            ..Self::with_type(CommandType::Triangle, color)
        }
    }

    /// Tag the record with the id of its source primitive
    pub fn with_object_id(mut self, object_id: i32) -> Self {
        self.object_id = object_id;
        self
    }

    /// Decoded command type, `None` if the tag is out of range
    pub fn kind(&self) -> Option<CommandType> {
        CommandType::try_from(self.command_type).ok()
    }

    /// Rescale into another coordinate space
    ///
    /// Positions are scaled component-wise. An arc's `end` holds angles and is
    /// left alone, as is its unused `third_corner`. Radius and thickness use
    /// the larger scale component so strokes stay isotropic under non-uniform
    /// scaling.
    ///
    /// Applying this twice compounds the scale.
    pub fn scaled(mut self, scale: Vec2) -> Self {
        self.start = (Vec2::from(self.start) * scale).to_array();
        if self.kind() != Some(CommandType::Arc) {
            self.end = (Vec2::from(self.end) * scale).to_array();
            self.third_corner = (Vec2::from(self.third_corner) * scale).to_array();
        }

        let scalar = scale.max_element();
        self.radius *= scalar;
        self.thickness *= scalar;
        self
    }
}

/// View a record slice as raw bytes for buffer upload
pub fn as_bytes(records: &[PackedRecord]) -> &[u8] {
    bytemuck::cast_slice(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_type() -> Vec<PackedRecord> {
        let p = Vec2::new(0.25, 0.75);
        vec![
            PackedRecord::line(p, Vec2::ONE, Color::BLACK, 0.1),
            PackedRecord::full_circle(p, 0.5, Color::BLACK, 0.1),
            PackedRecord::disk(p, 0.5, Color::BLACK),
            PackedRecord::rect(p, p, Color::BLACK),
            PackedRecord::oriented_rect(p, p, 1.0, Color::BLACK),
            PackedRecord::rounded_rect(p, p, p, Color::BLACK),
            PackedRecord::capsule(p, Vec2::ONE, 0.1, Color::BLACK),
            PackedRecord::triangle(p, Vec2::ONE, Vec2::ZERO, Color::BLACK),
        ]
    }

    #[test]
    fn test_stride_is_fixed() {
        assert_eq!(PackedRecord::STRIDE, 56);
        let records = every_type();
        assert_eq!(as_bytes(&records).len(), records.len() * PackedRecord::STRIDE);
        for record in &records {
            assert_eq!(bytemuck::bytes_of(record).len(), PackedRecord::STRIDE);
        }
    }

    #[test]
    fn test_constructors_tag_types() {
        let kinds: Vec<_> = every_type().iter().map(|r| r.kind().unwrap()).collect();
        assert_eq!(kinds, CommandType::ALL.to_vec());
    }

    #[test]
    fn test_command_type_round_trip() {
        for t in CommandType::ALL {
            assert_eq!(CommandType::try_from(t as i32), Ok(t));
        }
        assert_eq!(CommandType::try_from(8), Err(8));
        assert_eq!(CommandType::try_from(-1), Err(-1));
    }

    #[test]
    fn test_scale_rect() {
        let rect = PackedRecord::rect(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0), Color::RED);
        let scaled = rect.scaled(Vec2::new(0.5, 0.25));
        assert_eq!(scaled.start, [5.0, 5.0]);
        assert_eq!(scaled.end, [2.0, 2.0]);
        assert_eq!(scaled.radius, 0.0);
        assert_eq!(scaled.thickness, 0.0);
    }

    #[test]
    fn test_scale_uses_larger_component_for_lengths() {
        let line = PackedRecord::line(Vec2::ZERO, Vec2::ONE, Color::BLACK, 2.0);
        let scaled = line.scaled(Vec2::new(3.0, 0.5));
        assert_eq!(scaled.thickness, 6.0);
        assert_eq!(scaled.end, [3.0, 0.5]);
    }

    #[test]
    fn test_scale_keeps_arc_angles() {
        let arc = PackedRecord::arc(Vec2::new(100.0, 50.0), 0.5, 2.0, 10.0, Color::BLACK, 1.0);
        let scaled = arc.scaled(Vec2::new(0.5, 0.25));
        assert_eq!(scaled.end, [0.5, 2.0]);
        assert_eq!(scaled.start, [50.0, 12.5]);
        assert_eq!(scaled.radius, 5.0);
        assert_eq!(scaled.thickness, 0.5);
    }

    #[test]
    fn test_scale_leaves_arc_third_corner() {
        let mut arc = PackedRecord::arc(Vec2::new(100.0, 50.0), 0.0, 0.5, 10.0, Color::BLACK, 1.0);
        arc.third_corner = [3.0, 7.0];
        let scaled = arc.scaled(Vec2::new(0.5, 0.25));
        assert_eq!(scaled.third_corner, [3.0, 7.0]);
        assert_eq!(scaled.end, arc.end);

        let mut rr = PackedRecord::rounded_rect(Vec2::ONE, Vec2::ONE, Vec2::ONE, Color::BLACK);
        rr.third_corner = [3.0, 7.0];
        assert_eq!(rr.scaled(Vec2::new(0.5, 0.25)).third_corner, [1.5, 1.75]);
    }

    #[test]
    fn test_scale_rounded_rect_corners() {
        let rr = PackedRecord::rounded_rect(Vec2::ONE, Vec2::ONE, Vec2::new(2.0, 4.0), Color::BLACK);
        let scaled = rr.scaled(Vec2::new(0.5, 0.5));
        assert_eq!(scaled.third_corner, [1.0, 2.0]);
    }
}
