//! Quadratic Bézier curves and their adaptive flattening into line records
//!
//! A curve is split at its parametric midpoint (de Casteljau) until the
//! control point lies within `tolerance` of the chord, then each flat piece
//! is emitted as one line segment. Output is ordered from `p0` to `p2`.

use super::{check_object_id, check_tolerance, Expand, UnitScale};
use crate::error::Result;
use crate::geometry::{Color, Extent, Vec2};
use crate::record::PackedRecord;

/// Maximum subdivision depth (at most 2^16 segments per curve)
///
/// Flatness quarters with every split, so finite curves reach any sensible
/// tolerance long before this. The cap stops NaN/infinite control points
/// and tolerances below f32 precision from recursing forever.
pub const MAX_SUBDIVISION_DEPTH: u32 = 16;

/// Distance from `p1` to the chord `p0`-`p2`
///
/// `p1` is projected onto the chord and the projection clamped to the
/// segment. A chord shorter than `f32::EPSILON` falls back to `|p1 - p0|`.
pub fn flatness(p0: Vec2, p1: Vec2, p2: Vec2) -> f32 {
    let chord = p2 - p0;
    let chord_len_sq = chord.length_squared();
    if chord_len_sq < f32::EPSILON {
        return (p1 - p0).length();
    }
    let t = ((p1 - p0).dot(chord) / chord_len_sq).clamp(0.0, 1.0);
    let projection = p0 + chord * t;
    (p1 - projection).length()
}

/// Flatten a quadratic Bézier into chord segments
///
/// `emit` receives each segment's endpoints in curve order. Fails if
/// `tolerance` is not strictly positive.
pub fn flatten_quadratic(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    tolerance: f32,
    mut emit: impl FnMut(Vec2, Vec2),
) -> Result<()> {
    check_tolerance(tolerance)?;
    subdivide(p0, p1, p2, tolerance, 0, &mut emit);
    Ok(())
}

fn subdivide(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    tolerance: f32,
    depth: u32,
    emit: &mut impl FnMut(Vec2, Vec2),
) {
    // NaN flatness counts as flat
    if depth >= MAX_SUBDIVISION_DEPTH || !(flatness(p0, p1, p2) > tolerance) {
        emit(p0, p2);
        return;
    }

    let p01 = p0.midpoint(p1);
    let p12 = p1.midpoint(p2);
    let p012 = p01.midpoint(p12);

    subdivide(p0, p01, p012, tolerance, depth + 1, emit);
    subdivide(p012, p12, p2, tolerance, depth + 1, emit);
}

/// Evaluate the quadratic Bézier at parameter `t`
pub fn quadratic_point(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

/// Stroked quadratic Bézier curve
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub color: Color,
    pub thickness: f32,
}

impl Curve {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, color: Color, thickness: f32) -> Self {
        Self {
            p0,
            p1,
            p2,
            color,
            thickness,
        }
    }

    /// Evaluate the curve at parameter `t` in `[0, 1]`
    pub fn point_at(&self, t: f32) -> Vec2 {
        quadratic_point(self.p0, self.p1, self.p2, t)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::new(
            Vec2::ZERO,
            Vec2::new(0.5, 0.5),
            Vec2::new(0.9, 0.5),
            Color::BLACK,
            0.1,
        )
    }
}

impl Expand for Curve {
    fn initialize(&mut self, extent: Extent) {
        *self = Self::default();
        if let Some(scale) = UnitScale::for_extent(extent) {
            self.p0 = scale.position(self.p0);
            self.p1 = scale.position(self.p1);
            self.p2 = scale.position(self.p2);
            self.thickness = scale.length(self.thickness);
        }
    }

    fn expand_into(
        &self,
        object_id: i32,
        tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()> {
        check_object_id(object_id)?;
        flatten_quadratic(self.p0, self.p1, self.p2, tolerance, |a, b| {
            out.push(PackedRecord::line(a, b, self.color, self.thickness).with_object_id(object_id));
        })
    }
}
