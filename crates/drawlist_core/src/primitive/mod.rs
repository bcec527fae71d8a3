//! Authoring primitives and their expansion into packed records
//!
//! Every shape a scene can contain is one variant of the closed [`Primitive`]
//! sum type. Each variant is a plain value type with public fields and
//! implements [`Expand`]:
//!
//! - [`Expand::initialize`] resets the value to its default geometry in
//!   normalized space and, for an absolute [`Extent`], converts it once into
//!   that extent's units.
//! - [`Expand::expand_into`] appends one or more [`PackedRecord`]s tagged
//!   with the caller's object id. Expansion never mutates the primitive.
//!
//! ```
//! use drawlist_core::{Circle, Color, Expand, Vec2, DEFAULT_TOLERANCE};
//!
//! let circle = Circle::new(Vec2::new(0.5, 0.5), 0.25, Color::BLACK, 0.05);
//! let records = circle.expand(7, DEFAULT_TOLERANCE).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].object_id, 7);
//! ```

mod curve;
mod line;
mod radial;
mod rect;
mod round;
mod triangle;

pub use curve::{flatness, flatten_quadratic, quadratic_point, Curve, MAX_SUBDIVISION_DEPTH};
pub use line::{Capsule, Line, PolyLine};
pub use radial::{compose_radial, PolarAngleSpanRadialLineArray, PolarRadialLineArray, RadialLine};
pub use rect::{OrientedRect, Rect, RoundedRect};
pub use round::{Arc, Circle, Disk};
pub use triangle::{EquilateralTriangle, Triangle};

use crate::error::{DrawListError, Result};
use crate::geometry::{Extent, Vec2};
use crate::record::PackedRecord;
use crate::registry::PrimitiveKind;

/// Curve flattening tolerance used when the caller has no preference
pub const DEFAULT_TOLERANCE: f32 = 0.001;

/// Conversion of a primitive into packed draw records
pub trait Expand {
    /// Reset to default geometry, scaled once into `extent` if it is absolute
    fn initialize(&mut self, extent: Extent);

    /// Append this primitive's records to `out`
    ///
    /// Every appended record carries `object_id`. `tolerance` only matters
    /// to curves.
    fn expand_into(
        &self,
        object_id: i32,
        tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()>;

    /// Expand into a fresh vector
    fn expand(&self, object_id: i32, tolerance: f32) -> Result<Vec<PackedRecord>> {
        let mut out = Vec::new();
        self.expand_into(object_id, tolerance, &mut out)?;
        Ok(out)
    }
}

pub(crate) fn check_object_id(object_id: i32) -> Result<()> {
    if object_id < 0 {
        return Err(DrawListError::InvalidArgument(format!(
            "object id must be non-negative, got {object_id}"
        )));
    }
    Ok(())
}

pub(crate) fn check_tolerance(tolerance: f32) -> Result<()> {
    if !(tolerance > 0.0) {
        return Err(DrawListError::InvalidArgument(format!(
            "tolerance must be greater than zero, got {tolerance}"
        )));
    }
    Ok(())
}

/// Normalized-to-absolute conversion applied by `initialize`
///
/// Positions scale per axis by the extent; radii and stroke widths scale by
/// the extent's shorter side.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnitScale {
    extent: Vec2,
    scalar: f32,
}

impl UnitScale {
    /// `None` for a normalized extent, where no conversion happens
    pub(crate) fn for_extent(extent: Extent) -> Option<Self> {
        extent.is_absolute().then(|| Self {
            extent: extent.as_vec2(),
            scalar: extent.shorter_side(),
        })
    }

    pub(crate) fn position(&self, v: Vec2) -> Vec2 {
        v.mul_components(self.extent)
    }

    pub(crate) fn length(&self, v: f32) -> f32 {
        v * self.scalar
    }
}

/// One authored shape
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line(Line),
    Curve(Curve),
    PolyLine(PolyLine),
    Circle(Circle),
    Arc(Arc),
    Disk(Disk),
    Rect(Rect),
    OrientedRect(OrientedRect),
    RoundedRect(RoundedRect),
    Capsule(Capsule),
    Triangle(Triangle),
    EquilateralTriangle(EquilateralTriangle),
    RadialLine(RadialLine),
    PolarRadialLineArray(PolarRadialLineArray),
    PolarAngleSpanRadialLineArray(PolarAngleSpanRadialLineArray),
}

macro_rules! dispatch {
    ($value:expr, $p:ident => $body:expr) => {
        match $value {
            Primitive::Line($p) => $body,
            Primitive::Curve($p) => $body,
            Primitive::PolyLine($p) => $body,
            Primitive::Circle($p) => $body,
            Primitive::Arc($p) => $body,
            Primitive::Disk($p) => $body,
            Primitive::Rect($p) => $body,
            Primitive::OrientedRect($p) => $body,
            Primitive::RoundedRect($p) => $body,
            Primitive::Capsule($p) => $body,
            Primitive::Triangle($p) => $body,
            Primitive::EquilateralTriangle($p) => $body,
            Primitive::RadialLine($p) => $body,
            Primitive::PolarRadialLineArray($p) => $body,
            Primitive::PolarAngleSpanRadialLineArray($p) => $body,
        }
    };
}

impl Primitive {
    /// Registry entry for this variant
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Line(_) => PrimitiveKind::Line,
            Primitive::Curve(_) => PrimitiveKind::Curve,
            Primitive::PolyLine(_) => PrimitiveKind::PolyLine,
            Primitive::Circle(_) => PrimitiveKind::Circle,
            Primitive::Arc(_) => PrimitiveKind::Arc,
            Primitive::Disk(_) => PrimitiveKind::Disk,
            Primitive::Rect(_) => PrimitiveKind::Rect,
            Primitive::OrientedRect(_) => PrimitiveKind::OrientedRect,
            Primitive::RoundedRect(_) => PrimitiveKind::RoundedRect,
            Primitive::Capsule(_) => PrimitiveKind::Capsule,
            Primitive::Triangle(_) => PrimitiveKind::Triangle,
            Primitive::EquilateralTriangle(_) => PrimitiveKind::EquilateralTriangle,
            Primitive::RadialLine(_) => PrimitiveKind::RadialLine,
            Primitive::PolarRadialLineArray(_) => PrimitiveKind::PolarRadialLineArray,
            Primitive::PolarAngleSpanRadialLineArray(_) => {
                PrimitiveKind::PolarAngleSpanRadialLineArray
            }
        }
    }
}

impl Expand for Primitive {
    fn initialize(&mut self, extent: Extent) {
        dispatch!(self, p => p.initialize(extent))
    }

    /// On error `out` is restored to its previous length.
    fn expand_into(
        &self,
        object_id: i32,
        tolerance: f32,
        out: &mut Vec<PackedRecord>,
    ) -> Result<()> {
        let mark = out.len();
        let result = dispatch!(self, p => p.expand_into(object_id, tolerance, out));
        if result.is_err() {
            out.truncate(mark);
        }
        result
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Primitive {
                fn from(value: $variant) -> Self {
                    Primitive::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Line,
    Curve,
    PolyLine,
    Circle,
    Arc,
    Disk,
    Rect,
    OrientedRect,
    RoundedRect,
    Capsule,
    Triangle,
    EquilateralTriangle,
    RadialLine,
    PolarRadialLineArray,
    PolarAngleSpanRadialLineArray,
);
