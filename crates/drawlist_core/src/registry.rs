//! Static registry of constructible primitive variants
//!
//! Authoring tools list [`PrimitiveKind::ALL`] to offer "add primitive"
//! choices and build new values with [`PrimitiveKind::create`].

use std::fmt;
use std::str::FromStr;

use crate::error::DrawListError;
use crate::geometry::Extent;
use crate::primitive::{
    Arc, Capsule, Circle, Curve, Disk, EquilateralTriangle, Expand, Line, OrientedRect,
    PolarAngleSpanRadialLineArray, PolarRadialLineArray, PolyLine, Primitive, RadialLine, Rect,
    RoundedRect, Triangle,
};

/// Tag for each [`Primitive`] variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
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
}

impl PrimitiveKind {
    /// Every kind, in menu order
    pub const ALL: [PrimitiveKind; 15] = [
        PrimitiveKind::Line,
        PrimitiveKind::Curve,
        PrimitiveKind::PolyLine,
        PrimitiveKind::Circle,
        PrimitiveKind::Arc,
        PrimitiveKind::Disk,
        PrimitiveKind::Rect,
        PrimitiveKind::OrientedRect,
        PrimitiveKind::RoundedRect,
        PrimitiveKind::Capsule,
        PrimitiveKind::Triangle,
        PrimitiveKind::EquilateralTriangle,
        PrimitiveKind::RadialLine,
        PrimitiveKind::PolarRadialLineArray,
        PrimitiveKind::PolarAngleSpanRadialLineArray,
    ];

    /// Display label
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Line => "Line",
            PrimitiveKind::Curve => "Curve",
            PrimitiveKind::PolyLine => "PolyLine",
            PrimitiveKind::Circle => "Circle",
            PrimitiveKind::Arc => "Arc",
            PrimitiveKind::Disk => "Disk",
            PrimitiveKind::Rect => "Rect",
            PrimitiveKind::OrientedRect => "OrientedRect",
            PrimitiveKind::RoundedRect => "RoundedRect",
            PrimitiveKind::Capsule => "Capsule",
            PrimitiveKind::Triangle => "Triangle",
            PrimitiveKind::EquilateralTriangle => "EquilateralTriangle",
            PrimitiveKind::RadialLine => "RadialLine",
            PrimitiveKind::PolarRadialLineArray => "PolarRadialLineArray",
            PrimitiveKind::PolarAngleSpanRadialLineArray => "PolarAngleSpanRadialLineArray",
        }
    }

    /// All display labels, in menu order
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }

    /// Default value of this kind, without unit conversion
    pub fn default_primitive(self) -> Primitive {
        match self {
            PrimitiveKind::Line => Line::default().into(),
            PrimitiveKind::Curve => Curve::default().into(),
            PrimitiveKind::PolyLine => PolyLine::default().into(),
            PrimitiveKind::Circle => Circle::default().into(),
            PrimitiveKind::Arc => Arc::default().into(),
            PrimitiveKind::Disk => Disk::default().into(),
            PrimitiveKind::Rect => Rect::default().into(),
            PrimitiveKind::OrientedRect => OrientedRect::default().into(),
            PrimitiveKind::RoundedRect => RoundedRect::default().into(),
            PrimitiveKind::Capsule => Capsule::default().into(),
            PrimitiveKind::Triangle => Triangle::default().into(),
            PrimitiveKind::EquilateralTriangle => EquilateralTriangle::default().into(),
            PrimitiveKind::RadialLine => RadialLine::default().into(),
            PrimitiveKind::PolarRadialLineArray => PolarRadialLineArray::default().into(),
            PrimitiveKind::PolarAngleSpanRadialLineArray => {
                PolarAngleSpanRadialLineArray::default().into()
            }
        }
    }

    /// New primitive of this kind, initialized against `extent`
    pub fn create(self, extent: Extent) -> Primitive {
        let mut primitive = self.default_primitive();
        primitive.initialize(extent);
        primitive
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = DrawListError;

    /// Accepts display labels case-insensitively, and their snake_case form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| DrawListError::Configuration {
                requested: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;

    #[test]
    fn test_all_kinds_are_distinct_and_round_trip_their_names() {
        for (i, kind) in PrimitiveKind::ALL.iter().enumerate() {
            assert_eq!(kind.name().parse::<PrimitiveKind>().unwrap(), *kind);
            assert!(!PrimitiveKind::ALL[..i].contains(kind));
        }
        assert_eq!(PrimitiveKind::names().count(), 15);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_accepts_snake_case() {
        assert_eq!("circle".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::Circle);
        assert_eq!(
            "polar_angle_span_radial_line_array".parse::<PrimitiveKind>().unwrap(),
            PrimitiveKind::PolarAngleSpanRadialLineArray
        );
        assert_eq!("ORIENTED-RECT".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::OrientedRect);
    }

    #[test]
    fn test_unknown_name_is_a_configuration_error() {
        let err = "Hexagon".parse::<PrimitiveKind>().unwrap_err();
        match err {
            DrawListError::Configuration { requested } => assert_eq!(requested, "Hexagon"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_create_matches_kind_and_initializes() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(kind.create(Extent::NORMALIZED).kind(), kind);
        }
        match PrimitiveKind::Disk.create(Extent::new(100, 40)) {
            Primitive::Disk(disk) => {
                assert_eq!(disk.center, Vec2::new(50.0, 20.0));
                assert_eq!(disk.radius, 20.0);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_create_arc_uses_initialized_thickness() {
        match PrimitiveKind::Arc.create(Extent::NORMALIZED) {
            Primitive::Arc(arc) => assert_eq!(arc.thickness, 0.1),
            other => panic!("unexpected primitive {other:?}"),
        }
    }
}
