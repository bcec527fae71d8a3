//! Draw list core
//!
//! Describe a 2D scene as an ordered list of vector primitives and pack it
//! into a flat buffer of fixed-stride [`PackedRecord`]s for a fragment shader.
//!
//! - [`primitive`]: the closed set of authorable shapes and their expansion
//!   into records, including adaptive curve flattening and radial arrays
//! - [`registry`]: enumerable primitive kinds for authoring tools
//! - [`CommandList`]: ordered, owned primitives with stable handles
//! - [`pack()`]: the packing pipeline and coordinate-space transform
//!
//! # Example
//!
//! ```
//! use drawlist_core::{pack, Circle, Color, CommandList, PackOptions, PolyLine, Vec2};
//!
//! let mut list = CommandList::new();
//! list.push(Circle::new(Vec2::new(0.5, 0.5), 0.25, Color::BLACK, 0.05));
//! list.push(PolyLine::new(
//!     [Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)],
//!     Color::RED,
//!     0.01,
//! ));
//!
//! let records = pack(&list, &PackOptions::default()).unwrap();
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[2].object_id, 1);
//! ```

pub mod command_list;
pub mod error;
pub mod geometry;
pub mod pack;
pub mod primitive;
pub mod record;
pub mod registry;
pub mod settings;

pub use command_list::{CommandList, PrimitiveKey};
pub use error::{DrawListError, Result};
pub use geometry::{turns_to_radians, Color, Extent, Vec2, TAU};
pub use pack::{pack, PackOptions, Packer, SpaceTransform};
pub use primitive::{
    Arc, Capsule, Circle, Curve, Disk, EquilateralTriangle, Expand, Line, OrientedRect,
    PolarAngleSpanRadialLineArray, PolarRadialLineArray, PolyLine, Primitive, RadialLine, Rect,
    RoundedRect, Triangle, DEFAULT_TOLERANCE,
};
pub use record::{as_bytes, CommandType, PackedRecord};
pub use registry::PrimitiveKind;
pub use settings::{CoordinateSpace, RenderSettings};
