//! Packing pipeline: command list in, flat record buffer out
//!
//! Primitives are expanded in list order with their position as object id,
//! so all records of primitive `i` precede those of primitive `i + 1`. An
//! optional [`SpaceTransform`] then rescales the whole buffer.
//!
//! A pass either succeeds completely or fails without producing output;
//! there is no partial result holding only the primitives before a failure.

use crate::command_list::CommandList;
use crate::error::{DrawListError, Result};
use crate::geometry::{Extent, Vec2};
use crate::primitive::{Expand, DEFAULT_TOLERANCE};
use crate::record::PackedRecord;

/// Uniform rescale of packed records into another coordinate space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceTransform {
    pub scale: Vec2,
}

impl SpaceTransform {
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            scale: Vec2::new(sx, sy),
        }
    }

    /// Maps pixel coordinates of `extent` onto `[0, 1] x [0, 1]`
    pub fn pixels_to_normalized(extent: Extent) -> Self {
        Self::scale(1.0 / extent.width as f32, 1.0 / extent.height as f32)
    }

    /// Rescale every record in place
    ///
    /// Not idempotent: applying twice compounds the scale.
    pub fn apply(&self, records: &mut [PackedRecord]) {
        for record in records.iter_mut() {
            *record = record.scaled(self.scale);
        }
    }
}

/// Parameters of one packing pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackOptions {
    /// Curve flattening tolerance, must be > 0 when the list holds curves
    pub tolerance: f32,
    /// Rescale applied after expansion
    pub transform: Option<SpaceTransform>,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            transform: None,
        }
    }
}

impl PackOptions {
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_transform(mut self, transform: SpaceTransform) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// Pack a command list into a new record vector
pub fn pack(list: &CommandList, options: &PackOptions) -> Result<Vec<PackedRecord>> {
    let mut out = Vec::with_capacity(list.len());
    pack_into(list, options, &mut out)?;
    Ok(out)
}

fn pack_into(list: &CommandList, options: &PackOptions, out: &mut Vec<PackedRecord>) -> Result<()> {
    for (index, primitive) in list.iter().enumerate() {
        let object_id = i32::try_from(index).map_err(|_| {
            DrawListError::InvalidArgument(format!("object id {index} does not fit in i32"))
        })?;
        let before = out.len();
        primitive.expand_into(object_id, options.tolerance, out)?;
        tracing::trace!(
            "Expanded {} #{} into {} records",
            primitive.kind(),
            object_id,
            out.len() - before
        );
    }

    if let Some(transform) = options.transform {
        transform.apply(out);
    }

    tracing::debug!(
        "Packed {} primitives into {} records",
        list.len(),
        out.len()
    );
    Ok(())
}

/// Reusable packing buffer
///
/// Keeps its allocation between passes. A failed pass leaves the records of
/// the last successful pass in place.
#[derive(Debug, Default)]
pub struct Packer {
    records: Vec<PackedRecord>,
    scratch: Vec<PackedRecord>,
}

impl Packer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repack `list`, replacing the buffer on success
    pub fn pack(&mut self, list: &CommandList, options: &PackOptions) -> Result<&[PackedRecord]> {
        self.scratch.clear();
        pack_into(list, options, &mut self.scratch)?;
        std::mem::swap(&mut self.records, &mut self.scratch);
        Ok(&self.records)
    }

    /// Records of the last successful pass
    pub fn records(&self) -> &[PackedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.scratch.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use crate::primitive::{Circle, Curve, Line, PolyLine, Rect};
    use crate::record::CommandType;

    fn sample_list() -> CommandList {
        let mut list = CommandList::new();
        list.push(Line::default());
        list.push(PolyLine::default());
        list.push(Circle::default());
        list
    }

    #[test]
    fn test_empty_list_packs_to_nothing() {
        let records = pack(&CommandList::new(), &PackOptions::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_object_ids_follow_list_position() {
        let records = pack(&sample_list(), &PackOptions::default()).unwrap();
        let ids: Vec<i32> = records.iter().map(|r| r.object_id).collect();
        assert_eq!(ids, vec![0, 1, 1, 1, 2]);
    }

    #[test]
    fn test_transform_applies_after_expansion() {
        let mut list = CommandList::new();
        list.push(Rect::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0), Color::BLACK));
        list.push(Circle::new(Vec2::new(10.0, 10.0), 5.0, Color::BLACK, 2.0));

        let options = PackOptions::default().with_transform(SpaceTransform::scale(0.5, 0.25));
        let records = pack(&list, &options).unwrap();

        assert_eq!(records[0].start, [5.0, 5.0]);
        assert_eq!(records[0].end, [2.0, 2.0]);
        assert_eq!(records[1].kind(), Some(CommandType::Arc));
        assert_eq!(records[1].end, [0.0, crate::geometry::TAU]);
        assert_eq!(records[1].radius, 2.5);
        assert_eq!(records[1].thickness, 1.0);
    }

    #[test]
    fn test_pixels_to_normalized() {
        let t = SpaceTransform::pixels_to_normalized(Extent::new(200, 100));
        assert_eq!(t.scale, Vec2::new(0.005, 0.01));
    }

    #[test]
    fn test_bad_tolerance_fails_whole_pass() {
        let mut list = sample_list();
        list.push(Curve::default());
        let options = PackOptions::default().with_tolerance(0.0);
        assert!(pack(&list, &options).is_err());
    }

    #[test]
    fn test_packer_keeps_previous_records_on_failure() {
        let mut list = sample_list();
        let mut packer = Packer::new();
        assert_eq!(packer.pack(&list, &PackOptions::default()).unwrap().len(), 5);

        list.push(Curve::default());
        let err = packer.pack(&list, &PackOptions::default().with_tolerance(-1.0));
        assert!(err.is_err());
        assert_eq!(packer.len(), 5);
        assert_eq!(packer.records()[4].kind(), Some(CommandType::Arc));

        packer.clear();
        assert!(packer.is_empty());
    }

    #[test]
    fn test_packer_matches_free_function() {
        let list = sample_list();
        let mut packer = Packer::new();
        let expected = pack(&list, &PackOptions::default()).unwrap();
        assert_eq!(packer.pack(&list, &PackOptions::default()).unwrap(), &expected[..]);
        // second pass reuses the buffers
        assert_eq!(packer.pack(&list, &PackOptions::default()).unwrap(), &expected[..]);
    }
}
