//! Frame driver: repack on change, upload records and uniforms
//!
//! The host loop owns the [`CommandList`] and calls [`DrawListRenderer::set_dirty`]
//! whenever it edits it (or on a timer for animated scenes). Each render
//! packs the list, converts pixel-space records back to normalized space,
//! and hands the buffer plus [`FrameUniforms`] to the allocator.

use drawlist_core::{CommandList, DrawListError, Packer, RenderSettings};
use thiserror::Error;

use crate::buffer::{BufferAllocator, BufferUsage, RecordBuffer, UploadKind};
use crate::uniforms::FrameUniforms;

/// Error type for render operations
#[derive(Error, Debug)]
pub enum RenderError {
    /// Packing the command list failed; the previous upload is untouched
    #[error("Failed to pack draw list: {0}")]
    Pack(#[from] DrawListError),

    /// No GPU adapter available for a headless device
    #[error("No suitable GPU adapter found")]
    AdapterNotFound,

    /// The adapter refused to create a device
    #[error("Failed to request GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// What a render call did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderOutcome {
    /// Records and uniforms were written
    Uploaded {
        records: usize,
        reallocated: bool,
        uniforms: FrameUniforms,
    },
    /// Nothing to draw, or nothing changed
    Skipped,
}

/// Uploads a command list to the GPU on demand
pub struct DrawListRenderer<A: BufferAllocator> {
    settings: RenderSettings,
    packer: Packer,
    records: RecordBuffer<A>,
    uniforms: Option<A::Buffer>,
    dirty: bool,
}

impl<A: BufferAllocator> DrawListRenderer<A> {
    pub fn new(allocator: A, settings: RenderSettings) -> Self {
        Self {
            settings,
            packer: Packer::new(),
            records: RecordBuffer::new(allocator),
            uniforms: None,
            dirty: true,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Replace the settings; the next frame re-renders
    pub fn set_settings(&mut self, settings: RenderSettings) {
        self.settings = settings;
        self.dirty = true;
    }

    pub fn set_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records of the last successful pack
    pub fn packed(&self) -> &[drawlist_core::PackedRecord] {
        self.packer.records()
    }

    pub fn record_buffer(&self) -> &RecordBuffer<A> {
        &self.records
    }

    pub fn uniform_buffer(&self) -> Option<&A::Buffer> {
        self.uniforms.as_ref()
    }

    /// Render only if something changed since the last render
    pub fn render_if_dirty(&mut self, list: &CommandList) -> Result<RenderOutcome, RenderError> {
        if !self.dirty {
            return Ok(RenderOutcome::Skipped);
        }
        self.render(list)
    }

    /// Pack `list` and upload the result
    pub fn render(&mut self, list: &CommandList) -> Result<RenderOutcome, RenderError> {
        let options = self.settings.pack_options();
        let records = self.packer.pack(list, &options)?;
        self.dirty = false;

        if records.is_empty() {
            tracing::warn!("Zero draw records: skipping upload");
            self.records.release();
            return Ok(RenderOutcome::Skipped);
        }

        let count = records.len();
        let upload = self.records.upload(records);
        let uniforms = FrameUniforms::new(&self.settings, count);

        let allocator = self.records.allocator_mut();
        let buffer = self.uniforms.get_or_insert_with(|| {
            allocator.allocate(
                "Draw List Uniforms Buffer",
                BufferUsage::Uniform,
                std::mem::size_of::<FrameUniforms>() as u64,
            )
        });
        allocator.write(buffer, uniforms.as_bytes());

        tracing::debug!("Uploaded {} draw records ({:?})", count, upload);
        Ok(RenderOutcome::Uploaded {
            records: count,
            reallocated: upload == UploadKind::Reallocated,
            uniforms,
        })
    }

    /// Release all GPU buffers; the next frame re-renders
    pub fn release(&mut self) {
        self.records.release();
        if let Some(buffer) = self.uniforms.take() {
            self.records.allocator_mut().release(buffer);
        }
        self.dirty = true;
    }
}

impl<A: BufferAllocator> Drop for DrawListRenderer<A> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::testing::{Event, RecordingAllocator};
    use drawlist_core::{Circle, Color, CoordinateSpace, Curve, Line, Vec2};

    fn renderer() -> DrawListRenderer<RecordingAllocator> {
        DrawListRenderer::new(RecordingAllocator::default(), RenderSettings::default())
    }

    fn events(r: &DrawListRenderer<RecordingAllocator>) -> &[Event] {
        &r.record_buffer().allocator().events
    }

    #[test]
    fn test_first_render_uploads_records_and_uniforms() {
        let mut list = CommandList::new();
        list.push(Line::default());
        list.push(Circle::default());

        let mut r = renderer();
        assert!(r.is_dirty());
        match r.render(&list).unwrap() {
            RenderOutcome::Uploaded {
                records,
                reallocated,
                uniforms,
            } => {
                assert_eq!(records, 2);
                assert!(reallocated);
                assert_eq!(uniforms.command_count, 2);
                assert_eq!(uniforms.background_color, Color::WHITE.to_array());
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(!r.is_dirty());
        assert!(r.uniform_buffer().is_some());
        assert_eq!(r.record_buffer().allocator().live(), 2);
    }

    #[test]
    fn test_clean_frames_are_skipped() {
        let mut list = CommandList::new();
        list.push(Line::default());
        let mut r = renderer();
        r.render_if_dirty(&list).unwrap();
        let before = events(&r).len();

        assert_eq!(r.render_if_dirty(&list).unwrap(), RenderOutcome::Skipped);
        assert_eq!(events(&r).len(), before);

        r.set_dirty();
        assert!(matches!(
            r.render_if_dirty(&list).unwrap(),
            RenderOutcome::Uploaded { reallocated: false, .. }
        ));
    }

    #[test]
    fn test_empty_list_is_skipped_not_an_error() {
        let mut r = renderer();
        assert_eq!(r.render(&CommandList::new()).unwrap(), RenderOutcome::Skipped);
        assert!(events(&r).is_empty());
        assert!(!r.is_dirty());
    }

    #[test]
    fn test_pack_error_keeps_previous_upload() {
        let mut list = CommandList::new();
        list.push(Curve::default());
        let mut r = renderer();
        r.render(&list).unwrap();
        let uploaded = r.packed().len();

        r.set_settings(RenderSettings {
            tolerance: 0.0,
            ..RenderSettings::default()
        });
        let err = r.render(&list).unwrap_err();
        assert!(matches!(err, RenderError::Pack(DrawListError::InvalidArgument(_))));
        assert_eq!(r.packed().len(), uploaded);
        assert_eq!(r.record_buffer().count(), uploaded);
        assert!(r.is_dirty());
    }

    #[test]
    fn test_pixel_space_is_normalized_before_upload() {
        let settings = RenderSettings {
            space: CoordinateSpace::Pixels {
                width: 100,
                height: 50,
            },
            ..RenderSettings::default()
        };
        let mut list = CommandList::new();
        list.push(Line::new(
            Vec2::new(50.0, 25.0),
            Vec2::new(100.0, 50.0),
            5.0,
            Color::BLACK,
        ));

        let mut r = DrawListRenderer::new(RecordingAllocator::default(), settings);
        r.render(&list).unwrap();
        let record = r.packed()[0];
        let close = |a: [f32; 2], b: [f32; 2]| (a[0] - b[0]).abs() < 1e-6 && (a[1] - b[1]).abs() < 1e-6;
        assert!(close(record.start, [0.5, 0.5]));
        assert!(close(record.end, [1.0, 1.0]));
        assert!((record.thickness - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_release_frees_everything() {
        let mut list = CommandList::new();
        list.push(Line::default());
        let mut r = renderer();
        r.render(&list).unwrap();
        r.release();
        assert_eq!(r.record_buffer().allocator().live(), 0);
        assert!(r.is_dirty());
    }
}
