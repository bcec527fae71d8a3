//! GPU buffer ownership for packed records
//!
//! [`RecordBuffer`] keeps at most one storage buffer, sized exactly for the
//! records it last received. When the record count changes the old buffer is
//! released before a new one is allocated, and dropping the `RecordBuffer`
//! releases whatever it still holds.

use std::sync::Arc;

use drawlist_core::{as_bytes, PackedRecord};

use crate::renderer::RenderError;

/// How a buffer is bound in the shader
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferUsage {
    /// Read-only storage buffer holding the record array
    Storage,
    /// Uniform buffer holding frame scalars
    Uniform,
}

/// Source of GPU buffers
///
/// Implemented over wgpu by [`WgpuAllocator`]; tests substitute an in-memory
/// allocator.
pub trait BufferAllocator {
    type Buffer;

    fn allocate(&mut self, label: &str, usage: BufferUsage, size_bytes: u64) -> Self::Buffer;

    /// Write `bytes` at offset 0
    fn write(&mut self, buffer: &Self::Buffer, bytes: &[u8]);

    fn release(&mut self, buffer: Self::Buffer);
}

/// Result of a [`RecordBuffer::upload`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    /// No records, no buffer held
    Empty,
    /// A new buffer was allocated for a changed record count
    Reallocated,
    /// The existing buffer had the right size and was rewritten
    Reused,
}

/// Storage buffer sized to `count * PackedRecord::STRIDE`
pub struct RecordBuffer<A: BufferAllocator> {
    allocator: A,
    buffer: Option<A::Buffer>,
    count: usize,
}

impl<A: BufferAllocator> RecordBuffer<A> {
    pub fn new(allocator: A) -> Self {
        Self {
            allocator,
            buffer: None,
            count: 0,
        }
    }

    /// Upload `records`, reallocating only when the count changed
    pub fn upload(&mut self, records: &[PackedRecord]) -> UploadKind {
        if records.is_empty() {
            self.release();
            return UploadKind::Empty;
        }

        let kind = if self.buffer.is_some() && self.count == records.len() {
            UploadKind::Reused
        } else {
            self.release();
            let size = (records.len() * PackedRecord::STRIDE) as u64;
            tracing::debug!(
                "Allocating record buffer: {} records, {} bytes",
                records.len(),
                size
            );
            self.buffer = Some(self.allocator.allocate(
                "Draw List Records Buffer",
                BufferUsage::Storage,
                size,
            ));
            self.count = records.len();
            UploadKind::Reallocated
        };

        if let Some(buffer) = &self.buffer {
            self.allocator.write(buffer, as_bytes(records));
        }
        kind
    }

    /// Release the held buffer, if any
    pub fn release(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            tracing::debug!("Releasing record buffer ({} records)", self.count);
            self.allocator.release(buffer);
        }
        self.count = 0;
    }

    pub fn buffer(&self) -> Option<&A::Buffer> {
        self.buffer.as_ref()
    }

    /// Number of records the held buffer was sized for
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn size_bytes(&self) -> u64 {
        (self.count * PackedRecord::STRIDE) as u64
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }
}

impl<A: BufferAllocator> Drop for RecordBuffer<A> {
    fn drop(&mut self) {
        self.release();
    }
}

/// [`BufferAllocator`] backed by a wgpu device and queue
pub struct WgpuAllocator {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
}

impl WgpuAllocator {
    pub fn new(device: Arc<wgpu::Device>, queue: Arc<wgpu::Queue>) -> Self {
        Self { device, queue }
    }

    /// Create a device without a surface, for offscreen uploads
    pub async fn headless() -> Result<Self, RenderError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::AdapterNotFound)?;
        tracing::debug!("Using adapter: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Draw List Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                },
                None,
            )
            .await?;

        Ok(Self::new(Arc::new(device), Arc::new(queue)))
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}

impl BufferAllocator for WgpuAllocator {
    type Buffer = wgpu::Buffer;

    fn allocate(&mut self, label: &str, usage: BufferUsage, size_bytes: u64) -> wgpu::Buffer {
        let usage = match usage {
            BufferUsage::Storage => wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            BufferUsage::Uniform => wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        };
        self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: size_bytes,
            usage,
            mapped_at_creation: false,
        })
    }

    fn write(&mut self, buffer: &wgpu::Buffer, bytes: &[u8]) {
        self.queue.write_buffer(buffer, 0, bytes);
    }

    fn release(&mut self, buffer: wgpu::Buffer) {
        buffer.destroy();
    }
}
