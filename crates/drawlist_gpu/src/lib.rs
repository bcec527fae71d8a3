//! Draw list GPU upload
//!
//! Hands packed draw records to the GPU: a storage buffer holding the record
//! array, sized exactly to the record count, and a small uniform block with
//! the background color, anti-aliasing scale and record count.
//!
//! Shader programs and render passes belong to the host; this crate stops at
//! the buffers they bind.

pub mod buffer;
pub mod renderer;
pub mod uniforms;

pub use buffer::{BufferAllocator, BufferUsage, RecordBuffer, UploadKind, WgpuAllocator};
pub use renderer::{DrawListRenderer, RenderError, RenderOutcome};
pub use uniforms::FrameUniforms;
