//! Render settings
//!
//! Scalars handed to the shader stage alongside the record buffer, plus the
//! packing parameters. Loaded from TOML:
//!
//! ```toml
//! background_color = [1.0, 1.0, 1.0, 1.0]
//! anti_aliasing_scalar = 1.5
//! tolerance = 0.0005
//!
//! [space]
//! mode = "pixels"
//! width = 1024
//! height = 1024
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DrawListError, Result};
use crate::geometry::{Color, Extent};
use crate::pack::{PackOptions, SpaceTransform};
use crate::primitive::DEFAULT_TOLERANCE;

/// Space primitives are authored in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CoordinateSpace {
    /// `[0, 1] x [0, 1]` across the render target
    #[default]
    Normalized,
    /// Absolute pixels of a fixed-size texture, normalized after packing
    Pixels { width: u32, height: u32 },
}

impl CoordinateSpace {
    /// Extent to initialize new primitives against
    pub fn authoring_extent(&self) -> Extent {
        match *self {
            CoordinateSpace::Normalized => Extent::NORMALIZED,
            CoordinateSpace::Pixels { width, height } => Extent::new(width, height),
        }
    }

    /// Transform that brings packed records back to normalized space
    pub fn transform(&self) -> Option<SpaceTransform> {
        match *self {
            CoordinateSpace::Normalized => None,
            CoordinateSpace::Pixels { width, height } => {
                Some(SpaceTransform::pixels_to_normalized(Extent::new(width, height)))
            }
        }
    }
}

/// Settings for one renderer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default = "default_background")]
    pub background_color: Color,
    #[serde(default = "default_anti_aliasing")]
    pub anti_aliasing_scalar: f32,
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
    #[serde(default)]
    pub space: CoordinateSpace,
}

fn default_background() -> Color {
    Color::WHITE
}

fn default_anti_aliasing() -> f32 {
    1.0
}

fn default_tolerance() -> f32 {
    DEFAULT_TOLERANCE
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background_color: default_background(),
            anti_aliasing_scalar: default_anti_aliasing(),
            tolerance: default_tolerance(),
            space: CoordinateSpace::default(),
        }
    }
}

impl RenderSettings {
    /// Parse and validate settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: RenderSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!("Loaded render settings from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Reject values that would break packing or shading
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0) {
            return Err(DrawListError::InvalidArgument(format!(
                "tolerance must be greater than zero, got {}",
                self.tolerance
            )));
        }
        if !(self.anti_aliasing_scalar > 0.0) {
            return Err(DrawListError::InvalidArgument(format!(
                "anti_aliasing_scalar must be greater than zero, got {}",
                self.anti_aliasing_scalar
            )));
        }
        if let CoordinateSpace::Pixels { width, height } = self.space {
            if width == 0 || height == 0 {
                return Err(DrawListError::InvalidArgument(format!(
                    "pixel space must be non-empty, got {width}x{height}"
                )));
            }
        }
        Ok(())
    }

    /// Options for packing a list authored under these settings
    pub fn pack_options(&self) -> PackOptions {
        PackOptions {
            tolerance: self.tolerance,
            transform: self.space.transform(),
        }
    }

    pub fn authoring_extent(&self) -> Extent {
        self.space.authoring_extent()
    }
}
