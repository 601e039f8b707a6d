//! Camera description records.
//!
//! These describe an externally built camera to the host layer; the crate
//! never constructs a camera itself.

use serde::{Deserialize, Serialize};

use crate::common::Position;
use crate::config::{Config, finite};
use crate::errors::Result;

/// Perspective projection parameters. Absent fields keep the host
/// defaults; `fov` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerspectiveCameraOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fov: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub far: Option<f32>,
    #[serde(flatten)]
    pub position: Position,
}

impl Config for PerspectiveCameraOptions {
    const KIND: &'static str = "perspective camera";

    fn validate(&self) -> Result<()> {
        finite(Self::KIND, "fov", self.fov)?;
        finite(Self::KIND, "aspect", self.aspect)?;
        finite(Self::KIND, "near", self.near)?;
        finite(Self::KIND, "far", self.far)?;
        self.position.check(Self::KIND)
    }
}

/// Orthographic projection parameters, as view-volume planes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrthographicCameraOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub far: Option<f32>,
    #[serde(flatten)]
    pub position: Position,
}

impl Config for OrthographicCameraOptions {
    const KIND: &'static str = "orthographic camera";

    fn validate(&self) -> Result<()> {
        finite(Self::KIND, "left", self.left)?;
        finite(Self::KIND, "right", self.right)?;
        finite(Self::KIND, "top", self.top)?;
        finite(Self::KIND, "bottom", self.bottom)?;
        finite(Self::KIND, "near", self.near)?;
        finite(Self::KIND, "far", self.far)?;
        self.position.check(Self::KIND)
    }
}

/// Which projection the described camera uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraProjection {
    Perspective(PerspectiveCameraOptions),
    Orthographic(OrthographicCameraOptions),
}

impl Config for CameraProjection {
    const KIND: &'static str = "camera projection";

    fn validate(&self) -> Result<()> {
        match self {
            Self::Perspective(options) => options.validate(),
            Self::Orthographic(options) => options.validate(),
        }
    }
}

/// View options handed to the host at scene setup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraOptions {
    /// Texture anisotropy hint for the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anisotropy: Option<f32>,
    /// Camera to use instead of the host default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraProjection>,
    /// Render through the immersive (XR) pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_xr: Option<bool>,
}

impl CameraOptions {
    /// Whether immersive rendering was requested; defaults to off.
    #[must_use]
    pub fn is_xr_enabled(&self) -> bool {
        self.enable_xr.unwrap_or(false)
    }
}

impl Config for CameraOptions {
    const KIND: &'static str = "camera";

    fn validate(&self) -> Result<()> {
        finite(Self::KIND, "anisotropy", self.anisotropy)?;
        match &self.camera {
            Some(projection) => projection.validate(),
            None => Ok(()),
        }
    }
}
