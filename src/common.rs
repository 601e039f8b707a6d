//! Shared positional and dimensional records plus the color value type.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::{Config, finite};
use crate::errors::Result;

/// A 3D point. Absent components resolve to the origin downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl Position {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Resolves absent components to zero.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.z.unwrap_or(0.0),
        )
    }

    pub(crate) fn check(self, kind: &'static str) -> Result<()> {
        finite(kind, "x", self.x)?;
        finite(kind, "y", self.y)?;
        finite(kind, "z", self.z)
    }
}

impl Config for Position {
    const KIND: &'static str = "position";

    fn validate(&self) -> Result<()> {
        self.check(Self::KIND)
    }
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A 2D extent. Absent components are left to the factory defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Resolves absent components against a fallback extent.
    #[must_use]
    pub fn to_vec2_or(self, fallback: Vec2) -> Vec2 {
        Vec2::new(
            self.width.unwrap_or(fallback.x),
            self.height.unwrap_or(fallback.y),
        )
    }

    pub(crate) fn check(self, kind: &'static str) -> Result<()> {
        finite(kind, "width", self.width)?;
        finite(kind, "height", self.height)
    }
}

impl Config for Dimensions {
    const KIND: &'static str = "dimensions";

    fn validate(&self) -> Result<()> {
        self.check(Self::KIND)
    }
}

/// A material color: either a packed `0xRRGGBB` value or a named color
/// the host's palette understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Hex(u32),
    Name(String),
}

impl Default for Color {
    /// The conventional light-grey surface color of the default material.
    fn default() -> Self {
        Color::Hex(0xcc_cccc)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Color::Hex(hex)
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Name(name.to_owned())
    }
}
