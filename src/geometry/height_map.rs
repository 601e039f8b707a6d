use serde::{Deserialize, Serialize};

use crate::common::Color;
use crate::config::Config;
use crate::errors::{PrefabError, Result};
use crate::material::MaterialConfig;

/// An elevation gradient: evenly spaced color stops from the lowest to
/// the highest vertex.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorScale {
    pub stops: Vec<Color>,
}

impl ColorScale {
    #[must_use]
    pub fn new(stops: Vec<Color>) -> Self {
        Self { stops }
    }

    pub fn validate(&self) -> Result<()> {
        if self.stops.len() < 2 {
            return Err(PrefabError::DegenerateColorScale {
                count: self.stops.len(),
            });
        }
        Ok(())
    }
}

/// Parameters for the height-map terrain factory.
///
/// The height texture itself is passed to the factory separately; this
/// record only selects how the terrain is shaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeightMapOptions {
    /// Material override for the terrain surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialConfig>,
    /// Vertex-color gradient applied by elevation when no material is
    /// given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
}

impl Config for HeightMapOptions {
    const KIND: &'static str = "height map";

    fn validate(&self) -> Result<()> {
        if let Some(material) = &self.material {
            material.validate()?;
        }
        if let Some(scale) = &self.color_scale {
            scale.validate()?;
        }
        Ok(())
    }
}
