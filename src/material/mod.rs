//! Material selection records.
//!
//! A [`MaterialConfig`] names at most one material family by populating
//! that family's parameter set; factories receive the selection resolved
//! to exactly one family as a [`MaterialKind`]. Populating nothing selects
//! the default Lambert material.

mod basic;
mod lambert;
mod line;
mod macros;
mod normal;
mod phong;
mod points;
mod standard;

pub use basic::BasicMaterialParams;
pub use lambert::LambertMaterialParams;
pub use line::LineMaterialParams;
pub use normal::NormalMaterialParams;
pub use phong::PhongMaterialParams;
pub use points::PointsMaterialParams;
pub use standard::StandardMaterialParams;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::Config;
use crate::errors::Result;

/// Escape hatch for a material family the host defines itself.
///
/// The typed rendition of an open-ended parameter mapping: the family is
/// named explicitly and its parameters are forwarded to the host factory
/// untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomMaterialParams {
    /// Family name the host factory understands.
    pub name: String,
    /// Arbitrary parameters, forwarded as-is.
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

// ============================================================================
// Material Selector
// ============================================================================

/// Chooses the rendering material for a primitive.
///
/// Callers are expected to populate at most one family. When several are
/// populated anyway, [`resolve`](MaterialConfig::resolve) applies a fixed
/// precedence; when none is, the default Lambert material wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicMaterialParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<NormalMaterialParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<StandardMaterialParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambert: Option<LambertMaterialParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phong: Option<PhongMaterialParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineMaterialParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<PointsMaterialParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomMaterialParams>,
}

impl MaterialConfig {
    /// Number of populated families.
    #[must_use]
    pub fn populated(&self) -> usize {
        usize::from(self.basic.is_some())
            + usize::from(self.normal.is_some())
            + usize::from(self.standard.is_some())
            + usize::from(self.lambert.is_some())
            + usize::from(self.phong.is_some())
            + usize::from(self.line.is_some())
            + usize::from(self.points.is_some())
            + usize::from(self.custom.is_some())
    }

    /// Resolves the selection to exactly one family.
    ///
    /// The first populated family in declaration order wins: `basic`,
    /// `normal`, `standard`, `lambert`, `phong`, `line`, `points`,
    /// `custom`. With nothing populated the result is the default Lambert
    /// material (factories render it light grey, `0xcccccc`). Extra
    /// populated families are ignored with a warning; the outcome is
    /// stable across repeated calls on the same value.
    #[must_use]
    pub fn resolve(&self) -> MaterialKind {
        let populated = self.populated();

        let kind = if let Some(params) = &self.basic {
            MaterialKind::Basic(params.clone())
        } else if let Some(params) = &self.normal {
            MaterialKind::Normal(params.clone())
        } else if let Some(params) = &self.standard {
            MaterialKind::Standard(params.clone())
        } else if let Some(params) = &self.lambert {
            MaterialKind::Lambert(params.clone())
        } else if let Some(params) = &self.phong {
            MaterialKind::Phong(params.clone())
        } else if let Some(params) = &self.line {
            MaterialKind::Line(params.clone())
        } else if let Some(params) = &self.points {
            MaterialKind::Points(params.clone())
        } else if let Some(params) = &self.custom {
            MaterialKind::Custom(params.clone())
        } else {
            MaterialKind::Lambert(LambertMaterialParams::default())
        };

        if populated > 1 {
            log::warn!(
                "material config populates {populated} families; using `{}`",
                kind.family()
            );
        }

        kind
    }
}

impl Config for MaterialConfig {
    const KIND: &'static str = "material";

    fn validate(&self) -> Result<()> {
        if let Some(params) = &self.basic {
            params.validate()?;
        }
        if let Some(params) = &self.normal {
            params.validate()?;
        }
        if let Some(params) = &self.standard {
            params.validate()?;
        }
        if let Some(params) = &self.lambert {
            params.validate()?;
        }
        if let Some(params) = &self.phong {
            params.validate()?;
        }
        if let Some(params) = &self.line {
            params.validate()?;
        }
        if let Some(params) = &self.points {
            params.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Resolved Selection
// ============================================================================

/// A material selection resolved to exactly one family.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialKind {
    Basic(BasicMaterialParams),
    Normal(NormalMaterialParams),
    Standard(StandardMaterialParams),
    Lambert(LambertMaterialParams),
    Phong(PhongMaterialParams),
    Line(LineMaterialParams),
    Points(PointsMaterialParams),
    Custom(CustomMaterialParams),
}

impl MaterialKind {
    /// Family name, as it appears in a [`MaterialConfig`] mapping.
    #[must_use]
    pub fn family(&self) -> &'static str {
        match self {
            Self::Basic(_) => "basic",
            Self::Normal(_) => "normal",
            Self::Standard(_) => "standard",
            Self::Lambert(_) => "lambert",
            Self::Phong(_) => "phong",
            Self::Line(_) => "line",
            Self::Points(_) => "points",
            Self::Custom(_) => "custom",
        }
    }
}

// ============================================================================
// Conversions from concrete parameter sets
// ============================================================================

impl From<BasicMaterialParams> for MaterialConfig {
    fn from(params: BasicMaterialParams) -> Self {
        Self {
            basic: Some(params),
            ..Self::default()
        }
    }
}

impl From<NormalMaterialParams> for MaterialConfig {
    fn from(params: NormalMaterialParams) -> Self {
        Self {
            normal: Some(params),
            ..Self::default()
        }
    }
}

impl From<StandardMaterialParams> for MaterialConfig {
    fn from(params: StandardMaterialParams) -> Self {
        Self {
            standard: Some(params),
            ..Self::default()
        }
    }
}

impl From<LambertMaterialParams> for MaterialConfig {
    fn from(params: LambertMaterialParams) -> Self {
        Self {
            lambert: Some(params),
            ..Self::default()
        }
    }
}

impl From<PhongMaterialParams> for MaterialConfig {
    fn from(params: PhongMaterialParams) -> Self {
        Self {
            phong: Some(params),
            ..Self::default()
        }
    }
}

impl From<LineMaterialParams> for MaterialConfig {
    fn from(params: LineMaterialParams) -> Self {
        Self {
            line: Some(params),
            ..Self::default()
        }
    }
}

impl From<PointsMaterialParams> for MaterialConfig {
    fn from(params: PointsMaterialParams) -> Self {
        Self {
            points: Some(params),
            ..Self::default()
        }
    }
}

impl From<CustomMaterialParams> for MaterialConfig {
    fn from(params: CustomMaterialParams) -> Self {
        Self {
            custom: Some(params),
            ..Self::default()
        }
    }
}
