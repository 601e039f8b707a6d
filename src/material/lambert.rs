use super::macros::material_params;
use crate::common::Color;

material_params!(
    /// Diffuse-only lit surface.
    ///
    /// The family factories fall back to when a caller selects nothing,
    /// conventionally in light grey (`0xcccccc`).
    LambertMaterialParams, "lambert material",
    fields: [
        (color, Color, "Surface color."),
        (emissive, Color, "Emissive color, unaffected by lighting."),
        (map, String, "Color texture, referenced by asset path or key."),
    ],
    finite: []
);
