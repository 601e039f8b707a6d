use super::macros::material_params;
use crate::common::Color;

material_params!(
    /// Physically based surface with a roughness/metalness workflow.
    StandardMaterialParams, "standard material",
    fields: [
        (color, Color, "Base color."),
        (roughness, f32, "Roughness factor, `0.0` mirror to `1.0` diffuse."),
        (metalness, f32, "Metalness factor, `0.0` dielectric to `1.0` metal."),
        (emissive, Color, "Emissive color, unaffected by lighting."),
        (map, String, "Color texture, referenced by asset path or key."),
    ],
    finite: [roughness, metalness]
);
