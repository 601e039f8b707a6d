use super::macros::material_params;
use crate::common::Color;

material_params!(
    /// Shiny lit surface with specular highlights.
    PhongMaterialParams, "phong material",
    fields: [
        (color, Color, "Surface color."),
        (specular, Color, "Highlight color."),
        (shininess, f32, "Highlight sharpness; higher is tighter."),
        (emissive, Color, "Emissive color, unaffected by lighting."),
        (map, String, "Color texture, referenced by asset path or key."),
    ],
    finite: [shininess]
);
