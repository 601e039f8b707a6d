// src/material/macros.rs

/// Declares one material family's parameter record.
///
/// Injects the parameters every family shares (`opacity`, `transparent`)
/// ahead of the family-specific ones and wires up serde and the
/// [`Config`](crate::config::Config) boundary. Fields listed under
/// `finite:` get a NaN/infinity check in `validate`.
macro_rules! material_params {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal,
        fields: [ $(($field:ident, $ty:ty, $doc:expr)),* $(,)? ],
        finite: [ $($finite_field:ident),* $(,)? ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            /// Blend opacity, `0.0` fully transparent to `1.0` opaque.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub opacity: Option<f32>,
            /// Draw with alpha blending.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub transparent: Option<bool>,
            $(
                #[doc = $doc]
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $crate::config::Config for $name {
            const KIND: &'static str = $kind;

            fn validate(&self) -> $crate::errors::Result<()> {
                $crate::config::finite(Self::KIND, "opacity", self.opacity)?;
                $(
                    $crate::config::finite(
                        Self::KIND,
                        stringify!($finite_field),
                        self.$finite_field,
                    )?;
                )*
                Ok(())
            }
        }
    };
}

pub(crate) use material_params;
