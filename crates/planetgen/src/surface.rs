//! Catalog materials as they appear on a generated planet
//!
//! Extreme temperatures turn a catalog entry into a variant ("Molten Basalt",
//! "Boiling Ammonia", "Ethane Sediment"). The base record is never copied and
//! edited; the variant is an explicit [`MaterialOverride`] layered on top.

use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::catalog::{ChemicalTag, Material};
use crate::color::Rgb;

/// Display fields that replace those of the base record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct MaterialOverride {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<ChemicalTag>,
}

impl MaterialOverride {
    /// Override that only renames the material
    pub fn renamed(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            color: None,
            tag: None,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_tag(mut self, tag: ChemicalTag) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// A catalog material plus its optional planet-specific variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct Surface<M> {
    pub material: M,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<MaterialOverride>,
}

impl<M: Material> Surface<M> {
    pub fn plain(material: M) -> Self {
        Self {
            material,
            variant: None,
        }
    }

    pub fn with_variant(material: M, variant: MaterialOverride) -> Self {
        Self {
            material,
            variant: Some(variant),
        }
    }

    /// Name shown to the user (variant name when present)
    pub fn display_name(&self) -> &str {
        self.variant
            .as_ref()
            .map(|v| v.display_name.as_str())
            .unwrap_or_else(|| self.material.name())
    }

    /// Effective color
    pub fn color(&self) -> Rgb {
        self.variant
            .as_ref()
            .and_then(|v| v.color)
            .unwrap_or_else(|| self.material.color())
    }

    /// Effective chemical tag
    pub fn tag(&self) -> ChemicalTag {
        self.variant
            .as_ref()
            .and_then(|v| v.tag)
            .unwrap_or_else(|| self.material.tag())
    }
}
