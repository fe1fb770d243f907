//! Core data models for garment-impact
//!
//! Defines the input side of the calculator:
//! - `Category`, `Material`: closed garment enumerations
//! - `GarmentDescriptor`: a validated garment choice
//! - `GarmentInput`: the loosely typed form that arrives from JSON or the CLI

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, ImpactResult};

/// Garment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Shirts, t-shirts, blouses
    Top,
    /// Jeans, trousers, skirts
    Bottom,
    Dress,
    /// Jackets and coats
    Outerwear,
    /// Bags, shoes, jewellery
    Accessory,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Dress,
        Category::Outerwear,
        Category::Accessory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Dress => "dress",
            Category::Outerwear => "outerwear",
            Category::Accessory => "accessory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ImpactError;

    /// Accepts canonical names plus the garment-type names used by older
    /// front ends (`t-shirt`, `jeans`, `jacket`, `shoes`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" | "t-shirt" | "tshirt" | "shirt" => Ok(Category::Top),
            "bottom" | "jeans" | "pants" | "trousers" => Ok(Category::Bottom),
            "dress" => Ok(Category::Dress),
            "outerwear" | "jacket" | "coat" => Ok(Category::Outerwear),
            "accessory" | "shoes" => Ok(Category::Accessory),
            other => Err(ImpactError::invalid(
                "category",
                format!(
                    "unknown category '{}' (expected one of: top, bottom, dress, outerwear, accessory)",
                    other
                ),
            )),
        }
    }
}

/// Garment material
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    Cotton,
    Polyester,
    Recycled,
    Organic,
    #[serde(alias = "synthetic_blend")]
    SyntheticBlend,
}

impl Material {
    pub const ALL: [Material; 5] = [
        Material::Cotton,
        Material::Polyester,
        Material::Recycled,
        Material::Organic,
        Material::SyntheticBlend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Cotton => "cotton",
            Material::Polyester => "polyester",
            Material::Recycled => "recycled",
            Material::Organic => "organic",
            Material::SyntheticBlend => "synthetic-blend",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cotton" => Ok(Material::Cotton),
            "polyester" => Ok(Material::Polyester),
            "recycled" => Ok(Material::Recycled),
            "organic" => Ok(Material::Organic),
            "synthetic-blend" | "synthetic_blend" | "blend" => Ok(Material::SyntheticBlend),
            other => Err(ImpactError::invalid(
                "material",
                format!(
                    "unknown material '{}' (expected one of: cotton, polyester, recycled, organic, synthetic-blend)",
                    other
                ),
            )),
        }
    }
}

/// A validated garment choice
///
/// The quantity is always at least 1; the only constructors check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GarmentDescriptor {
    category: Category,
    material: Material,
    quantity: NonZeroU32,
}

impl GarmentDescriptor {
    /// Create a descriptor, rejecting a zero quantity
    pub fn new(category: Category, material: Material, quantity: u32) -> ImpactResult<Self> {
        let quantity = NonZeroU32::new(quantity)
            .ok_or_else(|| ImpactError::invalid("quantity", "must be at least 1, got 0"))?;
        Ok(Self {
            category,
            material,
            quantity,
        })
    }

    /// A single garment
    pub fn single(category: Category, material: Material) -> Self {
        Self {
            category,
            material,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Same garment with a different quantity
    pub fn with_quantity(self, quantity: u32) -> ImpactResult<Self> {
        Self::new(self.category, self.material, quantity)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }
}

/// Garment record as supplied by an external caller
///
/// Strings are not trusted; use [`GarmentInput::validate`] (or `TryFrom`) to
/// obtain a [`GarmentDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentInput {
    pub category: String,
    pub material: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

impl GarmentInput {
    pub fn new(category: impl Into<String>, material: impl Into<String>, quantity: i64) -> Self {
        Self {
            category: category.into(),
            material: material.into(),
            quantity,
        }
    }

    /// Check every field and build a descriptor.
    ///
    /// Fields are checked in order category, material, quantity; the error
    /// names the first offending one.
    pub fn validate(&self) -> ImpactResult<GarmentDescriptor> {
        let category: Category = self.category.parse()?;
        let material: Material = self.material.parse()?;
        if self.quantity < 1 {
            return Err(ImpactError::invalid(
                "quantity",
                format!("must be at least 1, got {}", self.quantity),
            ));
        }
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            ImpactError::invalid(
                "quantity",
                format!("must be at most {}, got {}", u32::MAX, self.quantity),
            )
        })?;
        GarmentDescriptor::new(category, material, quantity)
    }
}

impl TryFrom<&GarmentInput> for GarmentDescriptor {
    type Error = ImpactError;

    fn try_from(input: &GarmentInput) -> Result<Self, Self::Error> {
        input.validate()
    }
}

impl From<GarmentDescriptor> for GarmentInput {
    fn from(d: GarmentDescriptor) -> Self {
        Self {
            category: d.category.as_str().to_string(),
            material: d.material.as_str().to_string(),
            quantity: i64::from(d.quantity()),
        }
    }
}
