//! Catalog Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category Record
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    /// Unique numeric identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unique URL-safe identifier, the stable lookup key
    pub slug: String,

    /// Image URI
    pub image: String,

    /// Optional display description
    pub description: Option<String>,

    /// Creation time
    pub created_at: Timestamp,

    /// Last-update time
    pub updated_at: Timestamp,
}

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Unique numeric identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unique URL-safe identifier, the external lookup key for detail pages
    pub slug: String,

    /// Display description
    pub description: String,

    /// Price in major currency units
    pub price: u64,

    /// Identifier of the category this product belongs to
    pub category_id: u32,

    /// Lowercase keyword tags, kept in display order
    pub tags: Vec<String>,

    /// Metal the product is made of
    pub metal_type: MetalType,

    /// Image URIs; the first entry is the primary image
    pub images: Vec<String>,

    /// Whether the product is featured on the storefront
    pub featured: bool,

    /// Whether the product is a new arrival
    pub is_new_arrival: bool,

    /// Creation time, the default listing order
    pub created_at: Timestamp,

    /// Last-update time
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// The primary image, when the product has any images at all.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// The fixed set of metals products are made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetalType {
    /// Yellow gold
    #[serde(rename = "Yellow Gold")]
    YellowGold,

    /// White gold
    #[serde(rename = "White Gold")]
    WhiteGold,

    /// Rose gold
    #[serde(rename = "Rose Gold")]
    RoseGold,

    /// Platinum
    Platinum,

    /// Sterling silver
    Silver,

    /// Gold-plated base metal
    #[serde(rename = "Gold Plated")]
    GoldPlated,
}

impl MetalType {
    /// Storefront display form, e.g. `"White Gold"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::YellowGold => "Yellow Gold",
            Self::WhiteGold => "White Gold",
            Self::RoseGold => "Rose Gold",
            Self::Platinum => "Platinum",
            Self::Silver => "Silver",
            Self::GoldPlated => "Gold Plated",
        }
    }
}

impl fmt::Display for MetalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known metal type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown metal type: {0}")]
pub struct UnknownMetalType(pub String);

impl FromStr for MetalType {
    type Err = UnknownMetalType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yellow gold" => Ok(Self::YellowGold),
            "white gold" => Ok(Self::WhiteGold),
            "rose gold" => Ok(Self::RoseGold),
            "platinum" => Ok(Self::Platinum),
            "silver" => Ok(Self::Silver),
            "gold plated" => Ok(Self::GoldPlated),
            _other => Err(UnknownMetalType(s.to_string())),
        }
    }
}
