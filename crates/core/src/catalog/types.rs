//! Types for catalog API responses.

use serde::{Deserialize, Serialize};

/// A Pokémon type, used as a filter dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Type name (e.g. "fire"). Unique within the category list.
    pub name: String,
    /// Endpoint listing every Pokémon of this type.
    pub membership_endpoint: String,
    /// Whether the type is currently part of the filter.
    #[serde(default)]
    pub selected: bool,
}

impl Category {
    /// Create an unselected category.
    pub fn new(name: impl Into<String>, membership_endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            membership_endpoint: membership_endpoint.into(),
            selected: false,
        }
    }
}

/// A Pokémon list entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CatalogItem {
    /// Pokémon name. Unique within a membership list.
    pub name: String,
    /// URL of the full detail record.
    pub detail_reference: String,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, detail_reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail_reference: detail_reference.into(),
        }
    }
}

/// One entry of a type's membership list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryMember {
    pub item: CatalogItem,
    /// Slot the type occupies on this Pokémon (1 = primary type).
    pub slot: u32,
}

/// One page of the unfiltered catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogPage {
    pub results: Vec<CatalogItem>,
    /// Total number of entries the upstream reports.
    #[serde(default)]
    pub total_count: u32,
    /// Upstream returned a `previous` cursor.
    pub has_previous: bool,
    /// Upstream returned a `next` cursor.
    pub has_next: bool,
}

/// Full record for one Pokémon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItemDetail {
    /// National dex number. Stable and unique.
    pub id: u32,
    pub name: String,
    /// Type names, ordered by slot.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Front sprite URL, when the upstream has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
    /// Height in decimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Weight in hectograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_experience: Option<u32>,
}
