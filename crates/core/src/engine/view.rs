//! Presentation-ready projection of the engine state.

use serde::Serialize;

use super::config::BrowseConfig;
use super::types::{EngineSnapshot, QueryPhase};

/// Colour used for types missing from the palette.
pub const DEFAULT_TYPE_COLOR: &str = "#777";

/// Badge colour for a type name.
pub fn type_color(name: &str) -> &'static str {
    match name {
        "normal" => "#A8A77A",
        "fire" => "#EE8130",
        "water" => "#6390F0",
        "electric" => "#F7D02C",
        "grass" => "#7AC74C",
        "ice" => "#96D9D6",
        "fighting" => "#C22E28",
        "poison" => "#A33EA1",
        "ground" => "#E2BF65",
        "flying" => "#A98FF3",
        "psychic" => "#F95587",
        "bug" => "#A6B91A",
        "rock" => "#B6A136",
        "ghost" => "#735797",
        "dragon" => "#6F35FC",
        "dark" => "#705746",
        "steel" => "#B7B7CE",
        "fairy" => "#D685AD",
        _ => DEFAULT_TYPE_COLOR,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeBadge {
    pub name: String,
    pub color: &'static str,
}

impl TypeBadge {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: type_color(name),
        }
    }
}

/// One entry of the type filter list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeFilterEntry {
    pub index: usize,
    pub name: String,
    pub selected: bool,
    pub color: &'static str,
}

/// One Pokémon card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PokemonCard {
    pub id: u32,
    pub name: String,
    /// Sprite URL, or the configured fallback image.
    pub image: String,
    /// True when `image` is the fallback.
    pub placeholder_image: bool,
    pub types: Vec<TypeBadge>,
}

/// Everything needed to draw the browse page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BrowseView {
    pub title: String,
    pub types: Vec<TypeFilterEntry>,
    pub selected_types: Vec<String>,
    pub phase: QueryPhase,
    pub loading: bool,
    /// Empty while loading.
    pub pokemon: Vec<PokemonCard>,
    pub has_previous: bool,
    pub has_next: bool,
    pub offset: u32,
    pub limit: u32,
    pub page_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BrowseView {
    pub fn new(snapshot: &EngineSnapshot, config: &BrowseConfig) -> Self {
        let loading = snapshot.loading();

        let types = snapshot
            .categories
            .iter()
            .enumerate()
            .map(|(index, c)| TypeFilterEntry {
                index,
                name: c.name.clone(),
                selected: c.selected,
                color: type_color(&c.name),
            })
            .collect();

        let (pokemon, has_previous, has_next) = match (&snapshot.result, loading) {
            (Some(result), false) => (
                result
                    .items
                    .iter()
                    .map(|d| {
                        let placeholder_image = d.image_reference.is_none();
                        PokemonCard {
                            id: d.id,
                            name: d.name.clone(),
                            image: d
                                .image_reference
                                .clone()
                                .unwrap_or_else(|| config.fallback_image.clone()),
                            placeholder_image,
                            types: d.categories.iter().map(|t| TypeBadge::new(t)).collect(),
                        }
                    })
                    .collect(),
                result.has_previous,
                result.has_next,
            ),
            _ => (Vec::new(), false, false),
        };

        Self {
            title: config.title.clone(),
            types,
            selected_types: snapshot.selected_names(),
            phase: snapshot.phase,
            loading,
            pokemon,
            has_previous,
            has_next,
            offset: snapshot.window.offset(),
            limit: snapshot.window.limit(),
            page_number: snapshot.window.page_number(),
            error: snapshot.last_error.as_ref().map(|e| e.message.clone()),
        }
    }
}
