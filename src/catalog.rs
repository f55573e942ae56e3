//! Tile catalog: categories of tiles, and their normalization from raw markup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Options;
use crate::backend::MarkupBackend;
use crate::document::SvgDocument;
use crate::error::TesseraError;
use crate::extract::parse_with;
use crate::report::{Notice, Reporter};

/// A tile still holding its original markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTile {
    pub id: String,
    pub name: String,
    pub svg: String,
}

/// A tile whose graphic has been parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredTile {
    pub id: String,
    pub name: String,
    pub svg_data: SvgDocument,
}

/// A catalog tile, either awaiting normalization or ready for display.
///
/// In JSON definitions the variant is picked by field: `svg` for raw markup,
/// `svgData` for a structured document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tile {
    Raw(RawTile),
    Structured(StructuredTile),
}

impl Tile {
    pub fn id(&self) -> &str {
        match self {
            Tile::Raw(t) => &t.id,
            Tile::Structured(t) => &t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Tile::Raw(t) => &t.name,
            Tile::Structured(t) => &t.name,
        }
    }

    /// The parsed graphic, if this tile has been normalized.
    pub fn document(&self) -> Option<&SvgDocument> {
        match self {
            Tile::Raw(_) => None,
            Tile::Structured(t) => Some(&t.svg_data),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Tile::Structured(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tiles: Vec<Tile>,
}

impl Category {
    pub fn tile(&self, tile_id: &str) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id() == tile_id)
    }

    /// Tiles that can be shown and edited. Tiles whose markup never parsed are
    /// left out.
    pub fn selectable_tiles(&self) -> impl Iterator<Item = &StructuredTile> {
        self.tiles.iter().filter_map(|t| match t {
            Tile::Structured(s) => Some(s),
            Tile::Raw(_) => None,
        })
    }
}

/// The full set of categories. Categories are flat siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Read a catalog from a JSON array of categories.
    pub fn from_json(json: &str) -> Result<Self, TesseraError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TesseraError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn into_categories(self) -> Vec<Category> {
        self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn tile(&self, category_id: &str, tile_id: &str) -> Option<&Tile> {
        self.category(category_id)?.tile(tile_id)
    }

    /// Return a new catalog with one tile's graphic replaced.
    ///
    /// The tile keeps its id and name and becomes structured. Returns `None`,
    /// leaving nothing changed, when either id does not resolve.
    pub fn save_tile(&self, category_id: &str, tile_id: &str, document: SvgDocument) -> Option<Catalog> {
        let category_index = self.categories.iter().position(|c| c.id == category_id)?;
        let tile_index = self.categories[category_index]
            .tiles
            .iter()
            .position(|t| t.id() == tile_id)?;

        let mut updated = self.clone();
        let slot = &mut updated.categories[category_index].tiles[tile_index];
        *slot = Tile::Structured(StructuredTile {
            id: slot.id().to_string(),
            name: slot.name().to_string(),
            svg_data: document,
        });
        Some(updated)
    }
}

/// Normalize one tile, parsing its markup if it still has any.
///
/// Structured tiles, and raw tiles with blank markup, come back unchanged and
/// silently. A raw tile that fails to parse also comes back unchanged, after a
/// [`Notice::TileParseFailed`] is reported. When the backend is unavailable no
/// parse is attempted at all.
pub fn normalize_tile(
    tile: &Tile,
    backend: &dyn MarkupBackend,
    options: &Options,
    reporter: &dyn Reporter,
) -> Tile {
    let Tile::Raw(raw) = tile else {
        return tile.clone();
    };
    // Blank markup means there is nothing to convert.
    if raw.svg.trim().is_empty() {
        return tile.clone();
    }

    if !backend.is_available() {
        reporter.report(Notice::SkippedHeadless {
            tile_id: raw.id.clone(),
        });
        return tile.clone();
    }

    match parse_with(backend, &raw.svg, options) {
        Ok(svg_data) => Tile::Structured(StructuredTile {
            id: raw.id.clone(),
            name: raw.name.clone(),
            svg_data,
        }),
        Err(e) => {
            reporter.report(Notice::TileParseFailed {
                tile_id: raw.id.clone(),
                cause: e.to_string(),
            });
            tile.clone()
        }
    }
}

/// Normalize every tile of every category, keeping order.
///
/// With an unavailable backend the catalog is returned as-is and a single
/// [`Notice::CatalogSkipped`] is reported.
pub fn normalize_catalog(
    catalog: &Catalog,
    backend: &dyn MarkupBackend,
    options: &Options,
    reporter: &dyn Reporter,
) -> Catalog {
    if !backend.is_available() {
        reporter.report(Notice::CatalogSkipped);
        return catalog.clone();
    }

    let categories = catalog
        .categories
        .iter()
        .map(|category| Category {
            id: category.id.clone(),
            name: category.name.clone(),
            tiles: category
                .tiles
                .iter()
                .map(|tile| normalize_tile(tile, backend, options, reporter))
                .collect(),
        })
        .collect();

    Catalog { categories }
}
