//! Editing state behind the tile designer.
//!
//! A [`Designer`] owns the latest [`Catalog`] value. Saving produces a new
//! catalog and swaps it in, so views holding an older catalog never see it
//! change underneath them.

use crate::catalog::{Catalog, Category};
use crate::document::{PathColorMap, SvgDocument, merge_colors};

#[derive(Debug, Clone)]
struct ActiveTile {
    category_id: String,
    tile_id: String,
    document: SvgDocument,
}

#[derive(Debug, Clone, Default)]
pub struct Designer {
    catalog: Catalog,
    selected_category: Option<String>,
    active: Option<ActiveTile>,
    path_colors: PathColorMap,
}

impl Designer {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Select a category by id. Unknown ids leave the selection alone.
    pub fn select_category(&mut self, category_id: &str) -> bool {
        if self.catalog.category(category_id).is_none() {
            return false;
        }
        self.selected_category = Some(category_id.to_string());
        true
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.catalog.category(self.selected_category.as_deref()?)
    }

    /// Make a tile of the selected category the active one and seed the color
    /// map from its fills. Only structured tiles can be selected.
    pub fn select_tile(&mut self, tile_id: &str) -> bool {
        let Some(category) = self.selected_category() else {
            return false;
        };
        let Some(document) = category.tile(tile_id).and_then(|t| t.document()) else {
            return false;
        };

        let active = ActiveTile {
            category_id: category.id.clone(),
            tile_id: tile_id.to_string(),
            document: document.clone(),
        };
        self.path_colors = active.document.color_map();
        self.active = Some(active);
        true
    }

    /// Drop the active tile and its colors.
    pub fn clear_tile(&mut self) {
        self.active = None;
        self.path_colors.clear();
    }

    /// The active tile's document as last saved.
    pub fn active_document(&self) -> Option<&SvgDocument> {
        self.active.as_ref().map(|a| &a.document)
    }

    pub fn active_tile_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.tile_id.as_str())
    }

    pub fn path_colors(&self) -> &PathColorMap {
        &self.path_colors
    }

    /// Recolor one path of the active tile. Ignored when no tile is active.
    pub fn set_path_color(&mut self, path_id: impl Into<String>, color: impl Into<String>) {
        if self.active.is_some() {
            self.path_colors.insert(path_id.into(), color.into());
        }
    }

    /// The active document with the pending colors applied.
    pub fn preview(&self) -> Option<SvgDocument> {
        self.active
            .as_ref()
            .map(|a| merge_colors(&a.document, &self.path_colors))
    }

    /// Write the pending colors into the catalog.
    ///
    /// Returns `false` when no tile is active or the tile no longer resolves.
    pub fn save(&mut self) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        let document = merge_colors(&active.document, &self.path_colors);
        let Some(catalog) = self
            .catalog
            .save_tile(&active.category_id, &active.tile_id, document.clone())
        else {
            return false;
        };

        self.catalog = catalog;
        if let Some(active) = &mut self.active {
            active.document = document;
        }
        true
    }
}
