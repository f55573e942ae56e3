//! Structured tile graphics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fill used when a path has none of its own.
pub const DEFAULT_FILL: &str = "#000000";

/// View box used when the markup does not declare one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 100 100";

/// Path id to fill color, for one editing session on one tile.
pub type PathColorMap = HashMap<String, String>;

/// One drawable path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    /// Unique within its document
    pub id: String,
    /// Path geometry, never interpreted and never empty
    pub d: String,
    /// Color literal as written in the source
    pub fill: String,
}

/// A tile's vector graphic.
///
/// Paths are kept in source order: later paths draw over earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgDocument {
    pub view_box: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default)]
    pub paths: Vec<PathRecord>,
}

impl SvgDocument {
    /// Look up a path by id.
    pub fn path(&self, id: &str) -> Option<&PathRecord> {
        self.paths.iter().find(|p| p.id == id)
    }

    /// The current fill of every path, keyed by id.
    pub fn color_map(&self) -> PathColorMap {
        self.paths
            .iter()
            .map(|p| (p.id.clone(), p.fill.clone()))
            .collect()
    }
}

/// Return a copy of `doc` with fills replaced for every path id in `colors`.
///
/// Paths missing from the map keep their fill. Keys that name no path are
/// ignored.
pub fn merge_colors(doc: &SvgDocument, colors: &PathColorMap) -> SvgDocument {
    let paths = doc
        .paths
        .iter()
        .map(|p| match colors.get(&p.id) {
            Some(fill) => PathRecord {
                fill: fill.clone(),
                ..p.clone()
            },
            None => p.clone(),
        })
        .collect();

    SvgDocument {
        paths,
        ..doc.clone()
    }
}
