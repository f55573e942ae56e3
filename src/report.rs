//! Reporting of non-fatal conditions met while normalizing a catalog.
//!
//! Nothing reported here reaches the user-facing flow. The default sink
//! forwards to `tracing`; [`CollectingReporter`] keeps notices in memory.

use std::fmt;
use std::sync::Mutex;

/// A condition worth telling an operator about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A tile's markup could not be parsed; the tile was kept as-is.
    TileParseFailed { tile_id: String, cause: String },
    /// A raw tile was left alone because no markup parser is available.
    SkippedHeadless { tile_id: String },
    /// A whole catalog was left alone because no markup parser is available.
    CatalogSkipped,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::TileParseFailed { tile_id, cause } => {
                write!(f, "error parsing SVG for tile {}: {}", tile_id, cause)
            }
            Notice::SkippedHeadless { tile_id } => {
                write!(f, "skipping SVG parsing for tile {} without a markup parser", tile_id)
            }
            Notice::CatalogSkipped => f.write_str("skipping SVG parsing without a markup parser"),
        }
    }
}

/// Append-only sink for [`Notice`]s.
pub trait Reporter: Send + Sync {
    fn report(&self, notice: Notice);
}

/// Emits every notice as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, notice: Notice) {
        match &notice {
            Notice::TileParseFailed { tile_id, cause } => {
                tracing::error!(tile_id = %tile_id, cause = %cause, "{}", notice);
            }
            Notice::SkippedHeadless { tile_id } => {
                tracing::warn!(tile_id = %tile_id, "{}", notice);
            }
            Notice::CatalogSkipped => {
                tracing::warn!("{}", notice);
            }
        }
    }
}

/// Keeps every notice in arrival order.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices reported so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.notices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, notice: Notice) {
        match self.notices.lock() {
            Ok(mut notices) => notices.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}
