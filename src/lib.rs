//! tessera - editable SVG tiles
//!
//! tessera turns raw tile markup into a structured document (a view box plus
//! an ordered list of recolorable paths), normalizes whole tile catalogs, and
//! writes edited documents back out as SVG.

mod ast;
mod backend;
mod catalog;
mod designer;
mod document;
mod error;
mod extract;
mod parse;
mod report;
mod serialize;

pub use ast::*;
pub use backend::*;
pub use catalog::*;
pub use designer::*;
pub use document::*;
pub use error::*;
pub use extract::*;
pub use parse::*;
pub use report::*;
pub use serialize::*;

/// Parse tile markup with the `quick-xml` backend and default settings.
pub fn parse(svg: &str) -> Result<SvgDocument, TesseraError> {
    parse_with(&XmlBackend, svg, &Options::default())
}

/// Normalize a catalog with the `quick-xml` backend, default settings, and
/// notices sent to `tracing`.
pub fn normalize(catalog: &Catalog) -> Catalog {
    normalize_catalog(catalog, &XmlBackend, &Options::default(), &TracingReporter)
}

/// Parsing options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Fill for paths that have none (default: `#000000`)
    pub default_fill: String,
    /// View box for documents that declare none (default: `0 0 100 100`)
    pub default_view_box: String,
    /// Prefix of ids made up for paths without one (default: `path-`)
    pub synthesized_id_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_fill: DEFAULT_FILL.to_string(),
            default_view_box: DEFAULT_VIEW_BOX.to_string(),
            synthesized_id_prefix: "path-".to_string(),
        }
    }
}
