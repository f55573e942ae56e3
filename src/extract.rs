//! Turning SVG markup into an [`SvgDocument`].

use std::collections::HashSet;

use crate::Options;
use crate::ast::{Document, Element};
use crate::backend::MarkupBackend;
use crate::document::{PathRecord, SvgDocument};
use crate::error::TesseraError;

/// Parse SVG markup into a structured document using the given backend.
///
/// Fails with [`TesseraError::EnvironmentUnavailable`] when the backend cannot
/// parse, and with [`TesseraError::InvalidDocument`] when the text is not
/// well-formed or contains no `svg` element. Malformed dimensions are not
/// errors; see [`parse_dimension`].
pub fn parse_with(
    backend: &dyn MarkupBackend,
    text: &str,
    options: &Options,
) -> Result<SvgDocument, TesseraError> {
    let markup = backend.parse_markup(text)?;
    let doc = extract_document(&markup, options)?;
    tracing::debug!(
        view_box = %doc.view_box,
        paths = doc.paths.len(),
        "parsed tile markup"
    );
    Ok(doc)
}

/// Build an [`SvgDocument`] from an already-parsed markup tree.
pub fn extract_document(markup: &Document, options: &Options) -> Result<SvgDocument, TesseraError> {
    let svg = markup
        .find_first("svg")
        .ok_or_else(|| TesseraError::InvalidDocument("No svg element found".into()))?;

    let view_box = svg
        .get_non_empty_attr("viewBox")
        .unwrap_or(options.default_view_box.as_str())
        .to_string();
    let width = svg.get_non_empty_attr("width").and_then(parse_dimension);
    let height = svg.get_non_empty_attr("height").and_then(parse_dimension);

    Ok(SvgDocument {
        view_box,
        width,
        height,
        paths: extract_paths(svg, options),
    })
}

fn extract_paths(svg: &Element, options: &Options) -> Vec<PathRecord> {
    let elements = svg.descendants_named("path");

    // Synthesized ids must not shadow an explicit id anywhere in the document.
    let explicit: HashSet<&str> = elements
        .iter()
        .filter_map(|e| e.get_non_empty_attr("id"))
        .collect();
    let mut used: HashSet<String> = HashSet::new();
    let mut paths = Vec::new();

    for (index, elem) in elements.iter().enumerate() {
        let Some(d) = elem.get_non_empty_attr("d") else {
            continue;
        };

        let fill = match elem.get_non_empty_attr("fill") {
            None | Some("none") => options.default_fill.clone(),
            Some(fill) => fill.to_string(),
        };

        let id = match elem.get_non_empty_attr("id") {
            Some(id) => id.to_string(),
            None => {
                let base = format!("{}{}", options.synthesized_id_prefix, index);
                unique_id(base, &explicit, &used)
            }
        };
        used.insert(id.clone());

        paths.push(PathRecord {
            id,
            d: d.to_string(),
            fill,
        });
    }

    paths
}

fn unique_id(base: String, explicit: &HashSet<&str>, used: &HashSet<String>) -> String {
    let taken = |candidate: &str| explicit.contains(candidate) || used.contains(candidate);
    if !taken(base.as_str()) {
        return base;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

/// Parse a `width`/`height` value such as `"120"`, `"120px"` or `"50%"`.
///
/// The leading run of decimal digits (after optional whitespace and `+`) is the
/// value; whatever follows is treated as a unit and ignored, so `"12.5px"` is
/// `12`. Text without leading digits, negative values and values that do not
/// fit a `u32` are treated as if the attribute were absent.
pub fn parse_dimension(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let value = value.strip_prefix('+').unwrap_or(value);
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
