//! The markup-parsing facility, injected wherever markup is turned into a tree.
//!
//! Hosts that can parse markup use [`XmlBackend`]. Contexts that must not
//! (headless prerendering, for instance) pass [`Headless`], which refuses every
//! request so callers fail fast instead of producing a degraded document.

use crate::ast::Document;
use crate::error::TesseraError;
use crate::parse::parse_markup;

/// Something that can turn markup text into a [`Document`].
pub trait MarkupBackend: Send + Sync {
    fn parse_markup(&self, text: &str) -> Result<Document, TesseraError>;

    /// Whether [`parse_markup`](Self::parse_markup) can succeed at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// Backend built on `quick-xml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlBackend;

impl MarkupBackend for XmlBackend {
    fn parse_markup(&self, text: &str) -> Result<Document, TesseraError> {
        parse_markup(text)
    }
}

/// Backend for contexts without a markup parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl MarkupBackend for Headless {
    fn parse_markup(&self, _text: &str) -> Result<Document, TesseraError> {
        Err(TesseraError::EnvironmentUnavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}
