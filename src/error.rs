use thiserror::Error;

#[derive(Debug, Error)]
pub enum TesseraError {
    #[error("markup parsing is not available in this environment")]
    EnvironmentUnavailable,

    #[error("Invalid SVG: {0}")]
    InvalidDocument(String),

    #[error("Invalid catalog definition: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Anything the XML reader rejects means the text is not a usable document.

impl From<quick_xml::Error> for TesseraError {
    fn from(e: quick_xml::Error) -> Self {
        TesseraError::InvalidDocument(format!("XML parsing error: {}", e))
    }
}

impl From<quick_xml::events::attributes::AttrError> for TesseraError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        TesseraError::InvalidDocument(format!("Invalid attribute: {}", e))
    }
}

impl From<std::str::Utf8Error> for TesseraError {
    fn from(e: std::str::Utf8Error) -> Self {
        TesseraError::InvalidDocument(format!("UTF-8 error: {}", e))
    }
}
