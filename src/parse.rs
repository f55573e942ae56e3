//! Markup parsing from XML.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use crate::ast::*;
use crate::error::TesseraError;

/// Deepest element nesting accepted. Tiles are shallow; anything past this is
/// rejected rather than risk exhausting the stack when the tree is dropped.
pub const MAX_DEPTH: usize = 1024;

/// Parse markup text into a Document.
pub fn parse_markup(text: &str) -> Result<Document, TesseraError> {
    let mut reader = Reader::from_str(text);
    let mut entities = Entities::default();
    // Elements whose end tag has not been seen yet, innermost last.
    let mut open: Vec<Element> = Vec::new();

    loop {
        let closed = match reader.read_event()? {
            Event::DocType(doctype) => {
                entities = Entities::from_doctype(&String::from_utf8_lossy(&doctype));
                continue;
            }
            Event::Start(start) => {
                if open.len() >= MAX_DEPTH {
                    return Err(TesseraError::InvalidDocument(format!(
                        "Elements nested deeper than {}",
                        MAX_DEPTH
                    )));
                }
                open.push(element_from_start(&start, &entities)?);
                continue;
            }
            Event::Empty(start) => element_from_start(&start, &entities)?,
            // The reader has already checked that the end name matches.
            Event::End(_) => open
                .pop()
                .ok_or_else(|| TesseraError::InvalidDocument("Unmatched end tag".into()))?,
            Event::Eof if open.is_empty() => {
                return Err(TesseraError::InvalidDocument("No root element found".into()));
            }
            Event::Eof => {
                return Err(TesseraError::InvalidDocument("Unexpected end of file".into()));
            }
            _ => continue,
        };

        match open.last_mut() {
            Some(parent) => parent.children.push(closed),
            // Anything after the root element is ignored.
            None => return Ok(Document { root: closed }),
        }
    }
}

fn element_from_start(start: &BytesStart, entities: &Entities) -> Result<Element, TesseraError> {
    let mut element = Element::new(std::str::from_utf8(start.name().as_ref())?);

    for attr in start.attributes() {
        let attr = attr?;
        let value = attr.unescape_value_with(|name| entities.resolve(name))?;
        element.attributes.push(Attribute {
            name: QName::parse(std::str::from_utf8(attr.key.as_ref())?),
            value: value.into_owned(),
        });
    }

    Ok(element)
}

/// General entities declared in a DOCTYPE internal subset, as vector editors
/// emit for namespace URIs (`<!ENTITY ns_svg "http://www.w3.org/2000/svg">`).
///
/// Only internal entities with a quoted literal value are picked up; parameter
/// and external entities are skipped. Values are used as written, without
/// expanding references inside them.
#[derive(Debug, Default)]
struct Entities(HashMap<String, String>);

impl Entities {
    fn from_doctype(doctype: &str) -> Self {
        const DECL: &str = "<!ENTITY";

        let mut declared = HashMap::new();
        let mut rest = doctype;
        while let Some(at) = rest.find(DECL) {
            rest = rest[at + DECL.len()..].trim_start();
            if rest.starts_with('%') {
                continue;
            }

            let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let name = &rest[..name_end];
            rest = rest[name_end..].trim_start();

            let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') else {
                continue;
            };
            let body = &rest[1..];
            let Some(close) = body.find(quote) else {
                break;
            };
            declared
                .entry(name.to_string())
                .or_insert_with(|| body[..close].to_string());
            rest = &body[close + 1..];
        }

        Entities(declared)
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        resolve_predefined_entity(name).or_else(|| self.0.get(name).map(String::as_str))
    }
}
