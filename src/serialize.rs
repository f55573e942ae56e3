//! Serialization of structured documents back to SVG markup.

use crate::document::SvgDocument;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serialize a document to a compact SVG string.
pub fn serialize(doc: &SvgDocument) -> String {
    let mut out = String::new();

    out.push_str("<svg");
    push_attr(&mut out, "xmlns", SVG_NAMESPACE);
    push_attr(&mut out, "viewBox", &doc.view_box);
    if let Some(width) = doc.width {
        push_attr(&mut out, "width", &width.to_string());
    }
    if let Some(height) = doc.height {
        push_attr(&mut out, "height", &height.to_string());
    }

    if doc.paths.is_empty() {
        out.push_str("/>");
        return out;
    }

    out.push('>');
    for path in &doc.paths {
        out.push_str("<path");
        push_attr(&mut out, "id", &path.id);
        push_attr(&mut out, "d", &path.d);
        push_attr(&mut out, "fill", &path.fill);
        out.push_str("/>");
    }
    out.push_str("</svg>");

    out
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped_attr(out, value);
    out.push('"');
}

fn push_escaped_attr(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PathRecord;
    use crate::parse;

    #[test]
    fn test_serialize_simple() {
        let doc = SvgDocument {
            view_box: "0 0 10 10".into(),
            width: Some(40),
            height: None,
            paths: vec![PathRecord {
                id: "sq".into(),
                d: "M0 0H10V10H0z".into(),
                fill: "#fff".into(),
            }],
        };
        assert_eq!(
            serialize(&doc),
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" width="40"><path id="sq" d="M0 0H10V10H0z" fill="#fff"/></svg>"##
        );
    }

    #[test]
    fn test_serialize_empty_document() {
        let doc = parse("<svg/>").unwrap();
        assert_eq!(
            serialize(&doc),
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"/>"#
        );
    }

    #[test]
    fn test_serialize_escapes_values() {
        let doc = SvgDocument {
            view_box: "0 0 1 1".into(),
            width: None,
            height: None,
            paths: vec![PathRecord {
                id: "a\"b".into(),
                d: "M0 0".into(),
                fill: "url(#g)&<x>".into(),
            }],
        };
        let out = serialize(&doc);
        assert!(out.contains(r#"id="a&quot;b""#));
        assert!(out.contains(r#"fill="url(#g)&amp;&lt;x&gt;""#));
        assert_eq!(parse(&out).unwrap(), doc);
    }

    #[test]
    fn test_reparse_matches() {
        let original = parse(
            r##"<svg viewBox="0 0 64 64" width="64px" height="64px">
                <path id="ground" d="M0 0h64v64H0z" fill="#e9c46a"/>
                <path d="M8 8h16v16H8z"/>
                <path d="M40 40h16v16H40z" fill="none"/>
            </svg>"##,
        )
        .unwrap();
        assert_eq!(parse(&serialize(&original)).unwrap(), original);
    }
}
