//! Markup tree produced by a [`MarkupBackend`](crate::MarkupBackend).
//!
//! Only elements and their attributes are kept. Text, comments, CDATA and
//! processing instructions carry nothing a tile needs, so the reader drops them.

/// A parsed markup document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The outermost element
    pub root: Element,
}

/// A markup element.
#[derive(Debug, Clone)]
pub struct Element {
    /// Element name with optional prefix (e.g., "svg", "svg:path")
    pub name: QName,
    /// Attributes in source order
    pub attributes: Vec<Attribute>,
    /// Child elements in source order
    pub children: Vec<Element>,
}

/// A qualified name (possibly with namespace prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace prefix (e.g., "svg", "xlink")
    pub prefix: Option<String>,
    /// Local name (e.g., "path", "href")
    pub local: String,
}

impl QName {
    /// Split `prefix:local`; a name without a colon has no prefix.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((prefix, local)) => QName {
                prefix: Some(prefix.to_owned()),
                local: local.to_owned(),
            },
            None => QName {
                prefix: None,
                local: raw.to_owned(),
            },
        }
    }
}

/// An attribute on an element.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Element {
    /// An element with no attributes or children; `name` may carry a prefix.
    pub fn new(name: &str) -> Self {
        Self {
            name: QName::parse(name),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push(Attribute {
            name: QName::parse(name),
            value: value.to_string(),
        });
        self
    }

    #[cfg(test)]
    pub(crate) fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value by local name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.local == name)
            .map(|a| a.value.as_str())
    }

    /// Get an attribute value by local name, treating an empty value as missing.
    pub fn get_non_empty_attr(&self, name: &str) -> Option<&str> {
        self.get_attr(name).filter(|v| !v.is_empty())
    }

    /// Check if this element has a specific local name.
    pub fn is(&self, name: &str) -> bool {
        self.name.local == name
    }

    /// Visit every descendant (not `self`) in document order.
    pub fn for_each_descendant<'a>(&'a self, mut f: impl FnMut(&'a Element)) {
        // Next element to visit on top.
        let mut pending: Vec<&'a Element> = self.children.iter().rev().collect();
        while let Some(elem) = pending.pop() {
            f(elem);
            pending.extend(elem.children.iter().rev());
        }
    }

    /// All descendants with the given local name, in document order.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.for_each_descendant(|e| {
            if e.is(name) {
                found.push(e);
            }
        });
        found
    }
}

impl Document {
    /// The first element with the given local name, searching the root first
    /// and then its descendants in document order.
    pub fn find_first(&self, name: &str) -> Option<&Element> {
        if self.root.is(name) {
            return Some(&self.root);
        }
        let mut found = None;
        self.root.for_each_descendant(|e| {
            if found.is_none() && e.is(name) {
                found = Some(e);
            }
        });
        found
    }
}
