//! A small element tree built from a project file with quick-xml.
//!
//! The adapters walk this tree much like an ElementTree: attributes are
//! looked up by name and immediate children are visited in document order.

use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{MetasipError, Result};

/// One element of a parsed document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub tag: String,
    /// Attributes in document order, already unescaped.
    pub attributes: IndexMap<String, String>,
    pub children: Vec<XmlElement>,
    /// Concatenated, unescaped character data directly inside the element.
    pub text: String,
}

impl XmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Immediate children with the given tag, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Number of elements with the given tag anywhere below this one.
    pub fn count_descendants(&self, tag: &str) -> usize {
        self.children
            .iter()
            .map(|c| usize::from(c.tag == tag) + c.count_descendants(tag))
            .sum()
    }
}

/// Parse a complete document and return its root element.
pub fn parse_document(input: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(start_element(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                // Self-closing element - handle as start + end
                let element = start_element(e)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| MetasipError::xml("Unexpected end tag"))?;
                close_element(element, &mut stack, &mut root)?;
            }
            Ok(Event::Text(e)) => {
                if let Some(top) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|e| MetasipError::xml(format!("Text error: {e}")))?;
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(top) = stack.last_mut() {
                    let text = std::str::from_utf8(&e)
                        .map_err(|e| MetasipError::xml(format!("Invalid CDATA: {e}")))?;
                    top.text.push_str(text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(MetasipError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(MetasipError::xml(format!("Unclosed element <{}>", open.tag)));
    }

    root.ok_or_else(|| MetasipError::missing_element("document root"))
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlElement> {
    let name = e.name();
    let tag = std::str::from_utf8(name.as_ref())
        .map_err(|e| MetasipError::xml(format!("Invalid tag name: {e}")))?;

    let mut element = XmlElement::new(tag);

    for attr_result in e.attributes() {
        let attr =
            attr_result.map_err(|e| MetasipError::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| MetasipError::xml(format!("Attribute key error: {e}")))?;
        let value = attr
            .unescape_value()
            .map_err(|e| MetasipError::xml(format!("Attribute value error: {e}")))?;
        element.attributes.insert(key.to_string(), value.into_owned());
    }

    Ok(element)
}

fn close_element(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(MetasipError::xml("Document has more than one root element"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let doc = parse_document(
            r#"<?xml version="1.0"?>
<Project version="17" rootmodule="PyQt6">
  <Module name="QtCore">
    <SipFile name="qobject.h"/>
    <SipFile name="qvariant.h"></SipFile>
  </Module>
</Project>"#,
        )
        .expect("parse");

        assert_eq!(doc.tag, "Project");
        assert_eq!(doc.attribute("rootmodule"), Some("PyQt6"));
        assert_eq!(doc.children.len(), 1);
        assert_eq!(doc.count_descendants("SipFile"), 2);

        let names: Vec<_> = doc.children[0]
            .children_named("SipFile")
            .filter_map(|s| s.attribute("name"))
            .collect();
        assert_eq!(names, vec!["qobject.h", "qvariant.h"]);
    }

    #[test]
    fn test_attribute_order_and_unescaping() {
        let doc = parse_document(r#"<A b="x &amp; y" a="&quot;q&quot;"/>"#).expect("parse");
        let keys: Vec<_> = doc.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(doc.attribute("b"), Some("x & y"));
        assert_eq!(doc.attribute("a"), Some("\"q\""));
    }

    #[test]
    fn test_text_is_unescaped() {
        let doc = parse_document("<Literal type=\"body\">\nif (a &lt; b)\n</Literal>").expect("parse");
        assert_eq!(doc.text.trim(), "if (a < b)");
    }

    #[test]
    fn test_malformed_documents() {
        assert!(parse_document("<A><B></A>").is_err());
        assert!(parse_document("<A>").is_err());
        assert!(parse_document("").is_err());
        assert!(parse_document("<A/><B/>").is_err());
    }
}
