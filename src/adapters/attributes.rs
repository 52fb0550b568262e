//! Reading and writing typed attributes.
//!
//! | Type        | Stored as                                  | Default |
//! |-------------|--------------------------------------------|---------|
//! | BOOL        | `"1"` / `"0"`                              | `"0"`   |
//! | STRING      | the value                                  | `""`    |
//! | STRING_LIST | space separated values                     | `""`    |
//! | LITERAL     | text of a `<Literal type="name">` child    | `""`    |
//!
//! Values equal to their default are never written.

use std::borrow::Cow;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart};
use quick_xml::name::QName;

use super::xml::XmlElement;
use crate::base::{Output, escape};
use crate::error::{MetasipError, Result};

pub(crate) fn read_str(element: &XmlElement, name: &str) -> String {
    element.attribute(name).unwrap_or_default().to_string()
}

pub(crate) fn read_bool(element: &XmlElement, name: &str) -> bool {
    read_bool_or(element, name, false)
}

pub(crate) fn read_bool_or(element: &XmlElement, name: &str, default: bool) -> bool {
    match element.attribute(name) {
        Some(value) => value.trim() != "0",
        None => default,
    }
}

pub(crate) fn read_str_list(element: &XmlElement, name: &str) -> Vec<String> {
    element
        .attribute(name)
        .map(|v| v.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Read the stripped text of the `<Literal type="name">` child, if any.
///
/// A `Literal` without a `type` attribute is an error.
pub(crate) fn read_literal(element: &XmlElement, name: &str) -> Result<String> {
    for literal in element.children_named("Literal") {
        let literal_type = literal
            .attribute("type")
            .ok_or_else(|| MetasipError::missing_attribute("Literal type"))?;
        if literal_type == name {
            return Ok(literal.text.trim().to_string());
        }
    }
    Ok(String::new())
}

/// The opening tag of an element being saved.
///
/// Values are escaped with [`escape`] and pushed as raw attributes, so
/// apostrophes are left as they are.
pub(crate) struct StartTag {
    start: BytesStart<'static>,
}

impl StartTag {
    pub(crate) fn new(tag: &'static str) -> Self {
        Self {
            start: BytesStart::new(tag),
        }
    }

    /// Add an attribute unconditionally.
    pub(crate) fn attribute(&mut self, name: &str, value: &str) {
        self.start.push_attribute(Attribute {
            key: QName(name.as_bytes()),
            value: Cow::Owned(escape(value).into_bytes()),
        });
    }

    pub(crate) fn string(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.attribute(name, value);
        }
    }

    pub(crate) fn boolean(&mut self, name: &str, value: bool) {
        if value {
            self.attribute(name, "1");
        }
    }

    pub(crate) fn string_list(&mut self, name: &str, values: &[String]) {
        if !values.is_empty() {
            self.attribute(name, &values.join(" "));
        }
    }

    fn to_text(&self) -> String {
        format!("<{}>", String::from_utf8_lossy(&self.start))
    }

    /// Write the tag and indent for the element's sub-elements.
    pub(crate) fn write(self, output: &mut Output) {
        output.write(&format!("{}\n", self.to_text()), true);
        output.indent();
    }
}

/// Close an element opened with [`StartTag::write`].
pub(crate) fn write_end(output: &mut Output, tag: &str) {
    let end = BytesEnd::new(tag);
    output.dedent();
    output.write(&format!("</{}>\n", String::from_utf8_lossy(&end)), true);
}

/// Write a `<Literal>` sub-element unless the value is empty.
///
/// The text is written unindented so it reads back unchanged.
pub(crate) fn write_literal(output: &mut Output, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }

    let mut tag = StartTag::new("Literal");
    tag.attribute("type", name);
    output.write(&format!("{}\n", tag.to_text()), true);
    output.write(&format!("{}\n</Literal>\n", escape(value)), false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::xml::parse_document;

    #[test]
    fn test_read_typed_attributes() {
        let element =
            parse_document(r#"<X s="abc" b="1" f="0" l="a  b c"/>"#).expect("parse");
        assert_eq!(read_str(&element, "s"), "abc");
        assert_eq!(read_str(&element, "missing"), "");
        assert!(read_bool(&element, "b"));
        assert!(!read_bool(&element, "f"));
        assert!(!read_bool(&element, "missing"));
        assert!(read_bool_or(&element, "missing", true));
        assert_eq!(read_str_list(&element, "l"), vec!["a", "b", "c"]);
        assert!(read_str_list(&element, "missing").is_empty());
    }

    #[test]
    fn test_read_literal() {
        let element = parse_document(
            "<X><Literal type=\"a\">\n  first\n</Literal><Literal type=\"b\">second</Literal></X>",
        )
        .expect("parse");
        assert_eq!(read_literal(&element, "a").unwrap(), "first");
        assert_eq!(read_literal(&element, "b").unwrap(), "second");
        assert_eq!(read_literal(&element, "c").unwrap(), "");
    }

    #[test]
    fn test_literal_without_type_is_an_error() {
        let element = parse_document("<X><Literal>text</Literal></X>").expect("parse");
        assert!(matches!(
            read_literal(&element, "a"),
            Err(MetasipError::Missing { .. })
        ));
    }

    #[test]
    fn test_start_tag_omits_defaults() {
        let mut output = Output::xml();
        let mut tag = StartTag::new("Method");
        tag.string("name", "foo");
        tag.string("rtype", "");
        tag.boolean("virtual", false);
        tag.boolean("const", true);
        tag.string_list("features", &[]);
        tag.string_list("platforms", &["Linux".to_string(), "Windows".to_string()]);
        tag.write(&mut output);
        write_literal(&mut output, "methcode", "");
        write_literal(&mut output, "docstring", "a < b");
        write_end(&mut output, "Method");

        assert_eq!(
            output.as_str(),
            "<Method name=\"foo\" const=\"1\" platforms=\"Linux Windows\">\n  <Literal type=\"docstring\">\na &lt; b\n</Literal>\n</Method>\n"
        );
    }

    #[test]
    fn test_start_tag_escapes_values() {
        let mut output = Output::xml();
        let mut tag = StartTag::new("ManualCode");
        tag.string("precis", r#"QString tr(const char *s = "x") const & 'y'"#);
        tag.write(&mut output);
        write_end(&mut output, "ManualCode");

        assert_eq!(
            output.as_str(),
            "<ManualCode precis=\"QString tr(const char *s = &quot;x&quot;) const &amp; 'y'\">\n</ManualCode>\n"
        );
    }
}
