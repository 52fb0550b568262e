//! Dispatch from element tags to code item adapters and back.

use tracing::{trace, warn};

use super::xml::XmlElement;
use super::{LoadContext, XmlAdapter, load_item};
use crate::base::Output;
use crate::error::Result;
use crate::model::{Code, each_code};

/// Tags accepted in a `SipFile` or `Namespace`.
pub const SCOPE_CONTENT: &[&str] = &[
    "Class",
    "Enum",
    "Function",
    "ManualCode",
    "Namespace",
    "OpaqueClass",
    "OperatorFunction",
    "Typedef",
    "Variable",
];

/// Tags accepted in a `Class`.
pub const CLASS_CONTENT: &[&str] = &[
    "Class",
    "Constructor",
    "Destructor",
    "Enum",
    "ManualCode",
    "Method",
    "OpaqueClass",
    "OperatorCast",
    "OperatorMethod",
    "Typedef",
    "Variable",
];

/// Load a code item from an element, or `None` if the tag is not a code item.
pub(crate) fn load_code(element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<Option<Code>> {
    let code = match element.tag.as_str() {
        "Class" => Code::Class(load_item(element, ctx)?),
        "Constructor" => Code::Constructor(load_item(element, ctx)?),
        "Destructor" => Code::Destructor(load_item(element, ctx)?),
        "Enum" => Code::Enum(load_item(element, ctx)?),
        "Function" => Code::Function(load_item(element, ctx)?),
        "ManualCode" => Code::ManualCode(load_item(element, ctx)?),
        "Method" => Code::Method(load_item(element, ctx)?),
        "Namespace" => Code::Namespace(load_item(element, ctx)?),
        "OpaqueClass" => Code::OpaqueClass(load_item(element, ctx)?),
        "OperatorCast" => Code::OperatorCast(load_item(element, ctx)?),
        "OperatorFunction" => Code::OperatorFunction(load_item(element, ctx)?),
        "OperatorMethod" => Code::OperatorMethod(load_item(element, ctx)?),
        "Typedef" => Code::Typedef(load_item(element, ctx)?),
        "Variable" => Code::Variable(load_item(element, ctx)?),
        _ => return Ok(None),
    };
    Ok(Some(code))
}

/// Load the code items among an element's children whose tags are in `allowed`.
///
/// Anything else (apart from `Literal`s, which belong to the container) is
/// skipped.
pub(crate) fn load_content(
    element: &XmlElement,
    allowed: &[&str],
    ctx: &mut LoadContext<'_>,
) -> Result<Vec<Code>> {
    let mut content = Vec::new();

    for child in &element.children {
        if !allowed.contains(&child.tag.as_str()) {
            if child.tag != "Literal" {
                trace!("Skipping <{}> in <{}>", child.tag, element.tag);
            }
            continue;
        }

        if let Some(code) = load_code(child, ctx)? {
            content.push(code);
        }
    }

    Ok(content)
}

/// Save a code item with its adapter.
pub(crate) fn save_code(code: &Code, output: &mut Output) {
    each_code!(code, item => item.save(output))
}

/// Save a sequence of code items in order.
///
/// Items whose tags are not in `allowed` are still written, but will be
/// skipped when the file is loaded again.
pub(crate) fn save_content(
    content: &[Code],
    container: &str,
    allowed: &[&str],
    output: &mut Output,
) {
    for code in content {
        if !allowed.contains(&code.tag()) {
            warn!(
                "<{}> {:?} is not valid in <{container}> and will not be reloaded",
                code.tag(),
                code.name()
            );
        }
        save_code(code, output);
    }
}
