//! Loading and saving the attribute groups shared by code items.

use tracing::trace;

use super::LoadContext;
use super::attributes::{StartTag, read_literal, read_str, read_str_list, write_literal};
use super::xml::XmlElement;
use crate::base::Output;
use crate::error::Result;
use crate::model::{Access, CodeMeta, ExtendedAccess, Status, Tagged, VersionRange};

/// Load the tags, status and comments of a code item.
pub(crate) fn load_meta(element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<CodeMeta> {
    let versions = VersionRange::parse_list(&read_str(element, "versions"));
    for range in &versions {
        ctx.check_version(&range.startversion);
        ctx.check_version(&range.endversion);
    }

    let status_value = read_str(element, "status");
    let status = Status::from_xml(&status_value).unwrap_or_else(|| {
        trace!("Ignoring unknown status {status_value:?}");
        Status::default()
    });

    Ok(CodeMeta {
        tagged: Tagged {
            features: read_str_list(element, "features"),
            platforms: read_str_list(element, "platforms"),
            versions,
        },
        status,
        comments: read_literal(element, "comments")?,
    })
}

/// Write the attributes of a code item's tags and status.
pub(crate) fn save_meta_attributes(meta: &CodeMeta, tag: &mut StartTag) {
    tag.string_list("features", &meta.tagged.features);
    tag.string_list("platforms", &meta.tagged.platforms);

    let versions: Vec<String> = meta.tagged.versions.iter().map(ToString::to_string).collect();
    tag.string_list("versions", &versions);

    tag.string("status", meta.status.as_str());
}

/// Write the sub-elements of a code item's attribute groups.
pub(crate) fn save_meta_subelements(meta: &CodeMeta, output: &mut Output) {
    write_literal(output, "comments", &meta.comments);
}

pub(crate) fn load_access(element: &XmlElement) -> Access {
    let value = read_str(element, "access");
    Access::from_xml(&value).unwrap_or_else(|| {
        trace!("Ignoring unknown access {value:?}");
        Access::default()
    })
}

pub(crate) fn load_extended_access(element: &XmlElement) -> ExtendedAccess {
    let value = read_str(element, "access");
    ExtendedAccess::from_xml(&value).unwrap_or_else(|| {
        trace!("Ignoring unknown access {value:?}");
        ExtendedAccess::default()
    })
}
