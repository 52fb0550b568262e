//! Loading and saving projects in the MetaSIP project file format.
//!
//! Every record implements [`XmlAdapter`]. Loading fills a default
//! constructed record from an [`XmlElement`]; saving writes the record to an
//! [`Output`] with attributes in a fixed order and with default values
//! omitted, so that files written by older tools stay diff-friendly.
//!
//! ```text
//! ┌──────────────┐  parse_document   ┌────────────┐  XmlAdapter::load  ┌─────────┐
//! │ project file │ ────────────────▶ │ XmlElement │ ─────────────────▶ │ Project │
//! └──────────────┘                   └────────────┘                    └────┬────┘
//!        ▲                                                                  │
//!        └───────────────────────── XmlAdapter::save ──────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use metasip::{LoadOptions, Project};
//!
//! let mut project = Project::read_file("PyQt6.msp", &LoadOptions::default(), None)?;
//! project.write_file("PyQt6.msp")?;
//! ```

mod attributes;
mod callables;
mod dispatch;
mod groups;
mod project;
mod scopes;
pub mod xml;

use std::fmt;

use tracing::warn;

use crate::base::{LoadOptions, Output};
use crate::error::Result;
use crate::model::Project;
use xml::XmlElement;

pub use dispatch::{CLASS_CONTENT, SCOPE_CONTENT};

/// A record that can be read from and written to a project file element.
pub trait XmlAdapter {
    /// The element tag.
    const TAG: &'static str;

    /// Populate the record from an element.
    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()>;

    /// Write the record as an element.
    fn save(&self, output: &mut Output);
}

/// Receives progress notifications while a project is loaded.
pub trait LoadProgress {
    /// Called once, before any `.sip` file is loaded.
    fn load_starting(&mut self, project: &Project, nr_steps: usize);

    /// Called after each `.sip` file is loaded.
    fn load_step(&mut self);
}

/// The schema version of a project file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectVersion {
    pub major: u32,
    pub minor: u32,
}

impl ProjectVersion {
    /// The version written by this crate.
    pub const CURRENT: Self = Self::new(0, 17);

    /// The first version with per-platform header directory settings.
    pub const PLATFORMS: Self = Self::new(0, 17);

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Default for ProjectVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// State shared by the adapters while one project file is loaded.
pub struct LoadContext<'a> {
    /// Schema version of the file being loaded.
    pub version: ProjectVersion,
    /// Version names defined by the project.
    pub project_versions: Vec<String>,
    pub options: &'a LoadOptions,
    progress: Option<&'a mut dyn LoadProgress>,
}

impl<'a> LoadContext<'a> {
    pub fn new(options: &'a LoadOptions) -> Self {
        Self {
            version: ProjectVersion::CURRENT,
            project_versions: Vec::new(),
            options,
            progress: None,
        }
    }

    /// Use a specific schema version, as if read from a project file.
    pub fn with_version(mut self, version: ProjectVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_progress(mut self, progress: &'a mut dyn LoadProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    pub(crate) fn progress_starting(&mut self, project: &Project, nr_steps: usize) {
        if let Some(progress) = &mut self.progress {
            progress.load_starting(project, nr_steps);
        }
    }

    pub(crate) fn progress_step(&mut self) {
        if let Some(progress) = &mut self.progress {
            progress.load_step();
        }
    }

    /// Warn about a version range end that is not one of the project's versions.
    pub(crate) fn check_version(&self, version: &str) {
        if !version.is_empty() && !self.project_versions.iter().any(|v| v == version) {
            warn!("Version range refers to unknown version {version:?}");
        }
    }
}

/// Load a new record from an element.
pub(crate) fn load_item<T: XmlAdapter + Default>(
    element: &XmlElement,
    ctx: &mut LoadContext<'_>,
) -> Result<T> {
    let mut item = T::default();
    item.load(element, ctx)?;
    Ok(item)
}

/// Load every immediate child with the record's tag, in document order.
pub(crate) fn load_children<T: XmlAdapter + Default>(
    element: &XmlElement,
    ctx: &mut LoadContext<'_>,
) -> Result<Vec<T>> {
    element
        .children_named(T::TAG)
        .map(|child| load_item(child, ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_version_ordering() {
        assert!(ProjectVersion::new(0, 16) < ProjectVersion::PLATFORMS);
        assert!(ProjectVersion::new(1, 0) > ProjectVersion::CURRENT);
        assert_eq!(ProjectVersion::CURRENT.to_string(), "0.17");
    }
}
