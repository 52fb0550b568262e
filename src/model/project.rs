//! The project aggregate and its file-level records.

use std::path::PathBuf;

use super::code::Code;

/// Platforms every header directory is expected to have settings for.
pub const SUPPORTED_PLATFORMS: &[&str] = &["Linux", "macOS", "Windows"];

/// The root of a MetaSIP project.
#[derive(Clone, Debug, Default)]
pub struct Project {
    /// The Python package the modules belong to, e.g. `PyQt6`.
    pub rootmodule: String,
    /// Ordered version names (the SIP timeline).
    pub versions: Vec<String>,
    pub platforms: Vec<String>,
    pub features: Vec<String>,
    pub externalmodules: Vec<String>,
    pub externalfeatures: Vec<String>,
    /// Namespaces the header scanner strips from declarations.
    pub ignorednamespaces: Vec<String>,
    /// Text placed as comments at the top of every generated file.
    pub sipcomments: String,
    pub headers: Vec<HeaderDirectory>,
    pub modules: Vec<Module>,

    /// File the project was loaded from or last saved to.
    pub path: Option<PathBuf>,
    /// Set by editors when the project has unsaved changes.
    pub dirty: bool,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a module by name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Find a header directory by name.
    pub fn header_directory(&self, name: &str) -> Option<&HeaderDirectory> {
        self.headers.iter().find(|h| h.name == name)
    }
}

// Runtime state (path, dirty) is not part of the project's structure.
impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.rootmodule == other.rootmodule
            && self.versions == other.versions
            && self.platforms == other.platforms
            && self.features == other.features
            && self.externalmodules == other.externalmodules
            && self.externalfeatures == other.externalfeatures
            && self.ignorednamespaces == other.ignorednamespaces
            && self.sipcomments == other.sipcomments
            && self.headers == other.headers
            && self.modules == other.modules
    }
}

/// A directory of C/C++ header files scanned for declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderDirectory {
    pub name: String,
    pub platforms: Vec<Platform>,
    pub content: Vec<HeaderFile>,
}

impl HeaderDirectory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn platform(&self, name: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.name == name)
    }

    /// Append default settings for every supported platform not yet configured.
    pub fn add_missing_platforms(&mut self) {
        for name in SUPPORTED_PLATFORMS {
            if self.platform(name).is_none() {
                let platform = Platform::default_for(name, &self.name);
                self.platforms.push(platform);
            }
        }
    }
}

/// Per-platform scanner settings of a header directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Platform {
    pub name: String,
    pub filefilter: String,
    pub inputdirsuffix: String,
    pub parserargs: String,
}

impl Platform {
    /// Sensible settings for a platform. macOS headers live in frameworks.
    pub fn default_for(name: &str, directory: &str) -> Self {
        let inputdirsuffix = if name == "macOS" {
            format!("{directory}.framework/Headers")
        } else {
            directory.to_string()
        };

        Self {
            name: name.to_string(),
            filefilter: "*.h".to_string(),
            inputdirsuffix,
            parserargs: String::new(),
        }
    }
}

/// A header file in a header directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderFile {
    pub name: String,
    /// The module the header's declarations are assigned to.
    pub module: String,
    pub ignored: bool,
    /// Empty iff `ignored`.
    pub versions: Vec<HeaderFileVersion>,
}

impl HeaderFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Make `versions` agree with `ignored` and the project's versions.
    ///
    /// Ignored headers have no versions. Otherwise there is one entry per
    /// project version, or a single unnamed entry if the project has none.
    /// Existing entries are kept.
    pub fn ensure_versions(&mut self, project_versions: &[String]) {
        if self.ignored {
            self.versions.clear();
            return;
        }

        if project_versions.is_empty() {
            if self.versions.is_empty() {
                self.versions.push(HeaderFileVersion::default());
            }
            return;
        }

        let mut versions = Vec::with_capacity(project_versions.len());
        for name in project_versions {
            let existing = self.versions.iter().find(|v| &v.version == name).cloned();
            versions.push(existing.unwrap_or_else(|| HeaderFileVersion {
                version: name.clone(),
                ..Default::default()
            }));
        }
        self.versions = versions;
    }
}

/// The state of a header file for one project version.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderFileVersion {
    pub version: String,
    pub md5: String,
    /// Set when the header needs (re)parsing.
    pub parse: bool,
}

/// Whether a module's generated classes call `super().__init__()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CallSuperInit {
    #[default]
    Undefined,
    No,
    Yes,
}

impl CallSuperInit {
    /// Decode the legacy tri-state integer.
    pub fn from_legacy(value: i64) -> Self {
        match value {
            -1 => CallSuperInit::Undefined,
            0 => CallSuperInit::No,
            _ => CallSuperInit::Yes,
        }
    }

    /// Encode as the legacy tri-state integer.
    pub fn to_legacy(self) -> i64 {
        match self {
            CallSuperInit::Undefined => -1,
            CallSuperInit::No => 0,
            CallSuperInit::Yes => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CallSuperInit::Undefined => "undefined",
            CallSuperInit::No => "no",
            CallSuperInit::Yes => "yes",
        }
    }
}

/// A Python extension module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub outputdirsuffix: String,
    pub callsuperinit: CallSuperInit,
    pub virtualerrorhandler: String,
    pub uselimitedapi: bool,
    pub pyssizetclean: bool,
    /// Names of modules this module `%Import`s.
    pub imports: Vec<String>,
    /// Extra text placed in the module's `.sip` file.
    pub directives: String,
    pub content: Vec<SipFile>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The directory the module's `.sip` files are generated in.
    pub fn output_dir_name(&self) -> &str {
        if self.outputdirsuffix.is_empty() {
            &self.name
        } else {
            &self.outputdirsuffix
        }
    }
}

/// The `.sip` file generated for one header file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SipFile {
    /// The header file name, e.g. `qobject.h`.
    pub name: String,
    pub exportedheadercode: String,
    pub moduleheadercode: String,
    pub modulecode: String,
    pub preinitcode: String,
    pub initcode: String,
    pub postinitcode: String,
    pub exportedtypehintcode: String,
    pub typehintcode: String,
    pub content: Vec<Code>,
}

impl SipFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The header name without its extension, used to name the `.sip` file.
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(pos) if pos > 0 => &self.name[..pos],
            _ => &self.name,
        }
    }

    /// True if any item would be generated.
    pub fn has_active_content(&self) -> bool {
        self.content.iter().any(|c| c.status().is_active())
    }

    /// True if any module-level directive has a body.
    pub fn has_module_code(&self) -> bool {
        [
            &self.exportedheadercode,
            &self.moduleheadercode,
            &self.modulecode,
            &self.preinitcode,
            &self.initcode,
            &self.postinitcode,
            &self.exportedtypehintcode,
            &self.typehintcode,
        ]
        .iter()
        .any(|code| !code.is_empty())
    }

    /// True if the file has anything to generate and is included by its module.
    pub fn is_generated(&self) -> bool {
        self.has_active_content() || self.has_module_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_defaults() {
        let linux = Platform::default_for("Linux", "QtCore");
        assert_eq!(linux.inputdirsuffix, "QtCore");
        assert_eq!(linux.filefilter, "*.h");

        let mac = Platform::default_for("macOS", "QtCore");
        assert_eq!(mac.inputdirsuffix, "QtCore.framework/Headers");
    }

    #[test]
    fn test_add_missing_platforms_keeps_existing() {
        let mut hdir = HeaderDirectory::new("QtGui");
        hdir.platforms.push(Platform {
            name: "Windows".into(),
            filefilter: "q*.h".into(),
            ..Default::default()
        });
        hdir.add_missing_platforms();

        let names: Vec<_> = hdir.platforms.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Windows", "Linux", "macOS"]);
        assert_eq!(hdir.platform("Windows").unwrap().filefilter, "q*.h");
    }

    #[test]
    fn test_ensure_versions() {
        let mut hfile = HeaderFile::new("qobject.h");
        hfile.ensure_versions(&[]);
        assert_eq!(hfile.versions.len(), 1);

        hfile.versions[0].md5 = "abc".into();
        hfile.versions[0].version = "Qt_6_0_0".into();
        hfile.ensure_versions(&["Qt_6_0_0".to_string(), "Qt_6_1_0".to_string()]);
        assert_eq!(hfile.versions.len(), 2);
        assert_eq!(hfile.versions[0].md5, "abc");
        assert_eq!(hfile.versions[1].version, "Qt_6_1_0");

        hfile.ignored = true;
        hfile.ensure_versions(&["Qt_6_0_0".to_string()]);
        assert!(hfile.versions.is_empty());
    }

    #[test]
    fn test_call_super_init_legacy() {
        assert_eq!(CallSuperInit::from_legacy(-1), CallSuperInit::Undefined);
        assert_eq!(CallSuperInit::from_legacy(0), CallSuperInit::No);
        assert_eq!(CallSuperInit::from_legacy(2), CallSuperInit::Yes);
        assert_eq!(CallSuperInit::Yes.to_legacy(), 1);
    }

    #[test]
    fn test_sip_file_is_generated() {
        let mut sip_file = SipFile::new("qglobal.h");
        assert!(!sip_file.is_generated());

        sip_file.initcode = "qInit();".into();
        assert!(sip_file.has_module_code());
        assert!(!sip_file.has_active_content());
        assert!(sip_file.is_generated());
    }

    #[test]
    fn test_sip_file_stem() {
        assert_eq!(SipFile::new("qobject.h").stem(), "qobject");
        assert_eq!(SipFile::new("QtCore").stem(), "QtCore");
    }

    #[test]
    fn test_project_equality_ignores_runtime_state() {
        let a = Project::new();
        let mut b = Project::new();
        b.dirty = true;
        b.path = Some(PathBuf::from("p.msp"));
        assert_eq!(a, b);
    }
}
