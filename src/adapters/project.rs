//! Adapters for the project and its file-level records, plus file I/O.

use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use super::attributes::{
    StartTag, read_bool, read_literal, read_str, read_str_list, write_end, write_literal,
};
use super::dispatch::{SCOPE_CONTENT, load_content, save_content};
use super::xml::{XmlElement, parse_document};
use super::{LoadContext, LoadProgress, ProjectVersion, XmlAdapter, load_children};
use crate::base::{LoadOptions, Output};
use crate::error::{MetasipError, Result};
use crate::model::{
    CallSuperInit, HeaderDirectory, HeaderFile, HeaderFileVersion, Module, Platform, Project,
    SipFile,
};

fn parse_number(element: &XmlElement, name: &str) -> Result<Option<u32>> {
    element
        .attribute(name)
        .map(|value| {
            value.trim().parse().map_err(|_| {
                MetasipError::invalid_attribute(format!("{name}={value:?} is not a number"))
            })
        })
        .transpose()
}

/// Read the schema version of a project element. Files without one are (0, 0).
fn read_version(element: &XmlElement) -> Result<ProjectVersion> {
    let version = match parse_number(element, "majorversion")? {
        Some(major) => {
            let minor = parse_number(element, "minorversion")?.unwrap_or(0);
            ProjectVersion::new(major, minor)
        }
        None => ProjectVersion::new(0, parse_number(element, "version")?.unwrap_or(0)),
    };

    if version > ProjectVersion::CURRENT {
        return Err(MetasipError::UnsupportedVersion(format!(
            "{version} (the latest supported version is {})",
            ProjectVersion::CURRENT
        )));
    }

    Ok(version)
}

impl XmlAdapter for Project {
    const TAG: &'static str = "Project";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        if element.tag != Self::TAG {
            return Err(MetasipError::invalid_element(format!(
                "expected <{}> but found <{}>",
                Self::TAG,
                element.tag
            )));
        }

        ctx.version = read_version(element)?;
        debug!(version = %ctx.version, "Loading project");
        if ctx.version < ProjectVersion::CURRENT {
            warn!(
                "Migrating project from version {} to {}",
                ctx.version,
                ProjectVersion::CURRENT
            );
        }

        self.rootmodule = read_str(element, "rootmodule");
        self.versions = read_str_list(element, "versions");
        self.platforms = read_str_list(element, "platforms");
        self.features = read_str_list(element, "features");
        self.externalmodules = read_str_list(element, "externalmodules");
        self.externalfeatures = read_str_list(element, "externalfeatures");
        self.ignorednamespaces = read_str_list(element, "ignorednamespaces");
        self.sipcomments = read_literal(element, "sipcomments")?;
        ctx.project_versions = self.versions.clone();

        ctx.progress_starting(self, element.count_descendants(SipFile::TAG));

        for child in &element.children {
            match child.tag.as_str() {
                "HeaderDirectory" => {
                    let mut hdir = HeaderDirectory::default();
                    hdir.load(child, ctx)?;
                    self.headers.push(hdir);
                }
                "Module" => {
                    let mut module = Module::default();
                    module.load(child, ctx)?;
                    self.modules.push(module);
                }
                "Literal" => {}
                other => trace!("Skipping <{other}> in <Project>"),
            }
        }

        Ok(())
    }

    fn save(&self, output: &mut Output) {
        output.write("<?xml version=\"1.0\"?>\n", false);

        let version = ProjectVersion::CURRENT;
        let mut tag = StartTag::new(Self::TAG);
        if version.major == 0 {
            tag.attribute("version", &version.minor.to_string());
        } else {
            tag.attribute("majorversion", &version.major.to_string());
            tag.attribute("minorversion", &version.minor.to_string());
        }
        tag.string("rootmodule", &self.rootmodule);
        tag.string_list("versions", &self.versions);
        tag.string_list("platforms", &self.platforms);
        tag.string_list("features", &self.features);
        tag.string_list("externalmodules", &self.externalmodules);
        tag.string_list("externalfeatures", &self.externalfeatures);
        tag.string_list("ignorednamespaces", &self.ignorednamespaces);
        tag.write(output);

        write_literal(output, "sipcomments", &self.sipcomments);
        for hdir in &self.headers {
            hdir.save(output);
        }
        for module in &self.modules {
            module.save(output);
        }

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for HeaderDirectory {
    const TAG: &'static str = "HeaderDirectory";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.name = read_str(element, "name");

        if ctx.version < ProjectVersion::PLATFORMS {
            // The settings used to apply to a single, implied platform.
            self.platforms.push(Platform {
                name: ctx.options.legacy_platform.clone(),
                filefilter: read_str(element, "filefilter"),
                inputdirsuffix: read_str(element, "inputdirsuffix"),
                parserargs: read_str(element, "parserargs"),
            });
            self.add_missing_platforms();
            debug!(directory = %self.name, "Migrated header directory platform settings");
        } else {
            self.platforms = load_children(element, ctx)?;
        }

        self.content = load_children(element, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        tag.string("name", &self.name);
        tag.write(output);

        for platform in &self.platforms {
            platform.save(output);
        }
        for hfile in &self.content {
            hfile.save(output);
        }

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Platform {
    const TAG: &'static str = "Platform";

    fn load(&mut self, element: &XmlElement, _ctx: &mut LoadContext<'_>) -> Result<()> {
        self.name = read_str(element, "name");
        self.filefilter = read_str(element, "filefilter");
        self.inputdirsuffix = read_str(element, "inputdirsuffix");
        self.parserargs = read_str(element, "parserargs");
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        tag.string("name", &self.name);
        tag.string("filefilter", &self.filefilter);
        tag.string("inputdirsuffix", &self.inputdirsuffix);
        tag.string("parserargs", &self.parserargs);
        tag.write(output);
        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for HeaderFile {
    const TAG: &'static str = "HeaderFile";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.name = read_str(element, "name");
        self.module = read_str(element, "module");
        self.ignored = read_bool(element, "ignored");
        self.versions = load_children(element, ctx)?;
        self.ensure_versions(&ctx.project_versions);
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        tag.string("name", &self.name);
        tag.string("module", &self.module);
        tag.boolean("ignored", self.ignored);
        tag.write(output);

        for version in &self.versions {
            version.save(output);
        }

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for HeaderFileVersion {
    const TAG: &'static str = "HeaderFileVersion";

    fn load(&mut self, element: &XmlElement, _ctx: &mut LoadContext<'_>) -> Result<()> {
        self.version = read_str(element, "version");
        self.md5 = read_str(element, "md5");
        self.parse = read_bool(element, "parse");
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        tag.string("version", &self.version);
        tag.string("md5", &self.md5);
        tag.boolean("parse", self.parse);
        tag.write(output);
        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Module {
    const TAG: &'static str = "Module";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.name = read_str(element, "name");
        self.outputdirsuffix = read_str(element, "outputdirsuffix");
        self.callsuperinit = match element.attribute("callsuperinit") {
            Some(value) => {
                let legacy: i64 = value.trim().parse().map_err(|_| {
                    MetasipError::invalid_attribute(format!(
                        "callsuperinit={value:?} is not a number"
                    ))
                })?;
                CallSuperInit::from_legacy(legacy)
            }
            None => CallSuperInit::Undefined,
        };
        self.virtualerrorhandler = read_str(element, "virtualerrorhandler");
        self.uselimitedapi = read_bool(element, "uselimitedapi");
        self.pyssizetclean = read_bool(element, "pyssizetclean");
        self.imports = read_str_list(element, "imports");
        self.directives = read_literal(element, "directives")?;
        self.content = load_children(element, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        tag.string("name", &self.name);
        tag.string("outputdirsuffix", &self.outputdirsuffix);
        if self.callsuperinit != CallSuperInit::Undefined {
            tag.attribute("callsuperinit", &self.callsuperinit.to_legacy().to_string());
        }
        tag.string("virtualerrorhandler", &self.virtualerrorhandler);
        tag.boolean("uselimitedapi", self.uselimitedapi);
        tag.boolean("pyssizetclean", self.pyssizetclean);
        tag.string_list("imports", &self.imports);
        tag.write(output);

        write_literal(output, "directives", &self.directives);
        for sip_file in &self.content {
            sip_file.save(output);
        }

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for SipFile {
    const TAG: &'static str = "SipFile";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.name = read_str(element, "name");
        self.exportedheadercode = read_literal(element, "exportedheadercode")?;
        self.moduleheadercode = read_literal(element, "moduleheadercode")?;
        self.modulecode = read_literal(element, "modulecode")?;
        self.preinitcode = read_literal(element, "preinitcode")?;
        self.initcode = read_literal(element, "initcode")?;
        self.postinitcode = read_literal(element, "postinitcode")?;
        self.exportedtypehintcode = read_literal(element, "exportedtypehintcode")?;
        self.typehintcode = read_literal(element, "typehintcode")?;
        self.content = load_content(element, SCOPE_CONTENT, ctx)?;

        ctx.progress_step();
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        tag.string("name", &self.name);
        tag.write(output);

        write_literal(output, "exportedheadercode", &self.exportedheadercode);
        write_literal(output, "moduleheadercode", &self.moduleheadercode);
        write_literal(output, "modulecode", &self.modulecode);
        write_literal(output, "preinitcode", &self.preinitcode);
        write_literal(output, "initcode", &self.initcode);
        write_literal(output, "postinitcode", &self.postinitcode);
        write_literal(output, "exportedtypehintcode", &self.exportedtypehintcode);
        write_literal(output, "typehintcode", &self.typehintcode);
        save_content(&self.content, Self::TAG, SCOPE_CONTENT, output);

        write_end(output, Self::TAG);
    }
}

impl Project {
    /// Parse a project from the text of a project file.
    pub fn from_xml(
        text: &str,
        options: &LoadOptions,
        progress: Option<&mut dyn LoadProgress>,
    ) -> Result<Self> {
        let root = parse_document(text)?;
        let mut ctx = LoadContext::new(options);
        if let Some(progress) = progress {
            ctx = ctx.with_progress(progress);
        }
        let mut project = Project::default();
        project.load(&root, &mut ctx)?;
        Ok(project)
    }

    /// Read a project file. The project remembers where it was read from.
    pub fn read_file(
        path: impl AsRef<Path>,
        options: &LoadOptions,
        progress: Option<&mut dyn LoadProgress>,
    ) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading project");

        let text = fs::read_to_string(path)?;
        let mut project = Self::from_xml(&text, options, progress)?;
        project.path = Some(path.to_path_buf());
        Ok(project)
    }

    /// The project in project file format, at the current schema version.
    pub fn to_xml(&self) -> String {
        let mut output = Output::xml();
        self.save(&mut output);
        output.into_string()
    }

    /// Write the project file, remember the path and clear the dirty flag.
    pub fn write_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Writing project");

        fs::write(path, self.to_xml())?;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }
}
