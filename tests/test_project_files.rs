//! Project file loading and saving: round trips, defaults, progress and errors.

#![allow(clippy::unwrap_used)]

use metasip::model::{
    Access, Argument, CallSuperInit, Class, Code, Constructor, Enum, EnumValue, ExtendedAccess,
    HeaderDirectory, HeaderFile, HeaderFileVersion, ManualCode, Method, Module, Namespace,
    Platform, SipFile, Status, Typedef, VersionRange,
};
use metasip::{LoadOptions, LoadProgress, MetasipError, Project};

fn sample_project() -> Project {
    let mut project = Project::new();
    project.rootmodule = "PyQt6".into();
    project.versions = vec!["Qt_6_0_0".into(), "Qt_6_1_0".into(), "Qt_6_2_0".into()];
    project.platforms = vec!["WS_X11".into(), "WS_WIN".into(), "WS_MACX".into()];
    project.features = vec!["PyQt_SSL".into()];
    project.ignorednamespaces = vec!["QtPrivate".into()];
    project.sipcomments = "Copyright (c) 2024 Riverbank Computing Limited".into();

    let mut hdir = HeaderDirectory::new("QtCore");
    hdir.add_missing_platforms();
    let mut hfile = HeaderFile::new("qobject.h");
    hfile.module = "QtCore".into();
    hfile.versions.push(HeaderFileVersion {
        version: "Qt_6_0_0".into(),
        md5: "0123456789abcdef".into(),
        parse: true,
    });
    hfile.ensure_versions(&project.versions);
    hdir.content.push(hfile);
    project.headers.push(hdir);

    let mut class = Class::new("QObject");
    class.typeheadercode = "#include <qobject.h>".into();
    class.convtosubcode = "sipType = sipType_QObject;".into();
    class.content.push(Code::Constructor(Constructor {
        name: "QObject".into(),
        is_explicit: true,
        args: vec![Argument {
            default: "nullptr".into(),
            annos: "TransferThis".into(),
            ..Argument::named("QObject *", "parent")
        }],
        ..Default::default()
    }));
    let mut method = Method {
        access: ExtendedAccess::PublicSlots,
        name: "deleteLater".into(),
        rtype: "void".into(),
        ..Default::default()
    };
    method.meta.tagged.versions.push(VersionRange::new("Qt_6_1_0", ""));
    method.meta.comments = "Schedules deletion.\n\nSafe from any thread.".into();
    class.content.push(Code::Method(method));
    class.content.push(Code::Enum(Enum {
        access: Access::Protected,
        name: "Kind".into(),
        content: vec![EnumValue::new("A"), EnumValue::new("B")],
        ..Default::default()
    }));

    let mut namespace = Namespace::new("Qt");
    namespace.content.push(Code::Typedef(Typedef::new("HANDLE", "void *")));

    let mut sip_file = SipFile::new("qobject.h");
    sip_file.modulecode = "static int counter = 0;".into();
    sip_file.content.push(Code::Class(class));
    sip_file.content.push(Code::Namespace(namespace));
    let mut ignored = ManualCode::new("void qt_private()");
    ignored.meta.status = Status::Ignored;
    sip_file.content.push(Code::ManualCode(ignored));

    let mut module = Module::new("QtCore");
    module.callsuperinit = CallSuperInit::Yes;
    module.pyssizetclean = true;
    module.directives = "%DefaultEncoding \"UTF-8\"".into();
    module.content.push(sip_file);
    module.content.push(SipFile::new("qglobal.h"));
    project.modules.push(module);

    project
}

#[test]
fn test_roundtrip_preserves_project() {
    let project = sample_project();
    let text = project.to_xml();

    let loaded = Project::from_xml(&text, &LoadOptions::default(), None).unwrap();
    assert_eq!(loaded, project);
}

#[test]
fn test_save_is_idempotent() {
    let text = sample_project().to_xml();
    let loaded = Project::from_xml(&text, &LoadOptions::default(), None).unwrap();
    assert_eq!(loaded.to_xml(), text);
}

#[test]
fn test_defaults_are_omitted() {
    let text = sample_project().to_xml();

    assert!(text.starts_with(
        "<?xml version=\"1.0\"?>\n<Project version=\"17\" rootmodule=\"PyQt6\""
    ));
    assert!(!text.contains("ignored="), "false booleans are never written");
    assert!(!text.contains("virtual="));
    assert!(!text.contains("status=\"\""));
    assert!(!text.contains("access=\"\""));
    assert!(text.contains("<Constructor name=\"QObject\" explicit=\"1\">"));
    assert!(text.contains(
        "<Method versions=\"Qt_6_1_0-\" access=\"public slots\" name=\"deleteLater\" rtype=\"void\">"
    ));
    assert!(text.contains("<ManualCode status=\"ignored\" precis=\"void qt_private()\">"));
    assert!(text.contains("<Module name=\"QtCore\" callsuperinit=\"1\" pyssizetclean=\"1\">"));
}

#[test]
fn test_typedef_scenario() {
    let mut project = Project::new();
    let mut module = Module::new("QtCore");
    let mut sip_file = SipFile::new("qglobal.h");
    sip_file.content.push(Code::Typedef(Typedef::new("Foo", "int")));
    module.content.push(sip_file);
    project.modules.push(module);

    let text = project.to_xml();
    assert!(text.contains("      <Typedef type=\"int\" name=\"Foo\">\n      </Typedef>\n"));
}

#[test]
fn test_unknown_elements_and_attributes_are_skipped() {
    let text = r#"<?xml version="1.0"?>
<Project version="17" rootmodule="PyQt6" colour="blue">
  <Toolbar visible="1"/>
  <Module name="QtCore">
    <SipFile name="qobject.h">
      <Typedef type="int" name="qint32" frobnicate="1"/>
      <Widget name="x"/>
      <Method name="notAtFileScope"/>
    </SipFile>
  </Module>
</Project>
"#;

    let project = Project::from_xml(text, &LoadOptions::default(), None).unwrap();
    let module = project.module("QtCore").unwrap();
    assert_eq!(module.content[0].content.len(), 1);
    assert_eq!(module.content[0].content[0].name(), "qint32");
}

#[derive(Default)]
struct Recorder {
    nr_steps: Option<usize>,
    steps: usize,
}

impl LoadProgress for Recorder {
    fn load_starting(&mut self, _project: &Project, nr_steps: usize) {
        self.nr_steps = Some(nr_steps);
    }

    fn load_step(&mut self) {
        self.steps += 1;
    }
}

#[test]
fn test_progress_counts_sip_files() {
    let mut project = sample_project();
    project.modules.push(Module {
        content: vec![SipFile::new("qwidget.h")],
        ..Module::new("QtWidgets")
    });
    let text = project.to_xml();

    let mut recorder = Recorder::default();
    let progress: &mut dyn LoadProgress = &mut recorder;
    Project::from_xml(&text, &LoadOptions::default(), Some(progress)).unwrap();

    assert_eq!(recorder.nr_steps, Some(3));
    assert_eq!(recorder.steps, 3);
}

#[test]
fn test_newer_version_is_rejected() {
    let text = r#"<?xml version="1.0"?><Project majorversion="1" minorversion="2"></Project>"#;
    let result = Project::from_xml(text, &LoadOptions::default(), None);
    assert!(matches!(result, Err(MetasipError::UnsupportedVersion(_))));
}

#[test]
fn test_malformed_documents_fail() {
    let options = LoadOptions::default();
    assert!(matches!(
        Project::from_xml("<Project version=\"17\"><Module></Project>", &options, None),
        Err(MetasipError::Xml(_))
    ));
    assert!(matches!(
        Project::from_xml(
            "<Project version=\"17\"><Literal>no type</Literal></Project>",
            &options,
            None
        ),
        Err(MetasipError::Missing { .. })
    ));
}

#[test]
fn test_file_roundtrip_sets_path_and_clears_dirty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("PyQt6.msp");

    let mut project = sample_project();
    project.dirty = true;
    project.write_file(&path).unwrap();
    assert!(!project.dirty);
    assert_eq!(project.path.as_deref(), Some(path.as_path()));

    let loaded = Project::read_file(&path, &LoadOptions::default(), None).unwrap();
    assert_eq!(loaded, project);
    assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
    assert!(!loaded.dirty);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Project::read_file(dir.path().join("missing.msp"), &LoadOptions::default(), None);
    assert!(matches!(result, Err(MetasipError::Io(_))));
}

#[test]
fn test_platform_settings_roundtrip() {
    let project = sample_project();
    let text = project.to_xml();
    assert!(text.contains(
        "<Platform name=\"macOS\" filefilter=\"*.h\" inputdirsuffix=\"QtCore.framework/Headers\">"
    ));

    let loaded = Project::from_xml(&text, &LoadOptions::default(), None).unwrap();
    let hdir = loaded.header_directory("QtCore").unwrap();
    assert_eq!(
        hdir.platform("Linux"),
        Some(&Platform::default_for("Linux", "QtCore"))
    );
}

// Literal text is stripped when loaded, so only the leading indentation of
// the first line and trailing whitespace are lost on a round trip.
#[test]
fn test_literal_whitespace_is_stripped() {
    let mut project = Project::new();
    let mut module = Module::new("QtCore");
    let mut sip_file = SipFile::new("qobject.h");
    let mut class = Class::new("QObject");
    class.content.push(Code::Method(Method {
        name: "dumpObjectInfo".into(),
        rtype: "void".into(),
        methcode: "    first();\n    if (x)\n        second();\n".into(),
        ..Default::default()
    }));
    sip_file.content.push(Code::Class(class));
    module.content.push(sip_file);
    project.modules.push(module);

    let loaded = Project::from_xml(&project.to_xml(), &LoadOptions::default(), None).unwrap();
    let Code::Class(class) = &loaded.modules[0].content[0].content[0] else {
        panic!("expected a class");
    };
    let Code::Method(method) = &class.content[0] else {
        panic!("expected a method");
    };
    assert_eq!(method.methcode, "first();\n    if (x)\n        second();");
}
