//! Generation of `.sip` text from loaded projects.

#![allow(clippy::unwrap_used)]

use metasip::generator::{generate_module, generate_project, generate_sip_file, sip_text};
use metasip::model::{
    Argument, Class, Code, CodeMeta, ExtendedAccess, Method, SipFile, Tagged, Typedef,
    VersionRange,
};
use metasip::{LoadOptions, Module, Output, Project};

const PROJECT: &str = r#"<?xml version="1.0"?>
<Project version="17" rootmodule="PyQt6" versions="Qt_6_0_0 Qt_6_1_0" platforms="WS_X11 WS_WIN">
  <Module name="QtCore" outputdirsuffix="QtCore">
    <SipFile name="qtimer.h">
      <Class name="QTimer" bases="QObject">
        <Method name="start" rtype="void"/>
        <Method name="stop" rtype="void"/>
        <Method access="protected" name="timerEvent" rtype="void" virtual="1">
          <Argument type="QTimerEvent *"/>
        </Method>
        <Method access="signals" name="timeout" rtype="void"/>
        <Method status="ignored" name="callOnTimeout" rtype="void"/>
      </Class>
    </SipFile>
    <SipFile name="qglobal.h">
      <Typedef versions="Qt_6_0_0-Qt_6_1_0 -Qt_6_1_0" platforms="WS_X11" type="int" name="qint32"/>
      <ManualCode precis="%ModuleCode">
        <Literal type="body">
static int counter = 0;
        </Literal>
      </ManualCode>
    </SipFile>
    <SipFile name="qprivate.h">
      <Typedef status="removed" type="void *" name="QPrivate"/>
    </SipFile>
  </Module>
</Project>
"#;

fn load() -> Project {
    Project::from_xml(PROJECT, &LoadOptions::default(), None).unwrap()
}

#[test]
fn test_typedef_generates_declaration() {
    let code = Code::Typedef(Typedef::new("Foo", "int"));
    assert_eq!(sip_text(&code, &SipFile::new("foo.h")), "typedef int Foo;\n");
}

#[test]
fn test_guard_nesting() {
    let code = Code::Typedef(Typedef {
        meta: CodeMeta {
            tagged: Tagged {
                versions: vec![
                    VersionRange::new("Qt_6_0_0", "Qt_6_1_0"),
                    VersionRange::new("", "Qt_6_1_0"),
                ],
                platforms: vec!["WS_X11".into()],
                features: vec![],
            },
            ..Default::default()
        },
        ..Typedef::new("qint32", "int")
    });

    let text = sip_text(&code, &SipFile::new("qglobal.h"));
    assert_eq!(text.matches("%If (").count(), 3);
    assert_eq!(text.matches("%End").count(), 3);
    assert_eq!(
        text,
        "%If (Qt_6_0_0 - Qt_6_1_0)\n%If (- Qt_6_1_0)\n%If (WS_X11)\ntypedef int qint32;\n%End\n%End\n%End\n"
    );
}

#[test]
fn test_class_access_blocks_are_minimal() {
    let project = load();
    let module = project.module("QtCore").unwrap();

    let mut output = Output::sip();
    generate_sip_file(&project, module, &module.content[0], &mut output);
    let text = output.as_str();

    assert_eq!(text.matches("public:").count(), 1);
    assert_eq!(text.matches("protected:").count(), 1);
    assert_eq!(text.matches("signals:").count(), 1);
    assert!(!text.contains("callOnTimeout"));
    assert!(text.ends_with(
        "public:\n    void start();\n    void stop();\n\n\
         protected:\n    virtual void timerEvent(QTimerEvent *);\n\n\
         signals:\n    void timeout();\n};\n\n"
    ));
}

#[test]
fn test_python_signature_disclosure() {
    let mut method = Method {
        name: "toLongLong".into(),
        rtype: "qlonglong".into(),
        pytype: "int".into(),
        is_const: true,
        ..Default::default()
    };
    let sip_file = SipFile::new("qstring.h");

    assert_eq!(
        sip_text(&Code::Method(method.clone()), &sip_file),
        "int toLongLong() const [qlonglong ()];\n"
    );

    method.methcode = "sipRes = sipCpp->toLongLong();".into();
    let text = sip_text(&Code::Method(method.clone()), &sip_file);
    assert!(text.starts_with("int toLongLong() const;\n%MethodCode\n"));

    method.access = ExtendedAccess::Protected;
    let text = sip_text(&Code::Method(method), &sip_file);
    assert!(text.starts_with("int toLongLong() const [qlonglong ()];\n"));
}

#[test]
fn test_argument_pytype_makes_signatures_differ() {
    let mut class = Class::new("QVariant");
    class.is_struct = true;
    class.content.push(Code::Method(Method {
        name: "setValue".into(),
        rtype: "void".into(),
        args: vec![Argument {
            pytype: "SIP_PYOBJECT".into(),
            ..Argument::named("const QVariant &", "value")
        }],
        ..Default::default()
    }));

    let text = sip_text(&Code::Class(class), &SipFile::new("qvariant.h"));
    assert!(text.contains("    void setValue(SIP_PYOBJECT value) [void (const QVariant &)];\n"));
}

// A precis starting with `%` is a raw directive. This is a special case of
// manual code rather than a general rule.
#[test]
fn test_manual_code_directive_precis() {
    let project = load();
    let module = project.module("QtCore").unwrap();

    let mut output = Output::sip();
    generate_sip_file(&project, module, &module.content[1], &mut output);
    assert!(output.as_str().ends_with("%ModuleCode\nstatic int counter = 0;\n%End\n"));
}

#[test]
fn test_module_includes_active_files_only() {
    let project = load();
    let module = project.module("QtCore").unwrap();

    let mut output = Output::sip();
    generate_module(&project, module, &mut output);
    let text = output.as_str();

    assert!(text.contains("%Module(name=PyQt6.QtCore)\n"));
    assert!(text.contains("%Timeline {Qt_6_0_0 Qt_6_1_0}\n"));
    assert!(text.contains("%Platforms {WS_X11 WS_WIN}\n"));
    assert!(text.ends_with("%Include qtimer.sip\n%Include qglobal.sip\n"));
}

#[test]
fn test_generate_project_writes_files() {
    let project = load();
    let dir = tempfile::tempdir().unwrap();

    let written = generate_project(&project, dir.path()).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["QtCoremod.sip", "qtimer.sip", "qglobal.sip"]);

    let qtimer = std::fs::read_to_string(dir.path().join("QtCore").join("qtimer.sip")).unwrap();
    assert!(qtimer.starts_with("// qtimer.sip generated by MetaSIP\n"));
    assert!(qtimer.contains("class QTimer : QObject\n{\n%TypeHeaderCode\n#include <qtimer.h>\n%End\n"));
}

#[test]
fn test_module_code_only_file_is_generated() {
    let mut project = Project::new();
    let mut module = Module::new("QtCore");
    let mut sip_file = SipFile::new("qcoreapplication.h");
    sip_file.modulecode = "static int counter = 0;".into();
    sip_file.initcode = "qInit();".into();
    module.content.push(sip_file);
    project.modules.push(module);

    let module = &project.modules[0];
    let mut output = Output::sip();
    generate_module(&project, module, &mut output);
    assert!(output.as_str().ends_with("%Include qcoreapplication.sip\n"));

    let dir = tempfile::tempdir().unwrap();
    let written = generate_project(&project, dir.path()).unwrap();
    assert_eq!(written.len(), 2);

    let text = std::fs::read_to_string(&written[1]).unwrap();
    assert!(text.contains("%ModuleCode\nstatic int counter = 0;\n%End\n"));
    assert!(text.contains("%InitialisationCode\nqInit();\n%End\n"));
}
