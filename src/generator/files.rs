//! Generation of complete `.sip` files and module directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SipContext, generate_content};
use crate::base::Output;
use crate::error::Result;
use crate::model::{CallSuperInit, Module, Project, SipFile};

fn write_banner(file_name: &str, project: &Project, module: &Module, output: &mut Output) {
    output.write(&format!("// {file_name} generated by MetaSIP\n"), false);
    output.write("//\n", false);

    let module_name = if project.rootmodule.is_empty() {
        module.name.clone()
    } else {
        format!("{}.{}", project.rootmodule, module.name)
    };
    output.write(
        &format!("// This file is part of the {module_name} Python extension module.\n"),
        false,
    );

    if !project.sipcomments.is_empty() {
        output.write("//\n", false);
        for line in project.sipcomments.lines() {
            if line.is_empty() {
                output.write("//\n", false);
            } else {
                output.write(&format!("// {line}\n"), false);
            }
        }
    }

    output.blank();
}

/// Generate the `.sip` file for one header.
pub fn generate_sip_file(
    project: &Project,
    module: &Module,
    sip_file: &SipFile,
    output: &mut Output,
) {
    write_banner(&format!("{}.sip", sip_file.stem()), project, module, output);

    let directives = [
        ("%ExportedHeaderCode", &sip_file.exportedheadercode),
        ("%ModuleHeaderCode", &sip_file.moduleheadercode),
        ("%ModuleCode", &sip_file.modulecode),
        ("%PreInitialisationCode", &sip_file.preinitcode),
        ("%InitialisationCode", &sip_file.initcode),
        ("%PostInitialisationCode", &sip_file.postinitcode),
        ("%ExportedTypeHintCode", &sip_file.exportedtypehintcode),
        ("%TypeHintCode", &sip_file.typehintcode),
    ];
    for (name, body) in directives {
        if !body.is_empty() {
            output.write_code_directive(name, body, true);
            output.blank();
        }
    }

    generate_content(&sip_file.content, &SipContext::new(sip_file), output);
}

/// Generate the `%Module` file of a module, which includes its `.sip` files.
pub fn generate_module(project: &Project, module: &Module, output: &mut Output) {
    write_banner(&format!("{}mod.sip", module.name), project, module, output);

    let mut args = vec![if project.rootmodule.is_empty() {
        format!("name={}", module.name)
    } else {
        format!("name={}.{}", project.rootmodule, module.name)
    }];
    match module.callsuperinit {
        CallSuperInit::Undefined => {}
        CallSuperInit::No => args.push("call_super_init=False".to_string()),
        CallSuperInit::Yes => args.push("call_super_init=True".to_string()),
    }
    if !module.virtualerrorhandler.is_empty() {
        args.push(format!("default_VirtualErrorHandler={}", module.virtualerrorhandler));
    }
    if module.uselimitedapi {
        args.push("use_limited_api=True".to_string());
    }
    if module.pyssizetclean {
        args.push("py_ssize_t_clean=True".to_string());
    }
    output.write(&format!("%Module({})\n", args.join(", ")), false);
    output.blank();

    // Only the module at the root of the import graph defines these.
    if module.imports.is_empty() {
        if !project.versions.is_empty() {
            output.write(&format!("%Timeline {{{}}}\n", project.versions.join(" ")), false);
        }
        if !project.platforms.is_empty() {
            output.write(&format!("%Platforms {{{}}}\n", project.platforms.join(" ")), false);
        }
        for feature in &project.features {
            output.write(&format!("%Feature(name={feature})\n"), false);
        }
    } else {
        for import in &module.imports {
            output.write(&format!("%Import {import}/{import}mod.sip\n"), false);
        }
    }
    output.blank();

    if !module.directives.is_empty() {
        output.write(&module.directives, false);
        if !module.directives.ends_with('\n') {
            output.write("\n", false);
        }
        output.blank();
    }

    for sip_file in module.content.iter().filter(|f| f.is_generated()) {
        output.write(&format!("%Include {}.sip\n", sip_file.stem()), false);
    }
}

/// Generate every module of a project below `dir`.
///
/// Each module gets its own directory containing `{name}mod.sip` and one
/// `.sip` file for every header with active items or module-level code. Returns the
/// paths of the files written.
pub fn generate_project(project: &Project, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut written = Vec::new();

    for module in &project.modules {
        let module_dir = dir.join(module.output_dir_name());
        fs::create_dir_all(&module_dir)?;
        debug!(module = %module.name, dir = %module_dir.display(), "Generating module");

        let mut output = Output::sip();
        generate_module(project, module, &mut output);
        let path = module_dir.join(format!("{}mod.sip", module.name));
        fs::write(&path, output.as_str())?;
        written.push(path);

        for sip_file in module.content.iter().filter(|f| f.is_generated()) {
            let mut output = Output::sip();
            generate_sip_file(project, module, sip_file, &mut output);
            let path = module_dir.join(format!("{}.sip", sip_file.stem()));
            fs::write(&path, output.as_str())?;
            written.push(path);
        }
    }

    debug!(files = written.len(), "Generated project");
    Ok(written)
}
