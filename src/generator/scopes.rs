//! Generation of classes, namespaces, enums and the simpler declarations.

use super::guards::{version_end, version_start};
use super::signature::annotations;
use super::{GenerateSip, SipContext, generate_content};
use crate::base::Output;
use crate::model::{
    Class, Enum, EnumValue, ExtendedAccess, ManualCode, Namespace, OpaqueClass, Typedef,
    Variable, expand_type,
};

/// The `%TypeHeaderCode` of a scope, defaulting to an include of the header.
fn type_header_code(code: &str, ctx: &SipContext<'_>) -> String {
    if code.is_empty() {
        format!("#include <{}>", ctx.sip_file.name)
    } else {
        code.to_string()
    }
}

fn with_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

impl GenerateSip for Class {
    fn generate_sip(&self, ctx: &SipContext<'_>, output: &mut Output) {
        output.blank();
        let nr_ends = version_start(&self.meta, output);

        let mut decl = String::from(if self.is_struct { "struct " } else { "class " });
        decl.push_str(&self.name);
        let bases = if self.pybases.is_empty() {
            &self.bases
        } else {
            &self.pybases
        };
        if !bases.is_empty() {
            decl.push_str(" : ");
            decl.push_str(bases);
        }
        decl.push_str(&annotations(&self.annos));
        output.write(&format!("{decl}\n{{\n"), true);

        let header_code = type_header_code(&self.typeheadercode, ctx);
        output.write_code_directive("%TypeHeaderCode", &header_code, true);
        output.write_code_directive("%TypeHintCode", &self.typehintcode, true);
        output.write_code_directive("%TypeCode", &self.typecode, true);
        output.write_code_directive("%ConvertToSubClassCode", &self.convtosubcode, true);
        output.write_code_directive("%ConvertToTypeCode", &self.convtotypecode, true);
        output.write_code_directive("%ConvertFromTypeCode", &self.convfromtypecode, true);
        output.write_code_directive("%GCTraverseCode", &self.gctraversecode, true);
        output.write_code_directive("%GCClearCode", &self.gcclearcode, true);
        output.write_code_directive("%BIGetBufferCode", &self.bigetbufcode, true);
        output.write_code_directive("%BIReleaseBufferCode", &self.bireleasebufcode, true);
        output.write_code_directive("%PickleCode", &self.picklecode, true);
        output.write_code_directive("%FinalisationCode", &self.finalisationcode, true);
        output.write_code_directive("%Docstring", &self.docstring, true);

        // Members are implicitly public in a struct and private in a class.
        let mut current = if self.is_struct {
            ExtendedAccess::Public
        } else {
            ExtendedAccess::Private
        };

        output.indent();
        for member in self.content.iter().filter(|c| c.status().is_active()) {
            let access = member.access();
            if access != current {
                output.blank();
                output.dedent();
                output.write(&format!("{}:\n", access.label()), true);
                output.indent();
                current = access;
            }
            member.generate_sip(ctx, output);
        }
        output.dedent();

        output.write("};\n", true);
        version_end(nr_ends, output);
        output.blank();
    }
}

impl GenerateSip for Namespace {
    fn generate_sip(&self, ctx: &SipContext<'_>, output: &mut Output) {
        output.blank();
        let nr_ends = version_start(&self.meta, output);

        output.write(&format!("namespace {}\n{{\n", self.name), true);
        let header_code = type_header_code(&self.typeheadercode, ctx);
        output.write_code_directive("%TypeHeaderCode", &header_code, true);
        output.blank();

        output.indent();
        generate_content(&self.content, ctx, output);
        output.dedent();

        output.write("};\n", true);
        version_end(nr_ends, output);
        output.blank();
    }
}

impl GenerateSip for Enum {
    fn generate_sip(&self, ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        let mut decl = String::from("enum");
        if !self.enumtype.is_empty() {
            decl.push(' ');
            decl.push_str(&self.enumtype);
        }
        if !self.name.is_empty() {
            decl.push(' ');
            decl.push_str(&self.name);
        }
        decl.push_str(&annotations(&self.annos));
        output.write(&format!("{decl}\n{{\n"), true);

        output.indent();
        for value in self.content.iter().filter(|v| v.meta.status.is_active()) {
            value.generate_sip(ctx, output);
        }
        output.dedent();

        output.write("};\n", true);
        version_end(nr_ends, output);
    }
}

impl GenerateSip for EnumValue {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);
        output.write(&format!("{}{},\n", self.name, annotations(&self.annos)), true);
        version_end(nr_ends, output);
    }
}

impl GenerateSip for OpaqueClass {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);
        output.write(&format!("class {}{};\n", self.name, annotations(&self.annos)), true);
        version_end(nr_ends, output);
    }
}

impl GenerateSip for Typedef {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);
        output.write(
            &format!(
                "typedef {}{};\n",
                expand_type(&self.type_name, &self.name),
                annotations(&self.annos)
            ),
            true,
        );
        version_end(nr_ends, output);
    }
}

impl GenerateSip for Variable {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        let mut decl = String::new();
        if self.is_static {
            decl.push_str("static ");
        }
        decl.push_str(&expand_type(&self.type_name, &self.name));
        decl.push_str(&annotations(&self.annos));

        if self.accesscode.is_empty() && self.getcode.is_empty() && self.setcode.is_empty() {
            output.write(&format!("{decl};\n"), true);
        } else {
            output.write(&format!("{decl} {{\n"), true);
            output.write_code_directive("%AccessCode", &self.accesscode, true);
            output.write_code_directive("%GetCode", &self.getcode, true);
            output.write_code_directive("%SetCode", &self.setcode, true);
            output.write("};\n", true);
        }

        version_end(nr_ends, output);
    }
}

impl GenerateSip for ManualCode {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        if self.is_directive() {
            // The precis is the directive itself and the body is its content.
            output.write(&format!("{}\n", self.precis), true);
            if !self.body.is_empty() {
                output.write(&with_newline(&self.body), false);
            }
            output.write("%End\n", true);
        } else {
            if self.body.is_empty() {
                output.write(&format!("{};\n", self.precis), true);
            } else {
                output.write(&with_newline(&self.body), true);
            }
            output.write_code_directive("%Docstring", &self.docstring, true);
            output.write_code_directive("%MethodCode", &self.methcode, true);
        }

        version_end(nr_ends, output);
    }
}
