//! Generation of functions, methods, constructors and operators.

use super::guards::{version_end, version_start};
use super::signature::{annotations, cpp_args, cpp_signature, python_args, python_rtype};
use super::{GenerateSip, SipContext};
use crate::base::Output;
use crate::model::{
    Access, Callable, Constructor, Destructor, Function, Method, OperatorCast, OperatorFunction,
    OperatorMethod, expand_type,
};

fn write_declaration(decl: &str, output: &mut Output) {
    output.write(&format!("{decl};\n"), true);
}

/// Whether a virtual or protected member needs its C/C++ signature.
///
/// SIP generates code that calls the C/C++ member for these even when
/// there is handwritten `%MethodCode`.
fn discloses_member<C: Callable>(
    callable: &C,
    is_virtual: bool,
    is_protected: bool,
    methcode: &str,
) -> bool {
    callable.has_different_signatures() && (is_virtual || is_protected || methcode.is_empty())
}

impl GenerateSip for Function {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        let mut decl = expand_type(python_rtype(self), &self.name);
        decl.push_str(&python_args(self));
        decl.push_str(&annotations(&self.annos));
        if self.has_different_signatures() && self.methcode.is_empty() {
            decl.push_str(&cpp_signature(self));
        }
        write_declaration(&decl, output);

        output.write_code_directive("%Docstring", &self.docstring, true);
        output.write_code_directive("%MethodCode", &self.methcode, true);

        version_end(nr_ends, output);
    }
}

impl GenerateSip for Constructor {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        let mut decl = String::new();
        if self.is_explicit {
            decl.push_str("explicit ");
        }
        decl.push_str(&self.name);
        decl.push_str(&python_args(self));
        decl.push_str(&annotations(&self.annos));
        if self.has_different_signatures()
            && (self.methcode.is_empty() || self.access == Access::Protected)
        {
            decl.push_str(&format!(" [{}]", cpp_args(&self.args)));
        }
        write_declaration(&decl, output);

        output.write_code_directive("%Docstring", &self.docstring, true);
        output.write_code_directive("%MethodCode", &self.methcode, true);

        version_end(nr_ends, output);
    }
}

impl GenerateSip for Destructor {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        let mut decl = String::new();
        if self.is_virtual {
            decl.push_str("virtual ");
        }
        decl.push_str(&format!("~{}()", self.name));
        decl.push_str(&annotations(&self.annos));
        write_declaration(&decl, output);

        output.write_code_directive("%MethodCode", &self.methcode, true);
        output.write_code_directive("%VirtualCatcherCode", &self.virtcode, true);

        version_end(nr_ends, output);
    }
}

impl GenerateSip for Method {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        let mut decl = String::new();
        if self.is_virtual {
            decl.push_str("virtual ");
        }
        if self.is_static {
            decl.push_str("static ");
        }
        decl.push_str(&expand_type(python_rtype(self), &self.name));
        decl.push_str(&python_args(self));
        if self.is_const {
            decl.push_str(" const");
        }
        if self.is_abstract {
            decl.push_str(" = 0");
        }
        decl.push_str(&annotations(&self.annos));
        if discloses_member(self, self.is_virtual, self.access.is_protected(), &self.methcode) {
            decl.push_str(&cpp_signature(self));
        }
        write_declaration(&decl, output);

        output.write_code_directive("%Docstring", &self.docstring, true);
        output.write_code_directive("%MethodCode", &self.methcode, true);
        output.write_code_directive("%VirtualCatcherCode", &self.virtcode, true);

        version_end(nr_ends, output);
    }
}

impl GenerateSip for OperatorFunction {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        let mut decl = expand_type(python_rtype(self), &format!("operator{}", self.name));
        decl.push_str(&python_args(self));
        decl.push_str(&annotations(&self.annos));
        if self.has_different_signatures() && self.methcode.is_empty() {
            decl.push_str(&cpp_signature(self));
        }
        write_declaration(&decl, output);

        output.write_code_directive("%Docstring", &self.docstring, true);
        output.write_code_directive("%MethodCode", &self.methcode, true);

        version_end(nr_ends, output);
    }
}

impl GenerateSip for OperatorMethod {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        let mut decl = String::new();
        if self.is_virtual {
            decl.push_str("virtual ");
        }
        decl.push_str(&expand_type(python_rtype(self), &format!("operator{}", self.name)));
        decl.push_str(&python_args(self));
        if self.is_const {
            decl.push_str(" const");
        }
        if self.is_abstract {
            decl.push_str(" = 0");
        }
        decl.push_str(&annotations(&self.annos));
        let is_protected = self.access == Access::Protected;
        if discloses_member(self, self.is_virtual, is_protected, &self.methcode) {
            decl.push_str(&cpp_signature(self));
        }
        write_declaration(&decl, output);

        output.write_code_directive("%MethodCode", &self.methcode, true);
        output.write_code_directive("%VirtualCatcherCode", &self.virtcode, true);

        version_end(nr_ends, output);
    }
}

impl GenerateSip for OperatorCast {
    fn generate_sip(&self, _ctx: &SipContext<'_>, output: &mut Output) {
        let nr_ends = version_start(&self.meta, output);

        let mut decl = format!("operator {}()", python_rtype(self));
        if self.is_const {
            decl.push_str(" const");
        }
        decl.push_str(&annotations(&self.annos));
        if self.has_different_signatures() && self.methcode.is_empty() {
            decl.push_str(&cpp_signature(self));
        }
        write_declaration(&decl, output);

        output.write_code_directive("%MethodCode", &self.methcode, true);

        version_end(nr_ends, output);
    }
}
