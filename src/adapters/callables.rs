//! Adapters for arguments and callable code items.

use super::attributes::{
    StartTag, read_bool, read_bool_or, read_literal, read_str, write_end, write_literal,
};
use super::groups::{
    load_access, load_extended_access, load_meta, save_meta_attributes, save_meta_subelements,
};
use super::xml::XmlElement;
use super::{LoadContext, XmlAdapter, load_children};
use crate::base::Output;
use crate::error::Result;
use crate::model::{
    Argument, Constructor, Destructor, Function, Method, OperatorCast, OperatorFunction,
    OperatorMethod,
};

fn save_args(args: &[Argument], output: &mut Output) {
    for arg in args {
        arg.save(output);
    }
}

impl XmlAdapter for Argument {
    const TAG: &'static str = "Argument";

    fn load(&mut self, element: &XmlElement, _ctx: &mut LoadContext<'_>) -> Result<()> {
        self.type_name = read_str(element, "type");
        self.name = read_str(element, "name");
        self.unnamed = read_bool_or(element, "unnamed", true);
        self.default = read_str(element, "default");
        self.pytype = read_str(element, "pytype");
        self.annos = read_str(element, "annos");
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        tag.string("type", &self.type_name);
        tag.string("name", &self.name);
        // The only boolean that defaults to true.
        if !self.unnamed {
            tag.attribute("unnamed", "0");
        }
        tag.string("default", &self.default);
        tag.string("pytype", &self.pytype);
        tag.string("annos", &self.annos);
        tag.write(output);
        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Constructor {
    const TAG: &'static str = "Constructor";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_access(element);
        self.name = read_str(element, "name");
        self.is_explicit = read_bool(element, "explicit");
        self.pyargs = read_str(element, "pyargs");
        self.annos = read_str(element, "annos");
        self.docstring = read_literal(element, "docstring")?;
        self.methcode = read_literal(element, "methcode")?;
        self.args = load_children(element, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("name", &self.name);
        tag.boolean("explicit", self.is_explicit);
        tag.string("pyargs", &self.pyargs);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "docstring", &self.docstring);
        write_literal(output, "methcode", &self.methcode);
        save_args(&self.args, output);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Destructor {
    const TAG: &'static str = "Destructor";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_access(element);
        self.name = read_str(element, "name");
        self.is_virtual = read_bool(element, "virtual");
        self.annos = read_str(element, "annos");
        self.methcode = read_literal(element, "methcode")?;
        self.virtcode = read_literal(element, "virtcode")?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("name", &self.name);
        tag.boolean("virtual", self.is_virtual);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "methcode", &self.methcode);
        write_literal(output, "virtcode", &self.virtcode);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Function {
    const TAG: &'static str = "Function";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.name = read_str(element, "name");
        self.rtype = read_str(element, "rtype");
        self.pytype = read_str(element, "pytype");
        self.pyargs = read_str(element, "pyargs");
        self.annos = read_str(element, "annos");
        self.docstring = read_literal(element, "docstring")?;
        self.methcode = read_literal(element, "methcode")?;
        self.args = load_children(element, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("name", &self.name);
        tag.string("rtype", &self.rtype);
        tag.string("pytype", &self.pytype);
        tag.string("pyargs", &self.pyargs);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "docstring", &self.docstring);
        write_literal(output, "methcode", &self.methcode);
        save_args(&self.args, output);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Method {
    const TAG: &'static str = "Method";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_extended_access(element);
        self.name = read_str(element, "name");
        self.rtype = read_str(element, "rtype");
        self.is_virtual = read_bool(element, "virtual");
        self.is_const = read_bool(element, "const");
        self.is_static = read_bool(element, "static");
        self.is_abstract = read_bool(element, "abstract");
        self.pytype = read_str(element, "pytype");
        self.pyargs = read_str(element, "pyargs");
        self.annos = read_str(element, "annos");
        self.docstring = read_literal(element, "docstring")?;
        self.methcode = read_literal(element, "methcode")?;
        self.virtcode = read_literal(element, "virtcode")?;
        self.args = load_children(element, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("name", &self.name);
        tag.string("rtype", &self.rtype);
        tag.boolean("virtual", self.is_virtual);
        tag.boolean("const", self.is_const);
        tag.boolean("static", self.is_static);
        tag.boolean("abstract", self.is_abstract);
        tag.string("pytype", &self.pytype);
        tag.string("pyargs", &self.pyargs);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "docstring", &self.docstring);
        write_literal(output, "methcode", &self.methcode);
        write_literal(output, "virtcode", &self.virtcode);
        save_args(&self.args, output);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for OperatorCast {
    const TAG: &'static str = "OperatorCast";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_access(element);
        self.name = read_str(element, "name");
        self.is_const = read_bool(element, "const");
        self.pytype = read_str(element, "pytype");
        self.annos = read_str(element, "annos");
        self.methcode = read_literal(element, "methcode")?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("name", &self.name);
        tag.boolean("const", self.is_const);
        tag.string("pytype", &self.pytype);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "methcode", &self.methcode);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for OperatorFunction {
    const TAG: &'static str = "OperatorFunction";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.name = read_str(element, "name");
        self.rtype = read_str(element, "rtype");
        self.pytype = read_str(element, "pytype");
        self.pyargs = read_str(element, "pyargs");
        self.annos = read_str(element, "annos");
        self.docstring = read_literal(element, "docstring")?;
        self.methcode = read_literal(element, "methcode")?;
        self.args = load_children(element, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("name", &self.name);
        tag.string("rtype", &self.rtype);
        tag.string("pytype", &self.pytype);
        tag.string("pyargs", &self.pyargs);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "docstring", &self.docstring);
        write_literal(output, "methcode", &self.methcode);
        save_args(&self.args, output);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for OperatorMethod {
    const TAG: &'static str = "OperatorMethod";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_access(element);
        self.name = read_str(element, "name");
        self.rtype = read_str(element, "rtype");
        self.is_virtual = read_bool(element, "virtual");
        self.is_const = read_bool(element, "const");
        self.is_abstract = read_bool(element, "abstract");
        self.pytype = read_str(element, "pytype");
        self.pyargs = read_str(element, "pyargs");
        self.annos = read_str(element, "annos");
        self.methcode = read_literal(element, "methcode")?;
        self.virtcode = read_literal(element, "virtcode")?;
        self.args = load_children(element, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("name", &self.name);
        tag.string("rtype", &self.rtype);
        tag.boolean("virtual", self.is_virtual);
        tag.boolean("const", self.is_const);
        tag.boolean("abstract", self.is_abstract);
        tag.string("pytype", &self.pytype);
        tag.string("pyargs", &self.pyargs);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "methcode", &self.methcode);
        write_literal(output, "virtcode", &self.virtcode);
        save_args(&self.args, output);

        write_end(output, Self::TAG);
    }
}
