//! Adapters for scopes and the remaining code items.

use super::attributes::{
    StartTag, read_bool, read_literal, read_str, write_end, write_literal,
};
use super::dispatch::{CLASS_CONTENT, SCOPE_CONTENT, load_content, save_content};
use super::groups::{
    load_access, load_extended_access, load_meta, save_meta_attributes, save_meta_subelements,
};
use super::xml::XmlElement;
use super::{LoadContext, XmlAdapter, load_children};
use crate::base::Output;
use crate::error::Result;
use crate::model::{
    Class, Enum, EnumValue, ManualCode, Namespace, OpaqueClass, Typedef, Variable,
};

impl XmlAdapter for Class {
    const TAG: &'static str = "Class";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_access(element);
        self.name = read_str(element, "name");
        self.bases = read_str(element, "bases");
        self.pybases = read_str(element, "pybases");
        self.is_struct = read_bool(element, "struct");
        self.annos = read_str(element, "annos");

        self.docstring = read_literal(element, "docstring")?;
        self.typeheadercode = read_literal(element, "typeheadercode")?;
        self.typehintcode = read_literal(element, "typehintcode")?;
        self.typecode = read_literal(element, "typecode")?;
        self.convtosubcode = read_literal(element, "convtosubcode")?;
        self.convtotypecode = read_literal(element, "convtotypecode")?;
        self.convfromtypecode = read_literal(element, "convfromtypecode")?;
        self.gctraversecode = read_literal(element, "gctraversecode")?;
        self.gcclearcode = read_literal(element, "gcclearcode")?;
        self.bigetbufcode = read_literal(element, "bigetbufcode")?;
        self.bireleasebufcode = read_literal(element, "bireleasebufcode")?;
        self.picklecode = read_literal(element, "picklecode")?;
        self.finalisationcode = read_literal(element, "finalisationcode")?;

        self.content = load_content(element, CLASS_CONTENT, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("name", &self.name);
        tag.string("bases", &self.bases);
        tag.string("pybases", &self.pybases);
        tag.boolean("struct", self.is_struct);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "docstring", &self.docstring);
        write_literal(output, "typeheadercode", &self.typeheadercode);
        write_literal(output, "typehintcode", &self.typehintcode);
        write_literal(output, "typecode", &self.typecode);
        write_literal(output, "convtosubcode", &self.convtosubcode);
        write_literal(output, "convtotypecode", &self.convtotypecode);
        write_literal(output, "convfromtypecode", &self.convfromtypecode);
        write_literal(output, "gctraversecode", &self.gctraversecode);
        write_literal(output, "gcclearcode", &self.gcclearcode);
        write_literal(output, "bigetbufcode", &self.bigetbufcode);
        write_literal(output, "bireleasebufcode", &self.bireleasebufcode);
        write_literal(output, "picklecode", &self.picklecode);
        write_literal(output, "finalisationcode", &self.finalisationcode);
        save_content(&self.content, Self::TAG, CLASS_CONTENT, output);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Namespace {
    const TAG: &'static str = "Namespace";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.name = read_str(element, "name");
        self.typeheadercode = read_literal(element, "typeheadercode")?;
        self.content = load_content(element, SCOPE_CONTENT, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("name", &self.name);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "typeheadercode", &self.typeheadercode);
        save_content(&self.content, Self::TAG, SCOPE_CONTENT, output);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Enum {
    const TAG: &'static str = "Enum";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_access(element);
        self.name = read_str(element, "name");
        self.enumtype = read_str(element, "enumtype");
        self.annos = read_str(element, "annos");
        self.content = load_children(element, ctx)?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("name", &self.name);
        tag.string("enumtype", &self.enumtype);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        for value in &self.content {
            value.save(output);
        }

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for EnumValue {
    const TAG: &'static str = "EnumValue";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.name = read_str(element, "name");
        self.annos = read_str(element, "annos");
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("name", &self.name);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for OpaqueClass {
    const TAG: &'static str = "OpaqueClass";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_access(element);
        self.name = read_str(element, "name");
        self.annos = read_str(element, "annos");
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("name", &self.name);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Typedef {
    const TAG: &'static str = "Typedef";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.type_name = read_str(element, "type");
        self.name = read_str(element, "name");
        self.annos = read_str(element, "annos");
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("type", &self.type_name);
        tag.string("name", &self.name);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for Variable {
    const TAG: &'static str = "Variable";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_access(element);
        self.name = read_str(element, "name");
        self.type_name = read_str(element, "type");
        self.is_static = read_bool(element, "static");
        self.annos = read_str(element, "annos");
        self.accesscode = read_literal(element, "accesscode")?;
        self.getcode = read_literal(element, "getcode")?;
        self.setcode = read_literal(element, "setcode")?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("name", &self.name);
        tag.string("type", &self.type_name);
        tag.boolean("static", self.is_static);
        tag.string("annos", &self.annos);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "accesscode", &self.accesscode);
        write_literal(output, "getcode", &self.getcode);
        write_literal(output, "setcode", &self.setcode);

        write_end(output, Self::TAG);
    }
}

impl XmlAdapter for ManualCode {
    const TAG: &'static str = "ManualCode";

    fn load(&mut self, element: &XmlElement, ctx: &mut LoadContext<'_>) -> Result<()> {
        self.meta = load_meta(element, ctx)?;
        self.access = load_extended_access(element);
        self.precis = read_str(element, "precis");
        self.body = read_literal(element, "body")?;
        self.docstring = read_literal(element, "docstring")?;
        self.methcode = read_literal(element, "methcode")?;
        Ok(())
    }

    fn save(&self, output: &mut Output) {
        let mut tag = StartTag::new(Self::TAG);
        save_meta_attributes(&self.meta, &mut tag);
        tag.string("access", self.access.as_str());
        tag.string("precis", &self.precis);
        tag.write(output);

        save_meta_subelements(&self.meta, output);
        write_literal(output, "body", &self.body);
        write_literal(output, "docstring", &self.docstring);
        write_literal(output, "methcode", &self.methcode);

        write_end(output, Self::TAG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::xml::parse_document;
    use crate::base::LoadOptions;
    use crate::model::{Access, Code, Function, Method, Status};

    fn load<T: XmlAdapter + Default>(text: &str) -> T {
        let element = parse_document(text).expect("parse");
        let options = LoadOptions::default();
        let mut ctx = LoadContext::new(&options);
        let mut item = T::default();
        item.load(&element, &mut ctx).expect("load");
        item
    }

    fn save<T: XmlAdapter>(item: &T) -> String {
        let mut output = Output::xml();
        item.save(&mut output);
        output.into_string()
    }

    #[test]
    fn test_typedef_minimal() {
        let typedef = Typedef::new("Foo", "int");
        let text = save(&typedef);
        assert_eq!(text, "<Typedef type=\"int\" name=\"Foo\">\n</Typedef>\n");
        assert_eq!(load::<Typedef>(&text), typedef);
    }

    #[test]
    fn test_class_skips_unknown_children() {
        let class: Class = load(
            r#"<Class name="QObject" access="protected">
                 <Literal type="typeheadercode">#include &lt;qobject.h&gt;</Literal>
                 <Frobnicator name="x"/>
                 <Function name="notAllowedHere"/>
                 <Method name="objectName" rtype="QString" const="1"/>
               </Class>"#,
        );

        assert_eq!(class.access, Access::Protected);
        assert_eq!(class.typeheadercode, "#include <qobject.h>");
        assert_eq!(class.content.len(), 1);
        assert!(matches!(&class.content[0], Code::Method(Method { is_const: true, .. })));
    }

    #[test]
    fn test_class_member_kinds_only_survive_reload() {
        let mut class = Class::new("QObject");
        class.content.push(Code::Function(Function {
            name: "qt_free".into(),
            rtype: "void".into(),
            ..Default::default()
        }));
        class.content.push(Code::Method(Method {
            name: "deleteLater".into(),
            rtype: "void".into(),
            ..Default::default()
        }));

        let text = save(&class);
        assert!(text.contains("  <Function name=\"qt_free\" rtype=\"void\">\n"));

        let loaded: Class = load(&text);
        assert_eq!(loaded.content.len(), 1);
        assert_eq!(loaded.content[0].name(), "deleteLater");
    }

    #[test]
    fn test_nested_scopes_roundtrip() {
        let mut class = Class::new("QTimer");
        class.bases = "QObject".into();
        class.content.push(Code::Enum(Enum {
            name: "TimerType".into(),
            enumtype: "int".into(),
            content: vec![EnumValue::new("PreciseTimer"), EnumValue::new("CoarseTimer")],
            ..Default::default()
        }));

        let mut namespace = Namespace::new("Qt");
        namespace.meta.status = Status::Ignored;
        namespace.content.push(Code::Class(class));
        namespace.content.push(Code::ManualCode(ManualCode::new("%TypeCode")));

        let text = save(&namespace);
        assert!(text.starts_with("<Namespace status=\"ignored\" name=\"Qt\">\n  <Class name=\"QTimer\" bases=\"QObject\">\n"));
        assert_eq!(load::<Namespace>(&text), namespace);
    }

    #[test]
    fn test_variable_and_manual_code_literals() {
        let variable = Variable {
            name: "x".into(),
            type_name: "int".into(),
            is_static: true,
            getcode: "sipPy = PyLong_FromLong(sipCpp->x);".into(),
            ..Default::default()
        };
        assert_eq!(load::<Variable>(&save(&variable)), variable);

        let mut manual = ManualCode::new("void extra()");
        manual.body = "void extra();".into();
        manual.meta.comments = "Not in the headers.".into();
        let text = save(&manual);
        let comments = text.find("type=\"comments\"").expect("comments");
        let body = text.find("type=\"body\"").expect("body");
        assert!(comments < body);
        assert_eq!(load::<ManualCode>(&text), manual);
    }
}
