//! Classes, namespaces, enums and the other non-callable code items.

use super::code::Code;
use super::groups::{Access, CodeMeta, ExtendedAccess};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Class {
    pub meta: CodeMeta,
    pub access: Access,
    pub name: String,
    /// Comma separated C++ base classes.
    pub bases: String,
    /// Replaces `bases` in the generated class when set.
    pub pybases: String,
    pub is_struct: bool,
    pub annos: String,
    pub docstring: String,
    pub typeheadercode: String,
    pub typehintcode: String,
    pub typecode: String,
    pub convtosubcode: String,
    pub convtotypecode: String,
    pub convfromtypecode: String,
    pub gctraversecode: String,
    pub gcclearcode: String,
    pub bigetbufcode: String,
    pub bireleasebufcode: String,
    pub picklecode: String,
    pub finalisationcode: String,
    /// Members in declaration order. Only member kinds (not `Function`,
    /// `Namespace` or `OperatorFunction`) survive saving and reloading.
    pub content: Vec<Code>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Namespace {
    pub meta: CodeMeta,
    pub name: String,
    pub typeheadercode: String,
    pub content: Vec<Code>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// An enum. An empty name is an anonymous enum.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enum {
    pub meta: CodeMeta,
    pub access: Access,
    pub name: String,
    /// `""`, `"class"` or `"struct"` for scoped enums.
    pub enumtype: String,
    pub annos: String,
    pub content: Vec<EnumValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumValue {
    pub meta: CodeMeta,
    pub name: String,
    pub annos: String,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A class whose definition is not exposed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpaqueClass {
    pub meta: CodeMeta,
    pub access: Access,
    pub name: String,
    pub annos: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typedef {
    pub meta: CodeMeta,
    pub type_name: String,
    pub name: String,
    pub annos: String,
}

impl Typedef {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variable {
    pub meta: CodeMeta,
    pub access: Access,
    pub name: String,
    pub type_name: String,
    pub is_static: bool,
    pub annos: String,
    pub accesscode: String,
    pub getcode: String,
    pub setcode: String,
}

/// Hand-written code placed verbatim in the generated file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualCode {
    pub meta: CodeMeta,
    pub access: ExtendedAccess,
    /// A one line summary, or a directive name if it starts with `%`.
    pub precis: String,
    pub body: String,
    pub docstring: String,
    pub methcode: String,
}

impl ManualCode {
    pub fn new(precis: impl Into<String>) -> Self {
        Self {
            precis: precis.into(),
            ..Default::default()
        }
    }

    /// A precis starting with `%` names a directive whose body is `body`.
    pub fn is_directive(&self) -> bool {
        self.precis.starts_with('%')
    }
}
