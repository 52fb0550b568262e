//! Functions, methods, constructors and their arguments.

use super::groups::{Access, CodeMeta, ExtendedAccess};

/// A function or method argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    pub type_name: String,
    pub name: String,
    /// The name is left out of the generated signature.
    pub unnamed: bool,
    pub default: String,
    /// Python type used instead of `type_name` in the Python signature.
    pub pytype: String,
    pub annos: String,
}

impl Default for Argument {
    fn default() -> Self {
        Self {
            type_name: String::new(),
            name: String::new(),
            unnamed: true,
            default: String::new(),
            pytype: String::new(),
            annos: String::new(),
        }
    }
}

impl Argument {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    /// A named argument whose name is used in the generated signature.
    pub fn named(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            unnamed: false,
            ..Default::default()
        }
    }
}

/// Everything that has a C/C++ signature which may differ from its Python one.
pub trait Callable {
    fn name(&self) -> &str;

    /// The C/C++ return type (empty for constructors).
    fn rtype(&self) -> &str;

    fn pytype(&self) -> &str;

    fn pyargs(&self) -> &str;

    fn args(&self) -> &[Argument];

    /// True if the Python signature is not the one implied by the C/C++ one.
    fn has_different_signatures(&self) -> bool {
        !self.pytype().is_empty()
            || !self.pyargs().is_empty()
            || self.args().iter().any(|a| !a.pytype.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Constructor {
    pub meta: CodeMeta,
    pub access: Access,
    pub name: String,
    pub is_explicit: bool,
    pub pyargs: String,
    pub annos: String,
    pub docstring: String,
    pub methcode: String,
    pub args: Vec<Argument>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Destructor {
    pub meta: CodeMeta,
    pub access: Access,
    pub name: String,
    pub is_virtual: bool,
    pub annos: String,
    pub methcode: String,
    pub virtcode: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Function {
    pub meta: CodeMeta,
    pub name: String,
    pub rtype: String,
    pub pytype: String,
    pub pyargs: String,
    pub annos: String,
    pub docstring: String,
    pub methcode: String,
    pub args: Vec<Argument>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Method {
    pub meta: CodeMeta,
    pub access: ExtendedAccess,
    pub name: String,
    pub rtype: String,
    pub is_virtual: bool,
    pub is_const: bool,
    pub is_static: bool,
    pub is_abstract: bool,
    pub pytype: String,
    pub pyargs: String,
    pub annos: String,
    pub docstring: String,
    pub methcode: String,
    pub virtcode: String,
    pub args: Vec<Argument>,
}

/// A cast operator. `name` is the type being cast to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorCast {
    pub meta: CodeMeta,
    pub access: Access,
    pub name: String,
    pub is_const: bool,
    pub pytype: String,
    pub annos: String,
    pub methcode: String,
}

/// A global operator. `name` is the operator symbol, e.g. `==`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorFunction {
    pub meta: CodeMeta,
    pub name: String,
    pub rtype: String,
    pub pytype: String,
    pub pyargs: String,
    pub annos: String,
    pub docstring: String,
    pub methcode: String,
    pub args: Vec<Argument>,
}

/// A member operator. `name` is the operator symbol, e.g. `+=`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorMethod {
    pub meta: CodeMeta,
    pub access: Access,
    pub name: String,
    pub rtype: String,
    pub is_virtual: bool,
    pub is_const: bool,
    pub is_abstract: bool,
    pub pytype: String,
    pub pyargs: String,
    pub annos: String,
    pub methcode: String,
    pub virtcode: String,
    pub args: Vec<Argument>,
}

macro_rules! impl_callable {
    ($ty:ty) => {
        impl Callable for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn rtype(&self) -> &str {
                &self.rtype
            }

            fn pytype(&self) -> &str {
                &self.pytype
            }

            fn pyargs(&self) -> &str {
                &self.pyargs
            }

            fn args(&self) -> &[Argument] {
                &self.args
            }
        }
    };
}

impl_callable!(Function);
impl_callable!(Method);
impl_callable!(OperatorFunction);
impl_callable!(OperatorMethod);

impl Callable for Constructor {
    fn name(&self) -> &str {
        &self.name
    }

    fn rtype(&self) -> &str {
        ""
    }

    fn pytype(&self) -> &str {
        ""
    }

    fn pyargs(&self) -> &str {
        &self.pyargs
    }

    fn args(&self) -> &[Argument] {
        &self.args
    }
}

impl Callable for OperatorCast {
    fn name(&self) -> &str {
        &self.name
    }

    fn rtype(&self) -> &str {
        &self.name
    }

    fn pytype(&self) -> &str {
        &self.pytype
    }

    fn pyargs(&self) -> &str {
        ""
    }

    fn args(&self) -> &[Argument] {
        &[]
    }
}
