//! The closed set of items that can appear in a `.sip` file, namespace or class.

use super::callables::{
    Constructor, Destructor, Function, Method, OperatorCast, OperatorFunction, OperatorMethod,
};
use super::groups::{CodeMeta, ExtendedAccess, Status};
use super::scopes::{Class, Enum, ManualCode, Namespace, OpaqueClass, Typedef, Variable};

/// A code item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Code {
    Class(Class),
    Constructor(Constructor),
    Destructor(Destructor),
    Enum(Enum),
    Function(Function),
    ManualCode(ManualCode),
    Method(Method),
    Namespace(Namespace),
    OpaqueClass(OpaqueClass),
    OperatorCast(OperatorCast),
    OperatorFunction(OperatorFunction),
    OperatorMethod(OperatorMethod),
    Typedef(Typedef),
    Variable(Variable),
}

/// Expands `$body` once per variant with `$item` bound to the inner record.
macro_rules! each_code {
    ($code:expr, $item:ident => $body:expr) => {
        match $code {
            Code::Class($item) => $body,
            Code::Constructor($item) => $body,
            Code::Destructor($item) => $body,
            Code::Enum($item) => $body,
            Code::Function($item) => $body,
            Code::ManualCode($item) => $body,
            Code::Method($item) => $body,
            Code::Namespace($item) => $body,
            Code::OpaqueClass($item) => $body,
            Code::OperatorCast($item) => $body,
            Code::OperatorFunction($item) => $body,
            Code::OperatorMethod($item) => $body,
            Code::Typedef($item) => $body,
            Code::Variable($item) => $body,
        }
    };
}

pub(crate) use each_code;

impl Code {
    /// The element tag used for the item in project files.
    pub fn tag(&self) -> &'static str {
        match self {
            Code::Class(_) => "Class",
            Code::Constructor(_) => "Constructor",
            Code::Destructor(_) => "Destructor",
            Code::Enum(_) => "Enum",
            Code::Function(_) => "Function",
            Code::ManualCode(_) => "ManualCode",
            Code::Method(_) => "Method",
            Code::Namespace(_) => "Namespace",
            Code::OpaqueClass(_) => "OpaqueClass",
            Code::OperatorCast(_) => "OperatorCast",
            Code::OperatorFunction(_) => "OperatorFunction",
            Code::OperatorMethod(_) => "OperatorMethod",
            Code::Typedef(_) => "Typedef",
            Code::Variable(_) => "Variable",
        }
    }

    pub fn meta(&self) -> &CodeMeta {
        each_code!(self, item => &item.meta)
    }

    pub fn meta_mut(&mut self) -> &mut CodeMeta {
        each_code!(self, item => &mut item.meta)
    }

    pub fn status(&self) -> Status {
        self.meta().status
    }

    /// The item's name. For manual code this is its precis.
    pub fn name(&self) -> &str {
        each_code!(self, item => item.item_name())
    }

    /// The access of the item within a class. Items without one are public.
    pub fn access(&self) -> ExtendedAccess {
        match self {
            Code::Class(item) => item.access.into(),
            Code::Constructor(item) => item.access.into(),
            Code::Destructor(item) => item.access.into(),
            Code::Enum(item) => item.access.into(),
            Code::ManualCode(item) => item.access,
            Code::Method(item) => item.access,
            Code::OpaqueClass(item) => item.access.into(),
            Code::OperatorCast(item) => item.access.into(),
            Code::OperatorMethod(item) => item.access.into(),
            Code::Variable(item) => item.access.into(),
            Code::Function(_)
            | Code::Namespace(_)
            | Code::OperatorFunction(_)
            | Code::Typedef(_) => ExtendedAccess::Public,
        }
    }

    /// The nested items of a class or namespace.
    pub fn content(&self) -> Option<&[Code]> {
        match self {
            Code::Class(item) => Some(&item.content),
            Code::Namespace(item) => Some(&item.content),
            _ => None,
        }
    }
}

/// Name accessor used by [`Code::name`]; every record except `ManualCode` has a `name`.
trait Named {
    fn item_name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),*) => {
        $(impl Named for $ty {
            fn item_name(&self) -> &str {
                &self.name
            }
        })*
    };
}

impl_named!(
    Class,
    Constructor,
    Destructor,
    Enum,
    Function,
    Method,
    Namespace,
    OpaqueClass,
    OperatorCast,
    OperatorFunction,
    OperatorMethod,
    Typedef,
    Variable
);

impl Named for ManualCode {
    fn item_name(&self) -> &str {
        &self.precis
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(impl From<$variant> for Code {
            fn from(item: $variant) -> Self {
                Code::$variant(item)
            }
        })*
    };
}

impl_from!(
    Class,
    Constructor,
    Destructor,
    Enum,
    Function,
    ManualCode,
    Method,
    Namespace,
    OpaqueClass,
    OperatorCast,
    OperatorFunction,
    OperatorMethod,
    Typedef,
    Variable
);
