//! Structural equality of code items.
//!
//! Two items are structurally equal when they declare the same C/C++ API,
//! regardless of workflow status, annotations, handwritten code or how the
//! types were spelled. The header scanner uses this to match newly parsed
//! declarations against those already in a project.

use crate::model::{
    Argument, Callable, Class, Code, Constructor, Destructor, Enum, EnumValue, Function,
    ManualCode, Method, Namespace, OpaqueClass, OperatorCast, OperatorFunction, OperatorMethod,
    Typedef, Variable, expand_type,
};

/// Equality of the parts of an item that correspond to a C/C++ declaration.
pub trait StructuralEq {
    fn structural_eq(&self, other: &Self) -> bool;
}

/// Compare two code items. Items of different kinds are never equal.
pub fn structural_equals(a: &Code, b: &Code) -> bool {
    match (a, b) {
        (Code::Class(a), Code::Class(b)) => a.structural_eq(b),
        (Code::Constructor(a), Code::Constructor(b)) => a.structural_eq(b),
        (Code::Destructor(a), Code::Destructor(b)) => a.structural_eq(b),
        (Code::Enum(a), Code::Enum(b)) => a.structural_eq(b),
        (Code::Function(a), Code::Function(b)) => a.structural_eq(b),
        (Code::ManualCode(a), Code::ManualCode(b)) => a.structural_eq(b),
        (Code::Method(a), Code::Method(b)) => a.structural_eq(b),
        (Code::Namespace(a), Code::Namespace(b)) => a.structural_eq(b),
        (Code::OpaqueClass(a), Code::OpaqueClass(b)) => a.structural_eq(b),
        (Code::OperatorCast(a), Code::OperatorCast(b)) => a.structural_eq(b),
        (Code::OperatorFunction(a), Code::OperatorFunction(b)) => a.structural_eq(b),
        (Code::OperatorMethod(a), Code::OperatorMethod(b)) => a.structural_eq(b),
        (Code::Typedef(a), Code::Typedef(b)) => a.structural_eq(b),
        (Code::Variable(a), Code::Variable(b)) => a.structural_eq(b),
        _ => false,
    }
}

fn same_type(a: &str, b: &str) -> bool {
    expand_type(a, "") == expand_type(b, "")
}

fn same_args(a: &[Argument], b: &[Argument]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.structural_eq(b))
}

/// Name, return type and argument list.
fn same_callable<C: Callable>(a: &C, b: &C) -> bool {
    a.name() == b.name() && same_type(a.rtype(), b.rtype()) && same_args(a.args(), b.args())
}

impl StructuralEq for Argument {
    fn structural_eq(&self, other: &Self) -> bool {
        same_type(&self.type_name, &other.type_name) && self.default == other.default
    }
}

impl StructuralEq for Function {
    fn structural_eq(&self, other: &Self) -> bool {
        same_callable(self, other)
    }
}

impl StructuralEq for OperatorFunction {
    fn structural_eq(&self, other: &Self) -> bool {
        same_callable(self, other)
    }
}

impl StructuralEq for Constructor {
    fn structural_eq(&self, other: &Self) -> bool {
        self.access == other.access
            && self.name == other.name
            && same_args(&self.args, &other.args)
            && self.is_explicit == other.is_explicit
    }
}

impl StructuralEq for Destructor {
    fn structural_eq(&self, other: &Self) -> bool {
        self.access == other.access
            && self.name == other.name
            && self.is_virtual == other.is_virtual
    }
}

impl StructuralEq for Method {
    fn structural_eq(&self, other: &Self) -> bool {
        // Qt's signal and slot qualifiers are not part of the C++ declaration.
        same_callable(self, other)
            && self.access.normalized() == other.access.normalized()
            && self.is_virtual == other.is_virtual
            && self.is_static == other.is_static
            && self.is_const == other.is_const
            && self.is_abstract == other.is_abstract
    }
}

impl StructuralEq for OperatorMethod {
    fn structural_eq(&self, other: &Self) -> bool {
        same_callable(self, other)
            && self.access == other.access
            && self.is_virtual == other.is_virtual
            && self.is_const == other.is_const
            && self.is_abstract == other.is_abstract
    }
}

impl StructuralEq for OperatorCast {
    fn structural_eq(&self, other: &Self) -> bool {
        self.access == other.access
            && same_type(&self.name, &other.name)
            && self.is_const == other.is_const
    }
}

impl StructuralEq for Class {
    fn structural_eq(&self, other: &Self) -> bool {
        self.access == other.access
            && self.name == other.name
            && self.is_struct == other.is_struct
            && self.bases == other.bases
    }
}

impl StructuralEq for Enum {
    fn structural_eq(&self, other: &Self) -> bool {
        self.access == other.access && self.name == other.name && self.enumtype == other.enumtype
    }
}

impl StructuralEq for EnumValue {
    fn structural_eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl StructuralEq for Namespace {
    fn structural_eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl StructuralEq for OpaqueClass {
    fn structural_eq(&self, other: &Self) -> bool {
        self.access == other.access && self.name == other.name
    }
}

impl StructuralEq for Typedef {
    fn structural_eq(&self, other: &Self) -> bool {
        self.name == other.name && same_type(&self.type_name, &other.type_name)
    }
}

impl StructuralEq for Variable {
    fn structural_eq(&self, other: &Self) -> bool {
        self.access == other.access
            && self.name == other.name
            && same_type(&self.type_name, &other.type_name)
            && self.is_static == other.is_static
    }
}

impl StructuralEq for ManualCode {
    fn structural_eq(&self, other: &Self) -> bool {
        self.access == other.access && self.precis == other.precis
    }
}
