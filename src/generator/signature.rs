//! Rendering of Python and C/C++ signatures.
//!
//! A callable is declared with its Python signature. When that differs from
//! the C/C++ one, SIP may also need the C/C++ signature in brackets after
//! the declaration, e.g. `int count() [long (int)];`.

use crate::model::{Argument, Callable, expand_type};

/// The ` /annos/` suffix, or nothing.
pub(crate) fn annotations(annos: &str) -> String {
    if annos.is_empty() {
        String::new()
    } else {
        format!(" /{annos}/")
    }
}

/// An argument as it appears in the Python signature.
pub(crate) fn python_arg(arg: &Argument) -> String {
    let type_name = if arg.pytype.is_empty() {
        &arg.type_name
    } else {
        &arg.pytype
    };
    let name = if arg.unnamed { "" } else { arg.name.as_str() };

    let mut s = expand_type(type_name, name);
    s.push_str(&annotations(&arg.annos));
    if !arg.default.is_empty() {
        s.push_str(" = ");
        s.push_str(&arg.default);
    }
    s
}

/// The parenthesised Python argument list.
pub(crate) fn python_args<C: Callable + ?Sized>(callable: &C) -> String {
    if !callable.pyargs().is_empty() {
        return callable.pyargs().to_string();
    }

    let args: Vec<String> = callable.args().iter().map(python_arg).collect();
    format!("({})", args.join(", "))
}

/// The return type used in the Python signature.
pub(crate) fn python_rtype<C: Callable + ?Sized>(callable: &C) -> &str {
    if callable.pytype().is_empty() {
        callable.rtype()
    } else {
        callable.pytype()
    }
}

/// The parenthesised C/C++ argument types.
pub(crate) fn cpp_args(args: &[Argument]) -> String {
    let types: Vec<String> = args.iter().map(|a| expand_type(&a.type_name, "")).collect();
    format!("({})", types.join(", "))
}

/// The bracketed C/C++ signature of a callable with a return type.
pub(crate) fn cpp_signature<C: Callable + ?Sized>(callable: &C) -> String {
    format!(
        " [{} {}]",
        expand_type(callable.rtype(), ""),
        cpp_args(callable.args())
    )
}
