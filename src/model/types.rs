//! Normalization of C/C++ type text.

/// Normalize a C/C++ type and optionally attach a declarator name.
///
/// `long int` becomes `long`, whitespace inside template argument lists is
/// normalized and `>>` is split so older compilers accept it. The name is
/// separated from the type by a space unless the type ends in `*` or `&`,
/// and is placed inside the declarator of a function pointer.
pub fn expand_type(type_name: &str, name: &str) -> String {
    let mut s = normalize(type_name);

    if name.is_empty() {
        return s;
    }

    if s.is_empty() {
        return name.to_string();
    }

    for declarator in ["(*)", "(&)"] {
        if let Some(pos) = s.find(declarator) {
            s.insert_str(pos + 2, name);
            return s;
        }
    }

    if !s.ends_with('*') && !s.ends_with('&') {
        s.push(' ');
    }
    s.push_str(name);
    s
}

fn normalize(type_name: &str) -> String {
    let joined = type_name.split_whitespace().collect::<Vec<_>>().join(" ");
    let chars: Vec<char> = joined.chars().collect();
    let mut out = String::with_capacity(joined.len());

    for (i, &ch) in chars.iter().enumerate() {
        let next = chars.get(i + 1).copied();
        match ch {
            ' ' => {
                let prev = out.chars().last();
                if matches!(prev, Some('<') | Some(' '))
                    || matches!(next, Some('<') | Some('>') | Some(','))
                {
                    continue;
                }
                out.push(' ');
            }
            ',' => {
                out.push(',');
                if next != Some(' ') {
                    out.push(' ');
                }
            }
            _ => out.push(ch),
        }
    }

    while out.contains(">>") {
        out = out.replace(">>", "> >");
    }

    replace_word(&out, "long int", "long")
}

/// Replace whole-word occurrences of `from`.
fn replace_word(text: &str, from: &str, to: &str) -> String {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(from) {
        let before = rest[..pos].chars().last().or_else(|| result.chars().last());
        let after = rest[pos + from.len()..].chars().next();
        result.push_str(&rest[..pos]);
        if before.is_some_and(is_ident) || after.is_some_and(is_ident) {
            result.push_str(from);
        } else {
            result.push_str(to);
        }
        rest = &rest[pos + from.len()..];
    }

    result.push_str(rest);
    result
}
