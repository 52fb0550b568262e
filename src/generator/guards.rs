//! `%If` guards and comments that wrap every generated item.

use crate::base::Output;
use crate::model::CodeMeta;

/// Open the guards of an item and write its comments.
///
/// One `%If` is written per version range, one for all the platforms and one
/// per feature, so the conditions nest. Returns the number of guards opened,
/// which must be passed to [`version_end`].
pub fn version_start(meta: &CodeMeta, output: &mut Output) -> usize {
    let tagged = &meta.tagged;
    let mut nr_ends = 0;

    for range in &tagged.versions {
        output.write(&format!("%If ({})\n", range.condition()), false);
        nr_ends += 1;
    }

    if !tagged.platforms.is_empty() {
        output.write(&format!("%If ({})\n", tagged.platforms.join(" || ")), false);
        nr_ends += 1;
    }

    for feature in &tagged.features {
        output.write(&format!("%If ({feature})\n"), false);
        nr_ends += 1;
    }

    write_comments(&meta.comments, output);

    nr_ends
}

/// Close the guards opened by [`version_start`].
pub fn version_end(nr_ends: usize, output: &mut Output) {
    for _ in 0..nr_ends {
        output.write("%End\n", false);
    }
}

/// Write text as `//` comment lines at the current indentation.
pub(crate) fn write_comments(comments: &str, output: &mut Output) {
    if comments.is_empty() {
        return;
    }

    for line in comments.lines() {
        if line.is_empty() {
            output.write("//\n", true);
        } else {
            output.write(&format!("// {line}\n"), true);
        }
    }
}
