//! Stateful indenting writer shared by the XML adapters and the generator.

use super::options::FormatOptions;

/// An in-memory output sink that tracks an indentation level.
///
/// Text written with `indent == true` is prefixed with the current
/// indentation at the start of every non-empty line.
#[derive(Debug, Clone)]
pub struct Output {
    buffer: String,
    options: FormatOptions,
    level: usize,
}

impl Output {
    /// Create an empty output using the given indentation options.
    pub fn new(options: FormatOptions) -> Self {
        Self {
            buffer: String::new(),
            options,
            level: 0,
        }
    }

    /// An output configured for project files.
    pub fn xml() -> Self {
        Self::new(FormatOptions::xml())
    }

    /// An output configured for `.sip` files.
    pub fn sip() -> Self {
        Self::new(FormatOptions::sip())
    }

    /// Write some text, optionally indenting each line.
    pub fn write(&mut self, text: &str, indent: bool) {
        for line in text.split_inclusive('\n') {
            if indent && self.at_line_start() && line != "\n" {
                let prefix = self.options.indent(self.level);
                self.buffer.push_str(&prefix);
            }
            self.buffer.push_str(line);
        }
    }

    /// Write a `%Directive ... %End` block. Nothing is written for an empty body.
    pub fn write_code_directive(&mut self, name: &str, body: &str, indent: bool) {
        if body.is_empty() {
            return;
        }

        self.write(name, indent);
        self.write("\n", false);
        self.write(body, false);
        if !body.ends_with('\n') {
            self.write("\n", false);
        }
        self.write("%End\n", indent);
    }

    /// Write an empty line unless the output is empty or already ends with one.
    pub fn blank(&mut self) {
        if self.buffer.is_empty() || self.buffer.ends_with("\n\n") {
            return;
        }
        self.buffer.push('\n');
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) {
        self.level += 1;
    }

    /// Decrease the indentation level.
    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the output and return its text.
    pub fn into_string(self) -> String {
        self.buffer
    }

    fn at_line_start(&self) -> bool {
        self.buffer.is_empty() || self.buffer.ends_with('\n')
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::sip()
    }
}

/// Escape a string for use in project files.
///
/// `&`, `<` and `>` get the standard entities and `"` becomes `&quot;`.
/// Apostrophes are left alone.
pub fn escape(text: &str) -> String {
    quick_xml::escape::partial_escape(text).replace('"', "&quot;")
}
