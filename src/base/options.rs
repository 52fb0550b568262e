//! Formatting and loading options

/// Indentation options for an [`Output`](super::Output)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of spaces per indentation level (or tab width if using tabs)
    pub tab_size: usize,
    /// Use spaces for indentation (false = use tabs)
    pub insert_spaces: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::sip()
    }
}

impl FormatOptions {
    /// Options used for project files.
    pub fn xml() -> Self {
        Self {
            tab_size: 2,
            insert_spaces: true,
        }
    }

    /// Options used for generated `.sip` files.
    pub fn sip() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
        }
    }

    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size * level)
        } else {
            "\t".repeat(level)
        }
    }
}

/// Options controlling how a project file is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Platform that receives the header directory settings of projects
    /// written before per-platform settings existed.
    pub legacy_platform: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            legacy_platform: "Linux".to_string(),
        }
    }
}
