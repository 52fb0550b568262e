//! Error types for project loading, saving and generation.

use thiserror::Error;

/// Errors that can occur while reading, writing or generating a project.
#[derive(Debug, Error)]
pub enum MetasipError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The project file was written by a newer, unsupported schema.
    #[error("Unsupported project version: {0}")]
    UnsupportedVersion(String),

    /// Missing required element or attribute.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Invalid element or attribute value.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },
}

/// Result alias used throughout the crate.
pub type Result<T, E = MetasipError> = std::result::Result<T, E>;

impl MetasipError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a missing element error.
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            name: name.into(),
        }
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "attribute",
            name: name.into(),
        }
    }

    /// Create an invalid element error.
    pub fn invalid_element(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "element",
            message: message.into(),
        }
    }

    /// Create an invalid attribute error.
    pub fn invalid_attribute(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "attribute",
            message: message.into(),
        }
    }
}
