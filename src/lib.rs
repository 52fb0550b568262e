//! # metasip
//!
//! Project model, project file I/O and `.sip` generation for SIP binding
//! projects.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generator → .sip text for items, files and modules
//! compare   → structural equality of code items
//!   ↓
//! adapters  → project file (XML) loading and saving
//!   ↓
//! model     → Project, Module, SipFile and the code items
//!   ↓
//! base      → Output sink, format and load options
//! ```

// ============================================================================
// MODULES (dependency order: base → model → adapters → compare → generator)
// ============================================================================

/// Foundation types: the indenting output sink and options
pub mod base;

/// Errors returned by loading, saving and generation
pub mod error;

/// The project model
pub mod model;

/// Project file adapters
pub mod adapters;

/// Structural equality of code items
pub mod compare;

/// `.sip` file generation
pub mod generator;

// Re-export commonly needed items
pub use adapters::{LoadContext, LoadProgress, ProjectVersion, XmlAdapter};
pub use base::{FormatOptions, LoadOptions, Output};
pub use compare::{StructuralEq, structural_equals};
pub use error::{MetasipError, Result};
pub use generator::{GenerateSip, SipContext, generate_project};
pub use model::{Code, Module, Project, SipFile};
