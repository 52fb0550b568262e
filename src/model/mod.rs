//! The in-memory shape of a MetaSIP project.
//!
//! ```text
//! Project
//! ├── headers: Vec<HeaderDirectory>
//! │   ├── platforms: Vec<Platform>
//! │   └── content: Vec<HeaderFile> ── versions: Vec<HeaderFileVersion>
//! └── modules: Vec<Module>
//!     └── content: Vec<SipFile>
//!         └── content: Vec<Code>   (Class and Namespace nest further Code)
//! ```
//!
//! Attribute groups such as tags, workflow status and access are embedded
//! as fields ([`CodeMeta`], [`Access`], ...) of the records that have them.

mod callables;
mod code;
mod groups;
mod project;
mod scopes;
mod types;

pub use callables::{
    Argument, Callable, Constructor, Destructor, Function, Method, OperatorCast,
    OperatorFunction, OperatorMethod,
};
pub use code::Code;
pub(crate) use code::each_code;
pub use groups::{Access, CodeMeta, ExtendedAccess, Status, Tagged, VersionRange};
pub use project::{
    CallSuperInit, HeaderDirectory, HeaderFile, HeaderFileVersion, Module, Platform, Project,
    SUPPORTED_PLATFORMS, SipFile,
};
pub use scopes::{
    Class, Enum, EnumValue, ManualCode, Namespace, OpaqueClass, Typedef, Variable,
};
pub use types::expand_type;
