//! Attribute groups shared by several entity kinds.
//!
//! Each group is embedded as a field of the entities that carry it rather
//! than inherited, so every entity spells out exactly which groups it has.

use std::fmt;

/// A range of project versions an item is limited to.
///
/// Either end may be empty, meaning the range is open on that side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VersionRange {
    pub startversion: String,
    pub endversion: String,
}

impl VersionRange {
    /// Create a range from its two (possibly empty) ends.
    pub fn new(startversion: impl Into<String>, endversion: impl Into<String>) -> Self {
        Self {
            startversion: startversion.into(),
            endversion: endversion.into(),
        }
    }

    /// Parse a single `start-end` pair. Returns `None` if there is no `-`.
    pub fn parse(text: &str) -> Option<Self> {
        let (start, end) = text.split_once('-')?;
        Some(Self::new(start.trim(), end.trim()))
    }

    /// Parse a space separated list of `start-end` pairs, skipping malformed entries.
    pub fn parse_list(text: &str) -> Vec<Self> {
        text.split_whitespace().filter_map(Self::parse).collect()
    }

    /// The condition used in a `%If` guard, e.g. `Qt_5_0_0 - Qt_6_0_0`.
    pub fn condition(&self) -> String {
        match (self.startversion.is_empty(), self.endversion.is_empty()) {
            (true, true) => "-".to_string(),
            (true, false) => format!("- {}", self.endversion),
            (false, true) => format!("{} -", self.startversion),
            (false, false) => format!("{} - {}", self.startversion, self.endversion),
        }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.startversion, self.endversion)
    }
}

/// Features, platforms and version ranges that limit where an item exists.
///
/// Each version range and each feature is a separate condition that must
/// hold. The platforms are alternatives. A feature prefixed with `!` is
/// negated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tagged {
    pub features: Vec<String>,
    pub platforms: Vec<String>,
    pub versions: Vec<VersionRange>,
}

impl Tagged {
    /// True if the item is not limited in any way.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.platforms.is_empty() && self.versions.is_empty()
    }
}

/// Workflow status of an item. Anything other than `Active` is not generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Active,
    Ignored,
    Removed,
    Todo,
    Unknown,
}

impl Status {
    /// The value stored in project files.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "",
            Status::Ignored => "ignored",
            Status::Removed => "removed",
            Status::Todo => "todo",
            Status::Unknown => "unknown",
        }
    }

    /// Parse a stored value.
    pub fn from_xml(value: &str) -> Option<Self> {
        match value {
            "" => Some(Status::Active),
            "ignored" => Some(Status::Ignored),
            "removed" => Some(Status::Removed),
            "todo" => Some(Status::Todo),
            "unknown" => Some(Status::Unknown),
            _ => None,
        }
    }

    pub fn is_active(self) -> bool {
        self == Status::Active
    }
}

/// A plain C++ access specifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Access {
    #[default]
    Public,
    Protected,
    Private,
}

impl Access {
    /// The value stored in project files (public is the empty string).
    pub fn as_str(self) -> &'static str {
        match self {
            Access::Public => "",
            Access::Protected => "protected",
            Access::Private => "private",
        }
    }

    pub fn from_xml(value: &str) -> Option<Self> {
        match value {
            "" | "public" => Some(Access::Public),
            "protected" => Some(Access::Protected),
            "private" => Some(Access::Private),
            _ => None,
        }
    }
}

/// An access specifier that also knows about Qt's signals and slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExtendedAccess {
    #[default]
    Public,
    Protected,
    Private,
    Signals,
    PublicSlots,
    ProtectedSlots,
    PrivateSlots,
}

impl ExtendedAccess {
    /// The value stored in project files (public is the empty string).
    pub fn as_str(self) -> &'static str {
        match self {
            ExtendedAccess::Public => "",
            ExtendedAccess::Protected => "protected",
            ExtendedAccess::Private => "private",
            ExtendedAccess::Signals => "signals",
            ExtendedAccess::PublicSlots => "public slots",
            ExtendedAccess::ProtectedSlots => "protected slots",
            ExtendedAccess::PrivateSlots => "private slots",
        }
    }

    pub fn from_xml(value: &str) -> Option<Self> {
        match value {
            "" | "public" => Some(ExtendedAccess::Public),
            "protected" => Some(ExtendedAccess::Protected),
            "private" => Some(ExtendedAccess::Private),
            "signals" => Some(ExtendedAccess::Signals),
            "public slots" => Some(ExtendedAccess::PublicSlots),
            "protected slots" => Some(ExtendedAccess::ProtectedSlots),
            "private slots" => Some(ExtendedAccess::PrivateSlots),
            _ => None,
        }
    }

    /// The label that opens an access block in a class body, without the colon.
    pub fn label(self) -> &'static str {
        match self {
            ExtendedAccess::Public => "public",
            other => other.as_str(),
        }
    }

    /// The plain access with any Qt qualifier removed.
    pub fn normalized(self) -> Access {
        match self {
            ExtendedAccess::Public | ExtendedAccess::PublicSlots | ExtendedAccess::Signals => {
                Access::Public
            }
            ExtendedAccess::Protected | ExtendedAccess::ProtectedSlots => Access::Protected,
            ExtendedAccess::Private | ExtendedAccess::PrivateSlots => Access::Private,
        }
    }

    pub fn is_protected(self) -> bool {
        self.normalized() == Access::Protected
    }
}

impl From<Access> for ExtendedAccess {
    fn from(access: Access) -> Self {
        match access {
            Access::Public => ExtendedAccess::Public,
            Access::Protected => ExtendedAccess::Protected,
            Access::Private => ExtendedAccess::Private,
        }
    }
}

/// The attributes every code item has: its tags, workflow status and comments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeMeta {
    pub tagged: Tagged,
    pub status: Status,
    /// Free text emitted as `//` comments before the item.
    pub comments: String,
}
