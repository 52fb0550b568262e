//! Generation of `.sip` files from a project.
//!
//! Every code item implements [`GenerateSip`], writing its declaration to an
//! [`Output`] wrapped in the `%If` guards of its tags. Items whose workflow
//! status is not active are left out, along with everything they contain.
//!
//! ## Usage
//!
//! ```ignore
//! use metasip::generator::generate_project;
//!
//! let written = generate_project(&project, "sip")?;
//! ```

mod callables;
mod files;
mod guards;
mod scopes;
mod signature;

use crate::base::Output;
use crate::model::{Code, SipFile, each_code};

pub use files::{generate_module, generate_project, generate_sip_file};
pub use guards::{version_end, version_start};

/// What an item is being generated for.
#[derive(Clone, Copy, Debug)]
pub struct SipContext<'a> {
    /// The `.sip` file the item belongs to. Classes and namespaces use its
    /// name for their default `%TypeHeaderCode`.
    pub sip_file: &'a SipFile,
}

impl<'a> SipContext<'a> {
    pub fn new(sip_file: &'a SipFile) -> Self {
        Self { sip_file }
    }
}

/// An item that can be written as `.sip` text.
pub trait GenerateSip {
    fn generate_sip(&self, ctx: &SipContext<'_>, output: &mut Output);
}

impl GenerateSip for Code {
    fn generate_sip(&self, ctx: &SipContext<'_>, output: &mut Output) {
        each_code!(self, item => item.generate_sip(ctx, output))
    }
}

/// Generate the active items of a `.sip` file or namespace in order.
pub(crate) fn generate_content(content: &[Code], ctx: &SipContext<'_>, output: &mut Output) {
    for code in content.iter().filter(|c| c.status().is_active()) {
        code.generate_sip(ctx, output);
    }
}

/// Generate a single item as a string, as it would appear at the top level.
pub fn sip_text(code: &Code, sip_file: &SipFile) -> String {
    let mut output = Output::sip();
    code.generate_sip(&SipContext::new(sip_file), &mut output);
    output.into_string()
}
