//! Foundation types: the indenting output sink and its options.

mod options;
mod output;

pub use options::{FormatOptions, LoadOptions};
pub use output::{Output, escape};
