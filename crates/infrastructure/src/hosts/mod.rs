//! Line-oriented hosts-file plumbing around the resolver

pub mod list;
pub mod merge;
pub mod writer;

pub use list::{read_domains, ListLine};
pub use merge::merge_files;
pub use writer::write_lines;
