//! Validation source strategies.
//!
//! Only the filesystem strategy exists: data files are read from a local
//! directory, one file at a time.

pub mod fs;
