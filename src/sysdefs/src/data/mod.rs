pub mod posix_types;

pub use posix_types::*;
