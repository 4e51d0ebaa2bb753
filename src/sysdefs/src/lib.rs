//! Shared definitions for the lind native posix shim.
//!
//! `constants` holds errno values and the accessors for the calling thread's
//! errno, plus platform-level constants such as the exported symbol prefix.
//! `data` holds the C types that appear in the shim's entry point signatures.

pub mod constants;
pub mod data;
