//! Facade implementation submodules.
//!
//! Each submodule contains `impl Library` blocks that extend the public API
//! with one family of commands or queries. The struct itself lives in `lib.rs`.

mod builder;
mod catalog;
mod lending;
mod queries;
mod reading;
mod settings;
mod shared;

pub use builder::LibraryBuilder;
pub use shared::SharedLibrary;
