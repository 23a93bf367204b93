//! Data models for the Shelf core.
//!
//! Field names serialize in camelCase so the host application can decode
//! them with its existing `Codable` types.

mod book;
mod goal;
mod responses;
mod settings;
mod stats;

pub use book::*;
pub use goal::*;
pub use responses::*;
pub use settings::*;
pub use stats::*;
