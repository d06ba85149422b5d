//! Page state for the list, profile and header views, kept as plain values
//! with reducer functions so it can be driven and tested without a renderer.

pub mod clock;
pub mod profile;
pub mod summary;
pub mod table;

pub use clock::ClockState;
pub use profile::{ProfileAction, ProfileField, ProfileState};
pub use table::{LoadState, RowKey, TableAction, TableState};
