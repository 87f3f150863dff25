//! Prelude module for the range_picker crate.
//!
//! Re-exports the derive macros from derive_more used across modules.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From, Into};
