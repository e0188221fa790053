//! Action rules: the modifier trait and the pipeline that applies it.
//!
//! Catalog entries implement `ActionModifier`; the pipeline decides the order
//! they run in and commits the result.

pub mod modifier;
pub mod pipeline;

pub use modifier::ActionModifier;
pub use pipeline::{apply_modifiers, commit, resolve};
