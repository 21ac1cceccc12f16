//! Composer state.
//!
//! DESIGN
//! ======
//! All composer behavior lives in plain structs mutated by methods, so it can
//! be tested without a browser. The component keeps one `RwSignal` of
//! `ComposerState` and only translates DOM events into these calls.

pub mod attachment;
pub mod composer;
