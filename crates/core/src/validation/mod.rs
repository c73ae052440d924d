//! Form validation engine.
//!
//! Single-purpose rules, the combinator that merges two of them, the
//! engine exposing every validator, the fixed selection catalogs, and
//! record-level validation of the portal forms.

pub mod catalog;
pub mod combinator;
pub mod engine;
pub mod forms;
pub mod rules;
