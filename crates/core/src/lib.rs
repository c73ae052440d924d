//! Wellness portal core: the form validation rules shared by the
//! user-management panel and the appointment pages.
//!
//! Everything here is synchronous and side-effect free apart from two
//! injected reads: the current date ([`clock::Clock`]) and the random
//! example number shown in phone errors ([`sampling::ExampleSource`]).

pub mod clock;
pub mod config;
pub mod error;
pub mod sampling;
pub mod types;
pub mod validation;

pub use validation::engine::ValidationEngine;
