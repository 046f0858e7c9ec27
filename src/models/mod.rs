//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod algorithm;
pub mod language;
pub mod submission;
pub mod verdict;

pub use algorithm::*;
pub use language::*;
pub use submission::*;
pub use verdict::*;
