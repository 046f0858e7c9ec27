//! AlgoPractice - Sorting Algorithm Practice Service
//!
//! This library provides the core functionality for the AlgoPractice
//! service, which lets learners study a catalog of sorting algorithms,
//! write an implementation against a generated scaffold, and have it
//! graded by an external judge.
//!
//! # Features
//!
//! - Fixed catalog of sorting algorithms addressed by URL slug
//! - Starter code in JavaScript, Python, Java and C++
//! - Editor sessions with a single-flight submit guard
//! - Judge relay with RED/YELLOW/GREEN verdict rendering
//! - Free-run playground
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Session / Catalog / Scaffold**: Domain state and generators
//! - **Judge**: Remote judge client and result classification
//! - **Models**: Domain models and wire contracts

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod scaffold;
pub mod services;
pub mod session;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
