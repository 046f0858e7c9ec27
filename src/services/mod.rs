//! Business logic services
//!
//! Services sit between the thin HTTP handlers and the catalog, scaffold,
//! session and judge modules.

pub mod catalog_service;
pub mod playground_service;
pub mod session_service;

pub use catalog_service::CatalogService;
pub use playground_service::PlaygroundService;
pub use session_service::SessionService;
