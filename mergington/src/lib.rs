//! Mergington - extracurricular activity signups
//!
//! This crate provides a unified API over the activity directory and its HTTP
//! server.
//!
//! # Example
//!
//! ```ignore
//! use mergington::{app, ActivityDirectory, AppState, ServerConfig};
//!
//! let router = app(AppState::new(ActivityDirectory::seeded(), ServerConfig::default()));
//! axum::serve(listener, router).await?;
//! ```

// Re-export directory types
pub use mergington_core::directory::{ActivityDirectory, ActivityListing};
pub use mergington_core::errors::{DirectoryError, DirectoryResult, ErrorKind};
pub use mergington_core::models::{Activity, MessageResponse};

// Re-export server types
pub use mergington_server::{app, AppState, ServerConfig, ServerError, ServerResult};
