pub mod models;
pub mod errors;
pub mod seed;
pub mod directory;

pub use models::*;
pub use errors::*;
pub use directory::*;
