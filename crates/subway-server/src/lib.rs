//! Subway network library
//!
//! Manages a subway network: stations, lines, and the sections that join
//! stations into each line's path.
//!
//! # Overview
//!
//! - **Models**: [`models::SectionChain`] keeps a line's sections as one
//!   simple path and implements splitting, extension and merging
//! - **Store**: In-memory network shared behind an async lock
//! - **Features**: Station, line and section commands and queries
//! - **Seed**: Import of a JSON network description
//! - **Configuration**: Environment-based configuration management
//!
//! # Architecture
//!
//! The library follows a **CQRS (Command Query Responsibility Segregation)** architecture:
//!
//! - **Commands** (Write Operations): create, update and delete operations that
//!   take the store's write lock
//! - **Queries** (Read Operations): get and list operations that share the read lock
//!
//! # Example
//!
//! ```no_run
//! use subway_server::{config::Config, cqrs::build_mediator, seed, store::Store};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let store = Store::new(config.limits);
//!     if let Some(path) = config.seed.file.as_deref() {
//!         let network = seed::load(path).await?;
//!         seed::apply(&store, &network).await?;
//!     }
//!     let _mediator = build_mediator(store);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod cqrs;
pub mod error;
pub mod features;
pub mod models;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use error::{AppError, AppResult};
