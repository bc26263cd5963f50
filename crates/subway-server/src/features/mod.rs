//! Feature modules implementing the subway network operations
//!
//! This module contains all feature slices following the CQRS (Command Query Responsibility
//! Segregation) pattern. Each feature is organized as a vertical slice with its own
//! commands and queries.
//!
//! # Features
//!
//! - **stations**: Station registration, lookup and removal
//! - **lines**: Line creation, renaming/recoloring, lookup and removal
//! - **sections**: Adding and removing sections on a line's path
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `types.rs` - Response types shared by the slice
//!
//! Handlers are plain async functions taking the [`Store`](crate::store::Store) and the
//! request. Commands and queries implement the mediator pattern using the `mediator`
//! crate, see [`crate::cqrs::build_mediator`].

pub mod lines;
pub mod sections;
pub mod shared;
pub mod stations;
