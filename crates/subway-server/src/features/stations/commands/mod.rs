pub mod create;
pub mod delete;

pub use create::{CreateStationCommand, CreateStationError, CreateStationResponse};
pub use delete::{DeleteStationCommand, DeleteStationError, DeleteStationResponse};
