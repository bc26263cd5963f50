pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateLineCommand, CreateLineError, CreateLineResponse};
pub use delete::{DeleteLineCommand, DeleteLineError, DeleteLineResponse};
pub use update::{UpdateLineCommand, UpdateLineError, UpdateLineResponse};
